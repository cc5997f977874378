//! Dioxus desktop shell: window, global styles, navbar, footer, page switch.
use crate::{
    catalog::Catalog,
    config::SiteConfig,
    context::{use_locale, use_translations, LocaleProvider},
    lang::Language,
    pages::{self, go},
    routes::Page,
};
use chrono::{Datelike, Local};
use dioxus::prelude::*;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use std::{any::Any, sync::Arc};
use tracing::info;

// Site theme (design tokens + logical properties so RTL mirrors without overrides)
const SITE_CSS: &str = r#":root {
    --color-bg: #f8fafc;
    --color-panel: #ffffff;
    --color-dark: #0f172a;
    --color-dark-alt: #1e293b;
    --color-border: #e2e8f0;
    --color-text: #0f172a;
    --color-text-dim: #64748b;
    --color-primary: #d97706;
    --color-primary-hover: #b45309;
    --radius-sm: 6px;
    --radius-lg: 12px;
    --transition: .2s cubic-bezier(.4,0,.2,1);
}
html,body { margin:0; background:var(--color-bg); color:var(--color-text); font-family:'Inter','Segoe UI','Noto Sans Arabic',Arial,sans-serif; -webkit-font-smoothing:antialiased; }
*,*::before,*::after { box-sizing:border-box; }
.container { max-width:1180px; margin:0 auto; padding:0 20px; }
.grid { display:grid; gap:24px; }
.grid.two { grid-template-columns:repeat(2,minmax(0,1fr)); }
.grid.three { grid-template-columns:repeat(3,minmax(0,1fr)); }
.grid.four { grid-template-columns:repeat(4,minmax(0,1fr)); }
.center { text-align:center; margin-top:40px; }
.muted { color:var(--color-text-dim); }
.upper { text-transform:uppercase; letter-spacing:.06em; }
.multiline { white-space:pre-line; }
.lead { font-size:18px; color:var(--color-text-dim); }
.eyebrow { color:var(--color-primary); font-weight:600; font-size:13px; text-transform:uppercase; letter-spacing:.1em; }
.btn { border:2px solid transparent; border-radius:var(--radius-sm); padding:10px 22px; font-size:15px; font-weight:600; cursor:pointer; transition:var(--transition); font-family:inherit; }
.btn.primary { background:var(--color-primary); color:#fff; }
.btn.primary:hover { background:var(--color-primary-hover); }
.btn.outline { background:#fff; color:var(--color-primary); border-color:var(--color-primary); }
.btn.outline:hover { background:var(--color-primary); color:#fff; }
.btn.wide { width:100%; }
.navbar { position:sticky; top:0; z-index:10; background:var(--color-panel); border-block-end:1px solid var(--color-border); }
.navbar .container { display:flex; align-items:center; gap:24px; height:68px; }
.brand { display:flex; flex-direction:column; line-height:1.1; cursor:pointer; }
.brand strong { font-size:18px; }
.brand small { font-size:11px; color:var(--color-text-dim); letter-spacing:.12em; }
.nav-links { display:flex; gap:18px; margin-inline-start:auto; }
.nav-link { color:var(--color-text); text-decoration:none; font-weight:500; }
.nav-link.active,.nav-link:hover { color:var(--color-primary); }
select { background:var(--color-panel); border:1px solid var(--color-border); border-radius:var(--radius-sm); padding:6px 10px; font-family:inherit; }
.hero { background:linear-gradient(120deg,var(--color-dark),var(--color-dark-alt)); color:#fff; padding:110px 0; }
.hero h1 { font-size:52px; margin:16px 0; }
.hero .accent { color:var(--color-primary); }
.hero .lead { color:#cbd5e1; max-width:640px; }
.actions { display:flex; gap:14px; margin-top:28px; }
.page-hero { background:var(--color-dark); color:#fff; padding:72px 0; }
.page-hero h1 { margin:0 0 10px 0; font-size:40px; }
.page-hero p { margin:0; color:#cbd5e1; }
.stats { background:var(--color-primary); color:#fff; padding:56px 0; text-align:center; }
.stat-figure { font-size:44px; font-weight:700; }
.stat-figure .suffix { font-size:24px; opacity:.75; margin-inline-start:4px; }
.stat p { text-transform:uppercase; letter-spacing:.08em; opacity:.85; }
.services-preview,.about,.categories,.projects,.contact { padding:72px 20px; }
.section-head { text-align:center; max-width:760px; margin:0 auto 48px auto; }
.card { background:var(--color-panel); border:1px solid var(--color-border); border-radius:var(--radius-lg); padding:22px; transition:var(--transition); }
.card:hover { box-shadow:0 10px 30px rgba(15,23,42,.08); transform:translateY(-2px); }
.card-icon { font-size:26px; display:inline-flex; width:48px; height:48px; align-items:center; justify-content:center; background:rgba(217,119,6,.1); border-radius:var(--radius-sm); }
.card.info { display:flex; gap:16px; align-items:flex-start; margin-top:16px; }
.category { display:grid; grid-template-columns:1fr 1fr; gap:48px; align-items:center; margin-bottom:72px; }
.category-image { height:360px; border-radius:var(--radius-lg); }
.bullets li { margin:10px 0; color:var(--color-text-dim); font-size:17px; }
.machinery { background:var(--color-dark); color:#fff; padding:72px 0; }
.machinery .section-head p { color:#94a3b8; }
.machine { background:var(--color-dark-alt); border:1px solid #334155; border-radius:var(--radius-sm); padding:22px; }
.machine-count { font-size:30px; font-weight:700; color:var(--color-primary); }
.machine-name { font-size:14px; color:#cbd5e1; }
.project-image { height:180px; margin:-22px -22px 16px -22px; background:#cbd5e1; border-radius:var(--radius-lg) var(--radius-lg) 0 0; display:grid; place-items:center; position:relative; color:#475569; font-weight:600; }
.project-image .overlay { position:absolute; inset:0; display:grid; place-items:center; background:rgba(217,119,6,.85); color:#fff; opacity:0; transition:var(--transition); border-radius:inherit; }
.project-image:hover .overlay { opacity:1; }
.project-meta { display:flex; justify-content:space-between; align-items:center; }
.badge { font-size:12px; padding:3px 10px; border-radius:999px; font-weight:600; }
.badge.done { background:var(--color-primary); color:#fff; }
.badge.ongoing { background:var(--color-border); color:var(--color-text); }
.kind { font-size:12px; color:var(--color-primary); font-weight:600; }
.form-card label { display:block; font-size:14px; font-weight:600; margin:14px 0 6px 0; }
.form-card input,.form-card textarea { width:100%; border:1px solid var(--color-border); border-radius:var(--radius-sm); padding:10px 12px; font-family:inherit; font-size:14px; }
.form-card textarea { min-height:120px; }
.form-card .btn { margin-top:20px; }
.notice { background:#ecfdf5; border:1px solid #a7f3d0; color:#065f46; border-radius:var(--radius-sm); padding:10px 14px; }
.not-found { min-height:60vh; display:grid; place-content:center; text-align:center; }
.not-found a { color:var(--color-primary); }
.footer { background:var(--color-dark); color:#e2e8f0; padding:64px 0 28px 0; }
.footer h3,.footer h4 { color:#fff; }
.footer ul { list-style:none; padding:0; margin:0; }
.footer li { margin:8px 0; font-size:14px; }
.footer a { color:inherit; text-decoration:none; cursor:pointer; }
.footer a:hover { color:var(--color-primary); }
.footer-bottom { border-block-start:1px solid var(--color-dark-alt); margin-top:40px; padding-top:24px; display:flex; justify-content:space-between; font-size:12px; color:#64748b; }
.footer-bottom .links { display:flex; gap:22px; }
"#;

/// Window title fixed by configuration; `None` follows the active language.
#[derive(Clone)]
struct FixedTitle(Option<String>);

/// Launch the desktop application.
pub fn run(config: SiteConfig, catalog: Catalog) -> anyhow::Result<()> {
    let catalog = Arc::new(catalog);
    let initial_title = config
        .window_title
        .clone()
        .unwrap_or_else(|| catalog.get(Language::DEFAULT).common.company_name.clone());
    info!(title = %initial_title, width = config.window_width, height = config.window_height, "launching site window");
    let window = WindowBuilder::new()
        .with_title(initial_title)
        .with_inner_size(LogicalSize::new(config.window_width, config.window_height));
    let fixed = config.window_title.clone();
    let contexts: Vec<Box<dyn Fn() -> Box<dyn Any> + Send + Sync>> = vec![
        Box::new(move || Box::new(catalog.clone()) as Box<dyn Any>),
        Box::new(move || Box::new(FixedTitle(fixed.clone())) as Box<dyn Any>),
    ];
    dioxus_desktop::launch::launch(
        app,
        contexts,
        vec![Box::new(Config::default().with_window(window))],
    );
}

/// Root component: global styles and the locale scope.
fn app() -> Element {
    rsx! {
        style { {SITE_CSS} }
        LocaleProvider { Site {} }
    }
}

/// Everything inside the locale scope: chrome plus the current page.
#[component]
fn Site() -> Element {
    let locale = use_locale();
    let t = use_translations();
    let page = use_signal(|| Page::Home);

    // Window title follows the language unless configured
    let window = dioxus_desktop::use_window();
    let fixed = use_context::<FixedTitle>();
    {
        let t = t.clone();
        use_effect(move || {
            let lang = locale.language();
            let title = fixed.0.clone().unwrap_or_else(|| t.catalog().get(lang).common.company_name.clone());
            window.set_title(&title);
        });
    }

    rsx! {
        Navbar { page }
        main {
            {match page() {
                Page::Home => rsx!(pages::Home { page }),
                Page::About => rsx!(pages::About {}),
                Page::Services => rsx!(pages::Services {}),
                Page::Projects => rsx!(pages::Projects {}),
                Page::Contact => rsx!(pages::Contact {}),
                Page::NotFound => rsx!(pages::NotFound { page }),
            }}
        }
        Footer { page }
    }
}

/// Navbar entries: catalog key of the label and the page path.
const NAV_ITEMS: [(&str, &str); 5] = [
    ("nav.home", "/"),
    ("nav.about", "/about"),
    ("nav.services", "/services"),
    ("nav.projects", "/projects"),
    ("nav.contact", "/contact"),
];

#[component]
fn NavLink(page: Signal<Page>, href: &'static str, label: String) -> Element {
    let mut page = page;
    let target = Page::from_path(href);
    let class = if page() == target { "nav-link active" } else { "nav-link" };
    rsx! {
        a { class: "{class}", href: "{href}",
            onclick: move |e| { e.prevent_default(); go(&mut page, target); },
            "{label}"
        }
    }
}

#[component]
fn Navbar(page: Signal<Page>) -> Element {
    let mut locale = use_locale();
    let t = use_translations();
    let mut page = page;
    let current = t.language().code();
    rsx! {
        header { class: "navbar",
            div { class: "container",
                div { class: "brand", onclick: move |_| go(&mut page, Page::Home),
                    strong { "{t.common.company_name}" }
                    small { "{t.common.company_tagline}" }
                }
                nav { class: "nav-links",
                    for (key, href) in NAV_ITEMS {
                        NavLink { key: "{href}", page, href, label: t.text(key).to_string() }
                    }
                }
                select { value: "{current}", oninput: move |e| {
                        // rejected codes are logged and leave the locale as it was
                        let _ = locale.set_language_code(&e.value());
                    },
                    for lang in t.catalog().languages() {
                        option { value: lang.code(), selected: lang.code() == current, {t.catalog().lang_display(*lang).to_string()} }
                    }
                }
                button { class: "btn primary", onclick: move |_| go(&mut page, Page::Contact), "{t.common.get_quote}" }
            }
        }
    }
}

#[component]
fn Footer(page: Signal<Page>) -> Element {
    let t = use_translations();
    let f = &t.footer;
    let mut page = page;
    let mut location = t.contact_page.cards.location.lines();
    let (loc1, loc2) = (location.next().unwrap_or_default(), location.next().unwrap_or_default());
    let links = [
        (Page::About, &f.links.about),
        (Page::Services, &f.links.services),
        (Page::Projects, &f.links.projects),
        (Page::Contact, &f.links.contact),
    ];
    rsx! {
        footer { class: "footer",
            div { class: "container grid four",
                div {
                    h3 { "{t.common.company_name}" }
                    p { class: "muted", "{f.about}" }
                }
                div {
                    h4 { "{f.quick_links}" }
                    ul {
                        for (target, label) in links {
                            li { a { onclick: move |_| go(&mut page, target), "{label}" } }
                        }
                    }
                }
                div {
                    h4 { "{f.core_services}" }
                    ul {
                        for bullet in f.service_bullets.iter() {
                            li { class: "muted", "{bullet}" }
                        }
                    }
                }
                div {
                    h4 { "{f.contact}" }
                    ul {
                        li { "📍 {loc1}" br {} "{loc2}" }
                        li { a { href: "tel:+9647728460390", "📞 +964 772 846 0390" } }
                        li { a { href: "mailto:companyemaar@gmail.com", "✉ companyemaar@gmail.com" } }
                    }
                }
            }
            div { class: "container footer-bottom",
                p { {copyright_line(Local::now().year(), &t.common.company_name, &f.rights)} }
                div { class: "links",
                    a { href: "#", "{f.privacy}" }
                    a { href: "#", "{f.terms}" }
                }
            }
        }
    }
}

fn copyright_line(year: i32, company: &str, rights: &str) -> String {
    format!("© {year} {company}. {rights}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_year_and_company() {
        let catalog = Catalog::load_embedded().expect("embedded catalog");
        let t = catalog.get(Language::Ar);
        let line = copyright_line(2026, &t.common.company_name, &t.footer.rights);
        assert!(line.starts_with("© 2026 "));
        assert!(line.contains(&t.common.company_name));
        assert!(line.ends_with(&t.footer.rights));
    }

    #[test]
    fn nav_items_resolve_in_every_language() {
        let catalog = Catalog::load_embedded().expect("embedded catalog");
        for lang in Language::ALL {
            for (key, href) in NAV_ITEMS {
                assert!(catalog.text(lang, key).is_ok(), "{key} missing for {lang}");
                assert_ne!(Page::from_path(href), Page::NotFound, "{href}");
            }
        }
        assert_eq!(catalog.text(Language::En, NAV_ITEMS[3].0).unwrap(), "Projects");
    }
}
