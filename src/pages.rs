//! Page bodies. Pure presentation over the active catalog branch.
use dioxus::prelude::*;
use tracing::debug;

use crate::{
    catalog::{PageHero as HeroText, ProjectStatus},
    contact::ContactForm,
    context::use_translations,
    routes::Page,
};

/// Navigate and log. Shared by every in-page link.
pub fn go(page: &mut Signal<Page>, to: Page) {
    debug!(path = to.path(), "navigate");
    page.set(to);
}

/// Icon for a service card, keyed by the card's stable id.
pub fn service_icon(id: &str) -> &'static str {
    match id {
        "building" => "🏢",
        "civil" => "🚚",
        "electrical" => "⚡",
        "water" => "💧",
        "supervision" => "👷",
        "specialized" => "🔨",
        _ => "🏢",
    }
}

/// Backdrop for a service category, keyed by the category's stable id.
pub fn category_backdrop(id: &str) -> &'static str {
    match id {
        "construction" => "linear-gradient(135deg,#f2a93b,#8a5a12)",
        "electrical" => "linear-gradient(135deg,#3d82f7,#13306b)",
        _ => "linear-gradient(135deg,#64748b,#1e293b)",
    }
}

fn status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Completed => "badge done",
        ProjectStatus::InProgress => "badge ongoing",
    }
}

#[component]
pub fn PageHero(text: HeroText) -> Element {
    rsx! {
        section { class: "page-hero",
            div { class: "container",
                h1 { "{text.title}" }
                p { "{text.subtitle}" }
            }
        }
    }
}

#[component]
pub fn Home(page: Signal<Page>) -> Element {
    let t = use_translations();
    let mut page = page;
    rsx! {
        section { class: "hero",
            div { class: "container",
                span { class: "eyebrow", "{t.hero.tag}" }
                h1 { "{t.hero.title} " span { class: "accent", "{t.hero.title_accent}" } }
                p { class: "lead", "{t.hero.subtitle}" }
                div { class: "actions",
                    button { class: "btn primary", onclick: move |_| go(&mut page, Page::Projects), "{t.hero.view_projects}" }
                    button { class: "btn outline", onclick: move |_| go(&mut page, Page::Contact), "{t.hero.contact_us}" }
                }
            }
        }
        Stats {}
        ServicesPreview { page }
    }
}

#[component]
fn Stats() -> Element {
    let t = use_translations();
    let figures = [
        (&t.stats.capital, 1, "B+"),
        (&t.stats.projects_completed, 25, "+"),
        (&t.stats.machinery_fleet, 50, "+"),
        (&t.stats.expert_engineers, 100, "+"),
    ];
    rsx! {
        section { class: "stats",
            div { class: "container grid four",
                for (label, to, suffix) in figures {
                    div { class: "stat",
                        div { class: "stat-figure", "{to}" span { class: "suffix", "{suffix}" } }
                        p { "{label}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ServicesPreview(page: Signal<Page>) -> Element {
    let t = use_translations();
    let mut page = page;
    let s = &t.services_preview;
    rsx! {
        section { class: "services-preview",
            div { class: "container",
                div { class: "section-head",
                    span { class: "eyebrow", "{s.eyebrow}" }
                    h2 { "{s.title}" }
                    p { "{s.subtitle}" }
                }
                div { class: "grid three",
                    for card in s.cards.iter() {
                        div { key: "{card.id}", class: "card",
                            div { class: "card-icon", {service_icon(&card.id)} }
                            h3 { "{card.title}" }
                            p { "{card.description}" }
                        }
                    }
                }
                div { class: "center",
                    button { class: "btn outline", onclick: move |_| go(&mut page, Page::Services), "{s.cta}" }
                }
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    let t = use_translations();
    let a = &t.about;
    let headings = [&a.leadership, &a.md_message, &a.company_details, &a.vision, &a.objectives, &a.values];
    rsx! {
        PageHero { text: t.page_heroes.about.clone() }
        section { class: "container about",
            h2 { "{a.header}" }
            p { class: "lead", "{a.sub_header}" }
            div { class: "grid three",
                for h in headings {
                    div { class: "card", h3 { "{h}" } }
                }
            }
        }
    }
}

#[component]
pub fn Services() -> Element {
    let t = use_translations();
    let name_class = if t.language().is_rtl() { "machine-name" } else { "machine-name upper" };
    let s = &t.services_page;
    rsx! {
        PageHero { text: t.page_heroes.services.clone() }
        section { class: "container categories",
            for cat in s.categories.iter() {
                div { key: "{cat.id}", class: "category",
                    div { class: "category-image", style: format!("background:{};", category_backdrop(&cat.id)) }
                    div {
                        h2 { "{cat.category}" }
                        ul { class: "bullets",
                            for item in cat.items.iter() {
                                li { "{item}" }
                            }
                        }
                    }
                }
            }
        }
        section { class: "machinery",
            div { class: "container",
                div { class: "section-head",
                    h2 { "{s.machinery_title}" }
                    p { "{s.machinery_subtitle}" }
                }
                div { class: "grid four",
                    for m in s.machinery.iter() {
                        div { class: "machine",
                            div { class: "machine-count", "{m.count}" }
                            div { class: "{name_class}", "{m.name}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    let t = use_translations();
    // Arabic has no case; uppercasing only applies to Latin labels
    let kind_class = if t.language().is_rtl() { "kind" } else { "kind upper" };
    let pp = &t.projects_page;
    rsx! {
        PageHero { text: t.page_heroes.projects.clone() }
        section { class: "container grid three projects",
            for project in pp.projects.iter() {
                div { class: "card project",
                    div { class: "project-image",
                        span { "{t.common.project_image}" }
                        span { class: "overlay", "{t.common.view_details}" }
                    }
                    div { class: "project-meta",
                        span { class: status_class(project.status_key), {pp.statuses.label(project.status_key).to_string()} }
                        span { class: "{kind_class}", "{project.kind}" }
                    }
                    h3 { "{project.title}" }
                    p { class: "muted", "{project.location} • {project.client}" }
                    p { "{project.description}" }
                }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let t = use_translations();
    let mut state = use_signal(ContactForm::default);
    let c = &t.contact_page;
    let info = [
        ("📍", &c.cards.location_title, &c.cards.location),
        ("📞", &c.cards.phone_title, &c.cards.phones),
        ("✉", &c.cards.email_title, &c.cards.emails),
        ("🕘", &c.cards.hours_title, &c.cards.hours),
    ];
    let confirmation = state.read().confirmation(&c.form).map(str::to_string);
    rsx! {
        PageHero { text: t.page_heroes.contact.clone() }
        section { class: "container grid two contact",
            div {
                h2 { "{c.get_in_touch}" }
                p { class: "muted", "{c.intro}" }
                for (icon, title, body) in info {
                    div { class: "card info",
                        span { class: "card-icon", "{icon}" }
                        div {
                            h3 { "{title}" }
                            p { class: "multiline", "{body}" }
                        }
                    }
                }
            }
            div { class: "card form-card",
                h2 { "{c.form.title}" }
                if let Some(msg) = confirmation {
                    div { class: "notice", "{msg}" }
                }
                form {
                    onsubmit: move |e| {
                        e.prevent_default();
                        state.write().submit();
                    },
                    label { "{c.form.full_name}" }
                    input { required: true, placeholder: "{c.form.full_name_ph}", value: "{state.read().full_name}",
                        oninput: move |e| state.write().edit(|f| f.full_name = e.value()) }
                    div { class: "grid two",
                        div {
                            label { "{c.form.email}" }
                            input { required: true, r#type: "email", placeholder: "name@example.com", value: "{state.read().email}",
                                oninput: move |e| state.write().edit(|f| f.email = e.value()) }
                        }
                        div {
                            label { "{c.form.phone}" }
                            input { required: true, placeholder: "+964...", value: "{state.read().phone}",
                                oninput: move |e| state.write().edit(|f| f.phone = e.value()) }
                        }
                    }
                    label { "{c.form.message}" }
                    textarea { required: true, placeholder: "{c.form.message_ph}", value: "{state.read().message}",
                        oninput: move |e| state.write().edit(|f| f.message = e.value()) }
                    button { class: "btn primary wide", r#type: "submit", "{c.form.submit}" }
                }
            }
        }
    }
}

#[component]
pub fn NotFound(page: Signal<Page>) -> Element {
    let t = use_translations();
    let mut page = page;
    rsx! {
        section { class: "not-found",
            h1 { "404" }
            p { class: "muted", "{t.not_found.title}" }
            a { href: "#", onclick: move |e| { e.prevent_default(); go(&mut page, Page::Home); }, "{t.not_found.cta}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::Catalog, lang::Language};

    #[test]
    fn every_service_card_has_its_own_icon() {
        let catalog = Catalog::load_embedded().expect("embedded catalog");
        let icons: Vec<_> = catalog.get(Language::En).services_preview.cards.iter().map(|c| service_icon(&c.id)).collect();
        let mut unique = icons.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), icons.len());
    }

    #[test]
    fn icons_follow_id_not_position() {
        let catalog = Catalog::load_embedded().expect("embedded catalog");
        for lang in Language::ALL {
            let water = catalog.get(lang).services_preview.cards.iter().find(|c| c.id == "water").expect("water card");
            assert_eq!(service_icon(&water.id), "💧");
        }
        assert_eq!(service_icon("unknown"), "🏢");
    }

    #[test]
    fn categories_have_distinct_backdrops() {
        let catalog = Catalog::load_embedded().expect("embedded catalog");
        let cats = &catalog.get(Language::Ar).services_page.categories;
        assert_ne!(category_backdrop(&cats[0].id), category_backdrop(&cats[1].id));
    }
}
