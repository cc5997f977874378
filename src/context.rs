//! Dioxus wiring for the locale state and catalog.
use std::{ops::Deref, sync::Arc};

use dioxus::prelude::*;
use tracing::warn;

use crate::{
    catalog::{Catalog, Translations},
    error::LocaleError,
    lang::{DocumentAttrs, Language},
    locale::{HostDocument, LocaleState},
};

/// Writes `lang`/`dir` onto the webview's root element.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebviewDocument;

impl HostDocument for WebviewDocument {
    fn apply(&mut self, attrs: &DocumentAttrs) {
        let _ = dioxus::document::eval(&sync_script(attrs));
    }
}

fn sync_script(attrs: &DocumentAttrs) -> String {
    format!(
        "document.documentElement.lang = {:?}; document.documentElement.dir = {:?};",
        attrs.lang,
        attrs.dir.as_attr()
    )
}

type SharedLocale = Signal<LocaleState<WebviewDocument>>;

/// Installs the locale state for everything below it and syncs the document on mount.
#[component]
pub fn LocaleProvider(children: Element) -> Element {
    use_context_provider::<SharedLocale>(|| Signal::new(LocaleState::mount(WebviewDocument)));
    rsx! { {children} }
}

/// Handle to the active language. Cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct LocaleHandle {
    state: SharedLocale,
}

impl LocaleHandle {
    pub fn language(&self) -> Language {
        self.state.read().language()
    }

    /// Switch by code; rejected codes are logged by [`LocaleState`] and change nothing.
    pub fn set_language_code(&mut self, code: &str) -> Result<Language, LocaleError> {
        let current = self.state.peek().language();
        if code.parse::<Language>().ok() == Some(current) {
            return Ok(current);
        }
        self.state.write().set_language_code(code)
    }
}

/// Locale access for components. Panics outside [`LocaleProvider`].
pub fn use_locale() -> LocaleHandle {
    match try_use_context::<SharedLocale>() {
        Some(state) => LocaleHandle { state },
        None => panic!("use_locale must be called inside LocaleProvider"),
    }
}

/// The active language's content. Re-renders the caller on language change.
pub fn use_translations() -> Localized {
    let catalog = use_context::<Arc<Catalog>>();
    let lang = use_locale().language();
    Localized { catalog, lang }
}

/// A catalog branch pinned to one language.
#[derive(Clone)]
pub struct Localized {
    catalog: Arc<Catalog>,
    lang: Language,
}

impl Localized {
    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// String at a dotted path. Falls back to the path itself, which a
    /// loaded catalog never needs for the keys the views ask for.
    pub fn text<'a>(&'a self, path: &'a str) -> &'a str {
        self.catalog.text(self.lang, path).unwrap_or_else(|err| {
            warn!(%err, "untranslated key");
            path
        })
    }
}

impl Deref for Localized {
    type Target = Translations;

    fn deref(&self) -> &Translations {
        self.catalog.get(self.lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Direction;
    use dioxus::dioxus_core::VirtualDom;
    use pretty_assertions::assert_eq;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn sync_script_sets_both_attributes() {
        let js = sync_script(&DocumentAttrs { lang: "ar", dir: Direction::Rtl });
        assert_eq!(
            js,
            "document.documentElement.lang = \"ar\"; document.documentElement.dir = \"rtl\";"
        );
    }

    #[test]
    fn localized_derefs_to_branch() {
        let catalog = Arc::new(Catalog::load_embedded().expect("embedded catalog"));
        let t = Localized { catalog, lang: Language::Ar };
        assert_eq!(t.nav.home, "الرئيسية");
        assert_eq!(t.language(), Language::Ar);
    }

    #[test]
    fn localized_text_resolves_dotted_paths() {
        let catalog = Arc::new(Catalog::load_embedded().expect("embedded catalog"));
        let t = Localized { catalog, lang: Language::En };
        assert_eq!(t.text("nav.home"), "Home");
        assert_eq!(t.text("nav.careers"), "nav.careers");
    }

    /// Values observed by components rendered inside a test dom.
    #[derive(Clone, Default)]
    struct Seen(Rc<RefCell<Vec<String>>>);

    fn embedded() -> Arc<Catalog> {
        Arc::new(Catalog::load_embedded().expect("embedded catalog"))
    }

    #[test]
    #[should_panic(expected = "use_locale must be called inside LocaleProvider")]
    fn use_locale_outside_provider_panics() {
        fn bare() -> Element {
            let _ = use_locale();
            rsx! {}
        }
        let mut dom = VirtualDom::new(bare).with_root_context(embedded());
        dom.rebuild_in_place();
    }

    #[test]
    fn handle_switch_reaches_translations() {
        #[component]
        fn Switcher() -> Element {
            let seen = use_context::<Seen>();
            let mut locale = use_locale();
            seen.0.borrow_mut().push(use_translations().nav.home.clone());
            let log = seen.clone();
            use_hook(move || {
                let rejected = locale.set_language_code("fr").is_err();
                log.0.borrow_mut().push(format!("fr rejected: {rejected}"));
                log.0.borrow_mut().push(locale.language().code().to_string());
                let _ = locale.set_language_code("ar");
            });
            seen.0.borrow_mut().push(use_translations().nav.home.clone());
            rsx! {}
        }
        fn root() -> Element {
            rsx! { LocaleProvider { Switcher {} } }
        }

        let seen = Seen::default();
        let mut dom = VirtualDom::new(root)
            .with_root_context(embedded())
            .with_root_context(seen.clone());
        dom.rebuild_in_place();
        assert_eq!(
            *seen.0.borrow(),
            vec!["Home".to_string(), "fr rejected: true".into(), "en".into(), "الرئيسية".into()]
        );
    }
}
