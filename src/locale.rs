//! Active-language state and host document synchronization.
use tracing::{debug, info, warn};

use crate::{
    error::LocaleError,
    lang::{DocumentAttrs, Language},
};

/// The document whose `lang` and `dir` attributes follow the active language.
pub trait HostDocument {
    /// Overwrite both attributes. Must be safe to call repeatedly.
    fn apply(&mut self, attrs: &DocumentAttrs);
}

/// Owns the single active [`Language`] and keeps `D` in sync with it.
#[derive(Debug)]
pub struct LocaleState<D: HostDocument> {
    language: Language,
    document: D,
}

impl<D: HostDocument> LocaleState<D> {
    /// State at [`Language::DEFAULT`]; the document is untouched until [`sync`](Self::sync).
    pub fn new(document: D) -> Self {
        Self { language: Language::DEFAULT, document }
    }

    /// [`new`](Self::new) followed by the initial sync.
    pub fn mount(document: D) -> Self {
        let mut state = Self::new(document);
        state.sync();
        state
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn attrs(&self) -> DocumentAttrs {
        DocumentAttrs::for_language(self.language)
    }

    #[cfg(test)]
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Switch languages. Selecting the active language again is a no-op;
    /// any real change rewrites both document attributes.
    pub fn set_language(&mut self, lang: Language) {
        if lang == self.language {
            return;
        }
        info!(from = %self.language, to = %lang, dir = lang.direction().as_attr(), "language changed");
        self.language = lang;
        self.sync();
    }

    /// Switch by code. Undeclared codes leave the state and document as they were.
    pub fn set_language_code(&mut self, code: &str) -> Result<Language, LocaleError> {
        match code.parse::<Language>() {
            Ok(lang) => {
                self.set_language(lang);
                Ok(lang)
            }
            Err(e) => {
                warn!(code, "rejected language switch");
                Err(e)
            }
        }
    }

    /// Write the current attributes to the document wholesale.
    pub fn sync(&mut self) {
        let attrs = self.attrs();
        debug!(lang = attrs.lang, dir = attrs.dir.as_attr(), "sync document");
        self.document.apply(&attrs);
    }
}
