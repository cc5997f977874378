//! Supported languages, text direction, and the embedded catalog table.
use std::{fmt, str::FromStr};

use crate::error::LocaleError;

// Include the generated embedding table from build.rs
// Provides: pub static EMBEDDED_LANGS: &[(&str, &str)]
include!(concat!(env!("OUT_DIR"), "/lang_data.rs"));

/// A language the site ships content for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    En,
    Ar,
}

impl Language {
    /// Language active on startup. Never persisted or detected.
    pub const DEFAULT: Language = Language::En;
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    /// BCP 47 tag, also the catalog file stem under `lang/`.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Position in [`Language::ALL`].
    pub fn index(self) -> usize {
        match self {
            Language::En => 0,
            Language::Ar => 1,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Language::Ar => Direction::Rtl,
            Language::En => Direction::Ltr,
        }
    }

    pub fn is_rtl(self) -> bool {
        self.direction() == Direction::Rtl
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::DEFAULT
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Language::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| LocaleError::UnsupportedLanguage(s.to_string()))
    }
}

/// Text direction written to the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_attr(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// The complete document state kept in sync with the active language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentAttrs {
    pub lang: &'static str,
    pub dir: Direction,
}

impl DocumentAttrs {
    pub fn for_language(lang: Language) -> Self {
        Self { lang: lang.code(), dir: lang.direction() }
    }
}

/// Raw embedded JSON for a language, if the build picked one up.
pub fn embedded_source(lang: Language) -> Option<&'static str> {
    EMBEDDED_LANGS.iter().find(|(c, _)| *c == lang.code()).map(|(_, raw)| *raw)
}

/// List embedded language codes.
pub fn available_langs() -> Vec<String> {
    EMBEDDED_LANGS.iter().map(|(c, _)| (*c).to_string()).collect()
}
