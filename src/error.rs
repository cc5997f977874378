//! Error types for the catalog and locale layers.
use thiserror::Error;

/// Catalog authoring defects. Surfaced at load time, never recovered from.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no embedded catalog for language `{0}`")]
    MissingLanguage(&'static str),
    #[error("catalog `{lang}` does not match the schema: {source}")]
    Parse {
        lang: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog `{lang}` diverges from `{reference}` at {path}: expected {expected}, found {found}")]
    ShapeMismatch {
        lang: &'static str,
        reference: &'static str,
        path: String,
        expected: String,
        found: String,
    },
    #[error("key `{path}` not present in catalog `{lang}`")]
    MissingKey { lang: &'static str, path: String },
}

/// Caller errors against the locale state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocaleError {
    #[error("unsupported language `{0}`")]
    UnsupportedLanguage(String),
}
