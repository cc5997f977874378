//! Startup configuration.
//!
//! Read from the JSON file named by `NURDAR_SITE_CONFIG`; every field is
//! optional. The active language is deliberately not configurable: the site
//! always opens in [`crate::lang::Language::DEFAULT`].
use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const CONFIG_ENV: &str = "NURDAR_SITE_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Window title; the localized company name when unset.
    pub window_title: Option<String>,
    pub window_width: f64,
    pub window_height: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            window_title: None,
            window_width: 1280.0,
            window_height: 860.0,
        }
    }
}

impl SiteConfig {
    /// Defaults when the variable is unset; a named file must exist and parse.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
