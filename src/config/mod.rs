// SPDX-License-Identifier: MPL-2.0
//! This module handles the translator preferences, including loading and saving
//! them to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use lng_locale::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.default_language = Some("en".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::{DEFAULT_EXTENSION, FALLBACK_LANGUAGE, MISSING_INFIX};

use crate::error::Result;
use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "LngLocale";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Explicit language overriding the host locale.
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    /// Language loaded first, underneath the requested one.
    #[serde(default)]
    pub default_language: Option<String>,
    #[serde(default)]
    pub extension: Option<String>,
    /// Primary translation store. See [`crate::paths`] for the default.
    #[serde(default)]
    pub store_dir: Option<PathBuf>,
}

impl Config {
    /// Returns the configured locale, or `None` when no language is set.
    ///
    /// A blank language counts as unset. The country is only honored
    /// together with a language.
    pub fn locale(&self) -> Option<Locale> {
        let language = self.language.as_deref().map(str::trim)?;
        if language.is_empty() {
            return None;
        }
        let country = self.country.as_deref().map(str::trim).unwrap_or_default();
        Some(Locale::new(language, country))
    }

    pub fn extension_or_default(&self) -> &str {
        self.extension.as_deref().unwrap_or(DEFAULT_EXTENSION)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
