// SPDX-License-Identifier: MPL-2.0
//! Host locale detection and `(language, country)` selection.
//!
//! Translation files are addressed by a lowercase language code and an
//! optional uppercase country code, so a [`Locale`] keeps exactly those two
//! parts and drops scripts and variants.

use crate::config::FALLBACK_LANGUAGE;
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    country: String,
}

impl Locale {
    /// Builds a locale from raw codes without validation.
    ///
    /// Pass an empty `country` for a language-only locale.
    pub fn new(language: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            country: country.into(),
        }
    }

    pub fn language_only(language: impl Into<String>) -> Self {
        Self::new(language, String::new())
    }

    /// Parses `de`, `de-DE`, `de_DE` and POSIX forms such as `de_DE.UTF-8@euro`.
    pub fn parse(tag: &str) -> Result<Self> {
        let trimmed = tag.trim();
        let stripped = trimmed
            .split(['.', '@'])
            .next()
            .unwrap_or_default();
        if stripped.is_empty() || stripped.eq_ignore_ascii_case("C") || stripped.eq_ignore_ascii_case("POSIX") {
            return Err(Error::InvalidLocale(tag.to_string()));
        }

        let langid: LanguageIdentifier = stripped
            .parse()
            .map_err(|_| Error::InvalidLocale(tag.to_string()))?;
        if langid.language.is_empty() {
            return Err(Error::InvalidLocale(tag.to_string()));
        }

        Ok(Self {
            language: langid.language.as_str().to_string(),
            country: langid
                .region
                .map(|region| region.as_str().to_string())
                .unwrap_or_default(),
        })
    }

    /// Reads the operating system locale.
    ///
    /// Returns `None` when the OS reports no locale or one that is not a
    /// language tag (e.g. `C`).
    pub fn from_host() -> Option<Self> {
        let raw = sys_locale::get_locale()?;
        match Self::parse(&raw) {
            Ok(locale) => Some(locale),
            Err(err) => {
                tracing::debug!(locale = %raw, error = %err, "host locale not usable");
                None
            }
        }
    }

    /// Like [`Locale::from_host`], falling back to [`FALLBACK_LANGUAGE`].
    pub fn host_or_fallback() -> Self {
        Self::from_host().unwrap_or_else(|| {
            tracing::warn!(fallback = FALLBACK_LANGUAGE, "host locale undetectable");
            Self::language_only(FALLBACK_LANGUAGE)
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Country code, empty when the locale is language-only.
    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn has_country(&self) -> bool {
        !self.country.is_empty()
    }

    /// `de_DE`, or `de` for a language-only locale.
    pub fn iso_code(&self) -> String {
        self.to_string()
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.country.is_empty() {
            write!(f, "{}", self.language)
        } else {
            write!(f, "{}_{}", self.language, self.country)
        }
    }
}
