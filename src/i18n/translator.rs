// SPDX-License-Identifier: MPL-2.0
//! The translation resolver.
//!
//! A [`Translator`] turns a `(language, country)` selection into one merged
//! key to text table, read from `<base>_<language>[_<country>].lng` files.
//!
//! # Resolution
//!
//! Every initialization starts from empty tables, then:
//!
//! 1. If a default language is set, `<base>_<default>.lng` is loaded.
//! 2. `<base>_<language>_<country>.lng` is chosen when a country is given and
//!    the file exists in the store directory. Otherwise the translator falls
//!    back to `<base>_<language>.lng` and the resolved country becomes empty.
//! 3. The chosen file is merged on top of the default-language entries.
//!
//! Each file is looked up in the store directory first, then in the bundled
//! assets. A file absent from both is skipped without error.
//!
//! # Missing translations
//!
//! [`Translator::get_text`] records every key it cannot translate. The miss
//! table only grows until the next initialization; it is never trimmed when
//! a key later becomes translatable, so it reflects every miss seen since
//! the tables were loaded. Long-running callers looking up unbounded sets of
//! keys should reinitialize periodically.

use super::map::TranslationMap;
use crate::config::{Config, DEFAULT_EXTENSION, MISSING_INFIX};
use crate::error::{Error, Result};
use crate::locale::Locale;
use crate::paths;
use crate::store::{FileStore, LocalStore, Location};
use std::fmt::{Display, Write as _};
use std::path::Path;

/// Outcome of the last initialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    language: String,
    country: String,
    file: String,
}

impl Resolution {
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Requested country, or empty if none was requested or its file was absent.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// File name chosen for the requested language, whether or not it existed.
    pub fn file(&self) -> &str {
        &self.file
    }
}

#[derive(Debug)]
pub struct Translator<S = LocalStore> {
    store: S,
    translation: TranslationMap,
    missing: TranslationMap,
    resolution: Resolution,
    extension: String,
    default_language: String,
}

impl Default for Translator<LocalStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator<LocalStore> {
    pub fn new() -> Self {
        Self::with_store(LocalStore)
    }

    /// A translator carrying the default language and extension from `config`.
    pub fn from_config(config: &Config) -> Self {
        let mut translator = Self::new();
        if let Some(language) = &config.default_language {
            translator.set_default_language(language.trim());
        }
        translator.set_extension(config.extension_or_default());
        translator
    }
}

impl<S: FileStore> Translator<S> {
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            translation: TranslationMap::new(),
            missing: TranslationMap::new(),
            resolution: Resolution::default(),
            extension: DEFAULT_EXTENSION.to_string(),
            default_language: String::new(),
        }
    }

    /// Initializes with the language and country of the host locale.
    pub fn initialize(&mut self, store_dir: impl AsRef<Path>, base_name: &str) -> Result<&Resolution> {
        let locale = Locale::host_or_fallback();
        self.initialize_with_country(store_dir, base_name, locale.language(), locale.country())
    }

    /// Initializes with an explicit language and no country.
    pub fn initialize_with_language(
        &mut self,
        store_dir: impl AsRef<Path>,
        base_name: &str,
        language: &str,
    ) -> Result<&Resolution> {
        self.initialize_with_country(store_dir, base_name, language, "")
    }

    /// Initializes with an explicit language and country.
    ///
    /// Pass an empty `country` to skip the country-specific file. Missing
    /// files are not errors; a file that exists but cannot be read or parsed
    /// is, and leaves whatever was merged before it in the table.
    pub fn initialize_with_country(
        &mut self,
        store_dir: impl AsRef<Path>,
        base_name: &str,
        language: &str,
        country: &str,
    ) -> Result<&Resolution> {
        self.translation.clear();
        self.missing.clear();
        let primary = Location::dir(store_dir);

        if !self.default_language.is_empty() {
            let name = self.file_name(base_name, &[self.default_language.as_str()]);
            if let Some(entries) = self.load_first(&primary, &name)? {
                self.translation.merge(entries);
            }
        }

        let mut resolved_country = country.to_string();
        let mut name = self.file_name(base_name, &[language]);
        if !country.is_empty() {
            let specific = self.file_name(base_name, &[language, country]);
            if self.store.exists(&primary, &specific) {
                name = specific;
            } else {
                tracing::debug!(file = %specific, "no country file, using language file");
                resolved_country.clear();
            }
        }

        self.resolution = Resolution {
            language: language.to_string(),
            country: resolved_country,
            file: name,
        };

        let name = self.resolution.file.clone();
        if let Some(entries) = self.load_first(&primary, &name)? {
            self.translation.merge(entries);
        }

        tracing::info!(
            language = %self.resolution.language,
            country = %self.resolution.country,
            file = %self.resolution.file,
            entries = self.translation.len(),
            "translator initialized"
        );
        Ok(&self.resolution)
    }

    /// Initializes from `config`: store directory via [`paths`], locale from
    /// the configured language or else the host.
    pub fn initialize_configured(&mut self, config: &Config, base_name: &str) -> Result<&Resolution> {
        let store_dir = paths::translation_dir_with_override(config.store_dir.clone())
            .ok_or_else(|| Error::Config("no translation store directory available".to_string()))?;
        let locale = config.locale().unwrap_or_else(Locale::host_or_fallback);
        self.initialize_with_country(store_dir, base_name, locale.language(), locale.country())
    }

    /// Reads `name` from the first location that has it.
    fn load_first(&self, primary: &Location, name: &str) -> Result<Option<TranslationMap>> {
        for location in [primary, &Location::Assets] {
            if self.store.exists(location, name) {
                let entries = self.store.read_mapping(location, name)?;
                tracing::debug!(file = %name, %location, entries = entries.len(), "loaded translation file");
                return Ok(Some(entries));
            }
        }
        tracing::debug!(file = %name, "translation file not found");
        Ok(None)
    }

    fn file_name(&self, base_name: &str, parts: &[&str]) -> String {
        format!("{}_{}{}", base_name, parts.join("_"), self.extension)
    }

    /// Returns the translation of `key`, or `key` itself when there is none.
    ///
    /// An untranslated key is added to the miss table the first time it is
    /// seen.
    ///
    /// The result borrows either the table or `key`, so the translator stays
    /// borrowed while it is alive. Call `.to_string()` to keep it longer.
    pub fn get_text<'t, 'k: 't>(&'t mut self, key: &'k str) -> &'t str {
        if let Some(text) = self.translation.get(key) {
            return text;
        }
        if !self.missing.contains_key(key) {
            tracing::debug!(key, "missing translation");
            self.missing.insert(key, key);
        }
        key
    }

    /// Like [`Translator::get_text`], then replaces `{1}`, `{2}`, ... with
    /// `args` in order. See [`substitute_placeholders`].
    pub fn get_text_with<A: Display>(&mut self, key: &str, args: &[A]) -> String {
        let text = self.get_text(key);
        substitute_placeholders(text, args)
    }

    /// Writes `<base>_<language>.lng` and `<base>_miss_<language>.lng` into
    /// `store_dir`. Empty tables are not written.
    pub fn write_translation(&self, store_dir: impl AsRef<Path>, base_name: &str) -> Result<()> {
        let location = Location::dir(store_dir);
        let language = self.resolution.language.as_str();

        if !self.translation.is_empty() {
            let name = self.file_name(base_name, &[language]);
            self.store.write_mapping(&location, &name, &self.translation)?;
            tracing::info!(file = %name, %location, entries = self.translation.len(), "wrote translations");
        }

        if !self.missing.is_empty() {
            let name = self.file_name(base_name, &[MISSING_INFIX, language]);
            self.store.write_mapping(&location, &name, &self.missing)?;
            tracing::info!(file = %name, %location, entries = self.missing.len(), "wrote missing translations");
        }
        Ok(())
    }

    pub fn translation_map(&self) -> &TranslationMap {
        &self.translation
    }

    /// Replaces the whole translation table. The miss table is untouched.
    pub fn set_translation_map(&mut self, map: TranslationMap) {
        self.translation = map;
    }

    pub fn missing_translation_map(&self) -> &TranslationMap {
        &self.missing
    }

    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    /// Empty before the first initialization.
    pub fn current_language(&self) -> &str {
        self.resolution.language()
    }

    pub fn current_country(&self) -> &str {
        self.resolution.country()
    }

    pub fn current_file(&self) -> &str {
        self.resolution.file()
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Sets the extension for later loads and writes. A missing leading dot
    /// is added; an empty extension is kept as is.
    pub fn set_extension(&mut self, extension: &str) {
        self.extension = if extension.is_empty() || extension.starts_with('.') {
            extension.to_string()
        } else {
            format!(".{}", extension)
        };
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// An empty language disables the default-language load.
    pub fn set_default_language(&mut self, language: &str) {
        self.default_language = language.to_string();
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Replaces `{1}` ... `{n}` in `text` with `args[0]` ... `args[n - 1]`.
///
/// Substitution is a single left-to-right scan: text coming from an argument
/// is never scanned again. Tokens outside `1..=n`, or written with leading
/// zeros, are left untouched.
pub fn substitute_placeholders<A: Display>(text: &str, args: &[A]) -> String {
    if args.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let digits = after.bytes().take_while(|b| b.is_ascii_digit()).count();
        let index = if digits > 0 && !after.starts_with('0') && after[digits..].starts_with('}') {
            after[..digits]
                .parse::<usize>()
                .ok()
                .filter(|i| (1..=args.len()).contains(i))
        } else {
            None
        };

        match index {
            Some(i) => {
                let _ = write!(out, "{}", args[i - 1]);
                rest = &after[digits + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
