// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support built on `.lng` translation files.
//!
//! # Features
//!
//! - Language, country and default-language fallback when loading files
//! - Lookup that returns the source text when no translation exists
//! - Collection of untranslated strings for export to translators
//! - Positional `{1}`, `{2}` placeholders

pub mod map;
pub mod translator;

pub use map::TranslationMap;
pub use translator::{substitute_placeholders, Resolution, Translator};
