// SPDX-License-Identifier: MPL-2.0
//! `lng_locale` resolves `.lng` translation files for an application.
//!
//! A [`Translator`] loads key to text tables for a language and optional
//! country, layering them over a default language, and records every string
//! it could not translate so the gaps can be exported and filled in.
//!
//! ```no_run
//! use lng_locale::Translator;
//!
//! let mut translator = Translator::new();
//! translator.set_default_language("en");
//! translator.initialize_with_country("/srv/app/i18n", "app", "de", "DE")?;
//!
//! let title = translator.get_text("Open file").to_string();
//! let status = translator.get_text_with("{1} of {2} files", &[3, 10]);
//!
//! translator.write_translation("/srv/app/i18n", "app")?;
//! # Ok::<(), lng_locale::error::Error>(())
//! ```

#![doc(html_root_url = "https://docs.rs/lng_locale/0.1.0")]

pub mod config;
pub mod error;
pub mod i18n;
pub mod locale;
pub mod paths;
pub mod store;

pub use error::{Error, Result};
pub use i18n::{Resolution, TranslationMap, Translator};
pub use locale::Locale;
pub use store::{FileStore, LocalStore, Location};
