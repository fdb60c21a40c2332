// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for the primary translation store.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to [`translation_dir_with_override`]
//!    (usually `Config::store_dir`)
//! 2. **Environment variable** (`LNG_LOCALE_STORE_DIR`)
//! 3. **Platform default** - via `dirs` crate
//!
//! The bundled read-only assets are searched after this directory; they have
//! no path of their own (see [`crate::store::Location::Assets`]).

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "LngLocale";

/// Sub-directory holding the `.lng` files.
const STORE_SUBDIR: &str = "i18n";

/// Environment variable to override the translation store directory.
pub const ENV_STORE_DIR: &str = "LNG_LOCALE_STORE_DIR";

/// Returns the primary translation store directory.
///
/// # Resolution Order
///
/// 1. `LNG_LOCALE_STORE_DIR` environment variable (if set and non-empty)
/// 2. Platform-specific data directory:
///    - Linux: `~/.local/share/LngLocale/i18n/`
///    - macOS: `~/Library/Application Support/LngLocale/i18n/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\LngLocale\i18n\`
///
/// Returns `None` if the data directory cannot be determined (rare edge case).
pub fn translation_dir() -> Option<PathBuf> {
    translation_dir_with_override(None)
}

/// Returns the primary translation store directory with an optional override.
///
/// # Arguments
///
/// * `override_path` - Optional path to use instead of default. Takes highest priority.
pub fn translation_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_STORE_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::data_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(STORE_SUBDIR);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_takes_priority() {
        let custom = PathBuf::from("/custom/store");
        let result = translation_dir_with_override(Some(custom.clone()));
        assert_eq!(result, Some(custom));
    }

    #[test]
    fn platform_default_ends_with_store_subdir() {
        // Only meaningful when the environment does not redirect the store.
        if std::env::var(ENV_STORE_DIR).map_or(true, |v| v.is_empty()) {
            if let Some(path) = translation_dir() {
                assert!(path.ends_with(PathBuf::from(APP_NAME).join(STORE_SUBDIR)));
            }
        }
    }
}
