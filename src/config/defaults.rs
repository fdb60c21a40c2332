// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.

// ==========================================================================
// Translation File Defaults
// ==========================================================================

/// Extension appended to every translation file name.
pub const DEFAULT_EXTENSION: &str = ".lng";

/// Infix marking the export of untranslated keys: `<base>_miss_<language>.lng`.
pub const MISSING_INFIX: &str = "miss";

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Language used when the host locale cannot be detected.
pub const FALLBACK_LANGUAGE: &str = "en";
