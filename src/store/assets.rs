// SPDX-License-Identifier: MPL-2.0
//! Translation files bundled into the binary from `assets/i18n/`.
//!
//! This is the read-only location searched after the caller's store
//! directory.

use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub fn contains(name: &str) -> bool {
    Asset::get(name).is_some()
}

pub fn read(name: &str) -> Option<Vec<u8>> {
    Asset::get(name).map(|file| file.data.into_owned())
}
