// SPDX-License-Identifier: MPL-2.0
//! File-store primitives used by the translator.
//!
//! The translator never touches the filesystem itself; it only sequences
//! [`FileStore::exists`] checks over the search locations and delegates reads
//! and writes. [`LocalStore`] is the production implementation: directories
//! on disk plus the bundled assets.

pub mod assets;
pub mod properties;

use crate::error::{Error, Result};
use crate::i18n::TranslationMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A place a translation file can live.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    /// A caller-specified directory. Readable and writable.
    Dir(PathBuf),
    /// Files compiled into the binary. Read-only.
    Assets,
}

impl Location {
    pub fn dir(path: impl AsRef<Path>) -> Self {
        Location::Dir(path.as_ref().to_path_buf())
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Dir(path) => write!(f, "{}", path.display()),
            Location::Assets => write!(f, "<bundled assets>"),
        }
    }
}

/// Existence, read and write primitives for key-value translation files.
pub trait FileStore {
    fn exists(&self, location: &Location, name: &str) -> bool;

    /// Reads an ordered mapping. Malformed content is [`Error::Malformed`].
    fn read_mapping(&self, location: &Location, name: &str) -> Result<TranslationMap>;

    fn write_mapping(&self, location: &Location, name: &str, map: &TranslationMap) -> Result<()>;
}

/// Filesystem directories plus the bundled assets.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl FileStore for LocalStore {
    fn exists(&self, location: &Location, name: &str) -> bool {
        match location {
            Location::Dir(dir) => dir.join(name).is_file(),
            Location::Assets => assets::contains(name),
        }
    }

    fn read_mapping(&self, location: &Location, name: &str) -> Result<TranslationMap> {
        let bytes = match location {
            Location::Dir(dir) => fs::read(dir.join(name))?,
            Location::Assets => assets::read(name)
                .ok_or_else(|| Error::Io(format!("bundled file not found: {}", name)))?,
        };
        properties::parse(&properties::decode_bytes(&bytes), name)
    }

    fn write_mapping(&self, location: &Location, name: &str, map: &TranslationMap) -> Result<()> {
        let Location::Dir(dir) = location else {
            return Err(Error::ReadOnly(format!("cannot write {} to {}", name, location)));
        };
        fs::create_dir_all(dir)?;
        fs::write(dir.join(name), properties::render(map))?;
        Ok(())
    }
}
