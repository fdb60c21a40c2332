// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    /// A translation file exists but its content cannot be decoded.
    Malformed(String),
    /// A write was attempted against the bundled, read-only assets.
    ReadOnly(String),
    Config(String),
    InvalidLocale(String),
}

impl Error {
    /// Returns true for failures raised while reading or writing translation files.
    ///
    /// Malformed content counts as an I/O failure from the caller's point of view.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_) | Error::Malformed(_) | Error::ReadOnly(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Malformed(e) => write!(f, "Malformed Translation File: {}", e),
            Error::ReadOnly(e) => write!(f, "Read-only Location: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::InvalidLocale(e) => write!(f, "Invalid Locale: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
