//! Error types for catalog loading and configuration parsing.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised while building a translator or reading settings.
#[derive(Debug, Error)]
pub enum Error {
    /// A catalog file exists but could not be read.
    #[error("{}: Unable to read translation catalog for locale {locale}: {source}", path.display())]
    ReadCatalog {
        /// Normalized locale the catalog was requested for
        locale: String,
        /// Location of the catalog file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A catalog directory could not be listed.
    #[error("{}: Unable to read translation catalog directory: {source}", path.display())]
    ReadCatalogDir {
        /// Directory that was listed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A catalog was found but its contents are not a valid catalog document.
    #[error("Unable to parse translation catalog for locale {locale}: {source}")]
    ParseCatalog {
        /// Normalized locale the catalog was requested for
        locale: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A color setting string is not one of the recognized values.
    #[error("Invalid color setting: {0}")]
    InvalidColorSetting(String),
}
