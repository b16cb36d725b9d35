//! Error type for the RON-backed settings store.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading, saving, or hot-reloading `config.ron`.
///
/// Read and write failures carry the path they happened on so a user can
/// tell a missing config directory apart from a broken file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `config.ron` exists but could not be read.
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config directory or `config.ron` could not be written.
    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `config.ron` is not valid RON for the current settings schema.
    #[error("malformed config.ron: {0}")]
    Parse(#[source] ron::error::SpannedError),

    /// The in-memory settings could not be rendered as RON.
    #[error("could not serialize settings to RON: {0}")]
    Serialize(#[source] ron::Error),
}
