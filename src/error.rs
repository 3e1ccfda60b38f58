//! Error types for gallows
//!
//! Dictionary loading has its own error so it can travel through the
//! runtime channel and be shown on the error screen.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce a playable dictionary
#[derive(Error, Debug)]
pub enum DictionaryLoadError {
    /// Dictionary file could not be read
    #[error("could not read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Contents were not a JSON object of word -> definition
    #[error("malformed dictionary: {0}")]
    Parse(#[from] serde_json::Error),

    /// No embedded dictionary under that name
    #[error("unknown dictionary bundle '{0}'")]
    UnknownBundle(String),

    /// Every entry was filtered out
    #[error("dictionary has no playable words")]
    NoPlayableWords,
}

/// Top-level application errors
#[derive(Error, Debug)]
pub enum GallowsError {
    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryLoadError),

    /// Round history database error
    #[error("History error: {0}")]
    History(#[from] rusqlite::Error),

    /// State directory (history, log) could not be created
    #[error("could not create state directory {path}: {source}")]
    StateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GallowsError>;
