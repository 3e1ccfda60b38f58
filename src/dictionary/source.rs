use crate::dictionary::core::{Dictionary, WordFilter};
use crate::error::DictionaryLoadError;
use clap::ValueEnum;
use include_dir::{include_dir, Dir};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

static DICT_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/dict");

/// Dictionaries compiled into the binary
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, ValueEnum, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Bundle {
    English,
    Animals,
}

/// Somewhere a dictionary can be loaded from
pub trait DictionarySource: Send + 'static {
    /// Human-readable origin, used in logs and the loading screen
    fn describe(&self) -> String;

    fn load(&self, filter: &WordFilter) -> Result<Dictionary, DictionaryLoadError>;
}

#[derive(Debug, Clone)]
pub struct EmbeddedSource {
    file_name: String,
}

impl EmbeddedSource {
    pub fn new(bundle: Bundle) -> Self {
        Self::named(&bundle.to_string())
    }

    pub fn named(name: &str) -> Self {
        Self {
            file_name: format!("{name}.json"),
        }
    }
}

impl DictionarySource for EmbeddedSource {
    fn describe(&self) -> String {
        format!("built-in {}", self.file_name.trim_end_matches(".json"))
    }

    fn load(&self, filter: &WordFilter) -> Result<Dictionary, DictionaryLoadError> {
        let contents = DICT_DIR
            .get_file(&self.file_name)
            .and_then(|f| f.contents_utf8())
            .ok_or_else(|| {
                DictionaryLoadError::UnknownBundle(
                    self.file_name.trim_end_matches(".json").to_string(),
                )
            })?;

        Dictionary::from_json(contents, filter)
    }
}

/// A JSON object file on disk, e.g. a downloaded copy of Webster's dictionary
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl DictionarySource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self, filter: &WordFilter) -> Result<Dictionary, DictionaryLoadError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| DictionaryLoadError::Io {
            path: self.path.clone(),
            source,
        })?;

        Dictionary::from_json(&contents, filter)
    }
}
