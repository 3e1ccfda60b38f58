use crate::app_dirs::AppDirs;
use crate::dictionary::{Bundle, DictionarySource, EmbeddedSource, FileSource, WordFilter};
use crate::error::GallowsError;
use crate::round::DEFAULT_MAX_STRIKES;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Upper bound for `max_strikes`; the gallows drawing has no more stages than this
pub const STRIKE_LIMIT: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub max_strikes: usize,
    pub bundle: Bundle,
    /// Local JSON dictionary; takes precedence over `bundle`
    pub dictionary_path: Option<PathBuf>,
    pub min_letters: usize,
    pub max_letters: Option<usize>,
    pub celebrate: bool,
}

impl Default for Config {
    fn default() -> Self {
        let filter = WordFilter::default();
        Self {
            max_strikes: DEFAULT_MAX_STRIKES,
            bundle: Bundle::English,
            dictionary_path: None,
            min_letters: filter.min_letters,
            max_letters: filter.max_letters,
            celebrate: true,
        }
    }
}

impl Config {
    pub fn word_filter(&self) -> WordFilter {
        WordFilter {
            min_letters: self.min_letters,
            max_letters: self.max_letters,
        }
    }

    pub fn source(&self) -> Box<dyn DictionarySource> {
        match &self.dictionary_path {
            Some(path) => Box::new(FileSource::new(path)),
            None => Box::new(EmbeddedSource::new(self.bundle)),
        }
    }

    pub fn validate(&self) -> Result<(), GallowsError> {
        if !(1..=STRIKE_LIMIT).contains(&self.max_strikes) {
            return Err(GallowsError::Config(format!(
                "max_strikes must be between 1 and {STRIKE_LIMIT}, got {}",
                self.max_strikes
            )));
        }
        if let Some(max) = self.max_letters {
            if max < self.min_letters {
                return Err(GallowsError::Config(format!(
                    "max_letters ({max}) is below min_letters ({})",
                    self.min_letters
                )));
            }
        }
        Ok(())
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    /// Missing or unreadable config falls back to defaults
    fn load(&self) -> Config {
        let Ok(bytes) = fs::read(&self.path) else {
            return Config::default();
        };
        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "ignoring malformed config");
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)
    }
}
