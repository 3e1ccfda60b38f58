//! Logging setup for the gallows binary
//!
//! The terminal is in raw mode on the alternate screen while a game runs, so
//! log output goes to a file in the state directory rather than stderr.
//! The level comes from `GALLOWS_LOG` if set, otherwise from the CLI.
//!
//! ```bash
//! GALLOWS_LOG=gallows=debug gallows
//! tail -f ~/.local/state/gallows/gallows.log
//! ```

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "GALLOWS_LOG";

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub path: Option<PathBuf>,
}

impl LoggingConfig {
    pub fn new(level: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self {
            level: level.into(),
            path,
        }
    }

    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&self.level))
    }

    /// Install the global subscriber.
    ///
    /// Without a path nothing is installed and logging stays off. Calling this a
    /// second time is harmless; the first subscriber stays in place.
    pub fn init(&self) -> io::Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let file = open_log_file(path)?;

        let _ = tracing_subscriber::fmt()
            .with_env_filter(self.filter())
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(true)
            .with_level(true)
            .try_init();
        Ok(())
    }
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
