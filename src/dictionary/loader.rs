use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use tracing::{info, warn};

use crate::dictionary::core::{Dictionary, WordFilter};
use crate::dictionary::source::DictionarySource;
use crate::error::DictionaryLoadError;
use crate::runtime::GameEvent;

/// Load synchronously, logging how it went
pub fn load_dictionary(
    source: &dyn DictionarySource,
    filter: &WordFilter,
) -> Result<Dictionary, DictionaryLoadError> {
    let origin = source.describe();
    let started = Instant::now();
    info!(%origin, "loading dictionary");

    let result = source.load(filter);
    match &result {
        Ok(dict) => info!(
            %origin,
            entries = dict.len(),
            playable = dict.playable_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "dictionary loaded"
        ),
        Err(err) => warn!(%origin, %err, "dictionary load failed"),
    }
    result
}

/// Load on a worker thread and post the result as a single `DictionaryLoaded` event.
///
/// Nothing else is sent, so the game stays on its loading screen until this lands.
pub fn spawn_load(
    source: Box<dyn DictionarySource>,
    filter: WordFilter,
    tx: Sender<GameEvent>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let result = load_dictionary(source.as_ref(), &filter);
        if tx.send(GameEvent::DictionaryLoaded(result)).is_err() {
            warn!("event loop gone before dictionary finished loading");
        }
    })
}
