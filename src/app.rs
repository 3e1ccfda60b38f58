use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info, warn};

use crate::celebration::Celebration;
use crate::config::Config;
use crate::dictionary::Dictionary;
use crate::error::DictionaryLoadError;
use crate::history::{HistoryDb, HistorySummary, RoundRecord};
use crate::round::{GuessOutcome, Round, RoundStatus};

/// Finished rounds listed under the history line
pub const RECENT_ROUNDS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    /// Waiting for the dictionary loader
    Loading,
    Playing,
    Finished,
    /// Loader reported an error; the message is shown with a retry hint
    LoadFailed(String),
}

/// What the event loop should do after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
    /// Start another dictionary load
    Reload,
}

#[derive(Debug)]
pub struct App {
    pub config: Config,
    pub state: AppState,
    pub dictionary: Option<Dictionary>,
    pub round: Option<Round>,
    pub last_outcome: Option<GuessOutcome>,
    pub celebration: Celebration,
    pub history: Option<HistoryDb>,
    pub summary: Option<HistorySummary>,
    /// Newest first, at most `RECENT_ROUNDS`
    pub recent: Vec<RoundRecord>,
    pub viewport: (u16, u16),
}

impl App {
    pub fn new(config: Config, history: Option<HistoryDb>) -> Self {
        let summary = history.as_ref().and_then(|db| db.summary().ok());
        let recent = history
            .as_ref()
            .and_then(|db| db.recent(RECENT_ROUNDS).ok())
            .unwrap_or_default();
        Self {
            config,
            state: AppState::Loading,
            dictionary: None,
            round: None,
            last_outcome: None,
            celebration: Celebration::new(),
            history,
            summary,
            recent,
            viewport: (80, 24),
        }
    }

    pub fn source_description(&self) -> String {
        self.config.source().describe()
    }

    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
    }

    pub fn on_dictionary_loaded(&mut self, result: Result<Dictionary, DictionaryLoadError>) {
        match result {
            Ok(dictionary) => {
                self.dictionary = Some(dictionary);
                self.start_round();
            }
            Err(err) => {
                warn!(%err, "no dictionary, waiting for retry");
                self.dictionary = None;
                self.round = None;
                self.state = AppState::LoadFailed(err.to_string());
            }
        }
    }

    /// Pick a new secret word and reset all round state
    pub fn start_round(&mut self) {
        let word = self.dictionary.as_ref().and_then(Dictionary::random_word);
        match word {
            Some(word) => self.start_round_with(&word),
            None => {
                self.state =
                    AppState::LoadFailed(DictionaryLoadError::NoPlayableWords.to_string());
            }
        }
    }

    /// Start a round on a known word
    pub fn start_round_with(&mut self, word: &str) {
        let round = Round::new(word, self.config.max_strikes);
        info!(letters = round.secret().len(), "round started");
        debug!(word = round.secret(), "secret word");

        self.round = Some(round);
        self.last_outcome = None;
        self.celebration.stop();
        self.state = AppState::Playing;
    }

    /// Feed one character to the current round
    pub fn guess(&mut self, key: char) -> GuessOutcome {
        let Some(round) = self.round.as_mut() else {
            return GuessOutcome::Ignored;
        };

        let was_finished = round.is_finished();
        let outcome = round.guess(key);
        if outcome != GuessOutcome::Ignored {
            self.last_outcome = Some(outcome.clone());
        }
        if !was_finished && round.is_finished() {
            self.finish_round();
        }
        outcome
    }

    /// The single key handler for every screen
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.kind != KeyEventKind::Press {
            return Control::Continue;
        }
        if key.code == KeyCode::Esc
            || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
        {
            return Control::Quit;
        }

        match self.state {
            AppState::Loading => {}
            AppState::LoadFailed(_) => {
                if matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R')) {
                    self.state = AppState::Loading;
                    return Control::Reload;
                }
            }
            AppState::Playing => match key.code {
                KeyCode::Right => {
                    if let Some(round) = &self.round {
                        info!(guesses = round.guesses().len(), "round abandoned");
                    }
                    self.start_round();
                }
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    self.guess(c);
                }
                _ => {}
            },
            AppState::Finished => {
                if matches!(
                    key.code,
                    KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Enter | KeyCode::Right
                ) {
                    self.start_round();
                }
            }
        }
        Control::Continue
    }

    /// Advance animations; true when the screen needs a redraw
    pub fn on_tick(&mut self) -> bool {
        let was_active = self.celebration.is_active;
        self.celebration.update();
        was_active
    }

    /// Definition of the secret word, only once the round is over
    pub fn definition(&self) -> Option<&str> {
        let round = self.round.as_ref().filter(|r| r.is_finished())?;
        let dictionary = self.dictionary.as_ref()?;
        Some(dictionary.definition_or_placeholder(round.secret()))
    }

    fn finish_round(&mut self) {
        self.state = AppState::Finished;
        let Some(round) = self.round.as_ref() else {
            return;
        };

        info!(
            status = %round.status(),
            strikes = round.strikes(),
            guesses = round.guesses().len(),
            "round finished"
        );

        if let (Some(db), Some(record)) = (&self.history, RoundRecord::from_round(round)) {
            let updated = db
                .record_round(&record)
                .and_then(|_| Ok((db.summary()?, db.recent(RECENT_ROUNDS)?)));
            match updated {
                Ok((summary, recent)) => {
                    self.summary = Some(summary);
                    self.recent = recent;
                }
                Err(err) => warn!(%err, "could not update round history"),
            }
        }

        if round.status() == RoundStatus::Won && self.config.celebrate {
            let (width, height) = self.viewport;
            self.celebration.start(round.secret(), width, height);
        }
    }
}
