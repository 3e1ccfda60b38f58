use crate::error::DictionaryLoadError;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Shown when a secret word has no entry in the dictionary
pub const DEFINITION_PLACEHOLDER: &str = "No definition available.";

/// Limits on which dictionary keys may become secret words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFilter {
    pub min_letters: usize,
    pub max_letters: Option<usize>,
}

impl Default for WordFilter {
    fn default() -> Self {
        Self {
            min_letters: 3,
            max_letters: None,
        }
    }
}

impl WordFilter {
    /// Letters, spaces, hyphens and apostrophes only, with a letter count in range
    pub fn accepts(&self, word: &str) -> bool {
        let allowed = word
            .chars()
            .all(|c| c.is_ascii_alphabetic() || matches!(c, ' ' | '-' | '\''));
        let letters = word.chars().filter(|c| c.is_ascii_alphabetic()).count();

        allowed
            && letters > 0
            && letters >= self.min_letters
            && self.max_letters.map_or(true, |max| letters <= max)
    }
}

/// Word -> definition mapping with case-insensitive lookups
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: BTreeMap<String, String>,
    playable: Vec<String>,
}

impl Dictionary {
    /// Build from raw pairs. Keys are trimmed and lowercased; keys rejected by
    /// `filter` stay available for lookups but are never chosen.
    pub fn from_entries<I, K, V>(entries: I, filter: &WordFilter) -> Result<Self, DictionaryLoadError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let entries: BTreeMap<String, String> = entries
            .into_iter()
            .map(|(k, v)| (k.as_ref().trim().to_lowercase(), v.into()))
            .filter(|(k, _)| !k.is_empty())
            .collect();

        let playable: Vec<String> = entries
            .keys()
            .filter(|k| filter.accepts(k))
            .cloned()
            .collect();

        if playable.is_empty() {
            return Err(DictionaryLoadError::NoPlayableWords);
        }

        Ok(Self { entries, playable })
    }

    /// Parse a JSON object of `"word": "definition"` pairs
    pub fn from_json(json: &str, filter: &WordFilter) -> Result<Self, DictionaryLoadError> {
        let raw: BTreeMap<String, String> = serde_json::from_str(json)?;
        Self::from_entries(raw, filter)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn playable_count(&self) -> usize {
        self.playable.len()
    }

    /// Uniformly pick a playable word, uppercased for display and comparison
    pub fn new_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<String> {
        self.playable.choose(rng).map(|w| w.to_uppercase())
    }

    pub fn random_word(&self) -> Option<String> {
        self.new_word(&mut rand::thread_rng())
    }

    pub fn definition(&self, word: &str) -> Option<&str> {
        self.entries
            .get(&word.trim().to_lowercase())
            .map(String::as_str)
    }

    pub fn definition_or_placeholder(&self, word: &str) -> &str {
        self.definition(word).unwrap_or(DEFINITION_PLACEHOLDER)
    }
}
