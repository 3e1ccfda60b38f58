use crate::evaluator::{evaluate, is_guessable, normalize};
use itertools::Itertools;
use std::collections::BTreeSet;

/// Loss happens on the strike *after* this many, i.e. the 6th wrong letter by default
pub const DEFAULT_MAX_STRIKES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// What a single key did to the round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Not a letter, or the round is already over
    Ignored,
    /// Letter was guessed earlier this round
    Repeated,
    Hit { positions: Vec<usize> },
    Miss { strikes: usize },
}

/// One play-through from word selection to Won/Lost.
///
/// The secret is stored uppercased. Characters that are not letters (spaces,
/// hyphens, apostrophes) can never be guessed, so they start out revealed.
#[derive(Debug, Clone)]
pub struct Round {
    secret: String,
    revealed: Vec<bool>,
    guessed: BTreeSet<char>,
    guess_order: Vec<char>,
    strikes: usize,
    max_strikes: usize,
    status: RoundStatus,
}

impl Round {
    pub fn new(secret: &str, max_strikes: usize) -> Self {
        let secret = secret.to_uppercase();
        let revealed = secret.chars().map(|c| !is_guessable(c)).collect();

        let mut round = Self {
            secret,
            revealed,
            guessed: BTreeSet::new(),
            guess_order: vec![],
            strikes: 0,
            max_strikes,
            status: RoundStatus::InProgress,
        };
        round.update_status();
        round
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status != RoundStatus::InProgress
    }

    pub fn strikes(&self) -> usize {
        self.strikes
    }

    pub fn max_strikes(&self) -> usize {
        self.max_strikes
    }

    /// Wrong guesses still allowed before the round is lost
    pub fn remaining_strikes(&self) -> usize {
        (self.max_strikes + 1).saturating_sub(self.strikes)
    }

    pub fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    /// Guesses in the order they were made
    pub fn guesses(&self) -> &[char] {
        &self.guess_order
    }

    pub fn misses(&self) -> Vec<char> {
        self.guess_order
            .iter()
            .copied()
            .filter(|c| !evaluate(&self.secret, *c).appears)
            .collect()
    }

    pub fn revealed(&self) -> &[bool] {
        &self.revealed
    }

    pub fn is_revealed(&self, idx: usize) -> bool {
        self.revealed.get(idx).copied().unwrap_or(false)
    }

    /// Secret with hidden letters as `_`, characters separated by spaces
    pub fn masked(&self) -> String {
        self.secret
            .chars()
            .zip(&self.revealed)
            .map(|(c, shown)| match (c, shown) {
                (' ', _) => ' ',
                (c, true) => c,
                (_, false) => '_',
            })
            .join(" ")
    }

    /// Apply one key to the round.
    ///
    /// The key is uppercased before the already-guessed check, so `a` after
    /// `A` counts as a repeat.
    pub fn guess(&mut self, key: char) -> GuessOutcome {
        if self.is_finished() || !is_guessable(key) {
            return GuessOutcome::Ignored;
        }

        let letter = normalize(key);
        if !self.guessed.insert(letter) {
            return GuessOutcome::Repeated;
        }
        self.guess_order.push(letter);

        let appearance = evaluate(&self.secret, letter);
        let outcome = if appearance.appears {
            for &idx in &appearance.positions {
                self.revealed[idx] = true;
            }
            GuessOutcome::Hit {
                positions: appearance.positions,
            }
        } else {
            self.strikes += 1;
            GuessOutcome::Miss {
                strikes: self.strikes,
            }
        };

        self.update_status();
        outcome
    }

    pub fn reveal_all(&mut self) {
        self.revealed.iter_mut().for_each(|r| *r = true);
    }

    fn update_status(&mut self) {
        if self.strikes > self.max_strikes {
            self.status = RoundStatus::Lost;
            self.reveal_all();
        } else if self.revealed.iter().all(|r| *r) {
            self.status = RoundStatus::Won;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn play(round: &mut Round, keys: &str) {
        for c in keys.chars() {
            round.guess(c);
        }
    }

    #[test]
    fn test_new_round_state() {
        let round = Round::new("cat", DEFAULT_MAX_STRIKES);
        assert_eq!(round.secret(), "CAT");
        assert_eq!(round.status(), RoundStatus::InProgress);
        assert_eq!(round.strikes(), 0);
        assert!(round.guessed().is_empty());
        assert_eq!(round.revealed(), &[false, false, false]);
        assert_eq!(round.masked(), "_ _ _");
    }

    #[test]
    fn test_win_without_strikes() {
        let mut round = Round::new("CAT", DEFAULT_MAX_STRIKES);
        assert_matches!(round.guess('c'), GuessOutcome::Hit { positions } if positions == vec![0]);
        round.guess('a');
        assert_eq!(round.status(), RoundStatus::InProgress);
        round.guess('t');
        assert_eq!(round.status(), RoundStatus::Won);
        assert_eq!(round.strikes(), 0);
        assert_eq!(round.masked(), "C A T");
    }

    #[test]
    fn test_loss_on_sixth_distinct_miss() {
        let mut round = Round::new("CAT", DEFAULT_MAX_STRIKES);
        play(&mut round, "BDFGJ");
        assert_eq!(round.strikes(), 5);
        assert_eq!(round.status(), RoundStatus::InProgress);
        assert_eq!(round.remaining_strikes(), 1);

        assert_matches!(round.guess('K'), GuessOutcome::Miss { strikes: 6 });
        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(round.strikes(), 6);
        assert!(round.revealed().iter().all(|r| *r));
        assert_eq!(round.remaining_strikes(), 0);
    }

    #[test]
    fn test_guesses_after_loss_are_ignored() {
        let mut round = Round::new("CAT", DEFAULT_MAX_STRIKES);
        play(&mut round, "BDFGJK");
        assert_eq!(round.guess('Z'), GuessOutcome::Ignored);
        assert_eq!(round.guess('C'), GuessOutcome::Ignored);
        assert_eq!(round.strikes(), 6);
        assert_eq!(round.status(), RoundStatus::Lost);
        assert!(round.revealed().iter().all(|r| *r));
    }

    #[test]
    fn test_guesses_after_win_are_ignored() {
        let mut round = Round::new("CAT", DEFAULT_MAX_STRIKES);
        play(&mut round, "CAT");
        assert_eq!(round.guess('Q'), GuessOutcome::Ignored);
        assert_eq!(round.strikes(), 0);
        assert_eq!(round.status(), RoundStatus::Won);
    }

    #[test]
    fn test_repeated_correct_guess_is_noop() {
        let mut round = Round::new("CAT", DEFAULT_MAX_STRIKES);
        round.guess('A');
        assert_eq!(round.guess('A'), GuessOutcome::Repeated);
        assert_eq!(round.guess('a'), GuessOutcome::Repeated);
        assert_eq!(round.strikes(), 0);
        assert_eq!(round.status(), RoundStatus::InProgress);
        assert_eq!(round.guesses(), &['A']);
    }

    #[test]
    fn test_repeated_wrong_guess_counts_once() {
        let mut round = Round::new("CAT", DEFAULT_MAX_STRIKES);
        round.guess('z');
        round.guess('Z');
        round.guess('z');
        assert_eq!(round.strikes(), 1);
        assert_eq!(round.misses(), vec!['Z']);
    }

    #[test]
    fn test_non_letters_ignored() {
        let mut round = Round::new("CAT", DEFAULT_MAX_STRIKES);
        for key in ['1', ' ', '-', '!', 'é'] {
            assert_eq!(round.guess(key), GuessOutcome::Ignored);
        }
        assert_eq!(round.strikes(), 0);
        assert!(round.guessed().is_empty());
    }

    #[test]
    fn test_spaces_start_revealed() {
        let mut round = Round::new("ice cream", DEFAULT_MAX_STRIKES);
        assert!(round.is_revealed(3));
        assert!(!round.is_revealed(0));
        assert_eq!(round.masked(), "_ _ _   _ _ _ _ _");

        play(&mut round, "ICREAM");
        assert_eq!(round.status(), RoundStatus::Won);
    }

    #[test]
    fn test_hyphenated_word() {
        let mut round = Round::new("x-ray", DEFAULT_MAX_STRIKES);
        assert!(round.is_revealed(1));
        play(&mut round, "XRAY");
        assert_eq!(round.status(), RoundStatus::Won);
    }

    #[test]
    fn test_custom_threshold() {
        let mut round = Round::new("CAT", 1);
        round.guess('B');
        assert_eq!(round.status(), RoundStatus::InProgress);
        round.guess('D');
        assert_eq!(round.status(), RoundStatus::Lost);
    }

    #[test]
    fn test_strikes_never_decrease() {
        let mut round = Round::new("BANANA", DEFAULT_MAX_STRIKES);
        let mut last = 0;
        for c in "QBXZAN".chars() {
            round.guess(c);
            assert!(round.strikes() >= last);
            last = round.strikes();
        }
        assert_eq!(round.status(), RoundStatus::Won);
        assert_eq!(round.strikes(), 3);
        assert_eq!(round.misses(), vec!['Q', 'X', 'Z']);
    }

    #[test]
    fn test_is_revealed_out_of_range() {
        let round = Round::new("CAT", DEFAULT_MAX_STRIKES);
        assert!(!round.is_revealed(10));
    }

    #[test]
    fn test_round_status_display() {
        assert_eq!(RoundStatus::InProgress.to_string(), "InProgress");
        assert_eq!(RoundStatus::Won.to_string(), "Won");
        assert_eq!(RoundStatus::Lost.to_string(), "Lost");
    }
}
