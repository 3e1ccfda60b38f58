/// Result of checking one guessed letter against the secret word
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Appearance {
    pub appears: bool,
    /// Zero-based character indices, ascending
    pub positions: Vec<usize>,
}

/// Find every position of `guess` in `secret`, ignoring case.
///
/// Indices count characters, not bytes, so they line up with the display slots.
pub fn evaluate(secret: &str, guess: char) -> Appearance {
    let guess = normalize(guess);
    let positions: Vec<usize> = secret
        .chars()
        .enumerate()
        .filter(|(_, c)| normalize(*c) == guess)
        .map(|(idx, _)| idx)
        .collect();

    Appearance {
        appears: !positions.is_empty(),
        positions,
    }
}

/// Uppercase a single char, keeping it a single char
pub fn normalize(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

/// Only the 26 ASCII letters are valid guesses
pub fn is_guessable(c: char) -> bool {
    c.is_ascii_alphabetic()
}
