//! Keyboard hint aggregation
//!
//! Tracks the best-known result for every letter across the guesses of a game.

use super::{Feedback, LetterResult, Word};

const ALPHABET_LEN: usize = 26;

/// Best-known `LetterResult` per letter A–Z
///
/// Monotonic: a letter's stored result never drops to a lower priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardState {
    keys: [Option<LetterResult>; ALPHABET_LEN],
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored result for a letter, `None` if the letter has not been guessed
    ///
    /// Lookup is case-insensitive; non-letters always return `None`.
    #[must_use]
    pub fn status(&self, letter: u8) -> Option<LetterResult> {
        index_of(letter).and_then(|i| self.keys[i])
    }

    /// Priority of the stored result (0 when unset)
    #[must_use]
    pub fn priority(&self, letter: u8) -> u8 {
        self.status(letter).map_or(0, LetterResult::priority)
    }

    /// Merge one guess and its feedback into the keyboard
    ///
    /// A letter is only updated when the new result outranks the stored one,
    /// so duplicate letters within one guess resolve to their best result.
    pub fn merge(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &result) in guess.letters().iter().zip(feedback.results()) {
            let Some(i) = index_of(letter) else {
                continue;
            };
            if self.keys[i].is_none_or(|stored| result > stored) {
                self.keys[i] = Some(result);
            }
        }
    }

    /// Iterate over every guessed letter in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterResult)> + '_ {
        (b'A'..=b'Z')
            .zip(&self.keys)
            .filter_map(|(letter, result)| result.map(|r| (char::from(letter), r)))
    }

    /// Reset every letter to unset
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn index_of(letter: u8) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| usize::from(upper - b'A'))
}
