//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary for zero-cost access,
//! the dictionary built from them, and target word selection.

mod embedded;
pub mod loader;
mod random;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
pub use random::{RandomWords, SourceType};

use crate::core::Word;
use crate::game::Dictionary;
use loader::words_from_slice;
use rustc_hash::FxHashSet;

/// Accepted guesses: every answer plus every extra allowed word
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: FxHashSet<Word>,
}

impl WordList {
    #[must_use]
    pub fn new<'a>(answers: &'a [Word], allowed: impl IntoIterator<Item = &'a Word>) -> Self {
        let words = answers.iter().chain(allowed).cloned().collect();
        Self { words }
    }

    /// Dictionary of the embedded answers and allowed words
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(&words_from_slice(ANSWERS), &words_from_slice(ALLOWED))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }
}

impl Dictionary for WordList {
    fn is_valid_word(&self, word: &Word) -> bool {
        self.contains(word)
    }
}
