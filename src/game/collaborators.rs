//! Boundaries between the game and the outside world
//!
//! The game never picks words, checks a word list or keeps statistics itself;
//! it goes through these traits instead.

use super::GameOver;
use crate::core::Word;
use rustc_hash::FxHashSet;

/// Supplies the target word at the start of each game
pub trait WordSource {
    fn random_word(&mut self) -> Word;
}

/// Decides whether a full buffer is an acceptable guess
pub trait Dictionary {
    fn is_valid_word(&self, word: &Word) -> bool;
}

/// Receives the terminal event of every finished game
pub trait StatsSink {
    fn record(&mut self, event: &GameOver);
}

/// Always yields the same target
#[derive(Debug, Clone)]
pub struct FixedWord(pub Word);

impl WordSource for FixedWord {
    fn random_word(&mut self) -> Word {
        self.0.clone()
    }
}

impl Dictionary for FxHashSet<Word> {
    fn is_valid_word(&self, word: &Word) -> bool {
        self.contains(word)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_valid_word(&self, word: &Word) -> bool {
        (**self).is_valid_word(word)
    }
}

/// Accepts every well-formed word
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyWord;

impl Dictionary for AnyWord {
    fn is_valid_word(&self, _word: &Word) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_word_repeats() {
        let mut source = FixedWord(Word::new("crane").unwrap());
        assert_eq!(source.random_word().text(), "CRANE");
        assert_eq!(source.random_word().text(), "CRANE");
    }

    #[test]
    fn hash_set_dictionary() {
        let dictionary: FxHashSet<Word> = ["crane", "slate"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();

        assert!(dictionary.is_valid_word(&Word::new("SLATE").unwrap()));
        assert!(!dictionary.is_valid_word(&Word::new("irate").unwrap()));
        assert!((&dictionary).is_valid_word(&Word::new("crane").unwrap()));
    }

    #[test]
    fn any_word_accepts_everything() {
        assert!(AnyWord.is_valid_word(&Word::new("qqqqq").unwrap()));
    }
}
