//! Target word selection

use crate::config::{ConfigError, GameConfig};
use crate::core::Word;
use crate::game::{FixedWord, WordSource};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws targets uniformly from a non-empty answer list
pub struct RandomWords {
    answers: Vec<Word>,
    rng: StdRng,
}

impl RandomWords {
    /// Create a source over `answers`, seeded for reproducible games if `seed` is set
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyWordList` if `answers` is empty.
    pub fn new(answers: Vec<Word>, seed: Option<u64>) -> Result<Self, ConfigError> {
        if answers.is_empty() {
            return Err(ConfigError::EmptyWordList("answers".to_string()));
        }

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        Ok(Self { answers, rng })
    }
}

impl WordSource for RandomWords {
    fn random_word(&mut self) -> Word {
        let index = self.rng.random_range(0..self.answers.len());
        self.answers[index].clone()
    }
}

/// Enum wrapper for the target sources selectable at runtime
pub enum SourceType {
    Random(RandomWords),
    Fixed(FixedWord),
}

impl SourceType {
    /// Pick the source described by `config`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyWordList` if no fixed target is configured
    /// and `answers` is empty.
    pub fn from_config(config: &GameConfig, answers: Vec<Word>) -> Result<Self, ConfigError> {
        match &config.target {
            Some(target) => Ok(Self::Fixed(FixedWord(target.clone()))),
            None => RandomWords::new(answers, config.seed).map(Self::Random),
        }
    }
}

impl WordSource for SourceType {
    fn random_word(&mut self) -> Word {
        match self {
            Self::Random(s) => s.random_word(),
            Self::Fixed(s) => s.random_word(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn answers() -> Vec<Word> {
        words_from_slice(&["crane", "slate", "irate", "grate", "plate"])
    }

    #[test]
    fn empty_answers_rejected() {
        assert!(matches!(
            RandomWords::new(Vec::new(), None),
            Err(ConfigError::EmptyWordList(_))
        ));
    }

    #[test]
    fn draws_come_from_answers() {
        let pool = answers();
        let mut source = RandomWords::new(pool.clone(), None).unwrap();
        for _ in 0..20 {
            assert!(pool.contains(&source.random_word()));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RandomWords::new(answers(), Some(42)).unwrap();
        let mut b = RandomWords::new(answers(), Some(42)).unwrap();

        let first: Vec<Word> = (0..10).map(|_| a.random_word()).collect();
        let second: Vec<Word> = (0..10).map(|_| b.random_word()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn fixed_target_wins_over_random() {
        let config = GameConfig::new(6, Some(1), Some("zebra")).unwrap();
        let mut source = SourceType::from_config(&config, answers()).unwrap();
        assert_eq!(source.random_word().text(), "ZEBRA");
    }

    #[test]
    fn fixed_target_does_not_need_answers() {
        let config = GameConfig::new(6, None, Some("zebra")).unwrap();
        assert!(SourceType::from_config(&config, Vec::new()).is_ok());
    }
}
