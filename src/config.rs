//! Game configuration
//!
//! Built from command-line flags and validated before any game starts.

use crate::core::{Word, WordError};
use crate::game::{DEFAULT_MAX_ROWS, Dictionary};
use thiserror::Error;

/// Errors that can occur when building the configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max guesses must be at least 1, got {0}")]
    InvalidMaxRows(usize),

    #[error("invalid target word '{word}': {source}")]
    InvalidTarget { word: String, source: WordError },

    #[error("word list '{0}' contains no usable words")]
    EmptyWordList(String),

    #[error("target word '{0}' is not in the word list")]
    TargetNotInWordList(Word),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub max_rows: usize,
    /// Seed for target selection; `None` draws from the OS
    pub seed: Option<u64>,
    /// Fixed target for every game instead of a random one
    pub target: Option<Word>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            seed: None,
            target: None,
        }
    }
}

impl GameConfig {
    /// Build and validate a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if `max_rows` is zero or `target` is not a valid word.
    pub fn new(
        max_rows: usize,
        seed: Option<u64>,
        target: Option<&str>,
    ) -> Result<Self, ConfigError> {
        if max_rows == 0 {
            return Err(ConfigError::InvalidMaxRows(max_rows));
        }

        let target = target
            .map(|word| {
                Word::new(word).map_err(|source| ConfigError::InvalidTarget {
                    word: word.to_string(),
                    source,
                })
            })
            .transpose()?;

        Ok(Self {
            max_rows,
            seed,
            target,
        })
    }

    /// Check that a fixed target can be guessed with `dictionary`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::TargetNotInWordList` if the target would always be
    /// rejected as a guess.
    pub fn check_target(&self, dictionary: &impl Dictionary) -> Result<(), ConfigError> {
        match &self.target {
            Some(target) if !dictionary.is_valid_word(target) => {
                Err(ConfigError::TargetNotInWordList(target.clone()))
            }
            _ => Ok(()),
        }
    }
}
