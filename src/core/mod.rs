//! Core domain types for the game
//!
//! This module contains the pure parts of the game: words, per-letter feedback
//! and the keyboard hint map. Nothing here performs I/O.

mod feedback;
mod keyboard;
mod word;

pub(crate) use feedback::parse_argument;
pub use feedback::{EvaluateError, Feedback, LetterResult, evaluate, try_evaluate};
pub use keyboard::KeyboardState;
pub use word::{WORD_LENGTH, Word, WordError};
