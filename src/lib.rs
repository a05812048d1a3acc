//! Wordle Clone
//!
//! A terminal Wordle: exact duplicate-letter feedback, a keyboard that only
//! ever upgrades its hints, and a game that ends after a win or the last row.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_clone::core::{LetterResult, Word, evaluate};
//! use wordle_clone::game::{AnyWord, Game, GameStatus, InputEvent};
//!
//! let guess = Word::new("erase").unwrap();
//! let target = Word::new("speed").unwrap();
//! assert_eq!(evaluate(&guess, &target).count(LetterResult::Present), 3);
//!
//! let mut game = Game::new(Word::new("crane").unwrap(), 6);
//! for c in "crane".chars() {
//!     game.handle(InputEvent::from_char(c), &AnyWord);
//! }
//! game.handle(InputEvent::Submit, &AnyWord);
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Turn-based game logic
pub mod game;

// Win/loss statistics
pub mod stats;

// Runtime configuration
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
