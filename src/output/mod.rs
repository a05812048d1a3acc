//! Terminal output formatting
//!
//! Display utilities for the line-based game and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_check_result, print_game_over, print_keyboard, print_reveal,
    print_statistics,
};
