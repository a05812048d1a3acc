//! Formatting utilities for terminal output

use crate::core::{KeyboardState, LetterResult};
use colored::{ColoredString, Colorize};

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Format one tile as a colored ` X ` block
#[must_use]
pub fn colored_tile(letter: char, result: LetterResult) -> ColoredString {
    let text = format!(" {letter} ");
    match result {
        LetterResult::Correct => text.black().on_green().bold(),
        LetterResult::Present => text.black().on_yellow().bold(),
        LetterResult::Absent => text.white().on_bright_black(),
    }
}

/// Format a row of tiles as one string
#[must_use]
pub fn colored_row(tiles: &[(char, LetterResult)]) -> String {
    tiles
        .iter()
        .map(|&(letter, result)| colored_tile(letter, result).to_string())
        .collect()
}

/// Format the keyboard, one line per layout row, letters colored by best result
#[must_use]
pub fn keyboard_lines(keyboard: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .bytes()
                .map(|b| {
                    let key = char::from(b).to_string();
                    match keyboard.status(b) {
                        Some(LetterResult::Correct) => key.green().bold().to_string(),
                        Some(LetterResult::Present) => key.yellow().bold().to_string(),
                        Some(LetterResult::Absent) => key.bright_black().to_string(),
                        None => key,
                    }
                })
                .collect();
            format!("{}{}", " ".repeat(indent), keys.join(" "))
        })
        .collect()
}

/// Celebration line for a game won in `attempts` guesses
#[must_use]
pub const fn celebration(attempts: usize) -> &'static str {
    match attempts {
        1 => "🎯 HOLE IN ONE! Genius! 🌟",
        2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
        3 => "✨ IMPRESSIVE! Three guesses! ✨",
        4 => "👏 SPLENDID! Four guesses! 👏",
        5 => "🎉 GREAT! Five guesses! 🎉",
        6 => "😅 PHEW! Got it in six! 😅",
        _ => "🎊 SOLVED! 🎊",
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
