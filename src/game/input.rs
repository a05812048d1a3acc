//! Input gate
//!
//! Decides whether a raw input event may reach the game, based only on the
//! current buffer length and game status.

use super::GameStatus;
use crate::core::WORD_LENGTH;

/// A raw input event from any front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A letter key; stored uppercase
    Letter(u8),
    /// Enter
    Submit,
    /// Backspace
    Delete,
    /// Any other key
    Other,
}

impl InputEvent {
    /// Build an event from a typed character
    ///
    /// ASCII letters become `Letter`; everything else is `Other`.
    #[must_use]
    pub fn from_char(c: char) -> Self {
        if c.is_ascii_alphabetic() {
            Self::Letter(c.to_ascii_uppercase() as u8)
        } else {
            Self::Other
        }
    }

    /// Build an event from a key name such as `"a"`, `"ENTER"` or `"Backspace"`
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::game::InputEvent;
    ///
    /// assert_eq!(InputEvent::from_key_name("q"), InputEvent::Letter(b'Q'));
    /// assert_eq!(InputEvent::from_key_name("Enter"), InputEvent::Submit);
    /// assert_eq!(InputEvent::from_key_name("F1"), InputEvent::Other);
    /// ```
    #[must_use]
    pub fn from_key_name(key: &str) -> Self {
        let mut chars = key.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::from_char(c);
        }

        match key.to_ascii_uppercase().as_str() {
            "ENTER" => Self::Submit,
            "BACKSPACE" => Self::Delete,
            _ => Self::Other,
        }
    }
}

/// Check whether `event` may be applied to a buffer of `buffer_len` letters
///
/// Pure; never mutates anything.
#[must_use]
pub fn accept(event: &InputEvent, buffer_len: usize, status: GameStatus) -> bool {
    if status != GameStatus::Playing {
        return false;
    }

    match event {
        InputEvent::Letter(letter) => letter.is_ascii_alphabetic() && buffer_len < WORD_LENGTH,
        InputEvent::Submit => buffer_len == WORD_LENGTH,
        InputEvent::Delete => buffer_len > 0,
        InputEvent::Other => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LETTER: InputEvent = InputEvent::Letter(b'A');

    #[test]
    fn letters_accepted_until_buffer_full() {
        for len in 0..WORD_LENGTH {
            assert!(accept(&LETTER, len, GameStatus::Playing));
        }
        assert!(!accept(&LETTER, WORD_LENGTH, GameStatus::Playing));
    }

    #[test]
    fn non_letter_bytes_rejected() {
        assert!(!accept(&InputEvent::Letter(b'1'), 0, GameStatus::Playing));
    }

    #[test]
    fn submit_only_when_full() {
        assert!(!accept(&InputEvent::Submit, 0, GameStatus::Playing));
        assert!(!accept(&InputEvent::Submit, WORD_LENGTH - 1, GameStatus::Playing));
        assert!(accept(&InputEvent::Submit, WORD_LENGTH, GameStatus::Playing));
    }

    #[test]
    fn delete_only_when_non_empty() {
        assert!(!accept(&InputEvent::Delete, 0, GameStatus::Playing));
        assert!(accept(&InputEvent::Delete, 1, GameStatus::Playing));
        assert!(accept(&InputEvent::Delete, WORD_LENGTH, GameStatus::Playing));
    }

    #[test]
    fn other_always_rejected() {
        for len in 0..=WORD_LENGTH {
            assert!(!accept(&InputEvent::Other, len, GameStatus::Playing));
        }
    }

    #[test]
    fn terminal_status_rejects_everything() {
        for status in [GameStatus::Won, GameStatus::Lost] {
            assert!(!accept(&LETTER, 0, status));
            assert!(!accept(&InputEvent::Submit, WORD_LENGTH, status));
            assert!(!accept(&InputEvent::Delete, 3, status));
        }
    }

    #[test]
    fn key_names() {
        assert_eq!(InputEvent::from_key_name("z"), InputEvent::Letter(b'Z'));
        assert_eq!(InputEvent::from_key_name("ENTER"), InputEvent::Submit);
        assert_eq!(InputEvent::from_key_name("backspace"), InputEvent::Delete);
        assert_eq!(InputEvent::from_key_name("7"), InputEvent::Other);
        assert_eq!(InputEvent::from_key_name(""), InputEvent::Other);
        assert_eq!(InputEvent::from_key_name("é"), InputEvent::Other);
    }
}
