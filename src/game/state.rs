//! Game state machine
//!
//! A `Game` owns the target word, the submitted rows, the in-progress buffer and
//! the keyboard hints. `Won` and `Lost` are terminal: once reached, every
//! mutating call is a no-op.

use super::collaborators::{Dictionary, WordSource};
use super::input::{self, InputEvent};
use crate::core::{Feedback, KeyboardState, LetterResult, WORD_LENGTH, Word, evaluate};

/// Default number of guesses per game
pub const DEFAULT_MAX_ROWS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// A submitted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub word: Word,
    pub feedback: Feedback,
}

impl Row {
    /// Ordered `(letter, result)` pairs for display
    #[must_use]
    pub fn tiles(&self) -> [(char, LetterResult); WORD_LENGTH] {
        self.feedback.tiles(&self.word)
    }
}

/// Terminal event emitted once per game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOver {
    pub won: bool,
    pub target: Word,
    pub attempts: usize,
}

/// Render data for a freshly submitted row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowReveal {
    /// 0-indexed row number
    pub row: usize,
    pub tiles: [(char, LetterResult); WORD_LENGTH],
    pub game_over: Option<GameOver>,
}

/// Result of a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Game over or buffer not full; nothing happened
    NotReady,
    /// Buffer is not in the dictionary; buffer kept, no row used
    Rejected(Word),
    /// Row accepted and evaluated
    Revealed(RowReveal),
}

/// Result of feeding one input event to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// Dropped by the input gate
    Ignored,
    /// A letter was added or removed
    BufferChanged,
    Submitted(SubmitOutcome),
}

#[derive(Debug, Clone)]
pub struct Game {
    target: Word,
    rows: Vec<Row>,
    buffer: Vec<u8>,
    max_rows: usize,
    status: GameStatus,
    keyboard: KeyboardState,
}

impl Game {
    /// Start a game against `target` with `max_rows` attempts
    ///
    /// A `max_rows` of zero is treated as one.
    #[must_use]
    pub fn new(target: Word, max_rows: usize) -> Self {
        let max_rows = max_rows.max(1);
        log::info!("new game: {max_rows} rows");
        log::trace!("target: {target}");

        Self {
            target,
            rows: Vec::with_capacity(max_rows),
            buffer: Vec::with_capacity(WORD_LENGTH),
            max_rows,
            status: GameStatus::Playing,
            keyboard: KeyboardState::new(),
        }
    }

    /// Start a game with a target drawn from `source`
    pub fn start(source: &mut impl WordSource, max_rows: usize) -> Self {
        Self::new(source.random_word(), max_rows)
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Letters typed into the current row so far
    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_text(&self) -> String {
        self.buffer.iter().map(|&b| char::from(b)).collect()
    }

    #[must_use]
    pub const fn max_rows(&self) -> usize {
        self.max_rows
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Index of the row currently being typed
    #[must_use]
    pub fn current_row(&self) -> usize {
        self.rows.len()
    }

    /// The terminal event, once the game has ended
    #[must_use]
    pub fn game_over(&self) -> Option<GameOver> {
        self.status.is_terminal().then(|| GameOver {
            won: self.status == GameStatus::Won,
            target: self.target.clone(),
            attempts: self.rows.len(),
        })
    }

    /// Append a letter to the buffer; returns `false` if the input was ignored
    pub fn push_letter(&mut self, letter: u8) -> bool {
        let event = InputEvent::Letter(letter.to_ascii_uppercase());
        if !input::accept(&event, self.buffer.len(), self.status) {
            return false;
        }
        self.buffer.push(letter.to_ascii_uppercase());
        true
    }

    /// Remove the last letter; returns `false` if the input was ignored
    pub fn delete_letter(&mut self) -> bool {
        if !input::accept(&InputEvent::Delete, self.buffer.len(), self.status) {
            return false;
        }
        self.buffer.pop();
        true
    }

    /// Submit the buffer as a guess
    ///
    /// Evaluation, row append, keyboard merge and the status transition all
    /// happen inside this call.
    pub fn submit_guess(&mut self, dictionary: &impl Dictionary) -> SubmitOutcome {
        if !input::accept(&InputEvent::Submit, self.buffer.len(), self.status) {
            return SubmitOutcome::NotReady;
        }

        let Some(guess) = self.buffer_word() else {
            return SubmitOutcome::NotReady;
        };

        if !dictionary.is_valid_word(&guess) {
            log::debug!("rejected {guess}: not in word list");
            return SubmitOutcome::Rejected(guess);
        }

        let feedback = evaluate(&guess, &self.target);
        self.keyboard.merge(&guess, &feedback);
        let won = guess == self.target;
        let row = Row {
            word: guess,
            feedback,
        };
        let tiles = row.tiles();
        self.rows.push(row);

        if won {
            self.status = GameStatus::Won;
        } else if self.rows.len() >= self.max_rows {
            self.status = GameStatus::Lost;
        } else {
            self.buffer.clear();
        }

        let index = self.rows.len() - 1;
        log::debug!(
            "row {index}: {} {feedback} -> {:?}",
            self.rows[index].word,
            self.status
        );

        SubmitOutcome::Revealed(RowReveal {
            row: index,
            tiles,
            game_over: self.game_over(),
        })
    }

    /// Route one input event through the gate into the game
    pub fn handle(&mut self, event: InputEvent, dictionary: &impl Dictionary) -> EventOutcome {
        if !input::accept(&event, self.buffer.len(), self.status) {
            log::trace!("ignored {event:?}");
            return EventOutcome::Ignored;
        }

        match event {
            InputEvent::Letter(letter) => {
                self.buffer.push(letter.to_ascii_uppercase());
                EventOutcome::BufferChanged
            }
            InputEvent::Delete => {
                self.buffer.pop();
                EventOutcome::BufferChanged
            }
            InputEvent::Submit => EventOutcome::Submitted(self.submit_guess(dictionary)),
            InputEvent::Other => EventOutcome::Ignored,
        }
    }

    fn buffer_word(&self) -> Option<Word> {
        let letters: [u8; WORD_LENGTH] = self.buffer.as_slice().try_into().ok()?;
        Some(Word::from_letters(letters))
    }
}
