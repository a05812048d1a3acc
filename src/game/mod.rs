//! Turn-based game logic
//!
//! Input gate, state machine and the session that strings games together.

pub mod collaborators;
pub mod input;
mod session;
mod state;

pub use collaborators::{AnyWord, Dictionary, FixedWord, StatsSink, WordSource};
pub use input::{InputEvent, accept};
pub use session::Session;
pub use state::{
    DEFAULT_MAX_ROWS, EventOutcome, Game, GameOver, GameStatus, Row, RowReveal, SubmitOutcome,
};
