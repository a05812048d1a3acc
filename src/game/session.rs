//! A playing session: consecutive games sharing one word source, one
//! dictionary and one statistics sink.

use super::collaborators::{Dictionary, StatsSink, WordSource};
use super::state::{EventOutcome, Game, SubmitOutcome};
use super::InputEvent;
use crate::core::Word;
use crate::stats::Statistics;

pub struct Session<S, D, K = Statistics> {
    source: S,
    dictionary: D,
    stats: K,
    max_rows: usize,
    game: Game,
}

impl<S: WordSource, D: Dictionary, K: StatsSink> Session<S, D, K> {
    /// Create a session and start its first game
    pub fn new(mut source: S, dictionary: D, stats: K, max_rows: usize) -> Self {
        let game = Game::start(&mut source, max_rows);
        Self {
            source,
            dictionary,
            stats,
            max_rows,
            game,
        }
    }

    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub const fn stats(&self) -> &K {
        &self.stats
    }

    #[must_use]
    pub const fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Abandon the current game and start a fresh one
    ///
    /// An unfinished game is not recorded.
    pub fn new_game(&mut self) {
        self.game = Game::start(&mut self.source, self.max_rows);
    }

    /// Feed one input event to the current game
    ///
    /// A finished game is reported to the statistics sink exactly once.
    pub fn handle(&mut self, event: InputEvent) -> EventOutcome {
        let outcome = self.game.handle(event, &self.dictionary);
        self.record_if_finished(&outcome);
        outcome
    }

    /// Replace the buffer with `text` and submit it
    ///
    /// Used by line-based front ends. Text that is not exactly one word comes
    /// back as `NotReady` with the buffer left empty.
    pub fn submit_text(&mut self, text: &str) -> SubmitOutcome {
        while self.game.delete_letter() {}
        if let Err(e) = Word::new(text) {
            log::trace!("not a word '{text}': {e}");
            return SubmitOutcome::NotReady;
        }
        for c in text.chars() {
            self.game.handle(InputEvent::from_char(c), &self.dictionary);
        }

        let outcome = self.game.submit_guess(&self.dictionary);
        if matches!(outcome, SubmitOutcome::NotReady) {
            while self.game.delete_letter() {}
        }
        self.record_if_finished(&EventOutcome::Submitted(outcome.clone()));
        outcome
    }

    fn record_if_finished(&mut self, outcome: &EventOutcome) {
        if let EventOutcome::Submitted(SubmitOutcome::Revealed(reveal)) = outcome
            && let Some(over) = &reveal.game_over
        {
            log::info!(
                "game over: {} in {} attempts (target {})",
                if over.won { "won" } else { "lost" },
                over.attempts,
                over.target
            );
            self.stats.record(over);
        }
    }
}
