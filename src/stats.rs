//! Win/loss statistics
//!
//! In-memory only; lives as long as the process.

use crate::game::{GameOver, StatsSink};
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    played: usize,
    won: usize,
    current_streak: usize,
    max_streak: usize,
    /// attempts -> number of games won in that many attempts
    distribution: BTreeMap<usize, usize>,
}

impl Statistics {
    #[must_use]
    pub const fn played(&self) -> usize {
        self.played
    }

    #[must_use]
    pub const fn won(&self) -> usize {
        self.won
    }

    #[must_use]
    pub const fn current_streak(&self) -> usize {
        self.current_streak
    }

    #[must_use]
    pub const fn max_streak(&self) -> usize {
        self.max_streak
    }

    #[must_use]
    pub const fn distribution(&self) -> &BTreeMap<usize, usize> {
        &self.distribution
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_percentage(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            self.won as f64 / self.played as f64 * 100.0
        }
    }
}

impl StatsSink for Statistics {
    fn record(&mut self, event: &GameOver) {
        self.played += 1;

        if event.won {
            self.won += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
            *self.distribution.entry(event.attempts).or_insert(0) += 1;
        } else {
            self.current_streak = 0;
        }
    }
}
