//! Per-letter feedback for a guess
//!
//! Each position of a guess is classified as:
//! - Correct: letter in the correct position
//! - Present: letter in the word, wrong position
//! - Absent: letter not in the word (or all its occurrences already claimed)

use super::{WORD_LENGTH, Word, WordError};
use std::fmt;
use thiserror::Error;

/// Classification of one guessed letter
///
/// Variants are declared in ascending display priority, so the derived `Ord`
/// gives `Correct > Present > Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterResult {
    Absent,
    Present,
    Correct,
}

impl LetterResult {
    /// Display priority: Correct=3, Present=2, Absent=1 (unset letters are 0)
    #[inline]
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Absent => 1,
            Self::Present => 2,
            Self::Correct => 3,
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Error returned by text-level evaluation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluateError {
    #[error("invalid {role} word '{input}': {source}")]
    InvalidArgument {
        role: &'static str,
        input: String,
        source: WordError,
    },
}

/// Feedback for one guess: one `LetterResult` per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterResult; WORD_LENGTH]);

impl Feedback {
    /// All positions correct
    pub const PERFECT: Self = Self([LetterResult::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(results: [LetterResult; WORD_LENGTH]) -> Self {
        Self(results)
    }

    #[inline]
    #[must_use]
    pub const fn results(&self) -> &[LetterResult; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    #[must_use]
    pub fn count(&self, result: LetterResult) -> usize {
        self.0.iter().filter(|&&r| r == result).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::Feedback;
    ///
    /// let f1 = Feedback::parse("GY-GY").unwrap();
    /// let f2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut results = [LetterResult::Absent; WORD_LENGTH];
        let mut chars = s.chars();

        for slot in &mut results {
            *slot = match chars.next()? {
                'G' | 'g' | '🟩' => LetterResult::Correct,
                'Y' | 'y' | '🟨' => LetterResult::Present,
                '-' | '_' | '⬜' => LetterResult::Absent,
                _ => return None,
            };
        }

        if chars.next().is_some() {
            return None;
        }

        Some(Self(results))
    }

    /// Pair each result with the letter of `guess` at the same position
    #[must_use]
    pub fn tiles(&self, guess: &Word) -> [(char, LetterResult); WORD_LENGTH] {
        let letters = guess.letters();
        std::array::from_fn(|i| (char::from(letters[i]), self.0[i]))
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|r| r.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Evaluate `guess` against `target`
///
/// Implements exact duplicate-letter handling:
///
/// # Algorithm
/// 1. Exact-match pass: mark positions where guess and target agree as Correct
/// 2. Remaining-count pass: count target letters not consumed by a Correct match
/// 3. Assignment pass: left to right, each non-Correct position takes one
///    remaining occurrence (Present) or gets Absent when none are left
///
/// # Examples
/// ```
/// use wordle_clone::core::{Word, LetterResult::*, evaluate};
///
/// let guess = Word::new("paper").unwrap();
/// let target = Word::new("apple").unwrap();
///
/// let feedback = evaluate(&guess, &target);
/// assert_eq!(feedback.results(), &[Present, Present, Correct, Present, Absent]);
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> Feedback {
    let mut results = [LetterResult::Absent; WORD_LENGTH];
    let guess_letters = guess.letters();
    let target_letters = target.letters();

    for (slot, (g, t)) in results
        .iter_mut()
        .zip(guess_letters.iter().zip(target_letters))
    {
        if g == t {
            *slot = LetterResult::Correct;
        }
    }

    let mut remaining = target.letter_counts();
    for (&letter, result) in guess_letters.iter().zip(&results) {
        if *result == LetterResult::Correct
            && let Some(count) = remaining.get_mut(&letter)
        {
            *count -= 1;
        }
    }

    for (&letter, slot) in guess_letters.iter().zip(results.iter_mut()) {
        if *slot == LetterResult::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&letter)
            && *count > 0
        {
            *slot = LetterResult::Present;
            *count -= 1;
        }
    }

    Feedback(results)
}

/// Evaluate two words given as text
///
/// # Errors
/// Returns `EvaluateError::InvalidArgument` if either input is not a valid
/// `WORD_LENGTH`-letter word.
pub fn try_evaluate(guess: &str, target: &str) -> Result<Feedback, EvaluateError> {
    let guess = parse_argument("guess", guess)?;
    let target = parse_argument("target", target)?;
    Ok(evaluate(&guess, &target))
}

/// Parse one text argument of an evaluation
pub(crate) fn parse_argument(role: &'static str, input: &str) -> Result<Word, EvaluateError> {
    Word::new(input).map_err(|source| EvaluateError::InvalidArgument {
        role,
        input: input.to_string(),
        source,
    })
}
