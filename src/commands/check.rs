//! Single evaluation command
//!
//! Evaluates one guess against one target without starting a game.

use crate::core::{
    EvaluateError, Feedback, LetterResult, WORD_LENGTH, Word, evaluate, parse_argument,
};

/// Result of checking a guess against a target
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

impl CheckResult {
    /// Ordered `(letter, result)` pairs
    #[must_use]
    pub fn tiles(&self) -> [(char, LetterResult); WORD_LENGTH] {
        self.feedback.tiles(&self.guess)
    }
}

/// Evaluate `guess` against `target`
///
/// Neither word has to be in a word list.
///
/// # Errors
///
/// Returns `EvaluateError::InvalidArgument` if either word is not
/// `WORD_LENGTH` ASCII letters.
pub fn check_guess(guess: &str, target: &str) -> Result<CheckResult, EvaluateError> {
    let guess = parse_argument("guess", guess)?;
    let target = parse_argument("target", target)?;
    let feedback = evaluate(&guess, &target);

    Ok(CheckResult {
        guess,
        target,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterResult::{Absent, Correct, Present};

    #[test]
    fn check_reports_tiles() {
        let result = check_guess("abcde", "level").unwrap();
        assert_eq!(result.guess.text(), "ABCDE");
        assert_eq!(result.target.text(), "LEVEL");
        assert_eq!(
            result.tiles(),
            [
                ('A', Absent),
                ('B', Absent),
                ('C', Absent),
                ('D', Absent),
                ('E', Present)
            ]
        );
    }

    #[test]
    fn check_exact_match() {
        let result = check_guess("crane", "CRANE").unwrap();
        assert!(result.feedback.is_perfect());
        assert!(result.tiles().iter().all(|&(_, r)| r == Correct));
    }

    #[test]
    fn check_rejects_invalid_input() {
        assert!(check_guess("crane", "cranes").is_err());
        assert!(check_guess("cr@ne", "crane").is_err());
    }
}
