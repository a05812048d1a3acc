//! Property-based invariants for evaluation, keyboard merging and game flow.
//!
//! 1. evaluate(w, w) is all Correct.
//! 2. Present + Correct for a letter never exceeds its count in the target.
//! 3. Correct exactly where guess and target agree.
//! 4. Keyboard priority per letter never decreases across merges.
//! 5. max_rows non-winning guesses end in Lost; a winning guess ends in Won.

use proptest::prelude::*;
use wordle_clone::core::{KeyboardState, LetterResult, WORD_LENGTH, Word, evaluate};
use wordle_clone::game::{AnyWord, Game, GameStatus, InputEvent};

// Small alphabets force repeated letters, which is where evaluation gets interesting
fn word() -> impl Strategy<Value = Word> {
    "[a-f]{5}".prop_map(|s| Word::new(s).unwrap())
}

fn any_word() -> impl Strategy<Value = Word> {
    "[a-z]{5}".prop_map(|s| Word::new(s).unwrap())
}

fn count_in(word: &Word, letter: u8) -> usize {
    word.letters().iter().filter(|&&b| b == letter).count()
}

fn type_and_submit(game: &mut Game, word: &Word) {
    for &letter in word.letters() {
        game.handle(InputEvent::Letter(letter), &AnyWord);
    }
    game.handle(InputEvent::Submit, &AnyWord);
}

proptest! {
    #[test]
    fn self_evaluation_is_perfect(w in any_word()) {
        prop_assert!(evaluate(&w, &w).is_perfect());
    }

    #[test]
    fn marked_letters_bounded_by_target_count(guess in word(), target in word()) {
        let feedback = evaluate(&guess, &target);

        for letter in b'A'..=b'F' {
            let marked = guess
                .letters()
                .iter()
                .zip(feedback.results())
                .filter(|&(&g, &r)| g == letter && r != LetterResult::Absent)
                .count();
            prop_assert!(
                marked <= count_in(&target, letter),
                "{} marked {} times for {} in {}",
                char::from(letter), marked, guess, target
            );
        }
    }

    #[test]
    fn correct_exactly_on_positional_match(guess in word(), target in word()) {
        let feedback = evaluate(&guess, &target);

        for i in 0..WORD_LENGTH {
            let matches = guess.letter_at(i) == target.letter_at(i);
            prop_assert_eq!(feedback.results()[i] == LetterResult::Correct, matches);
        }
    }

    #[test]
    fn absent_only_when_occurrences_exhausted(guess in word(), target in word()) {
        let feedback = evaluate(&guess, &target);

        for letter in b'A'..=b'F' {
            let marked = guess
                .letters()
                .iter()
                .zip(feedback.results())
                .filter(|&(&g, &r)| g == letter && r != LetterResult::Absent)
                .count();
            let expected = count_in(&guess, letter).min(count_in(&target, letter));
            prop_assert_eq!(marked, expected);
        }
    }

    #[test]
    fn keyboard_never_downgrades(
        target in word(),
        guesses in proptest::collection::vec(word(), 1..10),
    ) {
        let mut keyboard = KeyboardState::new();

        for guess in &guesses {
            let before: Vec<u8> = (b'A'..=b'Z').map(|l| keyboard.priority(l)).collect();
            keyboard.merge(guess, &evaluate(guess, &target));

            for (letter, old) in (b'A'..=b'Z').zip(before) {
                prop_assert!(keyboard.priority(letter) >= old);
            }
        }
    }

    #[test]
    fn losing_sequence_ends_lost(
        target in any_word(),
        guesses in proptest::collection::vec(any_word(), 1..8),
    ) {
        prop_assume!(guesses.iter().all(|g| *g != target));
        let max_rows = guesses.len();
        let mut game = Game::new(target, max_rows);

        for (i, guess) in guesses.iter().enumerate() {
            prop_assert_eq!(game.status(), GameStatus::Playing);
            type_and_submit(&mut game, guess);
            prop_assert_eq!(game.rows().len(), i + 1);
        }

        prop_assert_eq!(game.status(), GameStatus::Lost);
    }

    #[test]
    fn exact_match_wins_on_any_row(
        target in any_word(),
        misses in proptest::collection::vec(any_word(), 0..5),
    ) {
        prop_assume!(misses.iter().all(|g| *g != target));
        let mut game = Game::new(target.clone(), 6);

        for guess in &misses {
            type_and_submit(&mut game, guess);
        }
        type_and_submit(&mut game, &target);

        prop_assert_eq!(game.status(), GameStatus::Won);
        prop_assert_eq!(game.rows().len(), misses.len() + 1);

        // Terminal: nothing changes afterwards
        type_and_submit(&mut game, &target);
        prop_assert_eq!(game.rows().len(), misses.len() + 1);
    }
}
