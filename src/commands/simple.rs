//! Simple interactive CLI mode
//!
//! Text-based game without TUI: one guess per line.

use crate::game::{Dictionary, Session, SubmitOutcome, WordSource};
use crate::output::{print_board, print_game_over, print_keyboard, print_reveal, print_statistics};
use crate::stats::Statistics;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: WordSource, D: Dictionary>(
    session: &mut Session<S, D, Statistics>,
) -> io::Result<()> {
    let stdin = io::stdin();
    run_simple_with(session, &mut stdin.lock())
}

/// Run the simple mode reading commands and guesses from `input`
///
/// # Errors
///
/// Returns an error if reading from `input` or flushing stdout fails.
pub fn run_simple_with<S: WordSource, D: Dictionary>(
    session: &mut Session<S, D, Statistics>,
    input: &mut impl BufRead,
) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the {}-letter word in {} tries.",
        crate::core::WORD_LENGTH,
        session.game().max_rows()
    );
    println!("  - {} right letter, right spot", " G ".black().on_green());
    println!("  - {} right letter, wrong spot", " Y ".black().on_yellow());
    println!("  - {} not in the word\n", " - ".white().on_bright_black());
    println!("Commands: 'quit' to exit, 'new' for new game, 'stats' for statistics\n");

    loop {
        let prompt = format!("Guess {}", session.game().current_row() + 1);
        let Some(line) = read_line(input, &prompt)? else {
            println!();
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session.new_game();
                println!("\n🔄 New game started!\n");
            }
            "stats" => print_statistics(session.stats(), session.game().max_rows()),
            guess => match session.submit_text(guess) {
                SubmitOutcome::NotReady => {
                    println!(
                        "❌ Enter exactly {} letters\n",
                        crate::core::WORD_LENGTH
                    );
                }
                SubmitOutcome::Rejected(word) => {
                    println!("❌ {} is not in word list!\n", word.text().red());
                }
                SubmitOutcome::Revealed(reveal) => {
                    print_reveal(&reveal);

                    if let Some(over) = &reveal.game_over {
                        print_board(session.game());
                        print_game_over(over);
                        print_statistics(session.stats(), session.game().max_rows());

                        let again = read_line(input, "Play again? (yes/no)")?.unwrap_or_default();
                        if matches!(again.to_lowercase().as_str(), "yes" | "y") {
                            session.new_game();
                            println!("\n🔄 New game started!\n");
                        } else {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    } else {
                        println!();
                        print_keyboard(session.game());
                    }
                }
            },
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn read_line(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{FixedWord, GameStatus};
    use crate::wordlists::WordList;
    use std::io::Cursor;

    fn session() -> Session<FixedWord, WordList> {
        Session::new(
            FixedWord(Word::new("crane").unwrap()),
            WordList::embedded(),
            Statistics::default(),
            6,
        )
    }

    #[test]
    fn plays_until_win_then_quits() {
        let mut session = session();
        let mut input = Cursor::new("slate\nxyzzy\ncr\ncrane\nno\n");

        run_simple_with(&mut session, &mut input).unwrap();

        assert_eq!(session.game().status(), GameStatus::Won);
        assert_eq!(session.game().rows().len(), 2);
        assert_eq!(session.stats().won(), 1);
    }

    #[test]
    fn new_game_command_resets() {
        let mut session = session();
        let mut input = Cursor::new("slate\nnew\nquit\n");

        run_simple_with(&mut session, &mut input).unwrap();

        assert!(session.game().rows().is_empty());
        assert_eq!(session.stats().played(), 0);
    }

    #[test]
    fn end_of_input_stops() {
        let mut session = session();
        let mut input = Cursor::new("slate\n");

        run_simple_with(&mut session, &mut input).unwrap();
        assert_eq!(session.game().rows().len(), 1);
    }

    #[test]
    fn play_again_starts_next_game() {
        let mut session = session();
        let mut input = Cursor::new("crane\nyes\nslate\nq\n");

        run_simple_with(&mut session, &mut input).unwrap();

        assert_eq!(session.stats().played(), 1);
        assert_eq!(session.game().rows().len(), 1);
        assert_eq!(session.game().status(), GameStatus::Playing);
    }
}
