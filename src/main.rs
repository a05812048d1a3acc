//! Wordle Clone - CLI
//!
//! Play Wordle in a TUI or a plain line-based terminal, or check one guess.

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use wordle_clone::{
    commands::{check_guess, run_simple},
    config::{ConfigError, GameConfig},
    core::Word,
    game::{DEFAULT_MAX_ROWS, Session},
    output::print_check_result,
    stats::Statistics,
    wordlists::{ALLOWED, ANSWERS, SourceType, WordList, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_clone",
    about = "Guess the hidden five-letter word in the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, answers + allowed guesses), 'answers', or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Number of guesses per game
    #[arg(short = 'g', long, global = true, default_value_t = DEFAULT_MAX_ROWS)]
    max_guesses: usize,

    /// Seed for reproducible target selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Play every game against this word instead of a random one
    #[arg(short, long, global = true)]
    target: Option<String>,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Show the feedback for a single guess against a target
    Check {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,
    },
}

/// Load wordlists based on the -w flag
///
/// Returns (`dictionary`, `answer_candidates`)
/// - "all": answers and allowed guesses are valid, targets come from answers
/// - "answers": only answers are valid guesses
/// - "<path>": custom wordlist used for both guesses and targets
fn load_wordlists(wordlist_mode: &str) -> Result<(WordList, Vec<Word>)> {
    use wordle_clone::wordlists::loader::load_from_file;

    match wordlist_mode {
        "all" => {
            let answer_words = words_from_slice(ANSWERS);
            let dictionary = WordList::new(&answer_words, &words_from_slice(ALLOWED));
            Ok((dictionary, answer_words))
        }
        "answers" => {
            let answer_words = words_from_slice(ANSWERS);
            let dictionary = WordList::new(&answer_words, std::iter::empty());
            Ok((dictionary, answer_words))
        }
        path => {
            let custom_words = load_from_file(path)?;
            if custom_words.is_empty() {
                return Err(ConfigError::EmptyWordList(path.to_string()).into());
            }
            let dictionary = WordList::new(&custom_words, std::iter::empty());
            Ok((dictionary, custom_words))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    if let Commands::Check { guess, target } = &command {
        return run_check_command(guess, target);
    }

    let config = GameConfig::new(cli.max_guesses, cli.seed, cli.target.as_deref())?;
    let (dictionary, answer_words) = load_wordlists(&cli.wordlist)?;
    config.check_target(&dictionary)?;
    log::info!(
        "{} valid guesses, {} possible targets",
        dictionary.len(),
        answer_words.len()
    );

    let source = SourceType::from_config(&config, answer_words)?;
    let session = Session::new(source, dictionary, Statistics::default(), config.max_rows);

    match command {
        Commands::Play => run_play_command(session),
        Commands::Simple => run_simple_command(session),
        Commands::Check { .. } => Ok(()),
    }
}

fn run_check_command(guess: &str, target: &str) -> Result<()> {
    let result = check_guess(guess, target)?;
    print_check_result(&result);
    Ok(())
}

fn run_simple_command(mut session: Session<SourceType, WordList>) -> Result<()> {
    run_simple(&mut session)?;
    Ok(())
}

fn run_play_command(session: Session<SourceType, WordList>) -> Result<()> {
    use wordle_clone::interactive::{App, run_tui};

    let app = App::new(session);
    run_tui(app)
}
