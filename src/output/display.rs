//! Display functions for command results

use super::formatters::{celebration, colored_row, create_progress_bar, keyboard_lines};
use crate::commands::CheckResult;
use crate::game::{Game, GameOver, RowReveal};
use crate::stats::Statistics;
use colored::Colorize;

/// Print every submitted row of a game, then blank placeholders for the rest
pub fn print_board(game: &Game) {
    println!();
    for row in game.rows() {
        println!("  {}", colored_row(&row.tiles()));
    }
    for _ in game.rows().len()..game.max_rows() {
        println!("  {}", " _ ".repeat(crate::core::WORD_LENGTH).bright_black());
    }
    println!();
}

/// Print a freshly revealed row with its emoji strip
pub fn print_reveal(reveal: &RowReveal) {
    let emoji: String = reveal.tiles.iter().map(|&(_, r)| r.to_emoji()).collect();
    println!(
        "  {}. {}  {}",
        (reveal.row + 1).to_string().bright_black(),
        colored_row(&reveal.tiles),
        emoji
    );
}

/// Print the keyboard hints
pub fn print_keyboard(game: &Game) {
    for line in keyboard_lines(game.keyboard()) {
        println!("  {line}");
    }
    println!();
}

/// Print the end-of-game banner
pub fn print_game_over(over: &GameOver) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    if over.won {
        println!("  {}", celebration(over.attempts).bright_green().bold());
        println!(
            "  Solved {} in {} {}",
            over.target.text().bright_yellow().bold(),
            over.attempts.to_string().bright_cyan().bold(),
            if over.attempts == 1 { "guess" } else { "guesses" }
        );
    } else {
        println!("  {}", "❌ Out of guesses!".red().bold());
        println!("  The word was {}", over.target.text().bright_yellow().bold());
    }
    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print accumulated statistics with a guess distribution chart
pub fn print_statistics(stats: &Statistics, max_rows: usize) {
    println!("\n📊 {}", "Statistics".bright_cyan().bold());
    println!("  Played:          {}", stats.played());
    println!("  Win %:           {:.0}", stats.win_percentage());
    println!("  Current streak:  {}", stats.current_streak());
    println!("  Max streak:      {}", stats.max_streak());

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.distribution().values().copied().max().unwrap_or(0);
    for attempts in 1..=max_rows {
        let count = stats.distribution().get(&attempts).copied().unwrap_or(0);
        let bar = create_progress_bar(count as f64, max_count as f64, 30);
        println!("  {attempts}: {} {count}", bar.green());
    }
    println!();
}

/// Print the result of a one-off evaluation
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n{} vs {}",
        result.guess.text().bright_white().bold(),
        result.target.text().bright_yellow().bold()
    );
    println!("  {}  {}", colored_row(&result.tiles()), result.feedback);
    if result.feedback.is_perfect() {
        println!("  {}", "✅ Exact match".green().bold());
    }
}
