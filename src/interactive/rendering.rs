//! TUI rendering with ratatui
//!
//! Tile grid, on-screen keyboard, messages and statistics.

use super::app::{App, MessageStyle};
use crate::core::{LetterResult, WORD_LENGTH};
use crate::game::{Dictionary, Game, GameStatus, WordSource};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: WordSource, D: Dictionary>(f: &mut Frame, app: &App<S, D>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board + keyboard
            Constraint::Percentage(45), // Stats + messages
        ])
        .split(chunks[1]);

    render_play_panel(f, app.session.game(), main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_play_panel(f: &mut Frame, game: &Game, area: Rect) {
    let board_height = u16::try_from(game.max_rows() * 2 + 1).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(board_height.saturating_add(2)),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(area);

    render_board(f, game, chunks[0]);
    render_keyboard(f, game, chunks[1]);
}

fn tile_style(result: LetterResult) -> Style {
    let bg = match result {
        LetterResult::Correct => Color::Green,
        LetterResult::Present => Color::Yellow,
        LetterResult::Absent => Color::DarkGray,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

fn render_board(f: &mut Frame, game: &Game, area: Rect) {
    let mut lines = Vec::with_capacity(game.max_rows() * 2);

    for row in game.rows() {
        let spans: Vec<Span> = row
            .tiles()
            .iter()
            .flat_map(|&(letter, result)| {
                [
                    Span::styled(format!(" {letter} "), tile_style(result)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    // Current row shows the buffer padded with blanks
    if game.status() == GameStatus::Playing {
        let buffer = game.buffer();
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|i| {
                let text = buffer
                    .get(i)
                    .map_or_else(|| " _ ".to_string(), |&b| format!(" {} ", char::from(b)));
                [
                    Span::styled(text, Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let filled = game.rows().len() + usize::from(game.status() == GameStatus::Playing);
    for _ in filled..game.max_rows() {
        lines.push(Line::from(
            Span::styled(" · ".repeat(WORD_LENGTH), Style::default().fg(Color::DarkGray)),
        ));
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Guess {}/{} ", game.rows().len(), game.max_rows()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, game: &Game, area: Rect) {
    let keyboard = game.keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|b| {
                    let style = keyboard
                        .status(b)
                        .map_or_else(|| Style::default().fg(Color::White), tile_style);
                    [Span::styled(format!(" {} ", char::from(b)), style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(widget, area);
}

fn render_info_panel<S: WordSource, D: Dictionary>(f: &mut Frame, app: &App<S, D>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Win rate gauge
            Constraint::Min(8),    // Guess distribution
            Constraint::Length(8), // Messages
        ])
        .split(area);

    render_win_rate(f, app, chunks[0]);
    render_distribution(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_win_rate<S: WordSource, D: Dictionary>(f: &mut Frame, app: &App<S, D>, area: Rect) {
    let stats = app.session.stats();
    let percent = stats.win_percentage().round().clamp(0.0, 100.0) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Win Rate ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent)
        .label(format!("{percent}% of {} games", stats.played()));

    f.render_widget(gauge, area);
}

fn render_distribution<S: WordSource, D: Dictionary>(f: &mut Frame, app: &App<S, D>, area: Rect) {
    let stats = app.session.stats();
    let max_rows = app.session.game().max_rows();
    let distribution = stats.distribution();
    let most = distribution.values().copied().max().unwrap_or(0).max(1);
    let bar_width = usize::from(area.width.saturating_sub(10)).max(1);

    let mut lines = vec![Line::from(format!(
        "Streak: {}  Best: {}",
        stats.current_streak(),
        stats.max_streak()
    ))];

    for attempts in 1..=max_rows {
        let count = distribution.get(&attempts).copied().unwrap_or(0);
        let len = (count * bar_width / most).max(usize::from(count > 0));
        lines.push(Line::from(vec![
            Span::raw(format!("{attempts}: ")),
            Span::styled("█".repeat(len), Style::default().fg(Color::Cyan)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Guess Distribution ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_messages<S: WordSource, D: Dictionary>(f: &mut Frame, app: &App<S, D>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<S: WordSource, D: Dictionary>(f: &mut Frame, app: &App<S, D>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let mode_text = match app.session.game().status() {
        GameStatus::Playing => "Mode: Playing",
        GameStatus::Won => "Mode: Won 🎉",
        GameStatus::Lost => "Mode: Lost",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let help_text = if app.session.game().status().is_terminal() {
        "Ctrl-N: New Game | Esc: Quit"
    } else {
        "Type letters | Enter: Submit | Backspace: Delete | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
