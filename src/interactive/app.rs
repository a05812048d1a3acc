//! TUI application state and logic

use crate::game::{Dictionary, EventOutcome, InputEvent, Session, SubmitOutcome, WordSource};
use crate::output::formatters::celebration;
use crate::stats::Statistics;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<S, D> {
    pub session: Session<S, D, Statistics>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: WordSource, D: Dictionary> App<S, D> {
    #[must_use]
    pub fn new(session: Session<S, D, Statistics>) -> Self {
        Self {
            session,
            messages: vec![Message {
                text: "Welcome! Type a word and press Enter.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// Translate a key press into a game event or an app command
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_game();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => self.handle_event(InputEvent::from_char(c)),
            KeyCode::Enter => self.handle_event(InputEvent::Submit),
            KeyCode::Backspace => self.handle_event(InputEvent::Delete),
            _ => self.handle_event(InputEvent::Other),
        }
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match self.session.handle(event) {
            EventOutcome::Ignored
            | EventOutcome::BufferChanged
            | EventOutcome::Submitted(SubmitOutcome::NotReady) => {}
            EventOutcome::Submitted(SubmitOutcome::Rejected(word)) => {
                self.add_message(&format!("{word}: not in word list!"), MessageStyle::Error);
            }
            EventOutcome::Submitted(SubmitOutcome::Revealed(reveal)) => {
                if let Some(over) = reveal.game_over {
                    if over.won {
                        self.add_message(celebration(over.attempts), MessageStyle::Success);
                    } else {
                        self.add_message(
                            &format!("Out of guesses! The word was {}", over.target),
                            MessageStyle::Error,
                        );
                    }
                    self.add_message(
                        "Press Ctrl-N for new game or Esc to quit.",
                        MessageStyle::Info,
                    );
                }
            }
        }
    }

    pub fn new_game(&mut self) {
        self.session.new_game();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: WordSource, D: Dictionary>(app: App<S, D>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, S, D>(terminal: &mut Terminal<B>, mut app: App<S, D>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: WordSource,
    D: Dictionary,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
