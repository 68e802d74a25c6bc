//! TUI application state and logic

use crate::game::{Game, Status};
use crate::output::formatters::{rejection_message, status_message};
use crate::store::{StateStore, StoreError};
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::warn;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<S, W> {
    pub game: Game<S, W>,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    /// Waiting for y/n before throwing away a game in progress
    ConfirmRestart,
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

impl<S: StateStore, W: WordSource> App<S, W> {
    #[must_use]
    pub fn new(game: Game<S, W>) -> Self {
        let mut app = Self {
            game,
            messages: Vec::new(),
            input_mode: InputMode::Typing,
            should_quit: false,
        };

        match status_message(app.game.state()) {
            Some(message) => app.announce_end(message),
            None => app.add_message("Type a word and press Enter", MessageStyle::Info),
        }
        app
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match (self.input_mode, key.code) {
            (_, KeyCode::Char('c')) if ctrl => self.should_quit = true,

            (InputMode::ConfirmRestart, KeyCode::Char('y' | 'Y')) => {
                self.input_mode = InputMode::Typing;
                self.restart();
            }
            (InputMode::ConfirmRestart, _) => {
                self.input_mode = InputMode::Typing;
                self.add_message("Kept current game", MessageStyle::Info);
            }

            (InputMode::Typing, KeyCode::Esc) => self.should_quit = true,
            (InputMode::Typing, KeyCode::Char('n')) if ctrl => self.request_restart(),
            (InputMode::Typing, KeyCode::Char(c)) if !ctrl => {
                let result = self.game.append_letter(c);
                self.check_saved(result);
            }
            (InputMode::Typing, KeyCode::Backspace) => {
                let result = self.game.backspace();
                self.check_saved(result);
            }
            (InputMode::Typing, KeyCode::Enter) => {
                if self.game.state().is_terminal() {
                    self.restart();
                } else {
                    self.submit();
                }
            }
            _ => {}
        }
    }

    fn submit(&mut self) {
        match self.game.submit_guess() {
            Ok(outcome) => {
                if let Some(message) = rejection_message(&outcome) {
                    self.add_message(message, MessageStyle::Error);
                    return;
                }
            }
            // The guess still counts in memory
            Err(e) => self.save_failed(&e),
        }

        if let Some(message) = status_message(self.game.state()) {
            self.announce_end(message);
        }
    }

    fn request_restart(&mut self) {
        if self.game.state().guesses().is_empty() || self.game.state().is_terminal() {
            self.restart();
        } else {
            self.input_mode = InputMode::ConfirmRestart;
            self.add_message("Abandon this game? (y/n)", MessageStyle::Info);
        }
    }

    pub fn restart(&mut self) {
        let result = self.game.restart();
        self.messages.clear();
        self.check_saved(result);
        self.add_message("New game started", MessageStyle::Info);
    }

    fn announce_end(&mut self, message: String) {
        let style = match self.game.status() {
            Status::Won => MessageStyle::Success,
            _ => MessageStyle::Error,
        };
        self.add_message(&message, style);
        self.add_message("Press Enter to play again", MessageStyle::Info);
    }

    fn check_saved<T>(&mut self, result: Result<T, StoreError>) {
        if let Err(e) = result {
            self.save_failed(&e);
        }
    }

    fn save_failed(&mut self, e: &StoreError) {
        warn!("Save failed: {e}");
        self.add_message(&format!("Could not save game: {e}"), MessageStyle::Error);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
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
pub fn run_tui<S: StateStore, W: WordSource>(app: App<S, W>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, S, W>(terminal: &mut Terminal<B>, mut app: App<S, W>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: StateStore,
    W: WordSource,
{
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }

    Ok(())
}
