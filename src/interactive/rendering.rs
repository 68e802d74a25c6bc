//! TUI rendering with ratatui
//!
//! Board, keyboard hints, messages and a status bar.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Mark, WORD_LENGTH};
use crate::game::{MAX_GUESSES, Status};
use crate::output::formatters::KEYBOARD_ROWS;
use crate::store::StateStore;
use crate::wordlists::WordSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: StateStore, W: WordSource>(f: &mut Frame, app: &App<S, W>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                           // Header
            Constraint::Length(MAX_GUESSES as u16 * 2 + 2), // Board
            Constraint::Length(5),                           // Keyboard
            Constraint::Min(4),                              // Messages
            Constraint::Length(1),                           // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

/// Colours for a letter cell
fn mark_style(mark: Option<Mark>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match mark {
        Some(Mark::Exact) => base.fg(Color::Black).bg(Color::Green),
        Some(Mark::Close) => base.fg(Color::Black).bg(Color::Yellow),
        Some(Mark::Missing) => base.fg(Color::White).bg(Color::DarkGray),
        None => base.fg(Color::White),
    }
}

fn cell(letter: char, style: Style) -> Span<'static> {
    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style)
}

fn render_header<S: StateStore, W: WordSource>(f: &mut Frame, app: &App<S, W>, area: Rect) {
    let title = format!("WORDLE DAILY  {}", app.game.state().secret_id().day);
    let header = Paragraph::new(title)
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

fn board_lines<S: StateStore, W: WordSource>(app: &App<S, W>) -> Vec<Line<'static>> {
    let state = app.game.state();
    let mut lines = Vec::with_capacity(MAX_GUESSES * 2);

    for (guess, verdict) in state.rows() {
        let spans: Vec<Span> = guess
            .text()
            .chars()
            .zip(verdict.marks())
            .flat_map(|(letter, mark)| [cell(letter, mark_style(Some(*mark))), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let mut rows_left = MAX_GUESSES - state.guesses().len();
    if rows_left > 0 && !state.is_terminal() {
        let typed = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let spans: Vec<Span> = app
            .game
            .draft()
            .chars()
            .chain(std::iter::repeat('_'))
            .take(WORD_LENGTH)
            .flat_map(|letter| [cell(letter, typed), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::default());
        rows_left -= 1;
    }

    let empty = Style::default().fg(Color::DarkGray);
    for _ in 0..rows_left {
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|_| [cell('·', empty), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    lines
}

fn render_board<S: StateStore, W: WordSource>(f: &mut Frame, app: &App<S, W>, area: Rect) {
    let border = match app.game.status() {
        Status::InProgress => Color::White,
        Status::Won => Color::Green,
        Status::Lost => Color::Red,
    };

    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(
                    " Guesses left: {} ",
                    app.game.state().remaining_guesses()
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(border)),
        );
    f.render_widget(board, area);
}

fn render_keyboard<S: StateStore, W: WordSource>(f: &mut Frame, app: &App<S, W>, area: Rect) {
    let hints = app.game.keyboard_hints();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|b| cell(char::from(b), mark_style(hints.get(&b).copied())))
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages<S: StateStore, W: WordSource>(f: &mut Frame, app: &App<S, W>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<S: StateStore, W: WordSource>(f: &mut Frame, app: &App<S, W>, area: Rect) {
    let help_text = match (app.input_mode, app.game.status()) {
        (InputMode::ConfirmRestart, _) => "y: Abandon game | any other key: Keep playing",
        (InputMode::Typing, Status::InProgress) => {
            "a-z: Type | Enter: Submit | Backspace: Delete | Ctrl+N: New game | Esc: Quit"
        }
        (InputMode::Typing, _) => "Enter: Play again | Esc: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
