//! Coloured board and keyboard for line-oriented output

use super::formatters::{KEYBOARD_ROWS, status_message};
use crate::core::{Mark, WORD_LENGTH};
use crate::game::{GameState, MAX_GUESSES};
use colored::{ColoredString, Colorize};
use rustc_hash::FxHashMap;
use std::io::{self, Write};

/// A letter cell coloured by its mark
fn tile(letter: char, mark: Option<Mark>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match mark {
        Some(Mark::Exact) => text.black().on_green().bold(),
        Some(Mark::Close) => text.black().on_yellow().bold(),
        Some(Mark::Missing) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// Print guesses, the draft row and the empty rows left
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_board<W: Write>(out: &mut W, state: &GameState, draft: &str) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(WORD_LENGTH * 3 + 4).cyan())?;

    for (guess, verdict) in state.rows() {
        let cells: Vec<String> = guess
            .text()
            .chars()
            .zip(verdict.marks())
            .map(|(letter, mark)| tile(letter, Some(*mark)).to_string())
            .collect();
        writeln!(out, "  {}", cells.join(""))?;
    }

    let mut rows_left = MAX_GUESSES - state.guesses().len();
    if rows_left > 0 && !state.is_terminal() {
        let typed: String = draft
            .chars()
            .chain(std::iter::repeat('_'))
            .take(WORD_LENGTH)
            .map(|c| format!(" {} ", c.to_ascii_uppercase()))
            .collect();
        writeln!(out, "  {}", typed.bold())?;
        rows_left -= 1;
    }
    for _ in 0..rows_left {
        writeln!(out, "  {}", " · ".repeat(WORD_LENGTH).bright_black())?;
    }

    writeln!(out, "{}", "─".repeat(WORD_LENGTH * 3 + 4).cyan())?;

    if let Some(message) = status_message(state) {
        writeln!(out, "{}", message.bright_yellow().bold())?;
    }
    Ok(())
}

/// Print the keyboard with every letter coloured by its best known mark
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_keyboard<W: Write>(out: &mut W, hints: &FxHashMap<u8, Mark>) -> io::Result<()> {
    for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .bytes()
            .map(|b| tile(char::from(b), hints.get(&b).copied()).to_string())
            .collect();
        writeln!(out, "{}{}", " ".repeat(i * 2), keys.join(""))?;
    }
    Ok(())
}
