//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: type a word and press Enter.

use super::show::write_summary;
use crate::core::WORD_LENGTH;
use crate::game::{Game, SubmitOutcome};
use crate::output::formatters::{emoji_grid, rejection_message};
use crate::store::{StateStore, StoreError};
use crate::wordlists::WordSource;
use anyhow::Result;
use colored::Colorize;
use log::warn;
use std::io::{BufRead, Write};

/// Run the line-oriented game loop until `:quit` or end of input
///
/// # Errors
///
/// Returns an error if reading input or writing output fails. Save failures
/// are reported inline and do not end the session.
pub fn run_simple<S, W, R, O>(game: &mut Game<S, W>, mut input: R, out: &mut O) -> Result<()>
where
    S: StateStore,
    W: WordSource,
    R: BufRead,
    O: Write,
{
    writeln!(out, "\n{}", "wordle_daily".bright_cyan().bold())?;
    writeln!(out, "Type a 5-letter word and press Enter.")?;
    writeln!(out, "Commands: ':new' for a new game, ':quit' to exit\n")?;

    write_summary(out, game)?;

    loop {
        write!(out, "Guess: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        match line.trim().to_lowercase().as_str() {
            "" => {}
            ":quit" | ":q" => {
                writeln!(out, "\nThanks for playing!\n")?;
                return Ok(());
            }
            ":new" | ":n" => {
                report(out, game.restart())?;
                writeln!(out, "\n{}\n", "New game started!".bright_green())?;
                write_summary(out, game)?;
            }
            word => play_word(game, word, out)?,
        }
    }
}

fn play_word<S, W, O>(game: &mut Game<S, W>, word: &str, out: &mut O) -> Result<()>
where
    S: StateStore,
    W: WordSource,
    O: Write,
{
    if word.chars().count() != WORD_LENGTH || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        writeln!(out, "{}", format!("Enter {WORD_LENGTH} letters").red())?;
        return Ok(());
    }

    // Anything left over from a previous session is replaced by this line
    clear_draft(game, out)?;
    for letter in word.chars() {
        report(out, game.append_letter(letter))?;
    }

    let outcome = report(out, game.submit_guess())?;
    if let Some(message) = outcome.as_ref().and_then(rejection_message) {
        writeln!(out, "{}", message.red())?;
        clear_draft(game, out)?;
        return Ok(());
    }

    writeln!(out)?;
    write_summary(out, game)?;

    if let Some(SubmitOutcome::Accepted(_)) = outcome
        && game.state().is_terminal()
    {
        writeln!(out, "\n{}\n", emoji_grid(game.state()))?;
        writeln!(out, "Type ':new' to play again or ':quit' to exit")?;
    }
    Ok(())
}

fn clear_draft<S, W, O>(game: &mut Game<S, W>, out: &mut O) -> Result<()>
where
    S: StateStore,
    W: WordSource,
    O: Write,
{
    while !game.draft().is_empty() {
        if report(out, game.backspace())? != Some(true) {
            break;
        }
    }
    Ok(())
}

/// Print a save failure and carry on with the in-memory game
fn report<T, O: Write>(out: &mut O, result: Result<T, StoreError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            warn!("Save failed: {e}");
            writeln!(out, "{}", format!("Could not save game: {e}").red())?;
            Ok(None)
        }
    }
}
