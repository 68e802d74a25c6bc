//! One-shot commands: print the board, or start over and print it

use crate::game::{Game, MAX_GUESSES};
use crate::output::formatters::emoji_grid;
use crate::output::{write_board, write_keyboard};
use crate::store::StateStore;
use crate::wordlists::WordSource;
use anyhow::Result;
use std::io::{self, Write};

/// Board followed by the keyboard hints
pub(crate) fn write_summary<S, W, O>(out: &mut O, game: &Game<S, W>) -> io::Result<()>
where
    S: StateStore,
    W: WordSource,
    O: Write,
{
    write_board(out, game.state(), game.draft())?;
    writeln!(out)?;
    write_keyboard(out, &game.keyboard_hints())
}

/// Print the current game
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_show<S, W, O>(game: &Game<S, W>, out: &mut O) -> Result<()>
where
    S: StateStore,
    W: WordSource,
    O: Write,
{
    writeln!(out, "Game {}", game.state().secret_id())?;
    write_summary(out, game)?;

    if game.state().is_terminal() {
        writeln!(out, "\n{}", emoji_grid(game.state()))?;
    } else {
        writeln!(
            out,
            "\n{} of {MAX_GUESSES} guesses left",
            game.state().remaining_guesses()
        )?;
    }
    Ok(())
}

/// Throw the current game away, start a new one and print it
///
/// # Errors
///
/// Returns an error if the new game cannot be saved or output fails.
pub fn run_restart<S, W, O>(game: &mut Game<S, W>, out: &mut O) -> Result<()>
where
    S: StateStore,
    W: WordSource,
    O: Write,
{
    game.restart()?;
    writeln!(out, "New game started")?;
    run_show(game, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::wordlists::WordBank;
    use crate::wordlists::loader::words_from_slice;
    use chrono::NaiveDate;

    fn game() -> Game<MemoryStore, WordBank> {
        let words = WordBank::new(words_from_slice(&["hello", "speed"])).unwrap();
        let day = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        Game::load_on(MemoryStore::new(), words, day)
    }

    #[test]
    fn show_prints_running_game() {
        let game = game();
        let mut out = Vec::new();
        run_show(&game, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Game 2026-10-17/"));
        assert!(text.contains("6 of 6 guesses left"));
    }

    #[test]
    fn show_prints_grid_when_finished() {
        let mut game = game();
        let answer = game.state().secret().text().to_string();
        for letter in answer.chars() {
            game.append_letter(letter).unwrap();
        }
        game.submit_guess().unwrap();

        let mut out = Vec::new();
        run_show(&game, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(" 1/6\n🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn restart_saves_new_game() {
        let mut game = game();
        let before = game.state().secret_id();

        let mut out = Vec::new();
        run_restart(&mut game, &mut out).unwrap();

        assert_ne!(game.state().secret_id(), before);
        assert_eq!(
            game.store().saved().unwrap().secret_id,
            game.state().secret_id().to_string()
        );
    }
}
