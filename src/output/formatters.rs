//! Plain-text formatting shared by the terminal front ends

use crate::game::{GameState, MAX_GUESSES, Status, SubmitOutcome};

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Spoiler-free summary: a header plus one emoji row per guess
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wordle_daily::core::Word;
/// use wordle_daily::game::GameState;
/// use wordle_daily::output::formatters::emoji_grid;
/// use wordle_daily::wordlists::{Secret, SecretId};
///
/// let day = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
/// let secret = Secret { id: SecretId::new(day, 7), word: Word::new("hello").unwrap() };
/// let state = GameState::new(secret);
/// assert_eq!(emoji_grid(&state), "wordle_daily 2026-10-17/7 0/6");
/// ```
#[must_use]
pub fn emoji_grid(state: &GameState) -> String {
    let score = match state.status() {
        Status::Lost => "X".to_string(),
        _ => state.guesses().len().to_string(),
    };

    let mut lines = vec![format!(
        "wordle_daily {} {score}/{MAX_GUESSES}",
        state.secret_id()
    )];
    lines.extend(state.verdicts().iter().map(|v| v.to_emoji()));
    lines.join("\n")
}

/// End-of-game message, `None` while the game is running
#[must_use]
pub fn status_message(state: &GameState) -> Option<String> {
    match state.status() {
        Status::InProgress => None,
        Status::Won => {
            let n = state.guesses().len();
            Some(format!(
                "You won :) in {n} {}",
                if n == 1 { "guess" } else { "guesses" }
            ))
        }
        Status::Lost => Some(match state.revealed_answer() {
            Some(answer) => format!(
                "Game over :( The answer was \"{}\"",
                answer.text().to_uppercase()
            ),
            None => "Game over :(".to_string(),
        }),
    }
}

/// Why a submission was refused, `None` if it was accepted
#[must_use]
pub const fn rejection_message(outcome: &SubmitOutcome) -> Option<&'static str> {
    match outcome {
        SubmitOutcome::Accepted(_) => None,
        SubmitOutcome::Incomplete => Some("Not enough letters"),
        SubmitOutcome::NotInWordList => Some("Not in word list"),
        SubmitOutcome::GameOver => Some("Game is over, restart to play again"),
    }
}
