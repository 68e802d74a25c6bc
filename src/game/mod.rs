//! Game state and the actions that change it

mod engine;
mod state;

pub use engine::{Game, SubmitOutcome};
pub use state::{GameState, MAX_GUESSES, RestoreError, Status};
