//! Wordle Daily
//!
//! A daily five-letter word puzzle: six guesses, per-letter feedback, and a
//! game that survives restarts of the program.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_daily::core::{Verdict, Word};
//!
//! let secret = Word::new("speed").unwrap();
//! let verdict = Verdict::evaluate(&secret, "erase").unwrap();
//! assert_eq!(verdict.to_string(), "c__cc");
//! ```
//!
//! Playing a game goes through [`game::Game`], which persists itself to a
//! [`store::StateStore`] after every action.

// Core domain types
pub mod core;

// Game state and actions
pub mod game;

// Persistence
pub mod store;

// Word lists
pub mod wordlists;

// Runtime configuration and logging
pub mod config;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
