//! Terminal output formatting
//!
//! Board and keyboard rendering for the line-oriented commands.

pub mod display;
pub mod formatters;

pub use display::{write_board, write_keyboard};
