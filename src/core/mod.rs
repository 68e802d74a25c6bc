//! Core domain types for the puzzle
//!
//! Words, marks and verdicts. Everything here is pure: no I/O, no clock, no
//! randomness.

mod verdict;
mod word;

pub use verdict::{Mark, ParseVerdictError, Verdict};
pub use word::{WORD_LENGTH, Word, WordError};
