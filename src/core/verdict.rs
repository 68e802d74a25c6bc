//! Guess evaluation and the per-letter verdict it produces
//!
//! A verdict holds one mark per position:
//! - `Exact`: the letter is in the secret at this position
//! - `Close`: the letter is in the secret, somewhere else
//! - `Missing`: the letter is not in the secret (or all its occurrences are
//!   already accounted for)
//!
//! The text form uses one symbol per mark: `x`, `c` and `_`.

use super::word::{WORD_LENGTH, Word, WordError};
use std::fmt;
use thiserror::Error;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Exact,
    Close,
    Missing,
}

impl Mark {
    /// Persisted symbol for this mark
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => 'x',
            Self::Close => 'c',
            Self::Missing => '_',
        }
    }

    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'x' => Some(Self::Exact),
            'c' => Some(Self::Close),
            '_' => Some(Self::Missing),
            _ => None,
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Close => '🟨',
            Self::Missing => '⬜',
        }
    }
}

/// Error returned when a persisted verdict string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid verdict string: {0:?}")]
pub struct ParseVerdictError(pub String);

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Verdict([Mark; WORD_LENGTH]);

impl Verdict {
    /// All exact (the guess was the secret)
    pub const SOLVED: Self = Self([Mark::Exact; WORD_LENGTH]);

    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Evaluate a raw guess against the secret
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the guess is not 5 letters long,
    /// or `WordError::InvalidCharacters` if it is not made of letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{Verdict, Word, WordError};
    ///
    /// let secret = Word::new("slate").unwrap();
    /// let verdict = Verdict::evaluate(&secret, "crane").unwrap();
    /// assert_eq!(verdict.to_string(), "__x_x");
    ///
    /// assert_eq!(
    ///     Verdict::evaluate(&secret, "cranes"),
    ///     Err(WordError::InvalidLength(6))
    /// );
    /// ```
    pub fn evaluate(secret: &Word, guess: &str) -> Result<Self, WordError> {
        let guess = Word::new(guess)?;
        Ok(Self::calculate(&guess, secret))
    }

    /// Calculate the verdict when `guess` is played against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the secret's pool
    /// 2. Second pass: mark close letters while the pool still holds them
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut marks = [Mark::Missing; WORD_LENGTH];
        let mut remaining = secret.char_counts();

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.char_at(i);
            if letter == secret.char_at(i) {
                marks[i] = Mark::Exact;
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if marks[i] == Mark::Exact {
                continue;
            }
            if let Some(count) = remaining.get_mut(&guess.char_at(i))
                && *count > 0
            {
                marks[i] = Mark::Close;
                *count -= 1;
            }
        }

        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is exact
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Render as a share-style emoji row, e.g. "⬜⬜🟩⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|mark| mark.emoji()).collect()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Verdict {
    type Err = ParseVerdictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseVerdictError(s.to_string());

        let mut marks = [Mark::Missing; WORD_LENGTH];
        let mut symbols = s.chars();
        for slot in &mut marks {
            let symbol = symbols.next().ok_or_else(invalid)?;
            *slot = Mark::from_symbol(symbol).ok_or_else(invalid)?;
        }
        if symbols.next().is_some() {
            return Err(invalid());
        }

        Ok(Self(marks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(secret: &str, guess: &str) -> String {
        let secret = Word::new(secret).unwrap();
        Verdict::evaluate(&secret, guess).unwrap().to_string()
    }

    #[test]
    fn exact_match_is_solved() {
        let secret = Word::new("hello").unwrap();
        let verdict = Verdict::evaluate(&secret, "hello").unwrap();
        assert_eq!(verdict, Verdict::SOLVED);
        assert!(verdict.is_solved());
    }

    #[test]
    fn no_shared_letters_all_missing() {
        assert_eq!(eval("hello", "brand"), "_____");
    }

    #[test]
    fn duplicate_letters_limited_by_secret_count() {
        // SPEED has two E's; ERASE may not be credited for more than two
        assert_eq!(eval("speed", "erase"), "c__cc");
    }

    #[test]
    fn duplicate_letters_exact_consumes_before_close() {
        // The exact L in position 1 uses one of ALLOW's two L's
        assert_eq!(eval("allow", "llama"), "cxc__");
    }

    #[test]
    fn duplicate_letters_later_exact_wins() {
        // First O is close, second O is exact
        assert_eq!(eval("floor", "robot"), "cc_x_");
    }

    #[test]
    fn repeated_guess_letter_single_in_secret() {
        assert_eq!(eval("crane", "eerie"), "__c_x");
        assert_eq!(eval("thorn", "ooooo"), "__x__");
    }

    #[test]
    fn evaluation_is_deterministic() {
        let secret = Word::new("speed").unwrap();
        let first = Verdict::evaluate(&secret, "erase").unwrap();
        for _ in 0..10 {
            assert_eq!(Verdict::evaluate(&secret, "erase").unwrap(), first);
        }
    }

    #[test]
    fn evaluate_rejects_wrong_length() {
        let secret = Word::new("speed").unwrap();
        assert_eq!(
            Verdict::evaluate(&secret, "spee"),
            Err(WordError::InvalidLength(4))
        );
        assert_eq!(
            Verdict::evaluate(&secret, ""),
            Err(WordError::InvalidLength(0))
        );
    }

    #[test]
    fn verdict_text_round_trip() {
        let verdict: Verdict = "xc_c_".parse().unwrap();
        assert_eq!(verdict.marks()[0], Mark::Exact);
        assert_eq!(verdict.marks()[1], Mark::Close);
        assert_eq!(verdict.marks()[2], Mark::Missing);
        assert_eq!(verdict.to_string(), "xc_c_");
    }

    #[test]
    fn verdict_parse_invalid() {
        assert!("xxxx".parse::<Verdict>().is_err());
        assert!("xxxxxx".parse::<Verdict>().is_err());
        assert!("xxGxx".parse::<Verdict>().is_err());
        assert!("".parse::<Verdict>().is_err());
    }

    #[test]
    fn verdict_emoji() {
        let verdict: Verdict = "xc___".parse().unwrap();
        assert_eq!(verdict.to_emoji(), "🟩🟨⬜⬜⬜");
    }
}
