//! Secret selection and guess validation
//!
//! A secret is identified by the day it belongs to and its position in the
//! answer list. The daily secret rotates through the list one word per day;
//! a restart draws a random word for the same day.

use super::loader::words_from_slice;
use super::{ALLOWED, ANSWERS};
use crate::core::Word;
use chrono::NaiveDate;
use log::debug;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifies the secret of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SecretId {
    pub day: NaiveDate,
    pub index: usize,
}

impl SecretId {
    #[must_use]
    pub const fn new(day: NaiveDate, index: usize) -> Self {
        Self { day, index }
    }
}

impl fmt::Display for SecretId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.day.format("%Y-%m-%d"), self.index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid secret id: {0:?}")]
pub struct ParseSecretIdError(pub String);

impl FromStr for SecretId {
    type Err = ParseSecretIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseSecretIdError(s.to_string());

        let (day, index) = s.split_once('/').ok_or_else(invalid)?;
        let day = NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|_| invalid())?;
        let index = index.parse().map_err(|_| invalid())?;

        Ok(Self { day, index })
    }
}

/// A chosen secret: its id and the word it resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret {
    pub id: SecretId,
    pub word: Word,
}

/// Where secrets come from and which guesses count as words
pub trait WordSource {
    /// The secret everyone gets on `day`
    fn daily_secret(&self, day: NaiveDate) -> Secret;

    /// A new secret for `day`, different from `previous` when possible
    fn fresh_secret(&self, day: NaiveDate, previous: Option<SecretId>) -> Secret;

    /// Resolve an id to its word; `None` if the id does not name a secret
    fn secret_word(&self, id: SecretId) -> Option<Word>;

    /// Dictionary check for submitted guesses
    fn is_allowed(&self, _guess: &Word) -> bool {
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordListError {
    #[error("answer list is empty")]
    EmptyAnswers,
}

/// Word source backed by in-memory lists
#[derive(Debug, Clone)]
pub struct WordBank {
    answers: Vec<Word>,
    dictionary: Option<FxHashSet<Word>>,
}

/// First day of the rotation; index 0 of the answer list
fn rotation_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 6, 19).unwrap_or_default()
}

impl WordBank {
    /// Build a word bank with no dictionary: any 5 letters are a valid guess
    ///
    /// # Errors
    /// Returns `WordListError::EmptyAnswers` if `answers` is empty.
    pub fn new(answers: Vec<Word>) -> Result<Self, WordListError> {
        if answers.is_empty() {
            return Err(WordListError::EmptyAnswers);
        }
        Ok(Self {
            answers,
            dictionary: None,
        })
    }

    /// The embedded answer pool and dictionary
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::Word;
    /// use wordle_daily::wordlists::{WordBank, WordSource};
    ///
    /// let bank = WordBank::embedded();
    /// assert!(bank.is_allowed(&Word::new("crane").unwrap()));
    /// assert!(!bank.is_allowed(&Word::new("zzzzq").unwrap()));
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            answers: words_from_slice(ANSWERS),
            dictionary: None,
        }
        .with_dictionary(words_from_slice(ALLOWED))
    }

    /// Restrict guesses to `words`; the answers are always accepted as well
    #[must_use]
    pub fn with_dictionary(mut self, words: Vec<Word>) -> Self {
        let mut dictionary: FxHashSet<Word> = words.into_iter().collect();
        dictionary.extend(self.answers.iter().cloned());
        self.dictionary = Some(dictionary);
        self
    }

    /// Accept any 5 letters as a guess
    #[must_use]
    pub fn without_dictionary(mut self) -> Self {
        self.dictionary = None;
        self
    }

    fn secret_at(&self, day: NaiveDate, index: usize) -> Secret {
        Secret {
            id: SecretId::new(day, index),
            word: self.answers[index].clone(),
        }
    }
}

impl WordSource for WordBank {
    fn daily_secret(&self, day: NaiveDate) -> Secret {
        let offset = day.signed_duration_since(rotation_start()).num_days();
        let index = offset.rem_euclid(self.answers.len() as i64) as usize;
        self.secret_at(day, index)
    }

    fn fresh_secret(&self, day: NaiveDate, previous: Option<SecretId>) -> Secret {
        let mut rng = rand::rng();
        let mut index = rng.random_range(0..self.answers.len());

        if self.answers.len() > 1 {
            while previous.is_some_and(|prev| prev.index == index) {
                index = rng.random_range(0..self.answers.len());
            }
        }

        debug!("Drew fresh secret index {index} for {day}");
        self.secret_at(day, index)
    }

    fn secret_word(&self, id: SecretId) -> Option<Word> {
        self.answers.get(id.index).cloned()
    }

    fn is_allowed(&self, guess: &Word) -> bool {
        self.dictionary
            .as_ref()
            .is_none_or(|dictionary| dictionary.contains(guess))
    }
}
