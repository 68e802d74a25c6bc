//! Game state: the secret, submitted guesses and their verdicts
//!
//! Guesses and verdicts are index-aligned and only ever grow together, so the
//! state can never hold a guess without its verdict.

use crate::core::{Mark, Verdict, Word};
use crate::store::{SCHEMA_VERSION, SavedGame};
use crate::wordlists::{Secret, SecretId, WordSource};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Number of guesses a player gets
pub const MAX_GUESSES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    secret: Secret,
    guesses: Vec<Word>,
    verdicts: Vec<Verdict>,
}

/// Why a saved record could not be turned back into a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestoreError {
    #[error("schema version {found}, expected {SCHEMA_VERSION}")]
    SchemaVersion { found: u32 },
    #[error("unreadable secret id {0:?}")]
    SecretId(String),
    #[error("secret {0} is not in the answer list")]
    UnknownSecret(SecretId),
    #[error("{guesses} guesses but {verdicts} verdicts")]
    LengthMismatch { guesses: usize, verdicts: usize },
    #[error("{0} guesses exceeds the limit")]
    TooManyGuesses(usize),
    #[error("guess {index} is not a word: {value:?}")]
    InvalidGuess { index: usize, value: String },
    #[error("verdict {index} does not match its guess")]
    VerdictMismatch { index: usize },
    #[error("guess {index} was played after the game ended")]
    PlayedAfterEnd { index: usize },
}

impl GameState {
    #[must_use]
    pub fn new(secret: Secret) -> Self {
        Self {
            secret,
            guesses: Vec::new(),
            verdicts: Vec::new(),
        }
    }

    #[must_use]
    pub fn secret_id(&self) -> SecretId {
        self.secret.id
    }

    /// The secret word; front ends should prefer [`Self::revealed_answer`]
    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret.word
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    /// Submitted guesses paired with their verdicts, oldest first
    pub fn rows(&self) -> impl Iterator<Item = (&Word, &Verdict)> {
        self.guesses.iter().zip(&self.verdicts)
    }

    #[must_use]
    pub fn status(&self) -> Status {
        match self.verdicts.last() {
            Some(last) if last.is_solved() => Status::Won,
            _ if self.verdicts.len() >= MAX_GUESSES => Status::Lost,
            _ => Status::InProgress,
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status() != Status::InProgress
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        match self.status() {
            Status::InProgress => MAX_GUESSES - self.guesses.len(),
            Status::Won | Status::Lost => 0,
        }
    }

    /// The secret, once the player has run out of guesses
    #[must_use]
    pub fn revealed_answer(&self) -> Option<&Word> {
        (self.status() == Status::Lost).then_some(&self.secret.word)
    }

    /// Best knowledge per letter across all verdicts, keyed by ASCII byte
    ///
    /// A letter seen as `Exact` anywhere stays `Exact`; otherwise `Close`
    /// beats `Missing`. Letters never guessed are absent.
    #[must_use]
    pub fn keyboard_hints(&self) -> FxHashMap<u8, Mark> {
        let mut hints: FxHashMap<u8, Mark> = FxHashMap::default();

        for (guess, verdict) in self.rows() {
            for (&letter, &mark) in guess.chars().iter().zip(verdict.marks()) {
                hints
                    .entry(letter)
                    .and_modify(|known| {
                        if rank(mark) > rank(*known) {
                            *known = mark;
                        }
                    })
                    .or_insert(mark);
            }
        }

        hints
    }

    /// Evaluate and append a guess; the caller checks the game is in progress
    pub(crate) fn record(&mut self, guess: Word) -> Verdict {
        debug_assert!(!self.is_terminal(), "guess recorded after game ended");

        let verdict = Verdict::calculate(&guess, &self.secret.word);
        self.guesses.push(guess);
        self.verdicts.push(verdict);
        verdict
    }

    /// Persisted form, with the in-progress draft alongside
    #[must_use]
    pub fn to_saved(&self, draft: &str) -> SavedGame {
        SavedGame {
            version: SCHEMA_VERSION,
            secret_id: self.secret.id.to_string(),
            guesses: self.guesses.iter().map(|g| g.text().to_string()).collect(),
            verdicts: self.verdicts.iter().map(ToString::to_string).collect(),
            draft: draft.to_string(),
        }
    }

    /// Rebuild a game from a record, checking every invariant on the way
    ///
    /// Verdicts are recomputed from the guesses and must agree with what was
    /// stored. The draft is not looked at here.
    ///
    /// # Errors
    ///
    /// Returns the first `RestoreError` found.
    pub fn from_saved(saved: &SavedGame, words: &impl WordSource) -> Result<Self, RestoreError> {
        if saved.version != SCHEMA_VERSION {
            return Err(RestoreError::SchemaVersion {
                found: saved.version,
            });
        }

        let id: SecretId = saved
            .secret_id
            .parse()
            .map_err(|_| RestoreError::SecretId(saved.secret_id.clone()))?;
        let word = words
            .secret_word(id)
            .ok_or(RestoreError::UnknownSecret(id))?;

        if saved.guesses.len() != saved.verdicts.len() {
            return Err(RestoreError::LengthMismatch {
                guesses: saved.guesses.len(),
                verdicts: saved.verdicts.len(),
            });
        }
        if saved.guesses.len() > MAX_GUESSES {
            return Err(RestoreError::TooManyGuesses(saved.guesses.len()));
        }

        let mut state = Self::new(Secret { id, word });
        for (index, (guess, stored)) in saved.guesses.iter().zip(&saved.verdicts).enumerate() {
            if state.is_terminal() {
                return Err(RestoreError::PlayedAfterEnd { index });
            }

            let guess = Word::new(guess.as_str()).map_err(|_| RestoreError::InvalidGuess {
                index,
                value: guess.clone(),
            })?;

            let verdict = state.record(guess);
            if stored.parse::<Verdict>().ok() != Some(verdict) {
                return Err(RestoreError::VerdictMismatch { index });
            }
        }

        Ok(state)
    }
}

const fn rank(mark: Mark) -> u8 {
    match mark {
        Mark::Missing => 0,
        Mark::Close => 1,
        Mark::Exact => 2,
    }
}
