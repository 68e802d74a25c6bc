//! The action layer: the four things a player can do
//!
//! Every action either applies fully or is a silent no-op. After each applied
//! action the new state is persisted, and [`Game::state`] is the one copy
//! front ends render from.

use super::state::{GameState, RestoreError, Status};
use crate::core::{Mark, Verdict, WORD_LENGTH, Word};
use crate::store::{SavedGame, StateStore, StoreError};
use crate::wordlists::WordSource;
use chrono::{Local, NaiveDate};
use log::{debug, info, warn};
use rustc_hash::FxHashMap;

/// Result of [`Game::submit_guess`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The guess was recorded with this verdict
    Accepted(Verdict),
    /// Fewer than 5 letters typed
    Incomplete,
    /// The dictionary does not know the word
    NotInWordList,
    /// The game is already won or lost
    GameOver,
}

impl SubmitOutcome {
    #[must_use]
    pub const fn accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// A game bound to its store and word source
pub struct Game<S, W> {
    store: S,
    words: W,
    state: GameState,
    draft: String,
    today: NaiveDate,
}

impl<S: StateStore, W: WordSource> Game<S, W> {
    /// Load today's game
    ///
    /// See [`Game::load_on`].
    pub fn load(store: S, words: W) -> Self {
        Self::load_on(store, words, Local::now().date_naive())
    }

    /// Load the saved game for `today`, or start today's puzzle
    ///
    /// A saved game from another day, or one that is unreadable or
    /// inconsistent, is discarded. This never fails: the worst case is a
    /// fresh game.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::game::{Game, Status};
    /// use wordle_daily::store::MemoryStore;
    /// use wordle_daily::wordlists::WordBank;
    ///
    /// let game = Game::load(MemoryStore::new(), WordBank::embedded());
    /// assert_eq!(game.state().status(), Status::InProgress);
    /// assert!(game.state().guesses().is_empty());
    /// ```
    pub fn load_on(store: S, words: W, today: NaiveDate) -> Self {
        let restored = match store.load() {
            Ok(Some(saved)) => match restore_for_day(&saved, &words, today) {
                Ok(state) => {
                    let draft = usable_draft(&saved.draft, &state);
                    Some((state, draft))
                }
                Err(Discard::Stale(day)) => {
                    info!("Saved game is from {day}, starting today's puzzle");
                    None
                }
                Err(Discard::Corrupt(e)) => {
                    warn!("Discarding saved game: {e}");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Discarding unreadable saved game: {e}");
                None
            }
        };

        let (state, draft) = restored.unwrap_or_else(|| {
            let secret = words.daily_secret(today);
            info!("New game {}", secret.id);
            (GameState::new(secret), String::new())
        });

        Self {
            store,
            words,
            state,
            draft,
            today,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Letters typed since the last submission
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.state.status()
    }

    #[must_use]
    pub fn revealed_answer(&self) -> Option<&Word> {
        self.state.revealed_answer()
    }

    #[must_use]
    pub fn keyboard_hints(&self) -> FxHashMap<u8, Mark> {
        self.state.keyboard_hints()
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether the draft is full and the game still running
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.draft.len() == WORD_LENGTH && !self.state.is_terminal()
    }

    /// Add a letter to the draft
    ///
    /// Ignored (returns `Ok(false)`) when the draft is full, the game is
    /// over, or `letter` is not a-z.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the updated draft cannot be saved.
    pub fn append_letter(&mut self, letter: char) -> Result<bool, StoreError> {
        if self.state.is_terminal()
            || self.draft.len() >= WORD_LENGTH
            || !letter.is_ascii_alphabetic()
        {
            debug!("Ignored letter {letter:?}");
            return Ok(false);
        }

        self.draft.push(letter.to_ascii_lowercase());
        debug!("Draft is now {:?}", self.draft);
        self.persist()?;
        Ok(true)
    }

    /// Remove the last draft letter
    ///
    /// Ignored (returns `Ok(false)`) when the draft is empty or the game is
    /// over.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the updated draft cannot be saved.
    pub fn backspace(&mut self) -> Result<bool, StoreError> {
        if self.state.is_terminal() || self.draft.pop().is_none() {
            return Ok(false);
        }

        debug!("Draft is now {:?}", self.draft);
        self.persist()?;
        Ok(true)
    }

    /// Submit the draft as a guess
    ///
    /// Rejections leave the state untouched and are reported through the
    /// outcome, not as errors.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if an accepted guess cannot be saved. The guess is
    /// still recorded in memory.
    pub fn submit_guess(&mut self) -> Result<SubmitOutcome, StoreError> {
        if self.state.is_terminal() {
            return Ok(SubmitOutcome::GameOver);
        }

        let Ok(guess) = Word::new(self.draft.as_str()) else {
            debug!("Submit rejected, draft {:?} is incomplete", self.draft);
            return Ok(SubmitOutcome::Incomplete);
        };

        if !self.words.is_allowed(&guess) {
            debug!("Submit rejected, {guess} is not in the word list");
            return Ok(SubmitOutcome::NotInWordList);
        }

        let verdict = self.state.record(guess);
        self.draft.clear();
        debug!("Guess {} scored {verdict}", self.state.guesses().len());

        match self.state.status() {
            Status::Won => info!(
                "Game {} won in {}",
                self.state.secret_id(),
                self.state.guesses().len()
            ),
            Status::Lost => info!("Game {} lost", self.state.secret_id()),
            Status::InProgress => {}
        }

        self.persist()?;
        Ok(SubmitOutcome::Accepted(verdict))
    }

    /// Throw the current game away and start one with a fresh secret
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the new game cannot be saved. The new game is
    /// in effect in memory regardless.
    pub fn restart(&mut self) -> Result<(), StoreError> {
        let secret = self
            .words
            .fresh_secret(self.today, Some(self.state.secret_id()));
        info!("Restarted with game {}", secret.id);

        self.state = GameState::new(secret);
        self.draft.clear();
        self.persist()
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        self.store.save(&self.state.to_saved(&self.draft))
    }
}

enum Discard {
    Stale(NaiveDate),
    Corrupt(RestoreError),
}

fn restore_for_day(
    saved: &SavedGame,
    words: &impl WordSource,
    today: NaiveDate,
) -> Result<GameState, Discard> {
    let state = GameState::from_saved(saved, words).map_err(Discard::Corrupt)?;
    let day = state.secret_id().day;
    if day == today {
        Ok(state)
    } else {
        Err(Discard::Stale(day))
    }
}

/// Keep a saved draft only if it could have been typed into this game
fn usable_draft(draft: &str, state: &GameState) -> String {
    let valid = draft.len() <= WORD_LENGTH
        && draft.bytes().all(|b| b.is_ascii_lowercase())
        && (draft.is_empty() || !state.is_terminal());

    if valid {
        draft.to_string()
    } else {
        warn!("Dropping unusable draft {draft:?}");
        String::new()
    }
}
