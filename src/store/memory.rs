//! In-memory store for tests and throwaway sessions

use super::{SavedGame, StateStore, StoreError};

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    saved: Option<SavedGame>,
    saves: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a record already present
    #[must_use]
    pub fn with_saved(saved: SavedGame) -> Self {
        Self {
            saved: Some(saved),
            saves: 0,
        }
    }

    #[must_use]
    pub fn saved(&self) -> Option<&SavedGame> {
        self.saved.as_ref()
    }

    /// Number of successful `save` calls
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<Option<SavedGame>, StoreError> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, game: &SavedGame) -> Result<(), StoreError> {
        self.saved = Some(game.clone());
        self.saves += 1;
        Ok(())
    }
}
