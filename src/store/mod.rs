//! Persistence for the current game
//!
//! The store only moves [`SavedGame`] records in and out. Whether a record is
//! still usable (right day, consistent, uncorrupted) is decided by the game.

mod error;
mod file;
mod memory;
mod record;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use record::{SCHEMA_VERSION, SavedGame};

/// Load/save of the single saved game
pub trait StateStore {
    /// Returns `None` when nothing has been saved yet
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the backing storage cannot be read and
    /// `StoreError::Serialization` if the stored bytes are not a record.
    fn load(&self) -> Result<Option<SavedGame>, StoreError>;

    /// Replace the saved game
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the record cannot be encoded or written.
    fn save(&mut self, game: &SavedGame) -> Result<(), StoreError>;
}
