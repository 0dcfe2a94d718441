use crate::{domain::Board, error::Result};
use async_trait::async_trait;

#[cfg(feature = "file-storage")]
pub mod file_storage;

/// Storage trait for persisting the board.
///
/// The board is one document: read once at startup, overwritten after every
/// mutation. There is no versioning or migration layer; callers that want
/// the seed fallback for missing or corrupt state use
/// [`file_storage::FileStorage::load_or_seed`].
#[async_trait]
pub trait Storage: Send + Sync {
    /// Initializes the storage backend
    async fn initialize(&self) -> Result<()>;

    /// Saves the full board state
    async fn save_board(&self, board: &Board) -> Result<()>;

    /// Loads the board state
    async fn load_board(&self) -> Result<Board>;

    /// Checks if a board has been persisted
    async fn is_initialized(&self) -> bool;
}
