use crate::{
    domain::Board,
    error::{QuadrantError, Result},
    storage::Storage,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based storage implementation.
///
/// The whole todo list is one JSON document under a fixed key, mirroring the
/// single local-storage record the board was designed around.
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const QUADRANT_DIR: &'static str = ".quadrant";
    const BOARD_FILE: &'static str = "todos.json";

    /// Creates a new FileStorage instance rooted at the given directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root_path: root.as_ref().join(Self::QUADRANT_DIR),
        }
    }

    fn board_file(&self) -> PathBuf {
        self.root_path.join(Self::BOARD_FILE)
    }

    async fn ensure_directory_exists(&self) -> Result<()> {
        if !self.root_path.exists() {
            fs::create_dir_all(&self.root_path).await?;
        }
        Ok(())
    }

    /// Startup read: a missing or unreadable record is not an error, it
    /// just means the seed list.
    pub async fn load_or_seed(&self) -> Board {
        self.load_board().await.unwrap_or_else(|_| Board::seed())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn initialize(&self) -> Result<()> {
        self.ensure_directory_exists().await?;

        if !self.board_file().exists() {
            self.save_board(&Board::seed()).await?;
        }

        Ok(())
    }

    async fn save_board(&self, board: &Board) -> Result<()> {
        self.ensure_directory_exists().await?;

        let json = serde_json::to_string_pretty(board)?;
        fs::write(self.board_file(), json).await?;

        Ok(())
    }

    async fn load_board(&self) -> Result<Board> {
        let board_file = self.board_file();

        if !board_file.exists() {
            return Err(QuadrantError::BoardNotInitialized);
        }

        let contents = fs::read_to_string(&board_file).await?;
        let board: Board = serde_json::from_str(&contents)?;

        Ok(board)
    }

    async fn is_initialized(&self) -> bool {
        self.root_path.exists() && self.board_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DropPosition, Quadrant};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_storage_initialization() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        assert!(!storage.is_initialized().await);

        storage.initialize().await.unwrap();

        assert!(storage.is_initialized().await);
        assert!(storage.board_file().exists());
    }

    #[tokio::test]
    async fn test_initialize_seeds_board() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        storage.initialize().await.unwrap();

        let board = storage.load_board().await.unwrap();
        assert_eq!(board.len(), 6);
        assert_eq!(board.in_quadrant(Quadrant::Unassigned).count(), 2);
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        let mut board = Board::seed();
        let id = board.create("Persist me").unwrap();
        let anchor = board
            .in_quadrant(Quadrant::UrgentImportant)
            .next()
            .unwrap()
            .id;
        board.relocate(
            id,
            Quadrant::UrgentImportant,
            Some(anchor),
            Some(DropPosition::Before),
        );

        storage.save_board(&board).await.unwrap();
        let loaded = storage.load_board().await.unwrap();

        assert_eq!(loaded, board);
        let texts: Vec<_> = loaded
            .in_quadrant(Quadrant::UrgentImportant)
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(texts, vec!["Persist me", "Design the page layout"]);
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_record() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        let mut board = Board::seed();
        storage.save_board(&board).await.unwrap();

        let id = board.todos()[0].id;
        board.delete(id);
        storage.save_board(&board).await.unwrap();

        let loaded = storage.load_board().await.unwrap();
        assert_eq!(loaded.len(), 5);
        assert!(loaded.get(id).is_none());
    }

    #[tokio::test]
    async fn test_load_missing_board_errors() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        let result = storage.load_board().await;
        assert!(matches!(result, Err(QuadrantError::BoardNotInitialized)));
    }

    #[tokio::test]
    async fn test_load_or_seed_on_missing_board() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        let board = storage.load_or_seed().await;
        // Seed ids are freshly generated, so compare shape rather than ids.
        assert_eq!(board.len(), 6);
        assert_eq!(board.in_quadrant(Quadrant::Unassigned).count(), 2);
    }

    #[tokio::test]
    async fn test_load_or_seed_on_corrupt_record() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        storage.initialize().await.unwrap();

        fs::write(storage.board_file(), "{ not json").await.unwrap();

        let board = storage.load_or_seed().await;
        assert_eq!(board.len(), 6);
    }

    #[tokio::test]
    async fn test_load_or_seed_prefers_persisted_record() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        let mut board = Board::new();
        board.create("only one").unwrap();
        storage.save_board(&board).await.unwrap();

        let loaded = storage.load_or_seed().await;
        assert_eq!(loaded, board);
    }

    #[tokio::test]
    async fn test_load_legacy_records_without_timestamps() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        storage.ensure_directory_exists().await.unwrap();

        let legacy = r#"[
            {
                "id": "7f6b2a52-3c4e-4b8e-9f1d-2a0c8e5d7b91",
                "text": "Design the page layout",
                "quadrant": "urgent_important"
            },
            {
                "id": "0d9e4c1a-6f2b-4a3d-8e7c-5b1a9f0d3e62",
                "text": "Buy groceries",
                "quadrant": "unassigned"
            }
        ]"#;
        fs::write(storage.board_file(), legacy).await.unwrap();

        let board = storage.load_board().await.unwrap();
        assert_eq!(board.len(), 2);
        assert_eq!(board.todos()[0].quadrant, Quadrant::UrgentImportant);
        assert!(board.todos()[0].created_at.is_none());
    }
}
