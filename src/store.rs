mod database;
mod errors;
mod folder;
mod note;

use async_trait::async_trait;
use crate::data::{Folder, FolderUpdate, NewFolder, NewNote, Note, NoteUpdate};

pub use database::Database;
pub use errors::StoreError;
pub use folder::SqliteFolderStore;
pub use note::SqliteNoteStore;

/// Persistence operations over the folder relation.
///
/// Absence is a normal outcome here: lookups return `None` and deletes
/// report how many rows they removed.
#[async_trait]
pub trait FolderStore: Send + Sync {
    /// All folders in ascending id order.
    async fn list(&self) -> Result<Vec<Folder>, StoreError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Folder>, StoreError>;

    /// Returns the stored row, including the assigned id.
    async fn insert(&self, folder: NewFolder) -> Result<Folder, StoreError>;

    async fn delete_by_id(&self, id: i64) -> Result<usize, StoreError>;

    async fn update_by_id(
        &self,
        id: i64,
        update: FolderUpdate,
    ) -> Result<usize, StoreError>;
}

/// Persistence operations over the note relation.
///
/// `date_modified` is owned by the store: it is stamped on insert and on
/// every update.
#[async_trait]
pub trait NoteStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Note>, StoreError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Note>, StoreError>;

    async fn insert(&self, note: NewNote) -> Result<Note, StoreError>;

    async fn delete_by_id(&self, id: i64) -> Result<usize, StoreError>;

    async fn update_by_id(
        &self,
        id: i64,
        update: NoteUpdate,
    ) -> Result<usize, StoreError>;
}
