use thiserror::Error;
use tokio::task::JoinError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error("database task failed: {0}")]
    Join(#[from] JoinError),

    #[error("database connection lock is poisoned")]
    Poisoned,

    #[error("update has no fields to set")]
    EmptyUpdate,
}
