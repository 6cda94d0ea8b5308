use async_trait::async_trait;
use log::{debug, trace};
use rusqlite::{params, OptionalExtension, Row};
use crate::data::{Folder, FolderUpdate, NewFolder};
use crate::store::{Database, FolderStore, StoreError};

#[cfg(test)] mod tests;

const FOLDER_COLUMNS: &str = "id, folder_name";

pub struct SqliteFolderStore {
    db: Database,
}

impl SqliteFolderStore {
    pub fn new(db: Database) -> Self {
        SqliteFolderStore { db }
    }
}

#[async_trait]
impl FolderStore for SqliteFolderStore {
    async fn list(&self) -> Result<Vec<Folder>, StoreError> {
        trace!("listing folders");
        self.db.call(|conn| {
            let mut statement = conn.prepare(&format!(
                "SELECT {FOLDER_COLUMNS} FROM noteful_folders ORDER BY id"
            ))?;
            let folders = statement
                .query_map([], folder_from_row)?
                .collect();
            folders
        }).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Folder>, StoreError> {
        trace!("looking up folder {id}");
        self.db.call(move |conn|
            conn
                .query_row(
                    &format!("SELECT {FOLDER_COLUMNS} FROM noteful_folders WHERE id = ?1"),
                    params![id],
                    folder_from_row,
                )
                .optional()
        ).await
    }

    async fn insert(&self, folder: NewFolder) -> Result<Folder, StoreError> {
        let folder = self.db.call(move |conn|
            conn.query_row(
                &format!(
                    "INSERT INTO noteful_folders (folder_name) VALUES (?1)
                     RETURNING {FOLDER_COLUMNS}"
                ),
                params![folder.folder_name],
                folder_from_row,
            )
        ).await?;
        debug!("created folder {}", folder.id);
        Ok(folder)
    }

    async fn delete_by_id(&self, id: i64) -> Result<usize, StoreError> {
        let deleted = self.db.call(move |conn|
            conn.execute("DELETE FROM noteful_folders WHERE id = ?1", params![id])
        ).await?;
        debug!("deleting folder {id} removed {deleted} row(s)");
        Ok(deleted)
    }

    async fn update_by_id(
        &self,
        id: i64,
        update: FolderUpdate,
    ) -> Result<usize, StoreError> {
        let Some(folder_name) = update.folder_name else {
            return Err(StoreError::EmptyUpdate);
        };
        let updated = self.db.call(move |conn|
            conn.execute(
                "UPDATE noteful_folders SET folder_name = ?1 WHERE id = ?2",
                params![folder_name, id],
            )
        ).await?;
        debug!("updating folder {id} touched {updated} row(s)");
        Ok(updated)
    }
}

fn folder_from_row(row: &Row) -> rusqlite::Result<Folder> {
    Ok(
        Folder {
            id: row.get(0)?,
            folder_name: row.get(1)?,
        }
    )
}
