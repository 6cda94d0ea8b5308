use std::sync::Arc;
use log::{debug, info};
use crate::data::{Folder, NewFolder};
use crate::handlers::errors::{ApiError, FOLDER_NOT_FOUND};
use crate::handlers::model::{NewFolderRequest, SerializedFolder};
use crate::store::FolderStore;

pub struct FolderHandler {
    store: Arc<dyn FolderStore>,
}

impl FolderHandler {
    pub fn new(store: Arc<dyn FolderStore>) -> Self {
        FolderHandler { store }
    }

    pub async fn list(&self) -> Result<Vec<SerializedFolder>, ApiError> {
        Ok(
            self.store.list().await?
                .into_iter()
                .map(SerializedFolder::from)
                .collect()
        )
    }

    pub async fn create(
        &self,
        request: NewFolderRequest,
    ) -> Result<SerializedFolder, ApiError> {
        let folder_name = request.folder_name
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ApiError::missing_field("folder_name"))?;
        let folder = self.store.insert(NewFolder { folder_name }).await?;
        info!("folder {} created", folder.id);
        Ok(folder.into())
    }

    /// Resolves an id for the get and delete steps, which receive the
    /// folder from the caller.
    pub async fn fetch_by_id(&self, id: i64) -> Result<Folder, ApiError> {
        self.store.get_by_id(id).await?
            .ok_or_else(|| {
                debug!("folder {id} not found");
                ApiError::NotFound(FOLDER_NOT_FOUND)
            })
    }

    pub fn get(&self, folder: Folder) -> SerializedFolder {
        folder.into()
    }

    pub async fn delete(&self, folder: Folder) -> Result<(), ApiError> {
        self.store.delete_by_id(folder.id).await?;
        info!("folder {} deleted", folder.id);
        Ok(())
    }
}
