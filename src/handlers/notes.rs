use std::sync::Arc;
use log::{debug, info};
use crate::data::{NewNote, Note};
use crate::handlers::errors::{ApiError, NOTE_NOT_FOUND};
use crate::handlers::model::{NewNoteRequest, SerializedNote};
use crate::store::NoteStore;

pub struct NoteHandler {
    store: Arc<dyn NoteStore>,
}

impl NoteHandler {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        NoteHandler { store }
    }

    pub async fn list(&self) -> Result<Vec<SerializedNote>, ApiError> {
        Ok(
            self.store.list().await?
                .into_iter()
                .map(SerializedNote::from)
                .collect()
        )
    }

    // folder_id is not checked here, the store's foreign key rejects
    // dangling references
    pub async fn create(
        &self,
        request: NewNoteRequest,
    ) -> Result<SerializedNote, ApiError> {
        let note_name = request.note_name
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ApiError::missing_field("note_name"))?;
        let folder_id = request.folder_id
            .ok_or_else(|| ApiError::missing_field("folder_id"))?;
        let note = self.store
            .insert(
                NewNote {
                    note_name,
                    content: request.content.unwrap_or_default(),
                    folder_id,
                }
            )
            .await?;
        info!("note {} created in folder {}", note.id, note.folder_id);
        Ok(note.into())
    }

    pub async fn fetch_by_id(&self, id: i64) -> Result<Note, ApiError> {
        self.store.get_by_id(id).await?
            .ok_or_else(|| {
                debug!("note {id} not found");
                ApiError::NotFound(NOTE_NOT_FOUND)
            })
    }

    pub fn get(&self, note: Note) -> SerializedNote {
        note.into()
    }

    pub async fn delete(&self, note: Note) -> Result<(), ApiError> {
        self.store.delete_by_id(note.id).await?;
        info!("note {} deleted", note.id);
        Ok(())
    }
}
