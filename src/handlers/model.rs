use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use crate::data::{Folder, Note};
use crate::sanitize::escape_html;

// every field is optional so that a missing one becomes a validation error
// rather than a body parse failure; a client-supplied id is dropped here
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct NewFolderRequest {
    pub folder_name: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct NewNoteRequest {
    pub note_name: Option<String>,
    pub content: Option<String>,
    pub folder_id: Option<i64>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SerializedFolder {
    pub id: i64,
    pub folder_name: String,
}

impl From<Folder> for SerializedFolder {
    fn from(value: Folder) -> Self {
        SerializedFolder {
            id: value.id,
            folder_name: escape_html(&value.folder_name),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SerializedNote {
    pub id: i64,
    pub note_name: String,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date_modified: OffsetDateTime,
    pub folder_id: i64,
}

impl From<Note> for SerializedNote {
    fn from(value: Note) -> Self {
        SerializedNote {
            id: value.id,
            note_name: escape_html(&value.note_name),
            content: escape_html(&value.content),
            date_modified: value.date_modified,
            folder_id: value.folder_id,
        }
    }
}
