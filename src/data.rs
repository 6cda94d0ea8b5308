use time::OffsetDateTime;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Folder {
    pub id: i64,
    pub folder_name: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewFolder {
    pub folder_name: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FolderUpdate {
    pub folder_name: Option<String>,
}

impl FolderUpdate {
    pub fn is_empty(&self) -> bool {
        self.folder_name.is_none()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Note {
    pub id: i64,
    pub note_name: String,
    pub content: String,
    pub date_modified: OffsetDateTime,
    pub folder_id: i64,
}

// date_modified is stamped by the store
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewNote {
    pub note_name: String,
    pub content: String,
    pub folder_id: i64,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NoteUpdate {
    pub note_name: Option<String>,
    pub content: Option<String>,
    pub folder_id: Option<i64>,
}

impl NoteUpdate {
    pub fn is_empty(&self) -> bool {
        self.note_name.is_none()
            && self.content.is_none()
            && self.folder_id.is_none()
    }
}
