use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use async_trait::async_trait;
use time::OffsetDateTime;
use time::macros::datetime;
use crate::data::{Folder, FolderUpdate, NewFolder, NewNote, Note, NoteUpdate};
use crate::store::{FolderStore, NoteStore, StoreError};

pub const MOCK_DATE_MODIFIED: OffsetDateTime = datetime!(2026-10-16 12:00 UTC);

/// In-memory stand-in for a store; counts every call it receives.
pub struct MockStore<T> {
    rows: Mutex<Vec<T>>,
    calls: AtomicUsize,
    is_failing: bool,
}

impl<T: Clone> MockStore<T> {
    pub fn new() -> Self {
        MockStore {
            rows: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            is_failing: false,
        }
    }

    pub fn with_rows(rows: Vec<T>) -> Self {
        MockStore {
            rows: Mutex::new(rows),
            ..Self::new()
        }
    }

    pub fn failing() -> Self {
        MockStore {
            is_failing: true,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    pub fn rows(&self) -> Vec<T> {
        self.rows.lock().unwrap().clone()
    }

    fn enter(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if self.is_failing {
            Err(StoreError::Poisoned)
        } else {
            Ok(())
        }
    }
}

trait Identified {
    fn id(&self) -> i64;
}

impl Identified for Folder {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for Note {
    fn id(&self) -> i64 {
        self.id
    }
}

impl<T: Clone + Identified> MockStore<T> {
    fn next_id(&self) -> i64 {
        self.rows.lock().unwrap()
            .iter()
            .map(Identified::id)
            .max()
            .unwrap_or(0) + 1
    }

    fn find(&self, id: i64) -> Option<T> {
        self.rows.lock().unwrap()
            .iter()
            .find(|row| row.id() == id)
            .cloned()
    }

    fn push(&self, row: T) -> T {
        self.rows.lock().unwrap().push(row.clone());
        row
    }

    fn remove(&self, id: i64) -> usize {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.id() != id);
        before - rows.len()
    }
}

pub type MockFolderStore = MockStore<Folder>;
pub type MockNoteStore = MockStore<Note>;

#[async_trait]
impl FolderStore for MockFolderStore {
    async fn list(&self) -> Result<Vec<Folder>, StoreError> {
        self.enter()?;
        Ok(self.rows())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Folder>, StoreError> {
        self.enter()?;
        Ok(self.find(id))
    }

    async fn insert(&self, folder: NewFolder) -> Result<Folder, StoreError> {
        self.enter()?;
        Ok(self.push(Folder { id: self.next_id(), folder_name: folder.folder_name }))
    }

    async fn delete_by_id(&self, id: i64) -> Result<usize, StoreError> {
        self.enter()?;
        Ok(self.remove(id))
    }

    async fn update_by_id(&self, _: i64, _: FolderUpdate) -> Result<usize, StoreError> {
        unimplemented!("no handler updates folders")
    }
}

#[async_trait]
impl NoteStore for MockNoteStore {
    async fn list(&self) -> Result<Vec<Note>, StoreError> {
        self.enter()?;
        Ok(self.rows())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Note>, StoreError> {
        self.enter()?;
        Ok(self.find(id))
    }

    async fn insert(&self, note: NewNote) -> Result<Note, StoreError> {
        self.enter()?;
        Ok(
            self.push(
                Note {
                    id: self.next_id(),
                    note_name: note.note_name,
                    content: note.content,
                    date_modified: MOCK_DATE_MODIFIED,
                    folder_id: note.folder_id,
                }
            )
        )
    }

    async fn delete_by_id(&self, id: i64) -> Result<usize, StoreError> {
        self.enter()?;
        Ok(self.remove(id))
    }

    async fn update_by_id(&self, _: i64, _: NoteUpdate) -> Result<usize, StoreError> {
        unimplemented!("no handler updates notes")
    }
}
