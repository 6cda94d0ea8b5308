use async_trait::async_trait;
use log::{debug, trace};
use rusqlite::types::{Type, Value};
use rusqlite::{params, params_from_iter, OptionalExtension, Row};
use time::OffsetDateTime;
use crate::data::{NewNote, Note, NoteUpdate};
use crate::store::{Database, NoteStore, StoreError};

const NOTE_COLUMNS: &str = "id, note_name, content, date_modified, folder_id";

pub struct SqliteNoteStore {
    db: Database,
}

impl SqliteNoteStore {
    pub fn new(db: Database) -> Self {
        SqliteNoteStore { db }
    }
}

#[async_trait]
impl NoteStore for SqliteNoteStore {
    async fn list(&self) -> Result<Vec<Note>, StoreError> {
        trace!("listing notes");
        self.db.call(|conn| {
            let mut statement = conn.prepare(&format!(
                "SELECT {NOTE_COLUMNS} FROM noteful_notes ORDER BY id"
            ))?;
            let notes = statement
                .query_map([], note_from_row)?
                .collect();
            notes
        }).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Note>, StoreError> {
        trace!("looking up note {id}");
        self.db.call(move |conn|
            conn
                .query_row(
                    &format!("SELECT {NOTE_COLUMNS} FROM noteful_notes WHERE id = ?1"),
                    params![id],
                    note_from_row,
                )
                .optional()
        ).await
    }

    async fn insert(&self, note: NewNote) -> Result<Note, StoreError> {
        let now = to_unix_millis(OffsetDateTime::now_utc());
        let note = self.db.call(move |conn|
            conn.query_row(
                &format!(
                    "INSERT INTO noteful_notes (note_name, content, date_modified, folder_id)
                     VALUES (?1, ?2, ?3, ?4)
                     RETURNING {NOTE_COLUMNS}"
                ),
                params![note.note_name, note.content, now, note.folder_id],
                note_from_row,
            )
        ).await?;
        debug!("created note {} in folder {}", note.id, note.folder_id);
        Ok(note)
    }

    async fn delete_by_id(&self, id: i64) -> Result<usize, StoreError> {
        let deleted = self.db.call(move |conn|
            conn.execute("DELETE FROM noteful_notes WHERE id = ?1", params![id])
        ).await?;
        debug!("deleting note {id} removed {deleted} row(s)");
        Ok(deleted)
    }

    async fn update_by_id(
        &self,
        id: i64,
        update: NoteUpdate,
    ) -> Result<usize, StoreError> {
        if update.is_empty() {
            return Err(StoreError::EmptyUpdate);
        }

        let mut assignments = vec!["date_modified = ?"];
        let mut values = vec![
            Value::Integer(to_unix_millis(OffsetDateTime::now_utc())),
        ];
        if let Some(note_name) = update.note_name {
            assignments.push("note_name = ?");
            values.push(Value::Text(note_name));
        }
        if let Some(content) = update.content {
            assignments.push("content = ?");
            values.push(Value::Text(content));
        }
        if let Some(folder_id) = update.folder_id {
            assignments.push("folder_id = ?");
            values.push(Value::Integer(folder_id));
        }
        values.push(Value::Integer(id));

        let sql = format!(
            "UPDATE noteful_notes SET {} WHERE id = ?",
            assignments.join(", "),
        );
        let updated = self.db.call(move |conn|
            conn.execute(&sql, params_from_iter(values))
        ).await?;
        debug!("updating note {id} touched {updated} row(s)");
        Ok(updated)
    }
}

fn note_from_row(row: &Row) -> rusqlite::Result<Note> {
    let date_modified: i64 = row.get(3)?;
    Ok(
        Note {
            id: row.get(0)?,
            note_name: row.get(1)?,
            content: row.get(2)?,
            date_modified: from_unix_millis(date_modified)
                .map_err(|e|
                    rusqlite::Error::FromSqlConversionFailure(3, Type::Integer, Box::new(e))
                )?,
            folder_id: row.get(4)?,
        }
    )
}

// stored with millisecond precision, so a freshly inserted note reads back
// exactly as it was returned
fn to_unix_millis(time: OffsetDateTime) -> i64 {
    (time.unix_timestamp_nanos() / 1_000_000) as i64
}

fn from_unix_millis(
    millis: i64,
) -> Result<OffsetDateTime, time::error::ComponentRange> {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
}
