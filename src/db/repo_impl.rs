//! Row-level statements for NoteDb.

use super::NoteDb;
use crate::domain::{Note, join_tags, parse_tags};
use crate::store::{StoreError, StoreResult};
use rusqlite::Row;

const SELECT_COLUMNS: &str = "SELECT id, title, content, category, tags, createdAt, updatedAt FROM notes";

impl NoteDb {
    /// Inserts a note and returns the identifier SQLite assigned.
    ///
    /// Any `id` already carried by `note` is ignored.
    pub fn insert_note(&mut self, note: &Note) -> StoreResult<i64> {
        self.conn.execute(
            "INSERT INTO notes (title, content, category, tags, createdAt, updatedAt)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                note.title(),
                note.content(),
                note.category(),
                join_tags(note.tags()),
                note.created_at(),
                note.updated_at(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Returns every row, ordered by identifier.
    pub fn select_all(&self) -> StoreResult<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} ORDER BY id", SELECT_COLUMNS))?;
        let notes = stmt
            .query_map([], note_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(notes)
    }

    /// Looks up a single row by identifier.
    pub fn select_by_id(&self, id: i64) -> StoreResult<Option<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} WHERE id = ?", SELECT_COLUMNS))?;

        match stmt.query_row([id], note_from_row) {
            Ok(note) => Ok(Some(note)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::Database(e)),
        }
    }

    /// Replaces title, content, category, tags and updatedAt of a row.
    ///
    /// `createdAt` and `id` are left alone. Returns `false` if no row has
    /// that identifier.
    pub fn update_row(&mut self, id: i64, note: &Note) -> StoreResult<bool> {
        let rows = self.conn.execute(
            "UPDATE notes
             SET title = ?1, content = ?2, category = ?3, tags = ?4, updatedAt = ?5
             WHERE id = ?6",
            rusqlite::params![
                note.title(),
                note.content(),
                note.category(),
                join_tags(note.tags()),
                note.updated_at(),
                id,
            ],
        )?;
        Ok(rows > 0)
    }

    /// Deletes a row. Returns `false` if no row has that identifier.
    pub fn delete_row(&mut self, id: i64) -> StoreResult<bool> {
        let rows = self.conn.execute("DELETE FROM notes WHERE id = ?", [id])?;
        Ok(rows > 0)
    }

    /// Returns the number of stored notes.
    pub fn count(&self) -> StoreResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn note_from_row(row: &Row<'_>) -> rusqlite::Result<Note> {
    let id: i64 = row.get(0)?;
    let tags: Option<String> = row.get(4)?;

    let note = Note::builder(row.get::<_, String>(1)?, row.get::<_, String>(5)?)
        .id(id)
        .content(row.get::<_, String>(2)?)
        .category(row.get::<_, String>(3)?)
        .tags(tags.as_deref().map(parse_tags).unwrap_or_default())
        .updated_at(row.get::<_, String>(6)?)
        .build();
    Ok(note)
}
