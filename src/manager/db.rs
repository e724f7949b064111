//! Identifier-addressed note manager over SQLite.

use crate::db::NoteDb;
use crate::domain::{Clock, Note, NotePatch, Query, by_title};
use crate::store::StoreResult;
use log::debug;
use std::path::Path;

/// Note manager backed by a [`NoteDb`] connection.
///
/// Single-row statements are issued for inserts, lookups by id, updates and
/// deletes; listing and searching load the full table and filter in memory.
/// The connection is held until [`DbNoteManager::close`] (or drop).
///
/// Not safe for concurrent use.
pub struct DbNoteManager<C> {
    db: NoteDb,
    clock: C,
}

impl<C: Clock> DbNoteManager<C> {
    /// Opens (or creates) the database at `path`.
    pub fn open(path: &Path, clock: C) -> StoreResult<Self> {
        Ok(Self::from_db(NoteDb::open(path)?, clock))
    }

    /// Opens a throwaway in-memory database.
    pub fn open_in_memory(clock: C) -> StoreResult<Self> {
        Ok(Self::from_db(NoteDb::open_in_memory()?, clock))
    }

    pub fn from_db(db: NoteDb, clock: C) -> Self {
        Self { db, clock }
    }

    /// Builds an unsaved note stamped with the current time.
    pub fn new_note(
        &self,
        title: &str,
        content: &str,
        category: Option<&str>,
        tags: Vec<String>,
    ) -> Note {
        Note::new(title, content, category, tags, self.clock.now())
    }

    /// Inserts `note` and returns its assigned identifier.
    pub fn add_note(&mut self, note: &Note) -> StoreResult<i64> {
        let id = self.db.insert_note(note)?;
        debug!("inserted note {}", id);
        Ok(id)
    }

    /// Returns every note ordered by identifier.
    pub fn get_all_notes(&self) -> StoreResult<Vec<Note>> {
        self.db.select_all()
    }

    pub fn get_note_by_id(&self, id: i64) -> StoreResult<Option<Note>> {
        self.db.select_by_id(id)
    }

    pub fn search_by_category(&self, category: &str) -> StoreResult<Vec<Note>> {
        self.search(&Query::Category(category.to_string()))
    }

    pub fn search_by_tag(&self, tag: &str) -> StoreResult<Vec<Note>> {
        self.search(&Query::Tag(tag.to_string()))
    }

    pub fn search_by_keyword(&self, keyword: &str) -> StoreResult<Vec<Note>> {
        self.search(&Query::Keyword(keyword.to_string()))
    }

    /// Loads the table and keeps the notes matching `query`, sorted by title.
    pub fn search(&self, query: &Query) -> StoreResult<Vec<Note>> {
        let mut notes: Vec<Note> = self
            .db
            .select_all()?
            .into_iter()
            .filter(|note| query.matches(note))
            .collect();
        notes.sort_by(by_title);
        Ok(notes)
    }

    /// Replaces the stored row with `note` wholesale.
    ///
    /// The caller is expected to have merged unchanged fields already; use
    /// [`DbNoteManager::edit_note`] for a partial update. Returns `false`
    /// when no row has `id`.
    pub fn update_note(&mut self, id: i64, note: &Note) -> StoreResult<bool> {
        self.db.update_row(id, note)
    }

    /// Loads the note, applies `patch`, and writes the merged row back.
    ///
    /// Returns the updated note, or `None` when no row has `id`.
    pub fn edit_note(&mut self, id: i64, patch: &NotePatch) -> StoreResult<Option<Note>> {
        let Some(mut note) = self.db.select_by_id(id)? else {
            return Ok(None);
        };
        let now = self.clock.now_after(note.updated_at());
        note.apply(patch, now);
        self.db.update_row(id, &note)?;
        debug!("edited note {}", id);
        Ok(Some(note))
    }

    /// Deletes the row with `id`. Returns `false` when there was none.
    pub fn delete_note(&mut self, id: i64) -> StoreResult<bool> {
        self.db.delete_row(id)
    }

    pub fn count(&self) -> StoreResult<usize> {
        self.db.count()
    }

    /// Releases the connection. The manager cannot be used afterwards.
    pub fn close(self) -> StoreResult<()> {
        self.db.close()
    }
}
