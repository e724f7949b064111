//! Uniform, number-addressed access to either note manager.
//!
//! The file backend numbers notes by 1-based position; the sqlite backend
//! uses the database id. Handlers only ever see the number.

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

use super::Cli;
use super::config::{Backend, Config};
use crate::domain::{Clock, LocalClock, Note, NotePatch, Query};
use crate::manager::{DbNoteManager, NoteManager};
use crate::store::{FlatFileStore, NoteStore, StoreResult};

/// A note together with the number the user addresses it by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub number: u64,
    #[serde(flatten)]
    pub note: Note,
}

/// Number-addressed note operations shared by both backends.
pub trait Notebook {
    fn add(
        &mut self,
        title: &str,
        content: &str,
        category: Option<&str>,
        tags: Vec<String>,
    ) -> StoreResult<Entry>;

    fn list(&self) -> StoreResult<Vec<Entry>>;

    fn get(&self, number: u64) -> StoreResult<Option<Entry>>;

    /// Matches sorted by lowercase title.
    fn search(&self, query: &Query) -> StoreResult<Vec<Entry>>;

    /// Applies a patch; `None` when the number addresses no note.
    fn edit(&mut self, number: u64, patch: &NotePatch) -> StoreResult<Option<Entry>>;

    /// Deletes a note; `false` when the number addresses no note.
    fn remove(&mut self, number: u64) -> StoreResult<bool>;

    /// Message shown when a number addresses no note.
    fn missing_message(&self) -> &'static str;

    /// Releases the backing store.
    fn close(self: Box<Self>) -> StoreResult<()>;
}

// ===========================================
// File backend
// ===========================================

fn position(number: u64) -> Option<usize> {
    number.checked_sub(1).and_then(|i| usize::try_from(i).ok())
}

fn file_entry(index: usize, note: &Note) -> Entry {
    Entry {
        number: index as u64 + 1,
        note: note.clone(),
    }
}

impl<S: NoteStore, C: Clock> Notebook for NoteManager<S, C> {
    fn add(
        &mut self,
        title: &str,
        content: &str,
        category: Option<&str>,
        tags: Vec<String>,
    ) -> StoreResult<Entry> {
        let note = self.add_note(title, content, category, tags)?.clone();
        Ok(Entry {
            number: self.len() as u64,
            note,
        })
    }

    fn list(&self) -> StoreResult<Vec<Entry>> {
        Ok(self
            .get_all_notes()
            .iter()
            .enumerate()
            .map(|(i, note)| file_entry(i, note))
            .collect())
    }

    fn get(&self, number: u64) -> StoreResult<Option<Entry>> {
        Ok(position(number).and_then(|i| self.get_note(i).map(|note| file_entry(i, note))))
    }

    fn search(&self, query: &Query) -> StoreResult<Vec<Entry>> {
        Ok(NoteManager::search(self, query)
            .into_iter()
            .map(|(i, note)| file_entry(i, note))
            .collect())
    }

    fn edit(&mut self, number: u64, patch: &NotePatch) -> StoreResult<Option<Entry>> {
        let Some(index) = position(number) else {
            return Ok(None);
        };
        if !self.update_note(index, patch)? {
            return Ok(None);
        }
        Ok(self.get_note(index).map(|note| file_entry(index, note)))
    }

    fn remove(&mut self, number: u64) -> StoreResult<bool> {
        match position(number) {
            Some(index) => self.delete_note(index),
            None => Ok(false),
        }
    }

    fn missing_message(&self) -> &'static str {
        "Invalid note number"
    }

    fn close(self: Box<Self>) -> StoreResult<()> {
        Ok(())
    }
}

// ===========================================
// SQLite backend
// ===========================================

fn db_entry(note: Note) -> Entry {
    Entry {
        number: note.id().map_or(0, |id| id as u64),
        note,
    }
}

fn db_id(number: u64) -> Option<i64> {
    i64::try_from(number).ok()
}

impl<C: Clock> Notebook for DbNoteManager<C> {
    fn add(
        &mut self,
        title: &str,
        content: &str,
        category: Option<&str>,
        tags: Vec<String>,
    ) -> StoreResult<Entry> {
        let note = self.new_note(title, content, category, tags);
        let id = self.add_note(&note)?;
        Ok(Entry {
            number: id as u64,
            note: note.with_id(id),
        })
    }

    fn list(&self) -> StoreResult<Vec<Entry>> {
        Ok(self.get_all_notes()?.into_iter().map(db_entry).collect())
    }

    fn get(&self, number: u64) -> StoreResult<Option<Entry>> {
        match db_id(number) {
            Some(id) => Ok(self.get_note_by_id(id)?.map(db_entry)),
            None => Ok(None),
        }
    }

    fn search(&self, query: &Query) -> StoreResult<Vec<Entry>> {
        Ok(DbNoteManager::search(self, query)?
            .into_iter()
            .map(db_entry)
            .collect())
    }

    fn edit(&mut self, number: u64, patch: &NotePatch) -> StoreResult<Option<Entry>> {
        match db_id(number) {
            Some(id) => Ok(self.edit_note(id, patch)?.map(db_entry)),
            None => Ok(None),
        }
    }

    fn remove(&mut self, number: u64) -> StoreResult<bool> {
        match db_id(number) {
            Some(id) => self.delete_note(id),
            None => Ok(false),
        }
    }

    fn missing_message(&self) -> &'static str {
        "Note not found"
    }

    fn close(self: Box<Self>) -> StoreResult<()> {
        (*self).close()
    }
}

/// Opens the notebook selected by CLI flags and config.
pub fn open_notebook(cli: &Cli, config: &Config) -> Result<Box<dyn Notebook>> {
    let clock = LocalClock::new(config.timestamp);

    match config.backend(cli.backend) {
        Backend::File => {
            let path = config.notes_file(cli.file.as_ref());
            let store = FlatFileStore::new(&path, config.delimiter_policy(cli.escape));
            let manager = NoteManager::new(store, clock)
                .with_context(|| format!("failed to load notes from {}", path.display()))?;
            if manager.skipped_on_load() > 0 {
                eprintln!(
                    "warning: skipped {} malformed line(s) in {}",
                    manager.skipped_on_load(),
                    manager.store().path().display()
                );
            }
            info!("using notes file {}", path.display());
            Ok(Box::new(manager))
        }
        Backend::Sqlite => {
            let path = config.database_path(cli.db.as_ref());
            let manager = DbNoteManager::open(&path, clock)
                .with_context(|| format!("failed to open database at {}", path.display()))?;
            info!("using database {}", path.display());
            Ok(Box::new(manager))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ManualClock;
    use crate::store::MemoryStore;
    use pretty_assertions::assert_eq;

    fn clock() -> ManualClock {
        ManualClock::starting_at("2024-01-15 10:30:00").unwrap()
    }

    fn notebooks() -> Vec<Box<dyn Notebook>> {
        vec![
            Box::new(NoteManager::new(MemoryStore::new(), clock()).unwrap()),
            Box::new(DbNoteManager::open_in_memory(clock()).unwrap()),
        ]
    }

    #[test]
    fn numbers_start_at_one() {
        for mut book in notebooks() {
            let first = book.add("a", "", None, vec![]).unwrap();
            let second = book.add("b", "", None, vec![]).unwrap();
            assert_eq!(first.number, 1);
            assert_eq!(second.number, 2);
            assert_eq!(book.get(2).unwrap().unwrap().note.title(), "b");
        }
    }

    #[test]
    fn zero_and_unknown_numbers_are_missing() {
        for mut book in notebooks() {
            book.add("a", "", None, vec![]).unwrap();
            assert!(book.get(0).unwrap().is_none());
            assert!(book.get(9).unwrap().is_none());
            assert!(!book.remove(0).unwrap());
            assert!(book.edit(9, &NotePatch::default()).unwrap().is_none());
            assert_eq!(book.list().unwrap().len(), 1);
        }
    }

    #[test]
    fn search_entries_keep_their_numbers() {
        for mut book in notebooks() {
            book.add("zeta", "", Some("Work"), vec![]).unwrap();
            book.add("other", "", Some("Home"), vec![]).unwrap();
            book.add("Alpha", "", Some("work"), vec![]).unwrap();

            let hits = book.search(&Query::Category("WORK".into())).unwrap();
            let numbers: Vec<u64> = hits.iter().map(|e| e.number).collect();
            assert_eq!(numbers, vec![3, 1]);
        }
    }

    #[test]
    fn edit_returns_updated_entry() {
        for mut book in notebooks() {
            book.add("old", "body", None, vec![]).unwrap();
            let edited = book
                .edit(1, &NotePatch::default().title("new"))
                .unwrap()
                .unwrap();
            assert_eq!(edited.number, 1);
            assert_eq!(edited.note.title(), "new");
            assert_eq!(edited.note.content(), "body");
        }
    }

    #[test]
    fn missing_messages_differ_per_backend() {
        let books = notebooks();
        assert_eq!(books[0].missing_message(), "Invalid note number");
        assert_eq!(books[1].missing_message(), "Note not found");
    }

    #[test]
    fn close_releases_both_backends() {
        for book in notebooks() {
            assert!(book.close().is_ok());
        }
    }

    #[test]
    fn entry_serializes_number_with_note_fields() {
        let entry = Entry {
            number: 4,
            note: Note::new("t", "c", None, vec![], "2024-01-15 10:30:00"),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["number"], 4);
        assert_eq!(json["title"], "t");
        assert_eq!(json["createdAt"], "2024-01-15 10:30:00");
    }
}
