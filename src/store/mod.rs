//! Storage adapters behind the flat-file note manager.

mod codec;
mod flat_file;

pub use codec::{
    DecodeError, DelimiterPolicy, ESCAPED_DELIMITER, ESCAPED_NEWLINE, FIELD_COUNT,
    FIELD_DELIMITER, LineCodec,
};
pub use flat_file::FlatFileStore;

use crate::domain::Note;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by storage adapters.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or preparing the backing file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Replacing the backing file with the freshly written copy failed.
    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Outcome of loading the full collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub notes: Vec<Note>,
    /// Records that could not be decoded and were left out.
    pub skipped: usize,
}

/// A whole-collection backing store.
///
/// The manager loads everything once and hands the full collection back
/// after each mutation. Implementations decide how that state is kept.
pub trait NoteStore {
    /// Loads every stored note. A store that was never written is empty.
    fn load(&self) -> StoreResult<LoadReport>;

    /// Replaces the stored collection with `notes`.
    fn save(&mut self, notes: &[Note]) -> StoreResult<()>;
}

/// Store that keeps the collection in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    notes: Vec<Note>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `notes`.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self { notes, saves: 0 }
    }

    /// Returns the last saved collection.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Returns how many times the collection was saved.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl NoteStore for MemoryStore {
    fn load(&self) -> StoreResult<LoadReport> {
        Ok(LoadReport {
            notes: self.notes.clone(),
            skipped: 0,
        })
    }

    fn save(&mut self, notes: &[Note]) -> StoreResult<()> {
        self.notes = notes.to_vec();
        self.saves += 1;
        Ok(())
    }
}
