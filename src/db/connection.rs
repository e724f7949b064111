//! Connection management for NoteDb.

use super::NoteDb;
use crate::db::create_schema;
use crate::store::{StoreError, StoreResult};
use log::debug;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

impl NoteDb {
    // ===========================================
    // In-Memory Connection
    // ===========================================

    /// Opens an in-memory database with the notes schema.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        create_schema(&conn)?;
        Ok(Self { conn })
    }

    // ===========================================
    // File-Based Connection
    // ===========================================

    /// Opens or creates a database at the given path.
    ///
    /// Creates parent directories if they don't exist and creates the
    /// schema if the table is missing.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let conn = Connection::open(path)?;
        create_schema(&conn)?;
        debug!("opened notes database at {}", path.display());
        Ok(Self { conn })
    }

    // ===========================================
    // Connection Accessors
    // ===========================================

    /// Returns a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Closes the connection, reporting any error SQLite raises while doing so.
    ///
    /// Consumes the database so no statement can run afterwards.
    pub fn close(self) -> StoreResult<()> {
        self.conn.close().map_err(|(_, e)| StoreError::Database(e))?;
        debug!("closed notes database");
        Ok(())
    }
}
