//! SQLite-backed note storage.

mod connection;
mod repo_impl;
mod schema;


use rusqlite::Connection;

pub use schema::create_schema;

// ===========================================
// NoteDb Struct
// ===========================================

/// SQLite database holding the `notes` table.
///
/// Owns a single connection for its whole lifetime. Rows map one-to-one
/// onto [`Note`](crate::domain::Note) values; tags are kept as a
/// comma-joined text column.
pub struct NoteDb {
    pub(crate) conn: Connection,
}
