//! SQLite schema creation for the notes table.

use log::debug;
use rusqlite::Connection;

/// Creates the `notes` table if it does not exist yet.
///
/// Idempotent: calling it on an existing database leaves the data alone.
///
/// # Columns
/// - `id` - auto-incrementing primary key, assigned on insert
/// - `title`, `content`, `category` - required text
/// - `tags` - comma-joined tag list, nullable
/// - `createdAt`, `updatedAt` - formatted local timestamps
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS notes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            category TEXT NOT NULL,
            tags TEXT,
            createdAt TEXT NOT NULL,
            updatedAt TEXT NOT NULL
        );",
    )?;
    debug!("notes schema ready");

    Ok(())
}
