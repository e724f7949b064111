//! Note managers: the public add/get/update/delete/search surface.
//!
//! [`NoteManager`] addresses notes by position and keeps the whole
//! collection in a [`NoteStore`](crate::store::NoteStore).
//! [`DbNoteManager`] addresses notes by database identifier.

mod db;
mod file;


pub use db::DbNoteManager;
pub use file::NoteManager;
