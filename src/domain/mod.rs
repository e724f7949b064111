//! Core types: Note, NotePatch, Query, timestamps and tag helpers

mod clock;
mod note;
mod query;
mod tags;

pub use clock::{Clock, LocalClock, ManualClock, TimestampFormat};
pub use note::{DEFAULT_CATEGORY, Note, NoteBuilder, NotePatch};
pub use query::{Query, by_title};
pub use tags::{TAG_SEPARATOR, has_tag, join_tags, normalize_tags, parse_tags};
