//! Search predicates shared by every note manager.

use crate::domain::Note;
use crate::domain::tags::has_tag;
use std::cmp::Ordering;
use std::fmt;

/// A filter over notes.
///
/// - `Category`: whole-string equality, ignoring case
/// - `Tag`: equality with any one tag, ignoring case
/// - `Keyword`: substring of the title or the content, ignoring case
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Category(String),
    Tag(String),
    Keyword(String),
}

impl Query {
    /// Returns true if the note satisfies this filter.
    pub fn matches(&self, note: &Note) -> bool {
        match self {
            Query::Category(category) => {
                note.category().to_lowercase() == category.trim().to_lowercase()
            }
            Query::Tag(tag) => has_tag(note.tags(), tag),
            Query::Keyword(keyword) => {
                let needle = keyword.to_lowercase();
                note.title().to_lowercase().contains(&needle)
                    || note.content().to_lowercase().contains(&needle)
            }
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Category(c) => write!(f, "category '{}'", c),
            Query::Tag(t) => write!(f, "tag '{}'", t),
            Query::Keyword(k) => write!(f, "keyword '{}'", k),
        }
    }
}

/// Presentation order for search results: ascending lowercase title.
pub fn by_title(a: &Note, b: &Note) -> Ordering {
    a.title().to_lowercase().cmp(&b.title().to_lowercase())
}
