//! Note entity and the partial-update patch applied to it.

use crate::domain::tags::normalize_tags;
use serde::Serialize;
use std::fmt;

/// Category given to notes created without one.
pub const DEFAULT_CATEGORY: &str = "General";

/// A short text note.
///
/// # Fields
/// - `id`: present only for database-backed notes, assigned on insert
/// - `title`, `content`: free text
/// - `category`: free text, `"General"` when not supplied
/// - `tags`: ordered labels, stored as a comma-joined field
/// - `created_at`: set once at construction, never changes
/// - `updated_at`: equal to `created_at` until the first edit
///
/// # Examples
///
/// ```
/// use jotter::domain::Note;
///
/// let note = Note::new("Buy milk", "2% organic", None, vec![], "2024-01-15 10:30:00");
/// assert_eq!(note.category(), "General");
/// assert!(!note.is_edited());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    title: String,
    content: String,
    category: String,
    tags: Vec<String>,
    created_at: String,
    updated_at: String,
}

impl Note {
    /// Creates a fresh note stamped with `now` for both timestamps.
    ///
    /// A missing or blank category becomes [`DEFAULT_CATEGORY`]. Tags are
    /// trimmed and deduplicated.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: Option<&str>,
        tags: Vec<String>,
        now: impl Into<String>,
    ) -> Self {
        let now = now.into();
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            category: resolve_category(category),
            tags: normalize_tags(tags),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Creates a builder for restoring a note from storage.
    pub fn builder(title: impl Into<String>, created_at: impl Into<String>) -> NoteBuilder {
        NoteBuilder::new(title, created_at)
    }

    /// Returns the storage identifier, if the note came from a database.
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn updated_at(&self) -> &str {
        &self.updated_at
    }

    /// Returns true once the note has been edited at least once.
    pub fn is_edited(&self) -> bool {
        self.updated_at != self.created_at
    }

    /// Returns a copy carrying the given identifier.
    pub(crate) fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Replaces the fields the patch supplies and stamps `updated_at`.
    ///
    /// Blank strings and empty tag lists inside the patch mean "keep", the
    /// same as `None`. `id` and `created_at` are never touched. Returns
    /// whether the patch supplied any field; `updated_at` moves either way.
    pub fn apply(&mut self, patch: &NotePatch, now: impl Into<String>) -> bool {
        if let Some(title) = non_blank(patch.title.as_deref()) {
            self.title = title.to_string();
        }
        if let Some(content) = non_blank(patch.content.as_deref()) {
            self.content = content.to_string();
        }
        if let Some(category) = non_blank(patch.category.as_deref()) {
            self.category = category.trim().to_string();
        }
        if let Some(tags) = &patch.tags {
            let tags = normalize_tags(tags);
            if !tags.is_empty() {
                self.tags = tags;
            }
        }
        self.updated_at = now.into();
        !patch.is_empty()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.category)
    }
}

/// Builder for notes read back from storage.
pub struct NoteBuilder {
    id: Option<i64>,
    title: String,
    content: String,
    category: Option<String>,
    tags: Vec<String>,
    created_at: String,
    updated_at: Option<String>,
}

impl NoteBuilder {
    fn new(title: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: String::new(),
            category: None,
            tags: Vec::new(),
            created_at: created_at.into(),
            updated_at: None,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the category; blank values fall back to [`DEFAULT_CATEGORY`] on build.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Sets the last-update timestamp. Defaults to `created_at`.
    pub fn updated_at(mut self, updated_at: impl Into<String>) -> Self {
        self.updated_at = Some(updated_at.into());
        self
    }

    pub fn build(self) -> Note {
        let updated_at = self.updated_at.unwrap_or_else(|| self.created_at.clone());
        Note {
            id: self.id,
            title: self.title,
            content: self.content,
            category: resolve_category(self.category.as_deref()),
            tags: normalize_tags(self.tags),
            created_at: self.created_at,
            updated_at,
        }
    }
}

/// Partial update for a note. `None` keeps the current value.
///
/// A field cannot be cleared: blank input is treated
/// as "keep" everywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl NotePatch {
    /// Builds a patch from raw prompt answers, mapping blank answers to `None`.
    ///
    /// `tags` is comma-separated.
    pub fn from_input(title: &str, content: &str, category: &str, tags: &str) -> Self {
        let tags = crate::domain::parse_tags(tags);
        Self {
            title: non_blank(Some(title)).map(str::to_string),
            content: non_blank(Some(content)).map(str::to_string),
            category: non_blank(Some(category)).map(|c| c.trim().to_string()),
            tags: if tags.is_empty() { None } else { Some(tags) },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Returns true if the patch would leave every field unchanged.
    pub fn is_empty(&self) -> bool {
        non_blank(self.title.as_deref()).is_none()
            && non_blank(self.content.as_deref()).is_none()
            && non_blank(self.category.as_deref()).is_none()
            && self
                .tags
                .as_ref()
                .is_none_or(|tags| normalize_tags(tags).is_empty())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn resolve_category(category: Option<&str>) -> String {
    non_blank(category)
        .map(|c| c.trim().to_string())
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
}
