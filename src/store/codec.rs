//! Pipe-delimited line encoding for notes.
//!
//! One note per line, six fields in fixed order:
//! `title|content|category|tags|createdAt|updatedAt`, tags comma-joined.

use crate::domain::{Note, join_tags, parse_tags};
use crate::store::LoadReport;
use log::warn;
use thiserror::Error;

/// Field separator within a line.
pub const FIELD_DELIMITER: char = '|';

/// Number of fields in a well-formed line.
pub const FIELD_COUNT: usize = 6;

/// Token written in place of `|` under [`DelimiterPolicy::Escape`].
pub const ESCAPED_DELIMITER: &str = "&#124;";

/// Token written in place of a line feed under [`DelimiterPolicy::Escape`].
pub const ESCAPED_NEWLINE: &str = "&#10;";

/// How free text containing the delimiter is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DelimiterPolicy {
    /// Remove `|` from free text; line breaks become spaces. Lossy.
    #[default]
    Strip,
    /// Substitute `|` and line feeds with tokens and restore them on read.
    Escape,
}

/// Error decoding a single stored line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("expected 6 fields, found {found}")]
    FieldCount { found: usize },
}

/// Encodes and decodes notes as delimited lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineCodec {
    policy: DelimiterPolicy,
}

impl LineCodec {
    pub fn new(policy: DelimiterPolicy) -> Self {
        Self { policy }
    }

    /// Encodes one note as a line, without the trailing newline.
    pub fn encode(&self, note: &Note) -> String {
        let fields = [
            self.clean(note.title()),
            self.clean(note.content()),
            self.clean(note.category()),
            self.clean(&join_tags(note.tags())),
            self.clean(note.created_at()),
            self.clean(note.updated_at()),
        ];
        fields.join(&FIELD_DELIMITER.to_string())
    }

    /// Decodes one line. The `id` of the result is always `None`.
    pub fn decode(&self, line: &str) -> Result<Note, DecodeError> {
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        if fields.len() != FIELD_COUNT {
            return Err(DecodeError::FieldCount {
                found: fields.len(),
            });
        }

        let note = Note::builder(self.restore(fields[0]), self.restore(fields[4]))
            .content(self.restore(fields[1]))
            .category(self.restore(fields[2]))
            .tags(parse_tags(&self.restore(fields[3])))
            .updated_at(self.restore(fields[5]))
            .build();
        Ok(note)
    }

    /// Encodes a whole collection, one line per note, each newline-terminated.
    pub fn encode_all(&self, notes: &[Note]) -> String {
        let mut out = String::new();
        for note in notes {
            out.push_str(&self.encode(note));
            out.push('\n');
        }
        out
    }

    /// Decodes a whole file, skipping malformed lines.
    ///
    /// Blank lines are ignored. Lines with the wrong field count are logged
    /// and counted in [`LoadReport::skipped`].
    pub fn decode_all(&self, text: &str) -> LoadReport {
        let mut report = LoadReport::default();
        for (number, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match self.decode(line) {
                Ok(note) => report.notes.push(note),
                Err(e) => {
                    warn!("skipping malformed line {}: {}", number + 1, e);
                    report.skipped += 1;
                }
            }
        }
        report
    }

    fn clean(&self, text: &str) -> String {
        match self.policy {
            DelimiterPolicy::Strip => text
                .chars()
                .filter(|c| *c != FIELD_DELIMITER)
                .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                .collect(),
            DelimiterPolicy::Escape => text
                .replace('\r', "")
                .replace(FIELD_DELIMITER, ESCAPED_DELIMITER)
                .replace('\n', ESCAPED_NEWLINE),
        }
    }

    fn restore(&self, field: &str) -> String {
        match self.policy {
            DelimiterPolicy::Strip => field.to_string(),
            DelimiterPolicy::Escape => field
                .replace(ESCAPED_NEWLINE, "\n")
                .replace(ESCAPED_DELIMITER, "|"),
        }
    }
}
