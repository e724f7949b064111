//! Output formats and console rendering for notes.

use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};

use super::notebook::Entry;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Writes `data` wrapped in `{"data": ...}` as pretty JSON.
pub fn write_json<W: Write, T: Serialize>(out: &mut W, data: T) -> io::Result<()> {
    let text = serde_json::to_string_pretty(&Output::new(data)).map_err(io::Error::other)?;
    writeln!(out, "{}", text)
}

/// Writes a table of entries, or "No notes found." when empty.
pub fn write_listing<W: Write>(out: &mut W, entries: &[Entry]) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(out, "No notes found.");
    }

    writeln!(out, "{:>4}  {:<40}  {:<15}  {:<19}", "#", "Title", "Category", "Updated")?;
    writeln!(
        out,
        "{:>4}  {:<40}  {:<15}  {:<19}",
        "----",
        "----------------------------------------",
        "---------------",
        "-------------------"
    )?;
    for entry in entries {
        writeln!(
            out,
            "{:>4}  {:<40}  {:<15}  {:<19}",
            entry.number,
            truncate_str(entry.note.title(), 40),
            truncate_str(entry.note.category(), 15),
            entry.note.updated_at()
        )?;
    }
    writeln!(out)?;
    writeln!(out, "{} note(s)", entries.len())
}

/// Writes one note in full.
pub fn write_detail<W: Write>(out: &mut W, entry: &Entry) -> io::Result<()> {
    let note = &entry.note;
    writeln!(out, "# {}  [{}]", note.title(), entry.number)?;
    writeln!(out)?;
    writeln!(out, "Category: {}", note.category())?;
    if !note.tags().is_empty() {
        writeln!(out, "Tags: {}", note.tags().join(", "))?;
    }
    writeln!(out, "Created: {}", note.created_at())?;
    if note.is_edited() {
        writeln!(out, "Updated: {}", note.updated_at())?;
    }
    if !note.content().is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", note.content())?;
    }
    Ok(())
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
