//! Delete command handler.

use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};

use super::require_entry;
use crate::cli::DeleteArgs;
use crate::cli::notebook::Notebook;

/// Returns true for `y` or `yes` in any case; everything else cancels.
pub fn is_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Deletes a note, asking for confirmation on `input` unless `--yes` was given.
pub fn handle_delete<R: BufRead, W: Write>(
    args: &DeleteArgs,
    notebook: &mut dyn Notebook,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let entry = require_entry(notebook, args.number)?;

    if !args.yes {
        write!(out, "Delete '{}'? (y/N): ", entry.note.title())?;
        out.flush()?;

        let mut answer = String::new();
        input.read_line(&mut answer)?;
        if !is_confirmation(&answer) {
            writeln!(out, "Cancelled.")?;
            return Ok(());
        }
    }

    let removed = notebook
        .remove(args.number)
        .with_context(|| "failed to delete note")?;
    if !removed {
        bail!("{}: {}", notebook.missing_message(), args.number);
    }

    writeln!(out, "Deleted: {} [{}]", entry.note.title(), entry.number)?;
    Ok(())
}
