//! Show and Edit command handlers.

use anyhow::{Context, Result, bail};
use std::io::Write;

use super::require_entry;
use crate::cli::notebook::Notebook;
use crate::cli::output::{OutputFormat, write_detail, write_json};
use crate::cli::{EditArgs, ShowArgs};
use crate::domain::{NotePatch, parse_tags};

pub fn handle_show<W: Write>(args: &ShowArgs, notebook: &dyn Notebook, out: &mut W) -> Result<()> {
    let entry = require_entry(notebook, args.number)?;

    match args.format {
        OutputFormat::Human => write_detail(out, &entry)?,
        OutputFormat::Json => write_json(out, &entry)?,
    }
    Ok(())
}

/// Builds a patch from the edit flags. Absent or blank flags keep the value.
pub(crate) fn patch_from_args(args: &EditArgs) -> NotePatch {
    NotePatch {
        title: args.title.clone(),
        content: args.content.clone(),
        category: args.category.clone(),
        tags: args.tags.as_deref().map(parse_tags),
    }
}

pub fn handle_edit<W: Write>(args: &EditArgs, notebook: &mut dyn Notebook, out: &mut W) -> Result<()> {
    let patch = patch_from_args(args);

    let edited = notebook
        .edit(args.number, &patch)
        .with_context(|| "failed to save note")?;

    match edited {
        Some(entry) => {
            writeln!(out, "Edited: {} [{}]", entry.note.title(), entry.number)?;
            Ok(())
        }
        None => bail!("{}: {}", notebook.missing_message(), args.number),
    }
}
