//! Add command handler.

use anyhow::{Context, Result};
use std::io::Write;

use crate::cli::AddArgs;
use crate::cli::notebook::Notebook;
use crate::domain::parse_tags;

pub fn handle_add<W: Write>(args: &AddArgs, notebook: &mut dyn Notebook, out: &mut W) -> Result<()> {
    let entry = notebook
        .add(
            &args.title,
            &args.content,
            args.category.as_deref(),
            parse_tags(&args.tags),
        )
        .with_context(|| "failed to save note")?;

    writeln!(out, "Added: {} [{}]", entry.note.title(), entry.number)?;
    Ok(())
}
