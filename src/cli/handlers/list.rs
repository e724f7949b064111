//! List command handler.

use anyhow::{Context, Result};
use std::io::Write;

use crate::cli::ListArgs;
use crate::cli::notebook::Notebook;
use crate::cli::output::{OutputFormat, write_json, write_listing};

pub fn handle_list<W: Write>(args: &ListArgs, notebook: &dyn Notebook, out: &mut W) -> Result<()> {
    let entries = notebook.list().with_context(|| "failed to list notes")?;

    match args.format {
        OutputFormat::Human => write_listing(out, &entries)?,
        OutputFormat::Json => write_json(out, &entries)?,
    }
    Ok(())
}
