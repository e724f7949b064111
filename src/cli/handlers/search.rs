//! Search command handler.

use anyhow::{Context, Result, bail};
use std::io::Write;

use crate::cli::notebook::Notebook;
use crate::cli::output::{OutputFormat, write_json, write_listing};
use crate::cli::{SearchArgs, SearchFilter};
use crate::domain::Query;

/// Turns the mutually exclusive filter flags into a query.
pub fn query_from_filter(filter: &SearchFilter) -> Result<Query> {
    if let Some(category) = &filter.category {
        return Ok(Query::Category(category.clone()));
    }
    if let Some(tag) = &filter.tag {
        return Ok(Query::Tag(tag.clone()));
    }
    if let Some(keyword) = &filter.keyword {
        return Ok(Query::Keyword(keyword.clone()));
    }
    bail!("one of --category, --tag or --keyword is required");
}

pub fn handle_search<W: Write>(
    args: &SearchArgs,
    notebook: &dyn Notebook,
    out: &mut W,
) -> Result<()> {
    let query = query_from_filter(&args.filter)?;
    let entries = notebook
        .search(&query)
        .with_context(|| format!("failed to search by {}", query))?;

    match args.format {
        OutputFormat::Human => write_listing(out, &entries)?,
        OutputFormat::Json => write_json(out, &entries)?,
    }
    Ok(())
}
