//! Command handlers for the CLI.
//!
//! Handlers write to a caller-supplied writer so they can be exercised
//! against an in-memory buffer.

mod add;
mod delete;
mod list;
mod menu;
mod search;
mod show_edit;


use anyhow::{Result, bail};

use super::notebook::{Entry, Notebook};

pub use add::handle_add;
pub use delete::{handle_delete, is_confirmation};
pub use list::handle_list;
pub use menu::run_menu;
pub use search::{handle_search, query_from_filter};
pub use show_edit::{handle_edit, handle_show};

// ===========================================
// Shared Utilities
// ===========================================

/// Looks up `number`, failing with the backend's "missing" message.
pub(crate) fn require_entry(notebook: &dyn Notebook, number: u64) -> Result<Entry> {
    match notebook.get(number)? {
        Some(entry) => Ok(entry),
        None => bail!("{}: {}", notebook.missing_message(), number),
    }
}
