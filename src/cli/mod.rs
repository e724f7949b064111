//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod notebook;
pub mod output;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use config::Backend;
use output::OutputFormat;

/// jotter - short text notes from the command line
#[derive(Parser, Debug)]
#[command(name = "jotter", version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/jotter/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Storage backend (overrides config file)
    #[arg(long, global = true, value_enum)]
    pub backend: Option<Backend>,

    /// Notes file for the file backend
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Database path for the sqlite backend
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Escape '|' in the notes file instead of stripping it
    #[arg(long, global = true)]
    pub escape: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a note
    Add(AddArgs),

    /// List all notes
    #[command(name = "ls")]
    List(ListArgs),

    /// Search notes by category, tag or keyword
    Search(SearchArgs),

    /// Show a note
    Show(ShowArgs),

    /// Edit a note (omitted fields are kept)
    Edit(EditArgs),

    /// Delete a note
    #[command(name = "rm")]
    Delete(DeleteArgs),

    /// Interactive numbered menu
    Menu,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Note title
    pub title: String,

    /// Note body
    #[arg(short, long, default_value = "")]
    pub content: String,

    /// Category (default: General)
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Comma-separated tags
    #[arg(short, long, default_value = "")]
    pub tags: String,
}

/// Arguments for the `ls` command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Exactly one search filter
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct SearchFilter {
    /// Category to match (whole name, any case)
    #[arg(long)]
    pub category: Option<String>,

    /// Tag to match (whole tag, any case)
    #[arg(long)]
    pub tag: Option<String>,

    /// Text to look for in titles and contents
    #[arg(short, long)]
    pub keyword: Option<String>,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    #[command(flatten)]
    pub filter: SearchFilter,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note number (position for the file backend, id for sqlite)
    pub number: u64,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note number (position for the file backend, id for sqlite)
    pub number: u64,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New body
    #[arg(long)]
    pub content: Option<String>,

    /// New category
    #[arg(long)]
    pub category: Option<String>,

    /// New comma-separated tags (replaces all tags)
    #[arg(long)]
    pub tags: Option<String>,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Note number (position for the file backend, id for sqlite)
    pub number: u64,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn search_requires_a_filter() {
        assert!(Cli::try_parse_from(["jotter", "search"]).is_err());
    }

    #[test]
    fn search_rejects_two_filters() {
        let result = Cli::try_parse_from(["jotter", "search", "--tag", "a", "--category", "b"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli =
            Cli::try_parse_from(["jotter", "ls", "--backend", "sqlite", "--db", "x.db"]).unwrap();
        assert_eq!(cli.backend, Some(Backend::Sqlite));
        assert_eq!(cli.db, Some(PathBuf::from("x.db")));
    }

    #[test]
    fn add_defaults_to_empty_content_and_tags() {
        let cli = Cli::try_parse_from(["jotter", "add", "Title"]).unwrap();
        match cli.command {
            Command::Add(args) => {
                assert_eq!(args.title, "Title");
                assert_eq!(args.content, "");
                assert_eq!(args.tags, "");
                assert!(args.category.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
