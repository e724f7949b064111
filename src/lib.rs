//! jotter - short text notes kept in a flat file or a SQLite database

pub mod cli;
pub mod db;
pub mod domain;
pub mod manager;
pub mod store;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::LevelFilter;
use std::io::{self, Write};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_delete, handle_edit, handle_list, handle_search, handle_show, run_menu,
    },
    notebook::open_notebook,
};

/// Maps the `-v` count to a default log level. `RUST_LOG` still wins.
fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8) {
    let default = log_level(verbose).to_string().to_lowercase();
    // A logger may already be installed when run() is called more than once in-process.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp_secs()
        .format_module_path(true)
        .try_init();
}

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        clap_complete::generate(args.shell, &mut Cli::command(), "jotter", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?;
    let mut notebook = open_notebook(&cli, &config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let result = match &cli.command {
        Command::Add(args) => handle_add(args, &mut *notebook, &mut out),
        Command::List(args) => handle_list(args, &*notebook, &mut out),
        Command::Search(args) => handle_search(args, &*notebook, &mut out),
        Command::Show(args) => handle_show(args, &*notebook, &mut out),
        Command::Edit(args) => handle_edit(args, &mut *notebook, &mut out),
        Command::Delete(args) => handle_delete(args, &mut *notebook, &mut input, &mut out),
        Command::Menu => run_menu(&mut *notebook, &mut input, &mut out),
        Command::Completions(_) => Ok(()),
    };
    out.flush()?;

    notebook.close().with_context(|| "failed to close note storage")?;
    result
}
