//! Configuration file support.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::TimestampFormat;
use crate::store::DelimiterPolicy;

/// Where notes are kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Pipe-delimited text file, notes addressed by position
    #[default]
    File,
    /// SQLite database, notes addressed by id
    Sqlite,
}

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Storage backend
    pub backend: Option<Backend>,

    /// Notes file for the file backend
    pub file: Option<PathBuf>,

    /// Database path for the sqlite backend
    pub database: Option<PathBuf>,

    /// Escape '|' instead of stripping it
    #[serde(default)]
    pub escape_delimiter: bool,

    /// Timestamp layout for new and edited notes
    #[serde(default)]
    pub timestamp: TimestampFormat,
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/jotter/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("jotter")
            .join("config.toml")
    }

    /// Directory holding the default notes file and database.
    pub fn data_dir() -> PathBuf {
        dirs::data_dir()
            .map(|d| d.join("jotter"))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve the backend, with CLI argument taking precedence.
    pub fn backend(&self, cli_backend: Option<Backend>) -> Backend {
        cli_backend.or(self.backend).unwrap_or_default()
    }

    /// Resolve the notes file.
    ///
    /// Precedence order:
    /// 1. CLI `--file` argument
    /// 2. Config file `file` setting
    /// 3. `notes.txt` in the data directory
    pub fn notes_file(&self, cli_file: Option<&PathBuf>) -> PathBuf {
        cli_file
            .cloned()
            .or_else(|| self.file.clone())
            .unwrap_or_else(|| Self::data_dir().join("notes.txt"))
    }

    /// Resolve the database path.
    ///
    /// Precedence order:
    /// 1. CLI `--db` argument
    /// 2. Config file `database` setting
    /// 3. `notes.db` in the data directory
    pub fn database_path(&self, cli_db: Option<&PathBuf>) -> PathBuf {
        cli_db
            .cloned()
            .or_else(|| self.database.clone())
            .unwrap_or_else(|| Self::data_dir().join("notes.db"))
    }

    /// Resolve how '|' is written to the notes file.
    pub fn delimiter_policy(&self, cli_escape: bool) -> DelimiterPolicy {
        if cli_escape || self.escape_delimiter {
            DelimiterPolicy::Escape
        } else {
            DelimiterPolicy::Strip
        }
    }
}
