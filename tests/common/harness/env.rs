//! Isolated test environment with temp directory.

#![allow(dead_code)]

use super::JotterCommand;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment.
///
/// Every command built by [`TestEnv::cmd`] points its notes file, database
/// and config file into a temp directory that is removed on drop, so a
/// user's own config never leaks into a test.
pub struct TestEnv {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn notes_file(&self) -> PathBuf {
        self.root.join("data").join("notes.txt")
    }

    pub fn db_path(&self) -> PathBuf {
        self.root.join("data").join("notes.db")
    }

    /// Config path that does not exist unless a test writes it.
    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    /// A command for the flat-file backend rooted in this environment.
    pub fn cmd(&self) -> JotterCommand {
        JotterCommand::new()
            .config(&self.config_path())
            .file(&self.notes_file())
            .db(&self.db_path())
    }

    /// A command for the SQLite backend rooted in this environment.
    pub fn sqlite(&self) -> JotterCommand {
        self.cmd().sqlite()
    }

    /// Writes `name` under the environment root and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Replaces the notes file with raw `content`.
    pub fn write_notes(&self, content: &str) -> PathBuf {
        self.write_file("data/notes.txt", content)
    }

    pub fn read_notes(&self) -> String {
        std::fs::read_to_string(self.notes_file()).expect("Failed to read notes file")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_temp_directory() {
        let env = TestEnv::new();
        assert!(env.root().is_dir());
        assert!(!env.notes_file().exists());
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_provides_isolated_command() {
        let env = TestEnv::new();
        let args = env.cmd().get_args().to_vec();
        assert_eq!(args[0], "--config");
        assert_eq!(args[1], env.config_path().to_string_lossy());
        assert!(args.contains(&env.notes_file().to_string_lossy().to_string()));
    }

    #[test]
    fn test_env_write_notes_creates_parent() {
        let env = TestEnv::new();
        env.write_notes("x\n");
        assert_eq!(env.read_notes(), "x\n");
    }
}
