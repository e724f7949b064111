//! Fluent wrapper around assert_cmd::Command.

#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `jotter` binary.
pub struct JotterCommand {
    args: Vec<String>,
    stdin: Option<String>,
}

impl JotterCommand {
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            stdin: None,
        }
    }

    /// Sets `--config`. Point it at a missing file to get built-in defaults.
    pub fn config(self, path: &Path) -> Self {
        self.path_arg("--config", path)
    }

    pub fn file(self, path: &Path) -> Self {
        self.path_arg("--file", path)
    }

    pub fn db(self, path: &Path) -> Self {
        self.path_arg("--db", path)
    }

    pub fn sqlite(self) -> Self {
        self.args(["--backend", "sqlite"])
    }

    pub fn escape(self) -> Self {
        self.args(["--escape"])
    }

    fn path_arg(mut self, flag: &str, path: &Path) -> Self {
        self.args.push(flag.to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Feeds `input` to the process on stdin.
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("jotter").expect("Failed to find jotter binary");
        cmd.args(&self.args);
        cmd.env_remove("RUST_LOG");
        if let Some(input) = self.stdin {
            cmd.write_stdin(input);
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// `add <title> -c <content> -C <category> -t <tags>`
    pub fn add(self, title: &str, content: &str, category: &str, tags: &str) -> Self {
        self.args(["add", title, "-c", content, "-C", category, "-t", tags])
    }

    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    pub fn search_category(self, category: &str) -> Self {
        self.args(["search", "--category", category])
    }

    pub fn search_tag(self, tag: &str) -> Self {
        self.args(["search", "--tag", tag])
    }

    pub fn search_keyword(self, keyword: &str) -> Self {
        self.args(["search", "--keyword", keyword])
    }

    pub fn show(self, number: u64) -> Self {
        self.args(["show".to_string(), number.to_string()])
    }

    pub fn edit(self, number: u64) -> Self {
        self.args(["edit".to_string(), number.to_string()])
    }

    pub fn rm(self, number: u64) -> Self {
        self.args(["rm".to_string(), number.to_string()])
    }

    pub fn menu(self) -> Self {
        self.args(["menu"])
    }

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for JotterCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_command_runs_binary() {
        JotterCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.txt");
        let cmd = JotterCommand::new().file(&path);
        let args = cmd.get_args();
        assert_eq!(args[0], "--file");
        assert_eq!(args[1], path.to_string_lossy());
    }

    #[test]
    fn test_command_output_success() {
        let output = JotterCommand::new().args(["--help"]).output_success();
        assert!(output.contains("jotter") || output.contains("notes"));
    }
}
