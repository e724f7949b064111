//! Flat-file store: the whole collection as pipe-delimited lines.

use crate::domain::Note;
use crate::store::{DelimiterPolicy, LineCodec, LoadReport, NoteStore, StoreError, StoreResult};
use log::debug;
use std::fs;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Stores notes in a single UTF-8 text file, one note per line.
///
/// Every save rewrites the file completely: the new contents go to a
/// temporary file in the same directory, which then replaces the target.
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    path: PathBuf,
    codec: LineCodec,
}

impl FlatFileStore {
    pub fn new(path: impl Into<PathBuf>, policy: DelimiterPolicy) -> Self {
        Self {
            path: path.into(),
            codec: LineCodec::new(policy),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NoteStore for FlatFileStore {
    fn load(&self) -> StoreResult<LoadReport> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no notes file at {}, starting empty", self.path.display());
                return Ok(LoadReport::default());
            }
            Err(e) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        let text = text.strip_prefix('\u{FEFF}').unwrap_or(&text);
        let report = self.codec.decode_all(text);
        debug!(
            "loaded {} notes from {} ({} skipped)",
            report.notes.len(),
            self.path.display(),
            report.skipped
        );
        Ok(report)
    }

    fn save(&mut self, notes: &[Note]) -> StoreResult<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        if !parent.exists() {
            fs::create_dir_all(&parent).map_err(|e| StoreError::Io {
                path: parent.clone(),
                source: e,
            })?;
        }

        let mut temp = NamedTempFile::new_in(&parent).map_err(|e| StoreError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        temp.write_all(self.codec.encode_all(notes).as_bytes())
            .and_then(|_| temp.flush())
            .map_err(|e| StoreError::Io {
                path: self.path.clone(),
                source: e,
            })?;

        temp.persist(&self.path)
            .map_err(|e| StoreError::AtomicWrite {
                path: self.path.clone(),
                source: e.error,
            })?;

        debug!("saved {} notes to {}", notes.len(), self.path.display());
        Ok(())
    }
}
