//! JSONL journal writer.
//!
//! Appends `JournalEntry` records to `.qclist/journal.jsonl` using
//! `serde_jsonlines::append_json_lines`, one line per entry.

use std::path::{Path, PathBuf};

use qc_core::trail::JournalEntry;

use crate::error::StoreError;

/// Appends journal entries to a single JSONL file.
pub struct JournalWriter {
    path: PathBuf,
    enabled: bool,
}

impl JournalWriter {
    /// Create a writer for `path`, creating its parent directory.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the directory cannot be created.
    pub fn new(path: PathBuf) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Other(e.into()))?;
        }
        Ok(Self {
            path,
            enabled: true,
        })
    }

    /// A writer that drops every entry (in-memory boards and tests).
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            path: PathBuf::new(),
            enabled: false,
        }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Append one entry.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file write fails.
    pub fn append(&self, entry: &JournalEntry) -> Result<(), StoreError> {
        if !self.enabled {
            return Ok(());
        }
        serde_jsonlines::append_json_lines(&self.path, [entry])
            .map_err(|e| StoreError::Other(e.into()))?;
        Ok(())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
