//! Store error types for qc-store.

use std::path::PathBuf;

use qc_core::errors::CoreError;
use thiserror::Error;

/// Errors from journal and store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No journal exists at the expected location.
    #[error("No board found at {0} (run `qcl init` first)")]
    NotInitialized(PathBuf),

    /// `init` found an existing journal.
    #[error("A board already exists at {0}")]
    AlreadyInitialized(PathBuf),

    /// The journal content cannot be replayed.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A command was rejected by the board.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Catch-all for unexpected errors (I/O, JSON).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
