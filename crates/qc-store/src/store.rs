//! `BoardStore`: an in-memory board backed by its journal.
//!
//! Every mutation follows the same protocol:
//! 1. Apply the command to a copy of the board (rollup included)
//! 2. Append the command to the journal
//! 3. Swap the copy in
//!
//! Commands that change nothing are not journaled.

use std::path::Path;

use chrono::{DateTime, Utc};
use qc_core::board::Board;
use qc_core::command::{Change, Command};
use qc_core::reducer::reduce;
use qc_core::trail::JournalEntry;

use crate::error::StoreError;
use crate::journal::JOURNAL_FILE;
use crate::journal::replayer::{JournalReplayer, ReplayStats};
use crate::journal::writer::JournalWriter;

pub struct BoardStore {
    board: Board,
    journal: JournalWriter,
}

impl BoardStore {
    /// Create a journal in `state_dir`, optionally starting from `seed`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AlreadyInitialized` if a journal already exists,
    /// or `StoreError::Other` on I/O failure.
    pub fn init(state_dir: &Path, seed: Option<Board>, now: DateTime<Utc>) -> Result<Self, StoreError> {
        let path = state_dir.join(JOURNAL_FILE);
        if path.exists() {
            return Err(StoreError::AlreadyInitialized(path));
        }

        let journal = JournalWriter::new(path.clone())?;
        std::fs::File::create(&path).map_err(|e| StoreError::Other(e.into()))?;

        let board = match seed {
            Some(board) => {
                journal.append(&JournalEntry::seed(board.clone(), now))?;
                board
            }
            None => Board::new(),
        };
        tracing::info!(
            journal = %path.display(),
            rules = board.rules.len(),
            threads = board.threads.len(),
            "initialized board"
        );
        Ok(Self { board, journal })
    }

    /// Open the journal in `state_dir` and replay it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotInitialized` when no journal exists, or the
    /// replay error.
    pub fn open(state_dir: &Path) -> Result<Self, StoreError> {
        let path = state_dir.join(JOURNAL_FILE);
        if !path.exists() {
            return Err(StoreError::NotInitialized(state_dir.to_path_buf()));
        }

        let (board, stats) = JournalReplayer::replay(&path)?;
        let ReplayStats {
            entries,
            seeds,
            commands,
        } = stats;
        tracing::info!(journal = %path.display(), entries, seeds, commands, "replayed journal");

        Ok(Self {
            board,
            journal: JournalWriter::new(path)?,
        })
    }

    /// A store with no journal behind it.
    #[must_use]
    pub const fn in_memory(board: Board) -> Self {
        Self {
            board,
            journal: JournalWriter::disabled(),
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn journal_path(&self) -> &Path {
        self.journal.path()
    }

    /// Apply `command` now and journal it.
    ///
    /// # Errors
    ///
    /// See [`Self::execute_at`].
    pub fn execute(&mut self, command: &Command) -> Result<Change, StoreError> {
        self.execute_at(command, Utc::now())
    }

    /// Apply `command` at `at` and journal it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core` when the board rejects the command and
    /// `StoreError::Other` when the journal cannot be written. The board is
    /// unchanged in both cases.
    pub fn execute_at(&mut self, command: &Command, at: DateTime<Utc>) -> Result<Change, StoreError> {
        let (next, change) = reduce(&self.board, command, at)?;
        if !change.is_unchanged() {
            self.journal.append(&JournalEntry::command(command.clone(), at))?;
            self.board = next;
        }
        Ok(change)
    }

    /// Apply several commands in order at the same instant.
    ///
    /// Stops at the first failure; earlier commands stay applied and journaled.
    ///
    /// # Errors
    ///
    /// The first error from [`Self::execute_at`].
    pub fn execute_all(&mut self, commands: &[Command], at: DateTime<Utc>) -> Result<Vec<Change>, StoreError> {
        commands
            .iter()
            .map(|command| self.execute_at(command, at))
            .collect()
    }
}
