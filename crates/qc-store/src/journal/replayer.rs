//! Rebuild a board from its journal.

use std::path::Path;

use qc_core::board::Board;
use qc_core::trail::{JOURNAL_VERSION, JournalEntry, JournalOp};

use crate::error::StoreError;

/// Counts reported after a replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub entries: u32,
    pub seeds: u32,
    pub commands: u32,
}

pub struct JournalReplayer;

impl JournalReplayer {
    /// Replay every entry of the journal at `path` in file order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidState` for an unsupported entry version or
    /// a command the board rejects, and `StoreError::Other` for I/O or JSON
    /// failures.
    pub fn replay(path: &Path) -> Result<(Board, ReplayStats), StoreError> {
        let entries: Vec<JournalEntry> = serde_jsonlines::json_lines(path)
            .map_err(|e| StoreError::Other(e.into()))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::Other(e.into()))?;
        Self::replay_entries(&entries)
    }

    /// Replay already-parsed entries.
    ///
    /// # Errors
    ///
    /// Same as [`Self::replay`], minus I/O.
    pub fn replay_entries(entries: &[JournalEntry]) -> Result<(Board, ReplayStats), StoreError> {
        let mut board = Board::new();
        let mut stats = ReplayStats::default();

        for (line, entry) in entries.iter().enumerate() {
            let line = line + 1;
            if entry.v != JOURNAL_VERSION {
                return Err(StoreError::InvalidState(format!(
                    "Unsupported journal version {} on line {line}",
                    entry.v
                )));
            }

            match &entry.op {
                JournalOp::Seed(snapshot) => {
                    board = snapshot.clone();
                    stats.seeds += 1;
                }
                JournalOp::Command(command) => {
                    board.apply(command, entry.ts).map_err(|e| {
                        StoreError::InvalidState(format!(
                            "Journal line {line} ({}) cannot be replayed: {e}",
                            command.name()
                        ))
                    })?;
                    stats.commands += 1;
                }
            }
            stats.entries += 1;
        }

        Ok((board, stats))
    }
}
