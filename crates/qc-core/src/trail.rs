//! JSONL journal entry envelope.
//!
//! Every board mutation is recorded as a `JournalEntry` in
//! `.qclist/journal.jsonl`. The board is rebuilt by replaying the file in
//! order: a `seed` entry replaces the board, a `command` entry is applied at
//! its recorded timestamp.
//!
//! Old journals without a `v` field deserialize with `v == 1`.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::command::Command;

/// Journal version written by this build.
pub const JOURNAL_VERSION: u32 = 1;

const fn default_journal_version() -> u32 {
    JOURNAL_VERSION
}

/// A single line of the journal.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct JournalEntry {
    /// Schema version. Defaults to 1 when absent.
    #[serde(default = "default_journal_version")]
    pub v: u32,

    /// When the operation was applied. Commands replay at this instant.
    pub ts: DateTime<Utc>,

    #[serde(flatten)]
    pub op: JournalOp,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "op", content = "data", rename_all = "snake_case")]
pub enum JournalOp {
    /// Replace the whole board.
    Seed(Board),
    /// Apply one command.
    Command(Command),
}

impl JournalEntry {
    #[must_use]
    pub const fn seed(board: Board, ts: DateTime<Utc>) -> Self {
        Self {
            v: JOURNAL_VERSION,
            ts,
            op: JournalOp::Seed(board),
        }
    }

    #[must_use]
    pub const fn command(command: Command, ts: DateTime<Utc>) -> Self {
        Self {
            v: JOURNAL_VERSION,
            ts,
            op: JournalOp::Command(command),
        }
    }
}
