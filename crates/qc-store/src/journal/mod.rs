pub mod replayer;
pub mod writer;

/// Journal file name inside the state directory.
pub const JOURNAL_FILE: &str = "journal.jsonl";
