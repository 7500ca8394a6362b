//! # qc-store
//!
//! Persistence for the QC board. The board lives in memory; every applied
//! command is appended to a JSONL journal that rebuilds the board on open.

pub mod error;
pub mod journal;
pub mod store;

pub use error::StoreError;
pub use store::BoardStore;
