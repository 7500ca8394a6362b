//! Entity structs for the QC board.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip, journal persistence, and schema validation.

mod comment;
mod rule;
mod thread;

pub use comment::Comment;
pub use rule::BusinessRule;
pub use thread::Thread;
