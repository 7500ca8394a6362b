mod comment;
mod filter;
mod rule;
mod thread;

pub use comment::CommentCommands;
pub use filter::{FilterArgs, FilterCommands};
pub use rule::RuleCommands;
pub use thread::ThreadCommands;
