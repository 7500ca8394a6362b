pub mod comment;
pub mod dispatch;
pub mod export;
pub mod filter;
pub mod init;
pub mod rule;
pub mod schema;
pub mod shared;
pub mod thread;
