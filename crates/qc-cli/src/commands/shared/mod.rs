pub mod filter_args;
pub mod limit;
pub mod lookup;
pub mod parse;
pub mod respond;
pub mod text;
