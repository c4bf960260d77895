pub mod cli;
pub mod error;
pub mod payload;
pub mod rewrite;
pub mod walker;
