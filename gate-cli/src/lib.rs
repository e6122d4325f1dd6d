pub mod commands;
pub mod messages;
pub mod repl;

pub use repl::{Flow, Repl};
