//! CLI module
//!
//! Command-line interface for reading headlines.
//!
//! # Commands
//!
//! - `read` - fetch and render top headlines for a category, page by page
//! - `categories` - list the fixed category set

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
