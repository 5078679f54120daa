//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! wikicomic binary.

mod commands;
mod generate;
mod search;
mod serve;

pub use commands::{Cli, Commands, GenerateArgs};
pub use generate::generate_comic;
pub use search::search_articles;
pub use serve::run_server;
