//! CLI module
//!
//! Command-line interface for the generator.
//!
//! # Commands
//!
//! - `generate` - Fetch every configured api and write declaration files
//! - `preview` - Print the declaration for a local JSON file
//! - `validate` - Check the config and list the files it would produce

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
