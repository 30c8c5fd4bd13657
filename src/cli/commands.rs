//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate TypeScript declarations from JSON API responses
#[derive(Parser, Debug)]
#[command(name = "fetch-json-to-ts")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (YAML or JSON)
    #[arg(short, long, global = true, default_value = "fetch-json-to-ts.yaml")]
    pub config: PathBuf,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch every configured api and write its declaration file
    Generate {
        /// Override the configured base URL
        #[arg(long)]
        base_url: Option<String>,

        /// Override the configured bearer token
        #[arg(long)]
        token: Option<String>,

        /// Override the configured output directory
        #[arg(long)]
        type_path: Option<PathBuf>,

        /// Ignore the cache file and rewrite every declaration
        #[arg(long)]
        no_cache: bool,
    },

    /// Print the declaration for a local JSON file
    Preview {
        /// JSON sample file
        file: PathBuf,

        /// Declaration base name
        #[arg(short, long, default_value = "Sample")]
        name: String,
    },

    /// Validate the config and list the files it would produce
    Validate,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Text,
    /// JSON output (one message per line)
    Json,
}
