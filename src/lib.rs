//! # fetch-json-to-ts
//!
//! Fetches JSON from configured HTTP endpoints and generates TypeScript
//! declaration files describing the shape of each response.
//!
//! ## Features
//!
//! - **Structural inference**: tuples, nested object shapes, optional fields
//! - **Hoisting**: large array element shapes become their own named interfaces
//! - **Concurrent fetching**: every endpoint is requested at once, failures stay local
//! - **Output cache**: unchanged declaration files are not rewritten
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fetch_json_to_ts::{config::load_config, engine::Generator, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = load_config("fetch-json-to-ts.yaml")?;
//!     let report = Generator::from_config(config)?.run().await?;
//!     println!("{} written, {} failed", report.written(), report.failed());
//!     Ok(())
//! }
//! ```
//!
//! Generating a declaration from a value directly:
//!
//! ```rust
//! use fetch_json_to_ts::codegen::generate_declaration;
//! use serde_json::json;
//!
//! let text = generate_declaration(&json!({"id": 1, "name": "cc"}), "user");
//! assert_eq!(text, "export interface UserType {\n  id: number,\n  name: string\n}\n");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   sample    ┌───────────┐   text    ┌────────────┐
//! │   HTTP   │ ──────────▶ │  Codegen  │ ────────▶ │   Engine   │ ──▶ <Name>.d.ts
//! │ (source) │             │ transform │           │ + HashCache│
//! └──────────┘             └───────────┘           └────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Declaration codegen from JSON samples
pub mod codegen;

/// Configuration loading
pub mod config;

/// HTTP fetch layer
pub mod http;

/// Content-hash output cache
pub mod cache;

/// Batch generation engine
pub mod engine;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use codegen::{generate_declaration, transform, TypeContext};
pub use config::{load_config, Config, Endpoint};
pub use engine::{Generator, RunReport};
pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
