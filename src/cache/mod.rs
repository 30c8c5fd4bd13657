//! Output cache module
//!
//! Skips rewriting declaration files whose content hasn't changed.
//!
//! # Overview
//!
//! - `HashCache` - file path to content hash map, persisted as JSON
//! - `content_hash` - first 8 hex characters of the SHA-256 of a file's text

mod manager;

pub use manager::{content_hash, HashCache};
