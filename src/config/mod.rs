//! Configuration module
//!
//! Loads the generator config: base URL, auth, output directory and the
//! list of endpoints to sample.

mod parser;
mod types;

pub use parser::{load_config, load_config_from_str, validate_config};
pub use types::{Config, Endpoint, DEFAULT_CACHE_PATH};
