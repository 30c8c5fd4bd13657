//! Configuration types
//!
//! These map one-to-one onto the YAML/JSON config file.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Default location of the hash cache, relative to the working directory
pub const DEFAULT_CACHE_PATH: &str = "node_modules/.fetch-json-to-ts-cached.json";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL every api path is joined onto
    #[serde(default = "default_base_url", alias = "baseURL")]
    pub base_url: String,

    /// Bearer token sent as `Authorization: Bearer <token>`
    #[serde(default)]
    pub token: Option<String>,

    /// Extra request headers
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Directory declaration files are written to
    #[serde(default = "default_type_path", alias = "typePath")]
    pub type_path: PathBuf,

    /// Location of the hash cache file
    #[serde(default = "default_cache_path", alias = "cachePath")]
    pub cache_path: PathBuf,

    /// Endpoints to generate declarations for
    #[serde(default)]
    pub apis: Vec<Endpoint>,
}

fn default_base_url() -> String {
    "/".to_string()
}

fn default_type_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_cache_path() -> PathBuf {
    PathBuf::from(DEFAULT_CACHE_PATH)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            headers: HashMap::new(),
            type_path: default_type_path(),
            cache_path: default_cache_path(),
            apis: Vec::new(),
        }
    }
}

// ============================================================================
// Endpoints
// ============================================================================

/// One configured endpoint: a bare path, or a path with an explicit name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Endpoint {
    /// Path whose declaration name is inferred from the path
    Path(String),
    /// Path with a declaration name override
    Named {
        /// Declaration base name
        name: String,
        /// Endpoint path
        api: String,
    },
}

impl Endpoint {
    /// The endpoint path
    pub fn api(&self) -> &str {
        match self {
            Endpoint::Path(api) | Endpoint::Named { api, .. } => api,
        }
    }

    /// The explicit declaration name, if one was configured
    pub fn name_override(&self) -> Option<&str> {
        match self {
            Endpoint::Path(_) => None,
            Endpoint::Named { name, .. } => Some(name),
        }
    }
}

impl From<&str> for Endpoint {
    fn from(api: &str) -> Self {
        Endpoint::Path(api.to_string())
    }
}
