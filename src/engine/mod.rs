//! Generation engine module
//!
//! Fetches every endpoint's sample and turns each into a declaration file.
//!
//! # Overview
//!
//! The engine module provides:
//! - `Generator` - runs one batch over all configured endpoints
//! - `RunReport` / `EndpointReport` - what happened to each endpoint
//!
//! Fetches run concurrently and settle independently. A failed endpoint is
//! logged and reported without stopping the others. Filesystem and cache
//! errors abort the run.

mod types;

pub use types::{EndpointReport, RunReport, WriteOutcome};

use crate::cache::{content_hash, HashCache};
use crate::codegen::{anonymous_name, capitalize, generate_declaration, interface_name};
use crate::config::{Config, Endpoint};
use crate::error::Result;
use crate::http::{HttpClient, SampleSource};
use futures::future::join_all;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Declaration file extension
const DECLARATION_EXT: &str = "d.ts";

/// Batch generator over a sample source
#[derive(Debug)]
pub struct Generator<S> {
    /// Generator configuration
    config: Config,
    /// Where samples come from
    source: S,
    /// Output hash cache
    cache: HashCache,
}

impl Generator<HttpClient> {
    /// Create a generator fetching over HTTP as described by `config`
    pub fn from_config(config: Config) -> Result<Self> {
        let client = HttpClient::from_config(&config)?;
        Ok(Self::new(config, client))
    }
}

impl<S: SampleSource> Generator<S> {
    /// Create a generator with the cache file named in `config`
    pub fn new(config: Config, source: S) -> Self {
        let cache = HashCache::new(&config.cache_path);
        Self {
            config,
            source,
            cache,
        }
    }

    /// Use a different cache
    #[must_use]
    pub fn with_cache(mut self, cache: HashCache) -> Self {
        self.cache = cache;
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the cache
    pub fn cache(&self) -> &HashCache {
        &self.cache
    }

    /// Run one batch: fetch all samples, write declarations, persist the cache
    pub async fn run(&mut self) -> Result<RunReport> {
        let endpoints = self.config.apis.clone();

        let fetches = endpoints
            .iter()
            .map(|endpoint| self.source.fetch_sample(endpoint.api()));
        let results = join_all(fetches).await;

        let out_dir = std::path::absolute(&self.config.type_path)?;
        let mut anonymous = 0;
        let mut report = RunReport::default();

        for (endpoint, result) in endpoints.iter().zip(results) {
            let api = endpoint.api().to_string();

            let sample = match result {
                Ok(sample) => sample,
                Err(e) if e.is_endpoint_failure() => {
                    error!(api = %api, error = %e, "Endpoint request failed");
                    report.endpoints.push(EndpointReport::Failed { api, error: e });
                    continue;
                }
                Err(e) => return Err(e),
            };

            let name = resolve_name(endpoint, &mut anonymous);
            let content = generate_declaration(&sample, &name);
            let path = declaration_path(&out_dir, &name);

            let outcome = self.write_declaration(&path, &content).await?;
            match outcome {
                WriteOutcome::Written => {
                    info!(api = %api, path = %path.display(), "Declaration file generated");
                }
                WriteOutcome::Unchanged => {
                    info!(api = %api, path = %path.display(), "Declaration file unchanged");
                }
            }

            report.endpoints.push(EndpointReport::Generated {
                api,
                name,
                path,
                outcome,
            });
        }

        self.cache.persist().await?;
        debug!(
            cache = %self.cache.path().display(),
            entries = self.cache.len(),
            "Cache persisted"
        );

        Ok(report)
    }

    /// Write `content` to `path` unless the file on disk already holds it
    async fn write_declaration(&mut self, path: &Path, content: &str) -> Result<WriteOutcome> {
        let hash = content_hash(content);

        if self.cache.is_fresh(path, &hash).await? {
            self.cache.set(path, hash);
            return Ok(WriteOutcome::Unchanged);
        }

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, content).await?;
        self.cache.set(path, hash);

        Ok(WriteOutcome::Written)
    }
}

/// Declaration name for an endpoint: override, then path, then `Anonymous<n>`
pub fn resolve_name(endpoint: &Endpoint, anonymous: &mut usize) -> String {
    let name = match endpoint.name_override() {
        Some(name) => name.to_string(),
        None => interface_name(endpoint.api()).unwrap_or_else(|| {
            *anonymous += 1;
            anonymous_name(*anonymous)
        }),
    };
    capitalize(&name)
}

/// Output path a declaration with this name would be written to
pub fn declaration_path(type_path: &Path, name: &str) -> PathBuf {
    type_path.join(format!("{}.{DECLARATION_EXT}", capitalize(name)))
}

#[cfg(test)]
mod tests;
