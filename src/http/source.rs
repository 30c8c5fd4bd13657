//! Sample sources
//!
//! The generator only needs "give me the JSON behind this api path". The
//! `SampleSource` trait is that seam; `HttpClient` is the real implementation.

use super::client::{HttpClient, HttpClientConfig};
use crate::config::Config;
use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

/// Something that can produce one sample JSON document per api path
#[async_trait]
pub trait SampleSource: Send + Sync {
    /// Fetch and parse the sample behind `api`
    async fn fetch_sample(&self, api: &str) -> Result<Value>;
}

#[async_trait]
impl SampleSource for HttpClient {
    async fn fetch_sample(&self, api: &str) -> Result<Value> {
        self.get_json(api).await
    }
}

impl HttpClient {
    /// Build a client from the generator config: base URL, headers and token.
    ///
    /// The token's `Authorization` header takes precedence over one set in `headers`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = HttpClientConfig::builder()
            .base_url(&config.base_url)
            .headers(config.headers.clone());

        if let Some(token) = &config.token {
            builder = builder.bearer_token(token);
        }

        Self::with_config(builder.build())
    }
}

/// In-memory source keyed by api path. Unknown paths are a 404.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    samples: HashMap<String, Value>,
}

impl StaticSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sample for an api path
    #[must_use]
    pub fn with_sample(mut self, api: impl Into<String>, sample: Value) -> Self {
        self.samples.insert(api.into(), sample);
        self
    }
}

#[async_trait]
impl SampleSource for StaticSource {
    async fn fetch_sample(&self, api: &str) -> Result<Value> {
        self.samples
            .get(api)
            .cloned()
            .ok_or_else(|| crate::error::Error::http_status(404, "Not Found"))
    }
}
