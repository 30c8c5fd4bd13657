//! HTTP fetch module
//!
//! Fetches one sample JSON document per configured endpoint.
//!
//! # Features
//!
//! - **Base URL joining**: api paths are resolved against the configured base URL
//! - **Auth**: bearer token and arbitrary default headers
//! - **Error classification**: statuses of 400 and above become `HttpStatus` errors
//! - **Sample sources**: `SampleSource` trait so the generator can run without a network

mod client;
mod source;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use source::{SampleSource, StaticSource};
