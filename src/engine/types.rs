//! Engine types
//!
//! Per-endpoint results and the run report.

use crate::error::Error;
use std::path::PathBuf;

/// What happened to a declaration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was created or its content changed
    Written,
    /// The file already held identical content and was left alone
    Unchanged,
}

/// Result for one configured endpoint
#[derive(Debug)]
pub enum EndpointReport {
    /// A declaration file was produced
    Generated {
        /// Endpoint path
        api: String,
        /// Declaration base name
        name: String,
        /// Declaration file path
        path: PathBuf,
        /// Whether the file was rewritten
        outcome: WriteOutcome,
    },
    /// The sample could not be fetched or parsed
    Failed {
        /// Endpoint path
        api: String,
        /// What went wrong
        error: Error,
    },
}

impl EndpointReport {
    /// Endpoint path this report is for
    pub fn api(&self) -> &str {
        match self {
            Self::Generated { api, .. } | Self::Failed { api, .. } => api,
        }
    }

    /// Check if this endpoint failed
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Summary of one generator run, in configuration order
#[derive(Debug, Default)]
pub struct RunReport {
    /// One entry per configured endpoint
    pub endpoints: Vec<EndpointReport>,
}

impl RunReport {
    /// Number of files written this run
    pub fn written(&self) -> usize {
        self.count_outcome(WriteOutcome::Written)
    }

    /// Number of files left untouched because they were current
    pub fn unchanged(&self) -> usize {
        self.count_outcome(WriteOutcome::Unchanged)
    }

    /// Number of failed endpoints
    pub fn failed(&self) -> usize {
        self.endpoints.iter().filter(|e| e.is_failed()).count()
    }

    /// Paths of every generated file, written or unchanged
    pub fn paths(&self) -> Vec<&PathBuf> {
        self.endpoints
            .iter()
            .filter_map(|e| match e {
                EndpointReport::Generated { path, .. } => Some(path),
                EndpointReport::Failed { .. } => None,
            })
            .collect()
    }

    fn count_outcome(&self, wanted: WriteOutcome) -> usize {
        self.endpoints
            .iter()
            .filter(|e| matches!(e, EndpointReport::Generated { outcome, .. } if *outcome == wanted))
            .count()
    }
}
