//! fetch-bench: compare sequential, suspend-per-item and concurrent fetching
//!
//! This crate fetches a fixed list of remote resources under three execution
//! strategies and prints the same per-item report and total wall-clock time
//! for each, so the throughput difference between the concurrency models can
//! be observed on an identical workload.

pub mod config;
pub mod fetcher;
pub mod harness;
pub mod output;
pub mod strategy;
pub mod targets;
pub mod timer;

use thiserror::Error;

/// Main error type for fetch-bench operations
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Fetch(#[from] FetchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by a [`fetcher::ResourceFetcher`] for a single resource
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to fetch {url}: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("Fetching {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to read body of {url}: {source}")]
    Body { url: String, source: reqwest::Error },

    #[error("Resource {url} unavailable: {reason}")]
    Unavailable { url: String, reason: String },

    #[error("Worker fetching {url} did not complete: {message}")]
    Worker { url: String, message: String },
}

impl FetchError {
    /// The resource identifier the failure belongs to
    pub fn url(&self) -> &str {
        match self {
            FetchError::Transport { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Body { url, .. }
            | FetchError::Unavailable { url, .. }
            | FetchError::Worker { url, .. } => url,
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for fetch-bench operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for a single fetch
pub type FetchOutcome = std::result::Result<fetcher::FetchResult, FetchError>;

// Re-export commonly used types
pub use config::Config;
pub use fetcher::{FetchResult, HttpFetcher, ResourceFetcher};
pub use harness::{Harness, RunRecord};
pub use output::Reporter;
pub use strategy::{AsyncSequential, ExecutionStrategy, FailurePolicy, ParallelConcurrent, Sequential};
