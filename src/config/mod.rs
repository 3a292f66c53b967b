//! Configuration module for fetch-bench
//!
//! Settings are read from an optional TOML file. Every key has a default, so
//! the harness runs without any file at all.
//!
//! # Example
//!
//! ```no_run
//! use fetch_bench::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("fetch-bench.toml")).unwrap();
//! println!("Request timeout: {}s", config.http.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, HarnessConfig, HttpConfig};

// Re-export parser and validation functions
pub use parser::{load_config, load_optional_config, parse_config};
pub use validation::{validate, validate_targets};
