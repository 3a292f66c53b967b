//! HTTP fetcher implementation
//!
//! Provides the blocking reqwest client every strategy shares, and the
//! [`ResourceFetcher`] that downloads a page body and measures it.

use crate::config::HttpConfig;
use crate::fetcher::{FetchResult, ResourceFetcher};
use crate::FetchError;
use reqwest::blocking::Client;
use std::time::Duration;

/// Builds a blocking HTTP client from the transport configuration
///
/// Redirects are followed with reqwest's default policy. The client must be
/// created and dropped outside of any async execution context.
///
/// # Arguments
///
/// * `config` - The transport configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use fetch_bench::config::HttpConfig;
/// use fetch_bench::fetcher::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches resources over HTTP(S) with a GET request
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds the client from configuration and wraps it
    pub fn from_config(config: &HttpConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client(config)?))
    }
}

impl ResourceFetcher for HttpFetcher {
    fn fetch(&self, resource_id: &str) -> Result<FetchResult, FetchError> {
        tracing::debug!("GET {}", resource_id);

        let response = self.client.get(resource_id).send().map_err(|e| {
            if e.is_timeout() {
                tracing::debug!("Request timeout for {}", resource_id);
            } else if e.is_connect() {
                tracing::debug!("Connection failed for {}", resource_id);
            }
            FetchError::Transport {
                url: resource_id.to_string(),
                source: e,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: resource_id.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|e| FetchError::Body {
            url: resource_id.to_string(),
            source: e,
        })?;

        let result = FetchResult::from_body(resource_id, &body);
        tracing::debug!(
            "Fetched {} ({} characters)",
            resource_id,
            result.content_length()
        );
        Ok(result)
    }
}
