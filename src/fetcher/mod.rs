//! Resource fetching
//!
//! A fetcher turns one resource identifier into a [`FetchResult`] or a
//! [`FetchError`]. It makes no assumption about how many fetches run at once;
//! each execution strategy decides how to schedule calls to it.

mod http;
#[cfg(test)]
pub(crate) mod stub;

pub use http::{build_http_client, HttpFetcher};

use crate::FetchError;

/// A successfully fetched resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    resource_id: String,
    content_length: usize,
}

impl FetchResult {
    /// Creates a result from an identifier and a precomputed length
    pub fn new(resource_id: impl Into<String>, content_length: usize) -> Self {
        Self {
            resource_id: resource_id.into(),
            content_length,
        }
    }

    /// Creates a result from a fetched body, counting its characters
    pub fn from_body(resource_id: impl Into<String>, body: &str) -> Self {
        Self::new(resource_id, body.chars().count())
    }

    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    /// Length of the fetched content in characters
    pub fn content_length(&self) -> usize {
        self.content_length
    }
}

/// Retrieves a single resource
///
/// `fetch` blocks the calling thread until the resource is retrieved or the
/// transport gives up. Implementations must be shareable across worker
/// threads.
pub trait ResourceFetcher: Send + Sync {
    fn fetch(&self, resource_id: &str) -> Result<FetchResult, FetchError>;
}
