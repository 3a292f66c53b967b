//! In-memory fetcher for exercising strategies without a network

use crate::fetcher::{FetchResult, ResourceFetcher};
use crate::FetchError;
use std::collections::HashMap;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
enum StubResponse {
    Body { length: usize, delay: Duration },
    Failure { delay: Duration },
}

/// Serves canned lengths, latencies and failures keyed by identifier
#[derive(Debug, Default)]
pub(crate) struct StubFetcher {
    responses: HashMap<String, StubResponse>,
    calls: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_body(mut self, id: &str, length: usize, delay_ms: u64) -> Self {
        self.responses.insert(
            id.to_string(),
            StubResponse::Body {
                length,
                delay: Duration::from_millis(delay_ms),
            },
        );
        self
    }

    pub(crate) fn with_failure(mut self, id: &str, delay_ms: u64) -> Self {
        self.responses.insert(
            id.to_string(),
            StubResponse::Failure {
                delay: Duration::from_millis(delay_ms),
            },
        );
        self
    }

    /// Identifiers in the order `fetch` was entered
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl ResourceFetcher for StubFetcher {
    fn fetch(&self, resource_id: &str) -> Result<FetchResult, FetchError> {
        self.calls.lock().unwrap().push(resource_id.to_string());

        match self.responses.get(resource_id) {
            Some(StubResponse::Body { length, delay }) => {
                thread::sleep(*delay);
                Ok(FetchResult::new(resource_id, *length))
            }
            Some(StubResponse::Failure { delay }) => {
                thread::sleep(*delay);
                Err(FetchError::Unavailable {
                    url: resource_id.to_string(),
                    reason: "stubbed failure".to_string(),
                })
            }
            None => Err(FetchError::Unavailable {
                url: resource_id.to_string(),
                reason: "no stubbed response".to_string(),
            }),
        }
    }
}
