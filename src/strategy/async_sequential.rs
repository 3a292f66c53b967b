//! Suspend-per-item strategy: each fetch is offloaded and awaited in turn

use crate::fetcher::ResourceFetcher;
use crate::output::Reporter;
use crate::strategy::{settle, ExecutionStrategy, FailurePolicy, RunSummary};
use crate::{BenchError, FetchError};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task;

/// Dispatches every fetch to a blocking worker and awaits it before the next
///
/// The driver suspends once per item, so there is never more than one fetch
/// in flight and the total time matches [`Sequential`](super::Sequential).
pub struct AsyncSequential {
    fetcher: Arc<dyn ResourceFetcher>,
    policy: FailurePolicy,
    runtime: Handle,
}

impl AsyncSequential {
    pub fn new(fetcher: Arc<dyn ResourceFetcher>, policy: FailurePolicy, runtime: Handle) -> Self {
        Self {
            fetcher,
            policy,
            runtime,
        }
    }
}

impl ExecutionStrategy for AsyncSequential {
    fn name(&self) -> &'static str {
        "async-sequential"
    }

    /// Must not be called from inside an async execution context.
    fn run(
        &self,
        targets: &[String],
        reporter: &mut Reporter<'_>,
    ) -> Result<RunSummary, BenchError> {
        self.runtime.block_on(async {
            let mut summary = RunSummary::default();

            for (index, target) in targets.iter().enumerate() {
                let fetcher = Arc::clone(&self.fetcher);
                let url = target.clone();

                tracing::debug!("[{}] dispatching {} to worker", index, target);
                let outcome = task::spawn_blocking(move || fetcher.fetch(&url))
                    .await
                    .unwrap_or_else(|e| {
                        Err(FetchError::Worker {
                            url: target.clone(),
                            message: e.to_string(),
                        })
                    });

                settle(outcome, self.policy, reporter, &mut summary)?;
            }

            Ok::<_, BenchError>(summary)
        })
    }
}
