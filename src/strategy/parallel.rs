//! Fully concurrent strategy: launch everything, join once, report in order

use crate::fetcher::ResourceFetcher;
use crate::output::Reporter;
use crate::strategy::{settle, ExecutionStrategy, FailurePolicy, RunSummary};
use crate::{BenchError, FetchError, FetchOutcome};
use futures::future::join_all;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::{self, JoinHandle};

/// Spawns one blocking worker per target before awaiting any of them
///
/// Nothing is reported until every fetch has finished. Outcomes are kept in a
/// positional `Vec`, so report order equals target order whatever the
/// completion order was. Elapsed time approximates the slowest fetch.
///
/// Under [`FailurePolicy::FailFast`] the join is all-or-nothing: once every
/// worker has finished, the first failure in target order fails the run and no
/// result line is written. The run never returns while a worker it spawned is
/// still fetching.
pub struct ParallelConcurrent {
    fetcher: Arc<dyn ResourceFetcher>,
    policy: FailurePolicy,
    runtime: Handle,
}

impl ParallelConcurrent {
    pub fn new(fetcher: Arc<dyn ResourceFetcher>, policy: FailurePolicy, runtime: Handle) -> Self {
        Self {
            fetcher,
            policy,
            runtime,
        }
    }

    fn spawn_all(&self, targets: &[String]) -> Vec<(String, JoinHandle<FetchOutcome>)> {
        targets
            .iter()
            .enumerate()
            .map(|(index, target)| {
                let fetcher = Arc::clone(&self.fetcher);
                let url = target.clone();
                let handle = task::spawn_blocking(move || {
                    let outcome = fetcher.fetch(&url);
                    tracing::debug!("[{}] {} completed", index, url);
                    outcome
                });
                (target.clone(), handle)
            })
            .collect()
    }
}

/// Awaits a worker, folding a panicked or cancelled task into a fetch error
async fn resolve(url: String, handle: JoinHandle<FetchOutcome>) -> FetchOutcome {
    match handle.await {
        Ok(outcome) => outcome,
        Err(e) => Err(FetchError::Worker {
            url,
            message: e.to_string(),
        }),
    }
}

impl ExecutionStrategy for ParallelConcurrent {
    fn name(&self) -> &'static str {
        "parallel"
    }

    /// Must not be called from inside an async execution context.
    fn run(
        &self,
        targets: &[String],
        reporter: &mut Reporter<'_>,
    ) -> Result<RunSummary, BenchError> {
        let mut summary = RunSummary::default();

        let joined: Vec<FetchOutcome> = self.runtime.block_on(async {
            let handles = self.spawn_all(targets);
            tracing::debug!("Dispatched {} fetches", handles.len());

            join_all(
                handles
                    .into_iter()
                    .map(|(url, handle)| resolve(url, handle)),
            )
            .await
        });

        // Every worker has finished here; fail-fast keeps the first error by position
        let outcomes: Vec<FetchOutcome> = match self.policy {
            FailurePolicy::FailFast => joined
                .into_iter()
                .collect::<Result<Vec<_>, FetchError>>()?
                .into_iter()
                .map(Ok)
                .collect(),
            FailurePolicy::CollectResults => joined,
        };

        for outcome in outcomes {
            settle(outcome, self.policy, reporter, &mut summary)?;
        }

        Ok(summary)
    }
}
