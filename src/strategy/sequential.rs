//! Baseline strategy: one direct blocking fetch after another

use crate::fetcher::ResourceFetcher;
use crate::output::Reporter;
use crate::strategy::{settle, ExecutionStrategy, FailurePolicy, RunSummary};
use crate::BenchError;
use std::sync::Arc;

/// Fetches each target on the calling thread, reporting it before the next
///
/// Total time is the sum of every fetch latency.
pub struct Sequential {
    fetcher: Arc<dyn ResourceFetcher>,
    policy: FailurePolicy,
}

impl Sequential {
    pub fn new(fetcher: Arc<dyn ResourceFetcher>, policy: FailurePolicy) -> Self {
        Self { fetcher, policy }
    }
}

impl ExecutionStrategy for Sequential {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn run(
        &self,
        targets: &[String],
        reporter: &mut Reporter<'_>,
    ) -> Result<RunSummary, BenchError> {
        let mut summary = RunSummary::default();

        for (index, target) in targets.iter().enumerate() {
            tracing::debug!("[{}] fetching {} on driver thread", index, target);
            let outcome = self.fetcher.fetch(target);
            settle(outcome, self.policy, reporter, &mut summary)?;
        }

        Ok(summary)
    }
}
