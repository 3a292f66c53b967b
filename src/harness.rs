//! Benchmark harness
//!
//! Runs an ordered plan of labelled strategies over one read-only target
//! list. Each run is timed as a whole (reporting included) and followed by a
//! summary line, or by an explicit failure line when it aborted. A failed run
//! never stops the plan.

use crate::config::HarnessConfig;
use crate::fetcher::ResourceFetcher;
use crate::output::Reporter;
use crate::strategy::{
    AsyncSequential, ExecutionStrategy, FailurePolicy, ParallelConcurrent, RunSummary, Sequential,
};
use crate::timer::measure;
use crate::BenchError;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// A strategy scheduled in the plan under a display label
pub struct PlannedRun {
    pub label: String,
    pub strategy: Box<dyn ExecutionStrategy>,
}

/// Measurements of a run that completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunMetrics {
    pub summary: RunSummary,
    pub elapsed: Duration,
}

/// Outcome of one planned run
#[derive(Debug)]
pub struct RunRecord {
    pub label: String,
    pub strategy: &'static str,
    pub outcome: Result<RunMetrics, BenchError>,
}

/// Executes planned runs strictly one after another
pub struct Harness {
    targets: Vec<String>,
    plan: Vec<PlannedRun>,
}

impl Harness {
    /// Creates a harness with an empty plan
    pub fn new(targets: Vec<String>) -> Self {
        Self {
            targets,
            plan: Vec::new(),
        }
    }

    /// Builds the standard plan
    ///
    /// `sequential_passes` sequential runs (the repeats show that nothing is
    /// cached between runs), then one suspend-per-item run, then one
    /// concurrent run. All of them share `fetcher`.
    ///
    /// The async runs drive `runtime` with `Handle::block_on`, so
    /// [`Harness::run`] has the same restriction as they do.
    pub fn standard(
        targets: Vec<String>,
        fetcher: Arc<dyn ResourceFetcher>,
        runtime: Handle,
        settings: &HarnessConfig,
    ) -> Self {
        let policy = settings.failure_policy;
        let mut harness = Self::new(targets);

        for pass in 1..=settings.sequential_passes {
            let label = if pass == 1 {
                "Sequential (1st run)".to_string()
            } else {
                format!("Sequential (run {}, nothing cached)", pass)
            };
            harness = harness.with_run(label, Sequential::new(Arc::clone(&fetcher), policy));
        }

        harness
            .with_run(
                "AsyncSequential",
                AsyncSequential::new(Arc::clone(&fetcher), policy, runtime.clone()),
            )
            .with_run(
                "ParallelConcurrent",
                ParallelConcurrent::new(fetcher, policy, runtime),
            )
    }

    /// Appends a run to the plan
    pub fn with_run(
        mut self,
        label: impl Into<String>,
        strategy: impl ExecutionStrategy + 'static,
    ) -> Self {
        self.plan.push(PlannedRun {
            label: label.into(),
            strategy: Box::new(strategy),
        });
        self
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    pub fn plan(&self) -> &[PlannedRun] {
        &self.plan
    }

    /// Runs the whole plan, writing the report to `sink`
    ///
    /// Only a failure to write the failure line itself aborts the plan.
    ///
    /// # Panics
    ///
    /// Panics when called from inside an async execution context (for example
    /// within `#[tokio::main]` or `#[tokio::test]`) and the plan contains an
    /// [`AsyncSequential`] or [`ParallelConcurrent`] run, because those block
    /// on their runtime handle. Call it from a plain thread, or from
    /// `tokio::task::spawn_blocking`.
    pub fn run(&self, sink: &mut dyn Write) -> io::Result<Vec<RunRecord>> {
        let mut reporter = Reporter::new(sink);
        let mut records = Vec::with_capacity(self.plan.len());

        for planned in &self.plan {
            reporter.label(&planned.label)?;
            tracing::info!(
                "Starting {} run over {} targets",
                planned.strategy.name(),
                self.targets.len()
            );

            let (result, elapsed) =
                measure(|| planned.strategy.run(&self.targets, &mut reporter));

            let outcome = match result {
                Ok(summary) => match reporter.elapsed(elapsed.as_millis()) {
                    Ok(()) => {
                        tracing::info!(
                            "{} finished in {}ms ({} ok, {} failed)",
                            planned.strategy.name(),
                            elapsed.as_millis(),
                            summary.succeeded,
                            summary.failed
                        );
                        Ok(RunMetrics { summary, elapsed })
                    }
                    Err(e) => Err(BenchError::Io(e)),
                },
                Err(error) => {
                    tracing::warn!("{} run failed: {}", planned.strategy.name(), error);
                    reporter.run_failed(&error)?;
                    Err(error)
                }
            };

            reporter.flush()?;
            records.push(RunRecord {
                label: planned.label.clone(),
                strategy: planned.strategy.name(),
                outcome,
            });
        }

        Ok(records)
    }
}

/// Human-readable description of a failure policy for the dry-run listing
pub fn describe_policy(policy: FailurePolicy) -> &'static str {
    match policy {
        FailurePolicy::FailFast => "abort the run on the first failed fetch",
        FailurePolicy::CollectResults => "report failed fetches and continue",
    }
}
