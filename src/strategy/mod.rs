//! Execution strategies
//!
//! Each strategy drives the same [`ResourceFetcher`](crate::fetcher::ResourceFetcher)
//! over the same target list and feeds the same
//! [`Reporter`](crate::output::Reporter). They differ only in how fetches are
//! scheduled relative to each other:
//! - [`Sequential`] calls the fetcher directly, one item at a time
//! - [`AsyncSequential`] offloads each fetch to a worker and awaits it before
//!   issuing the next
//! - [`ParallelConcurrent`] launches every fetch at once and reports after
//!   all of them finish
//!
//! All three report in input order.

mod async_sequential;
mod parallel;
mod sequential;

pub use async_sequential::AsyncSequential;
pub use parallel::ParallelConcurrent;
pub use sequential::Sequential;

use crate::output::Reporter;
use crate::{BenchError, FetchOutcome};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// What a strategy does when one fetch fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Abort the run on the first failure and report nothing further
    #[default]
    FailFast,

    /// Report a failure marker for the position and keep going
    CollectResults,
}

impl FailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailurePolicy::FailFast => "fail-fast",
            FailurePolicy::CollectResults => "collect-results",
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fail-fast" => Ok(FailurePolicy::FailFast),
            "collect-results" => Ok(FailurePolicy::CollectResults),
            other => Err(format!(
                "unknown failure policy '{}' (expected fail-fast or collect-results)",
                other
            )),
        }
    }
}

/// Counts of what a completed run reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// A policy for scheduling one fetch per target
///
/// `run` reports every outcome through `reporter` in target order. It
/// returns an error when the run aborted, either on a fetch failure under
/// [`FailurePolicy::FailFast`] or when the sink cannot be written.
pub trait ExecutionStrategy: Send + Sync {
    /// Short stable name used in logs and the dry-run plan
    fn name(&self) -> &'static str;

    fn run(&self, targets: &[String], reporter: &mut Reporter<'_>)
        -> Result<RunSummary, BenchError>;
}

/// Applies the failure policy to one positional outcome and reports it
fn settle(
    outcome: FetchOutcome,
    policy: FailurePolicy,
    reporter: &mut Reporter<'_>,
    summary: &mut RunSummary,
) -> Result<(), BenchError> {
    match outcome {
        Ok(result) => {
            reporter.report(Some(&result))?;
            summary.succeeded += 1;
        }
        Err(error) => match policy {
            FailurePolicy::FailFast => return Err(error.into()),
            FailurePolicy::CollectResults => {
                tracing::warn!("{}", error);
                reporter.report_failure(&error)?;
                summary.failed += 1;
            }
        },
    }
    Ok(())
}
