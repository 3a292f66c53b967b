use crate::strategy::FailurePolicy;
use serde::Deserialize;

/// Main configuration structure for fetch-bench
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub harness: HarnessConfig,
}

/// Transport configuration shared by every strategy
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Total per-request deadline (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connection establishment deadline (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
            user_agent: format!("fetch-bench/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Run plan configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// What a strategy does when a single fetch fails
    #[serde(rename = "failure-policy")]
    pub failure_policy: FailurePolicy,

    /// How many back-to-back sequential runs open the plan
    #[serde(rename = "sequential-passes")]
    pub sequential_passes: u32,

    /// Wait for Enter before the process exits
    #[serde(rename = "wait-for-key")]
    pub wait_for_key: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::FailFast,
            sequential_passes: 2,
            wait_for_key: true,
        }
    }
}
