use crate::config::types::{Config, HarnessConfig, HttpConfig};
use crate::ConfigError;
use url::Url;

/// Largest number of sequential passes the plan accepts
const MAX_SEQUENTIAL_PASSES: u32 = 5;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_http_config(&config.http)?;
    validate_harness_config(&config.harness)?;
    Ok(())
}

/// Validates transport configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 || config.connect_timeout_secs > config.timeout_secs {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs must be between 1 and timeout-secs ({}), got {}",
            config.timeout_secs, config.connect_timeout_secs
        )));
    }

    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    // Header values must be visible ASCII or spaces
    if !config
        .user_agent
        .chars()
        .all(|c| c.is_ascii_graphic() || c == ' ')
    {
        return Err(ConfigError::Validation(format!(
            "user-agent must be printable ASCII, got '{}'",
            config.user_agent
        )));
    }

    Ok(())
}

/// Validates the run plan configuration
fn validate_harness_config(config: &HarnessConfig) -> Result<(), ConfigError> {
    if config.sequential_passes < 1 || config.sequential_passes > MAX_SEQUENTIAL_PASSES {
        return Err(ConfigError::Validation(format!(
            "sequential-passes must be between 1 and {}, got {}",
            MAX_SEQUENTIAL_PASSES, config.sequential_passes
        )));
    }

    Ok(())
}

/// Validates a target list: non-empty, and every entry an http(s) URL
pub fn validate_targets(targets: &[String]) -> Result<(), ConfigError> {
    if targets.is_empty() {
        return Err(ConfigError::Validation(
            "target list cannot be empty".to_string(),
        ));
    }

    for target in targets {
        let url = Url::parse(target)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid target '{}': {}", target, e)))?;

        if url.scheme() != "https" && url.scheme() != "http" {
            return Err(ConfigError::InvalidUrl(format!(
                "Target '{}' must use http or https",
                target
            )));
        }
    }

    Ok(())
}
