use crate::config::types::AnalyzerConfig;
use crate::ConfigError;

/// Validates the analyzer configuration
pub fn validate(config: &AnalyzerConfig) -> Result<(), ConfigError> {
    if config.max_concurrent_checks < 1 || config.max_concurrent_checks > 100 {
        return Err(ConfigError::Validation(format!(
            "max_concurrent_checks must be between 1 and 100, got {}",
            config.max_concurrent_checks
        )));
    }

    if config.link_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "link_timeout_secs must be >= 1".to_string(),
        ));
    }

    if config.fetch_timeout_secs == Some(0) {
        return Err(ConfigError::Validation(
            "fetch_timeout_secs must be >= 1 when set".to_string(),
        ));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}
