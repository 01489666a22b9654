use serde::Deserialize;
use std::time::Duration;

/// Default number of link verifications allowed in flight at once
pub const DEFAULT_MAX_CONCURRENT_CHECKS: usize = 5;

/// Default per-link probe timeout in seconds
pub const DEFAULT_LINK_TIMEOUT_SECS: u64 = 5;

/// On-disk layout of a configuration file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
}

/// Analyzer behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Maximum number of link verifications running at the same time
    #[serde(rename = "max-concurrent-checks")]
    pub max_concurrent_checks: usize,

    /// Timeout applied to each link verification (seconds)
    #[serde(rename = "link-timeout-secs")]
    pub link_timeout_secs: u64,

    /// Timeout for the page fetch itself; `None` keeps the client default
    #[serde(rename = "fetch-timeout-secs")]
    pub fetch_timeout_secs: Option<u64>,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_concurrent_checks: DEFAULT_MAX_CONCURRENT_CHECKS,
            link_timeout_secs: DEFAULT_LINK_TIMEOUT_SECS,
            fetch_timeout_secs: None,
            user_agent: format!("page-lens/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl AnalyzerConfig {
    pub fn link_timeout(&self) -> Duration {
        Duration::from_secs(self.link_timeout_secs)
    }

    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_secs.map(Duration::from_secs)
    }
}
