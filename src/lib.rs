//! Page-Lens: single page structure analyzer
//!
//! This crate fetches one web page, parses its markup, and reports structural
//! metrics: title, declared HTML version, heading histogram, internal and
//! external link counts, unreachable links, and whether a login form is present.

pub mod analyzer;
pub mod config;
pub mod document;
pub mod output;

use thiserror::Error;

/// Main error type for a page analysis
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("failed to fetch URL: {0}")]
    Fetch(#[source] reqwest::Error),

    #[error("HTTP status code: {code}")]
    Status { code: u16 },

    #[error("failed to parse HTML: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Client(#[source] reqwest::Error),
}

impl AnalysisError {
    /// Returns the HTTP status code carried by a `Status` error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AnalysisError::Status { code } => Some(*code),
            _ => None,
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use analyzer::{analyze_url, AnalysisResult, Analyzer, HtmlVersion};
pub use config::AnalyzerConfig;
pub use document::Document;
