//! Output module for presenting analysis results
//!
//! This module handles:
//! - Rendering a plain-text report for the terminal
//! - Writing a markdown report file
//! - Turning analysis errors into user-facing messages

mod markdown;
mod messages;
mod report;

pub use markdown::{format_markdown_report, write_markdown_report};
pub use messages::{describe_error, MISSING_URL_MESSAGE};
pub use report::format_report;

use thiserror::Error;

/// Output-specific errors
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for output operations
pub type OutputResult<T> = std::result::Result<T, OutputError>;
