//! HTTP fetcher for the analyzed page
//!
//! This module handles:
//! - Building the shared HTTP client with the configured user agent
//! - Performing the single GET of the target page
//! - Rejecting any status other than 200

use crate::config::AnalyzerConfig;
use crate::AnalysisError;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// No client-wide timeout is set: the page fetch uses the client default
/// unless a fetch timeout is configured, and link checks set their own
/// timeout per request.
///
/// # Example
///
/// ```
/// use page_lens::analyzer::build_http_client;
/// use page_lens::config::AnalyzerConfig;
///
/// let client = build_http_client(&AnalyzerConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &AnalyzerConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches the page to analyze
///
/// # Returns
///
/// * `Ok(Response)` - The response, status 200, body not yet read
/// * `Err(AnalysisError::Fetch)` - The request could not be sent or answered
/// * `Err(AnalysisError::Status)` - Any status other than 200
pub async fn fetch_page(
    client: &Client,
    url: &str,
    timeout: Option<Duration>,
) -> Result<Response, AnalysisError> {
    let mut request = client.get(url);
    if let Some(timeout) = timeout {
        request = request.timeout(timeout);
    }

    let response = request.send().await.map_err(AnalysisError::Fetch)?;

    let status = response.status();
    if status != StatusCode::OK {
        tracing::debug!("Fetch of {} returned status {}", url, status);
        return Err(AnalysisError::Status {
            code: status.as_u16(),
        });
    }

    Ok(response)
}
