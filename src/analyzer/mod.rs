//! Page analysis engine
//!
//! This module contains the core analysis pipeline:
//! - Fetching the page (single GET, status must be 200)
//! - Parsing it into a document tree
//! - One traversal pass that gathers metrics and schedules link checks
//! - A barrier that waits for every link check
//! - Doctype-based version classification

mod fetcher;
mod login;
mod result;
mod traversal;
mod verifier;
mod version;

pub use fetcher::{build_http_client, fetch_page};
pub use login::{contains_login_keyword, is_login_form, LOGIN_KEYWORDS};
pub use result::{AnalysisResult, HtmlVersion};
pub use traversal::{classify_link, resolve_link, traverse, LinkKind};
pub use verifier::{HttpLinkVerifier, LinkStatus, LinkVerifier, VerificationPool};
pub use version::{classify_doctype, detect_html_version};

use crate::config::{validate, AnalyzerConfig};
use crate::document::read_document;
use crate::AnalysisError;
use reqwest::Client;
use std::sync::Arc;
use std::time::Instant;

/// Analyzes web pages with a shared HTTP client and link verifier
pub struct Analyzer<V: LinkVerifier = HttpLinkVerifier> {
    client: Client,
    config: AnalyzerConfig,
    verifier: Arc<V>,
}

impl Analyzer<HttpLinkVerifier> {
    /// Creates an analyzer that verifies links over HTTP
    ///
    /// # Returns
    ///
    /// * `Ok(Analyzer)` - Ready to analyze pages
    /// * `Err(AnalysisError)` - Invalid configuration or HTTP client setup failure
    pub fn new(config: AnalyzerConfig) -> Result<Self, AnalysisError> {
        validate(&config)?;
        let client = build_http_client(&config).map_err(AnalysisError::Client)?;
        let verifier = HttpLinkVerifier::new(client.clone(), config.link_timeout());

        Ok(Self {
            client,
            config,
            verifier: Arc::new(verifier),
        })
    }
}

impl<V: LinkVerifier> Analyzer<V> {
    /// Creates an analyzer with a custom link verifier
    pub fn with_verifier(config: AnalyzerConfig, verifier: V) -> Result<Self, AnalysisError> {
        validate(&config)?;
        let client = build_http_client(&config).map_err(AnalysisError::Client)?;

        Ok(Self {
            client,
            config,
            verifier: Arc::new(verifier),
        })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyzes a single page
    ///
    /// Returns only once every scheduled link check has completed. Failed or
    /// timed-out link checks only raise `broken_links`; the call itself fails
    /// solely on fetch, status, or parse errors.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use page_lens::{Analyzer, AnalyzerConfig};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let analyzer = Analyzer::new(AnalyzerConfig::default())?;
    /// let result = analyzer.analyze("https://example.com").await?;
    /// println!("{} links, {} broken", result.total_links(), result.broken_links);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn analyze(&self, url: &str) -> Result<AnalysisResult, AnalysisError> {
        tracing::info!("Analyzing {}", url);
        let start_time = Instant::now();

        let response = fetch_page(&self.client, url, self.config.fetch_timeout()).await?;
        let document = read_document(response).await?;
        tracing::debug!("Parsed {} nodes from {}", document.len(), url);

        let mut result = AnalysisResult::new(url);
        let mut pool = VerificationPool::new(
            Arc::clone(&self.verifier),
            self.config.max_concurrent_checks,
        );

        traverse(&document, url, &mut result, &mut pool).await;

        let scheduled = pool.scheduled();
        result.broken_links = pool.finish().await;
        result.html_version = detect_html_version(&document);

        tracing::info!(
            "Analysis of {} completed in {:?}: {} links checked, {} broken",
            url,
            start_time.elapsed(),
            scheduled,
            result.broken_links
        );

        Ok(result)
    }
}

/// Analyzes a page with the default configuration
///
/// Link checks run at most five at a time with a five second timeout each.
pub async fn analyze_url(url: &str) -> Result<AnalysisResult, AnalysisError> {
    Analyzer::new(AnalyzerConfig::default())?.analyze(url).await
}
