//! Document traversal
//!
//! A single depth-first, pre-order pass over the tree that fills in the title,
//! heading counts, link counts and the login-form flag, and hands every
//! discovered link to the verification pool as soon as it is seen.

use crate::analyzer::login::is_login_form;
use crate::analyzer::result::AnalysisResult;
use crate::analyzer::verifier::{LinkVerifier, VerificationPool};
use crate::document::{Document, NodeKind};

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Whether a link points inside or outside the analyzed site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Internal,
    External,
}

/// Classifies an `href` value
///
/// Anything starting with the literal prefix `http` is external; everything
/// else, including an empty value, is internal.
pub fn classify_link(href: &str) -> LinkKind {
    if href.starts_with("http") {
        LinkKind::External
    } else {
        LinkKind::Internal
    }
}

/// Resolves an `href` value against the page URL by plain concatenation
///
/// External values are returned as-is. Internal values are appended to
/// `base_url`, with a `/` inserted unless the value already starts with one.
/// The base URL's own path is not stripped, `..` is not collapsed and
/// duplicate slashes are kept.
///
/// # Example
///
/// ```
/// use page_lens::analyzer::resolve_link;
///
/// assert_eq!(resolve_link("http://site.test", "/x"), "http://site.test/x");
/// assert_eq!(resolve_link("http://site.test/a", "b"), "http://site.test/a/b");
/// assert_eq!(resolve_link("http://site.test", "https://ext.com"), "https://ext.com");
/// ```
pub fn resolve_link(base_url: &str, href: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else if href.starts_with('/') {
        format!("{}{}", base_url, href)
    } else {
        format!("{}/{}", base_url, href)
    }
}

/// Walks the whole document once, updating `result` and scheduling link checks
///
/// Link counters are updated as anchors are seen, independently of what the
/// verification later reports. `broken_links` is left untouched; the caller
/// reads it from the pool after the barrier.
pub async fn traverse<V: LinkVerifier>(
    document: &Document,
    base_url: &str,
    result: &mut AnalysisResult,
    pool: &mut VerificationPool<V>,
) {
    for (id, node) in document.descendants(document.root()) {
        let Some(element) = node.element() else {
            continue;
        };

        match element.name.as_str() {
            "title" => {
                let text = document
                    .first_child(id)
                    .map(|child| &document.node(child).kind);
                if let Some(NodeKind::Text(text)) = text {
                    result.title = Some(text.clone());
                }
            }
            name if HEADING_TAGS.contains(&name) => {
                *result.headings.entry(name.to_string()).or_insert(0) += 1;
            }
            "a" => {
                for href in element.attr_values("href") {
                    match classify_link(href) {
                        LinkKind::External => result.external_links += 1,
                        LinkKind::Internal => result.internal_links += 1,
                    }

                    let link = resolve_link(base_url, href);
                    tracing::debug!("Discovered link {} -> {}", href, link);
                    pool.schedule(link).await;
                }
            }
            "form" => {
                if !result.has_login_form && is_login_form(document, id) {
                    tracing::debug!("Login form detected");
                    result.has_login_form = true;
                }
            }
            _ => {}
        }
    }
}
