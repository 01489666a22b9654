//! Analysis result types

use std::collections::BTreeMap;
use std::fmt;

/// Declared markup version of a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HtmlVersion {
    Html5,
    Xhtml1_0,
    Html4_01,
    #[default]
    Unknown,
}

impl HtmlVersion {
    /// Returns the display label for this version
    pub fn as_str(&self) -> &'static str {
        match self {
            HtmlVersion::Html5 => "HTML5",
            HtmlVersion::Xhtml1_0 => "XHTML 1.0",
            HtmlVersion::Html4_01 => "HTML 4.01",
            HtmlVersion::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for HtmlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural metrics of one analyzed page
///
/// Built up by a single analysis call and never modified after it is returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    /// The URL as given by the caller (not normalized)
    pub url: String,

    /// Text of the last `<title>` element seen, if any had text
    pub title: Option<String>,

    /// Version declared by the doctype on the leftmost-child spine
    pub html_version: HtmlVersion,

    /// Occurrences per heading tag (`h1`..`h6`); absent levels were not seen
    pub headings: BTreeMap<String, usize>,

    /// `href` attributes on anchors not starting with `http`
    pub internal_links: usize,

    /// `href` attributes on anchors starting with `http`
    pub external_links: usize,

    /// Links whose verification reported them unreachable
    pub broken_links: usize,

    /// Whether any form matched the login heuristic
    pub has_login_form: bool,
}

impl AnalysisResult {
    /// Creates an empty result for the given URL
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            ..Default::default()
        }
    }

    /// Number of occurrences of a heading level, zero when never seen
    pub fn heading_count(&self, level: &str) -> usize {
        self.headings.get(level).copied().unwrap_or(0)
    }

    /// Total number of anchor `href` attributes encountered
    pub fn total_links(&self) -> usize {
        self.internal_links + self.external_links
    }
}
