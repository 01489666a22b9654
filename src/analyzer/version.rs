//! HTML version detection
//!
//! Only the leftmost-child spine is inspected: starting at the root, follow the
//! first child until there is none. A doctype anywhere else in the tree is
//! ignored. html5ever always places a leading doctype first under the root, so
//! this covers well-formed documents; a comment before the doctype hides it.

use crate::analyzer::result::HtmlVersion;
use crate::document::{Document, NodeKind};

/// Detects the declared HTML version of a document
pub fn detect_html_version(document: &Document) -> HtmlVersion {
    let mut current = Some(document.root());

    while let Some(id) = current {
        if let NodeKind::Doctype(doctype) = &document.node(id).kind {
            return classify_doctype(&doctype.declared());
        }
        current = document.first_child(id);
    }

    HtmlVersion::Unknown
}

/// Maps declared doctype content to a known version
pub fn classify_doctype(declared: &str) -> HtmlVersion {
    let doctype = declared.to_lowercase();

    if doctype == "html" {
        HtmlVersion::Html5
    } else if doctype.contains("xhtml 1.0") {
        HtmlVersion::Xhtml1_0
    } else if doctype.contains("html 4.01") {
        HtmlVersion::Html4_01
    } else {
        HtmlVersion::Unknown
    }
}
