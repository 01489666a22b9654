//! HTML parser adapter
//!
//! Builds a [`Document`] from markup using `scraper` (html5ever). The parser
//! is lenient: malformed markup yields a best-effort tree rather than an error.
//! The only failure is a body stream that cannot be read to completion.

use crate::document::{DoctypeData, Document, ElementData, NodeKind};
use crate::AnalysisError;
use scraper::{Html, Node};

/// Reads a response body to completion and parses it
///
/// The response is consumed, so the connection is released on every path.
pub async fn read_document(response: reqwest::Response) -> Result<Document, AnalysisError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| AnalysisError::Parse(e.to_string()))?;

    Ok(parse_document(&String::from_utf8_lossy(&bytes)))
}

/// Parses HTML content into a document tree
///
/// # Example
///
/// ```
/// use page_lens::document::{parse_document, NodeKind};
///
/// let doc = parse_document("<!DOCTYPE html><html><body><h1>Hi</h1></body></html>");
/// let first = doc.first_child(doc.root()).unwrap();
/// assert!(matches!(doc.node(first).kind, NodeKind::Doctype(_)));
/// ```
pub fn parse_document(html: &str) -> Document {
    let parsed = Html::parse_document(html);
    let mut document = Document::new();

    let root = document.root();
    let mut stack: Vec<_> = parsed.tree.root().children().rev().map(|c| (c, root)).collect();

    while let Some((node, parent)) = stack.pop() {
        let id = document.append(parent, convert(node.value()));
        stack.extend(node.children().rev().map(|c| (c, id)));
    }

    document
}

fn convert(node: &Node) -> NodeKind {
    match node {
        Node::Document | Node::Fragment => NodeKind::Document,
        Node::Doctype(doctype) => NodeKind::Doctype(DoctypeData {
            name: doctype.name().to_string(),
            public_id: doctype.public_id().to_string(),
            system_id: doctype.system_id().to_string(),
        }),
        Node::Comment(comment) => NodeKind::Comment(String::from(&**comment)),
        Node::Text(text) => NodeKind::Text(String::from(&**text)),
        Node::Element(element) => NodeKind::Element(ElementData {
            name: element.name().to_string(),
            attrs: element
                .attrs()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }),
        // Not produced when parsing HTML
        Node::ProcessingInstruction(_) => NodeKind::Comment(String::new()),
    }
}
