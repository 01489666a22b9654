//! Login form detection

use crate::document::{Document, NodeId, NodeKind};

/// Substrings that mark a form as a login form (matched case-insensitively)
pub const LOGIN_KEYWORDS: [&str; 4] = ["login", "signin", "sign-in", "sign_in"];

/// Attributes of the `<form>` element itself that are inspected
const FORM_ATTRIBUTES: [&str; 4] = ["action", "id", "class", "name"];

/// Returns true if `value` contains a login keyword, ignoring case
pub fn contains_login_keyword(value: &str) -> bool {
    let value = value.to_lowercase();
    LOGIN_KEYWORDS.iter().any(|keyword| value.contains(keyword))
}

/// Decides whether the `<form>` subtree rooted at `form` looks like a login form
///
/// Matches when the form's `action`, `id`, `class` or `name` attribute, any
/// text in the subtree, or any attribute value in the subtree (the form's own
/// included) contains a login keyword. The scan stops at the first match.
pub fn is_login_form(document: &Document, form: NodeId) -> bool {
    if let Some(element) = document.node(form).element() {
        let own_match = element
            .attrs
            .iter()
            .any(|(key, value)| FORM_ATTRIBUTES.contains(&key.as_str()) && contains_login_keyword(value));
        if own_match {
            return true;
        }
    }

    document
        .descendants(form)
        .any(|(_, node)| match &node.kind {
            NodeKind::Text(text) => contains_login_keyword(text),
            NodeKind::Element(element) => element
                .attrs
                .iter()
                .any(|(_, value)| contains_login_keyword(value)),
            _ => false,
        })
}
