//! Plain-text report rendering

use crate::analyzer::AnalysisResult;

const HEADING_LEVELS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Formats an analysis result for the terminal
pub fn format_report(result: &AnalysisResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("URL:            {}\n", result.url));
    out.push_str(&format!(
        "Title:          {}\n",
        result.title.as_deref().unwrap_or("(none)")
    ));
    out.push_str(&format!("HTML version:   {}\n", result.html_version));

    out.push_str("Headings:\n");
    if result.headings.is_empty() {
        out.push_str("  (none)\n");
    }
    for level in HEADING_LEVELS {
        let count = result.heading_count(level);
        if count > 0 {
            out.push_str(&format!("  {}: {}\n", level, count));
        }
    }

    out.push_str(&format!("Internal links: {}\n", result.internal_links));
    out.push_str(&format!("External links: {}\n", result.external_links));
    out.push_str(&format!("Broken links:   {}\n", result.broken_links));
    out.push_str(&format!(
        "Login form:     {}\n",
        if result.has_login_form { "yes" } else { "no" }
    ));

    out
}
