//! Markdown report generation

use crate::analyzer::AnalysisResult;
use crate::output::OutputResult;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes a markdown report of an analysis to `output_path`
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the report
/// * `Err(OutputError)` - Failed to create or write the file
pub fn write_markdown_report(result: &AnalysisResult, output_path: &Path) -> OutputResult<()> {
    let markdown = format_markdown_report(result);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats an analysis result as markdown
pub fn format_markdown_report(result: &AnalysisResult) -> String {
    let mut md = String::new();

    md.push_str("# Page Analysis\n\n");

    md.push_str("## Document\n\n");
    md.push_str(&format!("- **URL**: {}\n", result.url));
    md.push_str(&format!(
        "- **Title**: {}\n",
        result.title.as_deref().unwrap_or("_none_")
    ));
    md.push_str(&format!("- **HTML Version**: {}\n", result.html_version));
    md.push_str(&format!(
        "- **Login Form**: {}\n\n",
        if result.has_login_form { "yes" } else { "no" }
    ));

    md.push_str("## Headings\n\n");
    if result.headings.is_empty() {
        md.push_str("No headings found.\n\n");
    } else {
        md.push_str("| Level | Count |\n");
        md.push_str("|-------|-------|\n");
        for (level, count) in &result.headings {
            md.push_str(&format!("| {} | {} |\n", level, count));
        }
        md.push('\n');
    }

    md.push_str("## Links\n\n");
    md.push_str("| Kind | Count |\n");
    md.push_str("|------|-------|\n");
    md.push_str(&format!("| Internal | {} |\n", result.internal_links));
    md.push_str(&format!("| External | {} |\n", result.external_links));
    md.push_str(&format!("| Broken | {} |\n", result.broken_links));

    md
}
