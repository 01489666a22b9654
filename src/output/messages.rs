//! User-facing error messages

use crate::AnalysisError;

/// Shown when no URL was supplied
pub const MISSING_URL_MESSAGE: &str = "URL is required. Please enter a valid URL.";

/// Maps an analysis error to the message shown to the user
///
/// Upstream 400, 502, 503 and 504 responses get a dedicated explanation;
/// every other failure is reported with its own message.
pub fn describe_error(error: &AnalysisError) -> String {
    match error.status_code() {
        Some(400) => "Bad Request (400): Invalid input URL.".to_string(),
        Some(502) => "Bad Gateway (502): Upstream server error.".to_string(),
        Some(503) => "Service Unavailable (503): The server is overloaded or down.".to_string(),
        Some(504) => "Gateway Timeout (504): The server took too long to respond.".to_string(),
        _ => format!("An unexpected error occurred: {}", error),
    }
}
