//! Export format selection for filter results.
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> chatsift::Result<()> {
//! use chatsift::config::ExportConfig;
//! use chatsift::core::filter::FilterResult;
//! use chatsift::format::{ExportFormat, write_to_format};
//!
//! let result = FilterResult::default();
//!
//! write_to_format(&result, "report.html", ExportFormat::Html, &ExportConfig::new())?;
//!
//! // Or pick the format from the target's extension
//! let format = ExportFormat::from_path("results.json").unwrap_or_default();
//! assert_eq!(format, ExportFormat::Json);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::config::ExportConfig;
use crate::core::filter::FilterResult;
use crate::error::ChatsiftError;

/// Export format for filter results.
///
/// - [`Json`](ExportFormat::Json) - The three buckets as a JSON object
/// - [`Html`](ExportFormat::Html) - A readable report, one section per bucket
///
/// ```rust
/// use chatsift::format::ExportFormat;
/// use std::str::FromStr;
///
/// let format = ExportFormat::from_str("html").unwrap();
/// assert_eq!(format, ExportFormat::Html);
/// assert_eq!(format.to_string(), "HTML");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ExportFormat {
    /// JSON object keyed by bucket name
    #[default]
    Json,

    /// Standalone HTML document
    Html,
}

impl ExportFormat {
    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "html", "htm"]
    }

    /// Detects the format from a target path's extension.
    ///
    /// Returns `None` for extensions that are not an export format.
    ///
    /// ```rust
    /// use chatsift::format::ExportFormat;
    ///
    /// assert_eq!(ExportFormat::from_path("out/report.HTML"), Some(ExportFormat::Html));
    /// assert_eq!(ExportFormat::from_path("notes.txt"), None);
    /// ```
    pub fn from_path(path: &str) -> Option<Self> {
        let ext = path.rsplit_once('.')?.1.to_lowercase();

        match ext.as_str() {
            "json" => Some(ExportFormat::Json),
            "html" | "htm" => Some(ExportFormat::Html),
            _ => None,
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "JSON"),
            ExportFormat::Html => write!(f, "HTML"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "html" | "htm" => Ok(ExportFormat::Html),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ExportFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes a filter result to a file in the specified format.
///
/// # Errors
///
/// Returns an error if the file cannot be written or the result cannot be
/// serialized.
pub fn write_to_format(
    result: &FilterResult,
    path: &str,
    format: ExportFormat,
    config: &ExportConfig,
) -> Result<(), ChatsiftError> {
    match format {
        ExportFormat::Json => crate::core::output::write_json(result, path, config),
        ExportFormat::Html => crate::core::output::write_html(result, path, config),
    }
}

/// Renders a filter result to a string in the specified format.
pub fn to_format_string(
    result: &FilterResult,
    format: ExportFormat,
    config: &ExportConfig,
) -> Result<String, ChatsiftError> {
    match format {
        ExportFormat::Json => crate::core::output::to_json(result, config),
        ExportFormat::Html => Ok(crate::core::output::to_html(result, config)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MessageRecord;
    use std::str::FromStr;

    #[test]
    fn test_format_from_str() {
        assert_eq!(ExportFormat::from_str("json").unwrap(), ExportFormat::Json);
        assert_eq!(ExportFormat::from_str("HTML").unwrap(), ExportFormat::Html);
        assert_eq!(ExportFormat::from_str("htm").unwrap(), ExportFormat::Html);
        let err = ExportFormat::from_str("csv").unwrap_err();
        assert!(err.contains("json, html, htm"));
    }

    #[test]
    fn test_format_display() {
        assert_eq!(ExportFormat::Json.to_string(), "JSON");
        assert_eq!(ExportFormat::Html.to_string(), "HTML");
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ExportFormat::from_path("a.json"), Some(ExportFormat::Json));
        assert_eq!(ExportFormat::from_path("/tmp/x.htm"), Some(ExportFormat::Html));
        assert_eq!(ExportFormat::from_path("noext"), None);
        assert_eq!(ExportFormat::from_path("a.csv"), None);
    }

    #[test]
    fn test_format_serde() {
        let json = serde_json::to_string(&ExportFormat::Html).unwrap();
        assert_eq!(json, "\"html\"");
        let parsed: ExportFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(parsed, ExportFormat::Json);
    }

    #[test]
    fn test_to_format_string_dispatch() {
        let result = FilterResult {
            sender_matches: vec![MessageRecord::new("Ann", "hi", "a")],
            ..FilterResult::default()
        };
        let config = ExportConfig::new();

        let json = to_format_string(&result, ExportFormat::Json, &config).unwrap();
        assert!(json.contains("\"sender_matches\""));

        let html = to_format_string(&result, ExportFormat::Html, &config).unwrap();
        assert!(html.contains("Messages from sender"));
    }
}
