//! Parser trait and source-format selection.
//!
//! Both export shapes normalize into [`MessageRecord`]. Which parser to use is
//! decided outside the parser, either explicitly or from the file extension
//! via [`SourceFormat::from_path`].
//!
//! # Example
//!
//! ```rust
//! use chatsift::config::ParseConfig;
//! use chatsift::parser::{SourceFormat, create_parser};
//!
//! let parser = create_parser(SourceFormat::Json, ParseConfig::new())?;
//! let records = parser
//!     .parse_str(r#"{"messages":[{"id":5,"from":"Ann","text":"hello"}]}"#, "a")
//!     .unwrap();
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].source_id, "a");
//! # Ok::<(), chatsift::ChatsiftError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::MessageRecord;
use crate::config::ParseConfig;
use crate::error::ChatsiftError;

/// Shape of a source payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum SourceFormat {
    /// Telegram Desktop HTML export (`messages.html`)
    #[serde(alias = "htm")]
    Html,

    /// Telegram Desktop JSON export (`result.json`)
    Json,
}

impl SourceFormat {
    /// Picks the format from a path's extension.
    ///
    /// `.html` and `.htm` are HTML exports; anything else is treated as JSON.
    ///
    /// ```rust
    /// use chatsift::parser::SourceFormat;
    ///
    /// assert_eq!(SourceFormat::from_path("chat/messages.html".as_ref()), SourceFormat::Html);
    /// assert_eq!(SourceFormat::from_path("result.json".as_ref()), SourceFormat::Json);
    /// ```
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("html" | "htm") => SourceFormat::Html,
            _ => SourceFormat::Json,
        }
    }

    /// Returns all format names including aliases.
    pub fn all_names() -> &'static [&'static str] {
        &["html", "htm", "json"]
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::Html => write!(f, "Telegram HTML"),
            SourceFormat::Json => write!(f, "Telegram JSON"),
        }
    }
}

impl std::str::FromStr for SourceFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" | "htm" => Ok(SourceFormat::Html),
            "json" => Ok(SourceFormat::Json),
            _ => Err(format!(
                "Unknown source format: '{}'. Expected one of: {}",
                s,
                SourceFormat::all_names().join(", ")
            )),
        }
    }
}

/// Normalizes one source payload into canonical records.
///
/// Implementations are pure: they return records and never touch a store.
///
/// # Implementation Notes
///
/// Parsers must implement:
/// - [`name`](Parser::name) - Parser identifier
/// - [`format`](Parser::format) - Shape this parser handles
/// - [`parse_str`](Parser::parse_str) - Normalize decoded text
pub trait Parser: Send + Sync {
    /// Returns the human-readable name of this parser.
    fn name(&self) -> &'static str;

    /// Returns the shape this parser handles.
    fn format(&self) -> SourceFormat;

    /// Normalizes a decoded payload.
    ///
    /// Every returned record carries `source_id`. Malformed fields fall back
    /// to their defaults; only a payload that is unparseable as a whole
    /// returns [`ChatsiftError::Parse`].
    fn parse_str(&self, content: &str, source_id: &str) -> Result<Vec<MessageRecord>, ChatsiftError>;
}

/// Creates a parser for the specified format.
///
/// # Errors
///
/// Returns [`ChatsiftError::FeatureDisabled`] if [`SourceFormat::Html`] is
/// requested without the `html` feature.
pub fn create_parser(
    format: SourceFormat,
    config: ParseConfig,
) -> Result<Box<dyn Parser>, ChatsiftError> {
    match format {
        #[cfg(feature = "html")]
        SourceFormat::Html => Ok(Box::new(crate::parsers::HtmlParser::with_config(config))),
        SourceFormat::Json => Ok(Box::new(crate::parsers::JsonParser::with_config(config))),
        // Fallback for when features are disabled
        #[allow(unreachable_patterns)]
        _ => Err(ChatsiftError::FeatureDisabled {
            format: "Telegram HTML",
            feature: "html",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_from_str() {
        assert_eq!(SourceFormat::from_str("html").unwrap(), SourceFormat::Html);
        assert_eq!(SourceFormat::from_str("HTM").unwrap(), SourceFormat::Html);
        assert_eq!(SourceFormat::from_str("json").unwrap(), SourceFormat::Json);
        assert!(SourceFormat::from_str("txt").is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(SourceFormat::from_path(Path::new("a.HTML")), SourceFormat::Html);
        assert_eq!(SourceFormat::from_path(Path::new("a.htm")), SourceFormat::Html);
        assert_eq!(SourceFormat::from_path(Path::new("a.json")), SourceFormat::Json);
        assert_eq!(SourceFormat::from_path(Path::new("noext")), SourceFormat::Json);
    }

    #[test]
    fn test_format_display() {
        assert_eq!(SourceFormat::Html.to_string(), "Telegram HTML");
        assert_eq!(SourceFormat::Json.to_string(), "Telegram JSON");
    }

    #[test]
    fn test_create_parser() {
        let parser = create_parser(SourceFormat::Json, ParseConfig::new()).unwrap();
        assert_eq!(parser.format(), SourceFormat::Json);
    }

    #[test]
    fn test_create_parser_passes_config() {
        let parser =
            create_parser(SourceFormat::Json, ParseConfig::new().with_unknown_sender("?")).unwrap();
        let records = parser.parse_str(r#"{"messages":[{"id":1,"text":"x"}]}"#, "a").unwrap();
        assert_eq!(records[0].sender, "?");
    }

    #[cfg(feature = "html")]
    #[test]
    fn test_create_html_parser() {
        let parser = create_parser(SourceFormat::Html, ParseConfig::new()).unwrap();
        assert_eq!(parser.name(), "Telegram HTML");
        assert_eq!(parser.format(), SourceFormat::Html);
    }

    #[cfg(not(feature = "html"))]
    #[test]
    fn test_create_html_parser_without_feature() {
        let err = create_parser(SourceFormat::Html, ParseConfig::new()).err().unwrap();
        assert!(matches!(err, ChatsiftError::FeatureDisabled { feature: "html", .. }));
    }
}
