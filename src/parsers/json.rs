//! Telegram JSON export parser (Shape B).

use serde_json::Value;
use tracing::debug;

use crate::MessageRecord;
use crate::config::ParseConfig;
use crate::error::ChatsiftError;
use crate::parser::{Parser, SourceFormat};
use crate::parsing::raw_from_json;

/// Parser for Telegram JSON exports.
///
/// Reads the top-level `messages` array. A payload without that array
/// yields no records; only invalid JSON syntax is an error.
///
/// # Example
///
/// ```rust
/// use chatsift::parsers::JsonParser;
/// use chatsift::parser::Parser;
///
/// let parser = JsonParser::new();
/// let records = parser.parse_str(
///     r#"{"messages":[{"id":5,"from":"Ann","text":"hello world","date":"t1"}]}"#,
///     "a",
/// )?;
///
/// assert_eq!(records[0].id, Some(5));
/// assert_eq!(records[0].sender, "Ann");
/// assert_eq!(records[0].reply_to_id, None);
/// # Ok::<(), chatsift::ChatsiftError>(())
/// ```
pub struct JsonParser {
    config: ParseConfig,
}

impl JsonParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParseConfig::default(),
        }
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParseConfig) -> Self {
        Self { config }
    }

    /// Returns the parser configuration.
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    fn parse_content(
        &self,
        content: &str,
        source_id: &str,
    ) -> Result<Vec<MessageRecord>, ChatsiftError> {
        let export: Value = serde_json::from_str(content)
            .map_err(|e| ChatsiftError::json_parse(e, source_id))?;

        let Some(entries) = export.get("messages").and_then(Value::as_array) else {
            debug!(source_id, "no messages array in JSON export");
            return Ok(Vec::new());
        };

        let records: Vec<MessageRecord> = entries
            .iter()
            .filter(|entry| entry.is_object() || !self.config.skip_invalid)
            .map(|entry| raw_from_json(entry).normalize(source_id, &self.config))
            .collect();

        debug!(
            source_id,
            records = records.len(),
            skipped = entries.len() - records.len(),
            "normalized JSON export"
        );
        Ok(records)
    }
}

impl Default for JsonParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for JsonParser {
    fn name(&self) -> &'static str {
        "Telegram JSON"
    }

    fn format(&self) -> SourceFormat {
        SourceFormat::Json
    }

    fn parse_str(&self, content: &str, source_id: &str) -> Result<Vec<MessageRecord>, ChatsiftError> {
        self.parse_content(content, source_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_name() {
        let parser = JsonParser::new();
        assert_eq!(parser.name(), "Telegram JSON");
        assert_eq!(parser.format(), SourceFormat::Json);
    }

    #[test]
    fn test_parse_str_single_record() {
        let parser = JsonParser::new();
        let json = r#"{"messages":[{"id":5,"from":"Ann","text":"hello world","date":"t1"}]}"#;
        let records = parser.parse_str(json, "a").unwrap();

        assert_eq!(
            records,
            vec![MessageRecord::new("Ann", "hello world", "a").with_id(5).with_timestamp("t1")]
        );
    }

    #[test]
    fn test_parse_str_defaults() {
        let parser = JsonParser::new();
        let json = r#"{"messages":[{"id":1}]}"#;
        let records = parser.parse_str(json, "a").unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sender, "Unknown");
        assert_eq!(records[0].text, "");
        assert_eq!(records[0].timestamp, "");
    }

    #[test]
    fn test_parse_str_reply_key() {
        let parser = JsonParser::new();
        let json = r#"{"messages":[{"id":2,"from":"Bob","text":"yes","reply_to_message_id":1}]}"#;
        let records = parser.parse_str(json, "a").unwrap();
        assert_eq!(records[0].reply_to_id, Some(1));
    }

    #[test]
    fn test_parse_str_keeps_service_messages() {
        let parser = JsonParser::new();
        let json = r#"{"messages":[
            {"id":1,"type":"service","actor":"Ann","action":"pin_message","date":"t0"},
            {"id":2,"type":"message","from":"Ann","text":"hi","date":"t1"}
        ]}"#;
        let records = parser.parse_str(json, "a").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sender, "Unknown");
    }

    #[test]
    fn test_parse_str_missing_messages_key() {
        let parser = JsonParser::new();
        assert!(parser.parse_str(r#"{"name":"chat"}"#, "a").unwrap().is_empty());
        assert!(parser.parse_str("[1, 2, 3]", "a").unwrap().is_empty());
        assert!(parser.parse_str(r#"{"messages":"nope"}"#, "a").unwrap().is_empty());
    }

    #[test]
    fn test_parse_str_skips_non_objects() {
        let parser = JsonParser::new();
        let json = r#"{"messages":[42, {"id":1,"from":"Ann"}]}"#;
        let records = parser.parse_str(json, "a").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, Some(1));
    }

    #[test]
    fn test_parse_str_keeps_non_objects_when_configured() {
        let parser = JsonParser::with_config(ParseConfig::new().with_skip_invalid(false));
        let json = r#"{"messages":[42, {"id":1,"from":"Ann"}]}"#;
        let records = parser.parse_str(json, "a").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sender, "Unknown");
        assert!(records[0].id.is_none());
    }

    #[test]
    fn test_parse_str_invalid_json() {
        let parser = JsonParser::new();
        let err = parser.parse_str("{not json", "broken.json").unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("broken.json"));
    }
}
