//! Field extraction for Telegram JSON exports (Shape B).
//!
//! Telegram Desktop writes:
//!
//! ```json
//! {
//!   "name": "Chat Name",
//!   "messages": [
//!     {
//!       "id": 12345,
//!       "type": "message",
//!       "date": "2024-01-15T10:30:00",
//!       "from": "Sender Name",
//!       "text": "Hello" | ["Hello", {"type": "link", "text": "url"}],
//!       "reply_to_message_id": 12344
//!     }
//!   ]
//! }
//! ```
//!
//! Every field is read leniently from a [`serde_json::Value`]: a field with an
//! unexpected type is treated as missing rather than failing the payload.

use serde_json::Value;

use super::RawRecord;

/// Extracts text content from Telegram's `text` field.
///
/// The field can be:
/// - A simple string: `"Hello"`
/// - An array with strings and objects: `["Text", {"type": "link", "text": "url"}]`
///
/// Returns `None` for any other JSON type.
pub fn extract_telegram_text(text_value: &Value) -> Option<String> {
    match text_value {
        Value::String(s) => Some(s.clone()),
        Value::Array(arr) => Some(
            arr.iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.as_str()),
                    Value::Object(obj) => obj.get("text").and_then(Value::as_str),
                    _ => None,
                })
                .collect::<String>(),
        ),
        _ => None,
    }
}

/// Reads the raw fields of one entry of the `messages` array.
///
/// The canonical `reply_to_id` comes from Telegram's `reply_to_message_id` key.
pub fn raw_from_json(msg: &Value) -> RawRecord {
    RawRecord {
        id: msg.get("id").and_then(Value::as_i64),
        sender: msg.get("from").and_then(Value::as_str).map(str::to_string),
        text: msg.get("text").and_then(extract_telegram_text),
        timestamp: msg.get("date").and_then(Value::as_str).map(str::to_string),
        reply_to_id: msg.get("reply_to_message_id").and_then(Value::as_i64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_text_string() {
        let value = json!("Hello world");
        assert_eq!(extract_telegram_text(&value).as_deref(), Some("Hello world"));
    }

    #[test]
    fn test_extract_text_array_with_link() {
        let value = json!([
            "Check this: ",
            {"type": "link", "text": "https://example.com"},
            " cool!"
        ]);
        assert_eq!(
            extract_telegram_text(&value).as_deref(),
            Some("Check this: https://example.com cool!")
        );
    }

    #[test]
    fn test_extract_text_other_types() {
        assert!(extract_telegram_text(&json!(null)).is_none());
        assert!(extract_telegram_text(&json!(42)).is_none());
    }

    #[test]
    fn test_raw_from_json_full() {
        let msg = json!({
            "id": 5,
            "from": "Ann",
            "text": "hello world",
            "date": "t1",
            "reply_to_message_id": 4
        });
        let raw = raw_from_json(&msg);
        assert_eq!(raw.id, Some(5));
        assert_eq!(raw.sender.as_deref(), Some("Ann"));
        assert_eq!(raw.text.as_deref(), Some("hello world"));
        assert_eq!(raw.timestamp.as_deref(), Some("t1"));
        assert_eq!(raw.reply_to_id, Some(4));
    }

    #[test]
    fn test_raw_from_json_wrong_types_degrade() {
        let msg = json!({
            "id": "five",
            "from": null,
            "text": {"unexpected": true},
            "date": 1705314600,
            "reply_to_message_id": "4"
        });
        assert_eq!(raw_from_json(&msg), RawRecord::default());
    }

    #[test]
    fn test_raw_from_json_ignores_canonical_reply_key() {
        let msg = json!({"id": 1, "reply_to_id": 9});
        assert!(raw_from_json(&msg).reply_to_id.is_none());
    }
}
