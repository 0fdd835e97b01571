//! Field extraction helpers for Telegram HTML exports (Shape A).
//!
//! Each message in an HTML export looks like:
//!
//! ```html
//! <div class="message default clearfix" id="message42">
//!   <div class="body">
//!     <div class="pull_right date details" title="15.01.2024 10:30:00 UTC+03:00">10:30</div>
//!     <div class="from_name">Alice</div>
//!     <div class="reply_to details">
//!       In reply to <a href="#go_to_message41" onclick="return GoToMessage(41)">this message</a>
//!     </div>
//!     <div class="text">Hello!</div>
//!   </div>
//! </div>
//! ```

use regex::Regex;

/// Prefix of the `id` attribute on message elements.
pub const MESSAGE_ID_PREFIX: &str = "message";

/// Call-like token in a reply link's `onclick` handler, e.g. `GoToMessage(41)`.
pub const REPLY_PATTERN: &str = r"\w+\((\d+)\)";

/// Extracts the numeric id from a message element's `id` attribute.
///
/// `"message42"` yields `Some(42)`. Service entries use `"message-1"` and keep
/// their sign. A missing prefix, or anything after it that isn't an integer,
/// yields `None`.
pub fn parse_message_id(attr: &str) -> Option<i64> {
    attr.strip_prefix(MESSAGE_ID_PREFIX)?.parse().ok()
}

/// Extracts the reply target from an `onclick` handler.
///
/// Returns `None` when the handler doesn't contain a `<word>(<digits>)` call
/// or the digits overflow.
pub fn extract_reply_target(onclick: &str, pattern: &Regex) -> Option<i64> {
    pattern
        .captures(onclick)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply_regex() -> Regex {
        Regex::new(REPLY_PATTERN).unwrap()
    }

    #[test]
    fn test_parse_message_id() {
        assert_eq!(parse_message_id("message42"), Some(42));
        assert_eq!(parse_message_id("message-1"), Some(-1));
    }

    #[test]
    fn test_parse_message_id_malformed() {
        assert_eq!(parse_message_id("message"), None);
        assert_eq!(parse_message_id("messageabc"), None);
        assert_eq!(parse_message_id(""), None);
    }

    #[test]
    fn test_parse_message_id_requires_prefix() {
        assert_eq!(parse_message_id("42"), None);
        assert_eq!(parse_message_id(" 42"), None);
        assert_eq!(parse_message_id("message 42"), None);
        assert_eq!(parse_message_id("msg42"), None);
    }

    #[test]
    fn test_extract_reply_target() {
        let re = reply_regex();
        assert_eq!(extract_reply_target("return GoToMessage(41)", &re), Some(41));
        assert_eq!(extract_reply_target("GoToMessage(7); return false;", &re), Some(7));
    }

    #[test]
    fn test_extract_reply_target_no_match() {
        let re = reply_regex();
        assert_eq!(extract_reply_target("", &re), None);
        assert_eq!(extract_reply_target("GoToMessage()", &re), None);
        assert_eq!(extract_reply_target("GoToMessage(abc)", &re), None);
        assert_eq!(
            extract_reply_target("GoToMessage(99999999999999999999999)", &re),
            None
        );
    }
}
