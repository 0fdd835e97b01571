//! Shared normalization contract for both export shapes.
//!
//! Each shape-specific adapter only pulls raw, possibly-missing fields out of
//! its payload into a [`RawRecord`]. [`RawRecord::normalize`] is the single
//! place where per-field defaults are applied, so the HTML and JSON paths can
//! never disagree about what a missing sender or text turns into.

#[cfg(feature = "html")]
pub mod html;
pub mod json;

use crate::config::ParseConfig;
use crate::message::MessageRecord;

#[cfg(feature = "html")]
pub use html::{REPLY_PATTERN, extract_reply_target, parse_message_id};
pub use json::{extract_telegram_text, raw_from_json};

/// Fields pulled out of one message unit before defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub id: Option<i64>,
    pub sender: Option<String>,
    pub text: Option<String>,
    pub timestamp: Option<String>,
    pub reply_to_id: Option<i64>,
}

impl RawRecord {
    /// Applies the per-field defaults and stamps the record with its source.
    ///
    /// - missing sender becomes [`ParseConfig::unknown_sender`]
    /// - missing text and timestamp become empty strings
    /// - ids stay optional
    pub fn normalize(self, source_id: &str, config: &ParseConfig) -> MessageRecord {
        MessageRecord {
            id: self.id,
            sender: self
                .sender
                .unwrap_or_else(|| config.unknown_sender.clone()),
            text: self.text.unwrap_or_default(),
            timestamp: self.timestamp.unwrap_or_default(),
            reply_to_id: self.reply_to_id,
            source_id: source_id.to_string(),
        }
    }
}
