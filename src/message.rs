//! Canonical message record shared by both export shapes.
//!
//! This module provides [`MessageRecord`], the normalized representation of a
//! chat message. The HTML and JSON parsers both emit this structure, so the
//! store, the filter engine and the exporters never see source-specific data.
//!
//! # Identity
//!
//! A record's `id` is only unique within its source. Two records with the same
//! `id` but different `source_id` are different messages and are never merged.
//!
//! # Examples
//!
//! ```
//! use chatsift::MessageRecord;
//!
//! let msg = MessageRecord::new("Alice", "Hello, world!", "chat.json")
//!     .with_id(5)
//!     .with_timestamp("2024-01-15T10:30:00");
//!
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.id(), Some(5));
//! assert_eq!(msg.source_id(), "chat.json");
//! ```
//!
//! ## Serialization
//!
//! ```
//! use chatsift::MessageRecord;
//!
//! let msg = MessageRecord::new("Alice", "Hello!", "a");
//! let json = serde_json::to_string(&msg)?;
//! let parsed: MessageRecord = serde_json::from_str(&json)?;
//!
//! assert_eq!(msg, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};

/// Sender name used when a message carries no sender.
pub const UNKNOWN_SENDER: &str = "Unknown";

/// A normalized chat message.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `id` | `Option<i64>` | Message id, unique only within its source |
/// | `sender` | `String` | Display name of the author, `"Unknown"` when absent |
/// | `text` | `String` | Message text, possibly empty |
/// | `timestamp` | `String` | Date exactly as the export wrote it |
/// | `reply_to_id` | `Option<i64>` | Id of the message this one replies to |
/// | `source_id` | `String` | Identifier of the payload this record came from |
///
/// Optional ids serialize as `null` rather than being omitted, so exported
/// buckets keep a stable set of keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Message id within its source.
    #[serde(default)]
    pub id: Option<i64>,

    /// Display name of the message author.
    pub sender: String,

    /// Text content of the message.
    #[serde(default)]
    pub text: String,

    /// Opaque timestamp string, passed through verbatim from the export.
    ///
    /// HTML exports carry `"15.01.2024 10:30:00 UTC+03:00"`, JSON exports carry
    /// `"2024-01-15T10:30:00"`. No parsing is attempted.
    #[serde(default)]
    pub timestamp: String,

    /// Id of the message this one replies to.
    ///
    /// This is a raw value: it is never resolved against a particular source.
    #[serde(default)]
    pub reply_to_id: Option<i64>,

    /// Identifier of the originating source (usually its file path).
    pub source_id: String,
}

impl MessageRecord {
    /// Creates a record with sender, text and source; all other fields empty.
    pub fn new(
        sender: impl Into<String>,
        text: impl Into<String>,
        source_id: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            sender: sender.into(),
            text: text.into(),
            timestamp: String::new(),
            reply_to_id: None,
            source_id: source_id.into(),
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Builder method to set the message id.
    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Builder method to set the timestamp string.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Builder method to set the reply reference.
    ///
    /// ```rust
    /// use chatsift::MessageRecord;
    ///
    /// let msg = MessageRecord::new("Bob", "I agree!", "a").with_reply_to(12344);
    /// assert_eq!(msg.reply_to_id(), Some(12344));
    /// ```
    #[must_use]
    pub fn with_reply_to(mut self, reply_id: i64) -> Self {
        self.reply_to_id = Some(reply_id);
        self
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the message id, if available.
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the raw timestamp string.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Returns the reply-to id, if available.
    pub fn reply_to_id(&self) -> Option<i64> {
        self.reply_to_id
    }

    /// Returns the source identifier.
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// Returns `true` if the record belongs to `source_id`.
    pub fn is_from_source(&self, source_id: &str) -> bool {
        self.source_id == source_id
    }
}
