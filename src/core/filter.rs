//! Filter records by sender, reply target and keyword.
//!
//! This module provides [`FilterConfig`] for defining criteria and
//! [`apply_filters`] for evaluating them over a record slice.
//!
//! # Filter Types
//!
//! | Criterion | Method | Bucket | Match |
//! |-----------|--------|--------|-------|
//! | Sender | [`with_sender`](FilterConfig::with_sender) | `sender_matches` | exact, case-sensitive |
//! | Reply target | [`with_reply_id`](FilterConfig::with_reply_id) | `reply_matches` | exact id, any source |
//! | Keyword | [`with_keyword`](FilterConfig::with_keyword) | `keyword_matches` | case-insensitive substring |
//! | Scope | [`with_scope`](FilterConfig::with_scope) | (none) | restricts all of the above to one source |
//!
//! # Behavior Notes
//!
//! - Criteria are independent: each fills its own bucket, and a record that
//!   satisfies two criteria appears in two buckets.
//! - Filtering is opt-in per criterion. With nothing set, every bucket is
//!   empty; there is no pass-through.
//! - Reply matching compares raw ids and ignores `source_id`, so a reply in
//!   one source can match a target id that only exists in another.
//!
//! # Example
//!
//! ```
//! use chatsift::core::filter::{FilterConfig, apply_filters};
//! use chatsift::MessageRecord;
//!
//! let records = vec![
//!     MessageRecord::new("Alice", "Hello world", "a"),
//!     MessageRecord::new("Bob", "WORLD peace", "a").with_reply_to(1),
//! ];
//!
//! let config = FilterConfig::new().with_keyword("world").with_reply_id(1);
//! let result = apply_filters(&records, &config);
//!
//! assert_eq!(result.keyword_matches.len(), 2);
//! assert_eq!(result.reply_matches.len(), 1);
//! assert!(result.sender_matches.is_empty());
//! assert_eq!(result.total(), 3);
//! ```

use serde::{Deserialize, Serialize};

use crate::MessageRecord;
use crate::error::ChatsiftError;

/// The four independent filter criteria.
///
/// Every field is optional; `None` means "do not filter on this dimension".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Sender whose messages go to `sender_matches`.
    pub target_sender: Option<String>,

    /// Message id whose replies go to `reply_matches`.
    pub target_reply_id: Option<i64>,

    /// Text searched for (case-insensitively) for `keyword_matches`.
    pub keyword: Option<String>,

    /// Restricts every criterion to records from this source.
    pub source_scope: Option<String>,
}

impl FilterConfig {
    /// Creates a configuration with no active criteria.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sender criterion. An empty string clears it.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.target_sender = non_empty(sender.into());
        self
    }

    /// Sets the reply-target criterion.
    #[must_use]
    pub fn with_reply_id(mut self, id: i64) -> Self {
        self.target_reply_id = Some(id);
        self
    }

    /// Sets the keyword criterion. An empty string clears it.
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = non_empty(keyword.into());
        self
    }

    /// Restricts filtering to one source. An empty string clears it.
    #[must_use]
    pub fn with_scope(mut self, source_id: impl Into<String>) -> Self {
        self.source_scope = non_empty(source_id.into());
        self
    }

    /// Sets the reply-target criterion from user input.
    ///
    /// Empty (or whitespace-only) input clears the criterion. Input that
    /// isn't an integer is rejected and the current value is kept.
    ///
    /// ```
    /// use chatsift::core::filter::FilterConfig;
    ///
    /// let mut config = FilterConfig::new().with_reply_id(7);
    /// assert!(config.set_reply_id_str("seven").is_err());
    /// assert_eq!(config.target_reply_id, Some(7));
    ///
    /// config.set_reply_id_str(" 12 ").unwrap();
    /// assert_eq!(config.target_reply_id, Some(12));
    /// ```
    pub fn set_reply_id_str(&mut self, input: &str) -> Result<(), ChatsiftError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            self.target_reply_id = None;
            return Ok(());
        }
        let id = trimmed
            .parse::<i64>()
            .map_err(|_| ChatsiftError::invalid_id(input))?;
        self.target_reply_id = Some(id);
        Ok(())
    }

    /// Clears the sender criterion.
    pub fn clear_sender(&mut self) {
        self.target_sender = None;
    }

    /// Clears the reply-target criterion.
    pub fn clear_reply_id(&mut self) {
        self.target_reply_id = None;
    }

    /// Clears the keyword criterion.
    pub fn clear_keyword(&mut self) {
        self.keyword = None;
    }

    /// Clears the source scope.
    pub fn clear_scope(&mut self) {
        self.source_scope = None;
    }

    /// Returns `true` if any criterion, scope included, is set.
    pub fn is_active(&self) -> bool {
        self.target_sender.is_some()
            || self.target_reply_id.is_some()
            || self.keyword.is_some()
            || self.source_scope.is_some()
    }

    /// Returns `true` if at least one bucket can receive records.
    pub fn has_criteria(&self) -> bool {
        self.target_sender.is_some() || self.target_reply_id.is_some() || self.keyword.is_some()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// The three independent result buckets of one filter application.
///
/// Each bucket keeps corpus order. The same record may appear in several
/// buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterResult {
    /// Records whose sender equals the target sender.
    #[serde(default)]
    pub sender_matches: Vec<MessageRecord>,
    /// Records replying to the target id.
    #[serde(default)]
    pub reply_matches: Vec<MessageRecord>,
    /// Records whose text contains the keyword.
    #[serde(default)]
    pub keyword_matches: Vec<MessageRecord>,
}

impl FilterResult {
    /// Sum of the three bucket lengths.
    ///
    /// A record present in two buckets is counted twice.
    pub fn total(&self) -> usize {
        self.sender_matches.len() + self.reply_matches.len() + self.keyword_matches.len()
    }

    /// Returns `true` if all three buckets are empty.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Evaluates `config` over `records` in a single pass.
///
/// For each record, the scope is checked first: a record from another source
/// reaches no bucket. Sender, reply and keyword are then tested independently.
pub fn apply_filters(records: &[MessageRecord], config: &FilterConfig) -> FilterResult {
    let mut result = FilterResult::default();
    if !config.has_criteria() {
        return result;
    }

    let keyword = config.keyword.as_deref().map(str::to_lowercase);

    for record in records {
        if let Some(scope) = config.source_scope.as_deref() {
            if !record.is_from_source(scope) {
                continue;
            }
        }

        if config
            .target_sender
            .as_deref()
            .is_some_and(|sender| record.sender == sender)
        {
            result.sender_matches.push(record.clone());
        }

        if config
            .target_reply_id
            .is_some_and(|target| record.reply_to_id == Some(target))
        {
            result.reply_matches.push(record.clone());
        }

        if keyword
            .as_deref()
            .is_some_and(|kw| record.text.to_lowercase().contains(kw))
        {
            result.keyword_matches.push(record.clone());
        }
    }

    result
}
