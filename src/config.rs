//! Configuration types for parsers and exporters.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParseConfig`] - normalization settings shared by both export shapes
//! - [`ExportConfig`] - settings for the JSON and HTML exporters
//!
//! # Example
//!
//! ```rust
//! use chatsift::config::{ExportConfig, ParseConfig};
//!
//! let parse = ParseConfig::new().with_unknown_sender("Deleted Account");
//! let export = ExportConfig::new().with_title("Weekly digest").with_pretty(false);
//!
//! assert_eq!(parse.unknown_sender, "Deleted Account");
//! assert!(!export.pretty);
//! ```

use serde::{Deserialize, Serialize};

use crate::message::UNKNOWN_SENDER;

/// Normalization settings applied by both parsers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Sender written into records that carry no sender (default: `"Unknown"`)
    pub unknown_sender: String,

    /// Skip JSON message entries that are not objects instead of turning them
    /// into all-default records (default: true)
    pub skip_invalid: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            unknown_sender: UNKNOWN_SENDER.to_string(),
            skip_invalid: true,
        }
    }
}

impl ParseConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sender sentinel.
    #[must_use]
    pub fn with_unknown_sender(mut self, sender: impl Into<String>) -> Self {
        self.unknown_sender = sender.into();
        self
    }

    /// Sets whether to skip invalid message entries.
    #[must_use]
    pub fn with_skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }
}

/// Settings for the result exporters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Pretty-print JSON output with two-space indentation (default: true)
    pub pretty: bool,

    /// Title of the rendered HTML document
    pub title: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            title: "Telegram Chat Analysis".to_string(),
        }
    }
}

impl ExportConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables JSON pretty-printing.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets the HTML document title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}
