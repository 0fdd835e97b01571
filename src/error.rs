//! Unified error types for chatsift.
//!
//! This module provides a single [`ChatsiftError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! - Individual malformed fields never become errors; they fall back to their
//!   documented defaults during normalization.
//! - A payload that cannot be parsed at all fails **that source only**.
//!   Batch loading reports the failure and moves on.
//! - Operations invoked without the state they need (filtering an empty
//!   corpus, exporting before filtering) return a precondition error that
//!   callers can treat as a no-op, see [`ChatsiftError::is_precondition`].

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatsift operations.
///
/// # Example
///
/// ```rust
/// use chatsift::error::Result;
/// use chatsift::MessageRecord;
///
/// fn my_function() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatsiftError>;

/// The error type for all chatsift operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatsiftError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - An input file doesn't exist or can't be decoded as UTF-8
    /// - Permission denied
    /// - The export target can't be written
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A source payload could not be parsed at all.
    ///
    /// Contains the shape being parsed, the underlying parse error,
    /// and the identifier of the offending source.
    #[error("Failed to parse {format} export '{source_id}': {source}")]
    Parse {
        /// The shape being parsed (e.g., "Telegram JSON")
        format: &'static str,
        /// The underlying parse error
        #[source]
        source: ParseErrorKind,
        /// Identifier of the source that failed
        source_id: String,
    },

    /// JSON serialization error (export).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A non-numeric value was supplied where a message id is expected.
    #[error("Invalid message id '{input}': expected an integer")]
    InvalidId {
        /// The rejected input
        input: String,
    },

    /// A scope or lookup referenced a source that was never loaded.
    #[error("Unknown source '{source_id}'")]
    UnknownSource {
        /// The identifier that was not found
        source_id: String,
    },

    /// An operation needs loaded data but the corpus is empty.
    #[error("No messages loaded")]
    EmptyCorpus,

    /// An export was requested before any filter was applied.
    #[error("No filter result to export; apply filters first")]
    NoResult,

    /// A source shape was requested whose parser was compiled out.
    #[error("{format} sources require the '{feature}' feature")]
    FeatureDisabled {
        /// The requested shape (e.g., "Telegram HTML")
        format: &'static str,
        /// The cargo feature that enables it
        feature: &'static str,
    },
}

/// Kinds of parse errors that can occur.
#[derive(Debug, Error)]
pub enum ParseErrorKind {
    /// JSON syntax error
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    /// Generic parsing error
    #[error("{0}")]
    Other(String),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatsiftError {
    /// Creates a parse error for a Telegram JSON payload.
    pub fn json_parse(source: serde_json::Error, source_id: impl Into<String>) -> Self {
        ChatsiftError::Parse {
            format: "Telegram JSON",
            source: ParseErrorKind::Json(source),
            source_id: source_id.into(),
        }
    }

    /// Creates a parse error for a Telegram HTML payload.
    pub fn html_parse(message: impl Into<String>, source_id: impl Into<String>) -> Self {
        ChatsiftError::Parse {
            format: "Telegram HTML",
            source: ParseErrorKind::Other(message.into()),
            source_id: source_id.into(),
        }
    }

    /// Creates an invalid id error.
    pub fn invalid_id(input: impl Into<String>) -> Self {
        ChatsiftError::InvalidId {
            input: input.into(),
        }
    }

    /// Creates an unknown source error.
    pub fn unknown_source(source_id: impl Into<String>) -> Self {
        ChatsiftError::UnknownSource {
            source_id: source_id.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatsiftError::Io(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatsiftError::Parse { .. })
    }

    /// Returns `true` if the caller supplied an unusable configuration value.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ChatsiftError::InvalidId { .. } | ChatsiftError::UnknownSource { .. }
        )
    }

    /// Returns `true` if the operation was skipped because required state
    /// (loaded data, a previous filter result) is missing.
    pub fn is_precondition(&self) -> bool {
        matches!(self, ChatsiftError::EmptyCorpus | ChatsiftError::NoResult)
    }
}
