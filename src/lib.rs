//! # Chatsift
//!
//! A Rust library for loading Telegram chat exports, normalizing them into one
//! record shape, and filtering the combined corpus.
//!
//! ## Overview
//!
//! Chatsift reads both shapes Telegram Desktop exports:
//! - **HTML** (`messages.html`), behind the `html` feature
//! - **JSON** (`result.json`)
//!
//! Every message becomes a [`MessageRecord`] stamped with the source it came
//! from. Several sources can be loaded into one [`Session`]; filters then
//! collect records into three independent buckets (by sender, by reply
//! target, by keyword), and the result can be exported as JSON or HTML.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatsift::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut session = Session::new();
//!     let report = session.load_batch(["result.json", "messages.html"], None);
//!     for (source, error) in report.failures() {
//!         eprintln!("skipped {}: {}", source, error);
//!     }
//!
//!     let config = FilterConfig::new().with_sender("Alice").with_keyword("release");
//!     let result = session.apply_filters(config)?;
//!     println!("{} matches", result.total());
//!
//!     session.export("matches.html", ExportFormat::Html, &ExportConfig::new())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`session`] - The owned [`Session`] context (load, filter, query, export)
//! - [`parser`] - [`Parser`](parser::Parser) trait and [`SourceFormat`](parser::SourceFormat)
//! - [`parsers`] - [`JsonParser`](parsers::JsonParser) and the HTML parser
//! - [`parsing`] - Shared field extraction and normalization
//! - [`core`] - Corpus store, filter engine, queries, statistics, writers
//! - [`format`] - [`ExportFormat`](format::ExportFormat) and dispatch
//! - [`config`] - Parse and export configuration
//! - [`error`] - Unified error types ([`ChatsiftError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsers;
pub mod parsing;
pub mod session;

// Re-export the main types at the crate root for convenience
pub use error::{ChatsiftError, Result};
pub use message::MessageRecord;
pub use session::Session;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatsift::prelude::*;
///
/// let session = Session::new();
/// assert!(session.records().is_empty());
/// ```
pub mod prelude {
    // Core record type
    pub use crate::MessageRecord;

    // Error types
    pub use crate::error::{ChatsiftError, Result};

    // Session
    pub use crate::session::{LoadReport, Session, SourceOutcome};

    // Parsing
    pub use crate::parser::{Parser, SourceFormat, create_parser};
    pub use crate::parsers::JsonParser;

    #[cfg(feature = "html")]
    pub use crate::parsers::HtmlParser;

    // Configuration
    pub use crate::config::{ExportConfig, ParseConfig};

    // Filtering and queries
    pub use crate::core::filter::{FilterConfig, FilterResult, apply_filters};
    pub use crate::core::query::{available_ids, available_senders};
    pub use crate::core::stats::CorpusStats;
    pub use crate::core::store::{CorpusStore, SourceAggregate};

    // Output
    pub use crate::core::output::{to_html, to_json, write_html, write_json};
    pub use crate::format::{ExportFormat, write_to_format};
}
