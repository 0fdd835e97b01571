//! Core processing logic for chatsift.
//!
//! This module contains:
//! - [`store`] - The ordered record corpus and per-source aggregates
//! - [`filter`] - Filter criteria and the three-bucket filter engine
//! - [`query`] - Sender and id facets for configuring filters
//! - [`stats`] - Corpus and result statistics
//! - [`output`] - JSON and HTML export writers

pub mod filter;
pub mod output;
pub mod query;
pub mod stats;
pub mod store;

// Re-export main types for convenience
pub use filter::{FilterConfig, FilterResult, apply_filters};
pub use output::{to_html, to_json, write_html, write_json};
pub use query::{available_ids, available_senders};
pub use stats::{CorpusStats, ResultStats, SourceStats};
pub use store::{CorpusStore, SourceAggregate};

// Re-export MessageRecord from the crate root
pub use crate::MessageRecord;
