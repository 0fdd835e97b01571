//! Export writers for filter results.
//!
//! - [`write_json`] / [`to_json`] - the three buckets as a JSON object
//! - [`write_html`] / [`to_html`] - a rendered report, one section per non-empty bucket
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> chatsift::Result<()> {
//! use chatsift::config::ExportConfig;
//! use chatsift::core::filter::FilterResult;
//! use chatsift::core::output::{to_html, write_json};
//!
//! let result = FilterResult::default();
//! let config = ExportConfig::new();
//!
//! write_json(&result, "results.json", &config)?;
//! let html = to_html(&result, &config);
//! # Ok(())
//! # }
//! ```

mod html_writer;
mod json_writer;

pub use html_writer::{to_html, write_html};
pub use json_writer::{to_json, write_json};
