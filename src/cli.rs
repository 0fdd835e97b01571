//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`InputFormat`] - Forced source shape
//! - [`ReportFormat`] - Export format options
//!
//! Both enums convert into their library counterparts, so the CLI never
//! needs its own parsing or export logic:
//!
//! ```rust
//! use chatsift::cli::{InputFormat, ReportFormat};
//! use chatsift::format::ExportFormat;
//! use chatsift::parser::SourceFormat;
//!
//! assert_eq!(SourceFormat::from(InputFormat::Html), SourceFormat::Html);
//! assert_eq!(ExportFormat::from(ReportFormat::Json), ExportFormat::Json);
//! ```

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::core::filter::FilterConfig;
use crate::error::ChatsiftError;

/// Load Telegram chat exports (HTML or JSON), filter messages by sender,
/// reply target and keyword, and export the matches.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatsift")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatsift result.json --from Alice
    chatsift messages.html result.json --keyword release -o hits.html
    chatsift a.json b.json --reply-to 42 --scope b.json -f json -o replies.json
    chatsift chat/*.json --senders --stats")]
pub struct Args {
    /// Export files to load (.html/.htm are read as HTML, anything else as JSON)
    #[arg(required = true, num_args = 1.., value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Read every input as this shape instead of guessing from the extension
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format_in: Option<InputFormat>,

    /// Collect messages sent by this sender (exact match)
    #[arg(long, value_name = "SENDER")]
    pub from: Option<String>,

    /// Collect replies to this message id
    #[arg(long, value_name = "ID")]
    pub reply_to: Option<String>,

    /// Collect messages containing this text (case-insensitive)
    #[arg(long, value_name = "TEXT")]
    pub keyword: Option<String>,

    /// Only consider messages from this loaded source
    #[arg(long, value_name = "SOURCE")]
    pub scope: Option<String>,

    /// Write the filter result to this file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Export format (defaults to the output extension, then JSON)
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// List the available senders
    #[arg(long)]
    pub senders: bool,

    /// List the available message ids
    #[arg(long)]
    pub ids: bool,

    /// Print corpus and result statistics
    #[arg(long)]
    pub stats: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Builds the filter configuration from the criterion flags.
    ///
    /// # Errors
    ///
    /// Returns [`ChatsiftError::InvalidId`] if `--reply-to` isn't an integer.
    pub fn filter_config(&self) -> Result<FilterConfig, ChatsiftError> {
        let mut config = FilterConfig::new();
        if let Some(sender) = &self.from {
            config = config.with_sender(sender.clone());
        }
        if let Some(keyword) = &self.keyword {
            config = config.with_keyword(keyword.clone());
        }
        if let Some(scope) = &self.scope {
            config = config.with_scope(scope.clone());
        }
        if let Some(reply_to) = &self.reply_to {
            config.set_reply_id_str(reply_to)?;
        }
        Ok(config)
    }

    /// Log filter directive for the `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Source shape override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Telegram Desktop HTML export
    #[value(alias = "htm")]
    Html,

    /// Telegram Desktop JSON export
    Json,
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// The three buckets as a JSON object
    #[default]
    Json,

    /// Standalone HTML report
    Html,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&crate::format::ExportFormat::from(*self), f)
    }
}

// Conversion to library format types
impl From<InputFormat> for crate::parser::SourceFormat {
    fn from(format: InputFormat) -> crate::parser::SourceFormat {
        match format {
            InputFormat::Html => crate::parser::SourceFormat::Html,
            InputFormat::Json => crate::parser::SourceFormat::Json,
        }
    }
}

impl From<ReportFormat> for crate::format::ExportFormat {
    fn from(format: ReportFormat) -> crate::format::ExportFormat {
        match format {
            ReportFormat::Json => crate::format::ExportFormat::Json,
            ReportFormat::Html => crate::format::ExportFormat::Html,
        }
    }
}
