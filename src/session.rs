//! The owned analysis session.
//!
//! A [`Session`] holds everything that lives between operations: the loaded
//! corpus, the current filter configuration and the last filter result.
//! There is no global state; every operation goes through `&self` or
//! `&mut self`.
//!
//! # Example
//!
//! ```rust
//! use chatsift::Session;
//! use chatsift::core::filter::FilterConfig;
//! use chatsift::parser::SourceFormat;
//!
//! let mut session = Session::new();
//! session.load_str(
//!     r#"{"messages":[{"id":5,"from":"Ann","text":"hello world","date":"t1"}]}"#,
//!     "a",
//!     SourceFormat::Json,
//! )?;
//!
//! let result = session.apply_filters(FilterConfig::new().with_keyword("WORLD"))?;
//! assert_eq!(result.keyword_matches.len(), 1);
//! assert!(result.sender_matches.is_empty());
//! # Ok::<(), chatsift::ChatsiftError>(())
//! ```

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::MessageRecord;
use crate::config::{ExportConfig, ParseConfig};
use crate::core::filter::{self, FilterConfig, FilterResult};
use crate::core::query;
use crate::core::stats::CorpusStats;
use crate::core::store::CorpusStore;
use crate::error::{ChatsiftError, Result};
use crate::format::{ExportFormat, write_to_format};
use crate::parser::{SourceFormat, create_parser};

/// Outcome of loading one source in a batch.
#[derive(Debug)]
pub enum SourceOutcome {
    /// The source was parsed and appended.
    Loaded {
        /// Identifier the records were stored under.
        source_id: String,
        /// Number of records the source contributed.
        records: usize,
    },
    /// The source could not be read or parsed; nothing was appended.
    Failed {
        /// Identifier of the source that failed.
        source_id: String,
        /// Why it failed.
        error: ChatsiftError,
    },
}

impl SourceOutcome {
    /// Identifier of the source this outcome is about.
    pub fn source_id(&self) -> &str {
        match self {
            SourceOutcome::Loaded { source_id, .. } | SourceOutcome::Failed { source_id, .. } => {
                source_id
            }
        }
    }

    /// Returns `true` if the source was loaded.
    pub fn is_loaded(&self) -> bool {
        matches!(self, SourceOutcome::Loaded { .. })
    }
}

/// Per-source results of [`Session::load_batch`].
#[derive(Debug, Default)]
pub struct LoadReport {
    /// One outcome per input, in input order.
    pub outcomes: Vec<SourceOutcome>,
    /// Whether the current filter was re-applied after loading.
    pub refiltered: bool,
}

impl LoadReport {
    /// Number of sources that loaded.
    pub fn loaded_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_loaded()).count()
    }

    /// Number of sources that failed.
    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.loaded_count()
    }

    /// Records contributed by the loaded sources.
    pub fn total_records(&self) -> usize {
        self.outcomes
            .iter()
            .map(|o| match o {
                SourceOutcome::Loaded { records, .. } => *records,
                SourceOutcome::Failed { .. } => 0,
            })
            .sum()
    }

    /// Returns `true` if there was at least one input and none loaded.
    pub fn all_failed(&self) -> bool {
        !self.outcomes.is_empty() && self.loaded_count() == 0
    }

    /// Failed sources with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &ChatsiftError)> {
        self.outcomes.iter().filter_map(|o| match o {
            SourceOutcome::Failed { source_id, error } => Some((source_id.as_str(), error)),
            SourceOutcome::Loaded { .. } => None,
        })
    }
}

/// Loaded corpus plus the current filter state.
#[derive(Debug, Default)]
pub struct Session {
    store: CorpusStore,
    config: FilterConfig,
    result: Option<FilterResult>,
    parse_config: ParseConfig,
}

impl Session {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session whose parsers use `config`.
    pub fn with_parse_config(config: ParseConfig) -> Self {
        Self {
            parse_config: config,
            ..Self::default()
        }
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Parses `content` and stores its records under `source_id`.
    ///
    /// Loading a source that is already present replaces its earlier records,
    /// so loading the same payload twice leaves the corpus unchanged. If
    /// parsing fails, the corpus is left untouched.
    ///
    /// Returns the number of records the source contributed.
    pub fn load_str(
        &mut self,
        content: &str,
        source_id: &str,
        format: SourceFormat,
    ) -> Result<usize> {
        let parser = create_parser(format, self.parse_config.clone())?;
        let records = parser.parse_str(content, source_id)?;
        Ok(self.ingest(source_id, records))
    }

    /// Reads a file and loads it, using the path as the source identifier.
    ///
    /// Without an explicit `format`, `.html`/`.htm` files are read as HTML
    /// exports and everything else as JSON.
    pub fn load_file(&mut self, path: impl AsRef<Path>, format: Option<SourceFormat>) -> Result<usize> {
        let path = path.as_ref();
        let format = format.unwrap_or_else(|| SourceFormat::from_path(path));
        let source_id = path.display().to_string();
        let content = fs::read_to_string(path)?;
        self.load_str(&content, &source_id, format)
    }

    /// Loads several files in order.
    ///
    /// A failing source is recorded in the report and the remaining sources
    /// are still attempted. If the current configuration has any criterion
    /// set and at least one source loaded, the filter is re-applied so the
    /// current result reflects the new data.
    pub fn load_batch<I, P>(&mut self, paths: I, format: Option<SourceFormat>) -> LoadReport
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut report = LoadReport::default();

        for path in paths {
            let path = path.as_ref();
            let source_id = path.display().to_string();
            match self.load_file(path, format) {
                Ok(records) => {
                    info!(source = %source_id, records, "loaded source");
                    report.outcomes.push(SourceOutcome::Loaded { source_id, records });
                }
                Err(error) => {
                    warn!(source = %source_id, %error, "failed to load source");
                    report.outcomes.push(SourceOutcome::Failed { source_id, error });
                }
            }
        }

        if report.loaded_count() > 0 && self.config.is_active() {
            let config = self.config.clone();
            match self.apply_filters(config) {
                Ok(_) => report.refiltered = true,
                Err(error) => debug!(%error, "current filter not re-applied"),
            }
        }

        report
    }

    fn ingest(&mut self, source_id: &str, records: Vec<MessageRecord>) -> usize {
        let removed = self.store.remove_source(source_id);
        if removed > 0 {
            debug!(source = %source_id, removed, "replacing previously loaded source");
        }
        let count = records.len();
        self.store.append(source_id, records);
        count
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Runs `config` over the whole corpus.
    ///
    /// On success `config` becomes the current configuration and the result
    /// becomes the current result. On error both are left as they were.
    ///
    /// # Errors
    ///
    /// - [`ChatsiftError::EmptyCorpus`] if no records are loaded
    /// - [`ChatsiftError::UnknownSource`] if the scope names a source that
    ///   isn't loaded
    pub fn apply_filters(&mut self, config: FilterConfig) -> Result<&FilterResult> {
        if self.store.is_empty() {
            return Err(ChatsiftError::EmptyCorpus);
        }
        self.check_scope(config.source_scope.as_deref())?;

        let result = filter::apply_filters(self.store.records(), &config);
        debug!(
            sender = result.sender_matches.len(),
            reply = result.reply_matches.len(),
            keyword = result.keyword_matches.len(),
            "applied filters"
        );
        self.config = config;
        Ok(&*self.result.insert(result))
    }

    /// Re-runs the current configuration.
    pub fn refilter(&mut self) -> Result<&FilterResult> {
        let config = self.config.clone();
        self.apply_filters(config)
    }

    /// The current filter configuration.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Mutable access to the current configuration, for editing one
    /// criterion at a time. Changes take effect on the next
    /// [`refilter`](Session::refilter).
    pub fn config_mut(&mut self) -> &mut FilterConfig {
        &mut self.config
    }

    /// The result of the last successful filter application.
    pub fn result(&self) -> Option<&FilterResult> {
        self.result.as_ref()
    }

    /// Clears the configuration and the current result, keeping the corpus.
    pub fn reset_filters(&mut self) {
        self.config = FilterConfig::default();
        self.result = None;
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The loaded corpus.
    pub fn store(&self) -> &CorpusStore {
        &self.store
    }

    /// All records in load order.
    pub fn records(&self) -> &[MessageRecord] {
        self.store.records()
    }

    /// Distinct senders, sorted, optionally restricted to one source.
    pub fn available_senders(&self, scope: Option<&str>) -> Vec<String> {
        query::available_senders(self.store.records(), scope)
    }

    /// Distinct non-null ids, ascending, optionally restricted to one source.
    pub fn available_ids(&self, scope: Option<&str>) -> Vec<i64> {
        query::available_ids(self.store.records(), scope)
    }

    /// Loaded source identifiers in load order.
    pub fn available_sources(&self) -> Vec<String> {
        self.store.source_ids().map(str::to_string).collect()
    }

    /// Checks that `scope`, if set, names a loaded source.
    ///
    /// # Errors
    ///
    /// Returns [`ChatsiftError::UnknownSource`] if the source isn't loaded.
    pub fn check_scope(&self, scope: Option<&str>) -> Result<()> {
        match scope {
            Some(scope) if !self.store.contains_source(scope) => {
                Err(ChatsiftError::unknown_source(scope))
            }
            _ => Ok(()),
        }
    }

    /// Statistics about the corpus and the current result.
    ///
    /// # Errors
    ///
    /// Returns [`ChatsiftError::EmptyCorpus`] if no records are loaded.
    pub fn stats(&self) -> Result<CorpusStats> {
        if self.store.is_empty() {
            return Err(ChatsiftError::EmptyCorpus);
        }
        Ok(CorpusStats::collect(
            &self.store,
            &self.config,
            self.result.as_ref(),
        ))
    }

    // =========================================================================
    // Export
    // =========================================================================

    /// Writes the current result to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatsiftError::NoResult`] if no filter has been applied,
    /// or an IO/serialization error from the writer.
    pub fn export(&self, path: &str, format: ExportFormat, config: &ExportConfig) -> Result<()> {
        let result = self.result.as_ref().ok_or(ChatsiftError::NoResult)?;
        write_to_format(result, path, format, config)?;
        info!(path, %format, total = result.total(), "exported results");
        Ok(())
    }

    /// Wipes the corpus, the configuration and the current result.
    pub fn reset(&mut self) {
        self.store.reset();
        self.reset_filters();
    }
}
