//! Corpus and result statistics.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use super::filter::{FilterConfig, FilterResult};
use super::store::CorpusStore;

/// Summary of one loaded source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceStats {
    pub source_id: String,
    pub record_count: usize,
    pub sender_count: usize,
}

/// Bucket lengths of a filter result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultStats {
    pub sender_matches: usize,
    pub reply_matches: usize,
    pub keyword_matches: usize,
}

impl ResultStats {
    /// Sum of the bucket lengths, without deduplication.
    pub fn total(&self) -> usize {
        self.sender_matches + self.reply_matches + self.keyword_matches
    }
}

impl From<&FilterResult> for ResultStats {
    fn from(result: &FilterResult) -> Self {
        Self {
            sender_matches: result.sender_matches.len(),
            reply_matches: result.reply_matches.len(),
            keyword_matches: result.keyword_matches.len(),
        }
    }
}

/// Snapshot of what is loaded and what the last filter found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    /// Per-source summaries in load order.
    pub sources: Vec<SourceStats>,
    /// Number of records across all sources.
    pub total_records: usize,
    /// Distinct senders across all sources.
    pub distinct_senders: usize,
    /// Scope of the current configuration and its record count.
    pub scope: Option<(String, usize)>,
    /// Bucket lengths of the last result, if a filter was applied.
    pub result: Option<ResultStats>,
}

impl CorpusStats {
    /// Collects statistics from the store and the current session state.
    pub fn collect(
        store: &CorpusStore,
        config: &FilterConfig,
        result: Option<&FilterResult>,
    ) -> Self {
        let sources = store
            .aggregates()
            .iter()
            .map(|a| SourceStats {
                source_id: a.source_id.clone(),
                record_count: a.record_count,
                sender_count: a.senders.len(),
            })
            .collect();

        let distinct_senders = store
            .aggregates()
            .iter()
            .flat_map(|a| a.senders.iter())
            .collect::<BTreeSet<_>>()
            .len();

        let scope = config.source_scope.as_ref().map(|source| {
            let count = store.aggregate(source).map_or(0, |a| a.record_count);
            (source.clone(), count)
        });

        Self {
            sources,
            total_records: store.len(),
            distinct_senders,
            scope,
            result: result.map(ResultStats::from),
        }
    }

    /// Number of loaded sources.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }
}

impl fmt::Display for CorpusStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sources loaded:   {}", self.source_count())?;
        writeln!(f, "Total messages:   {}", self.total_records)?;
        writeln!(f, "Unique senders:   {}", self.distinct_senders)?;
        if let Some((source, count)) = &self.scope {
            writeln!(f, "Messages in {}: {}", source, count)?;
        }

        match &self.result {
            Some(result) => {
                writeln!(f, "Sender matches:   {}", result.sender_matches)?;
                writeln!(f, "Reply matches:    {}", result.reply_matches)?;
                writeln!(f, "Keyword matches:  {}", result.keyword_matches)?;
            }
            None => writeln!(f, "No filters applied")?,
        }

        if self.sources.len() > 1 {
            writeln!(f, "Per source:")?;
            for source in &self.sources {
                writeln!(
                    f,
                    "  {}: {} messages, {} senders",
                    source.source_id, source.record_count, source.sender_count
                )?;
            }
        }
        Ok(())
    }
}
