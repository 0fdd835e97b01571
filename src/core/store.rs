//! In-memory corpus of normalized records.
//!
//! The [`CorpusStore`] keeps every loaded record in arrival order and one
//! [`SourceAggregate`] per source. Records are never re-sorted and never
//! deduplicated: two sources may both contain `id = 1`, and both records stay.
//!
//! ```
//! use chatsift::core::store::CorpusStore;
//! use chatsift::MessageRecord;
//!
//! let mut store = CorpusStore::new();
//! store.append("a", vec![MessageRecord::new("Ann", "hi", "a").with_id(1)]);
//! store.append("b", vec![MessageRecord::new("Bob", "yo", "b").with_id(1)]);
//!
//! assert_eq!(store.len(), 2);
//! assert!(store.aggregate("a").unwrap().record_ids.contains(&1));
//! assert!(store.aggregate("b").unwrap().record_ids.contains(&1));
//! ```

use std::collections::BTreeSet;

use serde::Serialize;

use crate::MessageRecord;

/// Per-source summary, updated as the source's records are appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceAggregate {
    /// Identifier of the source.
    pub source_id: String,
    /// Number of records contributed by this source.
    pub record_count: usize,
    /// Distinct senders seen in this source.
    pub senders: BTreeSet<String>,
    /// Distinct non-null record ids seen in this source.
    pub record_ids: BTreeSet<i64>,
}

impl SourceAggregate {
    fn new(source_id: &str) -> Self {
        Self {
            source_id: source_id.to_string(),
            ..Self::default()
        }
    }

    fn record(&mut self, record: &MessageRecord) {
        self.record_count += 1;
        if !self.senders.contains(&record.sender) {
            self.senders.insert(record.sender.clone());
        }
        if let Some(id) = record.id {
            self.record_ids.insert(id);
        }
    }
}

/// Ordered record sequence plus per-source aggregates.
#[derive(Debug, Clone, Default)]
pub struct CorpusStore {
    records: Vec<MessageRecord>,
    // Kept in first-load order; the number of sources is small.
    aggregates: Vec<SourceAggregate>,
}

impl CorpusStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one source's records in order and updates its aggregate.
    ///
    /// The aggregate is created on first contribution, even when `records`
    /// is empty, so a loaded empty source is still listed.
    ///
    /// Records are re-stamped with `source_id` so the aggregate and the
    /// records can never disagree about provenance.
    pub fn append(&mut self, source_id: &str, records: Vec<MessageRecord>) {
        let index = match self.aggregates.iter().position(|a| a.source_id == source_id) {
            Some(index) => index,
            None => {
                self.aggregates.push(SourceAggregate::new(source_id));
                self.aggregates.len() - 1
            }
        };

        self.records.reserve(records.len());
        for mut record in records {
            if record.source_id != source_id {
                record.source_id = source_id.to_string();
            }
            self.aggregates[index].record(&record);
            self.records.push(record);
        }
    }

    /// Drops one source's records and its aggregate.
    ///
    /// Returns the number of records removed. The remaining records keep
    /// their relative order.
    pub fn remove_source(&mut self, source_id: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !r.is_from_source(source_id));
        self.aggregates.retain(|a| a.source_id != source_id);
        before - self.records.len()
    }

    /// Clears all records and aggregates.
    pub fn reset(&mut self) {
        self.records.clear();
        self.aggregates.clear();
    }

    /// All records in append order.
    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    /// Records of one source, in append order.
    pub fn records_in<'a>(&'a self, source_id: &'a str) -> impl Iterator<Item = &'a MessageRecord> + 'a {
        self.records.iter().filter(move |r| r.is_from_source(source_id))
    }

    /// Aggregate of one source.
    pub fn aggregate(&self, source_id: &str) -> Option<&SourceAggregate> {
        self.aggregates.iter().find(|a| a.source_id == source_id)
    }

    /// All aggregates in first-load order.
    pub fn aggregates(&self) -> &[SourceAggregate] {
        &self.aggregates
    }

    /// Loaded source identifiers in first-load order.
    pub fn source_ids(&self) -> impl Iterator<Item = &str> {
        self.aggregates.iter().map(|a| a.source_id.as_str())
    }

    /// Returns `true` if `source_id` has been loaded.
    pub fn contains_source(&self, source_id: &str) -> bool {
        self.aggregate(source_id).is_some()
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no records are loaded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
