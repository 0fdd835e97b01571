//! Facets used to drive filter configuration.
//!
//! These are read-only projections recomputed from the records on every call;
//! nothing is cached, so they always reflect the current corpus.

use std::collections::BTreeSet;

use crate::MessageRecord;

fn in_scope<'a>(
    records: &'a [MessageRecord],
    scope: Option<&'a str>,
) -> impl Iterator<Item = &'a MessageRecord> + 'a {
    records
        .iter()
        .filter(move |r| scope.is_none_or(|source| r.is_from_source(source)))
}

/// Distinct senders, sorted lexicographically.
///
/// ```
/// use chatsift::core::query::available_senders;
/// use chatsift::MessageRecord;
///
/// let records = vec![
///     MessageRecord::new("Bob", "", "a"),
///     MessageRecord::new("Alice", "", "a"),
///     MessageRecord::new("Bob", "", "b"),
/// ];
///
/// assert_eq!(available_senders(&records, None), ["Alice", "Bob"]);
/// assert_eq!(available_senders(&records, Some("b")), ["Bob"]);
/// ```
pub fn available_senders(records: &[MessageRecord], scope: Option<&str>) -> Vec<String> {
    in_scope(records, scope)
        .map(|r| r.sender.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Distinct non-null ids, sorted ascending.
pub fn available_ids(records: &[MessageRecord], scope: Option<&str>) -> Vec<i64> {
    in_scope(records, scope)
        .filter_map(|r| r.id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
