//! FILENAME: comps-engine/src/sort.rs
//! Sort Engine - orders the working set by a chosen column and direction.
//!
//! Sorting derives an index sequence; it never mutates the working set and
//! never touches the reference record. Missing values compare as zero -
//! a preserved quirk of the source convention, see DESIGN.md.

use crate::definition::{SortDirection, SortState};
use crate::working_set::WorkingSet;
use engine::CompanyRecord;
use std::cmp::Ordering;

/// The comparison key for a record under the missing-as-zero policy.
///
/// A record with no parseable value for the column sorts as if the value
/// were 0, which ranks it above negative-but-known values in ascending
/// order. Deliberate, and isolated here.
pub fn missing_as_zero(record: &CompanyRecord, field_key: &str) -> f64 {
    record.metric_number(field_key).unwrap_or(0.0)
}

/// Returns working-set indices in display order for the given sort state.
///
/// With no sort column the arrival order is returned unchanged. The sort is
/// stable: records with equal keys keep their relative arrival order in
/// both directions.
pub fn sorted_indices(working_set: &WorkingSet, sort: &SortState) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..working_set.len()).collect();

    let field_key = match &sort.column {
        Some(key) => key.as_str(),
        None => return indices,
    };

    let records = working_set.records();
    let compare = |&a: &usize, &b: &usize| -> Ordering {
        let ka = missing_as_zero(&records[a], field_key);
        let kb = missing_as_zero(&records[b], field_key);
        ka.partial_cmp(&kb).unwrap_or(Ordering::Equal)
    };

    match sort.direction {
        SortDirection::Ascending => indices.sort_by(compare),
        SortDirection::Descending => indices.sort_by(|a, b| compare(b, a)),
    }

    indices
}

/// Convenience wrapper returning record references in display order.
pub fn sorted_records<'a>(working_set: &'a WorkingSet, sort: &SortState) -> Vec<&'a CompanyRecord> {
    let records = working_set.records();
    sorted_indices(working_set, sort)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}
