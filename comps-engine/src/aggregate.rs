//! FILENAME: comps-engine/src/aggregate.rs
//! Aggregation Engine - cross-sectional summary statistics per column.
//!
//! Every working-set mutation triggers a full, synchronous recompute over
//! the current records. There is no incremental update and no cache across
//! mutations; correctness over cleverness.

use crate::definition::SummaryRow;
use crate::working_set::WorkingSet;
use engine::ColumnRegistry;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Min/max/median/mean for one column over the working set.
///
/// Each component is `None` when the column has no numeric-parseable values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregateStats {
    pub low: Option<f64>,
    pub high: Option<f64>,
    pub median: Option<f64>,
    pub mean: Option<f64>,
}

impl AggregateStats {
    /// Stats for a column with no usable values.
    pub const UNAVAILABLE: AggregateStats = AggregateStats {
        low: None,
        high: None,
        median: None,
        mean: None,
    };

    /// Computes stats over a non-empty value list; `UNAVAILABLE` otherwise.
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return AggregateStats::UNAVAILABLE;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let len = sorted.len();
        let sum: f64 = sorted.iter().sum();
        let median = if len % 2 == 1 {
            sorted[len / 2]
        } else {
            (sorted[len / 2 - 1] + sorted[len / 2]) / 2.0
        };

        AggregateStats {
            low: Some(sorted[0]),
            high: Some(sorted[len - 1]),
            median: Some(median),
            mean: Some(sum / len as f64),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        self.low.is_none()
    }

    /// The component shown in a given summary row.
    pub fn component(&self, row: SummaryRow) -> Option<f64> {
        match row {
            SummaryRow::Mean => self.mean,
            SummaryRow::Low => self.low,
            SummaryRow::High => self.high,
            SummaryRow::Median => self.median,
        }
    }
}

/// Computes stats for every registry column over the current working set.
///
/// Non-parseable values are dropped, never treated as zero. The reference
/// record is not a working-set member and so never contributes.
pub fn aggregate(
    working_set: &WorkingSet,
    registry: &ColumnRegistry,
) -> FxHashMap<String, AggregateStats> {
    let mut stats = FxHashMap::default();

    for column in registry.columns() {
        let values: Vec<f64> = working_set
            .records()
            .iter()
            .filter_map(|record| record.metric_number(&column.field_key))
            .collect();

        stats.insert(column.field_key.clone(), AggregateStats::from_values(&values));
    }

    stats
}
