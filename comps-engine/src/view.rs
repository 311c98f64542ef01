//! FILENAME: comps-engine/src/view.rs
//! Comps View - Renderable output for the frontend.
//!
//! This module transforms the working set and the aggregate stats into
//! pre-formatted row sequences the frontend can render directly: the detail
//! grid (pinned reference row + sortable working-set rows) and the
//! aggregate grid (the four summary rows). Every cell string comes from the
//! shared value formatter; the view layer adds no formatting of its own.

use crate::aggregate::AggregateStats;
use crate::definition::{SortState, SummaryRow};
use crate::sort::sorted_records;
use crate::working_set::WorkingSet;
use engine::{format_metric, ColumnRegistry, CompanyRecord};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// HEADER METADATA
// ============================================================================

/// A column group's header cell: label plus how many columns it spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderGroup {
    pub label: String,
    pub span: usize,
}

fn header_groups(registry: &ColumnRegistry) -> Vec<HeaderGroup> {
    registry
        .groups()
        .iter()
        .map(|g| HeaderGroup {
            label: g.label.clone(),
            span: g.len,
        })
        .collect()
}

// ============================================================================
// DETAIL GRID
// ============================================================================

/// One rendered company row: identity plus a formatted cell per column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailRow {
    pub ticker: String,
    pub exchange: String,
    pub name: String,
    pub description: String,

    /// True for the pinned reference row, which sits outside sort/removal.
    pub is_reference: bool,

    /// Formatted cells in canonical column order.
    pub cells: Vec<String>,
}

/// The detail grid: header metadata, the pinned reference row, and the
/// working-set rows in current sort order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailView {
    pub column_labels: Vec<String>,
    pub groups: Vec<HeaderGroup>,
    pub reference: Option<DetailRow>,
    pub rows: Vec<DetailRow>,
}

fn detail_row(record: &CompanyRecord, registry: &ColumnRegistry, is_reference: bool) -> DetailRow {
    let cells = registry
        .columns()
        .iter()
        .map(|column| format_metric(column.format_class, &record.metric(&column.field_key)))
        .collect();

    DetailRow {
        ticker: record.ticker.clone(),
        exchange: record.exchange.clone(),
        name: record.name.clone(),
        description: record.description.clone(),
        is_reference,
        cells,
    }
}

/// Builds the detail grid for the current working set and sort state.
pub fn build_detail_view(
    working_set: &WorkingSet,
    registry: &ColumnRegistry,
    sort: &SortState,
) -> DetailView {
    DetailView {
        column_labels: registry.labels().map(str::to_string).collect(),
        groups: header_groups(registry),
        reference: working_set
            .reference()
            .map(|record| detail_row(record, registry, true)),
        rows: sorted_records(working_set, sort)
            .into_iter()
            .map(|record| detail_row(record, registry, false))
            .collect(),
    }
}

// ============================================================================
// AGGREGATE GRID
// ============================================================================

/// One rendered summary row (`Mean`, `Low`, `High`, or `Median`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateRow {
    pub label: String,

    /// Formatted cells in canonical column order; `"N/A"` where the column
    /// has no usable values.
    pub cells: Vec<String>,
}

/// The aggregate grid: the four summary rows under the same column layout
/// as the detail grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateView {
    pub column_labels: Vec<String>,
    pub groups: Vec<HeaderGroup>,
    pub rows: Vec<AggregateRow>,
}

/// Formats one aggregate component through the column's format class.
pub(crate) fn format_aggregate_cell(
    registry: &ColumnRegistry,
    stats: &FxHashMap<String, AggregateStats>,
    field_key: &str,
    row: SummaryRow,
) -> String {
    let column = registry.require_key(field_key);
    let component = stats
        .get(field_key)
        .and_then(|s| s.component(row));

    match component {
        Some(value) => format_metric(column.format_class, &value.into()),
        None => "N/A".to_string(),
    }
}

/// Builds the aggregate grid from the current stats map.
pub fn build_aggregate_view(
    registry: &ColumnRegistry,
    stats: &FxHashMap<String, AggregateStats>,
) -> AggregateView {
    let rows = SummaryRow::ORDER
        .iter()
        .map(|&row| AggregateRow {
            label: row.label().to_string(),
            cells: registry
                .columns()
                .iter()
                .map(|column| format_aggregate_cell(registry, stats, &column.field_key, row))
                .collect(),
        })
        .collect();

    AggregateView {
        column_labels: registry.labels().map(str::to_string).collect(),
        groups: header_groups(registry),
        rows,
    }
}
