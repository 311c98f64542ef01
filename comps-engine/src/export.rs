//! FILENAME: comps-engine/src/export.rs
//! Export Formatter - delimited row objects and spreadsheet cell arrays.
//!
//! Both payloads share one layout: a header row of
//! `["Company Name", "Company Description", ...column labels]`, one data
//! row per exported record, then the four summary rows. Unlike the detail
//! grid, export includes the reference record - it is part of the exported
//! universe, pinned first. Cell strings come from the shared value
//! formatter; the IR-website column passes through verbatim via its Link
//! format class.

use crate::aggregate::AggregateStats;
use crate::definition::SummaryRow;
use crate::view::format_aggregate_cell;
use crate::working_set::WorkingSet;
use engine::{format_metric, ColumnRegistry, CompanyRecord};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Header label of the company-name column.
pub const NAME_HEADER: &str = "Company Name";

/// Header label of the description column.
pub const DESCRIPTION_HEADER: &str = "Company Description";

/// One named field of a delimited-export row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportField {
    pub header: String,
    pub value: String,
}

/// One delimited-export row: named fields in output order.
///
/// Summary rows carry no description field at all; the delimited-text
/// serializer fills any header a row lacks with an empty cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    pub fields: Vec<ExportField>,
}

impl ExportRow {
    fn push(&mut self, header: impl Into<String>, value: impl Into<String>) {
        self.fields.push(ExportField {
            header: header.into(),
            value: value.into(),
        });
    }

    /// The value for a header, if this row carries it.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.header == header)
            .map(|f| f.value.as_str())
    }
}

/// The canonical delimited-export header order.
pub fn delimited_headers(registry: &ColumnRegistry) -> Vec<String> {
    let mut headers = Vec::with_capacity(registry.len() + 2);
    headers.push(NAME_HEADER.to_string());
    headers.push(DESCRIPTION_HEADER.to_string());
    headers.extend(registry.labels().map(str::to_string));
    headers
}

/// Records in export order: reference first, then the working set in
/// arrival order (export ignores the transient sort state).
fn exported_records<'a>(working_set: &'a WorkingSet) -> Vec<&'a CompanyRecord> {
    working_set
        .reference()
        .into_iter()
        .chain(working_set.records().iter())
        .collect()
}

fn formatted_cell(registry: &ColumnRegistry, record: &CompanyRecord, column_index: usize) -> String {
    let column = &registry.columns()[column_index];
    format_metric(column.format_class, &record.metric(&column.field_key))
}

/// Builds the named-field row sequence for delimited-text serialization.
pub fn to_delimited_rows(
    working_set: &WorkingSet,
    stats: &FxHashMap<String, AggregateStats>,
    registry: &ColumnRegistry,
) -> Vec<ExportRow> {
    let mut rows = Vec::new();

    for record in exported_records(working_set) {
        let mut row = ExportRow::default();
        row.push(NAME_HEADER, record.name.clone());
        row.push(DESCRIPTION_HEADER, record.description.clone());
        for (i, column) in registry.columns().iter().enumerate() {
            row.push(column.label.clone(), formatted_cell(registry, record, i));
        }
        rows.push(row);
    }

    for &summary in &SummaryRow::ORDER {
        let mut row = ExportRow::default();
        row.push(NAME_HEADER, summary.label());
        for column in registry.columns() {
            row.push(
                column.label.clone(),
                format_aggregate_cell(registry, stats, &column.field_key, summary),
            );
        }
        rows.push(row);
    }

    rows
}

/// Builds the 2-D cell array for spreadsheet serialization.
pub fn to_spreadsheet(
    working_set: &WorkingSet,
    stats: &FxHashMap<String, AggregateStats>,
    registry: &ColumnRegistry,
) -> Vec<Vec<String>> {
    let mut cells = Vec::new();
    cells.push(delimited_headers(registry));

    for record in exported_records(working_set) {
        let mut row = Vec::with_capacity(registry.len() + 2);
        row.push(record.name.clone());
        row.push(record.description.clone());
        for i in 0..registry.len() {
            row.push(formatted_cell(registry, record, i));
        }
        cells.push(row);
    }

    for &summary in &SummaryRow::ORDER {
        let mut row = Vec::with_capacity(registry.len() + 2);
        row.push(summary.label().to_string());
        row.push(String::new());
        for column in registry.columns() {
            row.push(format_aggregate_cell(registry, stats, &column.field_key, summary));
        }
        cells.push(row);
    }

    cells
}
