//! FILENAME: comps-engine/src/definition.rs
//! Comps Definition - The serializable transient state.
//!
//! This module contains the types that DESCRIBE the comparables view:
//! sort column and direction, and the fixed summary-row order. These are
//! immutable snapshots of user intent, designed to cross a frontend bridge
//! verbatim. They never affect working-set identity, only derived views.

use serde::{Deserialize, Serialize};

// ============================================================================
// SORTING
// ============================================================================

/// Sort direction for the detail grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Ascending
    }
}

/// The current sort request: which column (by metric key) and direction.
///
/// `column: None` means the working set displays in arrival order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SortState {
    pub column: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    /// Applies a sort request for a column.
    ///
    /// Selecting the active column flips direction; selecting a new column
    /// resets to ascending.
    pub fn request(&mut self, field_key: &str) {
        if self.column.as_deref() == Some(field_key) {
            self.direction = self.direction.toggled();
        } else {
            self.column = Some(field_key.to_string());
            self.direction = SortDirection::Ascending;
        }
    }
}

// ============================================================================
// SUMMARY ROWS
// ============================================================================

/// The four cross-sectional summary rows, in display and export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SummaryRow {
    Mean,
    Low,
    High,
    Median,
}

impl SummaryRow {
    /// Display/export order of the summary rows.
    pub const ORDER: [SummaryRow; 4] = [
        SummaryRow::Mean,
        SummaryRow::Low,
        SummaryRow::High,
        SummaryRow::Median,
    ];

    /// Row label, capitalization exact as exported.
    pub fn label(self) -> &'static str {
        match self {
            SummaryRow::Mean => "Mean",
            SummaryRow::Low => "Low",
            SummaryRow::High => "High",
            SummaryRow::Median => "Median",
        }
    }
}
