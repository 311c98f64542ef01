//! FILENAME: engine/src/registry.rs
//! Column Registry - The static catalog of grouped metric columns.
//!
//! This module describes WHAT columns exist: five fixed groups, each listing
//! its column labels and metric keys. Column order here is the display and
//! export order (group-major, then column order within group). The registry
//! is built once and never mutated; format classes are resolved at
//! construction so no per-render string matching happens anywhere else.

use crate::format::{classify_field_key, FormatClass};
use serde::{Deserialize, Serialize};

/// The fixed catalog: group label, then (column label, metric key) pairs.
const CATALOG: &[(&str, &[(&str, &str)])] = &[
    (
        "Valuation Metrics",
        &[
            ("Market Cap", "market_cap"),
            ("Enterprise Value", "enterprise_value"),
            ("P/E Ratio (Trailing)", "trailing_pe"),
            ("P/E Ratio (Forward)", "forward_pe"),
            ("Price to Sales", "price_to_sales_trailing12mo"),
            ("Price to Book", "price_to_book"),
            ("PEG Ratio", "peg_ratio"),
        ],
    ),
    (
        "Profitability Metrics",
        &[
            ("Revenue", "revenue"),
            ("Revenue Growth", "revenue_growth"),
            ("Gross Margin", "gross_margin"),
            ("EBITDA Margin", "ebitda_margin"),
            ("Operating Margin", "operating_margin"),
            ("EBITDA", "ebitda"),
            ("Earnings Growth", "earnings_growth"),
        ],
    ),
    (
        "Earnings and Dividends",
        &[
            ("Trailing EPS", "trailing_eps"),
            ("Forward EPS", "forward_eps"),
            ("Dividend Rate", "forward_dividend"),
            ("Dividend Yield", "forward_dividend_yield"),
        ],
    ),
    (
        "Financial Health Metrics",
        &[
            ("Total Debt", "total_debt"),
            ("Debt to Equity Ratio", "debt_to_equity"),
            ("Quick Ratio", "quick_ratio"),
            ("Current Ratio", "current_ratio"),
            ("Free Cash Flow", "free_cash_flow"),
            ("Operating Cash Flow", "operating_cashflow"),
        ],
    ),
    (
        "Company Information",
        &[
            ("Full Time Employees", "full_time_employees"),
            ("IR Website", "ir_website_link"),
        ],
    ),
];

/// A single column of the comparables table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Label of the group this column belongs to.
    pub group: String,

    /// Display label, also the export header for this column.
    pub label: String,

    /// Metric key into `CompanyRecord::metrics`.
    pub field_key: String,

    /// Format class resolved once at registry construction.
    pub format_class: FormatClass,
}

/// A group's position in the flattened column list, for header rendering
/// and export grouping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSpan {
    pub label: String,

    /// Index of the group's first column in the flattened list.
    pub start: usize,

    /// Number of columns in the group.
    pub len: usize,
}

/// The immutable column catalog in canonical order.
#[derive(Debug, Clone)]
pub struct ColumnRegistry {
    columns: Vec<ColumnSpec>,
    groups: Vec<GroupSpan>,
}

impl ColumnRegistry {
    /// Builds the standard five-group registry.
    pub fn standard() -> Self {
        let mut columns = Vec::new();
        let mut groups = Vec::new();

        for &(group_label, group_columns) in CATALOG {
            let start = columns.len();
            for &(label, field_key) in group_columns {
                columns.push(ColumnSpec {
                    group: group_label.to_string(),
                    label: label.to_string(),
                    field_key: field_key.to_string(),
                    format_class: classify_field_key(field_key),
                });
            }
            groups.push(GroupSpan {
                label: group_label.to_string(),
                start,
                len: columns.len() - start,
            });
        }

        ColumnRegistry { columns, groups }
    }

    /// The flattened column list in canonical order.
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Group boundaries over the flattened list.
    pub fn groups(&self) -> &[GroupSpan] {
        &self.groups
    }

    /// Column labels in canonical order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn by_key(&self, field_key: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.field_key == field_key)
    }

    pub fn by_label(&self, label: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.label == label)
    }

    /// Looks up a column by metric key.
    ///
    /// # Panics
    ///
    /// Panics on an unknown key. Keys reaching this method come from the
    /// registry itself, so an unknown key is a programming error in the
    /// caller, not a data error.
    pub fn require_key(&self, field_key: &str) -> &ColumnSpec {
        self.by_key(field_key).unwrap_or_else(|| {
            panic!("column registry: unknown field key {field_key:?}")
        })
    }

    /// Looks up a column by display label.
    ///
    /// # Panics
    ///
    /// Panics on an unknown label, same contract as [`require_key`].
    ///
    /// [`require_key`]: ColumnRegistry::require_key
    pub fn require_label(&self, label: &str) -> &ColumnSpec {
        self.by_label(label).unwrap_or_else(|| {
            panic!("column registry: unknown column label {label:?}")
        })
    }
}

impl Default for ColumnRegistry {
    fn default() -> Self {
        ColumnRegistry::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_and_counts() {
        let registry = ColumnRegistry::standard();
        assert_eq!(registry.len(), 26);
        assert_eq!(registry.groups().len(), 5);

        let labels: Vec<&str> = registry.labels().collect();
        assert_eq!(labels[0], "Market Cap");
        assert_eq!(labels[7], "Revenue");
        assert_eq!(labels[25], "IR Website");
    }

    #[test]
    fn test_group_spans_cover_all_columns() {
        let registry = ColumnRegistry::standard();
        let mut expected_start = 0;
        for group in registry.groups() {
            assert_eq!(group.start, expected_start);
            expected_start += group.len;
        }
        assert_eq!(expected_start, registry.len());

        let company_info = registry.groups().last().unwrap();
        assert_eq!(company_info.label, "Company Information");
        assert_eq!(company_info.len, 2);
    }

    #[test]
    fn test_format_classes_resolved_at_construction() {
        let registry = ColumnRegistry::standard();
        assert_eq!(
            registry.require_key("revenue_growth").format_class,
            FormatClass::Percent
        );
        assert_eq!(
            registry.require_key("market_cap").format_class,
            FormatClass::Currency
        );
        assert_eq!(
            registry.require_key("ir_website_link").format_class,
            FormatClass::Link
        );
        assert_eq!(
            registry.require_label("Dividend Rate").field_key,
            "forward_dividend"
        );
    }

    #[test]
    #[should_panic(expected = "unknown column label")]
    fn test_unknown_label_fails_loudly() {
        ColumnRegistry::standard().require_label("Share Price");
    }
}
