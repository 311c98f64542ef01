//! FILENAME: comps-engine/src/engine.rs
//! Comps Engine - the orchestrating state machine.
//!
//! Owns the working set, the transient sort state, the current aggregate
//! stats, and the scroll controller. Every mutation is handled to
//! completion: a removal synchronously recomputes the full aggregate map
//! before the call returns, so no derived view can ever observe stale
//! statistics.

use crate::aggregate::{aggregate, AggregateStats};
use crate::definition::SortState;
use crate::export::{to_delimited_rows, to_spreadsheet, ExportRow};
use crate::scroll::ScrollSync;
use crate::view::{build_aggregate_view, build_detail_view, AggregateView, DetailView};
use crate::working_set::WorkingSet;
use engine::{ColumnRegistry, CompanyRecord};
use log::debug;
use rustc_hash::FxHashMap;

/// The comparable-set table & analytics engine.
pub struct CompsEngine {
    registry: ColumnRegistry,
    working_set: WorkingSet,
    sort: SortState,
    aggregates: FxHashMap<String, AggregateStats>,
    scroll: ScrollSync,
}

impl CompsEngine {
    /// Builds the engine from the collaborator's initial snapshot and an
    /// optional reference record, and runs the first aggregate pass.
    pub fn new(records: Vec<CompanyRecord>, reference: Option<CompanyRecord>) -> Self {
        let registry = ColumnRegistry::standard();
        let working_set = WorkingSet::new(records, reference);
        let aggregates = aggregate(&working_set, &registry);

        CompsEngine {
            registry,
            working_set,
            sort: SortState::default(),
            aggregates,
            scroll: ScrollSync::new(),
        }
    }

    /// Removal callback keyed by ticker. Idempotent; always followed by a
    /// full aggregate recompute.
    pub fn remove(&mut self, ticker: &str) {
        self.working_set.remove(ticker);
        self.recompute();
    }

    /// Sort-request callback keyed by column label, with toggle semantics.
    ///
    /// # Panics
    ///
    /// Panics on a label outside the column registry - labels originate
    /// from the registry-rendered header, so an unknown one is a
    /// collaborator defect, not user data.
    pub fn request_sort(&mut self, column_label: &str) {
        let field_key = self.registry.require_label(column_label).field_key.clone();
        self.sort.request(&field_key);
        debug!(
            "sort requested: {column_label} -> {:?} {:?}",
            self.sort.column, self.sort.direction
        );
    }

    /// The detail grid in current sort order, reference row pinned.
    pub fn detail_view(&self) -> DetailView {
        build_detail_view(&self.working_set, &self.registry, &self.sort)
    }

    /// The four-row aggregate grid over the current working set.
    pub fn aggregate_view(&self) -> AggregateView {
        build_aggregate_view(&self.registry, &self.aggregates)
    }

    /// The named-field row payload for delimited-text serialization.
    pub fn export_rows(&self) -> Vec<ExportRow> {
        to_delimited_rows(&self.working_set, &self.aggregates, &self.registry)
    }

    /// The 2-D cell payload for spreadsheet serialization.
    pub fn export_cells(&self) -> Vec<Vec<String>> {
        to_spreadsheet(&self.working_set, &self.aggregates, &self.registry)
    }

    /// The scroll controller shared by the two rendered surfaces.
    pub fn scroll_sync(&mut self) -> &mut ScrollSync {
        &mut self.scroll
    }

    pub fn working_set(&self) -> &WorkingSet {
        &self.working_set
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    pub fn aggregates(&self) -> &FxHashMap<String, AggregateStats> {
        &self.aggregates
    }

    pub fn registry(&self) -> &ColumnRegistry {
        &self.registry
    }

    /// Total, synchronous recompute of the aggregate map.
    fn recompute(&mut self) {
        self.aggregates = aggregate(&self.working_set, &self.registry);
        debug!("aggregates recomputed over {} records", self.working_set.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::SortDirection;

    fn engine_with(revenues: &[(&str, Option<f64>)]) -> CompsEngine {
        let records = revenues
            .iter()
            .map(|(ticker, revenue)| {
                let record = CompanyRecord::new(*ticker, "NYSE", format!("{ticker} Inc"));
                match revenue {
                    Some(v) => record.with_metric("revenue", *v),
                    None => record,
                }
            })
            .collect();
        CompsEngine::new(records, None)
    }

    #[test]
    fn test_removal_recomputes_aggregates() {
        let mut comps = engine_with(&[("A", Some(100.0)), ("B", None), ("C", Some(300.0))]);
        assert_eq!(comps.aggregates()["revenue"].mean, Some(200.0));

        comps.remove("C");
        let revenue = comps.aggregates()["revenue"];
        assert_eq!(revenue.low, Some(100.0));
        assert_eq!(revenue.high, Some(100.0));
        assert_eq!(revenue.median, Some(100.0));
        assert_eq!(revenue.mean, Some(100.0));
    }

    #[test]
    fn test_removing_everything_yields_unavailable() {
        let mut comps = engine_with(&[("A", Some(100.0)), ("B", Some(300.0))]);
        comps.remove("A");
        comps.remove("B");
        comps.remove("B"); // idempotent

        assert!(comps.working_set().is_empty());
        assert!(comps
            .aggregates()
            .values()
            .all(AggregateStats::is_unavailable));

        // Exports still emit the summary rows.
        assert_eq!(comps.export_rows().len(), 4);
    }

    #[test]
    fn test_sort_request_by_label_with_toggle() {
        let mut comps = engine_with(&[("A", Some(300.0)), ("B", Some(100.0))]);

        comps.request_sort("Revenue");
        assert_eq!(comps.sort_state().direction, SortDirection::Ascending);
        assert_eq!(comps.detail_view().rows[0].ticker, "B");

        comps.request_sort("Revenue");
        assert_eq!(comps.sort_state().direction, SortDirection::Descending);
        assert_eq!(comps.detail_view().rows[0].ticker, "A");

        comps.request_sort("Gross Margin");
        assert_eq!(comps.sort_state().column.as_deref(), Some("gross_margin"));
        assert_eq!(comps.sort_state().direction, SortDirection::Ascending);
    }

    #[test]
    #[should_panic(expected = "unknown column label")]
    fn test_unknown_sort_label_fails_loudly() {
        engine_with(&[("A", Some(1.0))]).request_sort("Share Price");
    }

    #[test]
    fn test_sort_does_not_disturb_aggregates_or_export_order() {
        let reference = CompanyRecord::new("REF", "NYSE", "Ref Co");
        let records = vec![
            CompanyRecord::new("A", "NYSE", "A Inc").with_metric("revenue", 300.0),
            CompanyRecord::new("B", "NYSE", "B Inc").with_metric("revenue", 100.0),
        ];
        let mut comps = CompsEngine::new(records, Some(reference));

        let before = comps.aggregates()["revenue"];
        comps.request_sort("Revenue");
        assert_eq!(comps.aggregates()["revenue"], before);

        // Export keeps reference-first arrival order regardless of sort.
        let rows = comps.export_rows();
        let names: Vec<&str> = rows
            .iter()
            .take(3)
            .map(|r| r.get("Company Name").unwrap())
            .collect();
        assert_eq!(names, vec!["Ref Co", "A Inc", "B Inc"]);
    }

    #[test]
    fn test_reference_never_in_view_always_in_export() {
        let reference = CompanyRecord::new("REF", "NYSE", "Ref Co");
        let records = vec![CompanyRecord::new("A", "NYSE", "A Inc")];
        let comps = CompsEngine::new(records, Some(reference));

        let view = comps.detail_view();
        assert!(view.rows.iter().all(|r| r.ticker != "REF"));
        assert_eq!(view.reference.as_ref().unwrap().ticker, "REF");

        let cells = comps.export_cells();
        assert_eq!(cells[1][0], "Ref Co");
    }
}
