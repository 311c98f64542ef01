//! FILENAME: comps-engine/src/lib.rs
//! Comparable-set table & analytics engine.
//!
//! This crate maintains a mutable working set of company records and
//! derives everything the table UI needs from it. It depends on `engine`
//! for shared record types, the column registry, and value formatting.
//!
//! Layers:
//! - `definition`: Serializable transient state (sort, summary-row order)
//! - `working_set`: The canonical record list (WHAT we analyze)
//! - `aggregate` / `sort`: Derived computations (HOW we calculate)
//! - `view`: Renderable output for the frontend (WHAT we display)
//! - `export`: Delimited-row and spreadsheet payloads
//! - `scroll`: Horizontal lockstep between the two rendered surfaces
//! - `engine`: The orchestrating state machine tying it all together

pub mod aggregate;
pub mod definition;
pub mod engine;
pub mod export;
pub mod scroll;
pub mod sort;
pub mod view;
pub mod working_set;

pub use aggregate::{aggregate, AggregateStats};
pub use definition::{SortDirection, SortState, SummaryRow};
pub use engine::CompsEngine;
pub use export::{
    delimited_headers, to_delimited_rows, to_spreadsheet, ExportField, ExportRow,
    DESCRIPTION_HEADER, NAME_HEADER,
};
pub use scroll::{ScrollAssignment, ScrollSurface, ScrollSync};
pub use sort::{sorted_indices, sorted_records};
pub use view::{AggregateRow, AggregateView, DetailRow, DetailView, HeaderGroup};
pub use working_set::WorkingSet;
