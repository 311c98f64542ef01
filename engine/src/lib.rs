//! FILENAME: engine/src/lib.rs
//! PURPOSE: Main library entry point for the shared comparables types.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod format;
pub mod record;
pub mod registry;

// Re-export commonly used types at the crate root
pub use format::{classify_field_key, format_currency, format_metric, FormatClass};
pub use record::{CompanyRecord, MetricValue};
pub use registry::{ColumnRegistry, ColumnSpec, GroupSpan};
