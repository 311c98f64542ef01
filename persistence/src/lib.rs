//! FILENAME: persistence/src/lib.rs
//! One-shot writers for the engine's export payloads: delimited text from
//! the named-field rows, XLSX from the 2-D cell array. The engine formats,
//! this crate only serializes - the two outputs must never diverge from
//! the on-screen table.

pub mod csv_writer;
pub mod error;
pub mod xlsx_writer;

pub use csv_writer::{csv_string, save_csv};
pub use error::PersistenceError;
pub use xlsx_writer::save_xlsx;
