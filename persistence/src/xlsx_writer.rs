//! FILENAME: persistence/src/xlsx_writer.rs

use crate::PersistenceError;
use log::debug;
use rust_xlsxwriter::Workbook as XlsxWorkbook;
use std::path::Path;

/// Worksheet name of the exported comparables table.
const SHEET_NAME: &str = "Companies";

/// Writes the 2-D cell payload to an XLSX file with a single worksheet.
///
/// Every cell is written as the pre-formatted string the engine produced,
/// so the file matches the on-screen table byte for byte.
pub fn save_xlsx(cells: &[Vec<String>], path: &Path) -> Result<(), PersistenceError> {
    let mut xlsx = XlsxWorkbook::new();
    let worksheet = xlsx.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (row, row_cells) in cells.iter().enumerate() {
        for (col, value) in row_cells.iter().enumerate() {
            worksheet.write_string(row as u32, col as u16, value)?;
        }
    }

    xlsx.save(path)?;
    debug!("wrote {} spreadsheet rows to {}", cells.len(), path.display());
    Ok(())
}
