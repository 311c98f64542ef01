//! FILENAME: persistence/src/csv_writer.rs

use crate::PersistenceError;
use comps_engine::ExportRow;
use log::debug;
use std::path::Path;

/// Serializes the named-field rows to delimited text under the given
/// header order.
///
/// Headers a row lacks (the summary rows carry no description field)
/// serialize as empty cells. Fields containing the delimiter, a quote, or a
/// line break are quoted with doubled inner quotes; everything else is
/// emitted bare. Lines end with `\n`, including the last.
pub fn csv_string(headers: &[String], rows: &[ExportRow]) -> String {
    let mut out = String::new();

    write_line(&mut out, headers.iter().map(String::as_str));

    for row in rows {
        write_line(
            &mut out,
            headers.iter().map(|h| row.get(h).unwrap_or_default()),
        );
    }

    out
}

/// Serializes and writes the rows to a file in one shot.
pub fn save_csv(
    headers: &[String],
    rows: &[ExportRow],
    path: &Path,
) -> Result<(), PersistenceError> {
    let text = csv_string(headers, rows);
    std::fs::write(path, text)?;
    debug!("wrote {} csv rows to {}", rows.len(), path.display());
    Ok(())
}

fn write_line<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    for (i, field) in fields.enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_field(out, field);
    }
    out.push('\n');
}

fn push_field(out: &mut String, field: &str) {
    let needs_quoting = field.contains(',')
        || field.contains('"')
        || field.contains('\n')
        || field.contains('\r');

    if !needs_quoting {
        out.push_str(field);
        return;
    }

    out.push('"');
    for c in field.chars() {
        if c == '"' {
            out.push('"');
        }
        out.push(c);
    }
    out.push('"');
}
