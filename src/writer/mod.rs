//! Export table writer
//!
//! Serializes the export table as comma-separated text: header row first,
//! no index column, quoting only where a field needs it.

use crate::error::{SheetError, SheetResult};
use crate::types::Table;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Write `table` as CSV to any writer.
pub fn write_export_csv<W: Write>(table: &Table, writer: W) -> SheetResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer
        .write_record(table.columns())
        .map_err(|e| SheetError::Export(format!("Failed to write header: {}", e)))?;

    for row in table.rows() {
        csv_writer
            .write_record(row)
            .map_err(|e| SheetError::Export(format!("Failed to write row: {}", e)))?;
    }

    csv_writer
        .flush()
        .map_err(|e| SheetError::Export(format!("Failed to flush output: {}", e)))?;
    Ok(())
}

/// Render `table` as CSV text (used for downloads over the API).
pub fn export_to_string(table: &Table) -> SheetResult<String> {
    let mut buffer = Vec::new();
    write_export_csv(table, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| SheetError::Export(e.to_string()))
}

/// Write `table` to a CSV file, replacing any existing file.
pub fn write_export_file(table: &Table, path: &Path) -> SheetResult<()> {
    let file = fs::File::create(path).map_err(|e| {
        SheetError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;
    write_export_csv(table, std::io::BufWriter::new(file))
}
