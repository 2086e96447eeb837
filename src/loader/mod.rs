//! CSV loading and normalization
//!
//! Turns raw uploaded bytes into a [`Table`]: the first record is the
//! schema, every cell stays text, and rows without a product ID are dropped.

use crate::error::{SheetError, SheetResult, TableSide};
use crate::layout::Layout;
use crate::types::Table;
use csv::StringRecord;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::debug;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parse one uploaded catalog.
///
/// Fails when the input holds no header row, is not valid UTF-8, or has a
/// data row wider than the header. Nothing is recovered from a failed parse.
pub fn load_table(input: &[u8], side: TableSide, layout: &Layout) -> SheetResult<Table> {
    let input = input.strip_prefix(UTF8_BOM).unwrap_or(input);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut record = StringRecord::new();
    let mut record_index: u64 = 0;

    let has_header = reader
        .read_record(&mut record)
        .map_err(|e| SheetError::from_csv(side, e, record_index + 1))?;
    if !has_header {
        return Err(SheetError::EmptyInput { table: side });
    }
    record_index += 1;

    let columns = header_names(&record);
    let width = columns.len();
    let missing: HashSet<&str> = layout.missing_markers.iter().map(String::as_str).collect();

    let mut table = Table::new(columns);
    let mut dropped = 0usize;

    loop {
        match reader.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {
                record_index += 1;
                if record.len() > width {
                    return Err(SheetError::Parse {
                        table: side,
                        row: record_index,
                        reason: format!("expected {} fields, saw {}", width, record.len()),
                    });
                }

                let row: Vec<String> = record
                    .iter()
                    .map(|field| {
                        if missing.contains(field) {
                            String::new()
                        } else {
                            field.to_string()
                        }
                    })
                    .collect();

                if has_identifier(&row) {
                    table.push_row(row);
                } else {
                    dropped += 1;
                }
            }
            Err(e) => return Err(SheetError::from_csv(side, e, record_index + 1)),
        }
    }

    debug!(
        table = %side,
        columns = table.column_count(),
        rows = table.row_count(),
        dropped,
        "loaded table"
    );

    Ok(table)
}

/// Read and parse a catalog from disk.
pub fn load_table_from_path(path: &Path, side: TableSide, layout: &Layout) -> SheetResult<Table> {
    let bytes = std::fs::read(path)?;
    load_table(&bytes, side, layout)
}

/// A row is kept only if column 0 holds something besides whitespace.
fn has_identifier(row: &[String]) -> bool {
    row.first().is_some_and(|id| !id.trim().is_empty())
}

/// Column names from the header record.
///
/// Blank names become `Unnamed: <position>`. A repeated name gets `.<n>`
/// appended, where `n` counts earlier uses; a renamed column that collides
/// again is suffixed in turn (`Price`, `Price`, `Price.1` becomes `Price`,
/// `Price.1`, `Price.1.1`).
fn header_names(record: &StringRecord) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    record
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let mut name = if name.is_empty() {
                format!("Unnamed: {}", i)
            } else {
                name.to_string()
            };

            let mut count = counts.get(&name).copied().unwrap_or(0);
            while count > 0 {
                counts.insert(name.clone(), count + 1);
                name = format!("{}.{}", name, count);
                count = counts.get(&name).copied().unwrap_or(0);
            }
            counts.insert(name.clone(), count + 1);
            name
        })
        .collect()
}
