//! Excel report exporter

use crate::error::{SheetError, SheetResult};
use crate::types::{Comparison, ListingEntry, PriceChange, Table};
use rust_xlsxwriter::{Format, Formula, Workbook, Worksheet};
use std::path::Path;

/// Writes a comparison as an `.xlsx` workbook.
///
/// Sheets: `Add`, `Delete`, `Price Changes` (only when both tables have a
/// price column) and `Export`. Only the two synthesized reference columns of
/// the export are written as formulas; every other cell stays text, even when
/// it happens to start with `=`.
pub struct ReportExporter<'a> {
    comparison: &'a Comparison,
}

impl<'a> ReportExporter<'a> {
    pub fn new(comparison: &'a Comparison) -> Self {
        Self { comparison }
    }

    pub fn export(&self, output_path: &Path) -> SheetResult<()> {
        let mut workbook = self.build()?;
        workbook
            .save(output_path)
            .map_err(|e| SheetError::Export(format!("Failed to save Excel file: {}", e)))?;
        Ok(())
    }

    fn build(&self) -> SheetResult<Workbook> {
        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();

        let sheet = new_sheet(&mut workbook, "Add")?;
        write_listing(sheet, &self.comparison.add_list(), &header)?;

        let sheet = new_sheet(&mut workbook, "Delete")?;
        write_listing(sheet, &self.comparison.delete_list(), &header)?;

        if let Some(changes) = &self.comparison.price_changes {
            let sheet = new_sheet(&mut workbook, "Price Changes")?;
            write_price_changes(sheet, changes, &header)?;
        }

        let sheet = new_sheet(&mut workbook, "Export")?;
        write_export(
            sheet,
            &self.comparison.export,
            &self.comparison.formula_columns,
            &header,
        )?;

        Ok(workbook)
    }
}

fn new_sheet<'w>(workbook: &'w mut Workbook, name: &str) -> SheetResult<&'w mut Worksheet> {
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(name)
        .map_err(|e| SheetError::Export(format!("Failed to set worksheet name: {}", e)))?;
    Ok(worksheet)
}

fn write_header(worksheet: &mut Worksheet, names: &[&str], format: &Format) -> SheetResult<()> {
    for (col, name) in names.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *name, format)
            .map_err(|e| SheetError::Export(format!("Failed to write header: {}", e)))?;
    }
    Ok(())
}

fn write_text(worksheet: &mut Worksheet, row: u32, col: u16, text: &str) -> SheetResult<()> {
    worksheet
        .write_string(row, col, text)
        .map_err(|e| SheetError::Export(format!("Failed to write text: {}", e)))?;
    Ok(())
}

fn write_listing(
    worksheet: &mut Worksheet,
    entries: &[ListingEntry],
    header: &Format,
) -> SheetResult<()> {
    worksheet.set_column_width(0, 16).ok();
    worksheet.set_column_width(1, 40).ok();
    write_header(worksheet, &["Product ID", "Description"], header)?;

    for (i, entry) in entries.iter().enumerate() {
        let row = (i + 1) as u32;
        write_text(worksheet, row, 0, &entry.id)?;
        write_text(worksheet, row, 1, &entry.description)?;
    }
    Ok(())
}

fn write_price_changes(
    worksheet: &mut Worksheet,
    changes: &[PriceChange],
    header: &Format,
) -> SheetResult<()> {
    worksheet.set_column_width(0, 16).ok();
    worksheet.set_column_width(1, 40).ok();
    write_header(
        worksheet,
        &["Product ID", "Description", "New Price", "Old Price"],
        header,
    )?;

    for (i, change) in changes.iter().enumerate() {
        let row = (i + 1) as u32;
        write_text(worksheet, row, 0, &change.id)?;
        write_text(worksheet, row, 1, &change.description)?;
        write_text(worksheet, row, 2, &change.new_price)?;
        write_text(worksheet, row, 3, &change.old_price)?;
    }
    Ok(())
}

/// Whether an export cell goes into the workbook as a formula.
fn writes_as_formula(col: usize, cell: &str, formula_columns: &[usize; 2]) -> bool {
    formula_columns.contains(&col) && cell.starts_with('=')
}

fn write_export(
    worksheet: &mut Worksheet,
    table: &Table,
    formula_columns: &[usize; 2],
    header: &Format,
) -> SheetResult<()> {
    let names: Vec<&str> = table.columns().iter().map(String::as_str).collect();
    write_header(worksheet, &names, header)?;

    for (i, cells) in table.rows().iter().enumerate() {
        let row = (i + 1) as u32;
        for (col, cell) in cells.iter().enumerate() {
            let is_formula = writes_as_formula(col, cell, formula_columns);
            let col = col as u16;
            if is_formula {
                worksheet
                    .write_formula(row, col, Formula::new(cell))
                    .map_err(|e| SheetError::Export(format!("Failed to write formula: {}", e)))?;
            } else if !cell.is_empty() {
                write_text(worksheet, row, col, cell)?;
            }
        }
    }
    Ok(())
}
