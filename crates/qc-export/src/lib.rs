//! # qc-export
//!
//! Writes export rows built by `qc_core::export` to an `.xlsx` workbook with
//! a single `QC Data` sheet: a header row, then one row per export row, with
//! fixed column widths.

mod error;

pub use error::ExportError;

use std::path::Path;

use qc_core::export::{COLUMN_WIDTHS, CellValue, EXPORT_HEADERS, ExportRow, SHEET_NAME};
use rust_xlsxwriter::{Workbook, Worksheet};

fn fill_sheet(sheet: &mut Worksheet, rows: &[ExportRow]) -> Result<(), ExportError> {
    sheet.set_name(SHEET_NAME)?;

    for (col, (header, width)) in (0u16..).zip(EXPORT_HEADERS.iter().zip(COLUMN_WIDTHS)) {
        sheet.write_string(0, col, *header)?;
        sheet.set_column_width(col, width)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let line = u32::try_from(index + 1).map_err(|_| ExportError::TooManyRows(rows.len()))?;
        for (col, cell) in (0u16..).zip(row.cells()) {
            match cell {
                CellValue::Text(text) => sheet.write_string(line, col, text)?,
                CellValue::Number(number) => sheet.write_number(line, col, number)?,
            };
        }
    }
    Ok(())
}

fn build_workbook(rows: &[ExportRow]) -> Result<Workbook, ExportError> {
    let mut workbook = Workbook::new();
    fill_sheet(workbook.add_worksheet(), rows)?;
    Ok(workbook)
}

/// Write `rows` to a workbook at `path`.
///
/// # Errors
///
/// Returns `ExportError` if the workbook cannot be built or written.
pub fn write_workbook(rows: &[ExportRow], path: &Path) -> Result<(), ExportError> {
    let mut workbook = build_workbook(rows)?;
    workbook.save(path)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "wrote export workbook");
    Ok(())
}

/// Build the workbook in memory.
///
/// # Errors
///
/// Returns `ExportError` if the workbook cannot be built.
pub fn workbook_bytes(rows: &[ExportRow]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = build_workbook(rows)?;
    Ok(workbook.save_to_buffer()?)
}
