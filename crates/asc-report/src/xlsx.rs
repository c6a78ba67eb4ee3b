//! Workbook writing via `rust_xlsxwriter`.
//!
//! The adapter only shapes headers and records into rows; the container
//! format itself is the library's concern. Writes are fire-and-forget, with
//! no round-trip validation of the artifact.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use asc_model::{CellValue, ProcessedFile};

use crate::error::{ReportError, Result};

/// Sheet label used for converted files.
pub const SHEET_NAME: &str = "Datos";

/// Sheet labels of the aggregation workbook, in order.
pub const AGGREGATE_SHEETS: [&str; 3] = ["original", "agregado", "final"];

/// Writes one converted file as a single-sheet workbook.
///
/// The artifact lands at `output_dir/<file_name>`, with the directory created
/// on demand. Returns the artifact path.
pub fn write_workbook(file: &ProcessedFile, output_dir: &Path) -> Result<PathBuf> {
    let path = prepare_output_path(output_dir, &file.file_name)?;

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    write_sheet(sheet, SHEET_NAME, file).map_err(|error| workbook_error(&path, &error))?;
    workbook
        .save(&path)
        .map_err(|error| workbook_error(&path, &error))?;

    tracing::debug!(
        path = %path.display(),
        rows = file.records.len(),
        columns = file.headers.len(),
        "workbook written"
    );
    Ok(path)
}

/// Writes the three-sheet aggregation workbook: the full table, the per-key
/// totals, and the merged one-row-per-key table.
pub fn write_aggregate_workbook(
    original: &ProcessedFile,
    totals: &ProcessedFile,
    merged: &ProcessedFile,
    file_name: &str,
    output_dir: &Path,
) -> Result<PathBuf> {
    let path = prepare_output_path(output_dir, file_name)?;

    let mut workbook = Workbook::new();
    for (name, table) in AGGREGATE_SHEETS.iter().zip([original, totals, merged]) {
        let sheet = workbook.add_worksheet();
        write_sheet(sheet, name, table).map_err(|error| workbook_error(&path, &error))?;
    }
    workbook
        .save(&path)
        .map_err(|error| workbook_error(&path, &error))?;

    tracing::debug!(path = %path.display(), keys = totals.records.len(), "aggregation workbook written");
    Ok(path)
}

fn prepare_output_path(output_dir: &Path, file_name: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir).map_err(|error| ReportError::CreateDir {
        path: output_dir.to_path_buf(),
        source: error,
    })?;
    Ok(output_dir.join(file_name))
}

fn write_sheet(sheet: &mut Worksheet, name: &str, file: &ProcessedFile) -> std::result::Result<(), XlsxError> {
    sheet.set_name(name)?;

    let bold = Format::new().set_bold();
    for (col, header) in file.headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, header, &bold)?;
    }

    for (row, record) in file.records.iter().enumerate() {
        let row = (row + 1) as u32;
        for (col, header) in file.headers.iter().enumerate() {
            let col = col as u16;
            match record.get(header) {
                Some(CellValue::Number(value)) => {
                    sheet.write_number(row, col, *value)?;
                }
                Some(CellValue::Text(value)) => {
                    sheet.write_string(row, col, value)?;
                }
                None => {}
            }
        }
    }

    Ok(())
}

fn workbook_error(path: &Path, error: &XlsxError) -> ReportError {
    ReportError::Workbook {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}
