//! Workbook output for converted accounting tables.

pub mod error;
pub mod xlsx;

pub use error::{ReportError, Result};
pub use xlsx::{AGGREGATE_SHEETS, SHEET_NAME, write_aggregate_workbook, write_workbook};
