//! Error types for workbook output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing output workbooks.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Failed to create the output directory.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Workbook construction or save failed.
    #[error("failed to write workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, ReportError>;
