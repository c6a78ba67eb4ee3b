//! Error types for legacy file ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading and parsing source files.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file bytes.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Delimited record parsing failed.
    #[error("failed to parse {name}: {message}")]
    Parse { name: String, message: String },

    /// No non-blank line, so no header can be derived.
    #[error("file is empty: {name}")]
    EmptyFile { name: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
