//! In-memory session state for processed files.
//!
//! Holds the processed-file list and the current preview selection for one
//! run, with explicit mutation entry points: append on success, clear on
//! demand, select on demand. Nothing survives the process.

use asc_model::ProcessedFile;

/// Maximum columns shown in a preview.
pub const PREVIEW_COLUMNS: usize = 8;

/// Maximum rows shown in a preview.
pub const PREVIEW_ROWS: usize = 10;

/// Processed files in arrival order plus the current preview selection.
#[derive(Debug, Default)]
pub struct Session {
    files: Vec<ProcessedFile>,
    selected: Option<usize>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a processed file; the first success becomes the selection.
    pub fn push(&mut self, file: ProcessedFile) {
        self.files.push(file);
        if self.selected.is_none() {
            self.selected = Some(self.files.len() - 1);
        }
    }

    /// Drops every processed file and the selection.
    pub fn clear(&mut self) {
        self.files.clear();
        self.selected = None;
    }

    /// Selects a file for preview; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.files.len() {
            self.selected = Some(index);
        }
    }

    pub fn selected(&self) -> Option<&ProcessedFile> {
        self.selected.and_then(|index| self.files.get(index))
    }

    pub fn files(&self) -> &[ProcessedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
