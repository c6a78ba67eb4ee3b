//! Source file discovery.

use std::path::{Path, PathBuf};

use asc_model::SOURCE_EXTENSION;

use crate::error::{IngestError, Result};

/// True for names ending in `.asc`, any case.
pub fn is_asc_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(SOURCE_EXTENSION))
        .unwrap_or(false)
}

/// Walks a directory tree for `.asc` files, sorted by path.
///
/// `exclude` is skipped entirely so a previous run's output folder is not
/// picked up when it lives inside the input tree.
pub fn walk_asc_files(dir: &Path, exclude: Option<&Path>) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    walk_into(dir, exclude, &mut files)?;
    files.sort();
    Ok(files)
}

fn walk_into(dir: &Path, exclude: Option<&Path>, files: &mut Vec<PathBuf>) -> Result<()> {
    if exclude.is_some_and(|skip| dir == skip) {
        return Ok(());
    }

    let entries = std::fs::read_dir(dir).map_err(|error| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: error,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|error| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: error,
        })?;
        let path = entry.path();
        if path.is_dir() {
            walk_into(&path, exclude, files)?;
        } else if is_asc_file(&path) {
            files.push(path);
        }
    }

    Ok(())
}
