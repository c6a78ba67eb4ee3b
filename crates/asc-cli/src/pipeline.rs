//! File conversion pipeline with per-file failure isolation.
//!
//! Each file runs through read, parse, and coercion as one sequential step.
//! Batches are processed in order; a failed file is reported by name and
//! skipped without affecting its siblings.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{info, info_span, warn};

use asc_ingest::{IngestError, is_asc_file, read_asc_file, walk_asc_files};
use asc_model::ProcessedFile;
use asc_transform::coerce;

/// Output folder created next to a converted input when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "processed_output";

/// Runs one file through read, parse, and numeric coercion.
pub fn process_path(path: &Path) -> Result<ProcessedFile, IngestError> {
    let span = info_span!("process_file", source_file = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let parsed = read_asc_file(path)?;
    let coerced = coerce(&parsed);

    info!(
        source_file = %path.display(),
        output_file = %coerced.file_name,
        records = coerced.records.len(),
        columns = coerced.headers.len(),
        duration_ms = start.elapsed().as_millis(),
        "file processed"
    );
    Ok(coerced)
}

/// Expands files and directories into the ordered list of source files.
///
/// Directories are walked recursively for `.asc` entries; explicit file
/// arguments are taken as-is so a stray extension still converts, with a
/// warning. `exclude` keeps a run's own output directory out of the walk.
pub fn collect_inputs(
    inputs: &[PathBuf],
    exclude: Option<&Path>,
) -> Result<Vec<PathBuf>, IngestError> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            files.extend(walk_asc_files(input, exclude)?);
        } else {
            if !is_asc_file(input) {
                warn!(path = %input.display(), "input does not have the .asc extension");
            }
            files.push(input.clone());
        }
    }
    Ok(files)
}
