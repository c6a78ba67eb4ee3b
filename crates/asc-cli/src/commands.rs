use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span, warn};

use asc_cli::pipeline::{DEFAULT_OUTPUT_DIR, collect_inputs, process_path};
use asc_cli::session::{PREVIEW_COLUMNS, PREVIEW_ROWS, Session};
use asc_model::{NUMERIC_COLUMN_NAMES, NUMERIC_NAME_PREFIXES};
use asc_report::{write_aggregate_workbook, write_workbook};
use asc_transform::aggregate_by_key;

use crate::cli::{AggregateArgs, ConvertArgs, PreviewArgs};
use crate::summary::{apply_table_style, header_cell, print_preview};
use crate::types::{BatchResult, FileSummary};

pub fn run_convert(args: &ConvertArgs) -> Result<BatchResult> {
    let batch_span = info_span!("convert");
    let _batch_guard = batch_span.enter();
    let start = Instant::now();

    let mut session = Session::new();
    let mut summaries = Vec::new();
    let mut errors = Vec::new();

    for input in &args.inputs {
        let output_dir = match &args.output_dir {
            Some(dir) => dir.clone(),
            None => default_output_dir(input),
        };

        let files = match collect_inputs(std::slice::from_ref(input), Some(output_dir.as_path())) {
            Ok(files) => files,
            Err(error) => {
                errors.push(format!("{}: {error}", input.display()));
                continue;
            }
        };
        if files.is_empty() {
            warn!(path = %input.display(), "no .asc files found");
            continue;
        }

        for path in files {
            match process_path(&path) {
                Ok(file) => {
                    let output = if args.dry_run {
                        None
                    } else {
                        match write_workbook(&file, &output_dir) {
                            Ok(artifact) => Some(artifact),
                            Err(error) => {
                                errors.push(format!("{}: {error}", path.display()));
                                continue;
                            }
                        }
                    };
                    summaries.push(FileSummary {
                        source: path.clone(),
                        output,
                        records: file.record_count(),
                        columns: file.headers.len(),
                    });
                    session.push(file);
                }
                Err(error) => errors.push(format!("{}: {error}", path.display())),
            }
        }
    }

    if args.preview
        && let Some(file) = session.selected()
    {
        print_preview(file, PREVIEW_ROWS, PREVIEW_COLUMNS);
    }

    info!(
        converted = session.len(),
        failed = errors.len(),
        duration_ms = start.elapsed().as_millis(),
        "batch complete"
    );
    Ok(BatchResult { summaries, errors })
}

pub fn run_preview(args: &PreviewArgs) -> Result<()> {
    let file = process_path(&args.file)
        .with_context(|| format!("process {}", args.file.display()))?;
    print_preview(&file, args.rows, args.cols);
    Ok(())
}

pub fn run_aggregate(args: &AggregateArgs) -> Result<()> {
    let file = process_path(&args.file)
        .with_context(|| format!("process {}", args.file.display()))?;
    let result = aggregate_by_key(&file, &args.key, &args.value)
        .with_context(|| format!("aggregate {}", args.file.display()))?;

    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => args
            .file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    let file_name = aggregate_file_name(&file.file_name);
    let artifact =
        write_aggregate_workbook(&file, &result.totals, &result.merged, &file_name, &output_dir)?;

    println!("Aggregated workbook: {}", artifact.display());
    println!(
        "Keys: {} (from {} records)",
        result.totals.record_count(),
        file.record_count()
    );
    Ok(())
}

pub fn run_rules() {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rule"), header_cell("Pattern")]);
    apply_table_style(&mut table);
    for prefix in NUMERIC_NAME_PREFIXES {
        table.add_row(vec!["Prefix".to_string(), format!("{prefix}*")]);
    }
    for name in NUMERIC_COLUMN_NAMES {
        table.add_row(vec!["Exact".to_string(), name.to_string()]);
    }
    println!("{table}");
}

fn default_output_dir(input: &Path) -> PathBuf {
    if input.is_dir() {
        input.join(DEFAULT_OUTPUT_DIR)
    } else {
        input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_OUTPUT_DIR)
    }
}

/// `datos.xlsx` -> `datos_with_aggregation.xlsx`.
fn aggregate_file_name(file_name: &str) -> String {
    let stem = file_name.strip_suffix(".xlsx").unwrap_or(file_name);
    format!("{stem}_with_aggregation.xlsx")
}
