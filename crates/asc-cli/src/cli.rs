//! CLI argument definitions for the ASC converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "asc-studio",
    version,
    about = "ASC Studio - Convert pipe-delimited accounting files to Excel",
    long_about = "Convert legacy pipe-delimited accounting exports (.asc) to .xlsx workbooks.\n\n\
                  Files are decoded as Windows-1252, columns with numeric naming\n\
                  conventions become numbers, and each file turns into a\n\
                  single-sheet workbook."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert .asc files (or folders of them) to .xlsx workbooks.
    Convert(ConvertArgs),

    /// Parse one file and print a preview without writing output.
    Preview(PreviewArgs),

    /// Consolidate a file by key, summing one numeric column.
    Aggregate(AggregateArgs),

    /// List the column-name rules that trigger numeric conversion.
    Rules,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Files or directories to convert; directories are searched recursively.
    #[arg(value_name = "INPUTS", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output directory (default: processed_output next to each input).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Process and summarize without writing workbooks.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print a preview of the first converted file.
    #[arg(long = "preview")]
    pub preview: bool,
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// File to preview.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Maximum rows to show.
    #[arg(long = "rows", default_value_t = 10)]
    pub rows: usize,

    /// Maximum columns to show.
    #[arg(long = "cols", default_value_t = 8)]
    pub cols: usize,
}

#[derive(Parser)]
pub struct AggregateArgs {
    /// File to consolidate.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Column whose values group the rows.
    #[arg(long = "key", default_value = "Pedimento")]
    pub key: String,

    /// Numeric column summed per key.
    #[arg(long = "value", default_value = "PrecioUnitario")]
    pub value: String,

    /// Output directory (default: alongside the input file).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
