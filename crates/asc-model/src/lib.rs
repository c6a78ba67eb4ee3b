//! Data model for converted accounting files.

pub mod naming;
pub mod rules;
pub mod table;

pub use naming::{OUTPUT_EXTENSION, SOURCE_EXTENSION, output_file_name};
pub use rules::{NUMERIC_COLUMN_NAMES, NUMERIC_NAME_PREFIXES, is_numeric_column};
pub use table::{CellValue, ProcessedFile, Record};
