//! Legacy accounting file ingestion.
//!
//! - **decode**: Windows-1252 byte decoding (total over all byte values)
//! - **parser**: pipe-delimited record parsing with header derivation
//! - **discovery**: recursive `.asc` file discovery

pub mod decode;
pub mod discovery;
pub mod error;
pub mod parser;

pub use decode::decode_windows_1252;
pub use discovery::{is_asc_file, walk_asc_files};
pub use error::{IngestError, Result};
pub use parser::{DELIMITER, parse_bytes, read_asc_file};
