//! Pipe-delimited record parsing.

use std::path::Path;

use csv::ReaderBuilder;

use asc_model::{CellValue, ProcessedFile, Record, output_file_name};

use crate::decode::decode_windows_1252;
use crate::error::{IngestError, Result};

/// Field delimiter used by the legacy export format.
pub const DELIMITER: u8 = b'|';

/// Parses raw file bytes into a [`ProcessedFile`] of text records.
///
/// The buffer is decoded as Windows-1252 and split into `|`-delimited
/// records. Lines that are empty, whitespace-only, or whose every field is
/// blank are skipped. The first surviving line becomes the header, with each
/// name trimmed of the padding the fixed-width exports carry. Data lines are
/// zipped positionally against the header: missing trailing fields read as
/// empty strings and extra trailing fields are dropped. Data cells are not
/// trimmed. The format has no quoting, so fields are taken verbatim.
pub fn parse_bytes(bytes: &[u8], file_name: &str) -> Result<ProcessedFile> {
    let text = decode_windows_1252(bytes);

    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| IngestError::Parse {
            name: file_name.to_string(),
            message: error.to_string(),
        })?;
        let row: Vec<String> = record.iter().map(str::to_string).collect();
        if row.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        rows.push(row);
    }

    let Some((header_row, data_rows)) = rows.split_first() else {
        return Err(IngestError::EmptyFile {
            name: file_name.to_string(),
        });
    };

    // Per-position trimmed names drive the zip; the public header list keeps
    // only the first occurrence of each distinct name.
    let column_names: Vec<String> = header_row
        .iter()
        .map(|field| field.trim().to_string())
        .collect();
    let mut headers: Vec<String> = Vec::with_capacity(column_names.len());
    for name in &column_names {
        if !headers.contains(name) {
            headers.push(name.clone());
        }
    }

    let mut file = ProcessedFile::new(output_file_name(file_name), headers);
    for row in data_rows {
        let mut record = Record::default();
        for (idx, name) in column_names.iter().enumerate() {
            let value = row.get(idx).map(String::as_str).unwrap_or("");
            record.insert(name.clone(), CellValue::Text(value.to_string()));
        }
        file.push_record(record);
    }

    tracing::debug!(
        file_name,
        columns = file.headers.len(),
        records = file.records.len(),
        "file parsed"
    );
    Ok(file)
}

/// Reads and parses one source file from disk.
pub fn read_asc_file(path: &Path) -> Result<ProcessedFile> {
    let bytes = std::fs::read(path).map_err(|error| {
        if error.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: error,
            }
        }
    })?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("unknown");
    parse_bytes(&bytes, file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn text_value(file: &ProcessedFile, row: usize, column: &str) -> String {
        file.records[row]
            .get(column)
            .and_then(CellValue::as_text)
            .unwrap_or_default()
            .to_string()
    }

    #[test]
    fn parses_header_and_records() {
        let file = parse_bytes(b"Nombre|TotalFletes\nAna|1,000\n\nLuis|abc\n", "datos.asc")
            .expect("parse");

        assert_eq!(file.file_name, "datos.xlsx");
        assert_eq!(file.headers, vec!["Nombre", "TotalFletes"]);
        assert_eq!(file.record_count(), 2);
        assert_eq!(text_value(&file, 0, "Nombre"), "Ana");
        assert_eq!(text_value(&file, 0, "TotalFletes"), "1,000");
        assert_eq!(text_value(&file, 1, "Nombre"), "Luis");
        assert_eq!(text_value(&file, 1, "TotalFletes"), "abc");
    }

    #[test]
    fn trims_padded_header_names_only() {
        let file = parse_bytes(b"  Nombre  | Total \nAna |  7 \n", "datos.asc").expect("parse");

        assert_eq!(file.headers, vec!["Nombre", "Total"]);
        // Data cells keep their padding.
        assert_eq!(text_value(&file, 0, "Nombre"), "Ana ");
        assert_eq!(text_value(&file, 0, "Total"), "  7 ");
    }

    #[test]
    fn skips_blank_and_whitespace_lines() {
        let input = b"A|B\n\n   \n \t \nuno|dos\n | \n";
        let file = parse_bytes(input, "datos.asc").expect("parse");
        assert_eq!(file.record_count(), 1);
    }

    #[test]
    fn skips_blank_lines_before_header() {
        let file = parse_bytes(b"\n  \nA|B\n1|2\n", "datos.asc").expect("parse");
        assert_eq!(file.headers, vec!["A", "B"]);
        assert_eq!(file.record_count(), 1);
    }

    #[test]
    fn pads_short_rows_and_drops_extras() {
        let file = parse_bytes(b"A|B|C\nuno\nuno|dos|tres|cuatro\n", "datos.asc").expect("parse");

        assert_eq!(text_value(&file, 0, "A"), "uno");
        assert_eq!(text_value(&file, 0, "B"), "");
        assert_eq!(text_value(&file, 0, "C"), "");
        assert_eq!(text_value(&file, 1, "C"), "tres");
        assert_eq!(file.records[1].cells.len(), 3);
    }

    #[test]
    fn deduplicates_header_names_last_value_wins() {
        let file = parse_bytes(b"A|B|A\nuno|dos|tres\n", "datos.asc").expect("parse");

        assert_eq!(file.headers, vec!["A", "B"]);
        assert_eq!(text_value(&file, 0, "A"), "tres");
        assert_eq!(text_value(&file, 0, "B"), "dos");
    }

    #[test]
    fn decodes_windows_1252_data() {
        // "Ángel" with 0xC1, "Año" with 0xF1 would be ñ; use 0xF1 in a cell.
        let input = [
            b'N', b'o', b'm', b'b', b'r', b'e', b'\n', 0xC1, b'n', b'g', b'e', b'l', b'\n',
        ];
        let file = parse_bytes(&input, "datos.asc").expect("parse");
        assert_eq!(text_value(&file, 0, "Nombre"), "Ángel");
    }

    #[test]
    fn handles_crlf_line_endings() {
        let file = parse_bytes(b"A|B\r\n1|2\r\n", "datos.asc").expect("parse");
        assert_eq!(file.headers, vec!["A", "B"]);
        assert_eq!(text_value(&file, 0, "B"), "2");
    }

    #[test]
    fn empty_input_is_an_error() {
        let result = parse_bytes(b"", "datos.asc");
        assert!(matches!(result, Err(IngestError::EmptyFile { .. })));

        let result = parse_bytes(b"\n  \n\n", "datos.asc");
        assert!(matches!(result, Err(IngestError::EmptyFile { .. })));
    }

    #[test]
    fn read_asc_file_round_trip() {
        let mut file = NamedTempFile::with_suffix(".asc").expect("temp file");
        file.write_all(b"Nombre|Total\nAna|5\n").expect("write");

        let parsed = read_asc_file(file.path()).expect("read");
        assert_eq!(parsed.headers, vec!["Nombre", "Total"]);
        assert_eq!(parsed.record_count(), 1);
        assert!(parsed.file_name.ends_with(".xlsx"));
    }

    #[test]
    fn read_asc_file_missing_path() {
        let result = read_asc_file(Path::new("/no/such/file.asc"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
