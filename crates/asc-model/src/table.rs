use std::collections::BTreeMap;
use std::fmt;

/// A single field value.
///
/// Parsing produces `Text` for every field; the coercion pass rewrites
/// numeric-named columns to `Number`. Text values keep their original
/// whitespace.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl CellValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value),
            CellValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Text(_) => None,
            CellValue::Number(value) => Some(*value),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(value) => f.write_str(value),
            CellValue::Number(value) => write!(f, "{value}"),
        }
    }
}

/// One parsed data row, keyed by header column names.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    pub cells: BTreeMap<String, CellValue>,
}

impl Record {
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    pub fn insert(&mut self, column: String, value: CellValue) {
        self.cells.insert(column, value);
    }
}

/// The converted output for one source file: derived artifact name, ordered
/// header, and one record per non-blank data line.
///
/// Column order always comes from `headers`; the cell map is never iterated
/// for rendering or export.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProcessedFile {
    pub file_name: String,
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

impl ProcessedFile {
    pub fn new(file_name: String, headers: Vec<String>) -> Self {
        Self {
            file_name,
            headers,
            records: Vec::new(),
        }
    }

    pub fn push_record(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}
