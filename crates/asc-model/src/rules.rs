//! Numeric-intent column detection.
//!
//! The legacy accounting exports name monetary and quantity columns with a
//! small fixed vocabulary. Matching is on the column name only and is decided
//! once per column, never per value.

/// Name prefixes that mark a column as numeric.
pub const NUMERIC_NAME_PREFIXES: [&str; 5] = ["Total", "Valor", "Peso", "Importe", "Cantidad"];

/// Exact column names coerced even when no prefix matches.
pub const NUMERIC_COLUMN_NAMES: [&str; 6] = [
    "TotalFletes",
    "TotalSeguros",
    "TotalEmbalajes",
    "TotalIncrementables",
    "TotalDeducibles",
    "PesoBrutoMercancia",
];

/// True when the column's values are rewritten to numbers.
pub fn is_numeric_column(name: &str) -> bool {
    NUMERIC_NAME_PREFIXES
        .iter()
        .any(|prefix| name.starts_with(prefix))
        || NUMERIC_COLUMN_NAMES.contains(&name)
}
