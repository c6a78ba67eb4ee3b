//! Numeric coercion for accounting columns.

use asc_model::{CellValue, ProcessedFile, is_numeric_column};

/// Converts one formatted amount to its numeric value.
///
/// Thousands separators (commas) are removed and the rest is parsed as a
/// base-10 float, ignoring the padding the fixed-width exports add around
/// amounts. Blank and unparseable values collapse to 0 so numeric columns
/// are numeric in every output row.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw.chars().filter(|&ch| ch != ',').collect();
    match cleaned.trim().parse::<f64>() {
        Ok(value) if !value.is_nan() => value,
        _ => 0.0,
    }
}

/// Rewrites numeric-named columns to `Number` values.
///
/// Pure pass: the output carries the same headers and one record per input
/// record. Column classification happens once per header, so the result does
/// not depend on record order. Values that are already numeric pass through
/// untouched, which makes the pass idempotent. Other columns keep their text
/// verbatim, padding included.
pub fn coerce(input: &ProcessedFile) -> ProcessedFile {
    let numeric_columns: Vec<&String> = input
        .headers
        .iter()
        .filter(|name| is_numeric_column(name))
        .collect();

    let mut output = ProcessedFile::new(input.file_name.clone(), input.headers.clone());
    for record in &input.records {
        let mut coerced = record.clone();
        for name in &numeric_columns {
            let value = match record.get(name) {
                Some(CellValue::Number(number)) => CellValue::Number(*number),
                Some(CellValue::Text(raw)) => CellValue::Number(parse_amount(raw)),
                None => CellValue::Number(0.0),
            };
            coerced.insert((*name).clone(), value);
        }
        output.push_record(coerced);
    }

    tracing::debug!(
        file_name = %output.file_name,
        numeric_columns = numeric_columns.len(),
        records = output.records.len(),
        "numeric coercion applied"
    );
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use asc_model::Record;
    use proptest::prelude::*;

    fn file_with(column: &str, values: &[&str]) -> ProcessedFile {
        let mut file = ProcessedFile::new("datos.xlsx".to_string(), vec![column.to_string()]);
        for value in values {
            let mut record = Record::default();
            record.insert(column.to_string(), CellValue::Text((*value).to_string()));
            file.push_record(record);
        }
        file
    }

    fn number_at(file: &ProcessedFile, row: usize, column: &str) -> Option<f64> {
        file.records[row].get(column).and_then(CellValue::as_number)
    }

    #[test]
    fn parses_thousands_separators() {
        assert_eq!(parse_amount("1,234.50"), 1234.5);
        assert_eq!(parse_amount("2,000"), 2000.0);
        assert_eq!(parse_amount("1,000,000.25"), 1_000_000.25);
    }

    #[test]
    fn blank_and_garbage_collapse_to_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("   "), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("12abc"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
    }

    #[test]
    fn tolerates_padding_and_sign() {
        assert_eq!(parse_amount("  10.5  "), 10.5);
        assert_eq!(parse_amount("-3.25"), -3.25);
    }

    #[test]
    fn coerces_matching_columns() {
        let file = file_with("TotalFletes", &["1,234.50", "", "abc"]);
        let coerced = coerce(&file);

        assert_eq!(number_at(&coerced, 0, "TotalFletes"), Some(1234.5));
        assert_eq!(number_at(&coerced, 1, "TotalFletes"), Some(0.0));
        assert_eq!(number_at(&coerced, 2, "TotalFletes"), Some(0.0));
    }

    #[test]
    fn exact_name_rule_applies() {
        let file = file_with("PesoBrutoMercancia", &["2,000"]);
        let coerced = coerce(&file);
        assert_eq!(number_at(&coerced, 0, "PesoBrutoMercancia"), Some(2000.0));
    }

    #[test]
    fn leaves_other_columns_verbatim() {
        let file = file_with("Descripcion", &["  texto  "]);
        let coerced = coerce(&file);
        assert_eq!(
            coerced.records[0].get("Descripcion"),
            Some(&CellValue::Text("  texto  ".to_string()))
        );
    }

    #[test]
    fn missing_numeric_cell_becomes_zero() {
        let mut file =
            ProcessedFile::new("datos.xlsx".to_string(), vec!["TotalFletes".to_string()]);
        file.push_record(Record::default());
        let coerced = coerce(&file);
        assert_eq!(number_at(&coerced, 0, "TotalFletes"), Some(0.0));
    }

    #[test]
    fn coercion_is_idempotent() {
        let file = file_with("TotalFletes", &["1,234.50", "abc", ""]);
        let once = coerce(&file);
        let twice = coerce(&once);
        assert_eq!(twice, once);
    }

    #[test]
    fn does_not_mutate_input() {
        let file = file_with("TotalFletes", &["1,000"]);
        let _ = coerce(&file);
        assert_eq!(
            file.records[0].get("TotalFletes"),
            Some(&CellValue::Text("1,000".to_string()))
        );
    }

    proptest! {
        #[test]
        fn parse_amount_never_yields_nan(raw in ".*") {
            prop_assert!(!parse_amount(&raw).is_nan());
        }

        #[test]
        fn numeric_columns_are_always_numbers(values in proptest::collection::vec(".*", 0..16)) {
            let refs: Vec<&str> = values.iter().map(String::as_str).collect();
            let coerced = coerce(&file_with("TotalFletes", &refs));
            for record in &coerced.records {
                prop_assert!(record.get("TotalFletes").and_then(CellValue::as_number).is_some());
            }
        }
    }
}
