//! Key-grouped consolidation of a numeric column.
//!
//! Mirrors the pedimento union flow: the value column is summed per key and
//! the key's first row keeps the remaining columns, so detail rows collapse
//! into one row per document.

use std::collections::BTreeMap;

use asc_model::{CellValue, ProcessedFile, Record};

use crate::error::{Result, TransformError};
use crate::numeric::parse_amount;

/// Output of [`aggregate_by_key`].
#[derive(Debug, Clone)]
pub struct AggregateResult {
    /// Key plus summed value, one row per key, in first-appearance order.
    pub totals: ProcessedFile,
    /// One row per key: the key's first input row with the summed value
    /// written over the value column.
    pub merged: ProcessedFile,
}

/// Groups records by `key_column` and sums `value_column` per group.
///
/// The value column is read numerically with the usual zero fallback, so the
/// input does not need a prior coercion pass. Keys keep their text verbatim;
/// records with a missing key cell group under the empty key.
pub fn aggregate_by_key(
    input: &ProcessedFile,
    key_column: &str,
    value_column: &str,
) -> Result<AggregateResult> {
    for column in [key_column, value_column] {
        if !input.headers.iter().any(|header| header == column) {
            return Err(TransformError::ColumnNotFound {
                column: column.to_string(),
            });
        }
    }

    let mut order: Vec<String> = Vec::new();
    let mut sums: BTreeMap<String, f64> = BTreeMap::new();
    let mut first_rows: BTreeMap<String, Record> = BTreeMap::new();

    for record in &input.records {
        let key = match record.get(key_column) {
            Some(value) => value.to_string(),
            None => String::new(),
        };
        let amount = match record.get(value_column) {
            Some(CellValue::Number(number)) => *number,
            Some(CellValue::Text(raw)) => parse_amount(raw),
            None => 0.0,
        };
        if !sums.contains_key(&key) {
            order.push(key.clone());
            first_rows.insert(key.clone(), record.clone());
        }
        *sums.entry(key).or_insert(0.0) += amount;
    }

    let mut totals = ProcessedFile::new(
        input.file_name.clone(),
        vec![key_column.to_string(), value_column.to_string()],
    );
    let mut merged = ProcessedFile::new(input.file_name.clone(), input.headers.clone());
    for key in &order {
        let sum = sums[key];

        let mut total_record = Record::default();
        total_record.insert(key_column.to_string(), CellValue::Text(key.clone()));
        total_record.insert(value_column.to_string(), CellValue::Number(sum));
        totals.push_record(total_record);

        let mut merged_record = first_rows[key].clone();
        merged_record.insert(value_column.to_string(), CellValue::Number(sum));
        merged.push_record(merged_record);
    }

    tracing::debug!(
        key_column,
        value_column,
        input_records = input.records.len(),
        keys = order.len(),
        "aggregation complete"
    );
    Ok(AggregateResult { totals, merged })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProcessedFile {
        let headers = vec![
            "Pedimento".to_string(),
            "Proveedor".to_string(),
            "PrecioUnitario".to_string(),
        ];
        let mut file = ProcessedFile::new("pedimentos.xlsx".to_string(), headers);
        for (pedimento, proveedor, precio) in [
            ("1001", "Acme", "10.5"),
            ("1001", "Acme Dos", "20.0"),
            ("1002", "Beta", "100.0"),
        ] {
            let mut record = Record::default();
            record.insert(
                "Pedimento".to_string(),
                CellValue::Text(pedimento.to_string()),
            );
            record.insert(
                "Proveedor".to_string(),
                CellValue::Text(proveedor.to_string()),
            );
            record.insert(
                "PrecioUnitario".to_string(),
                CellValue::Text(precio.to_string()),
            );
            file.push_record(record);
        }
        file
    }

    #[test]
    fn sums_value_per_key() {
        let result = aggregate_by_key(&sample(), "Pedimento", "PrecioUnitario").expect("aggregate");

        assert_eq!(result.totals.record_count(), 2);
        assert_eq!(
            result.totals.records[0].get("PrecioUnitario"),
            Some(&CellValue::Number(30.5))
        );
        assert_eq!(
            result.totals.records[1].get("PrecioUnitario"),
            Some(&CellValue::Number(100.0))
        );
    }

    #[test]
    fn merged_keeps_first_row_columns() {
        let result = aggregate_by_key(&sample(), "Pedimento", "PrecioUnitario").expect("aggregate");

        let first = &result.merged.records[0];
        assert_eq!(
            first.get("Proveedor"),
            Some(&CellValue::Text("Acme".to_string()))
        );
        assert_eq!(first.get("PrecioUnitario"), Some(&CellValue::Number(30.5)));
        assert_eq!(result.merged.headers, sample().headers);
    }

    #[test]
    fn keys_keep_first_appearance_order() {
        let mut file = sample();
        // Prepend a record for a later key to check ordering is not sorted.
        let mut record = Record::default();
        record.insert("Pedimento".to_string(), CellValue::Text("999".to_string()));
        record.insert(
            "PrecioUnitario".to_string(),
            CellValue::Text("1".to_string()),
        );
        file.records.insert(0, record);

        let result = aggregate_by_key(&file, "Pedimento", "PrecioUnitario").expect("aggregate");
        let keys: Vec<String> = result
            .totals
            .records
            .iter()
            .map(|record| record.get("Pedimento").unwrap().to_string())
            .collect();
        assert_eq!(keys, vec!["999", "1001", "1002"]);
    }

    #[test]
    fn unparseable_values_count_as_zero() {
        let mut file = sample();
        file.records[1].insert(
            "PrecioUnitario".to_string(),
            CellValue::Text("n/a".to_string()),
        );

        let result = aggregate_by_key(&file, "Pedimento", "PrecioUnitario").expect("aggregate");
        assert_eq!(
            result.totals.records[0].get("PrecioUnitario"),
            Some(&CellValue::Number(10.5))
        );
    }

    #[test]
    fn missing_column_is_an_error() {
        let result = aggregate_by_key(&sample(), "NoExiste", "PrecioUnitario");
        assert!(matches!(
            result,
            Err(TransformError::ColumnNotFound { .. })
        ));

        let result = aggregate_by_key(&sample(), "Pedimento", "NoExiste");
        assert!(matches!(
            result,
            Err(TransformError::ColumnNotFound { .. })
        ));
    }
}
