//! Normalisation of the date details JSON document
//!
//! Two layouts are accepted:
//!
//! - row-major: `[{"timestamp": "22:00:00", ...}, ...]`
//! - column-major: `{"timestamp": {"0": "22:00:00", ...}, "month": {...}}`
//!   (the layout a dataframe serializer produces)

use anyhow::Result;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::warn;

use super::models::RawDateDetail;

/// Normalise the document into raw rows.
///
/// Individual rows that fail to deserialize are logged and skipped.
pub fn rows_from_json(value: Value) -> Result<Vec<RawDateDetail>> {
    let rows = match value {
        Value::Array(items) => items,
        Value::Object(columns) => pivot_columns(columns)?,
        other => anyhow::bail!(
            "Date details document must be an array or object, got {}",
            type_name(&other)
        ),
    };

    let mut records = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        match serde_json::from_value::<RawDateDetail>(row) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!(row = index, error = %e, "Skipping malformed date details row");
            }
        }
    }

    tracing::info!(rows = records.len(), "Normalised date details document");

    Ok(records)
}

/// Pivot a column-major document into row objects, ordered by row key
fn pivot_columns(columns: Map<String, Value>) -> Result<Vec<Value>> {
    let mut rows: BTreeMap<RowKey, Map<String, Value>> = BTreeMap::new();

    for (column, cells) in columns {
        let Value::Object(cells) = cells else {
            anyhow::bail!("Column '{}' is not a row-index map", column);
        };

        for (row_key, cell) in cells {
            rows.entry(RowKey::from(row_key))
                .or_default()
                .insert(column.clone(), cell);
        }
    }

    Ok(rows.into_values().map(Value::Object).collect())
}

/// Row key that sorts numerically when it is a number
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum RowKey {
    Number(u64),
    Text(String),
}

impl From<String> for RowKey {
    fn from(key: String) -> Self {
        key.parse::<u64>().map_or(RowKey::Text(key), RowKey::Number)
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rows_from_row_major_array() {
        let doc = json!([
            {"timestamp": "22:00:00", "month": "9", "year": "2012", "day": "19",
             "time_period": "Evening", "date_uuid": "3b7ff8cc-4a4a-401b-b3bb-f5e14f5ff580"},
            {"timestamp": "09:59:04", "month": 7, "year": 1997, "day": 5,
             "time_period": "Morning", "date_uuid": "f1d9ac2d-4e39-4221-a4a5-2a73ad8ff897"}
        ]);

        let rows = rows_from_json(doc).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].timestamp.as_deref(), Some("22:00:00"));
        assert_eq!(rows[1].month.as_deref(), Some("7"));
    }

    #[test]
    fn test_rows_from_column_major_object() {
        let doc = json!({
            "timestamp": {"0": "22:00:00", "1": "09:59:04", "10": "17:29:20"},
            "month": {"0": "9", "1": "7", "10": "1"},
            "time_period": {"0": "Evening", "1": "Morning", "10": "Evening"}
        });

        let rows = rows_from_json(doc).unwrap();
        assert_eq!(rows.len(), 3);
        // numeric ordering: 0, 1, 10 (not lexicographic 0, 1, 10 vs 0, 10, 1)
        assert_eq!(rows[0].timestamp.as_deref(), Some("22:00:00"));
        assert_eq!(rows[1].timestamp.as_deref(), Some("09:59:04"));
        assert_eq!(rows[2].timestamp.as_deref(), Some("17:29:20"));
        assert_eq!(rows[2].month.as_deref(), Some("1"));
    }

    #[test]
    fn test_rows_rejects_scalar_document() {
        assert!(rows_from_json(json!("not a table")).is_err());
    }

    #[test]
    fn test_rows_rejects_scalar_column() {
        let doc = json!({"timestamp": "22:00:00"});
        assert!(rows_from_json(doc).is_err());
    }
}
