//! JSON table reading.
//!
//! Supported inputs:
//! - A JSON array of objects: `[{"a":"x"}, {"a":"y"}]`
//! - A single JSON object (one row)
//! - Newline-delimited JSON (NDJSON): `{"a":"x"}\n{"a":"y"}\n`
//!
//! Nested objects are flattened into dot-path column names (e.g. `user.name`). Columns appear
//! in the order their keys are first seen.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{ClassifyError, ClassifyResult};
use crate::types::{Column, RawValue, Table};

/// Read a JSON or NDJSON file into a text [`Table`].
pub fn read_json_table(path: impl AsRef<Path>) -> ClassifyResult<Table> {
    let text = fs::read_to_string(path)?;
    read_json_table_from_str(&text)
}

/// Read JSON or NDJSON from an in-memory string into a text [`Table`].
pub fn read_json_table_from_str(input: &str) -> ClassifyResult<Table> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ClassifyError::SchemaMismatch {
            message: "json input is empty".to_string(),
        });
    }

    // First try parsing as a single JSON value (array or object).
    if let Ok(v) = serde_json::from_str::<Value>(trimmed) {
        match v {
            Value::Array(items) => table_from_rows(&items),
            Value::Object(_) => table_from_rows(std::slice::from_ref(&v)),
            _ => Err(ClassifyError::SchemaMismatch {
                message: "json must be an object, an array of objects, or NDJSON".to_string(),
            }),
        }
    } else {
        // Fall back to NDJSON.
        let mut rows = Vec::new();
        for line in trimmed.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            rows.push(serde_json::from_str::<Value>(line)?);
        }
        table_from_rows(&rows)
    }
}

fn table_from_rows(rows: &[Value]) -> ClassifyResult<Table> {
    let mut columns: Vec<Column> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (row_idx, row) in rows.iter().enumerate() {
        let obj = row.as_object().ok_or_else(|| ClassifyError::SchemaMismatch {
            message: format!("row {} is not a json object", row_idx + 1),
        })?;

        let mut cells = Vec::new();
        flatten("", obj, &mut cells);
        for (key, cell) in cells {
            let idx = match index.get(&key) {
                Some(&idx) => idx,
                None => {
                    columns.push(Column::new(key.clone(), vec![None; row_idx]));
                    index.insert(key, columns.len() - 1);
                    columns.len() - 1
                }
            };
            let values = &mut columns[idx].values;
            values.resize(row_idx, None);
            values.push(cell);
        }
        for column in &mut columns {
            column.values.resize(row_idx + 1, None);
        }
    }

    Ok(Table::new(columns))
}

fn flatten(prefix: &str, obj: &Map<String, Value>, out: &mut Vec<(String, RawValue)>) {
    for (key, value) in obj {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(inner) => flatten(&path, inner, out),
            other => out.push((path, cell_value(other))),
        }
    }
}

fn cell_value(v: &Value) -> RawValue {
    match v {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::read_json_table_from_str;

    #[test]
    fn array_of_objects_with_nested_fields() {
        let table = read_json_table_from_str(
            r#"[{"company":"Globex LLC","contact":{"phone":"+44 20 7946 0958"}},
                {"company":null,"contact":{"phone":5551234567}}]"#,
        )
        .unwrap();
        assert_eq!(
            table.column_names().collect::<Vec<_>>(),
            vec!["company", "contact.phone"]
        );
        assert_eq!(table.columns[0].get(1), None);
        assert_eq!(table.columns[1].get(1), Some("5551234567"));
    }

    #[test]
    fn ndjson_with_late_columns_is_padded() {
        let table = read_json_table_from_str("{\"a\":\"1\"}\n\n{\"a\":\"2\",\"b\":\"x\"}\n").unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.columns[1].values, vec![None, Some("x".to_string())]);
    }

    #[test]
    fn rejects_scalars_and_empty_input() {
        assert!(read_json_table_from_str("42").is_err());
        assert!(read_json_table_from_str("  ").is_err());
        assert!(read_json_table_from_str("[1, 2]").is_err());
    }
}
