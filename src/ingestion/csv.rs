//! CSV table reading.

use std::path::Path;

use crate::error::{ClassifyError, ClassifyResult};
use crate::types::{Column, RawValue, Table};

/// Read a CSV file into a text [`Table`].
///
/// Rules:
///
/// - CSV must have a header row; every header becomes a column, in order.
/// - Cells are kept as text, untrimmed. Empty or whitespace-only cells become absent values.
/// - Short rows are padded with absent values; cells beyond the header width are ignored.
/// - Invalid UTF-8 is replaced rather than rejected.
pub fn read_csv_table(path: impl AsRef<Path>) -> ClassifyResult<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    read_csv_table_from_reader(&mut rdr)
}

/// Read a CSV table from an existing CSV reader.
///
/// The reader should be configured with `has_headers(true)`; use `flexible(true)` to accept
/// ragged rows.
pub fn read_csv_table_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> ClassifyResult<Table> {
    let headers = rdr.byte_headers()?.clone();
    if headers.is_empty() {
        return Err(ClassifyError::SchemaMismatch {
            message: "csv input has no header row".to_string(),
        });
    }

    let mut columns: Vec<Column> = headers
        .iter()
        .map(|h| Column::new(String::from_utf8_lossy(h).trim().to_owned(), Vec::new()))
        .collect();

    for result in rdr.byte_records() {
        let record = result?;
        for (idx, column) in columns.iter_mut().enumerate() {
            column.values.push(cell_value(record.get(idx)));
        }
    }

    Ok(Table::new(columns))
}

fn cell_value(raw: Option<&[u8]>) -> RawValue {
    let text = String::from_utf8_lossy(raw?);
    if text.trim().is_empty() {
        None
    } else {
        Some(text.into_owned())
    }
}
