//! Whole-table parse pipeline: pick the phone and company columns, then decompose them.
//!
//! The output layout is fixed:
//!
//! - `PhoneNumber, Country, Number` when the phone column is accepted,
//! - followed by `CompanyName, Name, Legal` when the company column is accepted,
//! - or the input table unchanged when neither is accepted.
//!
//! Absent values and absent decomposed fields are written as empty strings.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::decompose::split_phone;
use crate::error::ClassifyResult;
use crate::scoring::{Classifier, SelectionOptions};
use crate::types::{ColumnPick, ColumnSelection, Table};

pub const PHONE_HEADERS: [&str; 3] = ["PhoneNumber", "Country", "Number"];
pub const COMPANY_HEADERS: [&str; 3] = ["CompanyName", "Name", "Legal"];

/// Parsed output table, row-major and ready to write.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// The selection the output was built from.
    pub selection: ColumnSelection,
    /// True when no column was accepted and `rows` is the input table.
    pub passthrough: bool,
}

impl ParsedTable {
    /// The accepted phone column, if it was decomposed.
    pub fn parsed_phone(&self) -> Option<&ColumnPick> {
        self.selection.accepted_phone()
    }

    /// The accepted company column, if it was decomposed.
    pub fn parsed_company(&self) -> Option<&ColumnPick> {
        self.selection.accepted_company()
    }

    /// Write the table as CSV with a header row.
    pub fn write_csv<W: Write>(&self, writer: W) -> ClassifyResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(&self.headers)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Write the table as CSV to `path`, replacing any existing file.
    pub fn write_csv_path(&self, path: impl AsRef<Path>) -> ClassifyResult<()> {
        self.write_csv(File::create(path)?)
    }
}

/// Select columns of `table` and decompose the accepted ones.
pub fn parse_table(
    table: &Table,
    classifier: &Classifier,
    options: &SelectionOptions,
) -> ClassifyResult<ParsedTable> {
    let selection = classifier.select_columns(table, options)?;
    Ok(parse_with_selection(table, classifier, selection))
}

/// Build the parsed output from an existing selection (e.g. one computed by
/// [`crate::execution::ExecutionEngine::select_columns`]).
pub fn parse_with_selection(
    table: &Table,
    classifier: &Classifier,
    selection: ColumnSelection,
) -> ParsedTable {
    let phone = selection
        .accepted_phone()
        .and_then(|p| table.index_of(&p.column))
        .map(|idx| &table.columns[idx]);
    let company = selection
        .accepted_company()
        .and_then(|p| table.index_of(&p.column))
        .map(|idx| &table.columns[idx]);

    if phone.is_none() && company.is_none() {
        return passthrough(table, selection);
    }

    let mut headers = Vec::with_capacity(6);
    if phone.is_some() {
        headers.extend(PHONE_HEADERS.map(String::from));
    }
    if company.is_some() {
        headers.extend(COMPANY_HEADERS.map(String::from));
    }

    let rows = (0..table.row_count())
        .map(|row| {
            let mut out = Vec::with_capacity(headers.len());
            if let Some(column) = phone {
                let raw = column.get(row);
                let split = split_phone(raw);
                out.push(raw.unwrap_or_default().to_owned());
                out.push(split.country.unwrap_or_default().to_owned());
                out.push(split.national_number.unwrap_or_default());
            }
            if let Some(column) = company {
                let raw = column.get(row);
                let split = classifier.split_company(raw);
                out.push(raw.unwrap_or_default().to_owned());
                out.push(split.base_name.unwrap_or_default());
                out.push(split.legal_suffix.unwrap_or_default());
            }
            out
        })
        .collect();

    ParsedTable {
        headers,
        rows,
        selection,
        passthrough: false,
    }
}

fn passthrough(table: &Table, selection: ColumnSelection) -> ParsedTable {
    let headers = table.column_names().map(str::to_owned).collect();
    let rows = (0..table.row_count())
        .map(|row| {
            table
                .columns
                .iter()
                .map(|c| c.get(row).unwrap_or_default().to_owned())
                .collect()
        })
        .collect();
    ParsedTable {
        headers,
        rows,
        selection,
        passthrough: true,
    }
}
