use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use column_typer::execution::{ExecutionEngine, ExecutionOptions};
use column_typer::ingestion::{load_reference_list, read_csv_table, read_table, IngestionOptions};
use column_typer::pipeline::{parse_table, parse_with_selection};
use column_typer::{Classifier, Column, SelectionOptions, Table};

fn fixture_classifier() -> Classifier {
    let countries = load_reference_list("tests/fixtures/countries.txt").unwrap();
    let legal = load_reference_list("tests/fixtures/legal.txt").unwrap();
    Classifier::new(&countries, legal)
}

fn tmp_csv() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("column-typer-parse-{nanos}.csv"))
}

#[test]
fn parses_phone_and_company_columns_of_the_fixture() {
    let table = read_csv_table("tests/fixtures/contacts.csv").unwrap();
    let parsed = parse_table(&table, &fixture_classifier(), &SelectionOptions::default()).unwrap();

    assert!(!parsed.passthrough);
    assert_eq!(
        parsed.headers,
        ["PhoneNumber", "Country", "Number", "CompanyName", "Name", "Legal"]
    );
    assert_eq!(
        parsed.rows,
        vec![
            vec!["+1 (555) 123-4567", "US", "5551234567", "Acme Widgets, Inc.", "Acme Widgets", "Inc."],
            vec!["+44 20 7946 0958", "UK", "2079460958", "Globex LLC", "Globex", "LLC"],
            vec!["+91 9876543210", "India", "9876543210", "Initech Ltd", "Initech", "Ltd"],
            vec!["555-987-6543", "", "5559876543", "Umbrella Corp", "Umbrella", "Corp"],
            vec!["+49 30 1234567", "Germany", "301234567", "Stark Industries", "Stark Industries", ""],
        ]
    );
}

#[test]
fn thresholds_are_inclusive() {
    let table = read_table("tests/fixtures/contacts.ndjson", &IngestionOptions::default()).unwrap();
    let options = SelectionOptions {
        phone_threshold: 1.0,
        company_threshold: 1.0,
    };
    let parsed = parse_table(&table, &fixture_classifier(), &options).unwrap();
    assert_eq!(parsed.parsed_phone().map(|p| p.column.as_str()), Some("tel"));
    assert_eq!(parsed.parsed_company().map(|p| p.column.as_str()), Some("org.name"));
    assert_eq!(&parsed.rows[2][..3], ["5551234567", "", "5551234567"]);
}

#[test]
fn only_the_accepted_column_is_parsed() {
    let table = Table::new(vec![
        Column::from_strs("tel", &["+1 (555) 123-4567", "+91 9876543210"]),
        Column::from_strs("notes", &["call back", "x"]),
    ]);
    let options = SelectionOptions {
        phone_threshold: 0.15,
        company_threshold: 0.9,
    };
    let parsed = parse_table(&table, &fixture_classifier(), &options).unwrap();

    assert_eq!(parsed.selection.company_column(), Some("notes"));
    assert!(parsed.parsed_company().is_none());
    assert_eq!(parsed.headers, ["PhoneNumber", "Country", "Number"]);
    assert_eq!(parsed.rows[1], ["+91 9876543210", "India", "9876543210"]);
}

#[test]
fn unmatched_table_is_written_through_unchanged() {
    let table = read_csv_table("tests/fixtures/no_match.csv").unwrap();
    let parsed = parse_table(&table, &fixture_classifier(), &SelectionOptions::default()).unwrap();
    assert!(parsed.passthrough);

    let out = tmp_csv();
    parsed.write_csv_path(&out).unwrap();
    let text = std::fs::read_to_string(&out).unwrap();
    let _ = std::fs::remove_file(&out);
    assert_eq!(text, "code,qty\na1,3\nb2,4\nc3,\n");
}

#[test]
fn written_output_reads_back_with_quoted_commas() {
    let table = read_csv_table("tests/fixtures/contacts.csv").unwrap();
    let classifier = fixture_classifier();
    let engine = ExecutionEngine::new(ExecutionOptions { num_threads: Some(2) }).unwrap();
    let selection = engine
        .select_columns(&classifier, &table, &SelectionOptions::default())
        .unwrap();
    let parsed = parse_with_selection(&table, &classifier, selection);

    let out = tmp_csv();
    parsed.write_csv_path(&out).unwrap();
    let reread = read_csv_table(&out).unwrap();
    let _ = std::fs::remove_file(&out);

    assert_eq!(reread.column("CompanyName").unwrap().get(0), Some("Acme Widgets, Inc."));
    assert_eq!(reread.column("Legal").unwrap().get(4), None);
    assert_eq!(reread.row_count(), 5);
}
