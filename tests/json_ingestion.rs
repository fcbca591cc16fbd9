use column_typer::ingestion::json::{read_json_table, read_json_table_from_str};

#[test]
fn read_ndjson_fixture_flattens_nested_objects() {
    let table = read_json_table("tests/fixtures/contacts.ndjson").unwrap();

    assert_eq!(table.row_count(), 3);
    assert_eq!(
        table.column_names().collect::<Vec<_>>(),
        vec!["org.name", "tel", "since"]
    );
    assert_eq!(table.column("org.name").unwrap().get(1), Some("Initech Ltd"));
    // Numbers are kept as their JSON text, null is absent.
    assert_eq!(table.column("tel").unwrap().get(2), Some("5551234567"));
    assert_eq!(table.column("since").unwrap().get(1), None);
}

#[test]
fn read_json_array_keeps_first_seen_key_order() {
    let table = read_json_table_from_str(
        r#"[{"b":"1","a":"2"},{"a":"3","c":true},{"b":"4"}]"#,
    )
    .unwrap();

    assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    assert_eq!(table.column("a").unwrap().values, vec![Some("2".into()), Some("3".into()), None]);
    assert_eq!(table.column("c").unwrap().values, vec![None, Some("true".into()), None]);
}

#[test]
fn read_json_single_object_is_one_row() {
    let table = read_json_table_from_str(r#"{"company":"Globex LLC"}"#).unwrap();
    assert_eq!(table.row_count(), 1);
}

#[test]
fn read_json_rejects_invalid_lines() {
    let err = read_json_table_from_str("{\"a\":\"1\"}\n{not json}\n").unwrap_err();
    assert!(err.to_string().contains("json error"));
}
