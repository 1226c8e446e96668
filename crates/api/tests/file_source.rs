//! Tests for the JSON file-backed intervention source.

use std::io::Write;

use assert_matches::assert_matches;
use maint_api::source::JsonFileSource;
use maint_core::error::CoreError;
use maint_core::source::InterventionSource;

fn write_snapshot(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn reads_records_and_catalog_from_disk() {
    let file = write_snapshot(
        r#"{
            "equipment": [{ "equipment_code": "TST-01" }],
            "records": [
                { "id": 1, "equipment_code": "TST-01", "kind": "curative", "requested_at": "2024-01-01" }
            ]
        }"#,
    );
    let source = JsonFileSource::new(file.path());

    let records = source.fetch_all_intervention_records().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].equipment_code, "TST-01");

    let catalog = source.fetch_equipment_catalog().await.unwrap();
    assert_eq!(catalog.len(), 1);
}

#[tokio::test]
async fn picks_up_changes_on_next_call() {
    let file = write_snapshot(r#"{ "records": [] }"#);
    let source = JsonFileSource::new(file.path());
    assert!(source.fetch_all_intervention_records().await.unwrap().is_empty());

    std::fs::write(
        file.path(),
        r#"{ "records": [{ "id": 9, "equipment_code": "X", "kind": "preventive" }] }"#,
    )
    .unwrap();
    assert_eq!(source.fetch_all_intervention_records().await.unwrap().len(), 1);
}

#[tokio::test]
async fn missing_file_is_an_internal_error() {
    let source = JsonFileSource::new("/definitely/not/here.json");
    assert_matches!(
        source.fetch_all_intervention_records().await,
        Err(CoreError::Internal(_))
    );
}

#[tokio::test]
async fn malformed_file_is_an_internal_error() {
    let file = write_snapshot(r#"{ "records": [{ "id": 1 }] }"#);
    let source = JsonFileSource::new(file.path());
    assert_matches!(
        source.fetch_equipment_catalog().await,
        Err(CoreError::Internal(msg)) if msg.contains("failed to parse")
    );
}
