use std::fs;

use pretty_assertions::assert_eq;
use rera_core::{placeholder_projects, ProjectRecord};
use rera_engine::{records_to_csv, records_to_json, write_outputs};

fn live_records() -> Vec<ProjectRecord> {
    let mut first = ProjectRecord::from_listing_row(
        "RP/01/2023".into(),
        "Sunrise Enclave".into(),
        Some("Acme Builders".into()),
    );
    first.detail_link = Some("/projects/1".into());
    let second = ProjectRecord::from_listing_row(
        "RP/02/2023".into(),
        "Moonrise, Phase \"II\"".into(),
        None,
    );
    vec![first, second]
}

#[test]
fn json_uses_sink_field_names_and_omits_absent_optionals() {
    let json = records_to_json(&live_records()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["Rera Regd. No"], "RP/01/2023");
    assert_eq!(array[0]["Detail Link"], "/projects/1");
    assert!(array[0].get("Status").is_none());
    assert!(array[1].get("Detail Link").is_none());
}

#[test]
fn csv_has_fixed_columns_and_quotes_awkward_cells() {
    let csv = records_to_csv(&live_records());
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("Rera Regd. No,Project Name,Promoter Name,Address of the Promoter,GST No,Detail Link")
    );
    let first = lines.next().unwrap();
    assert!(first.starts_with("RP/01/2023,Sunrise Enclave,Acme Builders,"));
    assert!(first.ends_with(",/projects/1"));
    let second = lines.next().unwrap();
    assert!(second.contains("\"Moonrise, Phase \"\"II\"\"\""));
    // No record carries a status, so the column must not exist.
    assert!(!csv.contains("Status"));
}

#[test]
fn placeholder_csv_carries_status_but_no_detail_link_column() {
    let csv = records_to_csv(&placeholder_projects());
    let header = csv.lines().next().unwrap();
    assert!(header.ends_with("GST No,Status"));
    assert!(!header.contains("Detail Link"));
}

#[test]
fn outputs_are_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let records = live_records();

    let summary = write_outputs(dir.path(), "rera_odisha", &records).unwrap();
    assert_eq!(summary.record_count, 2);
    assert_eq!(
        summary.json_path,
        dir.path().join("rera_odisha_projects.json")
    );
    assert_eq!(summary.csv_path, dir.path().join("rera_odisha_projects.csv"));

    let json = fs::read_to_string(&summary.json_path).unwrap();
    assert_eq!(json, records_to_json(&records).unwrap());
    let csv = fs::read_to_string(&summary.csv_path).unwrap();
    assert_eq!(csv, records_to_csv(&records));
}

#[test]
fn rewriting_outputs_replaces_previous_content() {
    let dir = tempfile::tempdir().unwrap();
    write_outputs(dir.path(), "rera_odisha", &live_records()).unwrap();
    let summary = write_outputs(dir.path(), "rera_odisha", &placeholder_projects()).unwrap();

    let json = fs::read_to_string(&summary.json_path).unwrap();
    assert!(json.contains("OD/2023/001"));
    assert!(!json.contains("RP/01/2023"));
}
