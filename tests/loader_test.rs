//! Loader behaviour against CSV files on disk

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use ibas_api::loader::{load_production_records, read_production_records};
use ibas_api::types::{BikeModel, ProductionRecord};
use ibas_api::Error;
use tempfile::TempDir;

const HEADER: &str = "PartitionKey,Date,RowKey,ItemsProduced";

fn write_csv(dir: &TempDir, lines: &[&str]) -> PathBuf {
    let path = dir.path().join("production.csv");
    fs::write(&path, lines.join("\n")).unwrap();
    path
}

fn record(y: i32, m: u32, d: u32, model: BikeModel, items: i32) -> ProductionRecord {
    let date = NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    ProductionRecord::new(date, model, items)
}

#[test]
fn loads_valid_rows_in_file_order() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        &[
            HEADER,
            "1,2024-01-05,ignored,10",
            "2,2024-01-06,ignored,20",
        ],
    );

    let records = load_production_records(&path);
    assert_eq!(
        records,
        vec![
            record(2024, 1, 5, BikeModel::IBv1, 10),
            record(2024, 1, 6, BikeModel::EvIb100, 20),
        ]
    );
}

#[test]
fn unknown_partition_key_maps_to_undefined() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, &[HEADER, "9,2024-01-07,x,5", "3,2024-01-07,x,6"]);

    let records = load_production_records(&path);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].model, BikeModel::Undefined);
    assert_eq!(records[0].items_produced, 5);
    assert_eq!(records[1].model, BikeModel::EvIb200);
}

#[test]
fn malformed_rows_are_skipped() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        &[
            HEADER,
            "abc,2024-01-08,x,5",
            "1,not-a-date,x,5",
            "1,2024-01-08,x,many",
            "1,2024-01-08,x",
            "",
            "2,2024-01-09,x,7",
        ],
    );

    let records = load_production_records(&path);
    assert_eq!(records, vec![record(2024, 1, 9, BikeModel::EvIb100, 7)]);
}

#[test]
fn third_column_never_affects_inclusion() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("production.csv");
    let mut contents = format!("{HEADER}\n").into_bytes();
    contents.extend_from_slice(b"1,2024-01-05,,1\n");
    contents.extend_from_slice(b"1,2024-01-06,not a number at all,2\n");
    contents.extend_from_slice(b"1,2024-01-07,-999999999999999999999,3\n");
    contents.extend_from_slice(b"1,2024-01-08,\"half quoted,4\n");
    contents.extend_from_slice(b"1,2024-01-09,\xff\xfe,5\n");
    contents.extend_from_slice(b"1,2024-01-10,\"\",6\n");
    fs::write(&path, contents).unwrap();

    let records = load_production_records(&path);
    let counts: Vec<i32> = records.iter().map(|r| r.items_produced).collect();
    assert_eq!(counts, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn stray_quote_does_not_swallow_later_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        &[
            "H,D,R,I",
            "1,2024-01-05,\"oops,10",
            "2,2024-01-06,x,20",
            "3,2024-01-07,y,30",
        ],
    );

    let records = load_production_records(&path);
    assert_eq!(
        records,
        vec![
            record(2024, 1, 5, BikeModel::IBv1, 10),
            record(2024, 1, 6, BikeModel::EvIb100, 20),
            record(2024, 1, 7, BikeModel::EvIb200, 30),
        ]
    );
}

#[test]
fn quoted_comma_splits_like_any_other_comma() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, &[HEADER, "1,2024-01-05,\"a,b\",10"]);

    assert!(load_production_records(&path).is_empty());
}

#[test]
fn invalid_utf8_in_third_column_is_tolerated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("production.csv");
    let mut contents = format!("{HEADER}\n").into_bytes();
    contents.extend_from_slice(b"1,2024-01-05,\xff\xfe,10\n2,2024-01-06,x,20");
    fs::write(&path, contents).unwrap();

    let records = load_production_records(&path);
    assert_eq!(
        records,
        vec![
            record(2024, 1, 5, BikeModel::IBv1, 10),
            record(2024, 1, 6, BikeModel::EvIb100, 20),
        ]
    );
}

#[test]
fn blank_first_line_is_the_header() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, &["", "1,2024-01-05,x,10", "2,2024-01-06,x,20"]);

    let records = load_production_records(&path);
    assert_eq!(
        records,
        vec![
            record(2024, 1, 5, BikeModel::IBv1, 10),
            record(2024, 1, 6, BikeModel::EvIb100, 20),
        ]
    );
}

#[test]
fn header_is_always_skipped() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, &["1,2024-01-05,x,10", "2,2024-01-06,x,20"]);

    let records = load_production_records(&path);
    assert_eq!(records, vec![record(2024, 1, 6, BikeModel::EvIb100, 20)]);
}

#[test]
fn header_only_file_yields_nothing() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, &[HEADER]);

    assert!(load_production_records(&path).is_empty());
}

#[test]
fn crlf_and_padded_fields_are_accepted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("production.csv");
    fs::write(&path, format!("{HEADER}\r\n 1 , 2024-01-05 ,x, 10 \r\n")).unwrap();

    let records = load_production_records(&path);
    assert_eq!(records, vec![record(2024, 1, 5, BikeModel::IBv1, 10)]);
}

#[test]
fn missing_file_yields_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.csv");

    assert!(load_production_records(&path).is_empty());
    assert!(matches!(
        read_production_records(&path),
        Err(Error::CsvNotFound(p)) if p == path
    ));
}

#[test]
fn directory_path_is_treated_as_missing() {
    let dir = TempDir::new().unwrap();

    assert!(load_production_records(dir.path()).is_empty());
    assert!(load_production_records(&PathBuf::new()).is_empty());
}

#[test]
fn bundled_sample_data_loads() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/daily_production.csv");

    let records = load_production_records(&path);
    assert_eq!(records.len(), 6);
    assert_eq!(records[0], record(2024, 1, 5, BikeModel::IBv1, 10));
}
