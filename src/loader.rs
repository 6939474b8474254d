//! CSV ingestion of daily production records
//!
//! The loader never fails: a missing file or an I/O error is logged and
//! results in an empty set of records, and malformed rows are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::{ByteRecord, ReaderBuilder, Trim};

use crate::types::{BikeModel, ProductionRecord};
use crate::{Error, Result};

const PARTITION_KEY_COLUMN: usize = 0;
const DATE_COLUMN: usize = 1;
const ITEMS_PRODUCED_COLUMN: usize = 3;
const MIN_COLUMNS: usize = 4;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y", "%d-%m-%Y", "%m/%d/%Y"];

/// Load every valid production record from the CSV file at `path`, in file order.
pub fn load_production_records(path: &Path) -> Vec<ProductionRecord> {
    match read_production_records(path) {
        Ok(records) => {
            tracing::info!(
                path = %path.display(),
                count = records.len(),
                "Loaded production records from CSV"
            );
            records
        }
        Err(Error::CsvNotFound(missing)) => {
            tracing::error!(path = %missing.display(), "CSV file not found");
            Vec::new()
        }
        Err(err) => {
            tracing::error!(
                path = %path.display(),
                error = %err,
                "Error loading production data from CSV"
            );
            Vec::new()
        }
    }
}

/// Read the CSV file, surfacing I/O failures instead of swallowing them.
///
/// Quoting is disabled so a stray `"` in any cell stays local to its row, and
/// the first physical line is dropped as the header even when it is blank.
pub fn read_production_records(path: &Path) -> Result<Vec<ProductionRecord>> {
    if !path.is_file() {
        return Err(Error::csv_not_found(path));
    }

    let mut input = BufReader::new(File::open(path)?);
    input.read_until(b'\n', &mut Vec::new())?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);

    let mut records = Vec::new();
    for row in reader.byte_records() {
        let row = match row {
            Ok(row) => row,
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(_) => continue,
        };

        if let Some(record) = parse_row(&row) {
            records.push(record);
        }
    }

    Ok(records)
}

/// Map a single data row to a record, or `None` if it is malformed.
///
/// Column 2 is never decoded, so any bytes there are tolerated.
pub fn parse_row(row: &ByteRecord) -> Option<ProductionRecord> {
    if row.len() < MIN_COLUMNS {
        return None;
    }

    let partition_key: i32 = text_cell(row, PARTITION_KEY_COLUMN)?.parse().ok()?;
    let date = parse_date(text_cell(row, DATE_COLUMN)?)?;
    let items_produced: i32 = text_cell(row, ITEMS_PRODUCED_COLUMN)?.parse().ok()?;

    Some(ProductionRecord::new(
        date,
        BikeModel::from_partition_key(partition_key),
        items_produced,
    ))
}

fn text_cell(row: &ByteRecord, column: usize) -> Option<&str> {
    std::str::from_utf8(row.get(column)?).ok()
}

/// Parse a date or date-time cell. Date-only values resolve to midnight.
///
/// RFC 3339 values keep their wall-clock time; the UTC offset is discarded.
pub fn parse_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
