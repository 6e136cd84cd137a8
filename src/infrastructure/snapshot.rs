//! Admitted-patient snapshot reader.

use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde_json::Value;
use tracing::debug;

use crate::domain::patient::{FeatureTable, PatientRecord};
use crate::domain::DomainError;

/// Column carrying each row's admission date. Optional; absent or
/// unparseable values mean "admitted today" downstream.
pub const ADMISSION_DATE_COLUMN: &str = "Date_of_Admission";

/// Admission dates are written by several upstream exporters; accept the
/// spellings seen in practice and coerce the rest to None.
const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y-%m-%d %H:%M:%S",
    "%m/%d/%Y",
    "%d-%m-%Y",
    "%d/%m/%Y",
];

/// A parsed snapshot: the feature table plus each row's admission date,
/// `None` where the snapshot does not say.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub table: FeatureTable,
    pub admission_dates: Vec<Option<NaiveDate>>,
}

/// Reads the currently-admitted-patients CSV from a fixed path.
#[derive(Debug, Clone)]
pub struct CsvSnapshotReader {
    path: PathBuf,
}

impl CsvSnapshotReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the snapshot.
    ///
    /// A missing file is reported with the path in the message; any other
    /// I/O or CSV problem surfaces as a snapshot error.
    pub async fn read(&self) -> Result<Snapshot, DomainError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(DomainError::snapshot_missing(self.path.display().to_string()));
            }
            Err(e) => {
                return Err(DomainError::snapshot(format!(
                    "failed to read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        parse_snapshot(&raw)
    }
}

fn parse_snapshot(raw: &str) -> Result<Snapshot, DomainError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(raw.as_bytes());

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| DomainError::snapshot(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    let mut admission_dates = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| DomainError::snapshot(e.to_string()))?;

        let mut row = PatientRecord::new();
        let mut admitted_on = None;

        for (column, cell) in columns.iter().zip(record.iter()) {
            if column == ADMISSION_DATE_COLUMN {
                admitted_on = parse_admission_date(cell);
            }
            row.insert(column.clone(), cell_value(cell));
        }

        rows.push(row);
        admission_dates.push(admitted_on);
    }

    debug!(rows = rows.len(), "Parsed patient snapshot");

    Ok(Snapshot {
        table: FeatureTable::with_columns(columns, rows),
        admission_dates,
    })
}

/// Mirror the loose typing of a CSV cell: numeric cells become numbers,
/// everything else stays a string.
fn cell_value(cell: &str) -> Value {
    match cell.parse::<f64>() {
        Ok(n) => serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(cell.to_string())),
        Err(_) => Value::String(cell.to_string()),
    }
}

/// Lenient date parsing. Anything unrecognized means "admitted today" to the
/// caller, so failures yield `None` rather than an error.
pub fn parse_admission_date(cell: &str) -> Option<NaiveDate> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(cell, format).ok())
}
