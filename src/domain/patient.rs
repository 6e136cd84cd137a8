//! Patient records and the tabular form fed to the predictor.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::features::ensure_feature_columns;
use crate::domain::DomainError;

/// One patient as posted to the API or read from the snapshot: a mapping of
/// column name to cell value.
///
/// Cells stay as loose JSON values. Only column presence is validated before
/// prediction; a present column with a malformed value fails inside the
/// predictor instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientRecord {
    fields: HashMap<String, Value>,
}

impl PatientRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(column.into(), value.into());
    }

    pub fn with_field(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn contains_column(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Cell value coerced to the numeric form the model consumes.
    ///
    /// Numbers pass through, numeric strings are parsed, booleans map to 0/1.
    /// Anything else is a prediction failure naming the offending cell.
    pub fn numeric(&self, column: &str) -> Result<f64, DomainError> {
        let value = self
            .get(column)
            .ok_or_else(|| DomainError::missing_column(column))?;

        match value {
            Value::Number(n) => n.as_f64().ok_or_else(|| coercion_error(column, value)),
            Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| coercion_error(column, value)),
            _ => Err(coercion_error(column, value)),
        }
    }
}

fn coercion_error(column: &str, value: &Value) -> DomainError {
    DomainError::predictor(format!(
        "could not convert value {} in column '{}' to a number",
        value, column
    ))
}

/// A table of patient rows in the shape the predictor consumes.
///
/// The column set is tracked separately from the rows: for a posted record it
/// is the record's keys, for a CSV snapshot it is the header, so an empty
/// snapshot still validates its header columns.
#[derive(Debug, Clone)]
pub struct FeatureTable {
    columns: Vec<String>,
    rows: Vec<PatientRecord>,
}

impl FeatureTable {
    /// Wrap a single posted record as a one-row table.
    pub fn from_record(record: PatientRecord) -> Self {
        let columns = record.columns().map(str::to_string).collect();
        Self {
            columns,
            rows: vec![record],
        }
    }

    /// Build a table from an explicit header and rows.
    pub fn with_columns(columns: Vec<String>, rows: Vec<PatientRecord>) -> Self {
        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[PatientRecord] {
        &self.rows
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Reject the table before prediction if any recognized column is absent.
    pub fn validate_columns(&self) -> Result<(), DomainError> {
        ensure_feature_columns(|column| self.has_column(column))
    }
}
