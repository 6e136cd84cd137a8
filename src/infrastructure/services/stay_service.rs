//! Length-of-stay prediction over posted records.

use std::sync::Arc;

use crate::domain::patient::{FeatureTable, PatientRecord};
use crate::domain::predictor::{round_stay, Predictor};
use crate::domain::DomainError;

/// Validates a posted record and runs it through the shared predictor.
#[derive(Debug, Clone)]
pub struct StayService {
    predictor: Arc<dyn Predictor>,
}

impl StayService {
    pub fn new(predictor: Arc<dyn Predictor>) -> Self {
        Self { predictor }
    }

    /// Predict the stay for one record, rounded to whole days.
    ///
    /// The record must contain every recognized column; the first missing one
    /// aborts before the predictor runs. Returns one entry per input row.
    pub fn predict(&self, record: PatientRecord) -> Result<Vec<i64>, DomainError> {
        let table = FeatureTable::from_record(record);
        table.validate_columns()?;

        let outputs = self.predictor.predict(&table)?;
        Ok(outputs.into_iter().map(round_stay).collect())
    }
}
