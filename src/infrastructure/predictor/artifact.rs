//! On-disk schema of the serialized predictor.

use serde::Deserialize;

use crate::domain::features::MODEL_FEATURE_COLUMNS;
use crate::domain::DomainError;

/// Serialized model artifact, tagged by family.
///
/// The surrounding code never looks inside; new families only touch this file
/// and the factory.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum PredictorArtifact {
    LinearRegression(LinearArtifact),
}

/// Linear-regression weights: one coefficient per training column plus an
/// intercept, in training column order.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearArtifact {
    pub columns: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearArtifact {
    /// The artifact must carry exactly the recognized columns in training
    /// order, with one coefficient each.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.columns.len() != MODEL_FEATURE_COLUMNS.len()
            || self
                .columns
                .iter()
                .zip(MODEL_FEATURE_COLUMNS)
                .any(|(found, expected)| found != expected)
        {
            return Err(DomainError::artifact(
                "artifact columns do not match the recognized feature columns",
            ));
        }

        if self.coefficients.len() != self.columns.len() {
            return Err(DomainError::artifact(format!(
                "expected {} coefficients, found {}",
                self.columns.len(),
                self.coefficients.len()
            )));
        }

        Ok(())
    }
}
