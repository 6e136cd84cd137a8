//! Linear-regression predictor.

use crate::domain::patient::FeatureTable;
use crate::domain::predictor::Predictor;
use crate::domain::DomainError;

use super::artifact::LinearArtifact;

/// Linear model over the recognized feature columns.
#[derive(Debug, Clone)]
pub struct LinearModel {
    columns: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LinearModel {
    pub fn from_artifact(artifact: LinearArtifact) -> Result<Self, DomainError> {
        artifact.validate()?;

        Ok(Self {
            columns: artifact.columns,
            coefficients: artifact.coefficients,
            intercept: artifact.intercept,
        })
    }
}

impl Predictor for LinearModel {
    fn predict(&self, table: &FeatureTable) -> Result<Vec<f64>, DomainError> {
        let mut outputs = Vec::with_capacity(table.len());

        for row in table.rows() {
            let mut output = self.intercept;
            for (column, coefficient) in self.columns.iter().zip(&self.coefficients) {
                output += coefficient * row.numeric(column)?;
            }
            outputs.push(output);
        }

        Ok(outputs)
    }

    fn family(&self) -> &'static str {
        "linear_regression"
    }
}
