//! The opaque stay-predictor seam.

use std::fmt::Debug;

use crate::domain::patient::FeatureTable;
use crate::domain::DomainError;

/// A trained length-of-stay model behind a single batch operation.
///
/// Implementations take the whole feature table and return one continuous
/// output (days of stay) per row. Everything around this trait is independent
/// of the underlying model format.
pub trait Predictor: Send + Sync + Debug {
    /// Predict a continuous stay length, one output per table row.
    fn predict(&self, table: &FeatureTable) -> Result<Vec<f64>, DomainError>;

    /// Model family name, for startup logging.
    fn family(&self) -> &'static str;
}

/// Round a continuous model output to whole days.
///
/// Ties round to even, matching the rounding the model was evaluated with.
pub fn round_stay(output: f64) -> i64 {
    output.round_ties_even() as i64
}

#[cfg(test)]
pub mod mock {
    use super::*;

    /// Scriptable predictor for tests.
    #[derive(Debug, Default)]
    pub struct MockPredictor {
        constant: Option<f64>,
        outputs: Option<Vec<f64>>,
        error: Option<String>,
    }

    impl MockPredictor {
        pub fn new() -> Self {
            Self::default()
        }

        /// Return this output for every row.
        pub fn constant(output: f64) -> Self {
            Self {
                constant: Some(output),
                ..Self::default()
            }
        }

        /// Return exactly these outputs; row count must match.
        pub fn with_outputs(mut self, outputs: Vec<f64>) -> Self {
            self.outputs = Some(outputs);
            self
        }

        pub fn with_error(mut self, error: impl Into<String>) -> Self {
            self.error = Some(error.into());
            self
        }
    }

    impl Predictor for MockPredictor {
        fn predict(&self, table: &FeatureTable) -> Result<Vec<f64>, DomainError> {
            if let Some(ref error) = self.error {
                return Err(DomainError::predictor(error.clone()));
            }

            if let Some(ref outputs) = self.outputs {
                if outputs.len() != table.len() {
                    return Err(DomainError::predictor(format!(
                        "mock configured with {} outputs for {} rows",
                        outputs.len(),
                        table.len()
                    )));
                }
                return Ok(outputs.clone());
            }

            let output = self.constant.unwrap_or(0.0);
            Ok(vec![output; table.len()])
        }

        fn family(&self) -> &'static str {
            "mock"
        }
    }
}
