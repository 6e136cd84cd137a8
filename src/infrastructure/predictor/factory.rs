//! Loads the serialized predictor at startup.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::domain::predictor::Predictor;
use crate::domain::DomainError;

use super::artifact::PredictorArtifact;
use super::linear::LinearModel;

/// Factory for the process-wide predictor.
#[derive(Debug)]
pub struct PredictorFactory;

impl PredictorFactory {
    /// Load the predictor artifact from disk.
    ///
    /// A missing or corrupt artifact is unrecoverable at startup; the caller
    /// is expected to abort. There is no retry.
    pub fn load(path: &Path) -> Result<Arc<dyn Predictor>, DomainError> {
        if !path.exists() {
            return Err(DomainError::artifact_missing(path.display().to_string()));
        }

        let raw = std::fs::read_to_string(path).map_err(|e| {
            DomainError::artifact(format!("failed to read {}: {}", path.display(), e))
        })?;
        let artifact: PredictorArtifact = serde_json::from_str(&raw).map_err(|e| {
            DomainError::artifact(format!("failed to parse {}: {}", path.display(), e))
        })?;

        let predictor: Arc<dyn Predictor> = match artifact {
            PredictorArtifact::LinearRegression(weights) => {
                Arc::new(LinearModel::from_artifact(weights)?)
            }
        };

        info!("Loaded predictor: {}", predictor.family());
        Ok(predictor)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::domain::features::MODEL_FEATURE_COLUMNS;

    fn write_artifact(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn valid_artifact_json() -> String {
        serde_json::json!({
            "family": "linear_regression",
            "columns": MODEL_FEATURE_COLUMNS,
            "coefficients": vec![0.05; MODEL_FEATURE_COLUMNS.len()],
            "intercept": 3.0,
        })
        .to_string()
    }

    #[test]
    fn test_load_valid_artifact() {
        let file = write_artifact(&valid_artifact_json());

        let predictor = PredictorFactory::load(file.path()).unwrap();
        assert_eq!(predictor.family(), "linear_regression");
    }

    #[test]
    fn test_missing_artifact_is_fatal() {
        let err = PredictorFactory::load(Path::new("no_such_model.json")).unwrap_err();
        assert_eq!(err.to_string(), "no_such_model.json not found!");
    }

    #[test]
    fn test_malformed_artifact_rejected() {
        let file = write_artifact("{ not json");

        let err = PredictorFactory::load(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Invalid model artifact"));
    }

    #[test]
    fn test_wrong_columns_rejected() {
        let raw = serde_json::json!({
            "family": "linear_regression",
            "columns": ["AGE", "GENDER"],
            "coefficients": [0.1, 0.2],
            "intercept": 1.0,
        })
        .to_string();
        let file = write_artifact(&raw);

        let err = PredictorFactory::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("do not match"));
    }
}
