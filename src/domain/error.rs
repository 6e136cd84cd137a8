use thiserror::Error;

/// Core domain errors.
///
/// Display strings are the exact messages surfaced to API clients, so the
/// wording here is part of the response contract.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Missing column: {column}")]
    MissingColumn { column: String },

    #[error("{path} not found!")]
    ArtifactMissing { path: String },

    #[error("{path} not found!")]
    SnapshotMissing { path: String },

    #[error("Invalid model artifact: {message}")]
    Artifact { message: String },

    #[error("Prediction failed: {message}")]
    Predictor { message: String },

    #[error("Malformed snapshot: {message}")]
    Snapshot { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    pub fn artifact_missing(path: impl Into<String>) -> Self {
        Self::ArtifactMissing { path: path.into() }
    }

    pub fn snapshot_missing(path: impl Into<String>) -> Self {
        Self::SnapshotMissing { path: path.into() }
    }

    pub fn artifact(message: impl Into<String>) -> Self {
        Self::Artifact {
            message: message.into(),
        }
    }

    pub fn predictor(message: impl Into<String>) -> Self {
        Self::Predictor {
            message: message.into(),
        }
    }

    pub fn snapshot(message: impl Into<String>) -> Self {
        Self::Snapshot {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
