//! Domain layer - feature columns, patient tables, prediction and bed math

pub mod error;
pub mod features;
pub mod occupancy;
pub mod patient;
pub mod predictor;

pub use error::DomainError;
pub use features::{ensure_feature_columns, MODEL_FEATURE_COLUMNS};
pub use occupancy::{available_beds, count_still_admitted, estimated_discharge, TOTAL_BEDS};
pub use patient::{FeatureTable, PatientRecord};
pub use predictor::{round_stay, Predictor};
