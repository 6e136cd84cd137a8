//! Hospital Bed Occupancy API
//!
//! Serves a pre-trained length-of-stay model over HTTP:
//! - `POST /predict-stay` predicts one patient's stay in whole days
//! - `GET /beds-available` estimates today's free beds from the
//!   admitted-patient snapshot

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::predictor::PredictorFactory;
use infrastructure::services::{OccupancyService, StayService};
use infrastructure::snapshot::CsvSnapshotReader;

/// Create the application state, loading the predictor artifact once.
///
/// A missing or corrupt artifact is unrecoverable: the error propagates out
/// of `main` and the process does not start.
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let predictor = PredictorFactory::load(&config.model.artifact_path)?;

    let snapshot = CsvSnapshotReader::new(&config.occupancy.snapshot_path);
    let stay_service = Arc::new(StayService::new(predictor.clone()));
    let occupancy_service = Arc::new(OccupancyService::new(predictor.clone(), snapshot));

    Ok(AppState::new(predictor, stay_service, occupancy_service))
}
