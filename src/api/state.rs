//! Application state shared across request handlers.

use std::sync::Arc;

use crate::domain::predictor::Predictor;
use crate::infrastructure::services::{OccupancyService, StayService};

/// Shared per-process state.
///
/// The predictor is loaded once at startup and never written afterwards, so
/// clones of this state are safe across concurrent handlers without locking.
#[derive(Clone, Debug)]
pub struct AppState {
    pub predictor: Arc<dyn Predictor>,
    pub stay_service: Arc<StayService>,
    pub occupancy_service: Arc<OccupancyService>,
}

impl AppState {
    pub fn new(
        predictor: Arc<dyn Predictor>,
        stay_service: Arc<StayService>,
        occupancy_service: Arc<OccupancyService>,
    ) -> Self {
        Self {
            predictor,
            stay_service,
            occupancy_service,
        }
    }
}
