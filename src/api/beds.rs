//! Bed availability endpoint handler

use axum::extract::State;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{ApiResponse, BedsAvailableResponse};

/// GET /beds-available
pub async fn beds_available(State(state): State<AppState>) -> ApiResponse<BedsAvailableResponse> {
    let request_id = Uuid::new_v4().to_string();
    info!(request_id = %request_id, "Computing bed availability");

    let result = state.occupancy_service.beds_available().await;
    match &result {
        Ok(available) => {
            debug!(request_id = %request_id, available = *available, "Bed availability computed");
        }
        Err(err) => {
            warn!(request_id = %request_id, error = %err, "Bed availability failed");
        }
    }

    result
        .map(|available_beds| BedsAvailableResponse { available_beds })
        .into()
}
