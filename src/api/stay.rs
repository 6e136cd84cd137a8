//! Stay prediction endpoint handler

use axum::extract::State;
use tracing::{info, warn};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{ApiResponse, Json, PredictStayResponse};
use crate::domain::patient::PatientRecord;

/// POST /predict-stay
pub async fn predict_stay(
    State(state): State<AppState>,
    Json(record): Json<PatientRecord>,
) -> ApiResponse<PredictStayResponse> {
    let request_id = Uuid::new_v4().to_string();
    info!(request_id = %request_id, "Processing stay prediction request");

    let result = state.stay_service.predict(record);
    if let Err(ref err) = result {
        warn!(request_id = %request_id, error = %err, "Stay prediction failed");
    }

    result.map(PredictStayResponse::new).into()
}
