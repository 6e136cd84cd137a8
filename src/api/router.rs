use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::beds;
use super::health;
use super::state::AppState;
use super::stay;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Prediction API
        .route("/predict-stay", post(stay::predict_stay))
        .route("/beds-available", get(beds::beds_available))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
