//! Health check endpoints for liveness/readiness probes

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::domain::features::MODEL_FEATURE_COLUMNS;
use crate::domain::patient::{FeatureTable, PatientRecord};

use super::state::AppState;

/// Detailed health response with component status
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
}

/// Health check status
#[derive(Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Individual component health check
#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Simple health check - returns 200 if the service is running
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
    };

    (StatusCode::OK, axum::Json(response))
}

/// Readiness check: the predictor must answer and the snapshot should exist.
///
/// A missing snapshot degrades readiness rather than failing it; predictions
/// still work without one.
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let mut checks = vec![check_predictor(&state)];
    checks.push(check_snapshot(&state).await);

    let overall = if checks.iter().any(|c| c.status == HealthStatus::Unhealthy) {
        HealthStatus::Unhealthy
    } else if checks.iter().any(|c| c.status == HealthStatus::Degraded) {
        HealthStatus::Degraded
    } else {
        HealthStatus::Healthy
    };

    let status_code = match overall {
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::OK,
    };

    let response = HealthResponse {
        status: overall,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(checks),
    };

    (status_code, axum::Json(response))
}

/// Liveness check for crash detection
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

fn check_predictor(state: &AppState) -> HealthCheck {
    // Synthetic all-zero row; only proves the model is wired up.
    let mut record = PatientRecord::new();
    for column in MODEL_FEATURE_COLUMNS {
        record.insert(column, 0);
    }
    let table = FeatureTable::from_record(record);

    match state.predictor.predict(&table) {
        Ok(_) => HealthCheck {
            name: "predictor".to_string(),
            status: HealthStatus::Healthy,
            message: None,
        },
        Err(e) => HealthCheck {
            name: "predictor".to_string(),
            status: HealthStatus::Unhealthy,
            message: Some(e.to_string()),
        },
    }
}

async fn check_snapshot(state: &AppState) -> HealthCheck {
    let path = state.occupancy_service.snapshot_path();

    match tokio::fs::try_exists(path).await {
        Ok(true) => HealthCheck {
            name: "snapshot".to_string(),
            status: HealthStatus::Healthy,
            message: None,
        },
        _ => HealthCheck {
            name: "snapshot".to_string(),
            status: HealthStatus::Degraded,
            message: Some(format!("{} not found", path.display())),
        },
    }
}
