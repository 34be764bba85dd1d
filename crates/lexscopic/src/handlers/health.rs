//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Repository check with the current record count

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::state::AppState;

/// Body returned by `/healthz`.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub healthy: bool,
    pub events: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Reports whether the working list can be read.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> Response {
    match state.event_repo.count().await {
        Ok(events) => (
            StatusCode::OK,
            Json(HealthStatus {
                healthy: true,
                events,
                error: None,
            }),
        )
            .into_response(),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthStatus {
                healthy: false,
                events: 0,
                error: Some(e.to_string()),
            }),
        )
            .into_response(),
    }
}
