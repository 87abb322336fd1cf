//! Liveness and readiness probes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Probe response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok`, `ready` or `unavailable`.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
}

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// GET /health
///
/// Answers as long as the process is serving requests.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: VERSION,
    })
}

/// GET /ready
///
/// Opens and drops a storage session; 503 if the store cannot be reached.
async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.sessions.open().await {
        Ok(_session) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ready",
                version: VERSION,
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable",
                    version: VERSION,
                }),
            )
        }
    }
}

/// Returns the probe router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
}
