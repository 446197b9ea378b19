//! Health check: reports whether the user store answers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    Reachable,
    Unreachable,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub store: StoreStatus,
    pub version: &'static str,
}

/// GET /health
///
/// 200 when a session can be acquired and answers `SELECT 1` (or the store is
/// in memory), 503 otherwise.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status, store) = match state.store().ping().await {
        Ok(()) => (StatusCode::OK, "ok", StoreStatus::Reachable),
        Err(err) => {
            tracing::warn!(error = %err, "health check: store unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "unavailable",
                StoreStatus::Unreachable,
            )
        }
    };

    let body = HealthResponse {
        status,
        store,
        version: env!("CARGO_PKG_VERSION"),
    };
    (code, Json(body))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
