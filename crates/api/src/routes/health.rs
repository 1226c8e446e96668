use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use maint_core::config::ReliabilityConfig;

use crate::state::AppState;

/// Liveness payload, echoing the engine parameters reports are computed with.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub engine: ReliabilityConfig,
}

/// GET /health
///
/// Never reads the record source: an unreadable data file surfaces on the
/// reliability endpoints, not here.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        engine: state.config.reliability.clone(),
    })
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
