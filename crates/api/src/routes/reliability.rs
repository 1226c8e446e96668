//! Route definitions for equipment and reliability analytics endpoints.
//!
//! These routers are mounted in `api_routes()`:
//!
//! ```text
//! /equipment                                catalog (GET)
//! /equipment/{code}                         catalog entry (GET)
//! /equipment/{code}/reliability             reliability report (GET)
//! /equipment/{code}/failure-timeline        monthly failure buckets (GET)
//!
//! /reliability/overview                     fleet summary (GET)
//! /reliability/compute                      report over supplied records (POST)
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{equipment, reliability};
use crate::state::AppState;

/// Equipment routes, merged into `api_routes()` with their full paths.
pub fn equipment_router() -> Router<AppState> {
    Router::new()
        .route("/equipment", get(equipment::list_equipment))
        .route("/equipment/{code}", get(equipment::get_equipment))
        .route(
            "/equipment/{code}/reliability",
            get(reliability::get_equipment_report),
        )
        .route(
            "/equipment/{code}/failure-timeline",
            get(reliability::get_failure_timeline),
        )
}

/// Analytics routes nested at `/reliability`.
pub fn reliability_router() -> Router<AppState> {
    Router::new()
        .route("/overview", get(reliability::get_overview))
        .route("/compute", post(reliability::compute_report))
}
