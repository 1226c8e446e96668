pub mod health;
pub mod reliability;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /equipment                                catalog
/// /equipment/{code}                         catalog entry
/// /equipment/{code}/reliability             reliability report (?now=, epoch ms or date)
/// /equipment/{code}/failure-timeline        monthly failure buckets
///
/// /reliability/overview                     summary per catalog entry (?now=, epoch ms or date)
/// /reliability/compute                      report over supplied records (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(reliability::equipment_router())
        .nest("/reliability", reliability::reliability_router())
}
