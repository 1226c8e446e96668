//! Handlers for the equipment catalog.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use maint_core::error::CoreError;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/equipment
///
/// Lists every selectable piece of equipment in catalog order.
pub async fn list_equipment(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let catalog = state.source.fetch_equipment_catalog().await?;
    Ok(Json(DataResponse { data: catalog }))
}

/// GET /api/v1/equipment/{code}
///
/// Returns one catalog entry, or 404 when the code is not in the catalog.
pub async fn get_equipment(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<impl IntoResponse> {
    let entry = state
        .source
        .fetch_equipment_catalog()
        .await?
        .into_iter()
        .find(|e| e.equipment_code == code)
        .ok_or(CoreError::NotFound {
            entity: "Equipment",
            code,
        })?;
    Ok(Json(DataResponse { data: entry }))
}
