//! Handlers for equipment reliability analytics.
//!
//! Every handler fetches a fresh record snapshot, then delegates to the pure
//! engine in `maint_core::report`. The server clock is read here, at the
//! request boundary, and passed down explicitly as `now`.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use maint_core::intervals::compute_intervals;
use maint_core::intervention::{normalize_records, RawInterventionRecord, RawTimestamp};
use maint_core::record_filter::filter_equipment;
use maint_core::report::{compute_reliability_report_with, ReliabilitySummary};
use maint_core::timeline::monthly_buckets;
use maint_core::types::Timestamp;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request structs
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct NowParams {
    /// Reference time for the imminence check, as epoch milliseconds or a
    /// date string; defaults to the server clock.
    pub now: Option<String>,
}

impl NowParams {
    /// Query strings carry no type information, so a numeric value is read as
    /// epoch milliseconds and anything else as a date string.
    fn raw_now(self) -> Option<RawTimestamp> {
        self.now.map(|text| match text.trim().parse::<f64>() {
            Ok(ms) => RawTimestamp::EpochMillis(ms),
            Err(_) => RawTimestamp::Text(text),
        })
    }
}

/// Body of `POST /reliability/compute`.
#[derive(Debug, Deserialize)]
pub struct ComputeReportRequest {
    #[serde(alias = "equipmentCode")]
    pub equipment_code: String,
    #[serde(default)]
    pub now: Option<RawTimestamp>,
    #[serde(default)]
    pub records: Vec<RawInterventionRecord>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve an optional caller-supplied reference time, falling back to the
/// server clock when absent or blank.
fn resolve_now(raw: Option<RawTimestamp>) -> AppResult<Timestamp> {
    match raw {
        Some(ts) => Ok(ts.normalize("now")?.unwrap_or_else(Utc::now)),
        None => Ok(Utc::now()),
    }
}

// ---------------------------------------------------------------------------
// Per-equipment reports
// ---------------------------------------------------------------------------

/// GET /api/v1/equipment/{code}/reliability
///
/// Full reliability report for one equipment. An unknown code yields an
/// empty report rather than an error.
pub async fn get_equipment_report(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(params): Query<NowParams>,
) -> AppResult<impl IntoResponse> {
    let now = resolve_now(params.raw_now())?;
    let records = state.source.fetch_all_intervention_records().await?;

    let report = compute_reliability_report_with(&records, &code, now, &state.config.reliability);
    Ok(Json(DataResponse { data: report }))
}

/// GET /api/v1/equipment/{code}/failure-timeline
///
/// Failures per calendar month for the timeline bar chart.
pub async fn get_failure_timeline(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<impl IntoResponse> {
    let records = state.source.fetch_all_intervention_records().await?;

    let selected = filter_equipment(&records, &code);
    let intervals = compute_intervals(&selected.curative);
    Ok(Json(DataResponse {
        data: monthly_buckets(&intervals.timestamps),
    }))
}

// ---------------------------------------------------------------------------
// Fleet overview
// ---------------------------------------------------------------------------

/// GET /api/v1/reliability/overview
///
/// One summary row per catalog entry, in catalog order.
pub async fn get_overview(
    State(state): State<AppState>,
    Query(params): Query<NowParams>,
) -> AppResult<impl IntoResponse> {
    let now = resolve_now(params.raw_now())?;
    let catalog = state.source.fetch_equipment_catalog().await?;
    let records = state.source.fetch_all_intervention_records().await?;

    let summaries: Vec<ReliabilitySummary> = catalog
        .iter()
        .map(|entry| {
            compute_reliability_report_with(
                &records,
                &entry.equipment_code,
                now,
                &state.config.reliability,
            )
            .summary()
        })
        .collect();

    let imminent = summaries.iter().filter(|s| s.is_imminent).count();
    tracing::info!(equipment = summaries.len(), imminent, "Computed reliability overview");

    Ok(Json(DataResponse { data: summaries }))
}

// ---------------------------------------------------------------------------
// Ad-hoc computation
// ---------------------------------------------------------------------------

/// POST /api/v1/reliability/compute
///
/// Computes a report over records supplied in the request body instead of
/// the configured source.
pub async fn compute_report(
    State(state): State<AppState>,
    Json(input): Json<ComputeReportRequest>,
) -> AppResult<impl IntoResponse> {
    if input.equipment_code.trim().is_empty() {
        return Err(AppError::BadRequest(
            "equipment_code must not be empty".to_string(),
        ));
    }
    let now = resolve_now(input.now)?;
    let records = normalize_records(&input.records)?;

    let report = compute_reliability_report_with(
        &records,
        &input.equipment_code,
        now,
        &state.config.reliability,
    );
    Ok(Json(DataResponse { data: report }))
}
