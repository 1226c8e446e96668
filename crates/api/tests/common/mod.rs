#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use maint_api::config::ServerConfig;
use maint_api::routes;
use maint_api::state::AppState;
use maint_core::config::ReliabilityConfig;
use maint_core::intervention::{InterventionKind, InterventionRecord, InterventionStatus};
use maint_core::source::{EquipmentEntry, InMemorySource, InterventionSource};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        data_file: PathBuf::from("unused.json"),
        reliability: ReliabilityConfig::default(),
    }
}

/// Build the full application router with all middleware layers over the
/// given source.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack that production uses.
pub fn build_test_app(source: Arc<dyn InterventionSource>) -> Router {
    let state = AppState {
        config: Arc::new(test_config()),
        source,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Fleet fixture: `TST-01` has three curative failures ten days apart, each
/// repaired a day later; `TST-02` has a single unrepaired failure;
/// `TST-03` is in the catalog with no history.
pub fn fleet_source() -> Arc<dyn InterventionSource> {
    let day = |d: u32| Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap();
    let record = |id: i64, code: &str, requested: u32, validated: Option<u32>, description: &str| {
        InterventionRecord {
            id,
            equipment_code: code.to_string(),
            kind: InterventionKind::Curative,
            requested_at: Some(day(requested)),
            validated_at: validated.map(day),
            status: if validated.is_some() {
                InterventionStatus::Completed
            } else {
                InterventionStatus::InProgress
            },
            failure_description: Some(description.to_string()),
        }
    };

    let records = vec![
        record(1, "TST-01", 1, Some(2), "pin misalignment"),
        record(2, "TST-01", 11, Some(12), "fixture wear"),
        record(3, "TST-01", 21, Some(22), "pin misalignment"),
        record(4, "TST-02", 5, None, "power supply"),
    ];
    let equipment = ["TST-01", "TST-02", "TST-03"]
        .iter()
        .map(|code| EquipmentEntry {
            equipment_code: code.to_string(),
            name: None,
            location: None,
        })
        .collect();

    Arc::new(InMemorySource::new(records, equipment))
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body through the router.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
