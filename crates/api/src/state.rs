use std::sync::Arc;

use maint_core::source::InterventionSource;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration, including the reliability engine parameters.
    pub config: Arc<ServerConfig>,
    /// Provider of intervention records and the equipment catalog. Queried
    /// fresh on every request; nothing is cached between calls.
    pub source: Arc<dyn InterventionSource>,
}
