use std::path::PathBuf;

use maint_core::config::{
    ReliabilityConfig, DEFAULT_IMMINENT_WINDOW_DAYS, DEFAULT_TOP_FAILURE_MODES, DEFAULT_UNIT_COST,
};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JSON snapshot with `records` and `equipment` arrays.
    pub data_file: PathBuf,
    /// Parameters handed to every report computation.
    pub reliability: ReliabilityConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DATA_FILE`            | `data/interventions.json`  |
    /// | `UNIT_COST`            | `500`                      |
    /// | `IMMINENT_WINDOW_DAYS` | `7`                        |
    /// | `TOP_FAILURE_MODES`    | `5`                        |
    ///
    /// Panics on unparseable or out-of-range values so misconfiguration is
    /// caught at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let data_file = std::env::var("DATA_FILE")
            .unwrap_or_else(|_| "data/interventions.json".into())
            .into();

        let reliability = ReliabilityConfig {
            unit_cost: env_or("UNIT_COST", DEFAULT_UNIT_COST),
            imminent_window_days: env_or("IMMINENT_WINDOW_DAYS", DEFAULT_IMMINENT_WINDOW_DAYS),
            top_failure_modes: env_or("TOP_FAILURE_MODES", DEFAULT_TOP_FAILURE_MODES),
        };
        if let Err(e) = reliability.validate() {
            panic!("Invalid reliability configuration: {e}");
        }

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            data_file,
            reliability,
        }
    }
}

/// Read and parse `key`, falling back to `default` when unset.
fn env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} must be a valid value, got '{raw}': {e}")),
        Err(_) => default,
    }
}
