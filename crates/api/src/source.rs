//! File-backed intervention source.

use std::path::PathBuf;

use async_trait::async_trait;
use maint_core::error::CoreError;
use maint_core::intervention::InterventionRecord;
use maint_core::source::{parse_snapshot, EquipmentEntry, InMemorySource, InterventionSource};

/// Reads a JSON snapshot (`{ "records": [...], "equipment": [...] }`) from
/// disk on every call, so edits to the file show up on the next request.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(&self) -> Result<InMemorySource, CoreError> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CoreError::Internal(format!("failed to read {}: {e}", self.path.display()))
        })?;
        // A malformed data file is a server-side fault, not a client error.
        let source = parse_snapshot(&contents).map_err(|e| {
            CoreError::Internal(format!("failed to parse {}: {e}", self.path.display()))
        })?;
        tracing::debug!(path = %self.path.display(), "Loaded intervention snapshot");
        Ok(source)
    }
}

#[async_trait]
impl InterventionSource for JsonFileSource {
    async fn fetch_all_intervention_records(&self) -> Result<Vec<InterventionRecord>, CoreError> {
        self.load().await?.fetch_all_intervention_records().await
    }

    async fn fetch_equipment_catalog(&self) -> Result<Vec<EquipmentEntry>, CoreError> {
        self.load().await?.fetch_equipment_catalog().await
    }
}
