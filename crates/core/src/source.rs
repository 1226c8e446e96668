//! Boundary with the data provider that supplies intervention records and
//! the equipment catalog.
//!
//! The engine never fetches anything itself. Callers obtain a snapshot
//! through an [`InterventionSource`] and hand the records to
//! [`crate::report::compute_reliability_report`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::intervention::{normalize_records, InterventionRecord, RawInterventionRecord};

/// One selectable piece of equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentEntry {
    #[serde(alias = "equipmentCode")]
    pub equipment_code: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Provider of intervention history and the equipment catalog.
///
/// Implementations may return records in any order, and an empty history is
/// a valid answer.
#[async_trait]
pub trait InterventionSource: Send + Sync {
    async fn fetch_all_intervention_records(&self) -> Result<Vec<InterventionRecord>, CoreError>;

    async fn fetch_equipment_catalog(&self) -> Result<Vec<EquipmentEntry>, CoreError>;
}

// ---------------------------------------------------------------------------
// Snapshot documents
// ---------------------------------------------------------------------------

/// A serialized export: `{ "records": [...], "equipment": [...] }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceSnapshot {
    #[serde(default)]
    pub records: Vec<RawInterventionRecord>,
    #[serde(default)]
    pub equipment: Vec<EquipmentEntry>,
}

/// Parse and normalize a JSON snapshot document.
pub fn parse_snapshot(json: &str) -> Result<InMemorySource, CoreError> {
    let snapshot: SourceSnapshot = serde_json::from_str(json)
        .map_err(|e| CoreError::Validation(format!("invalid snapshot document: {e}")))?;
    let records = normalize_records(&snapshot.records)?;
    Ok(InMemorySource::new(records, snapshot.equipment))
}

// ---------------------------------------------------------------------------
// InMemorySource
// ---------------------------------------------------------------------------

/// Source backed by vectors already held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<InterventionRecord>,
    equipment: Vec<EquipmentEntry>,
}

impl InMemorySource {
    pub fn new(records: Vec<InterventionRecord>, equipment: Vec<EquipmentEntry>) -> Self {
        Self { records, equipment }
    }
}

#[async_trait]
impl InterventionSource for InMemorySource {
    async fn fetch_all_intervention_records(&self) -> Result<Vec<InterventionRecord>, CoreError> {
        Ok(self.records.clone())
    }

    async fn fetch_equipment_catalog(&self) -> Result<Vec<EquipmentEntry>, CoreError> {
        Ok(self.equipment.clone())
    }
}
