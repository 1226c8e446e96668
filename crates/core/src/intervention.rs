//! Intervention record types and the normalization choke point.
//!
//! Records arrive from the data source with timestamps in several shapes
//! (RFC 3339 strings, bare dates, epoch milliseconds). [`RawInterventionRecord`]
//! accepts all of them and [`RawInterventionRecord::normalize`] converts each
//! one into a canonical [`InterventionRecord`] before any arithmetic happens.

use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{RecordId, Timestamp};

// ---------------------------------------------------------------------------
// InterventionKind
// ---------------------------------------------------------------------------

/// Whether an intervention repaired an observed failure or was scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterventionKind {
    Curative,
    Preventive,
}

impl InterventionKind {
    /// String representation used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            InterventionKind::Curative => "curative",
            InterventionKind::Preventive => "preventive",
        }
    }

    /// Parse a kind label, case-insensitively.
    ///
    /// The ticketing front-end labels kinds in French, so `curatif` and
    /// `preventif` / `préventif` are accepted alongside the English names.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s.trim().to_lowercase().as_str() {
            "curative" | "curatif" | "curative_maintenance" => Ok(InterventionKind::Curative),
            "preventive" | "preventif" | "préventif" | "preventive_maintenance" => {
                Ok(InterventionKind::Preventive)
            }
            other => Err(CoreError::Validation(format!(
                "unknown intervention kind '{other}'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// InterventionStatus
// ---------------------------------------------------------------------------

/// Lifecycle label of an intervention. Used for display counts only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InterventionStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
    /// Any label the ticketing system uses that is not one of the above.
    Other(String),
}

impl InterventionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            InterventionStatus::Pending => "pending",
            InterventionStatus::InProgress => "in_progress",
            InterventionStatus::Completed => "completed",
            InterventionStatus::Cancelled => "cancelled",
            InterventionStatus::Other(label) => label,
        }
    }

    /// Parse a status label. Separators and case are normalized; unknown
    /// labels are preserved verbatim as [`InterventionStatus::Other`].
    pub fn from_label(s: &str) -> Self {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "pending" | "en_attente" => InterventionStatus::Pending,
            "in_progress" | "en_cours" => InterventionStatus::InProgress,
            "completed" | "done" | "termine" | "terminé" => InterventionStatus::Completed,
            "cancelled" | "canceled" | "annule" | "annulé" => InterventionStatus::Cancelled,
            _ => InterventionStatus::Other(s.trim().to_string()),
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, InterventionStatus::Completed)
    }
}

impl From<String> for InterventionStatus {
    fn from(s: String) -> Self {
        Self::from_label(&s)
    }
}

impl From<InterventionStatus> for String {
    fn from(status: InterventionStatus) -> Self {
        status.as_str().to_string()
    }
}

// ---------------------------------------------------------------------------
// InterventionRecord
// ---------------------------------------------------------------------------

/// One maintenance event, with timestamps already normalized to UTC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterventionRecord {
    pub id: RecordId,
    pub equipment_code: String,
    pub kind: InterventionKind,
    pub requested_at: Option<Timestamp>,
    pub validated_at: Option<Timestamp>,
    pub status: InterventionStatus,
    pub failure_description: Option<String>,
}

impl InterventionRecord {
    pub fn is_curative(&self) -> bool {
        self.kind == InterventionKind::Curative
    }

    /// Repair window when both ends are recorded.
    pub fn repair_window(&self) -> Option<(Timestamp, Timestamp)> {
        Some((self.requested_at?, self.validated_at?))
    }
}

// ---------------------------------------------------------------------------
// Raw (wire) representation
// ---------------------------------------------------------------------------

/// A timestamp as it may appear in source data.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    /// Milliseconds since the Unix epoch.
    EpochMillis(f64),
    /// RFC 3339, `YYYY-MM-DDTHH:MM:SS[.fff]` (UTC assumed) or `YYYY-MM-DD`.
    Text(String),
}

impl RawTimestamp {
    /// Convert to a canonical UTC timestamp.
    ///
    /// Blank strings are treated as absent. Anything else that cannot be
    /// interpreted is a validation error rather than a silently dropped value.
    pub fn normalize(&self, field: &str) -> Result<Option<Timestamp>, CoreError> {
        match self {
            RawTimestamp::EpochMillis(ms) => {
                if !ms.is_finite() {
                    return Err(CoreError::Validation(format!(
                        "{field} must be a finite epoch value, got {ms}"
                    )));
                }
                Utc.timestamp_millis_opt(*ms as i64)
                    .single()
                    .map(Some)
                    .ok_or_else(|| {
                        CoreError::Validation(format!("{field} epoch value {ms} is out of range"))
                    })
            }
            RawTimestamp::Text(text) => parse_timestamp_text(text.trim(), field),
        }
    }
}

fn parse_timestamp_text(text: &str, field: &str) -> Result<Option<Timestamp>, CoreError> {
    if text.is_empty() {
        return Ok(None);
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(text) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return Ok(Some(naive.and_utc()));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(Some(naive.and_utc()));
        }
    }
    Err(CoreError::Validation(format!(
        "{field} has an unrecognized timestamp format: '{text}'"
    )))
}

/// An intervention record as delivered by the data source, before
/// normalization. Accepts both snake_case and camelCase field names.
#[derive(Debug, Clone, Deserialize)]
pub struct RawInterventionRecord {
    pub id: RecordId,
    #[serde(alias = "equipmentCode")]
    pub equipment_code: String,
    pub kind: String,
    #[serde(default, alias = "requestedAt")]
    pub requested_at: Option<RawTimestamp>,
    #[serde(default, alias = "validatedAt")]
    pub validated_at: Option<RawTimestamp>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "failureDescription")]
    pub failure_description: Option<String>,
}

impl RawInterventionRecord {
    /// Validate and convert into the canonical record type.
    pub fn normalize(&self) -> Result<InterventionRecord, CoreError> {
        let normalize_ts = |raw: &Option<RawTimestamp>, field: &str| match raw {
            Some(ts) => ts
                .normalize(field)
                .map_err(|e| with_record_context(e, self.id)),
            None => Ok(None),
        };

        Ok(InterventionRecord {
            id: self.id,
            equipment_code: self.equipment_code.clone(),
            kind: InterventionKind::parse(&self.kind).map_err(|e| with_record_context(e, self.id))?,
            requested_at: normalize_ts(&self.requested_at, "requested_at")?,
            validated_at: normalize_ts(&self.validated_at, "validated_at")?,
            status: self
                .status
                .as_deref()
                .map(InterventionStatus::from_label)
                .unwrap_or(InterventionStatus::Pending),
            failure_description: self.failure_description.clone(),
        })
    }
}

/// Normalize a whole batch, failing on the first malformed record.
pub fn normalize_records(raw: &[RawInterventionRecord]) -> Result<Vec<InterventionRecord>, CoreError> {
    raw.iter().map(RawInterventionRecord::normalize).collect()
}

fn with_record_context(err: CoreError, id: RecordId) -> CoreError {
    match err {
        CoreError::Validation(msg) => CoreError::Validation(format!("record {id}: {msg}")),
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn ts(s: &str) -> Timestamp {
        chrono::DateTime::parse_from_rfc3339(s)
            .unwrap()
            .with_timezone(&Utc)
    }

    // -- InterventionKind --

    #[test]
    fn kind_parses_english_and_french_labels() {
        assert_eq!(InterventionKind::parse("CURATIVE").unwrap(), InterventionKind::Curative);
        assert_eq!(InterventionKind::parse("curatif").unwrap(), InterventionKind::Curative);
        assert_eq!(InterventionKind::parse("Preventive").unwrap(), InterventionKind::Preventive);
        assert_eq!(InterventionKind::parse("préventif").unwrap(), InterventionKind::Preventive);
    }

    #[test]
    fn kind_rejects_unknown_label() {
        assert_matches!(InterventionKind::parse("administrative"), Err(CoreError::Validation(_)));
    }

    // -- InterventionStatus --

    #[test]
    fn status_normalizes_separators_and_case() {
        assert_eq!(InterventionStatus::from_label("In-Progress"), InterventionStatus::InProgress);
        assert_eq!(InterventionStatus::from_label("COMPLETED"), InterventionStatus::Completed);
        assert_eq!(InterventionStatus::from_label("canceled"), InterventionStatus::Cancelled);
    }

    #[test]
    fn status_preserves_unknown_labels() {
        let status = InterventionStatus::from_label(" awaiting parts ");
        assert_eq!(status, InterventionStatus::Other("awaiting parts".to_string()));
        assert_eq!(status.as_str(), "awaiting parts");
    }

    #[test]
    fn status_serializes_as_plain_string() {
        let json = serde_json::to_string(&InterventionStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        let back: InterventionStatus = serde_json::from_str("\"completed\"").unwrap();
        assert!(back.is_completed());
    }

    // -- RawTimestamp --

    #[test]
    fn timestamp_accepts_rfc3339_with_offset() {
        let raw = RawTimestamp::Text("2024-01-01T02:00:00+02:00".to_string());
        assert_eq!(raw.normalize("t").unwrap(), Some(ts("2024-01-01T00:00:00Z")));
    }

    #[test]
    fn timestamp_accepts_naive_datetime_and_date_as_utc() {
        let raw = RawTimestamp::Text("2024-01-11T08:30:00".to_string());
        assert_eq!(raw.normalize("t").unwrap(), Some(ts("2024-01-11T08:30:00Z")));

        let raw = RawTimestamp::Text("2024-01-11 08:30:00".to_string());
        assert_eq!(raw.normalize("t").unwrap(), Some(ts("2024-01-11T08:30:00Z")));

        let raw = RawTimestamp::Text("2024-01-21".to_string());
        assert_eq!(raw.normalize("t").unwrap(), Some(ts("2024-01-21T00:00:00Z")));
    }

    #[test]
    fn timestamp_accepts_epoch_millis() {
        let raw = RawTimestamp::EpochMillis(1_704_067_200_000.0);
        assert_eq!(raw.normalize("t").unwrap(), Some(ts("2024-01-01T00:00:00Z")));
    }

    #[test]
    fn blank_timestamp_is_absent() {
        let raw = RawTimestamp::Text("   ".to_string());
        assert_eq!(raw.normalize("t").unwrap(), None);
    }

    #[test]
    fn garbage_timestamp_is_rejected() {
        let raw = RawTimestamp::Text("last tuesday".to_string());
        assert_matches!(raw.normalize("requested_at"), Err(CoreError::Validation(msg)) if msg.contains("requested_at"));
    }

    #[test]
    fn non_finite_epoch_is_rejected() {
        let raw = RawTimestamp::EpochMillis(f64::NAN);
        assert_matches!(raw.normalize("t"), Err(CoreError::Validation(_)));
    }

    // -- RawInterventionRecord --

    #[test]
    fn raw_record_deserializes_camel_case_and_mixed_timestamps() {
        let json = r#"{
            "id": 7,
            "equipmentCode": "TST-01",
            "kind": "CURATIVE",
            "requestedAt": "2024-01-01",
            "validatedAt": 1704153600000,
            "status": "completed",
            "failureDescription": "pin misalignment"
        }"#;
        let raw: RawInterventionRecord = serde_json::from_str(json).unwrap();
        let record = raw.normalize().unwrap();

        assert_eq!(record.id, 7);
        assert_eq!(record.equipment_code, "TST-01");
        assert!(record.is_curative());
        assert_eq!(record.requested_at, Some(ts("2024-01-01T00:00:00Z")));
        assert_eq!(record.validated_at, Some(ts("2024-01-02T00:00:00Z")));
        assert_eq!(record.status, InterventionStatus::Completed);
        assert_eq!(record.failure_description.as_deref(), Some("pin misalignment"));
    }

    #[test]
    fn raw_record_defaults_optional_fields() {
        let json = r#"{ "id": 1, "equipment_code": "X", "kind": "preventive" }"#;
        let raw: RawInterventionRecord = serde_json::from_str(json).unwrap();
        let record = raw.normalize().unwrap();

        assert_eq!(record.requested_at, None);
        assert_eq!(record.validated_at, None);
        assert_eq!(record.status, InterventionStatus::Pending);
        assert_eq!(record.failure_description, None);
        assert_eq!(record.repair_window(), None);
    }

    #[test]
    fn normalize_records_reports_offending_record_id() {
        let raws: Vec<RawInterventionRecord> = serde_json::from_str(
            r#"[
                { "id": 1, "equipment_code": "X", "kind": "curative" },
                { "id": 2, "equipment_code": "X", "kind": "curative", "requested_at": "soon" }
            ]"#,
        )
        .unwrap();

        assert_matches!(
            normalize_records(&raws),
            Err(CoreError::Validation(msg)) if msg.starts_with("record 2:")
        );
    }
}
