//! Report assembly: the single entry point of the reliability engine.
//!
//! [`compute_reliability_report`] is a pure function of its inputs. It reads
//! no clock, keeps no state between calls and returns a report that owns
//! copies of everything it contains, so callers may cache or discard it
//! freely.

use serde::{Deserialize, Serialize};

use crate::config::ReliabilityConfig;
use crate::cost::estimate_cost;
use crate::intervals::compute_intervals;
use crate::intervention::InterventionRecord;
use crate::mtbf::{estimate_mtbf, MtbfMetric};
use crate::mttr::{estimate_mttr, MttrMetric};
use crate::prediction::predict_next_failure;
use crate::ranking::{rank_failure_modes, FailureModeCount};
use crate::record_filter::filter_equipment;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

/// Number of records carrying one status label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
}

/// Reliability metrics of one piece of equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentReliabilityReport {
    pub equipment_code: String,
    pub total_count: usize,
    pub completed_count: usize,
    /// Per-status counts in first-seen order.
    pub status_counts: Vec<StatusCount>,
    pub mtbf: MtbfMetric,
    pub mttr: MttrMetric,
    pub estimated_cost: f64,
    pub failure_timestamps: Vec<Timestamp>,
    pub top_failure_modes: Vec<FailureModeCount>,
    pub predicted_next_failure: Option<Timestamp>,
    /// Only meaningful when `predicted_next_failure` is set; `false` otherwise.
    pub is_imminent: bool,
    /// The `now` the report was computed against.
    pub computed_at: Timestamp,
}

/// Compact row used by fleet overviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReliabilitySummary {
    pub equipment_code: String,
    pub total_count: usize,
    pub failure_count: usize,
    pub mtbf_days: Option<f64>,
    pub mttr_display: Option<String>,
    pub estimated_cost: f64,
    pub predicted_next_failure: Option<Timestamp>,
    pub is_imminent: bool,
}

impl EquipmentReliabilityReport {
    pub fn summary(&self) -> ReliabilitySummary {
        ReliabilitySummary {
            equipment_code: self.equipment_code.clone(),
            total_count: self.total_count,
            failure_count: self.failure_timestamps.len(),
            mtbf_days: self.mtbf.days,
            mttr_display: self.mttr.display(),
            estimated_cost: self.estimated_cost,
            predicted_next_failure: self.predicted_next_failure,
            is_imminent: self.is_imminent,
        }
    }
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Compute the report for `equipment_code` with the default configuration.
pub fn compute_reliability_report(
    records: &[InterventionRecord],
    equipment_code: &str,
    now: Timestamp,
) -> EquipmentReliabilityReport {
    compute_reliability_report_with(records, equipment_code, now, &ReliabilityConfig::default())
}

/// Compute the report for `equipment_code` with explicit parameters.
pub fn compute_reliability_report_with(
    records: &[InterventionRecord],
    equipment_code: &str,
    now: Timestamp,
    config: &ReliabilityConfig,
) -> EquipmentReliabilityReport {
    let selected = filter_equipment(records, equipment_code);
    let intervals = compute_intervals(&selected.curative);
    let mtbf = estimate_mtbf(&intervals);
    let mttr = estimate_mttr(&selected.all);
    let total_count = selected.total_count();
    let estimated_cost = estimate_cost(total_count, config.unit_cost);
    let top_failure_modes = rank_failure_modes(&selected.all, config.top_failure_modes);
    let prediction = predict_next_failure(
        mtbf.days,
        intervals.last_failure(),
        now,
        config.imminent_window_days,
    );

    tracing::debug!(
        equipment_code,
        total_count,
        failure_count = intervals.failure_count(),
        mtbf_days = ?mtbf.days,
        mttr = ?mttr.value,
        imminent = prediction.map(|p| p.is_imminent).unwrap_or(false),
        "Computed reliability report"
    );

    EquipmentReliabilityReport {
        equipment_code: equipment_code.to_string(),
        total_count,
        completed_count: selected.completed_count(),
        status_counts: count_statuses(&selected.all),
        mtbf,
        mttr,
        estimated_cost,
        failure_timestamps: intervals.timestamps,
        top_failure_modes,
        predicted_next_failure: prediction.map(|p| p.predicted_at),
        is_imminent: prediction.map(|p| p.is_imminent).unwrap_or(false),
        computed_at: now,
    }
}

fn count_statuses(records: &[InterventionRecord]) -> Vec<StatusCount> {
    let mut counts: Vec<StatusCount> = Vec::new();
    for record in records {
        let label = record.status.as_str();
        match counts.iter_mut().find(|c| c.status == label) {
            Some(entry) => entry.count += 1,
            None => counts.push(StatusCount {
                status: label.to_string(),
                count: 1,
            }),
        }
    }
    counts
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
