//! Mean Time Between Failures.

use serde::{Deserialize, Serialize};

use crate::intervals::FailureIntervals;

pub const REASON_NO_FAILURES: &str = "no recorded failures";
pub const REASON_SINGLE_FAILURE: &str = "fewer than two recorded failures";

/// A metric that is either available or carries the reason it is not.
///
/// Zero is a legitimate (and alarming) MTBF, so absence is never encoded as
/// zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MtbfMetric {
    pub days: Option<f64>,
    pub unavailability_reason: Option<String>,
}

impl MtbfMetric {
    fn available(days: f64) -> Self {
        Self {
            days: Some(days),
            unavailability_reason: None,
        }
    }

    fn unavailable(reason: &str) -> Self {
        Self {
            days: None,
            unavailability_reason: Some(reason.to_string()),
        }
    }

    /// Value rounded to one decimal place for display, e.g. `"10.0 days"`.
    pub fn display(&self) -> Option<String> {
        self.days.map(|d| format!("{d:.1} days"))
    }
}

/// Mean of the inter-failure gaps.
pub fn estimate_mtbf(intervals: &FailureIntervals) -> MtbfMetric {
    match intervals.failure_count() {
        0 => MtbfMetric::unavailable(REASON_NO_FAILURES),
        1 => MtbfMetric::unavailable(REASON_SINGLE_FAILURE),
        _ => {
            let gaps = &intervals.gaps_days;
            MtbfMetric::available(gaps.iter().sum::<f64>() / gaps.len() as f64)
        }
    }
}
