//! Failure timestamps and the gaps between consecutive failures.

use crate::intervention::InterventionRecord;
use crate::types::{duration_in_days, Timestamp};

/// Ordered failure history of one equipment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FailureIntervals {
    /// `requested_at` of every curative record that has one, ascending.
    pub timestamps: Vec<Timestamp>,
    /// `gaps_days[i] = timestamps[i + 1] - timestamps[i]`, in fractional days.
    pub gaps_days: Vec<f64>,
}

impl FailureIntervals {
    pub fn failure_count(&self) -> usize {
        self.timestamps.len()
    }

    pub fn last_failure(&self) -> Option<Timestamp> {
        self.timestamps.last().copied()
    }
}

/// Sort the failures of `curative` by `requested_at` and compute the gaps.
///
/// Records without `requested_at` are dropped before sorting. Equal
/// timestamps are ordered by record id so the output is deterministic
/// regardless of input order.
pub fn compute_intervals(curative: &[InterventionRecord]) -> FailureIntervals {
    let mut dated: Vec<(Timestamp, i64)> = curative
        .iter()
        .filter_map(|r| r.requested_at.map(|at| (at, r.id)))
        .collect();
    dated.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

    let timestamps: Vec<Timestamp> = dated.into_iter().map(|(at, _)| at).collect();
    let gaps_days = timestamps
        .windows(2)
        .map(|pair| duration_in_days(pair[1] - pair[0]))
        .collect();

    FailureIntervals {
        timestamps,
        gaps_days,
    }
}
