//! Next-failure projection and proximity alert.
//!
//! The projection is a naive linear extrapolation: last failure plus the mean
//! gap. Any trend in the gap sequence is ignored, and there is no variance or
//! confidence band. Downstream alerting depends on the exact threshold
//! behaviour of [`predict_next_failure`].

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::types::{Timestamp, MS_PER_DAY};

/// A projected failure date with its imminence classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FailurePrediction {
    pub predicted_at: Timestamp,
    pub is_imminent: bool,
}

/// Project `last_failure + mtbf_days` and flag it when it falls strictly
/// within `window_days` of `now`.
///
/// Returns `None` when either prerequisite is missing, or when the projected
/// date is outside the representable range. A prediction already in the past
/// is imminent. A window too large to represent never flags imminence.
pub fn predict_next_failure(
    mtbf_days: Option<f64>,
    last_failure: Option<Timestamp>,
    now: Timestamp,
    window_days: i64,
) -> Option<FailurePrediction> {
    let mtbf_days = mtbf_days.filter(|d| d.is_finite())?;
    let last_failure = last_failure?;

    let offset = Duration::try_milliseconds((mtbf_days * MS_PER_DAY).round() as i64)?;
    let predicted_at = last_failure.checked_add_signed(offset)?;
    // A window too wide for `Duration` cannot be compared against; not imminent.
    let is_imminent = Duration::try_days(window_days)
        .map(|window| predicted_at - now < window)
        .unwrap_or(false);

    Some(FailurePrediction {
        predicted_at,
        is_imminent,
    })
}
