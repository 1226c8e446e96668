//! Monthly failure buckets for the failure-timeline bar chart.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Failures recorded in one calendar month (UTC).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineBucket {
    /// `YYYY-MM`.
    pub period: String,
    pub failure_count: usize,
}

/// Bucket failure timestamps by month, in any input order.
///
/// Months between the earliest and latest failure with no failures are
/// emitted with a zero count so the chart has a continuous axis.
pub fn monthly_buckets(timestamps: &[Timestamp]) -> Vec<TimelineBucket> {
    let month_index = |t: &Timestamp| t.year() * 12 + t.month0() as i32;
    let (Some(start), Some(end)) = (
        timestamps.iter().map(month_index).min(),
        timestamps.iter().map(month_index).max(),
    ) else {
        return Vec::new();
    };

    let mut counts = vec![0usize; (end - start + 1) as usize];
    for t in timestamps {
        counts[(month_index(t) - start) as usize] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(offset, failure_count)| {
            let index = start + offset as i32;
            TimelineBucket {
                period: format!("{:04}-{:02}", index.div_euclid(12), index.rem_euclid(12) + 1),
                failure_count,
            }
        })
        .collect()
}
