//! Failure-mode frequency ranking.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::intervention::InterventionRecord;

/// One ranked failure description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureModeCount {
    pub description: String,
    pub count: usize,
}

/// Count descriptions by exact string equality and keep the `limit` most
/// frequent.
///
/// Records without a description, or with a blank one, are ignored. Equal
/// counts keep the order in which each description first appeared in
/// `records`.
pub fn rank_failure_modes(records: &[InterventionRecord], limit: usize) -> Vec<FailureModeCount> {
    // description -> (first-seen position, count)
    let mut tally: HashMap<&str, (usize, usize)> = HashMap::new();
    for description in records
        .iter()
        .filter_map(|r| r.failure_description.as_deref())
        .filter(|d| !d.trim().is_empty())
    {
        let next = tally.len();
        tally.entry(description).or_insert((next, 0)).1 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = tally
        .into_iter()
        .map(|(description, (first_seen, count))| (description, first_seen, count))
        .collect();
    ranked.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.1.cmp(&b.1)));
    ranked.truncate(limit);

    ranked
        .into_iter()
        .map(|(description, _, count)| FailureModeCount {
            description: description.to_string(),
            count,
        })
        .collect()
}
