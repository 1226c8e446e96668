//! Mean Time To Repair, with magnitude-based unit selection.

use serde::{Deserialize, Serialize};

use crate::intervention::InterventionRecord;
use crate::types::duration_in_days;

pub const REASON_NO_VALIDATION_DATES: &str = "no validation dates recorded";

/// Hours per day (24.0).
pub const HOURS_PER_DAY: f64 = 24.0;

/// Display unit of the repair time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MttrUnit {
    Hours,
    Days,
}

impl MttrUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            MttrUnit::Hours => "hours",
            MttrUnit::Days => "days",
        }
    }

    /// Below one day the repair time is expressed in hours, otherwise in days.
    pub fn select(mttr_days: f64) -> Self {
        if mttr_days < 1.0 {
            MttrUnit::Hours
        } else {
            MttrUnit::Days
        }
    }

    /// Express a day count in this unit.
    pub fn convert_days(&self, days: f64) -> f64 {
        match self {
            MttrUnit::Hours => days * HOURS_PER_DAY,
            MttrUnit::Days => days,
        }
    }
}

/// Mean repair duration. `value` keeps full precision; only [`display`]
/// rounds.
///
/// [`display`]: MttrMetric::display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MttrMetric {
    pub value: Option<f64>,
    pub unit: Option<MttrUnit>,
    pub unavailability_reason: Option<String>,
}

impl MttrMetric {
    /// Value rounded to one decimal place with its unit, e.g. `"23.0 hours"`.
    pub fn display(&self) -> Option<String> {
        match (self.value, self.unit) {
            (Some(value), Some(unit)) => Some(format!("{value:.1} {}", unit.as_str())),
            _ => None,
        }
    }
}

/// Average `validated_at - requested_at` over every record that has both.
///
/// Curative and preventive records both count.
pub fn estimate_mttr(records: &[InterventionRecord]) -> MttrMetric {
    let durations: Vec<f64> = records
        .iter()
        .filter_map(InterventionRecord::repair_window)
        .map(|(requested, validated)| duration_in_days(validated - requested))
        .collect();

    if durations.is_empty() {
        return MttrMetric {
            value: None,
            unit: None,
            unavailability_reason: Some(REASON_NO_VALIDATION_DATES.to_string()),
        };
    }

    let mttr_days = durations.iter().sum::<f64>() / durations.len() as f64;
    let unit = MttrUnit::select(mttr_days);
    MttrMetric {
        value: Some(unit.convert_days(mttr_days)),
        unit: Some(unit),
        unavailability_reason: None,
    }
}
