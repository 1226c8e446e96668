//! Tunable parameters of the reliability engine.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Flat cost charged per intervention, currency-agnostic.
pub const DEFAULT_UNIT_COST: f64 = 500.0;

/// A predicted failure closer than this many days is flagged imminent.
pub const DEFAULT_IMMINENT_WINDOW_DAYS: i64 = 7;

/// Widest accepted imminence window (100 years).
pub const MAX_IMMINENT_WINDOW_DAYS: i64 = 36_500;

/// Number of failure modes kept in the ranking.
pub const DEFAULT_TOP_FAILURE_MODES: usize = 5;

/// Parameters shared by every stage of the report computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReliabilityConfig {
    pub unit_cost: f64,
    pub imminent_window_days: i64,
    pub top_failure_modes: usize,
}

impl Default for ReliabilityConfig {
    fn default() -> Self {
        Self {
            unit_cost: DEFAULT_UNIT_COST,
            imminent_window_days: DEFAULT_IMMINENT_WINDOW_DAYS,
            top_failure_modes: DEFAULT_TOP_FAILURE_MODES,
        }
    }
}

impl ReliabilityConfig {
    /// Reject values that would make the report meaningless.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.unit_cost.is_finite() || self.unit_cost < 0.0 {
            return Err(CoreError::Validation(format!(
                "unit_cost must be a finite, non-negative number, got {}",
                self.unit_cost
            )));
        }
        if !(0..=MAX_IMMINENT_WINDOW_DAYS).contains(&self.imminent_window_days) {
            return Err(CoreError::Validation(format!(
                "imminent_window_days must be between 0 and {MAX_IMMINENT_WINDOW_DAYS}, got {}",
                self.imminent_window_days
            )));
        }
        if self.top_failure_modes == 0 {
            return Err(CoreError::Validation(
                "top_failure_modes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
