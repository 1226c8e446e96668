//! Flat-rate intervention cost estimate.

/// `total_count * unit_cost`. Always defined, including for zero records.
pub fn estimate_cost(total_count: usize, unit_cost: f64) -> f64 {
    total_count as f64 * unit_cost
}
