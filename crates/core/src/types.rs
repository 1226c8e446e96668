/// Intervention record identifiers, opaque and used as the stable tie-break key.
pub type RecordId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Milliseconds in one day, used for fractional-day arithmetic.
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Convert a signed duration into fractional days.
pub fn duration_in_days(duration: chrono::Duration) -> f64 {
    duration.num_milliseconds() as f64 / MS_PER_DAY
}
