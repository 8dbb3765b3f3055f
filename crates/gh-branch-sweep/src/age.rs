//! Elapsed-age arithmetic for merge timestamps

use chrono::{DateTime, Utc};

/// Seconds in one month, fixed at 30 days
pub const SECONDS_PER_MONTH: f64 = 2_592_000.0;

/// Elapsed time in months between a merge instant and `now`
///
/// Timestamps are compared as absolute instants; no timezone
/// correction is applied. A merge in the future yields a negative age.
pub fn age_in_months(merged_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - merged_at).num_seconds() as f64 / SECONDS_PER_MONTH
}
