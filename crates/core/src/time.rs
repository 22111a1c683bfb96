//! Calendar helpers for expiry handling.

use chrono::{DateTime, Duration, Utc};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Whole days from `now` until `target`, rounded toward negative infinity.
///
/// A target 12 hours in the past yields `-1`, a target 12 hours ahead yields `0`.
pub fn days_until(target: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (target - now).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// `now` shifted by `days` calendar days (negative values go back in time).
///
/// `None` when the result falls outside the representable date range.
pub fn days_from(now: DateTime<Utc>, days: i64) -> Option<DateTime<Utc>> {
    Duration::try_days(days).and_then(|delta| now.checked_add_signed(delta))
}
