//! Shared helper utilities for factory methods.

use chrono::{DateTime, Duration, Utc};

/// Formats a timestamp the way the Clash of Clans API does, e.g. `20250316T184512.000Z`.
pub fn coc_time(time: DateTime<Utc>) -> String {
    time.format("%Y%m%dT%H%M%S%.3fZ").to_string()
}

/// Converts fractional hours into a millisecond precision duration.
pub fn hours(hours: f64) -> Duration {
    Duration::milliseconds((hours * 3_600_000.0).round() as i64)
}
