use chrono::{DateTime, NaiveDateTime, Utc};

/// Timestamp layout used by the Clash of Clans API, e.g. `20250316T184512.000Z`.
const COC_TIME_FORMAT: &str = "%Y%m%dT%H%M%S%.fZ";

/// Parses a Clash of Clans compact UTC timestamp
///
/// # Arguments
/// - `value` - Timestamp string as returned by the API
///
/// # Returns
/// - `Some(DateTime<Utc>)` - Successfully parsed timestamp
/// - `None` - The value does not match the compact format
pub fn parse_coc_time(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value.trim(), COC_TIME_FORMAT)
        .ok()
        .map(|time| time.and_utc())
}

/// Percent-encodes a clan or player tag for use in an API path.
///
/// Tags are upper-cased and a leading `#` is added when the caller omitted it,
/// so `2pp`, `#2PP` and ` #2pp ` all encode to `%232PP`.
pub fn encode_tag(tag: &str) -> String {
    let tag = tag.trim().to_uppercase();
    let tag = tag.trim_start_matches('#');

    format!("%23{}", tag)
}

/// Hours between `now` and `target`, negative when `target` lies in the past.
pub fn hours_until(target: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (target - now).num_milliseconds() as f64 / 3_600_000.0
}

/// Rounds `value` to the given number of decimal places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
