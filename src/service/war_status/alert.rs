//! One-time "@everyone" alerts at the one-hour marks.

use crate::model::{
    notifier::{AlertKind, PingFlags},
    war::WarState,
};

/// Lower bound (exclusive) of the alert window in hours.
const ALERT_WINDOW_START_HOURS: f64 = 0.9;
/// Upper bound (exclusive) of the alert window in hours.
const ALERT_WINDOW_END_HOURS: f64 = 1.1;

/// Decides whether an alert is due on this tick.
///
/// The start alert fires during preparation and the end alert during battle day
/// when the remaining time lies strictly between 0.9 and 1.1 hours and the
/// matching flag is not yet set.
///
/// # Arguments
/// - `state` - Current war state
/// - `hours_remaining` - Unrounded hours until start (preparation) or end (in war)
/// - `ping_sent` - Flags of alerts already sent for this war
///
/// # Returns
/// - `Some(AlertKind)` - Alert to send now
/// - `None` - Nothing to send
pub fn due_alert(
    state: WarState,
    hours_remaining: Option<f64>,
    ping_sent: PingFlags,
) -> Option<AlertKind> {
    let hours = hours_remaining?;
    if hours <= ALERT_WINDOW_START_HOURS || hours >= ALERT_WINDOW_END_HOURS {
        return None;
    }

    match state {
        WarState::Preparation if !ping_sent.start => Some(AlertKind::Start),
        WarState::InWar if !ping_sent.end => Some(AlertKind::End),
        _ => None,
    }
}
