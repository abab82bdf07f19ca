//! War status embed builder utilities.
//!
//! `build_status_display` maps a fetched war onto the fixed display for its state;
//! `build_status_embed` turns that display into a Serenity embed at the Discord
//! boundary.

use chrono::{DateTime, Utc};
use serenity::all::{CreateEmbed, CreateEmbedFooter, Timestamp};

use crate::{
    error::{internal::InternalError, AppError},
    model::{
        status::{StatusDisplay, StatusField},
        war::{War, WarState},
    },
    util::parse::{hours_until, round_to},
};

pub const STATUS_TITLE: &str = "🏆 Clash of Clans War Update!";
pub const STATUS_FOOTER: &str = "Automatic Clash of Clans update";

pub const PREPARATION_DESCRIPTION: &str =
    "⚔️ **War preparation is underway!**\nGet your attacks ready!";
pub const IN_WAR_DESCRIPTION: &str = "🔥 **The war is in full swing!**";
pub const WAR_ENDED_DESCRIPTION: &str = "🏁 **The war is over!**\nCheck out the results!";
pub const NOT_IN_WAR_DESCRIPTION: &str = "💤 **The clan is not in a war right now.**";
pub const UNKNOWN_DESCRIPTION: &str = "❓ Unknown status";

/// Hours until the next milestone of the war, unrounded.
///
/// Preparation counts down to `startTime`, battle day to `endTime`. Other states
/// have no countdown.
///
/// # Returns
/// - `Some(f64)` - Signed hours, negative if the milestone already passed
/// - `None` - State has no countdown or the timestamp is missing or unparseable
pub fn hours_remaining(war: &War, state: WarState, now: DateTime<Utc>) -> Option<f64> {
    let target = match state {
        WarState::Preparation => war.start_time(),
        WarState::InWar => war.end_time(),
        _ => None,
    }?;

    Some(hours_until(target, now))
}

/// Builds the status display for a war in the given state.
///
/// # Arguments
/// - `war` - Fetched war resource
/// - `state` - State of the war, already validated by the caller
/// - `now` - Time of the fetch, used for the countdown and embed timestamp
pub fn build_status_display(war: &War, state: WarState, now: DateTime<Utc>) -> StatusDisplay {
    let hours = hours_remaining(war, state, now);

    let (description, color, fields) = match state {
        WarState::Preparation => {
            let mut fields = vec![StatusField::new("Starts in:", format_hours(hours), false)];
            push_opponent(&mut fields, war);
            (PREPARATION_DESCRIPTION, 0xf39c12, fields)
        }
        WarState::InWar => {
            let mut fields = vec![
                StatusField::new("Ends in:", format_hours(hours), false),
                StatusField::new("Stars:", format_score(war), true),
            ];
            push_opponent(&mut fields, war);
            (IN_WAR_DESCRIPTION, 0xe74c3c, fields)
        }
        WarState::WarEnded => (
            WAR_ENDED_DESCRIPTION,
            0x2ecc71,
            vec![StatusField::new("Final score:", format_score(war), false)],
        ),
        WarState::NotInWar => (NOT_IN_WAR_DESCRIPTION, 0x95a5a6, Vec::new()),
        WarState::Unknown => (UNKNOWN_DESCRIPTION, 0x3498db, Vec::new()),
    };

    StatusDisplay {
        title: STATUS_TITLE.to_string(),
        description: description.to_string(),
        fields,
        color,
        footer: STATUS_FOOTER.to_string(),
        updated_at: now,
    }
}

/// Builds the Discord embed for a status display.
///
/// # Returns
/// - `Ok(CreateEmbed)` - Discord embed ready for sending or editing
/// - `Err(AppError::InternalErr)` - `updated_at` is outside Discord's timestamp range
pub fn build_status_embed(display: &StatusDisplay) -> Result<CreateEmbed, AppError> {
    let timestamp = Timestamp::from_unix_timestamp(display.updated_at.timestamp()).map_err(|e| {
        InternalError::InvalidDiscordTimestamp {
            timestamp: display.updated_at.timestamp(),
            reason: e.to_string(),
        }
    })?;

    let mut embed = CreateEmbed::new()
        .title(&display.title)
        .description(&display.description)
        .color(display.color);

    for field in &display.fields {
        embed = embed.field(&field.name, &field.value, field.inline);
    }

    embed = embed
        .footer(CreateEmbedFooter::new(&display.footer))
        .timestamp(timestamp);

    Ok(embed)
}

/// Remaining time rounded to one decimal, or "unknown" without a timestamp.
fn format_hours(hours: Option<f64>) -> String {
    match hours {
        // + 0.0 turns -0.0 into 0.0
        Some(hours) => format!("{:.1} hours", round_to(hours, 1) + 0.0),
        None => "unknown".to_string(),
    }
}

fn format_score(war: &War) -> String {
    format!("{} ⭐ vs {} ⭐", war.clan.stars, war.opponent.stars)
}

fn push_opponent(fields: &mut Vec<StatusField>, war: &War) {
    if let Some(name) = &war.opponent.name {
        fields.push(StatusField::new("Opponent:", name, true));
    }
}
