//! Current-war resource returned by `GET /clans/{tag}/currentwar`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::util::parse::parse_coc_time;

/// Attacks each member gets in a regular war when the API omits `attacksPerMember`.
pub const DEFAULT_ATTACKS_PER_MEMBER: u32 = 2;

/// Phase of a clan war.
///
/// Any value the API sends that is not one of the known phases deserializes to
/// `Unknown` rather than failing the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WarState {
    NotInWar,
    Preparation,
    InWar,
    WarEnded,
    #[serde(other)]
    Unknown,
}

impl WarState {
    /// Human readable name used in log lines and command replies.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotInWar => "not in war",
            Self::Preparation => "preparation",
            Self::InWar => "in war",
            Self::WarEnded => "war ended",
            Self::Unknown => "unknown",
        }
    }
}

/// The clan's current war.
///
/// `state` is `None` when the payload carries no state at all, which the poller
/// treats as a malformed response. Timestamps are kept as the raw API strings and
/// parsed on access so a bad timestamp degrades a single field instead of the
/// whole war.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct War {
    pub state: Option<WarState>,
    pub team_size: u32,
    pub attacks_per_member: Option<u32>,
    pub preparation_start_time: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub clan: WarClan,
    pub opponent: WarClan,
}

impl War {
    /// War start (end of preparation day), if present and parseable.
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time.as_deref().and_then(parse_coc_time)
    }

    /// War end (end of battle day), if present and parseable.
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time.as_deref().and_then(parse_coc_time)
    }

    pub fn attacks_per_member(&self) -> u32 {
        self.attacks_per_member.unwrap_or(DEFAULT_ATTACKS_PER_MEMBER)
    }

    /// Total attacks the clan can make in this war.
    pub fn attack_capacity(&self) -> u32 {
        self.team_size.saturating_mul(self.attacks_per_member())
    }
}

/// One side of a war.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WarClan {
    pub tag: Option<String>,
    pub name: Option<String>,
    pub stars: u32,
    pub attacks: u32,
    pub destruction_percentage: f64,
    pub members: Vec<WarMember>,
}

impl WarClan {
    /// Clan name, or a placeholder when the API did not send one.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown clan")
    }
}

/// War roster entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WarMember {
    pub tag: String,
    pub name: Option<String>,
    pub townhall_level: u32,
    pub trophies: u32,
}
