//! Current war payload factory.
//!
//! Produces `GET /clans/{tag}/currentwar` payloads in any war state with start and
//! end times expressed relative to a caller supplied `now`, which keeps remaining
//! time calculations deterministic in tests.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::factory::helpers::{coc_time, hours};

/// Factory for creating current war payloads with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::war::WarFactory;
///
/// let war = WarFactory::in_war(now)
///     .ends_in_hours(1.0)
///     .clan_stars(30)
///     .build();
/// ```
pub struct WarFactory {
    now: DateTime<Utc>,
    state: Option<String>,
    team_size: u32,
    attacks_per_member: Option<u32>,
    start_in_hours: Option<f64>,
    end_in_hours: Option<f64>,
    clan: SideFactory,
    opponent: SideFactory,
}

/// One side of the war under construction.
struct SideFactory {
    tag: String,
    name: String,
    stars: u32,
    attacks: u32,
    destruction_percentage: f64,
    members: Vec<Value>,
}

impl SideFactory {
    fn new(tag: &str, name: &str) -> Self {
        Self {
            tag: tag.to_string(),
            name: name.to_string(),
            stars: 0,
            attacks: 0,
            destruction_percentage: 0.0,
            members: Vec::new(),
        }
    }

    fn build(self) -> Value {
        json!({
            "tag": self.tag,
            "name": self.name,
            "clanLevel": 20,
            "stars": self.stars,
            "attacks": self.attacks,
            "destructionPercentage": self.destruction_percentage,
            "members": self.members,
        })
    }
}

impl WarFactory {
    /// Creates a new WarFactory with default values.
    ///
    /// Defaults:
    /// - team size 15, two attacks per member
    /// - clan `#CLAN` "Clan Alpha", opponent `#OPPONENT` "Clan Omega"
    /// - no members, no stars, no attacks
    /// - no start or end time
    ///
    /// # Arguments
    /// - `state` - Raw `state` value, e.g. `"inWar"`
    /// - `now` - Reference time for relative start and end times
    pub fn new(state: &str, now: DateTime<Utc>) -> Self {
        Self {
            now,
            state: Some(state.to_string()),
            team_size: 15,
            attacks_per_member: Some(2),
            start_in_hours: None,
            end_in_hours: None,
            clan: SideFactory::new("#CLAN", "Clan Alpha"),
            opponent: SideFactory::new("#OPPONENT", "Clan Omega"),
        }
    }

    /// War in preparation day, starting in 12 hours and ending in 36.
    pub fn preparation(now: DateTime<Utc>) -> Self {
        Self::new("preparation", now)
            .starts_in_hours(12.0)
            .ends_in_hours(36.0)
    }

    /// War in battle day, started 12 hours ago and ending in 12.
    pub fn in_war(now: DateTime<Utc>) -> Self {
        Self::new("inWar", now)
            .starts_in_hours(-12.0)
            .ends_in_hours(12.0)
    }

    /// Finished war that ended an hour ago.
    pub fn war_ended(now: DateTime<Utc>) -> Self {
        Self::new("warEnded", now)
            .starts_in_hours(-25.0)
            .ends_in_hours(-1.0)
    }

    /// Clan not in a war. The API sends only the state in this case.
    pub fn not_in_war(now: DateTime<Utc>) -> Self {
        Self::new("notInWar", now)
    }

    /// Removes the `state` field entirely.
    pub fn without_state(mut self) -> Self {
        self.state = None;
        self
    }

    pub fn team_size(mut self, team_size: u32) -> Self {
        self.team_size = team_size;
        self
    }

    /// Sets `attacksPerMember`, `None` omits the field.
    pub fn attacks_per_member(mut self, attacks: Option<u32>) -> Self {
        self.attacks_per_member = attacks;
        self
    }

    /// Sets `startTime` relative to `now`; negative values lie in the past.
    pub fn starts_in_hours(mut self, value: f64) -> Self {
        self.start_in_hours = Some(value);
        self
    }

    /// Sets `endTime` relative to `now`; negative values lie in the past.
    pub fn ends_in_hours(mut self, value: f64) -> Self {
        self.end_in_hours = Some(value);
        self
    }

    /// Omits both `startTime` and `endTime`.
    pub fn without_times(mut self) -> Self {
        self.start_in_hours = None;
        self.end_in_hours = None;
        self
    }

    pub fn clan_name(mut self, name: &str) -> Self {
        self.clan.name = name.to_string();
        self
    }

    pub fn opponent_name(mut self, name: &str) -> Self {
        self.opponent.name = name.to_string();
        self
    }

    pub fn clan_stars(mut self, stars: u32) -> Self {
        self.clan.stars = stars;
        self
    }

    pub fn opponent_stars(mut self, stars: u32) -> Self {
        self.opponent.stars = stars;
        self
    }

    pub fn clan_attacks(mut self, attacks: u32) -> Self {
        self.clan.attacks = attacks;
        self
    }

    pub fn clan_destruction(mut self, percentage: f64) -> Self {
        self.clan.destruction_percentage = percentage;
        self
    }

    /// Adds a member to the clan's war roster.
    pub fn clan_member(mut self, tag: &str, townhall_level: u32, trophies: u32) -> Self {
        self.clan.members.push(member(tag, townhall_level, trophies));
        self
    }

    /// Adds a member to the opponent's war roster.
    pub fn opponent_member(mut self, tag: &str, townhall_level: u32, trophies: u32) -> Self {
        self.opponent.members.push(member(tag, townhall_level, trophies));
        self
    }

    /// Builds the payload.
    ///
    /// # Returns
    /// - `Value` - Current war JSON as the API would return it
    pub fn build(self) -> Value {
        let mut war = json!({
            "teamSize": self.team_size,
            "clan": self.clan.build(),
            "opponent": self.opponent.build(),
        });

        if let Some(state) = self.state {
            war["state"] = json!(state);
        }
        if let Some(attacks) = self.attacks_per_member {
            war["attacksPerMember"] = json!(attacks);
        }
        if let Some(start) = self.start_in_hours {
            war["preparationStartTime"] = json!(coc_time(self.now + hours(start - 24.0)));
            war["startTime"] = json!(coc_time(self.now + hours(start)));
        }
        if let Some(end) = self.end_in_hours {
            war["endTime"] = json!(coc_time(self.now + hours(end)));
        }

        war
    }
}

fn member(tag: &str, townhall_level: u32, trophies: u32) -> Value {
    json!({
        "tag": tag,
        "name": format!("Member {}", tag.trim_start_matches('#')),
        "townhallLevel": townhall_level,
        "trophies": trophies,
        "mapPosition": 1,
    })
}
