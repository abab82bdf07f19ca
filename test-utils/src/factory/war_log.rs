//! War log payload factory.

use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};

use crate::factory::helpers::coc_time;

/// Factory for `GET /clans/{tag}/warlog` payloads.
///
/// Entries are listed newest first, matching the API ordering.
///
/// # Example
///
/// ```rust,ignore
/// let log = WarLogFactory::new(now)
///     .entry(Some("win"), "Clan Omega", 45, 38)
///     .entry(Some("lose"), "Clan Sigma", 30, 41)
///     .build();
/// ```
pub struct WarLogFactory {
    now: DateTime<Utc>,
    items: Vec<Value>,
}

impl WarLogFactory {
    /// Creates an empty war log factory.
    ///
    /// # Arguments
    /// - `now` - Reference time; the n-th entry ends `n + 1` days before it
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now,
            items: Vec::new(),
        }
    }

    /// Appends a finished war.
    ///
    /// # Arguments
    /// - `result` - `"win"`, `"lose"`, `"tie"` or `None` for wars without a result
    /// - `opponent` - Opponent clan name
    /// - `stars` - Stars earned by the clan
    /// - `opponent_stars` - Stars earned by the opponent
    pub fn entry(
        mut self,
        result: Option<&str>,
        opponent: &str,
        stars: u32,
        opponent_stars: u32,
    ) -> Self {
        let end_time = self.now - Duration::days(self.items.len() as i64 + 1);
        let mut item = json!({
            "endTime": coc_time(end_time),
            "teamSize": 15,
            "attacksPerMember": 2,
            "clan": {
                "tag": "#CLAN",
                "name": "Clan Alpha",
                "stars": stars,
                "destructionPercentage": 80.5,
            },
            "opponent": {
                "tag": "#OPPONENT",
                "name": opponent,
                "stars": opponent_stars,
                "destructionPercentage": 75.25,
            },
        });
        if let Some(result) = result {
            item["result"] = json!(result);
        }
        self.items.push(item);
        self
    }

    pub fn build(self) -> Value {
        json!({ "items": self.items, "paging": { "cursors": {} } })
    }
}
