//! War log resource returned by `GET /clans/{tag}/warlog`.

use serde::Deserialize;

/// Outcome of a finished war from the clan's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WarResult {
    Win,
    Lose,
    Tie,
    #[serde(other)]
    Unknown,
}

impl WarResult {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Win => "🟢 Win",
            Self::Lose => "🔴 Loss",
            Self::Tie => "🟡 Tie",
            Self::Unknown => "⚪ Unknown",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WarLog {
    pub items: Vec<WarLogEntry>,
}

/// Single finished war. `result` is absent for friendly and league wars.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WarLogEntry {
    pub result: Option<WarResult>,
    pub end_time: Option<String>,
    pub team_size: u32,
    pub clan: WarLogClan,
    pub opponent: WarLogClan,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WarLogClan {
    pub name: Option<String>,
    pub stars: u32,
    pub destruction_percentage: f64,
}
