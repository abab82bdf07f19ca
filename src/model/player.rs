use serde::Deserialize;

/// Player profile returned by `GET /players/{tag}`.
///
/// Only the fields used by team analysis are kept.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Player {
    pub tag: String,
    pub name: String,
    pub town_hall_level: u32,
    pub trophies: u32,
}
