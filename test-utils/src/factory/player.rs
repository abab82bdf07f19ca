//! Player payload factory.

use serde_json::{json, Value};

/// Creates a `GET /players/{tag}` payload.
///
/// # Arguments
/// - `tag` - Player tag including the leading `#`
/// - `town_hall_level` - Town hall level
/// - `trophies` - Current trophy count
///
/// # Returns
/// - `Value` - Player JSON with a generated name
pub fn create_player(tag: &str, town_hall_level: u32, trophies: u32) -> Value {
    json!({
        "tag": tag,
        "name": format!("Player {}", tag.trim_start_matches('#')),
        "expLevel": 200,
        "townHallLevel": town_hall_level,
        "trophies": trophies,
        "bestTrophies": trophies + 300,
        "warStars": 1000,
    })
}
