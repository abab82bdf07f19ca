//! Domain models for the war status bot.
//!
//! Models in this module mirror the Clash of Clans API payloads the bot consumes
//! (`war`, `war_log`, `player`) and the bot's own state and display types
//! (`notifier`, `status`). API models are deserialized with `serde` directly from
//! the JSON responses; every field except the war `state` is tolerated as missing.

pub mod notifier;
pub mod player;
pub mod status;
pub mod war;
pub mod war_log;
