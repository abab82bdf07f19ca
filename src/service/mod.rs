//! Service layer for business logic.
//!
//! Services sit between the bot/scheduler entry points and the data layer. They are
//! generic over the `ClashApi` and `StatusChannel` seams so every rule in here can be
//! tested without network access:
//!
//! - `war_status` - Polling tick, status rendering, alerts and channel reconciliation
//! - `analysis` - Team averages with cached concurrent opponent lookups
//! - `command` - `!stats`, `!warlog`, `!analysis` and `!help` replies

pub mod analysis;
pub mod command;
pub mod war_status;
