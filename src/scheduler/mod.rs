//! Cron jobs driving the bot's periodic work.
//!
//! - `war_status` - Polls the current war and refreshes the status channel

pub mod war_status;
