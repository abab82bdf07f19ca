//! Discord bot integration.
//!
//! The bot resolves the status channel once it is connected and answers chat
//! commands. Its HTTP client is shared with the war status scheduler so both use a
//! single connection to Discord.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild list and channels for resolving the status channel
//! - `GUILD_MESSAGES` - Receive messages to answer commands
//! - `MESSAGE_CONTENT` - Read message text (privileged intent)
//!
//! `MESSAGE_CONTENT` is a privileged intent and must be enabled in the Discord
//! Developer Portal for the bot application.

pub mod handler;
pub mod start;
