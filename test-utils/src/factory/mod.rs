//! Factory methods for creating Clash of Clans API payloads.
//!
//! Each factory produces a `serde_json::Value` shaped like the real API response,
//! with sensible defaults that can be overridden through a builder. Tests deserialize
//! the payload into the bot's models or hand it to an in-memory API.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let now = Utc::now();
//!
//! // Create with defaults
//! let war = factory::war::WarFactory::preparation(now).build();
//! let player = factory::player::create_player("#P1", 14, 4800);
//!
//! // Customize
//! let war = factory::war::WarFactory::in_war(now)
//!     .ends_in_hours(1.0)
//!     .clan_stars(30)
//!     .clan_attacks(20)
//!     .opponent_member("#O1", 13, 4200)
//!     .build();
//! ```
//!
//! # Available Factories
//!
//! - `war` - Current war payloads in every state
//! - `war_log` - War log payloads
//! - `player` - Player profile payloads

pub mod helpers;
pub mod player;
pub mod war;
pub mod war_log;
