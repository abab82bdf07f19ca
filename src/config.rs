use std::{num::NonZeroU64, path::PathBuf};

use chrono::Duration;
use url::Url;

use crate::error::{config::ConfigError, AppError};

const COC_API_URL: &str = "https://api.clashofclans.com/v1";
const WAR_CHANNEL_NAME: &str = "clan-war-updates";
const WAR_POLL_SCHEDULE: &str = "0 */5 * * * *";
const PLAYER_CACHE_PATH: &str = "player_cache.json";
const PLAYER_CACHE_TTL_HOURS: i64 = 168;

/// Bot configuration loaded from the environment.
///
/// Does not implement `Debug` since it holds both API tokens.
#[derive(Clone)]
pub struct Config {
    pub discord_token: String,
    pub coc_api_token: String,
    /// Clan tag as configured, with or without the leading `#`.
    pub clan_tag: String,
    /// Base URL of the Clash of Clans API without trailing slash.
    pub coc_api_url: String,

    /// Guild hosting the status channel, `None` for the first guild the bot is in.
    pub guild_id: Option<u64>,
    pub war_channel_name: String,
    /// Six-field cron expression for the war status poll.
    pub war_poll_schedule: String,

    pub player_cache_path: PathBuf,
    /// Maximum age of cached opponent stats, `None` when entries never expire.
    pub player_cache_ttl: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value for a variable name, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and optional ones valid
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };
        let optional = |name: &str, default: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let coc_api_url = optional("COC_API_URL", COC_API_URL);
        Url::parse(&coc_api_url).map_err(|e| ConfigError::InvalidEnvVar {
            name: "COC_API_URL".to_string(),
            reason: e.to_string(),
        })?;

        let guild_id = match lookup("DISCORD_GUILD_ID").filter(|v| !v.trim().is_empty()) {
            Some(value) => Some(value.trim().parse::<NonZeroU64>().map_err(|e| {
                ConfigError::InvalidEnvVar {
                    name: "DISCORD_GUILD_ID".to_string(),
                    reason: e.to_string(),
                }
            })?.get()),
            None => None,
        };

        let ttl_hours = optional("PLAYER_CACHE_TTL_HOURS", &PLAYER_CACHE_TTL_HOURS.to_string())
            .trim()
            .parse::<i64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "PLAYER_CACHE_TTL_HOURS".to_string(),
                reason: e.to_string(),
            })?;

        // 0 disables expiry
        let player_cache_ttl = match ttl_hours {
            0 => None,
            hours if hours > 0 => Some(Duration::try_hours(hours).ok_or_else(|| {
                ConfigError::InvalidEnvVar {
                    name: "PLAYER_CACHE_TTL_HOURS".to_string(),
                    reason: "out of range".to_string(),
                }
            })?),
            _ => {
                return Err(ConfigError::InvalidEnvVar {
                    name: "PLAYER_CACHE_TTL_HOURS".to_string(),
                    reason: "must not be negative".to_string(),
                }
                .into())
            }
        };

        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            coc_api_token: required("COC_API_TOKEN")?,
            clan_tag: required("CLAN_TAG")?,
            coc_api_url: coc_api_url.trim_end_matches('/').to_string(),
            guild_id,
            war_channel_name: optional("WAR_CHANNEL_NAME", WAR_CHANNEL_NAME),
            war_poll_schedule: optional("WAR_POLL_SCHEDULE", WAR_POLL_SCHEDULE),
            player_cache_path: PathBuf::from(optional("PLAYER_CACHE_PATH", PLAYER_CACHE_PATH)),
            player_cache_ttl,
        })
    }
}
