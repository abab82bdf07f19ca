//! Application state shared by the bot event handlers and the scheduler.
//!
//! The state is built once in `main` and cloned into the Discord event handler and the
//! war status job. All fields are cheap to clone:
//! - `Config` sits behind an `Arc`
//! - `CocClient` wraps a reference-counted `reqwest::Client`
//! - the mutable parts are `Arc`-wrapped locks

use serenity::all::ChannelId;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::{
    config::Config, data::coc::CocClient, data::player_cache::PlayerCacheRepository,
    model::notifier::NotifierState,
};

/// Application state containing shared resources.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    /// Clash of Clans API client for the configured clan.
    pub coc: CocClient,

    /// Notifier state carried between war status ticks.
    ///
    /// Held for the whole tick, which keeps overlapping ticks from running
    /// concurrently.
    pub notifier: Arc<Mutex<NotifierState>>,

    /// Opponent stats cache file.
    ///
    /// Locked for the full load, fetch and save cycle of an analysis pass so that
    /// concurrent `!analysis` commands cannot lose each other's entries.
    pub player_cache: Arc<Mutex<PlayerCacheRepository>>,

    /// Status channel resolved when the bot becomes ready, `None` until then.
    pub status_channel: Arc<RwLock<Option<ChannelId>>>,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `config` - Loaded configuration
    /// - `http_client` - Shared HTTP client for Clash of Clans API requests
    ///
    /// # Returns
    /// - `AppState` - State with an empty notifier and no status channel yet
    pub fn new(config: Config, http_client: reqwest::Client) -> Self {
        let coc = CocClient::new(
            http_client,
            config.coc_api_url.clone(),
            config.coc_api_token.clone(),
            config.clan_tag.clone(),
        );
        let player_cache = PlayerCacheRepository::new(config.player_cache_path.clone());

        Self {
            config: Arc::new(config),
            coc,
            notifier: Arc::new(Mutex::new(NotifierState::new())),
            player_cache: Arc::new(Mutex::new(player_cache)),
            status_channel: Arc::new(RwLock::new(None)),
        }
    }

    pub async fn status_channel(&self) -> Option<ChannelId> {
        *self.status_channel.read().await
    }

    pub async fn set_status_channel(&self, channel_id: ChannelId) {
        *self.status_channel.write().await = Some(channel_id);
    }
}
