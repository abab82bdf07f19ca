mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use crate::{config::Config, error::AppError, scheduler::war_status, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let http_client = startup::setup_reqwest_client()?;
    let state = AppState::new(config, http_client);

    tracing::info!(
        "Tracking wars of clan {} in #{}",
        state.config.clan_tag,
        state.config.war_channel_name
    );
    tracing::info!(
        "Opponent stats cached in {}",
        state.player_cache.lock().await.path().display()
    );

    let (bot_client, discord_http) = bot::start::init_bot(&state).await?;

    // Kept alive for the lifetime of the bot.
    let _scheduler = war_status::start_scheduler(state.clone(), discord_http).await?;

    bot::start::start_bot(bot_client).await
}
