use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;
use std::sync::Arc;

use crate::{bot::handler::Handler, error::AppError, state::AppState};

/// Builds the Discord client without connecting it.
///
/// # Arguments
/// - `state` - Shared application state handed to the event handler
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to start and its HTTP client
/// - `Err(AppError::DiscordErr)` - Client could not be built
pub async fn init_bot(state: &AppState) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let client = Client::builder(&state.config.discord_token, intents)
        .event_handler(Handler::new(state.clone()))
        .await?;
    let http = client.http.clone();

    Ok((client, http))
}

/// Connects the bot and processes gateway events until shutdown.
///
/// # Returns
/// - `Ok(())` - Client shut down
/// - `Err(AppError::DiscordErr)` - Connection failed, e.g. invalid token
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
