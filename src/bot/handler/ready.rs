//! Ready event handler.
//!
//! Once the bot is connected it resolves the status channel: the configured guild,
//! or the first guild the bot is in, is searched for a text channel with the
//! configured name and the channel is created when missing. The resolved channel is
//! stored in the application state and an immediate war status tick is started so
//! the channel does not wait for the first scheduled poll.

use serenity::all::{ChannelId, ChannelType, Context, CreateChannel, GuildId, Ready};
use serenity::http::Http;

use crate::{error::AppError, scheduler::war_status::run_tick, state::AppState};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared application state receiving the status channel
/// - `ctx` - Discord context providing the HTTP client
/// - `ready` - Ready event data containing the bot user and its guilds
pub async fn handle_ready(state: &AppState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let guild_id = match target_guild(state.config.guild_id, &ready) {
        Ok(guild_id) => guild_id,
        Err(e) => {
            tracing::warn!("{}, war status updates are disabled", e);
            return;
        }
    };

    let channel_id =
        match resolve_status_channel(&ctx.http, guild_id, &state.config.war_channel_name).await {
            Ok(channel_id) => channel_id,
            Err(e) => {
                tracing::error!(
                    "Failed to resolve status channel in guild {}: {}",
                    guild_id,
                    e
                );
                return;
            }
        };

    state.set_status_channel(channel_id).await;

    let tick_state = state.clone();
    let http = ctx.http.clone();
    tokio::spawn(async move {
        if let Err(e) = run_tick(&tick_state, http).await {
            tracing::error!("Error refreshing war status: {}", e);
        }
    });
}

/// Guild hosting the status channel: the configured one, else the first joined.
///
/// # Returns
/// - `Ok(GuildId)` - Guild to search for the status channel
/// - `Err(AppError::NotFound)` - No guild configured and the bot is in no guild
fn target_guild(configured: Option<u64>, ready: &Ready) -> Result<GuildId, AppError> {
    if let Some(guild_id) = configured {
        return Ok(GuildId::new(guild_id));
    }

    ready
        .guilds
        .first()
        .map(|guild| guild.id)
        .ok_or_else(|| AppError::NotFound("Bot is not in any guild".to_string()))
}

/// Finds the text channel named `name` in the guild, creating it when missing.
///
/// # Returns
/// - `Ok(ChannelId)` - Existing or newly created channel
/// - `Err(AppError::DiscordErr)` - Listing or creating channels failed
pub async fn resolve_status_channel(
    http: &Http,
    guild_id: GuildId,
    name: &str,
) -> Result<ChannelId, AppError> {
    let channels = guild_id.channels(http).await?;

    if let Some(channel) = channels
        .values()
        .find(|channel| channel.kind == ChannelType::Text && channel.name == name)
    {
        tracing::info!("Using status channel #{} ({})", channel.name, channel.id);
        return Ok(channel.id);
    }

    let channel = guild_id
        .create_channel(http, CreateChannel::new(name).kind(ChannelType::Text))
        .await?;
    tracing::info!("Created status channel #{} ({})", channel.name, channel.id);

    Ok(channel.id)
}
