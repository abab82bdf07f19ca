use chrono::Utc;
use serenity::all::{Context, Message};

use crate::{
    service::command::{CommandService, WarCommand},
    state::AppState,
};

/// Answers chat commands.
///
/// Messages from bots, including this one, and messages that are not a known
/// command are ignored.
pub async fn handle_message(state: &AppState, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    let Some(command) = WarCommand::parse(&message.content) else {
        return;
    };

    tracing::debug!(
        "Running {:?} command for {} in channel {}",
        command,
        message.author.name,
        message.channel_id
    );

    let reply = CommandService::new(
        &state.coc,
        &state.player_cache,
        state.config.player_cache_ttl,
    )
    .run(command, Utc::now())
    .await;

    if let Err(e) = message.channel_id.say(&ctx.http, reply).await {
        tracing::error!(
            "Failed to reply to {:?} command in channel {}: {}",
            command,
            message.channel_id,
            e
        );
    }
}
