//! Discord channel operations used by the notifier.
//!
//! `StatusChannel` is the narrow set of message operations the notifier needs.
//! `DiscordStatusChannel` implements it on top of Serenity's HTTP client for the
//! resolved `clan-war-updates` channel.

use serenity::{
    all::{
        ChannelId, CreateAllowedMentions, CreateMessage, EditMessage, GetMessages, MessageId,
    },
    async_trait,
    http::Http,
};
use std::sync::Arc;

use crate::{error::AppError, model::status::StatusDisplay};

use super::builder::build_status_embed;

/// Number of recent messages inspected when cleaning up the channel.
const HISTORY_LIMIT: u8 = 100;

/// Message operations on the status channel.
#[async_trait]
pub trait StatusChannel: Send + Sync {
    /// Ids of the most recent messages in the channel, any author.
    async fn message_ids(&self) -> Result<Vec<MessageId>, AppError>;

    /// Sends a new status message and returns its id.
    async fn send_status(&self, display: &StatusDisplay) -> Result<MessageId, AppError>;

    /// Replaces the content of an existing status message.
    async fn edit_status(
        &self,
        message_id: MessageId,
        display: &StatusDisplay,
    ) -> Result<(), AppError>;

    /// Sends a plain text alert that is allowed to mention `@everyone`.
    async fn send_alert(&self, content: &str) -> Result<MessageId, AppError>;

    async fn delete_message(&self, message_id: MessageId) -> Result<(), AppError>;
}

/// Status channel backed by the Discord HTTP API.
pub struct DiscordStatusChannel {
    /// Discord HTTP client for sending, editing and deleting messages
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl DiscordStatusChannel {
    /// Creates a new DiscordStatusChannel instance.
    ///
    /// # Arguments
    /// - `http` - Arc-wrapped Discord HTTP client for API requests
    /// - `channel_id` - Channel holding the status message
    pub fn new(http: Arc<Http>, channel_id: ChannelId) -> Self {
        Self { http, channel_id }
    }
}

#[async_trait]
impl StatusChannel for DiscordStatusChannel {
    async fn message_ids(&self) -> Result<Vec<MessageId>, AppError> {
        let messages = self
            .channel_id
            .messages(&self.http, GetMessages::new().limit(HISTORY_LIMIT))
            .await?;

        Ok(messages.into_iter().map(|message| message.id).collect())
    }

    async fn send_status(&self, display: &StatusDisplay) -> Result<MessageId, AppError> {
        let message = CreateMessage::new().embed(build_status_embed(display)?);
        let sent = self.channel_id.send_message(&self.http, message).await?;

        Ok(sent.id)
    }

    async fn edit_status(
        &self,
        message_id: MessageId,
        display: &StatusDisplay,
    ) -> Result<(), AppError> {
        let edit_message = EditMessage::new().embed(build_status_embed(display)?);

        self.http
            .edit_message(self.channel_id, message_id, &edit_message, vec![])
            .await?;

        Ok(())
    }

    async fn send_alert(&self, content: &str) -> Result<MessageId, AppError> {
        let message = CreateMessage::new()
            .content(content)
            .allowed_mentions(CreateAllowedMentions::new().everyone(true));
        let sent = self.channel_id.send_message(&self.http, message).await?;

        Ok(sent.id)
    }

    async fn delete_message(&self, message_id: MessageId) -> Result<(), AppError> {
        self.http
            .delete_message(self.channel_id, message_id, None)
            .await?;

        Ok(())
    }
}
