//! War status notifier.
//!
//! This module provides the `WarStatusService` whose `tick` is run by the scheduler
//! on every poll. A tick fetches the current war, sends a one-time alert when the war
//! is about an hour from starting or ending, and reconciles the status channel so it
//! holds exactly one status message reflecting the fetched state.
//!
//! The service is organized into separate modules by concern:
//! - `builder` - Status display and embed building
//! - `alert` - One-hour alert decision
//! - `channel` - Channel operations and their Discord implementation

pub mod alert;
pub mod builder;
pub mod channel;

use chrono::{DateTime, Utc};

use crate::{
    data::coc::ClashApi,
    error::{coc::CocError, AppError},
    model::{
        notifier::NotifierState,
        status::StatusDisplay,
        war::{War, WarState},
    },
};

use self::channel::StatusChannel;

/// Consecutive failed fetches after which a warning is logged, and every multiple of it.
pub const FAILURE_WARN_THRESHOLD: u32 = 3;

/// Service running the war status polling tick.
///
/// Holds borrowed references to the API and channel; the caller owns the
/// `NotifierState` and passes it to every tick.
pub struct WarStatusService<'a, A: ClashApi, C: StatusChannel> {
    /// Clash of Clans API for fetching the current war
    api: &'a A,
    /// Channel holding the status message
    channel: &'a C,
}

impl<'a, A: ClashApi, C: StatusChannel> WarStatusService<'a, A, C> {
    /// Creates a new WarStatusService instance.
    ///
    /// # Arguments
    /// - `api` - Clash of Clans API implementation
    /// - `channel` - Status channel implementation
    pub fn new(api: &'a A, channel: &'a C) -> Self {
        Self { api, channel }
    }

    /// Runs one polling tick.
    ///
    /// On a failed or malformed fetch the channel is left untouched, the failure
    /// streak in `state` grows and the error is returned for the caller to log.
    /// Otherwise ping flags are reset if the war ended, a due alert is sent, the
    /// channel is reconciled and the observed state is recorded.
    ///
    /// # Arguments
    /// - `state` - Notifier state carried between ticks
    /// - `now` - Current time
    ///
    /// # Returns
    /// - `Ok(WarState)` - State of the war that is now displayed
    /// - `Err(AppError::CocErr)` - API error status or payload without a state
    /// - `Err(AppError::ReqwestErr)` - Transport failure
    /// - `Err(AppError::DiscordErr)` - Sending the alert or status message failed
    pub async fn tick(
        &self,
        state: &mut NotifierState,
        now: DateTime<Utc>,
    ) -> Result<WarState, AppError> {
        let (war, war_state) = match self.fetch_war().await {
            Ok(fetched) => fetched,
            Err(e) => {
                let failures = state.record_failure();
                if failures % FAILURE_WARN_THRESHOLD == 0 {
                    tracing::warn!(
                        failures,
                        "War status has not been refreshed for {} consecutive polls",
                        failures
                    );
                }
                return Err(e);
            }
        };

        if war_state == WarState::WarEnded {
            state.reset_for_war_end();
        }

        let hours = builder::hours_remaining(&war, war_state, now);
        if let Some(kind) = alert::due_alert(war_state, hours, state.ping_sent) {
            let message_id = self.channel.send_alert(kind.content()).await?;
            state.mark_alert_sent(kind, message_id);
            tracing::info!("Sent {:?} alert for war against {}", kind, war.opponent.display_name());
        }

        let display = builder::build_status_display(&war, war_state, now);
        self.reconcile(state, &display).await?;

        if state.last_state != Some(war_state) {
            tracing::info!(
                previous = state.last_state.map(|s| s.label()).unwrap_or("none"),
                current = war_state.label(),
                "War state changed"
            );
        }
        state.record_success(war_state);

        Ok(war_state)
    }

    /// Fetches the current war and validates that it carries a state.
    async fn fetch_war(&self) -> Result<(War, WarState), AppError> {
        let war = self.api.current_war().await?;

        let war_state = war
            .state
            .ok_or_else(|| CocError::MalformedPayload("current war has no state".to_string()))?;

        Ok((war, war_state))
    }

    /// Brings the channel to exactly one status message showing `display`.
    ///
    /// Every message that is neither the status message nor a tracked alert is
    /// deleted; deletion failures are logged and skipped. The status message is then
    /// edited in place, or sent anew when there is none or the edit fails.
    async fn reconcile(
        &self,
        state: &mut NotifierState,
        display: &StatusDisplay,
    ) -> Result<(), AppError> {
        let message_ids = self.channel.message_ids().await?;

        for message_id in message_ids
            .into_iter()
            .filter(|message_id| !state.is_tracked(*message_id))
        {
            if let Err(e) = self.channel.delete_message(message_id).await {
                tracing::warn!("Failed to delete message {}: {}", message_id, e);
            }
        }

        if let Some(message_id) = state.status_message {
            match self.channel.edit_status(message_id, display).await {
                Ok(()) => {
                    tracing::debug!("Edited status message {}", message_id);
                    return Ok(());
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to edit status message {}, posting a new one: {}",
                        message_id,
                        e
                    );
                }
            }
        }

        let message_id = self.channel.send_status(display).await?;
        state.status_message = Some(message_id);
        tracing::info!("Posted new status message {}", message_id);

        Ok(())
    }
}
