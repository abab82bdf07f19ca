//! State owned by the war status notifier.
//!
//! A single `NotifierState` exists per process. It is held behind a mutex by the
//! scheduler job so ticks never interleave, and it is never touched by command
//! handlers.

use serenity::all::MessageId;

use super::war::WarState;

/// One-shot flags preventing duplicate "@everyone" alerts within a war.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PingFlags {
    /// Alert for "war starts in about an hour" was sent.
    pub start: bool,
    /// Alert for "war ends in about an hour" was sent.
    pub end: bool,
}

/// Kind of broadcast alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Start,
    End,
}

impl AlertKind {
    /// Message content sent to the channel for this alert.
    pub fn content(&self) -> &'static str {
        match self {
            Self::Start => "@everyone ⚔️ The war starts in about 1 hour! Check the enemy base layouts.",
            Self::End => "@everyone ⏳ The war ends in about 1 hour! Use your remaining attacks!",
        }
    }
}

/// Mutable record carried between notifier ticks.
#[derive(Debug, Default)]
pub struct NotifierState {
    /// War state observed by the previous successful tick.
    pub last_state: Option<WarState>,
    /// The live status message in the channel.
    pub status_message: Option<MessageId>,
    pub ping_sent: PingFlags,
    /// Alert messages kept out of channel cleanup until the war ends.
    pub alert_messages: Vec<MessageId>,
    /// Failed fetches since the last successful tick.
    pub consecutive_failures: u32,
}

impl NotifierState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the message is owned by the notifier and must survive cleanup.
    pub fn is_tracked(&self, message_id: MessageId) -> bool {
        self.status_message == Some(message_id) || self.alert_messages.contains(&message_id)
    }

    /// Records a sent alert and sets the matching ping flag.
    pub fn mark_alert_sent(&mut self, kind: AlertKind, message_id: MessageId) {
        match kind {
            AlertKind::Start => self.ping_sent.start = true,
            AlertKind::End => self.ping_sent.end = true,
        }
        self.alert_messages.push(message_id);
    }

    /// Clears both ping flags and releases alert messages for cleanup.
    pub fn reset_for_war_end(&mut self) {
        self.ping_sent = PingFlags::default();
        self.alert_messages.clear();
    }

    /// Counts a failed fetch and returns the new streak length.
    pub fn record_failure(&mut self) -> u32 {
        self.consecutive_failures += 1;
        self.consecutive_failures
    }

    /// Stores the outcome of a successful tick.
    pub fn record_success(&mut self, state: WarState) {
        self.last_state = Some(state);
        self.consecutive_failures = 0;
    }
}
