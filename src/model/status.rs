//! Display payload for the channel status message.
//!
//! `StatusDisplay` is a platform-neutral description of the embed the notifier
//! maintains. It is rendered into a Serenity embed only at the channel boundary,
//! which keeps the rendering rules testable without a Discord connection.

use chrono::{DateTime, Utc};

/// A single name/value row of the status embed.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl StatusField {
    pub fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }
}

/// Rendered war status.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusDisplay {
    /// Embed title, identical for every war state.
    pub title: String,
    /// State specific headline.
    pub description: String,
    /// Optional rows such as remaining time or star counts.
    pub fields: Vec<StatusField>,
    /// Embed color as hex integer.
    pub color: u32,
    pub footer: String,
    /// Time the underlying war data was fetched.
    pub updated_at: DateTime<Utc>,
}

impl StatusDisplay {
    /// Looks up a field value by its name.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }
}
