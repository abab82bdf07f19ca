//! Error types for the war status bot.
//!
//! `AppError` is the top-level error returned by every fallible operation. Domain
//! specific errors (`ConfigError`, `CocError`, `InternalError`) carry their own
//! variants and are wrapped transparently, while third-party errors convert through
//! `#[from]`. Nothing is converted into user-facing text here; command handlers and
//! the scheduler decide how an error is reported.

pub mod coc;
pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{coc::CocError, config::ConfigError, internal::InternalError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    ///
    /// Always fatal as the bot cannot run without its tokens and clan tag.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Clash of Clans API returned an error status or an unusable payload.
    #[error(transparent)]
    CocErr(#[from] CocError),

    /// Invariant failure inside the bot.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// HTTP transport error from reqwest (connection, timeout, body read).
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// JSON (de)serialization error outside of API payload decoding.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// Filesystem error while reading or writing the player cache.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
