use chrono::Utc;
use serenity::http::Http;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    service::war_status::{channel::DiscordStatusChannel, WarStatusService},
    state::AppState,
};

/// Starts the war status scheduler.
///
/// Runs a war status tick on the configured cron schedule, every five minutes by
/// default. Errors from a tick are logged and the job keeps running.
///
/// # Arguments
/// - `state` - Shared application state
/// - `discord_http` - Discord HTTP client for channel operations
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler, which must be kept alive by the caller
/// - `Err(AppError::SchedulerErr)` - Invalid cron expression or scheduler failure
pub async fn start_scheduler(
    state: AppState,
    discord_http: Arc<Http>,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let schedule = state.config.war_poll_schedule.clone();
    let job = Job::new_async(schedule.as_str(), move |_uuid, _lock| {
        let state = state.clone();
        let http = discord_http.clone();

        Box::pin(async move {
            if let Err(e) = run_tick(&state, http).await {
                tracing::error!("Error refreshing war status: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("War status scheduler started with schedule {}", schedule);

    Ok(scheduler)
}

/// Runs a single war status tick against the resolved status channel.
///
/// Skips quietly when the bot has not resolved its channel yet. The notifier lock is
/// held for the whole tick so a slow tick delays the next one instead of overlapping
/// with it.
///
/// # Returns
/// - `Ok(())` - Tick completed or was skipped
/// - `Err(AppError)` - Tick failed; the notifier state already reflects the failure
pub async fn run_tick(state: &AppState, discord_http: Arc<Http>) -> Result<(), AppError> {
    let Some(channel_id) = state.status_channel().await else {
        tracing::debug!("Status channel not resolved yet, skipping war status tick");
        return Ok(());
    };

    let channel = DiscordStatusChannel::new(discord_http, channel_id);
    let mut notifier = state.notifier.lock().await;

    let war_state = WarStatusService::new(&state.coc, &channel)
        .tick(&mut notifier, Utc::now())
        .await?;

    tracing::debug!("War status refreshed: {}", war_state.label());

    Ok(())
}
