use super::*;

/// Tests that repeated ticks keep a single status message.
///
/// Verifies that the status message posted by the first tick is edited in place
/// by later ticks instead of a new one being posted.
///
/// Expected: Ok with exactly one status message with an unchanged id
#[tokio::test]
async fn edits_status_in_place() -> Result<(), AppError> {
    let api = FakeClashApi::new().with_war(WarFactory::in_war(now()).build());
    let channel = FakeChannel::new();
    let mut state = NotifierState::new();
    let service = WarStatusService::new(&api, &channel);

    service.tick(&mut state, now()).await?;
    let first_id = state.status_message;

    api.set_war(Some(WarFactory::in_war(now()).clan_stars(9).build()));
    service.tick(&mut state, now()).await?;
    service.tick(&mut state, now()).await?;

    let statuses = channel.status_messages();
    assert_eq!(statuses.len(), 1);
    assert_eq!(Some(statuses[0].0), first_id);
    assert_eq!(statuses[0].1.field("Stars:"), Some("9 ⭐ vs 0 ⭐"));

    Ok(())
}

/// Tests cleanup of foreign messages.
///
/// Verifies that messages posted by users or other bots are deleted so the channel
/// only holds the status message.
///
/// Expected: Ok with the channel reduced to the status message
#[tokio::test]
async fn deletes_foreign_messages() -> Result<(), AppError> {
    let api = FakeClashApi::new().with_war(WarFactory::in_war(now()).build());
    let channel = FakeChannel::new();
    channel.post_user_message("old announcement");
    let mut state = NotifierState::new();
    let service = WarStatusService::new(&api, &channel);

    service.tick(&mut state, now()).await?;
    channel.post_user_message("gg");
    channel.post_user_message("when do we attack?");
    service.tick(&mut state, now()).await?;

    let messages = channel.messages();
    assert_eq!(messages.len(), 1);
    assert!(matches!(messages[0].1, FakeMessage::Status(_)));

    Ok(())
}

/// Tests adoption of a stale status message from a previous run.
///
/// Verifies that a status message the bot does not track is treated like any other
/// foreign message and replaced by a new one.
///
/// Expected: Ok with one status message that is tracked in state
#[tokio::test]
async fn replaces_untracked_status_message() -> Result<(), AppError> {
    let api = FakeClashApi::new().with_war(WarFactory::in_war(now()).build());
    let channel = FakeChannel::new();
    let mut previous_run = NotifierState::new();
    WarStatusService::new(&api, &channel)
        .tick(&mut previous_run, now())
        .await?;

    let mut state = NotifierState::new();
    WarStatusService::new(&api, &channel)
        .tick(&mut state, now())
        .await?;

    let statuses = channel.status_messages();
    assert_eq!(statuses.len(), 1);
    assert_eq!(Some(statuses[0].0), state.status_message);
    assert_ne!(state.status_message, previous_run.status_message);

    Ok(())
}

/// Tests recovery when the tracked status message was deleted externally.
///
/// Verifies that the failed edit is followed by posting a new status message and
/// tracking its id.
///
/// Expected: Ok with a new status message id
#[tokio::test]
async fn reposts_when_edit_fails() -> Result<(), AppError> {
    let api = FakeClashApi::new().with_war(WarFactory::in_war(now()).build());
    let channel = FakeChannel::new();
    let mut state = NotifierState::new();
    let service = WarStatusService::new(&api, &channel);

    service.tick(&mut state, now()).await?;
    let deleted = state.status_message.unwrap();
    channel.remove(deleted);

    service.tick(&mut state, now()).await?;

    let statuses = channel.status_messages();
    assert_eq!(statuses.len(), 1);
    assert_ne!(statuses[0].0, deleted);
    assert_eq!(state.status_message, Some(statuses[0].0));

    Ok(())
}

/// Tests that alerts survive cleanup while the war is running.
///
/// Expected: Ok with the alert and the status message both present
#[tokio::test]
async fn keeps_alerts_until_war_end() -> Result<(), AppError> {
    let api = FakeClashApi::new().with_war(WarFactory::in_war(now()).ends_in_hours(1.0).build());
    let channel = FakeChannel::new();
    let mut state = NotifierState::new();
    let service = WarStatusService::new(&api, &channel);

    service.tick(&mut state, now()).await?;
    service.tick(&mut state, now()).await?;

    assert_eq!(channel.messages().len(), 2);
    assert_eq!(channel.alerts().len(), 1);
    assert!(state.is_tracked(MessageId::new(1)));

    Ok(())
}
