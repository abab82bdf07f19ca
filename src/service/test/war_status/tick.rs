use super::*;

/// Tests the end alert at exactly one hour before the war ends.
///
/// Verifies that the alert is posted once, the end flag is set and a second tick
/// inside the window does not post it again.
///
/// Expected: Ok with a single end alert in the channel
#[tokio::test]
async fn sends_end_alert_once() -> Result<(), AppError> {
    let api = FakeClashApi::new().with_war(WarFactory::in_war(now()).ends_in_hours(1.0).build());
    let channel = FakeChannel::new();
    let mut state = NotifierState::new();
    let service = WarStatusService::new(&api, &channel);

    service.tick(&mut state, now()).await?;
    service.tick(&mut state, now()).await?;

    assert_eq!(channel.alerts(), vec![AlertKind::End.content().to_string()]);
    assert!(state.ping_sent.end);
    assert!(!state.ping_sent.start);
    assert_eq!(state.alert_messages.len(), 1);

    Ok(())
}

/// Tests the start alert during preparation.
///
/// Expected: Ok with the start alert posted and kept next to the status message
#[tokio::test]
async fn sends_start_alert_during_preparation() -> Result<(), AppError> {
    let api = FakeClashApi::new().with_war(
        WarFactory::preparation(now())
            .starts_in_hours(1.0)
            .ends_in_hours(25.0)
            .build(),
    );
    let channel = FakeChannel::new();
    let mut state = NotifierState::new();

    WarStatusService::new(&api, &channel)
        .tick(&mut state, now())
        .await?;

    assert_eq!(channel.alerts(), vec![AlertKind::Start.content().to_string()]);
    assert!(state.ping_sent.start);
    assert_eq!(channel.status_messages().len(), 1);

    Ok(())
}

/// Tests that no alert is sent outside the one-hour window.
///
/// Expected: Ok with no alert and flags untouched
#[tokio::test]
async fn sends_no_alert_outside_window() -> Result<(), AppError> {
    let api = FakeClashApi::new().with_war(WarFactory::in_war(now()).ends_in_hours(1.2).build());
    let channel = FakeChannel::new();
    let mut state = NotifierState::new();

    WarStatusService::new(&api, &channel)
        .tick(&mut state, now())
        .await?;

    assert!(channel.alerts().is_empty());
    assert_eq!(state.ping_sent, PingFlags::default());

    Ok(())
}

/// Tests that the end of a war resets both flags.
///
/// Verifies that alerts sent during the war are released for cleanup and removed
/// from the channel once the war has ended, and that the next war alerts again.
///
/// Expected: Ok with cleared flags and no alert messages left
#[tokio::test]
async fn resets_flags_when_war_ends() -> Result<(), AppError> {
    let api = FakeClashApi::new().with_war(WarFactory::in_war(now()).ends_in_hours(1.0).build());
    let channel = FakeChannel::new();
    let mut state = NotifierState::new();
    let service = WarStatusService::new(&api, &channel);

    service.tick(&mut state, now()).await?;
    assert_eq!(channel.alerts().len(), 1);

    api.set_war(Some(WarFactory::war_ended(now()).build()));
    service.tick(&mut state, now()).await?;

    assert_eq!(state.ping_sent, PingFlags::default());
    assert!(state.alert_messages.is_empty());
    assert!(channel.alerts().is_empty());
    assert_eq!(channel.status_messages().len(), 1);

    api.set_war(Some(WarFactory::in_war(now()).ends_in_hours(1.0).build()));
    service.tick(&mut state, now()).await?;

    assert_eq!(channel.alerts().len(), 1);

    Ok(())
}

/// Tests a failing fetch.
///
/// Verifies that the channel is left untouched, the previous state is kept and
/// the failure streak grows until the next successful tick.
///
/// Expected: Err, then Ok with the streak reset
#[tokio::test]
async fn keeps_channel_on_fetch_failure() -> Result<(), AppError> {
    let api = FakeClashApi::new().with_war(WarFactory::in_war(now()).build());
    let channel = FakeChannel::new();
    let mut state = NotifierState::new();
    let service = WarStatusService::new(&api, &channel);

    service.tick(&mut state, now()).await?;
    let before = channel.messages();

    api.set_war(None);
    let user_message = channel.post_user_message("anyone there?");
    for _ in 0..3 {
        let result = service.tick(&mut state, now()).await;
        assert!(matches!(
            result,
            Err(AppError::CocErr(CocError::Status { status: 503, .. }))
        ));
    }

    assert_eq!(state.consecutive_failures, 3);
    assert_eq!(state.last_state, Some(WarState::InWar));
    assert_eq!(channel.messages().len(), before.len() + 1);
    assert!(channel.messages().iter().any(|(id, _)| *id == user_message));

    api.set_war(Some(WarFactory::in_war(now()).build()));
    service.tick(&mut state, now()).await?;

    assert_eq!(state.consecutive_failures, 0);
    assert_eq!(channel.messages().len(), 1);

    Ok(())
}

/// Tests a payload without a state.
///
/// Expected: Err(MalformedPayload) and no message posted
#[tokio::test]
async fn rejects_war_without_state() -> Result<(), AppError> {
    let api = FakeClashApi::new().with_war(WarFactory::in_war(now()).without_state().build());
    let channel = FakeChannel::new();
    let mut state = NotifierState::new();

    let result = WarStatusService::new(&api, &channel)
        .tick(&mut state, now())
        .await;

    assert!(matches!(
        result,
        Err(AppError::CocErr(CocError::MalformedPayload(_)))
    ));
    assert!(channel.messages().is_empty());
    assert_eq!(state.consecutive_failures, 1);
    assert_eq!(state.last_state, None);

    Ok(())
}

/// Tests that a failed alert send aborts the tick.
///
/// Verifies that the flag stays unset so the alert is retried on the next tick.
///
/// Expected: Err with the end flag still false
#[tokio::test]
async fn retries_alert_after_send_failure() -> Result<(), AppError> {
    let api = FakeClashApi::new().with_war(WarFactory::in_war(now()).ends_in_hours(1.0).build());
    let channel = FakeChannel::new();
    channel.fail_sends();
    let mut state = NotifierState::new();

    let result = WarStatusService::new(&api, &channel)
        .tick(&mut state, now())
        .await;

    assert!(result.is_err());
    assert!(!state.ping_sent.end);
    assert!(state.alert_messages.is_empty());

    Ok(())
}

/// Tests recording of state transitions.
///
/// Expected: last_state follows the most recent successful tick
#[tokio::test]
async fn records_state_transition() -> Result<(), AppError> {
    let api = FakeClashApi::new().with_war(WarFactory::preparation(now()).build());
    let channel = FakeChannel::new();
    let mut state = NotifierState::new();
    let service = WarStatusService::new(&api, &channel);

    service.tick(&mut state, now()).await?;
    assert_eq!(state.last_state, Some(WarState::Preparation));

    api.set_war(Some(WarFactory::in_war(now()).build()));
    service.tick(&mut state, now()).await?;
    assert_eq!(state.last_state, Some(WarState::InWar));

    Ok(())
}
