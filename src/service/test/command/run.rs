use super::*;

/// Tests the `!stats` reply for a running war.
///
/// Verifies that the reply contains both clan names, the score, attacks used out of
/// the total capacity, the average stars per attack and destruction.
///
/// Expected: Formatted war summary
#[tokio::test]
async fn replies_with_war_stats() {
    let api = FakeClashApi::new().with_war(
        WarFactory::in_war(now())
            .clan_stars(30)
            .opponent_stars(24)
            .clan_attacks(20)
            .clan_destruction(71.5)
            .build(),
    );

    let reply = reply(&api, WarCommand::Stats).await;

    assert!(reply.contains("Clan Alpha vs Clan Omega"));
    assert!(reply.contains("Stars: 30 - 24"));
    assert!(reply.contains("Attacks used: 20/30"));
    assert!(reply.contains("Average stars per attack: 1.50"));
    assert!(reply.contains("Destruction: 71.50% - 0.00%"));
}

/// Tests the attack capacity when the API omits attacks per member.
///
/// Expected: Capacity of two attacks per member
#[tokio::test]
async fn defaults_to_two_attacks_per_member() {
    let api = FakeClashApi::new().with_war(
        WarFactory::in_war(now())
            .team_size(10)
            .attacks_per_member(None)
            .build(),
    );

    let reply = reply(&api, WarCommand::Stats).await;

    assert!(reply.contains("Attacks used: 0/20"));
    assert!(reply.contains("Average stars per attack: 0.00"));
}

/// Tests `!stats` while the clan is not at war.
#[tokio::test]
async fn replies_not_in_war() {
    let api = FakeClashApi::new().with_war(WarFactory::not_in_war(now()).build());

    assert_eq!(reply(&api, WarCommand::Stats).await, NOT_IN_WAR_REPLY);
    assert_eq!(reply(&api, WarCommand::Analysis).await, NOT_IN_WAR_REPLY);
}

/// Tests `!stats` when the API is unavailable.
///
/// Expected: Generic failure reply instead of an error
#[tokio::test]
async fn replies_with_failure_message() {
    let api = FakeClashApi::new();

    assert_eq!(reply(&api, WarCommand::Stats).await, FETCH_FAILED_REPLY);
    assert_eq!(reply(&api, WarCommand::WarLog).await, FETCH_FAILED_REPLY);
    assert_eq!(reply(&api, WarCommand::Analysis).await, FETCH_FAILED_REPLY);
}

/// Tests the `!warlog` reply.
///
/// Verifies that at most five wars are listed, newest first, each with its result
/// label, opponent and score.
///
/// Expected: Five result lines
#[tokio::test]
async fn lists_last_five_wars() {
    let log = WarLogFactory::new(now())
        .entry(Some("win"), "Clan Beta", 45, 38)
        .entry(Some("lose"), "Clan Gamma", 30, 41)
        .entry(Some("tie"), "Clan Delta", 40, 40)
        .entry(None, "Clan Epsilon", 12, 9)
        .entry(Some("win"), "Clan Zeta", 44, 20)
        .entry(Some("lose"), "Clan Eta", 10, 45)
        .build();
    let api = FakeClashApi::new().with_war_log(log);

    let reply = reply(&api, WarCommand::WarLog).await;
    let lines: Vec<&str> = reply.lines().collect();

    assert_eq!(lines.len(), 6);
    assert_eq!(lines[1], "🟢 Win vs Clan Beta: 45 ⭐ - 38 ⭐");
    assert_eq!(lines[2], "🔴 Loss vs Clan Gamma: 30 ⭐ - 41 ⭐");
    assert_eq!(lines[3], "🟡 Tie vs Clan Delta: 40 ⭐ - 40 ⭐");
    assert!(lines[4].starts_with("⚪"));
    assert!(!reply.contains("Clan Eta"));
}

/// Tests `!warlog` with an empty log.
#[tokio::test]
async fn replies_with_empty_war_log() {
    let api = FakeClashApi::new().with_war_log(WarLogFactory::new(now()).build());

    assert_eq!(reply(&api, WarCommand::WarLog).await, EMPTY_WAR_LOG_REPLY);
}

/// Tests `!warlog` when the clan's war log is private.
#[tokio::test]
async fn replies_with_private_war_log() {
    let api = FakeClashApi::new().with_private_war_log();

    assert_eq!(reply(&api, WarCommand::WarLog).await, PRIVATE_WAR_LOG_REPLY);
}

/// Tests the `!analysis` reply.
///
/// Verifies that both sides' averages are shown and opponents without data are
/// reported.
///
/// Expected: Averages for both teams and one missing opponent
#[tokio::test]
async fn replies_with_team_analysis() {
    let api = FakeClashApi::new()
        .with_war(
            WarFactory::in_war(now())
                .clan_member("#C1", 14, 5000)
                .clan_member("#C2", 12, 4000)
                .opponent_member("#O1", 15, 5500)
                .opponent_member("#O2", 13, 4500)
                .build(),
        )
        .with_player("#O1", create_player("#O1", 15, 5500));

    let reply = reply(&api, WarCommand::Analysis).await;

    assert!(reply.contains("Average town hall: 13.00 vs 15.00"));
    assert!(reply.contains("Average trophies: 4500.00 vs 5500.00"));
    assert!(reply.contains("No data for 1 opponent player(s)."));
}

/// Tests the `!help` reply.
#[tokio::test]
async fn lists_commands_in_help() {
    let api = FakeClashApi::new();

    let reply = reply(&api, WarCommand::Help).await;

    for command in ["!stats", "!warlog", "!analysis", "!help"] {
        assert!(reply.contains(command));
    }
}

/// Tests the attack capacity for an oversized team size.
///
/// Expected: Capacity saturates at `u32::MAX` instead of overflowing
#[tokio::test]
async fn saturates_attack_capacity() {
    let api = FakeClashApi::new().with_war(
        WarFactory::in_war(now())
            .team_size(u32::MAX)
            .attacks_per_member(Some(2))
            .build(),
    );

    let reply = reply(&api, WarCommand::Stats).await;

    assert!(reply.contains(&format!("Attacks used: 0/{}", u32::MAX)));
}
