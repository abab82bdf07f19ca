use chrono::{DateTime, Duration, TimeZone, Utc};
use tokio::sync::Mutex;
use test_utils::{
    context::TestContext,
    factory::{player::create_player, war::WarFactory},
};

use crate::{
    data::player_cache::{CachedPlayerStats, PlayerCache, PlayerCacheRepository},
    error::AppError,
    model::war::War,
    service::{
        analysis::{team_averages, TeamAnalysisService},
        test::FakeClashApi,
    },
};


fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 16, 18, 0, 0).unwrap()
}

fn ttl() -> Option<Duration> {
    Some(Duration::hours(168))
}

/// War with a three player clan roster and the given opponent roster.
fn war_against(opponents: &[(&str, u32, u32)]) -> War {
    let mut factory = WarFactory::in_war(now())
        .clan_member("#C1", 14, 5000)
        .clan_member("#C2", 13, 4000)
        .clan_member("#C3", 12, 3500);
    for (tag, town_hall, trophies) in opponents {
        factory = factory.opponent_member(tag, *town_hall, *trophies);
    }

    serde_json::from_value(factory.build()).unwrap()
}
