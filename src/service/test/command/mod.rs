use chrono::{DateTime, Duration, TimeZone, Utc};
use tokio::sync::Mutex;
use test_utils::{
    context::TestContext,
    factory::{player::create_player, war::WarFactory, war_log::WarLogFactory},
};

use crate::{
    data::player_cache::PlayerCacheRepository,
    service::{
        command::*,
        test::FakeClashApi,
    },
};

mod parse;
mod run;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 16, 18, 0, 0).unwrap()
}

/// Runs `command` against `api` with a scratch player cache.
async fn reply(api: &FakeClashApi, command: WarCommand) -> String {
    let test = TestContext::new().unwrap();
    let repo = Mutex::new(PlayerCacheRepository::new(test.cache_path()));

    CommandService::new(api, &repo, Some(Duration::hours(168)))
        .run(command, now())
        .await
}
