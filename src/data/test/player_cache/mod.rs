use chrono::{Duration, TimeZone, Utc};
use test_utils::context::TestContext;

use crate::{
    data::player_cache::{CachedPlayerStats, PlayerCache, PlayerCacheRepository},
    error::AppError,
};


fn stats(town_hall_level: u32, trophies: u32) -> CachedPlayerStats {
    CachedPlayerStats {
        town_hall_level,
        trophies,
        recorded_at: Some(Utc.with_ymd_and_hms(2025, 3, 16, 18, 45, 12).unwrap()),
    }
}
