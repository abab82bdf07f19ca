//! Team analysis for the current war.
//!
//! Averages town hall level and trophies for both sides of a war. The clan side is
//! computed from the war roster directly. The opponent side is looked up per player,
//! with all missing players fetched concurrently and the results recorded in the
//! player cache so later passes only fetch players that are new or stale.

use chrono::{DateTime, Duration, Utc};
use tokio::{sync::Mutex, task::JoinSet};

use crate::{
    data::{
        coc::ClashApi,
        player_cache::{CachedPlayerStats, PlayerCacheRepository},
    },
    error::AppError,
    model::war::War,
    util::parse::round_to,
};

/// Averages over one side of a war.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamAverages {
    /// Number of players the averages are based on.
    pub players: usize,
    pub avg_town_hall: f64,
    pub avg_trophies: f64,
}

/// Result of an analysis pass.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamAnalysis {
    pub clan: TeamAverages,
    pub opponent: TeamAverages,
    /// Opponent players fetched from the API during this pass.
    pub fetched: usize,
    /// Opponent players served from the cache.
    pub cached: usize,
    /// Opponent players for which no stats are available.
    pub missing: usize,
}

/// Averages `(town hall level, trophies)` pairs, rounded to two decimals.
///
/// # Returns
/// - `TeamAverages` - Averages over all pairs, zero for an empty input
pub fn team_averages(stats: impl IntoIterator<Item = (u32, u32)>) -> TeamAverages {
    let (players, town_hall_sum, trophy_sum) = stats.into_iter().fold(
        (0usize, 0u64, 0u64),
        |(count, town_halls, trophies), (town_hall, trophy)| {
            (
                count + 1,
                town_halls + u64::from(town_hall),
                trophies + u64::from(trophy),
            )
        },
    );

    if players == 0 {
        return TeamAverages {
            players,
            avg_town_hall: 0.0,
            avg_trophies: 0.0,
        };
    }

    TeamAverages {
        players,
        avg_town_hall: round_to(town_hall_sum as f64 / players as f64, 2),
        avg_trophies: round_to(trophy_sum as f64 / players as f64, 2),
    }
}

/// Service computing team analysis for a war.
pub struct TeamAnalysisService<'a, A> {
    /// Clash of Clans API used for opponent player lookups
    api: &'a A,
    /// Player cache repository; the lock serializes read-modify-write passes
    cache: &'a Mutex<PlayerCacheRepository>,
    /// Maximum age of cached entries, `None` for no expiry
    ttl: Option<Duration>,
}

impl<'a, A> TeamAnalysisService<'a, A>
where
    A: ClashApi + Clone + 'static,
{
    /// Creates a new TeamAnalysisService instance.
    ///
    /// # Arguments
    /// - `api` - Clash of Clans API implementation
    /// - `cache` - Shared player cache repository
    /// - `ttl` - Maximum age of cached opponent stats
    pub fn new(api: &'a A, cache: &'a Mutex<PlayerCacheRepository>, ttl: Option<Duration>) -> Self {
        Self { api, cache, ttl }
    }

    /// Analyzes both sides of `war`.
    ///
    /// Opponent players without a fresh cache entry are fetched concurrently and the
    /// pass waits for all of them. A failed lookup is logged and the player falls back
    /// to a stale cache entry if one exists, otherwise the player is left out of the
    /// average. The cache file is rewritten when at least one player was fetched.
    ///
    /// # Arguments
    /// - `war` - Current war
    /// - `now` - Current time, used for cache freshness and new entry timestamps
    ///
    /// # Returns
    /// - `Ok(TeamAnalysis)` - Averages for both sides
    /// - `Err(AppError::IoErr)` / `Err(AppError::JsonErr)` - Cache file could not be read or written
    pub async fn analyze(&self, war: &War, now: DateTime<Utc>) -> Result<TeamAnalysis, AppError> {
        let clan = team_averages(
            war.clan
                .members
                .iter()
                .map(|member| (member.townhall_level, member.trophies)),
        );

        let repo = self.cache.lock().await;
        let mut cache = repo.load().await?;

        let stale_tags: Vec<String> = war
            .opponent
            .members
            .iter()
            .filter(|member| cache.get_fresh(&member.tag, now, self.ttl).is_none())
            .map(|member| member.tag.clone())
            .collect();
        let cached = war.opponent.members.len() - stale_tags.len();

        let mut lookups = JoinSet::new();
        for tag in stale_tags {
            let api = self.api.clone();
            lookups.spawn(async move {
                let result = api.player(&tag).await;
                (tag, result)
            });
        }

        let mut fetched = 0;
        while let Some(joined) = lookups.join_next().await {
            match joined {
                Ok((tag, Ok(player))) => {
                    cache.insert(tag, CachedPlayerStats::from_player(&player, now));
                    fetched += 1;
                }
                Ok((tag, Err(e))) => {
                    tracing::warn!("Failed to fetch opponent player {}: {}", tag, e);
                }
                Err(e) => {
                    tracing::error!("Opponent player lookup task failed: {}", e);
                }
            }
        }

        let opponent_stats: Vec<(u32, u32)> = war
            .opponent
            .members
            .iter()
            .filter_map(|member| cache.get(&member.tag))
            .map(|stats| (stats.town_hall_level, stats.trophies))
            .collect();
        let missing = war.opponent.members.len() - opponent_stats.len();
        let opponent = team_averages(opponent_stats);

        if fetched > 0 {
            repo.save(&cache).await?;
        }

        tracing::debug!(
            fetched,
            cached,
            missing,
            "Analyzed war against {}",
            war.opponent.display_name()
        );

        Ok(TeamAnalysis {
            clan,
            opponent,
            fetched,
            cached,
            missing,
        })
    }
}
