//! Opponent player stats cache persisted as a JSON file.
//!
//! The file maps player tag to the stats recorded the first time the player was
//! seen, together with the time they were recorded:
//!
//! ```json
//! { "#2PP": { "townHallLevel": 15, "trophies": 5120, "recordedAt": "2025-03-16T18:45:12Z" } }
//! ```
//!
//! Entries older than the configured TTL, and entries written without a
//! `recordedAt` timestamp, are considered stale and are fetched again. The file is
//! read at the start of an analysis pass and rewritten wholesale afterwards.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, model::player::Player};

/// Stats of one opponent player at the time they were recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedPlayerStats {
    pub town_hall_level: u32,
    pub trophies: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl CachedPlayerStats {
    pub fn from_player(player: &Player, recorded_at: DateTime<Utc>) -> Self {
        Self {
            town_hall_level: player.town_hall_level,
            trophies: player.trophies,
            recorded_at: Some(recorded_at),
        }
    }

    /// Whether the entry is still usable at `now`.
    ///
    /// # Arguments
    /// - `now` - Current time
    /// - `ttl` - Maximum entry age, `None` when entries never expire
    ///
    /// # Returns
    /// - `true` - Entry is younger than the TTL, or no TTL is configured
    /// - `false` - Entry expired or has no recorded timestamp while a TTL is set
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Option<Duration>) -> bool {
        match (ttl, self.recorded_at) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(ttl), Some(recorded_at)) => now - recorded_at < ttl,
        }
    }
}

/// In-memory view of the cache file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerCache {
    entries: BTreeMap<String, CachedPlayerStats>,
}

impl PlayerCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, tag: &str) -> Option<&CachedPlayerStats> {
        self.entries.get(tag)
    }

    /// Returns the entry for `tag` only if it is still fresh.
    pub fn get_fresh(
        &self,
        tag: &str,
        now: DateTime<Utc>,
        ttl: Option<Duration>,
    ) -> Option<&CachedPlayerStats> {
        self.entries
            .get(tag)
            .filter(|stats| stats.is_fresh(now, ttl))
    }

    /// Inserts or replaces the entry for `tag`.
    pub fn insert(&mut self, tag: impl Into<String>, stats: CachedPlayerStats) {
        self.entries.insert(tag.into(), stats);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Repository reading and writing the player cache file.
///
/// Holds no file handle; every `load` and `save` opens the file anew. Callers that
/// do read-modify-write cycles must serialize them, see `AppState::player_cache`.
#[derive(Debug, Clone)]
pub struct PlayerCacheRepository {
    path: PathBuf,
}

impl PlayerCacheRepository {
    /// Creates a new PlayerCacheRepository instance.
    ///
    /// # Arguments
    /// - `path` - Location of the JSON cache file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the cache file.
    ///
    /// # Returns
    /// - `Ok(PlayerCache)` - Parsed cache, empty when the file does not exist yet
    /// - `Err(AppError::IoErr)` - File exists but could not be read
    /// - `Err(AppError::JsonErr)` - File content is not a valid cache
    pub async fn load(&self) -> Result<PlayerCache, AppError> {
        let contents = match tokio::fs::read(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(
                    "Player cache {} does not exist yet, starting empty",
                    self.path.display()
                );
                return Ok(PlayerCache::new());
            }
            Err(e) => return Err(e.into()),
        };

        let cache = serde_json::from_slice::<PlayerCache>(&contents)?;

        Ok(cache)
    }

    /// Rewrites the cache file with the full contents of `cache`.
    ///
    /// Writes to a sibling temporary file first and renames it over the cache so a
    /// crash mid-write never leaves a truncated file behind.
    ///
    /// # Returns
    /// - `Ok(())` - Cache persisted
    /// - `Err(AppError::IoErr)` - Failed to write or rename the file
    /// - `Err(AppError::JsonErr)` - Failed to serialize the cache
    pub async fn save(&self, cache: &PlayerCache) -> Result<(), AppError> {
        let contents = serde_json::to_vec_pretty(cache)?;

        let mut tmp_path = self.path.clone().into_os_string();
        tmp_path.push(".tmp");
        let tmp_path = PathBuf::from(tmp_path);

        tokio::fs::write(&tmp_path, contents).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        tracing::debug!(
            "Saved {} player cache entries to {}",
            cache.len(),
            self.path.display()
        );

        Ok(())
    }
}
