//! Chat command replies.
//!
//! Commands are stateless: each invocation fetches what it needs from the API and
//! formats a plain text reply. Errors never escape a command; they are logged and
//! replaced by a short user-facing message.

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;

use crate::{
    data::{coc::ClashApi, player_cache::PlayerCacheRepository},
    error::{coc::CocError, AppError},
    model::{
        war::{War, WarState},
        war_log::WarLog,
    },
    service::analysis::{TeamAnalysis, TeamAnalysisService},
    util::parse::round_to,
};

/// Prefix every command starts with.
pub const COMMAND_PREFIX: char = '!';
/// Number of wars listed by `!warlog`.
pub const WAR_LOG_LIMIT: u32 = 5;

pub const FETCH_FAILED_REPLY: &str = "⚠️ Could not fetch war data right now. Please try again later.";
pub const NOT_IN_WAR_REPLY: &str = "💤 The clan is not in a war right now.";
pub const PRIVATE_WAR_LOG_REPLY: &str = "🔒 The clan's war log is private.";
pub const EMPTY_WAR_LOG_REPLY: &str = "📜 The war log is empty.";

/// A recognised chat command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarCommand {
    Stats,
    WarLog,
    Analysis,
    Help,
}

impl WarCommand {
    /// Parses a message into a command.
    ///
    /// Only the first word is considered and matching is case-insensitive, so
    /// `!STATS please` is `Stats`.
    ///
    /// # Returns
    /// - `Some(WarCommand)` - Message invokes a known command
    /// - `None` - Message is not a command or the command is unknown
    pub fn parse(content: &str) -> Option<Self> {
        let word = content.trim().split_whitespace().next()?;
        let name = word.strip_prefix(COMMAND_PREFIX)?;

        match name.to_lowercase().as_str() {
            "stats" => Some(Self::Stats),
            "warlog" => Some(Self::WarLog),
            "analysis" => Some(Self::Analysis),
            "help" => Some(Self::Help),
            _ => None,
        }
    }
}

/// Average stars per attack rounded to two decimals, 0 when no attack was made.
pub fn avg_stars_per_attack(stars: u32, attacks_used: u32) -> f64 {
    if attacks_used == 0 {
        return 0.0;
    }

    round_to(f64::from(stars) / f64::from(attacks_used), 2)
}

/// Formats the `!stats` reply for a war.
pub fn format_stats(war: &War) -> String {
    let state = war.state.unwrap_or(WarState::Unknown);
    if state == WarState::NotInWar {
        return NOT_IN_WAR_REPLY.to_string();
    }

    format!(
        "📊 **{} vs {}** ({})\n\
         ⭐ Stars: {} - {}\n\
         🗡️ Attacks used: {}/{}\n\
         📈 Average stars per attack: {:.2}\n\
         💥 Destruction: {:.2}% - {:.2}%",
        war.clan.display_name(),
        war.opponent.display_name(),
        state.label(),
        war.clan.stars,
        war.opponent.stars,
        war.clan.attacks,
        war.attack_capacity(),
        avg_stars_per_attack(war.clan.stars, war.clan.attacks),
        war.clan.destruction_percentage,
        war.opponent.destruction_percentage,
    )
}

/// Formats the `!warlog` reply listing up to `WAR_LOG_LIMIT` wars.
pub fn format_war_log(log: &WarLog) -> String {
    if log.items.is_empty() {
        return EMPTY_WAR_LOG_REPLY.to_string();
    }

    let mut reply = format!("📜 **Last {} wars**", WAR_LOG_LIMIT.min(log.items.len() as u32));
    for entry in log.items.iter().take(WAR_LOG_LIMIT as usize) {
        let result = entry.result.map(|r| r.label()).unwrap_or("⚪ No result");
        reply.push_str(&format!(
            "\n{} vs {}: {} ⭐ - {} ⭐",
            result,
            entry.opponent.name.as_deref().unwrap_or("Unknown clan"),
            entry.clan.stars,
            entry.opponent.stars,
        ));
    }

    reply
}

/// Formats the `!analysis` reply.
pub fn format_analysis(war: &War, analysis: &TeamAnalysis) -> String {
    let mut reply = format!(
        "🔎 **Team analysis: {} vs {}**\n\
         🏰 Average town hall: {:.2} vs {:.2}\n\
         🏆 Average trophies: {:.2} vs {:.2}",
        war.clan.display_name(),
        war.opponent.display_name(),
        analysis.clan.avg_town_hall,
        analysis.opponent.avg_town_hall,
        analysis.clan.avg_trophies,
        analysis.opponent.avg_trophies,
    );
    if analysis.missing > 0 {
        reply.push_str(&format!(
            "\n⚠️ No data for {} opponent player(s).",
            analysis.missing
        ));
    }

    reply
}

pub fn help_text() -> String {
    [
        "🤖 **Clan war bot commands**",
        "`!stats` - Current war summary",
        "`!warlog` - Results of the last five wars",
        "`!analysis` - Average town hall and trophies of both teams",
        "`!help` - This list",
    ]
    .join("\n")
}

/// Service answering chat commands.
pub struct CommandService<'a, A> {
    /// Clash of Clans API implementation
    api: &'a A,
    /// Player cache used by `!analysis`
    cache: &'a Mutex<PlayerCacheRepository>,
    cache_ttl: Option<Duration>,
}

impl<'a, A> CommandService<'a, A>
where
    A: ClashApi + Clone + 'static,
{
    /// Creates a new CommandService instance.
    ///
    /// # Arguments
    /// - `api` - Clash of Clans API implementation
    /// - `cache` - Shared player cache repository
    /// - `cache_ttl` - Maximum age of cached opponent stats
    pub fn new(
        api: &'a A,
        cache: &'a Mutex<PlayerCacheRepository>,
        cache_ttl: Option<Duration>,
    ) -> Self {
        Self {
            api,
            cache,
            cache_ttl,
        }
    }

    /// Produces the reply for `command`.
    ///
    /// # Arguments
    /// - `command` - Parsed command
    /// - `now` - Current time, used by `!analysis` for cache freshness
    ///
    /// # Returns
    /// - `String` - Reply text, a failure message if the data could not be fetched
    pub async fn run(&self, command: WarCommand, now: DateTime<Utc>) -> String {
        let result = match command {
            WarCommand::Stats => self.stats().await,
            WarCommand::WarLog => self.war_log().await,
            WarCommand::Analysis => self.analysis(now).await,
            WarCommand::Help => Ok(help_text()),
        };

        match result {
            Ok(reply) => reply,
            Err(AppError::CocErr(CocError::PrivateWarLog)) => PRIVATE_WAR_LOG_REPLY.to_string(),
            Err(e) => {
                tracing::error!("Failed to run {:?} command: {}", command, e);
                FETCH_FAILED_REPLY.to_string()
            }
        }
    }

    async fn stats(&self) -> Result<String, AppError> {
        let war = self.fetch_war().await?;

        Ok(format_stats(&war))
    }

    async fn war_log(&self) -> Result<String, AppError> {
        let log = self.api.war_log(WAR_LOG_LIMIT).await?;

        Ok(format_war_log(&log))
    }

    async fn analysis(&self, now: DateTime<Utc>) -> Result<String, AppError> {
        let war = self.fetch_war().await?;
        if war.state == Some(WarState::NotInWar) {
            return Ok(NOT_IN_WAR_REPLY.to_string());
        }

        let analysis = TeamAnalysisService::new(self.api, self.cache, self.cache_ttl)
            .analyze(&war, now)
            .await?;

        Ok(format_analysis(&war, &analysis))
    }

    /// Fetches the current war, rejecting payloads without a state.
    async fn fetch_war(&self) -> Result<War, AppError> {
        let war = self.api.current_war().await?;
        if war.state.is_none() {
            return Err(CocError::MalformedPayload("current war has no state".to_string()).into());
        }

        Ok(war)
    }
}
