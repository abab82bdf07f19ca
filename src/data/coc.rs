//! Clash of Clans REST API client.
//!
//! `CocClient` wraps a shared `reqwest::Client` with the API base URL, bearer token
//! and the configured clan tag. The `ClashApi` trait is the seam the services depend
//! on, so the poller, analysis and commands can be exercised against an in-memory
//! implementation in tests.

use reqwest::{header::ACCEPT, StatusCode};
use serde::de::DeserializeOwned;
use serenity::async_trait;

use crate::{
    error::{coc::CocError, AppError},
    model::{player::Player, war::War, war_log::WarLog},
    util::parse::encode_tag,
};

/// Read access to the Clash of Clans resources the bot consumes.
#[async_trait]
pub trait ClashApi: Send + Sync {
    /// Fetches the configured clan's current war.
    async fn current_war(&self) -> Result<War, AppError>;

    /// Fetches the most recent `limit` entries of the configured clan's war log.
    async fn war_log(&self, limit: u32) -> Result<WarLog, AppError>;

    /// Fetches a single player profile by tag.
    async fn player(&self, tag: &str) -> Result<Player, AppError>;
}

/// HTTP client for the Clash of Clans API.
///
/// Cheap to clone: `reqwest::Client` is reference counted internally.
#[derive(Clone)]
pub struct CocClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    clan_tag: String,
}

impl CocClient {
    /// Creates a new CocClient instance.
    ///
    /// # Arguments
    /// - `http` - Shared HTTP client
    /// - `base_url` - API base URL without trailing slash
    /// - `token` - API token sent as bearer authorization
    /// - `clan_tag` - Tag of the clan whose war is tracked
    pub fn new(http: reqwest::Client, base_url: String, token: String, clan_tag: String) -> Self {
        Self {
            http,
            base_url,
            token,
            clan_tag,
        }
    }

    /// Path of the current-war resource for the configured clan.
    pub fn current_war_path(&self) -> String {
        format!("/clans/{}/currentwar", encode_tag(&self.clan_tag))
    }

    /// Path of the war log resource for the configured clan.
    pub fn war_log_path(&self, limit: u32) -> String {
        format!("/clans/{}/warlog?limit={}", encode_tag(&self.clan_tag), limit)
    }

    /// Performs an authenticated GET and decodes the JSON body.
    ///
    /// # Returns
    /// - `Ok(T)` - Successfully decoded resource
    /// - `Err(AppError::ReqwestErr)` - Transport failure or timeout
    /// - `Err(AppError::CocErr(Status))` - Non-success status code
    /// - `Err(AppError::CocErr(MalformedPayload))` - Body is not the expected resource
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CocError::Status {
                status: status.as_u16(),
                endpoint: path.to_string(),
            }
            .into());
        }

        let body = response.bytes().await?;
        let resource = serde_json::from_slice::<T>(&body)
            .map_err(|e| CocError::MalformedPayload(format!("{}: {}", path, e)))?;

        Ok(resource)
    }
}

#[async_trait]
impl ClashApi for CocClient {
    async fn current_war(&self) -> Result<War, AppError> {
        self.get(&self.current_war_path()).await
    }

    async fn war_log(&self, limit: u32) -> Result<WarLog, AppError> {
        match self.get::<WarLog>(&self.war_log_path(limit)).await {
            Err(AppError::CocErr(CocError::Status { status, .. }))
                if status == StatusCode::FORBIDDEN.as_u16() =>
            {
                Err(CocError::PrivateWarLog.into())
            }
            result => result,
        }
    }

    async fn player(&self, tag: &str) -> Result<Player, AppError> {
        self.get(&format!("/players/{}", encode_tag(tag))).await
    }
}
