// HTTP client for the public Sleeper REST API (read-only, no auth).

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use sleeper_core::snapshot::{BracketMatch, DraftPick, LeagueInfo, Matchup, NflState, Player, Roster, User};

use crate::error::{ApiError, ApiResult};

pub const DEFAULT_BASE_URL: &str = "https://api.sleeper.app/v1";

const USER_AGENT: &str = concat!("sleeper-report/", env!("CARGO_PKG_VERSION"));

/// Sleeper API client. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct SleeperClient {
    http: Client,
    base_url: String,
}

impl SleeperClient {
    /// Build a client rooted at `base_url` with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode { url, source })
    }

    /// List endpoints answer `null` for unknown resources; treat that as empty.
    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Vec<T>> {
        Ok(self.get_json::<Option<Vec<T>>>(path).await?.unwrap_or_default())
    }

    pub async fn league(&self, league_id: &str) -> ApiResult<LeagueInfo> {
        self.get_json(&format!("/league/{league_id}")).await
    }

    pub async fn nfl_state(&self) -> ApiResult<NflState> {
        self.get_json("/state/nfl").await
    }

    pub async fn users(&self, league_id: &str) -> ApiResult<Vec<User>> {
        self.get_list(&format!("/league/{league_id}/users")).await
    }

    pub async fn rosters(&self, league_id: &str) -> ApiResult<Vec<Roster>> {
        self.get_list(&format!("/league/{league_id}/rosters")).await
    }

    pub async fn matchups(&self, league_id: &str, week: u32) -> ApiResult<Vec<Matchup>> {
        self.get_list(&format!("/league/{league_id}/matchups/{week}")).await
    }

    /// The full NFL player directory (several MB).
    pub async fn players(&self) -> ApiResult<HashMap<String, Player>> {
        Ok(self
            .get_json::<Option<HashMap<String, Player>>>("/players/nfl")
            .await?
            .unwrap_or_default())
    }

    pub async fn winners_bracket(&self, league_id: &str) -> ApiResult<Vec<BracketMatch>> {
        self.get_list(&format!("/league/{league_id}/winners_bracket")).await
    }

    pub async fn draft_picks(&self, draft_id: &str) -> ApiResult<Vec<DraftPick>> {
        self.get_list(&format!("/draft/{draft_id}/picks")).await
    }
}
