// `LeagueSource`: the endpoints snapshot assembly needs, behind a trait so
// the assembly can run against in-memory data.

use std::collections::HashMap;

use async_trait::async_trait;

use sleeper_core::snapshot::{BracketMatch, DraftPick, LeagueInfo, Matchup, NflState, Player, Roster, User};

use crate::client::SleeperClient;
use crate::error::ApiResult;

#[async_trait]
pub trait LeagueSource: Send + Sync {
    async fn league(&self, league_id: &str) -> ApiResult<LeagueInfo>;
    async fn nfl_state(&self) -> ApiResult<NflState>;
    async fn users(&self, league_id: &str) -> ApiResult<Vec<User>>;
    async fn rosters(&self, league_id: &str) -> ApiResult<Vec<Roster>>;
    async fn matchups(&self, league_id: &str, week: u32) -> ApiResult<Vec<Matchup>>;
    async fn players(&self) -> ApiResult<HashMap<String, Player>>;
    async fn winners_bracket(&self, league_id: &str) -> ApiResult<Vec<BracketMatch>>;
    async fn draft_picks(&self, draft_id: &str) -> ApiResult<Vec<DraftPick>>;
}

#[async_trait]
impl LeagueSource for SleeperClient {
    async fn league(&self, league_id: &str) -> ApiResult<LeagueInfo> {
        SleeperClient::league(self, league_id).await
    }

    async fn nfl_state(&self) -> ApiResult<NflState> {
        SleeperClient::nfl_state(self).await
    }

    async fn users(&self, league_id: &str) -> ApiResult<Vec<User>> {
        SleeperClient::users(self, league_id).await
    }

    async fn rosters(&self, league_id: &str) -> ApiResult<Vec<Roster>> {
        SleeperClient::rosters(self, league_id).await
    }

    async fn matchups(&self, league_id: &str, week: u32) -> ApiResult<Vec<Matchup>> {
        SleeperClient::matchups(self, league_id, week).await
    }

    async fn players(&self) -> ApiResult<HashMap<String, Player>> {
        SleeperClient::players(self).await
    }

    async fn winners_bracket(&self, league_id: &str) -> ApiResult<Vec<BracketMatch>> {
        SleeperClient::winners_bracket(self, league_id).await
    }

    async fn draft_picks(&self, draft_id: &str) -> ApiResult<Vec<DraftPick>> {
        SleeperClient::draft_picks(self, draft_id).await
    }
}
