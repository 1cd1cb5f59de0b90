// League snapshot: the Sleeper API payloads for a single report run.
//
// The wire types mirror the JSON the Sleeper REST API returns. Nullable
// arrays and missing numbers collapse to empty/zero so downstream code never
// has to branch on them.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder league name when the league payload carries none.
pub const DEFAULT_LEAGUE_NAME: &str = "Fantasy League";

/// Player name used when an id is missing from the players directory.
pub const UNKNOWN_PLAYER: &str = "Unknown Player";

/// Position/team code used when a player cannot be resolved.
pub const UNKNOWN_CODE: &str = "UNK";

/// Last week of an NFL season including playoffs.
pub const MAX_SEASON_WEEK: u32 = 18;

/// Deserialize `null` as `T::default()`.
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Return `Some(s)` only when the string has visible content.
fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| s.chars().any(|c| !c.is_whitespace() && !c.is_control()))
}

/// Remove control characters, terminal escapes included, from text that
/// league members can set themselves.
pub fn strip_control(s: &str) -> Cow<'_, str> {
    if s.chars().any(char::is_control) {
        Cow::Owned(s.chars().filter(|c| !c.is_control()).collect())
    } else {
        Cow::Borrowed(s)
    }
}

// ---------------------------------------------------------------------------
// League metadata
// ---------------------------------------------------------------------------

/// `GET /league/{league_id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeagueInfo {
    #[serde(default, deserialize_with = "null_to_default")]
    pub league_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub draft_id: Option<String>,
    #[serde(default)]
    pub total_rosters: Option<u32>,
}

impl LeagueInfo {
    pub fn display_name(&self) -> Cow<'_, str> {
        non_empty(self.name.as_deref())
            .map(strip_control)
            .unwrap_or(Cow::Borrowed(DEFAULT_LEAGUE_NAME))
    }

    pub fn display_season(&self) -> &str {
        non_empty(self.season.as_deref()).unwrap_or("n/a")
    }
}

/// `GET /state/nfl`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NflState {
    #[serde(default, deserialize_with = "null_to_default")]
    pub week: u32,
    #[serde(default)]
    pub season: Option<String>,
}

// ---------------------------------------------------------------------------
// Users and rosters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub team_name: Option<String>,
}

/// `GET /league/{league_id}/users`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub metadata: Option<UserMetadata>,
}

impl User {
    /// Resolve the name this user's team is shown under.
    ///
    /// Priority: custom team name, then display name, then username. Blank
    /// values are skipped. Returns `None` when all three are blank.
    pub fn team_name(&self) -> Option<&str> {
        let custom = self.metadata.as_ref().and_then(|m| m.team_name.as_deref());
        non_empty(custom)
            .or_else(|| non_empty(self.display_name.as_deref()))
            .or_else(|| non_empty(self.username.as_deref()))
    }
}

/// Season record as stored on the roster. Authoritative for wins/losses/ties.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RosterSettings {
    #[serde(default, deserialize_with = "null_to_default")]
    pub wins: u32,
    #[serde(default, deserialize_with = "null_to_default")]
    pub losses: u32,
    #[serde(default, deserialize_with = "null_to_default")]
    pub ties: u32,
    #[serde(default, deserialize_with = "null_to_default")]
    pub fpts_against: f64,
    /// Hundredths part of `fpts_against`.
    #[serde(default, deserialize_with = "null_to_default")]
    pub fpts_against_decimal: f64,
}

impl RosterSettings {
    pub fn points_against(&self) -> f64 {
        self.fpts_against + self.fpts_against_decimal / 100.0
    }
}

/// `GET /league/{league_id}/rosters`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    pub roster_id: u32,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub players: Vec<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub starters: Vec<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub taxi: Vec<String>,
    /// Injured reserve.
    #[serde(default, deserialize_with = "null_to_default")]
    pub reserve: Vec<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub settings: RosterSettings,
}

// ---------------------------------------------------------------------------
// Matchups and players
// ---------------------------------------------------------------------------

/// One roster's entry in `GET /league/{league_id}/matchups/{week}`.
///
/// Two entries sharing a `matchup_id` in the same week played each other.
/// `matchup_id` is null for rosters without an opponent that week.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Matchup {
    pub roster_id: u32,
    #[serde(default)]
    pub matchup_id: Option<u32>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub points: f64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub players_points: HashMap<String, f64>,
}

/// Entry in the `GET /players/nfl` directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Player {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    /// NFL team abbreviation. Null for free agents.
    #[serde(default)]
    pub team: Option<String>,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }
}

// ---------------------------------------------------------------------------
// Draft and playoffs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftPickMetadata {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
}

/// `GET /draft/{draft_id}/picks`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftPick {
    #[serde(default, deserialize_with = "null_to_default")]
    pub round: u32,
    #[serde(default, deserialize_with = "null_to_default")]
    pub pick_no: u32,
    #[serde(default)]
    pub roster_id: Option<u32>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub player_id: String,
    #[serde(default)]
    pub metadata: Option<DraftPickMetadata>,
}

/// `GET /league/{league_id}/winners_bracket`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BracketMatch {
    #[serde(rename = "r")]
    pub round: u32,
    #[serde(rename = "m")]
    pub match_id: u32,
    #[serde(default)]
    pub t1: Option<u32>,
    #[serde(default)]
    pub t2: Option<u32>,
    /// Winning roster id once decided.
    #[serde(default)]
    pub w: Option<u32>,
    #[serde(default)]
    pub l: Option<u32>,
    /// Final placement this match decides (1 = championship).
    #[serde(default)]
    pub p: Option<u32>,
}

// ---------------------------------------------------------------------------
// LeagueSnapshot
// ---------------------------------------------------------------------------

/// Everything fetched for one report run. Built once through
/// [`SnapshotBuilder`] and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct LeagueSnapshot {
    pub league: LeagueInfo,
    pub current_week: u32,
    /// Highest week with a non-empty matchups response (0 if none).
    pub max_week_with_data: u32,
    pub users: HashMap<String, User>,
    pub rosters: Vec<Roster>,
    /// Only weeks with a non-empty response are present.
    pub matchups: BTreeMap<u32, Vec<Matchup>>,
    pub players: HashMap<String, Player>,
    pub draft_picks: Vec<DraftPick>,
    pub winners_bracket: Vec<BracketMatch>,
}

impl LeagueSnapshot {
    pub fn builder(league: LeagueInfo) -> SnapshotBuilder {
        SnapshotBuilder::new(league)
    }

    pub fn roster(&self, roster_id: u32) -> Option<&Roster> {
        self.rosters.iter().find(|r| r.roster_id == roster_id)
    }

    /// Display name for a roster's team.
    ///
    /// Falls back to `"Team {roster_id}"` when the roster, its owner, or
    /// every name field is missing.
    pub fn team_name(&self, roster_id: u32) -> String {
        self.roster(roster_id)
            .and_then(|r| r.owner_id.as_deref())
            .and_then(|owner| self.users.get(owner))
            .and_then(User::team_name)
            .map(|name| strip_control(name).into_owned())
            .unwrap_or_else(|| format!("Team {roster_id}"))
    }

    pub fn player_name(&self, player_id: &str) -> String {
        match self.players.get(player_id) {
            Some(p) if !player_id.is_empty() => strip_control(&p.full_name()).into_owned(),
            _ => UNKNOWN_PLAYER.to_string(),
        }
    }

    /// `(position, nfl_team)` for a player, `UNK` for anything unresolved.
    pub fn player_position_team(&self, player_id: &str) -> (&str, &str) {
        match self.players.get(player_id) {
            Some(p) => (
                non_empty(p.position.as_deref()).unwrap_or(UNKNOWN_CODE),
                non_empty(p.team.as_deref()).unwrap_or(UNKNOWN_CODE),
            ),
            None => (UNKNOWN_CODE, UNKNOWN_CODE),
        }
    }

    /// Whether a score in `week` counts as a completed result.
    ///
    /// Zero scores and weeks past the last reported week are treated as
    /// not yet played, so a live week with partial scoring never counts.
    pub fn is_scored(&self, week: u32, points: f64) -> bool {
        points > 0.0 && week <= self.max_week_with_data
    }

    pub fn week_matchups(&self, week: u32) -> &[Matchup] {
        self.matchups.get(&week).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Scores for `roster_id` across every completed week, in week order.
    pub fn completed_scores(&self, roster_id: u32) -> Vec<f64> {
        self.matchups
            .iter()
            .flat_map(|(&week, entries)| {
                entries
                    .iter()
                    .filter(move |m| m.roster_id == roster_id && self.is_scored(week, m.points))
                    .map(|m| m.points)
            })
            .collect()
    }
}

/// Assembles a [`LeagueSnapshot`]. `max_week_with_data` is derived from the
/// weeks added, and empty weeks are dropped.
#[derive(Debug, Clone, Default)]
pub struct SnapshotBuilder {
    snapshot: LeagueSnapshot,
}

impl SnapshotBuilder {
    pub fn new(league: LeagueInfo) -> Self {
        Self {
            snapshot: LeagueSnapshot {
                league,
                current_week: 1,
                ..LeagueSnapshot::default()
            },
        }
    }

    pub fn current_week(mut self, week: u32) -> Self {
        self.snapshot.current_week = week;
        self
    }

    pub fn users(mut self, users: Vec<User>) -> Self {
        self.snapshot.users = users.into_iter().map(|u| (u.user_id.clone(), u)).collect();
        self
    }

    pub fn rosters(mut self, rosters: Vec<Roster>) -> Self {
        self.snapshot.rosters = rosters;
        self
    }

    pub fn week(mut self, week: u32, matchups: Vec<Matchup>) -> Self {
        if !matchups.is_empty() {
            self.snapshot.matchups.insert(week, matchups);
        }
        self
    }

    pub fn players(mut self, players: HashMap<String, Player>) -> Self {
        self.snapshot.players = players;
        self
    }

    pub fn draft_picks(mut self, picks: Vec<DraftPick>) -> Self {
        self.snapshot.draft_picks = picks;
        self
    }

    pub fn winners_bracket(mut self, bracket: Vec<BracketMatch>) -> Self {
        self.snapshot.winners_bracket = bracket;
        self
    }

    pub fn build(mut self) -> LeagueSnapshot {
        self.snapshot.max_week_with_data =
            self.snapshot.matchups.keys().next_back().copied().unwrap_or(0);
        self.snapshot
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
