// Snapshot assembly: pull every resource a report needs from a
// `LeagueSource` and freeze it into a `LeagueSnapshot`.
//
// Only the league itself is required. Every other resource that fails to
// load is logged and replaced by empty data so the report still renders.

use tracing::{info, warn};

use sleeper_core::snapshot::{LeagueSnapshot, MAX_SEASON_WEEK};

use crate::error::ApiResult;
use crate::source::LeagueSource;

fn or_empty<T: Default>(what: &str, result: ApiResult<T>) -> T {
    result.unwrap_or_else(|e| {
        warn!("Failed to fetch {what}, continuing without it: {e}");
        T::default()
    })
}

/// Fetch a complete snapshot for `league_id`.
///
/// Matchups are requested for weeks `1..=min(current_week, max_week)`.
/// `max_week` is clamped to the length of an NFL season.
pub async fn fetch_snapshot<S>(source: &S, league_id: &str, max_week: u32) -> ApiResult<LeagueSnapshot>
where
    S: LeagueSource + ?Sized,
{
    info!("Fetching league {league_id}");
    let league = source.league(league_id).await?;

    let current_week = match source.nfl_state().await {
        Ok(state) => state.week,
        Err(e) => {
            warn!("Failed to fetch NFL state, assuming week 1: {e}");
            1
        }
    };
    info!("League '{}', current week {current_week}", league.display_name());

    let users = or_empty("users", source.users(league_id).await);
    let rosters = or_empty("rosters", source.rosters(league_id).await);
    info!("Fetched {} users and {} rosters", users.len(), rosters.len());

    let draft_id = league.draft_id.clone().filter(|id| !id.is_empty());
    let mut builder = LeagueSnapshot::builder(league)
        .current_week(current_week)
        .users(users)
        .rosters(rosters);

    let last_week = current_week.min(max_week.min(MAX_SEASON_WEEK));
    for week in 1..=last_week {
        let entries = or_empty(&format!("week {week} matchups"), source.matchups(league_id, week).await);
        if entries.is_empty() {
            info!("No matchup data for week {week}");
        }
        builder = builder.week(week, entries);
    }

    let players = or_empty("players", source.players().await);
    info!("Fetched {} players", players.len());

    let bracket = or_empty("winners bracket", source.winners_bracket(league_id).await);
    let picks = match draft_id {
        Some(id) => or_empty("draft picks", source.draft_picks(&id).await),
        None => Vec::new(),
    };

    let snapshot = builder
        .players(players)
        .winners_bracket(bracket)
        .draft_picks(picks)
        .build();
    info!(
        "Snapshot ready: {} weeks with data, last week {}",
        snapshot.matchups.len(),
        snapshot.max_week_with_data
    );
    Ok(snapshot)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
