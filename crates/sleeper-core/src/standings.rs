// Standings: per-team record and points, ordered for the power rankings.

use serde::Serialize;
use tracing::debug;

use crate::snapshot::LeagueSnapshot;

/// One team's line in the standings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStanding {
    pub roster_id: u32,
    pub team: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    /// Sum of completed-week scores only.
    pub points_for: f64,
    pub points_against: f64,
}

impl TeamStanding {
    pub fn games_played(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// `W-L`, or `W-L-T` when the team has a tie.
    pub fn record(&self) -> String {
        if self.ties > 0 {
            format!("{}-{}-{}", self.wins, self.losses, self.ties)
        } else {
            format!("{}-{}", self.wins, self.losses)
        }
    }
}

/// Compute standings for every roster in the snapshot.
///
/// Records come straight from the roster settings. `points_for` sums the
/// roster's scores over completed weeks (positive score, week at or before
/// `max_week_with_data`). Ordered by wins, then points, both descending;
/// the sort is stable so full ties keep roster order.
pub fn compute_standings(snapshot: &LeagueSnapshot) -> Vec<TeamStanding> {
    let mut standings: Vec<TeamStanding> = snapshot
        .rosters
        .iter()
        .map(|roster| TeamStanding {
            roster_id: roster.roster_id,
            team: snapshot.team_name(roster.roster_id),
            wins: roster.settings.wins,
            losses: roster.settings.losses,
            ties: roster.settings.ties,
            points_for: snapshot.completed_scores(roster.roster_id).iter().sum(),
            points_against: roster.settings.points_against(),
        })
        .collect();

    standings.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then_with(|| b.points_for.total_cmp(&a.points_for))
    });

    debug!(teams = standings.len(), "computed standings");
    standings
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
