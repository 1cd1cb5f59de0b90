// League analytics: leaders, consistency, luck, and streaks.
//
// Everything here is a pure function of the snapshot and the standings
// derived from it. Degenerate input (no teams, no completed weeks) yields
// empty collections and `None`, never an error.

pub mod consistency;
pub mod expected;
pub mod streaks;
pub mod summary;
pub mod weekly;

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::snapshot::LeagueSnapshot;
use crate::standings::TeamStanding;

pub use consistency::{ConsistencyStats, TeamConsistency};
pub use expected::{ExpectedWinRecord, PERFORMANCE_THRESHOLD};
pub use streaks::StreakLeader;
pub use summary::LeagueSummary;
pub use weekly::WeeklyScore;

#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalyticsResult {
    pub highest_scorer: Option<TeamStanding>,
    pub lowest_scorer: Option<TeamStanding>,
    pub weekly_highs: BTreeMap<u32, WeeklyScore>,
    pub weekly_lows: BTreeMap<u32, WeeklyScore>,
    /// Roster order; teams without completed scores are absent.
    pub consistency: Vec<TeamConsistency>,
    pub most_consistent: Option<TeamConsistency>,
    pub most_volatile: Option<TeamConsistency>,
    /// Standings order.
    pub expected_wins: Vec<ExpectedWinRecord>,
    pub over_performers: Vec<ExpectedWinRecord>,
    pub under_performers: Vec<ExpectedWinRecord>,
    pub longest_win_streak: Option<StreakLeader>,
    pub longest_loss_streak: Option<StreakLeader>,
    pub summary: LeagueSummary,
}

/// Run every analytics pass over the snapshot and its standings.
pub fn compute_analytics(snapshot: &LeagueSnapshot, standings: &[TeamStanding]) -> AnalyticsResult {
    let (weekly_highs, weekly_lows) = weekly::weekly_extremes(snapshot);

    let consistency = consistency::consistency_by_team(snapshot);
    let most_consistent = consistency::most_consistent(&consistency).cloned();
    let most_volatile = consistency::most_volatile(&consistency).cloned();

    let expected_wins = expected::expected_wins(standings);
    let over_performers = expected::over_performers(&expected_wins);
    let under_performers = expected::under_performers(&expected_wins);

    let (longest_win_streak, longest_loss_streak) = streaks::streak_leaders(snapshot);
    let summary = summary::league_summary(snapshot, &consistency);

    debug!(
        weeks = weekly_highs.len(),
        consistency_teams = consistency.len(),
        over = over_performers.len(),
        under = under_performers.len(),
        "computed league analytics"
    );

    AnalyticsResult {
        highest_scorer: highest_scorer(standings).cloned(),
        lowest_scorer: lowest_scorer(standings).cloned(),
        weekly_highs,
        weekly_lows,
        consistency,
        most_consistent,
        most_volatile,
        expected_wins,
        over_performers,
        under_performers,
        longest_win_streak,
        longest_loss_streak,
        summary,
    }
}

/// Most points for; the earliest standing wins ties. `None` when empty.
pub fn highest_scorer(standings: &[TeamStanding]) -> Option<&TeamStanding> {
    standings.iter().fold(None, |best: Option<&TeamStanding>, s| match best {
        Some(b) if b.points_for >= s.points_for => Some(b),
        _ => Some(s),
    })
}

/// Fewest points for; the earliest standing wins ties. `None` when empty.
pub fn lowest_scorer(standings: &[TeamStanding]) -> Option<&TeamStanding> {
    standings.iter().fold(None, |best: Option<&TeamStanding>, s| match best {
        Some(b) if b.points_for <= s.points_for => Some(b),
        _ => Some(s),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::LeagueInfo;
    use crate::standings::compute_standings;

    #[test]
    fn empty_snapshot_degrades_to_empty_results() {
        let snap = LeagueSnapshot::builder(LeagueInfo::default()).build();
        let standings = compute_standings(&snap);
        let result = compute_analytics(&snap, &standings);

        assert!(result.highest_scorer.is_none());
        assert!(result.lowest_scorer.is_none());
        assert!(result.weekly_highs.is_empty());
        assert!(result.weekly_lows.is_empty());
        assert!(result.consistency.is_empty());
        assert!(result.most_consistent.is_none());
        assert!(result.most_volatile.is_none());
        assert!(result.expected_wins.is_empty());
        assert!(result.over_performers.is_empty());
        assert!(result.under_performers.is_empty());
        assert!(result.longest_win_streak.is_none());
        assert!(result.longest_loss_streak.is_none());
        assert_eq!(result.summary, LeagueSummary::default());
    }

    #[test]
    fn scorer_ties_keep_first() {
        let s = |id: u32, pf: f64| TeamStanding {
            roster_id: id,
            team: format!("Team {id}"),
            wins: 0,
            losses: 0,
            ties: 0,
            points_for: pf,
            points_against: 0.0,
        };
        let standings = vec![s(1, 300.0), s(2, 500.0), s(3, 500.0), s(4, 100.0), s(5, 100.0)];
        assert_eq!(highest_scorer(&standings).unwrap().roster_id, 2);
        assert_eq!(lowest_scorer(&standings).unwrap().roster_id, 4);
    }
}
