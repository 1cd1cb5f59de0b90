// League-wide scoring summary.

use serde::Serialize;

use super::consistency::TeamConsistency;
use crate::snapshot::LeagueSnapshot;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeagueSummary {
    /// Mean of the teams' average scores.
    pub league_average: Option<f64>,
    pub teams_above_average: usize,
    /// Teams at or below the league average.
    pub teams_below_average: usize,
    pub league_high: Option<f64>,
    pub league_low: Option<f64>,
    /// Head-to-head pairings across every recorded week.
    pub total_matchups: usize,
}

impl LeagueSummary {
    pub fn score_range(&self) -> Option<f64> {
        Some(self.league_high? - self.league_low?)
    }
}

pub fn league_summary(snapshot: &LeagueSnapshot, teams: &[TeamConsistency]) -> LeagueSummary {
    let total_matchups = snapshot.matchups.values().map(|week| week.len() / 2).sum();

    if teams.is_empty() {
        return LeagueSummary {
            total_matchups,
            ..LeagueSummary::default()
        };
    }

    let averages: Vec<f64> = teams.iter().map(|t| t.stats.avg).collect();
    let league_average = averages.iter().sum::<f64>() / averages.len() as f64;
    let teams_above_average = averages.iter().filter(|&&a| a > league_average).count();

    LeagueSummary {
        league_average: Some(league_average),
        teams_above_average,
        teams_below_average: averages.len() - teams_above_average,
        league_high: teams.iter().map(|t| t.stats.high).reduce(f64::max),
        league_low: teams.iter().map(|t| t.stats.low).reduce(f64::min),
        total_matchups,
    }
}
