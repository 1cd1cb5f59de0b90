// Scoring consistency: mean, spread, and range of each team's weekly scores.

use serde::Serialize;

use crate::snapshot::LeagueSnapshot;

/// Summary of one team's completed-week scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConsistencyStats {
    pub avg: f64,
    /// Population standard deviation (N denominator).
    pub std: f64,
    pub high: f64,
    pub low: f64,
}

impl ConsistencyStats {
    /// Returns `None` for an empty slice.
    pub fn from_scores(scores: &[f64]) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }
        let n = scores.len() as f64;
        let avg = scores.iter().sum::<f64>() / n;
        let variance = scores.iter().map(|s| (s - avg).powi(2)).sum::<f64>() / n;
        Some(Self {
            avg,
            std: variance.sqrt(),
            high: scores.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            low: scores.iter().copied().fold(f64::INFINITY, f64::min),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamConsistency {
    pub team: String,
    pub stats: ConsistencyStats,
}

/// Consistency stats per team, in roster order. Teams without a single
/// completed score are left out.
pub fn consistency_by_team(snapshot: &LeagueSnapshot) -> Vec<TeamConsistency> {
    snapshot
        .rosters
        .iter()
        .filter_map(|roster| {
            let scores = snapshot.completed_scores(roster.roster_id);
            ConsistencyStats::from_scores(&scores).map(|stats| TeamConsistency {
                team: snapshot.team_name(roster.roster_id),
                stats,
            })
        })
        .collect()
}

/// Lowest standard deviation; the first team wins ties.
pub fn most_consistent(teams: &[TeamConsistency]) -> Option<&TeamConsistency> {
    teams.iter().fold(None, |best: Option<&TeamConsistency>, t| match best {
        Some(b) if b.stats.std <= t.stats.std => Some(b),
        _ => Some(t),
    })
}

/// Highest standard deviation; the first team wins ties.
pub fn most_volatile(teams: &[TeamConsistency]) -> Option<&TeamConsistency> {
    teams.iter().fold(None, |best: Option<&TeamConsistency>, t| match best {
        Some(b) if b.stats.std >= t.stats.std => Some(b),
        _ => Some(t),
    })
}
