// Weekly high and low scores across the league.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::snapshot::LeagueSnapshot;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyScore {
    pub team: String,
    pub points: f64,
}

/// Top and bottom completed score for each week, keyed by week.
///
/// Entries within a week are ranked by points, descending, with a stable
/// sort: on equal points the high goes to the earlier entry and the low to
/// the later one. Weeks without any completed score are absent from both maps.
pub fn weekly_extremes(
    snapshot: &LeagueSnapshot,
) -> (BTreeMap<u32, WeeklyScore>, BTreeMap<u32, WeeklyScore>) {
    let mut highs = BTreeMap::new();
    let mut lows = BTreeMap::new();

    for (&week, entries) in &snapshot.matchups {
        let mut scores: Vec<WeeklyScore> = entries
            .iter()
            .filter(|m| snapshot.is_scored(week, m.points))
            .map(|m| WeeklyScore {
                team: snapshot.team_name(m.roster_id),
                points: m.points,
            })
            .collect();
        scores.sort_by(|a, b| b.points.total_cmp(&a.points));

        let (Some(first), Some(last)) = (scores.first(), scores.last()) else {
            continue;
        };
        highs.insert(week, first.clone());
        lows.insert(week, last.clone());
    }

    (highs, lows)
}
