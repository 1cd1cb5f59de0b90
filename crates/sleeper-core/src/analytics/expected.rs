// Expected wins: how a team's record compares to its scoring rank.
//
// A team outscored by `k` of the league's `n` teams is expected to win
// `1 - k/n` of its games. The gap between actual and expected wins measures
// schedule luck.

use serde::Serialize;

use crate::standings::TeamStanding;

/// Minimum |actual - expected| for a team to count as an over/under performer.
pub const PERFORMANCE_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpectedWinRecord {
    pub team: String,
    pub actual_wins: u32,
    pub expected_wins: f64,
    /// `actual_wins - expected_wins`
    pub difference: f64,
    pub games_played: u32,
}

impl ExpectedWinRecord {
    /// Games not won (losses plus ties).
    pub fn non_wins(&self) -> u32 {
        self.games_played.saturating_sub(self.actual_wins)
    }
}

/// One record per standing, in standings order.
pub fn expected_wins(standings: &[TeamStanding]) -> Vec<ExpectedWinRecord> {
    let n = standings.len() as f64;
    standings
        .iter()
        .map(|team| {
            let better = standings
                .iter()
                .filter(|other| other.points_for > team.points_for)
                .count() as f64;
            let expected_pct = 1.0 - better / n;
            let games_played = team.games_played();
            let expected = expected_pct * f64::from(games_played);
            ExpectedWinRecord {
                team: team.team.clone(),
                actual_wins: team.wins,
                expected_wins: expected,
                difference: f64::from(team.wins) - expected,
                games_played,
            }
        })
        .collect()
}

/// Teams beating expectation by more than the threshold, luckiest first.
pub fn over_performers(records: &[ExpectedWinRecord]) -> Vec<ExpectedWinRecord> {
    let mut over: Vec<_> = records
        .iter()
        .filter(|r| r.difference > PERFORMANCE_THRESHOLD)
        .cloned()
        .collect();
    over.sort_by(|a, b| b.difference.total_cmp(&a.difference));
    over
}

/// Teams falling short by more than the threshold, unluckiest first.
pub fn under_performers(records: &[ExpectedWinRecord]) -> Vec<ExpectedWinRecord> {
    let mut under: Vec<_> = records
        .iter()
        .filter(|r| r.difference < -PERFORMANCE_THRESHOLD)
        .cloned()
        .collect();
    under.sort_by(|a, b| a.difference.total_cmp(&b.difference));
    under
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standing(team: &str, wins: u32, losses: u32, points_for: f64) -> TeamStanding {
        TeamStanding {
            roster_id: 0,
            team: team.to_string(),
            wins,
            losses,
            ties: 0,
            points_for,
            points_against: 0.0,
        }
    }

    #[test]
    fn three_team_example() {
        let standings = vec![
            standing("A", 2, 0, 300.0),
            standing("B", 1, 1, 200.0),
            standing("C", 0, 2, 100.0),
        ];
        let records = expected_wins(&standings);

        let expected = [2.0, 4.0 / 3.0, 2.0 / 3.0];
        let diffs = [0.0, -1.0 / 3.0, -2.0 / 3.0];
        for (i, r) in records.iter().enumerate() {
            assert!((r.expected_wins - expected[i]).abs() < 1e-9, "{}", r.team);
            assert!((r.difference - diffs[i]).abs() < 1e-9, "{}", r.team);
            assert_eq!(r.games_played, 2);
        }

        assert!(over_performers(&records).is_empty());
        let under = under_performers(&records);
        assert_eq!(under.len(), 1);
        assert_eq!(under[0].team, "C");
    }

    #[test]
    fn performers_are_sorted_and_disjoint() {
        let standings = vec![
            standing("Lucky", 8, 2, 900.0),
            standing("Luckier", 9, 1, 800.0),
            standing("Fair", 6, 4, 1000.0),
            standing("Cursed", 1, 9, 1100.0),
            standing("Doomed", 2, 8, 1050.0),
        ];
        let records = expected_wins(&standings);
        let over = over_performers(&records);
        let under = under_performers(&records);

        let over_names: Vec<&str> = over.iter().map(|r| r.team.as_str()).collect();
        let under_names: Vec<&str> = under.iter().map(|r| r.team.as_str()).collect();
        assert_eq!(over_names, vec!["Luckier", "Lucky"]);
        assert_eq!(under_names, vec!["Cursed", "Doomed"]);
        assert!(over_names.iter().all(|t| !under_names.contains(t)));
    }

    #[test]
    fn no_games_means_no_expectation() {
        let records = expected_wins(&[standing("Fresh", 0, 0, 0.0)]);
        assert_eq!(records[0].expected_wins, 0.0);
        assert_eq!(records[0].difference, 0.0);
        assert_eq!(records[0].non_wins(), 0);
    }

    #[test]
    fn empty_standings() {
        assert!(expected_wins(&[]).is_empty());
    }
}
