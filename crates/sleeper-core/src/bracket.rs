// Playoff bracket with roster ids resolved to team names.

use serde::Serialize;

use crate::snapshot::LeagueSnapshot;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BracketLine {
    pub round: u32,
    pub match_id: u32,
    /// `None` while the slot is still to be decided.
    pub team_one: Option<String>,
    pub team_two: Option<String>,
    pub winner: Option<String>,
    pub placement: Option<u32>,
}

/// Winners-bracket matches ordered by round, then match number.
pub fn playoff_bracket(snapshot: &LeagueSnapshot) -> Vec<BracketLine> {
    let name = |id: Option<u32>| id.map(|id| snapshot.team_name(id));
    let mut lines: Vec<BracketLine> = snapshot
        .winners_bracket
        .iter()
        .map(|m| BracketLine {
            round: m.round,
            match_id: m.match_id,
            team_one: name(m.t1),
            team_two: name(m.t2),
            winner: name(m.w),
            placement: m.p,
        })
        .collect();
    lines.sort_by_key(|l| (l.round, l.match_id));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{BracketMatch, LeagueInfo};

    #[test]
    fn orders_by_round_and_match() {
        let snap = LeagueSnapshot::builder(LeagueInfo::default())
            .winners_bracket(vec![
                BracketMatch { round: 2, match_id: 3, t1: Some(1), t2: None, ..BracketMatch::default() },
                BracketMatch { round: 1, match_id: 2, t1: Some(4), t2: Some(5), w: Some(5), l: Some(4), p: None },
                BracketMatch { round: 1, match_id: 1, t1: Some(3), t2: Some(6), ..BracketMatch::default() },
            ])
            .build();
        let lines = playoff_bracket(&snap);
        let keys: Vec<(u32, u32)> = lines.iter().map(|l| (l.round, l.match_id)).collect();
        assert_eq!(keys, vec![(1, 1), (1, 2), (2, 3)]);
        assert_eq!(lines[1].winner.as_deref(), Some("Team 5"));
        assert_eq!(lines[2].team_two, None);
    }
}
