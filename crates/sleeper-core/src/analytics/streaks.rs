// Longest winning and losing runs.

use serde::Serialize;

use crate::results::{weekly_results, WeekOutcome};
use crate::snapshot::LeagueSnapshot;

/// Longest runs within one team's game log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamStreaks {
    pub longest_win: u32,
    pub longest_loss: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreakLeader {
    pub team: String,
    pub length: u32,
}

/// Scan a game log for its longest runs of `Win` and `Loss`.
/// Ties and weeks without a game end both kinds of run.
pub fn longest_streaks(log: &[WeekOutcome]) -> TeamStreaks {
    let mut streaks = TeamStreaks::default();
    let (mut wins, mut losses) = (0u32, 0u32);
    for outcome in log {
        wins = if *outcome == WeekOutcome::Win { wins + 1 } else { 0 };
        losses = if *outcome == WeekOutcome::Loss { losses + 1 } else { 0 };
        streaks.longest_win = streaks.longest_win.max(wins);
        streaks.longest_loss = streaks.longest_loss.max(losses);
    }
    streaks
}

/// League-wide longest win and loss streaks, as `(win, loss)`.
///
/// Teams are visited in roster order and the first team to reach the
/// maximum keeps it. A maximum of zero yields `None`.
pub fn streak_leaders(snapshot: &LeagueSnapshot) -> (Option<StreakLeader>, Option<StreakLeader>) {
    let mut win: Option<StreakLeader> = None;
    let mut loss: Option<StreakLeader> = None;

    for roster in &snapshot.rosters {
        let streaks = longest_streaks(&weekly_results(snapshot, roster.roster_id));
        if streaks.longest_win > win.as_ref().map_or(0, |l| l.length) {
            win = Some(StreakLeader {
                team: snapshot.team_name(roster.roster_id),
                length: streaks.longest_win,
            });
        }
        if streaks.longest_loss > loss.as_ref().map_or(0, |l| l.length) {
            loss = Some(StreakLeader {
                team: snapshot.team_name(roster.roster_id),
                length: streaks.longest_loss,
            });
        }
    }

    (win, loss)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::WeekOutcome::{Loss as L, NoGame as N, Tie as T, Win as W};

    #[test]
    fn ties_and_gaps_break_runs() {
        let s = longest_streaks(&[W, W, T, W, W, W, N, L, L, W, L]);
        assert_eq!(s.longest_win, 3);
        assert_eq!(s.longest_loss, 2);
    }

    #[test]
    fn streak_never_exceeds_outcome_count() {
        let log = [W, L, W, W, L, L, L, N, W, T, L];
        let s = longest_streaks(&log);
        let wins = log.iter().filter(|o| **o == W).count() as u32;
        let losses = log.iter().filter(|o| **o == L).count() as u32;
        assert!(s.longest_win <= wins);
        assert!(s.longest_loss <= losses);
        assert_eq!(s.longest_loss, 3);
    }

    #[test]
    fn empty_log_has_no_streaks() {
        assert_eq!(longest_streaks(&[]), TeamStreaks::default());
        assert_eq!(longest_streaks(&[N, T, N]), TeamStreaks::default());
    }
}
