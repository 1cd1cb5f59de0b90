// Week-by-week game log for a single roster.

use std::fmt;

use serde::Serialize;

use crate::snapshot::LeagueSnapshot;

/// Number of regular-season weeks in the game log.
pub const REGULAR_SEASON_WEEKS: usize = 17;

/// Outcome of one week for one team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WeekOutcome {
    Win,
    Loss,
    Tie,
    /// No completed game: future week, missing data, no opponent, or a
    /// side without a positive score.
    NoGame,
}

impl WeekOutcome {
    pub fn symbol(self) -> char {
        match self {
            WeekOutcome::Win => 'W',
            WeekOutcome::Loss => 'L',
            WeekOutcome::Tie => 'T',
            WeekOutcome::NoGame => '-',
        }
    }

    pub fn is_decided(self) -> bool {
        self != WeekOutcome::NoGame
    }
}

impl fmt::Display for WeekOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Game log indexed by week - 1.
pub type WeeklyResults = [WeekOutcome; REGULAR_SEASON_WEEKS];

/// Outcome for `roster_id` in a single week.
///
/// The opponent is the other entry sharing this roster's `matchup_id`. The
/// game only counts when both sides scored and the week is completed.
pub fn week_outcome(snapshot: &LeagueSnapshot, week: u32, roster_id: u32) -> WeekOutcome {
    let entries = snapshot.week_matchups(week);

    let Some(own) = entries.iter().find(|m| m.roster_id == roster_id) else {
        return WeekOutcome::NoGame;
    };
    let Some(matchup_id) = own.matchup_id else {
        return WeekOutcome::NoGame;
    };
    let Some(opponent) = entries
        .iter()
        .find(|m| m.matchup_id == Some(matchup_id) && m.roster_id != roster_id)
    else {
        return WeekOutcome::NoGame;
    };

    if !snapshot.is_scored(week, own.points) || !snapshot.is_scored(week, opponent.points) {
        return WeekOutcome::NoGame;
    }

    if own.points > opponent.points {
        WeekOutcome::Win
    } else if own.points < opponent.points {
        WeekOutcome::Loss
    } else {
        WeekOutcome::Tie
    }
}

/// Full regular-season game log for `roster_id`, weeks 1 through 17.
pub fn weekly_results(snapshot: &LeagueSnapshot, roster_id: u32) -> WeeklyResults {
    std::array::from_fn(|i| week_outcome(snapshot, i as u32 + 1, roster_id))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
