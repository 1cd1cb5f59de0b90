// Roster sheets: starting lineup, bench, and taxi squad for each team.

use serde::Serialize;

use crate::snapshot::{LeagueSnapshot, Roster};

/// Starting slots in lineup order. Truncated when a roster has fewer starters.
pub const LINEUP_TEMPLATE: [&str; 9] = ["QB", "RB", "RB", "WR", "WR", "TE", "FLEX", "K", "DEF"];

/// Bench groups are listed in this order, other positions after.
pub const BENCH_ORDER: [&str; 6] = ["QB", "RB", "WR", "TE", "K", "DEF"];

/// Sleeper reports team defenses as `DEF`; sheets label them `DST`.
pub fn display_position(position: &str) -> &str {
    if position == "DEF" {
        "DST"
    } else {
        position
    }
}

fn is_empty_slot(player_id: &str) -> bool {
    player_id.is_empty() || player_id == "0"
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerLine {
    pub player_id: String,
    pub name: String,
    pub position: String,
    pub nfl_team: String,
    /// Points scored in the previous week.
    pub points: f64,
    pub injured_reserve: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineupEntry {
    pub slot: String,
    /// `None` for an unfilled starting slot.
    pub player: Option<PlayerLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchGroup {
    pub position: String,
    pub players: Vec<PlayerLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterSheet {
    pub roster_id: u32,
    pub team: String,
    pub starters: Vec<LineupEntry>,
    /// Sum of the starters' previous-week points.
    pub starter_points: f64,
    pub bench: Vec<BenchGroup>,
    pub taxi: Vec<PlayerLine>,
}

impl RosterSheet {
    pub fn is_empty(&self) -> bool {
        self.starters.is_empty() && self.bench.is_empty() && self.taxi.is_empty()
    }
}

/// A player's points in the week before `current_week`, 0 when unknown.
pub fn last_week_points(snapshot: &LeagueSnapshot, roster_id: u32, player_id: &str) -> f64 {
    if snapshot.current_week <= 1 {
        return 0.0;
    }
    snapshot
        .week_matchups(snapshot.current_week - 1)
        .iter()
        .find(|m| m.roster_id == roster_id)
        .and_then(|m| m.players_points.get(player_id))
        .copied()
        .unwrap_or(0.0)
}

fn player_line(snapshot: &LeagueSnapshot, roster_id: u32, player_id: &str) -> PlayerLine {
    let (position, nfl_team) = snapshot.player_position_team(player_id);
    PlayerLine {
        player_id: player_id.to_string(),
        name: snapshot.player_name(player_id),
        position: position.to_string(),
        nfl_team: nfl_team.to_string(),
        points: last_week_points(snapshot, roster_id, player_id),
        injured_reserve: false,
    }
}

/// Build the sheet for one roster.
pub fn roster_sheet(snapshot: &LeagueSnapshot, roster: &Roster) -> RosterSheet {
    let team = snapshot.team_name(roster.roster_id);
    if roster.players.is_empty() {
        return RosterSheet {
            roster_id: roster.roster_id,
            team,
            starters: Vec::new(),
            starter_points: 0.0,
            bench: Vec::new(),
            taxi: Vec::new(),
        };
    }

    // Starters: template label by index, then position with a running count.
    let mut extra_counts: Vec<(String, usize)> = Vec::new();
    let mut starters = Vec::with_capacity(roster.starters.len());
    for (i, player_id) in roster.starters.iter().enumerate() {
        if is_empty_slot(player_id) {
            let slot = LINEUP_TEMPLATE.get(i).copied().unwrap_or("???");
            starters.push(LineupEntry {
                slot: slot.to_string(),
                player: None,
            });
            continue;
        }

        let line = player_line(snapshot, roster.roster_id, player_id);
        let slot = if line.position == "DEF" {
            "DST".to_string()
        } else if let Some(label) = LINEUP_TEMPLATE.get(i) {
            label.to_string()
        } else {
            match extra_counts.iter_mut().find(|(pos, _)| *pos == line.position) {
                Some((_, count)) => {
                    *count += 1;
                    format!("{}{}", line.position, count)
                }
                None => {
                    extra_counts.push((line.position.clone(), 1));
                    line.position.clone()
                }
            }
        };
        starters.push(LineupEntry {
            slot,
            player: Some(line),
        });
    }
    let starter_points = starters
        .iter()
        .filter_map(|e| e.player.as_ref())
        .map(|p| p.points)
        .sum();

    // Bench: everyone not starting, on taxi, or on IR; IR players follow.
    let bench_ids = roster
        .players
        .iter()
        .filter(|p| {
            !roster.starters.contains(p) && !roster.taxi.contains(p) && !roster.reserve.contains(p)
        })
        .map(|p| (p, false))
        .chain(roster.reserve.iter().map(|p| (p, true)));

    let mut groups: Vec<BenchGroup> = Vec::new();
    for (player_id, injured_reserve) in bench_ids {
        let line = PlayerLine {
            injured_reserve,
            ..player_line(snapshot, roster.roster_id, player_id)
        };
        match groups.iter_mut().find(|g| g.position == line.position) {
            Some(group) => group.players.push(line),
            None => groups.push(BenchGroup {
                position: line.position.clone(),
                players: vec![line],
            }),
        }
    }
    // Stable: unlisted positions keep first-seen order after the listed ones.
    groups.sort_by_key(|g| {
        BENCH_ORDER
            .iter()
            .position(|p| *p == g.position)
            .unwrap_or(BENCH_ORDER.len())
    });

    let taxi = roster
        .taxi
        .iter()
        .map(|p| player_line(snapshot, roster.roster_id, p))
        .collect();

    RosterSheet {
        roster_id: roster.roster_id,
        team,
        starters,
        starter_points,
        bench: groups,
        taxi,
    }
}

/// Sheets for every roster, in roster order.
pub fn roster_sheets(snapshot: &LeagueSnapshot) -> Vec<RosterSheet> {
    snapshot
        .rosters
        .iter()
        .map(|r| roster_sheet(snapshot, r))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
