// End-to-end checks over a small league: snapshot -> standings -> analytics.

use sleeper_core::analytics::consistency::TeamConsistency;
use sleeper_core::snapshot::{LeagueInfo, Matchup, Roster, RosterSettings, User, UserMetadata};
use sleeper_core::{compute_analytics, compute_standings, weekly_results, LeagueSnapshot, WeekOutcome};

// ===========================================================================
// Fixture
// ===========================================================================

/// Weekly scores per roster (index = roster_id - 1). A 0.0 marks a week the
/// roster did not score.
const SCORES: [[f64; 5]; 4] = [
    [120.0, 110.0, 130.0, 125.0, 0.0],
    [100.0, 140.0, 90.0, 95.0, 0.0],
    [100.0, 100.0, 100.0, 100.0, 0.0],
    [80.0, 70.0, 150.0, 60.0, 88.0],
];

/// Pairings by week: (roster, roster) share a matchup id.
const PAIRINGS: [[(u32, u32); 2]; 5] = [
    [(1, 2), (3, 4)],
    [(1, 3), (2, 4)],
    [(1, 4), (2, 3)],
    [(1, 2), (3, 4)],
    [(1, 3), (2, 4)],
];

fn league() -> LeagueSnapshot {
    let users = vec![
        User {
            user_id: "u1".into(),
            username: Some("alpha".into()),
            display_name: Some("Alpha".into()),
            metadata: Some(UserMetadata {
                team_name: Some("Air Raid".into()),
            }),
        },
        User {
            user_id: "u2".into(),
            username: Some("bravo".into()),
            display_name: Some("Bravo".into()),
            metadata: None,
        },
        User {
            user_id: "u3".into(),
            username: Some("charlie".into()),
            display_name: None,
            metadata: None,
        },
    ];

    // Records as the league reports them after four completed weeks.
    let records = [(3, 1), (1, 3), (3, 1), (1, 3)];
    let owners = [Some("u1"), Some("u2"), Some("u3"), None];
    let rosters = (0..4)
        .map(|i| Roster {
            roster_id: i as u32 + 1,
            owner_id: owners[i].map(str::to_string),
            settings: RosterSettings {
                wins: records[i].0,
                losses: records[i].1,
                ..RosterSettings::default()
            },
            ..Roster::default()
        })
        .collect();

    let mut builder = LeagueSnapshot::builder(LeagueInfo {
        name: Some("Integration League".into()),
        season: Some("2024".into()),
        ..LeagueInfo::default()
    })
    .current_week(5)
    .users(users)
    .rosters(rosters);

    for (w, pairs) in PAIRINGS.iter().enumerate() {
        let week = w as u32 + 1;
        let mut entries = Vec::new();
        for (mid, (a, b)) in pairs.iter().enumerate() {
            for rid in [*a, *b] {
                entries.push(Matchup {
                    roster_id: rid,
                    matchup_id: Some(mid as u32 + 1),
                    points: SCORES[rid as usize - 1][w],
                    ..Matchup::default()
                });
            }
        }
        builder = builder.week(week, entries);
    }
    builder.build()
}

// ===========================================================================
// Tests
// ===========================================================================

#[test]
fn standings_use_resolved_names_and_order() {
    let snap = league();
    let standings = compute_standings(&snap);

    let names: Vec<&str> = standings.iter().map(|s| s.team.as_str()).collect();
    assert_eq!(names, vec!["Air Raid", "charlie", "Team 4", "Bravo"]);
    assert!((standings[0].points_for - 485.0).abs() < 1e-9);
    // Roster 4's week-5 score counts: week 5 is the last week with data.
    assert!((standings[2].points_for - 448.0).abs() < 1e-9);

    let games: u32 = standings.iter().map(|s| s.games_played()).sum();
    assert_eq!(games % 2, 0);
}

#[test]
fn live_week_with_one_side_unscored_is_not_decided() {
    let snap = league();
    // Week 5: roster 4 scored 88 against roster 2's 0.
    assert_eq!(weekly_results(&snap, 4)[4], WeekOutcome::NoGame);
    assert_eq!(weekly_results(&snap, 2)[4], WeekOutcome::NoGame);

    for roster in &snap.rosters {
        let log = weekly_results(&snap, roster.roster_id);
        assert_eq!(log.len(), 17);
        assert!(log[5..].iter().all(|o| *o == WeekOutcome::NoGame));
    }
}

#[test]
fn analytics_over_sample_league() {
    let snap = league();
    let standings = compute_standings(&snap);
    let result = compute_analytics(&snap, &standings);

    assert_eq!(result.highest_scorer.as_ref().unwrap().team, "Air Raid");
    assert_eq!(result.lowest_scorer.as_ref().unwrap().team, "charlie");

    // Week 3 high is roster 4's 150, low is Bravo's 90.
    assert_eq!(result.weekly_highs[&3].team, "Team 4");
    assert_eq!(result.weekly_lows[&3].team, "Bravo");
    // Week 5 only has roster 4 scoring.
    assert_eq!(result.weekly_highs[&5].team, "Team 4");
    assert_eq!(result.weekly_lows[&5].team, "Team 4");

    let consistent: &TeamConsistency = result.most_consistent.as_ref().unwrap();
    assert_eq!(consistent.team, "charlie");
    assert_eq!(consistent.stats.std, 0.0);
    assert_eq!(result.most_volatile.as_ref().unwrap().team, "Team 4");

    // Air Raid and charlie both peak at two straight wins; roster order
    // puts Air Raid first.
    let win = result.longest_win_streak.as_ref().unwrap();
    assert_eq!(win.team, "Air Raid");
    assert_eq!(win.length, 2);
    let loss = result.longest_loss_streak.as_ref().unwrap();
    assert_eq!(loss.team, "Bravo");
    assert_eq!(loss.length, 2);

    let over: Vec<&str> = result.over_performers.iter().map(|r| r.team.as_str()).collect();
    let under: Vec<&str> = result.under_performers.iter().map(|r| r.team.as_str()).collect();
    assert_eq!(over, vec!["charlie"]);
    assert_eq!(under, vec!["Team 4", "Air Raid", "Bravo"]);
    assert!(over.iter().all(|t| !under.contains(t)));

    assert_eq!(result.summary.total_matchups, 10);
    assert_eq!(result.consistency.len(), 4);
}
