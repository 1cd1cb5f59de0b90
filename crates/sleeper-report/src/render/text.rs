// Plain-text report with ANSI-coloured game logs.

use colored::Colorize;
use sleeper_core::analytics::ExpectedWinRecord;
use sleeper_core::bracket::playoff_bracket;
use sleeper_core::draft::draft_recap;
use sleeper_core::lineup::{display_position, roster_sheets, PlayerLine, RosterSheet};
use sleeper_core::{weekly_results, WeekOutcome};

use crate::report::ReportContext;

const RULE_WIDTH: usize = 81;
const TEAM_WIDTH: usize = 13;
const PLAYER_WIDTH: usize = 15;
const TOP_PERFORMERS: usize = 3;

fn rule(ch: char) -> String {
    let mut line: String = std::iter::repeat(ch).take(RULE_WIDTH).collect();
    line.push('\n');
    line
}

/// First `n` characters of `s`.
fn truncate(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

fn section_title(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(&format!(">> {title}\n"));
    out.push_str(&rule('-'));
}

/// Three-character block for one week of the game log.
///
/// Always coloured: the text file and the HTML page carry the codes even
/// when stdout is not a terminal.
pub fn outcome_block(outcome: WeekOutcome) -> String {
    colored::control::set_override(true);
    match outcome {
        WeekOutcome::Win => "███".bright_green().to_string(),
        WeekOutcome::Loss => "███".bright_red().to_string(),
        WeekOutcome::Tie => "███".bright_yellow().to_string(),
        WeekOutcome::NoGame => "░░░".to_string(),
    }
}

/// The complete text report.
pub fn render_text(ctx: &ReportContext<'_>) -> String {
    let mut out = String::with_capacity(16 * 1024);
    out.push_str(&header(ctx));
    out.push_str(&power_rankings(ctx));
    out.push_str(&league_leaders(ctx));
    out.push_str(&nerdy_stats(ctx));
    out.push_str(&bracket(ctx));
    out.push_str(&draft(ctx));
    out.push_str(&rosters(ctx));
    out.push_str(&footer());
    out
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

fn header(ctx: &ReportContext<'_>) -> String {
    let league = &ctx.snapshot.league;
    let mut out = rule('=');
    out.push_str(&format!("  {}\n", league.display_name().to_uppercase()));
    out.push_str(&format!(
        "  Season {} | Week {} | Generated {}\n",
        league.display_season(),
        ctx.snapshot.current_week,
        ctx.generated_at.format("%Y-%m-%d %H:%M"),
    ));
    out.push_str(&rule('='));
    out
}

fn power_rankings(ctx: &ReportContext<'_>) -> String {
    let mut out = String::new();
    section_title(&mut out, "POWER RANKINGS");

    let weeks: String = (1..=sleeper_core::REGULAR_SEASON_WEEKS)
        .map(|w| format!("{w:>3}"))
        .collect();
    out.push_str(&format!(
        "    {:<width$} {weeks}  Record  Points\n",
        "Team",
        width = TEAM_WIDTH
    ));
    out.push_str(&rule('-'));

    for (i, team) in ctx.standings.iter().enumerate() {
        let log: String = weekly_results(ctx.snapshot, team.roster_id)
            .into_iter()
            .map(outcome_block)
            .collect();
        out.push_str(&format!(
            "#{:<2} {:<width$} {log} {:>6} {:>7.1}\n",
            i + 1,
            truncate(&team.team, TEAM_WIDTH),
            team.record(),
            team.points_for,
            width = TEAM_WIDTH,
        ));
    }
    if ctx.standings.is_empty() {
        out.push_str("No teams found.\n");
    }
    out
}

fn performer_line(record: &ExpectedWinRecord) -> String {
    let direction = if record.difference >= 0.0 { "above" } else { "below" };
    format!(
        "   {}: {}-{} record ({:+.1} wins {direction} expected)\n",
        truncate(&record.team, 25),
        record.actual_wins,
        record.non_wins(),
        record.difference,
    )
}

fn league_leaders(ctx: &ReportContext<'_>) -> String {
    let a = &ctx.analytics;
    let mut out = String::new();
    section_title(&mut out, "LEAGUE LEADERS");

    if let Some(top) = &a.highest_scorer {
        out.push_str(&format!(
            "HIGHEST SCORER: {}\n   └─ {:.1} total points\n\n",
            top.team, top.points_for
        ));
    }
    if let Some(c) = &a.most_consistent {
        out.push_str(&format!(
            "MOST CONSISTENT: {}\n   └─ {:.1} avg ± {:.1} std dev\n\n",
            c.team, c.stats.avg, c.stats.std
        ));
    }
    if let Some(v) = &a.most_volatile {
        out.push_str(&format!(
            "BOOM OR BUST: {}\n   └─ {:.1} high, {:.1} low (±{:.1})\n\n",
            v.team, v.stats.high, v.stats.low, v.stats.std
        ));
    }
    if let Some(s) = &a.longest_win_streak {
        out.push_str(&format!("LONGEST WIN STREAK: {} ({} straight)\n", s.team, s.length));
    }
    if let Some(s) = &a.longest_loss_streak {
        out.push_str(&format!("LONGEST LOSING STREAK: {} ({} straight)\n", s.team, s.length));
    }

    if !a.over_performers.is_empty() {
        out.push_str("\nLUCKIEST TEAMS (more wins than expected):\n");
        for r in a.over_performers.iter().take(TOP_PERFORMERS) {
            out.push_str(&performer_line(r));
        }
    }
    if !a.under_performers.is_empty() {
        out.push_str("\nUNLUCKIEST TEAMS (fewer wins than expected):\n");
        for r in a.under_performers.iter().take(TOP_PERFORMERS) {
            out.push_str(&performer_line(r));
        }
    }

    let highs: Vec<_> = a
        .weekly_highs
        .iter()
        .filter(|(week, _)| **week <= ctx.snapshot.current_week)
        .collect();
    if !highs.is_empty() {
        out.push_str("\nWEEKLY HIGH SCORES:\n");
        for (week, score) in highs {
            out.push_str(&format!(
                "   Week {week:2}: {} ({:.1} pts)\n",
                truncate(&score.team, 20),
                score.points
            ));
        }
    }
    out
}

fn nerdy_stats(ctx: &ReportContext<'_>) -> String {
    let s = &ctx.analytics.summary;
    let mut out = String::new();
    section_title(&mut out, "NERDY STATS");

    match s.league_average {
        Some(avg) => {
            out.push_str(&format!("League Average Score: {avg:.1} points\n"));
            out.push_str(&format!("Teams Above Average: {}\n", s.teams_above_average));
            out.push_str(&format!("Teams Below Average: {}\n", s.teams_below_average));
        }
        None => out.push_str("No completed games yet.\n"),
    }
    if let (Some(high), Some(low), Some(range)) = (s.league_high, s.league_low, s.score_range()) {
        out.push_str(&format!("League High Score: {high:.1}\n"));
        out.push_str(&format!("League Low Score: {low:.1}\n"));
        out.push_str(&format!("Score Range: {range:.1} points\n"));
    }
    out.push_str(&format!("Total Matchups Played: {}\n", s.total_matchups));
    out
}

fn bracket(ctx: &ReportContext<'_>) -> String {
    let lines = playoff_bracket(ctx.snapshot);
    if lines.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    section_title(&mut out, "PLAYOFF BRACKET");
    for line in &lines {
        out.push_str(&format!(
            "Round {} Match {}: {} vs {}",
            line.round,
            line.match_id,
            line.team_one.as_deref().unwrap_or("TBD"),
            line.team_two.as_deref().unwrap_or("TBD"),
        ));
        if let Some(winner) = &line.winner {
            out.push_str(&format!(" -> {winner}"));
        }
        match line.placement {
            Some(1) => out.push_str(" [championship]"),
            Some(p) => out.push_str(&format!(" [place {p}]")),
            None => {}
        }
        out.push('\n');
    }
    out
}

fn draft(ctx: &ReportContext<'_>) -> String {
    let picks = draft_recap(ctx.snapshot);
    if picks.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    section_title(&mut out, "DRAFT RECAP");
    for p in &picks {
        out.push_str(&format!(
            "R{:<2} #{:<3} {:<20} {} ({})\n",
            p.round,
            p.pick_no,
            truncate(&p.team, 20),
            p.player,
            display_position(&p.position),
        ));
    }
    out
}

/// One player line. Continuation lines of a bench group pass no label.
fn player_row(label: Option<&str>, player: &PlayerLine) -> String {
    let prefix = match label {
        Some(label) => format!("{label:<4} :: "),
        None => " ".repeat(8),
    };
    let name = if player.injured_reserve {
        format!("{} (IR)", truncate(&player.name, PLAYER_WIDTH))
    } else {
        truncate(&player.name, PLAYER_WIDTH)
    };
    format!(
        "{prefix}{name:<width$} ({:>3}) {:>5.1}\n",
        player.nfl_team,
        player.points,
        width = PLAYER_WIDTH,
    )
}

fn roster_block(sheet: &RosterSheet) -> String {
    let team = sheet.team.to_uppercase();
    let mut out = String::new();

    if sheet.is_empty() {
        out.push_str(&format!(">> {team}\n   (no players on roster)\n\n"));
        return out;
    }

    out.push_str(&format!(">> STARTING LINEUP :: {team}\n"));
    for entry in &sheet.starters {
        match &entry.player {
            Some(p) => out.push_str(&player_row(Some(&entry.slot), p)),
            None => out.push_str(&format!(
                "{:<4} :: {:<width$} (---) {:>5.1}\n",
                entry.slot,
                "[Empty]",
                0.0,
                width = PLAYER_WIDTH,
            )),
        }
    }
    out.push_str(&format!("TEAM PROJECTION: {:.1} pts\n", sheet.starter_points));

    if !sheet.bench.is_empty() {
        out.push_str(&format!("\n>> BENCH :: {team}\n"));
        for group in &sheet.bench {
            for (i, p) in group.players.iter().enumerate() {
                let label = (i == 0).then(|| display_position(&group.position));
                out.push_str(&player_row(label, p));
            }
        }
    }

    if !sheet.taxi.is_empty() {
        out.push_str(&format!("\n>> TAXI SQUAD :: {team}\n"));
        for p in &sheet.taxi {
            out.push_str(&player_row(Some(display_position(&p.position)), p));
        }
    }
    out.push('\n');
    out
}

fn rosters(ctx: &ReportContext<'_>) -> String {
    let sheets = roster_sheets(ctx.snapshot);
    let mut out = String::new();
    section_title(&mut out, "TEAM ROSTERS");
    for sheet in &sheets {
        out.push_str(&roster_block(sheet));
    }
    out
}

fn footer() -> String {
    let mut out = String::from("\n");
    out.push_str(&rule('='));
    out.push_str(&format!(
        "  Generated by sleeper-report v{}\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str(&rule('='));
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
