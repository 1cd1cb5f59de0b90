// Report assembly: snapshot -> standings and analytics -> text and HTML,
// plus writing the results to disk.

use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Local};
use tracing::info;

use sleeper_api::{fetch_snapshot, LeagueSource};
use sleeper_core::{compute_analytics, compute_standings, AnalyticsResult, LeagueSnapshot, TeamStanding};

use crate::config::{OutputSection, ReportConfig};
use crate::render::{render_html, render_text};

/// Everything the renderers read.
pub struct ReportContext<'a> {
    pub snapshot: &'a LeagueSnapshot,
    pub standings: Vec<TeamStanding>,
    pub analytics: AnalyticsResult,
    pub generated_at: DateTime<Local>,
}

impl<'a> ReportContext<'a> {
    pub fn new(snapshot: &'a LeagueSnapshot, generated_at: DateTime<Local>) -> Self {
        let standings = compute_standings(snapshot);
        let analytics = compute_analytics(snapshot, &standings);
        Self {
            snapshot,
            standings,
            analytics,
            generated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Report {
    pub league_name: String,
    pub text: String,
    pub html: String,
}

pub fn build_report(snapshot: &LeagueSnapshot, generated_at: DateTime<Local>) -> Report {
    let ctx = ReportContext::new(snapshot, generated_at);
    let league_name = snapshot.league.display_name().to_string();
    let text = render_text(&ctx);
    let html = render_html(&league_name, &text);
    info!(
        "Rendered report for '{}': {} teams, {} weeks with data",
        league_name,
        ctx.standings.len(),
        snapshot.matchups.len()
    );
    Report {
        league_name,
        text,
        html,
    }
}

/// Fetch `league_id` from `source` and render it.
pub async fn generate<S>(source: &S, league_id: &str, config: &ReportConfig) -> anyhow::Result<Report>
where
    S: LeagueSource + ?Sized,
{
    let snapshot = fetch_snapshot(source, league_id, config.api.max_week)
        .await
        .with_context(|| format!("failed to fetch league {league_id}"))?;
    Ok(build_report(&snapshot, Local::now()))
}

/// Write the text report and, when `with_html` is set, the HTML page.
/// Returns the paths written.
pub fn write_report(
    report: &Report,
    output: &OutputSection,
    with_html: bool,
) -> anyhow::Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    let text_path = PathBuf::from(&output.text_path);
    std::fs::write(&text_path, &report.text)
        .with_context(|| format!("failed to write {}", text_path.display()))?;
    info!("Text report saved to {}", text_path.display());
    written.push(text_path);

    if with_html {
        let html_path = PathBuf::from(&output.html_path);
        std::fs::write(&html_path, &report.html)
            .with_context(|| format!("failed to write {}", html_path.display()))?;
        info!("HTML report saved to {}", html_path.display());
        written.push(html_path);
    }

    Ok(written)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
