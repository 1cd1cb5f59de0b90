// sleeper-report entry point.
//
// Startup sequence:
// 1. Parse CLI arguments
// 2. Initialize tracing (log to file, stdout carries the report)
// 3. Load config, resolve the league id
// 4. Build the Sleeper client
// 5. Fetch the league snapshot and render the report
// 6. Write the report files, echo the text report

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use sleeper_api::SleeperClient;
use sleeper_report::cli::Cli;
use sleeper_report::config;
use sleeper_report::{generate, write_report};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. CLI
    let cli = Cli::parse();

    // 2. Tracing
    init_tracing()?;
    info!("sleeper-report starting up");

    // 3. Config
    let config = config::load_config(&cli.config_dir).context("failed to load configuration")?;
    let league_id = config.league_id(cli.league_id.as_deref())?;
    info!(
        "Config loaded: league={}, api={}, max_week={}",
        league_id, config.api.base_url, config.api.max_week
    );

    // 4. Client
    let client = SleeperClient::new(
        config.api.base_url.clone(),
        Duration::from_secs(config.api.timeout_secs),
    )
    .context("failed to build HTTP client")?;

    // 5. Fetch and render
    let report = match generate(&client, &league_id, &config).await {
        Ok(report) => report,
        Err(e) => {
            error!("Report generation failed: {e:#}");
            return Err(e);
        }
    };

    // 6. Output
    let written = write_report(&report, &config.output, !cli.no_html)
        .context("failed to write report files")?;

    if config.output.print_to_stdout && !cli.quiet {
        println!("{}", report.text);
    }
    for path in &written {
        eprintln!("Saved {}", path.display());
    }

    info!("sleeper-report finished");
    Ok(())
}

/// Initialize tracing to log to a file so stdout stays clean for the report.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    let log_file = sleeper_report::open_log_file(&log_dir)?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sleeper_report=info,sleeper_api=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
