// Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "sleeper-report")]
#[command(about = "Standings, power rankings, and league analytics for a Sleeper fantasy football league")]
#[command(version)]
pub struct Cli {
    /// Sleeper league id (overrides LEAGUE_ID and the config file)
    #[arg(short, long)]
    pub league_id: Option<String>,

    /// Directory holding config/ and defaults/
    #[arg(short, long = "config", default_value = ".")]
    pub config_dir: PathBuf,

    /// Skip the HTML report
    #[arg(long)]
    pub no_html: bool,

    /// Do not print the text report to stdout
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["sleeper-report"]);
        assert!(cli.league_id.is_none());
        assert_eq!(cli.config_dir, PathBuf::from("."));
        assert!(!cli.no_html);
        assert!(!cli.quiet);
    }

    #[test]
    fn short_and_long_flags() {
        let cli = Cli::parse_from(["sleeper-report", "-l", "1234", "-c", "/tmp/sr", "--no-html", "--quiet"]);
        assert_eq!(cli.league_id.as_deref(), Some("1234"));
        assert_eq!(cli.config_dir, PathBuf::from("/tmp/sr"));
        assert!(cli.no_html);
        assert!(cli.quiet);

        let cli = Cli::parse_from(["sleeper-report", "--league-id", "99", "--config", "here"]);
        assert_eq!(cli.league_id.as_deref(), Some("99"));
        assert_eq!(cli.config_dir, PathBuf::from("here"));
    }

    #[test]
    fn definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
