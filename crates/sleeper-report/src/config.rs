// Configuration loading and parsing (config/report.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use sleeper_core::snapshot::MAX_SEASON_WEEK;

/// Environment variable consulted for the league id when no flag is given.
pub const LEAGUE_ID_ENV: &str = "LEAGUE_ID";

const CONFIG_FILE: &str = "report.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },

    #[error(
        "no league id provided: pass --league-id, set the LEAGUE_ID environment \
         variable (e.g. export LEAGUE_ID=123456789012345678), or set [league] id \
         in config/report.toml"
    )]
    MissingLeagueId,
}

// ---------------------------------------------------------------------------
// report.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub league: LeagueSection,
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeagueSection {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Cap on the weeks whose matchups are fetched.
    pub max_week: u32,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: sleeper_api::client::DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            max_week: MAX_SEASON_WEEK,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub text_path: String,
    pub html_path: String,
    pub print_to_stdout: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            text_path: "sleeper_report.txt".into(),
            html_path: "sleeper_report.html".into(),
            print_to_stdout: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/report.toml` relative to `base_dir`.
///
/// Does not copy defaults. Prefer `load_config()`.
pub fn load_config_from(base_dir: &Path) -> Result<ReportConfig, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    let config: ReportConfig = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    validate(&config)?;

    Ok(config)
}

/// Copy `defaults/report.toml` to `config/report.toml` unless the user
/// already has one. Returns the path written, if any.
pub fn install_default_config(base_dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let source = base_dir.join("defaults").join(CONFIG_FILE);
    let target = base_dir.join("config").join(CONFIG_FILE);
    if target.exists() || !source.is_file() {
        return Ok(None);
    }

    if let Some(dir) = target.parent() {
        std::fs::create_dir_all(dir).map_err(|e| copy_error("create", dir, e))?;
    }
    std::fs::copy(&source, &target).map_err(|e| copy_error("copy defaults to", &target, e))?;
    info!("Installed default config at {}", target.display());
    Ok(Some(target))
}

/// Load `base_dir/config/report.toml`, installing it from `defaults/` first
/// when missing. With neither file present the built-in defaults are used,
/// so the tool runs from any directory given a league id.
pub fn load_config(base_dir: &Path) -> Result<ReportConfig, ConfigError> {
    install_default_config(base_dir)?;
    if !base_dir.join("config").join(CONFIG_FILE).exists() {
        warn!(
            "No config/{CONFIG_FILE} under {}; using built-in defaults",
            base_dir.display()
        );
        return Ok(ReportConfig::default());
    }
    load_config_from(base_dir)
}

/// Pick the league id: CLI flag, then environment, then config file.
/// Blank values are ignored at every level.
pub fn resolve_league_id(
    cli: Option<&str>,
    env: Option<&str>,
    file: Option<&str>,
) -> Result<String, ConfigError> {
    [cli, env, file]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|id| !id.is_empty())
        .map(str::to_string)
        .ok_or(ConfigError::MissingLeagueId)
}

impl ReportConfig {
    /// League id from `cli`, `$LEAGUE_ID`, or `[league] id`, in that order.
    pub fn league_id(&self, cli: Option<&str>) -> Result<String, ConfigError> {
        let env = std::env::var(LEAGUE_ID_ENV).ok();
        resolve_league_id(cli, env.as_deref(), self.league.id.as_deref())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn copy_error(action: &str, path: &Path, e: std::io::Error) -> ConfigError {
    ConfigError::DefaultsCopyError {
        message: format!("failed to {action} {}: {e}", path.display()),
    }
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &ReportConfig) -> Result<(), ConfigError> {
    if config.api.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "api.base_url".into(),
            message: "must not be empty".into(),
        });
    }

    if config.api.timeout_secs == 0 {
        return Err(ConfigError::ValidationError {
            field: "api.timeout_secs".into(),
            message: "must be greater than 0".into(),
        });
    }

    let max_week = config.api.max_week;
    if !(1..=MAX_SEASON_WEEK).contains(&max_week) {
        return Err(ConfigError::ValidationError {
            field: "api.max_week".into(),
            message: format!("must be between 1 and {MAX_SEASON_WEEK}, got {max_week}"),
        });
    }

    let path_fields: &[(&str, &str)] = &[
        ("output.text_path", &config.output.text_path),
        ("output.html_path", &config.output.html_path),
    ];
    for (name, val) in path_fields {
        if val.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: "must not be empty".into(),
            });
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
