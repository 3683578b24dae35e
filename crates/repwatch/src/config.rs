//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use repwatch_core::constants::DEFAULT_SERVER_URL;
use repwatch_core::http::parse_base_url;
use repwatch_core::ConfigError;

/// repwatch: live client for an exercise repetition tracker.
#[derive(Parser, Debug)]
#[command(name = "repwatch", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Tracker server base URL.
    #[arg(long, default_value = DEFAULT_SERVER_URL, env = "REPWATCH_SERVER")]
    pub server: String,

    /// Polling period (e.g., "150ms", "1s").
    #[arg(long, default_value = "150ms", env = "REPWATCH_INTERVAL")]
    pub interval: String,

    /// Per-request timeout (e.g., "30s", "1m").
    #[arg(long, default_value = "30s", env = "REPWATCH_TIMEOUT")]
    pub timeout: String,

    /// Launch interactive TUI.
    #[arg(long, conflicts_with = "finish")]
    pub tui: bool,

    /// Finish the workout, print the report and exit.
    #[arg(long)]
    pub finish: bool,

    /// Fetch the workout report when watching stops.
    #[arg(long)]
    pub report_on_exit: bool,

    /// Stop watching after this many status outcomes (0 = unlimited).
    #[arg(long, default_value = "0")]
    pub max_ticks: u64,

    /// Also write the workout report to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Quiet mode (only output rep counts).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose diagnostics.
    #[arg(short, long)]
    pub verbose: bool,

    /// Write diagnostics to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// Validated runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Normalised server base URL.
    pub server: String,
    /// Polling period, never zero.
    pub interval: Duration,
    /// Per-request timeout, never zero.
    pub timeout: Duration,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments, returning clap's error instead of exiting.
    pub fn try_parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }

    /// Validate the server URL and durations.
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        Ok(Settings {
            server: parse_base_url(&self.server)?,
            interval: parse_positive_duration(&self.interval)?,
            timeout: parse_positive_duration(&self.timeout)?,
        })
    }
}

fn parse_positive_duration(s: &str) -> Result<Duration, ConfigError> {
    match parse_duration(s) {
        Some(d) if !d.is_zero() => Ok(d),
        _ => Err(ConfigError::InvalidDuration(s.to_string())),
    }
}

/// Parse a duration string like "150ms", "30s", "5m", "1h" or bare seconds.
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(60)?))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(3600)?))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_secs(n))
    }
}
