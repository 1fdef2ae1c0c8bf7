// src/logging.rs

//! Logging setup for `rmmkit` using `tracing` + `tracing-subscriber`.
//!
//! The filter comes from, in order:
//! 1. the `--log-level` flag, applied to every target;
//! 2. `RMMKIT_LOG`, which takes a bare level (`debug`) or `EnvFilter`
//!    directives (`rmmkit::exec=trace,warn`);
//! 3. `warn`.
//!
//! Logs go to stderr. The report lines of each command (`Workdir:`,
//! `Exit code:`, validation results) are printed directly and are not logs.

use anyhow::{Context, Result};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::LogLevel;

pub const LOG_ENV_VAR: &str = "RMMKIT_LOG";

const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

/// Install the global subscriber. Call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env_value = std::env::var(LOG_ENV_VAR).ok();
    let filter = build_filter(cli_level, env_value.as_deref());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("initialising tracing subscriber")
}

/// Filter for the given flag and `RMMKIT_LOG` value.
///
/// A value that does not parse as directives falls back to `warn`.
pub fn build_filter(cli_level: Option<LogLevel>, env_value: Option<&str>) -> EnvFilter {
    if let Some(level) = cli_level {
        return EnvFilter::default().add_directive(level_filter(level).into());
    }

    let directives = match env_value.map(str::trim) {
        Some("") | None => None,
        Some(value) if value.eq_ignore_ascii_case("warning") => Some("warn"),
        Some(value) => Some(value),
    };
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(DEFAULT_LEVEL.into()))
}

fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    }
}
