//! Tracing setup.
//!
//! The page owns the terminal, so logs go to `<base>/logs/bob.log` through a
//! non-blocking writer. Keep the returned guard alive until exit or buffered
//! lines are lost.

use std::path::Path;

use anyhow::{Context, Result};
pub use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{LogConfig, paths};

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "BOB_LOG";

pub const LOG_FILE_NAME: &str = "bob.log";

/// Installs the global subscriber writing to the default logs directory.
pub fn init(config: &LogConfig) -> Result<WorkerGuard> {
    init_in(&paths::logs_dir(), config)
}

/// Installs the global subscriber writing to `dir/bob.log`.
pub fn init_in(dir: &Path, config: &LogConfig) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(config)?)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;

    Ok(guard)
}

fn build_filter(config: &LogConfig) -> Result<EnvFilter> {
    match std::env::var(LOG_ENV) {
        Ok(directive) if !directive.trim().is_empty() => EnvFilter::try_new(directive.trim())
            .with_context(|| format!("Invalid {LOG_ENV} filter: {directive}")),
        _ => EnvFilter::try_new(&config.filter)
            .with_context(|| format!("Invalid log filter in config: {}", config.filter)),
    }
}
