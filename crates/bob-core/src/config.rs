//! Configuration management for Buy-or-Bye.
//!
//! Loads configuration from ${BOB_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides `api_base_url`.
pub const API_BASE_URL_ENV: &str = "BOB_API_BASE_URL";

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for configuration and data directories.
    //!
    //! BOB_HOME resolution order:
    //! 1. BOB_HOME environment variable (if set)
    //! 2. ~/.config/bob (default)
    //! 3. ./.bob when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the home directory for config, credentials and logs.
    pub fn bob_home() -> PathBuf {
        if let Ok(home) = std::env::var("BOB_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".bob"),
            |h| h.join(".config").join("bob"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        bob_home().join("config.toml")
    }

    /// Returns the path to the stored session file.
    pub fn credentials_path() -> PathBuf {
        bob_home().join("credentials.json")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        bob_home().join("logs")
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing-subscriber` filter directive (e.g. "info", "bob_tui=debug").
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the backend that serves `/api/auth/login`.
    pub api_base_url: String,

    /// Persist the session to disk between runs.
    pub remember_session: bool,

    /// Logging settings.
    pub log: LogConfig,
}

impl Config {
    pub const DEFAULT_API_BASE_URL: &str = "https://buy-or-bye-backend.onrender.com";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Resolves the API base URL.
    ///
    /// Resolution order:
    /// 1. `BOB_API_BASE_URL` env var (if set and non-empty)
    /// 2. `api_base_url` from config (if non-empty)
    /// 3. Default: `https://buy-or-bye-backend.onrender.com`
    ///
    /// A trailing slash is stripped so paths can be appended directly.
    pub fn resolve_api_base_url(&self) -> Result<String> {
        let env_url = std::env::var(API_BASE_URL_ENV).ok();
        resolve_base_url(env_url.as_deref(), Some(&self.api_base_url))
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: Self::DEFAULT_API_BASE_URL.to_string(),
            remember_session: true,
            log: LogConfig::default(),
        }
    }
}

fn resolve_base_url(env_url: Option<&str>, config_url: Option<&str>) -> Result<String> {
    let candidate = [env_url, config_url]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .unwrap_or(Config::DEFAULT_API_BASE_URL);

    url::Url::parse(candidate).with_context(|| format!("Invalid API base URL: {candidate}"))?;
    Ok(candidate.trim_end_matches('/').to_string())
}
