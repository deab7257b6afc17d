//! Runtime configuration.
//!
//! # Responsibility
//! - Decode `portfolio.toml` into typed settings with defaults for every
//!   field.
//! - Derive per-store fetch settings.
//! - Resolve where preferences persist.
//!
//! # Invariants
//! - A config that passed `validate` always yields a loggable level and a
//!   positive fetch timeout.

use crate::logging::{default_log_level, normalize_level};
use crate::service::store::SimulatedFetch;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, source: std::io::Error },
    Parse(toml::de::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "failed to parse config: {err}"),
            Self::Invalid(reason) => write!(f, "invalid config: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Parse(value)
    }
}

/// Simulated network latency per store, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub projects_delay_ms: u64,
    pub blog_delay_ms: u64,
    pub profile_delay_ms: u64,
    /// Upper bound for every simulated fetch.
    pub timeout_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            projects_delay_ms: 800,
            blog_delay_ms: 500,
            profile_delay_ms: 800,
            timeout_ms: 5_000,
        }
    }
}

impl FetchConfig {
    pub fn projects(&self) -> SimulatedFetch {
        self.simulated(self.projects_delay_ms)
    }

    pub fn blog(&self) -> SimulatedFetch {
        self.simulated(self.blog_delay_ms)
    }

    pub fn profile(&self) -> SimulatedFetch {
        self.simulated(self.profile_delay_ms)
    }

    /// Same timeout, zero delay on every store.
    pub fn without_delay(&self) -> Self {
        Self {
            projects_delay_ms: 0,
            blog_delay_ms: 0,
            profile_delay_ms: 0,
            timeout_ms: self.timeout_ms,
        }
    }

    fn simulated(&self, delay_ms: u64) -> SimulatedFetch {
        SimulatedFetch::new(
            Duration::from_millis(delay_ms),
            Duration::from_millis(self.timeout_ms),
        )
    }
}

const DATABASE_FILE: &str = "preferences.sqlite3";

/// Root configuration, usually read from `portfolio.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub log_level: String,
    /// Absolute directory for rolling log files; logging stays off when unset.
    pub log_dir: Option<PathBuf>,
    /// SQLite file for preferences; see [`PortfolioConfig::preferences_path`].
    pub database_path: Option<PathBuf>,
    pub fetch: FetchConfig,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            database_path: None,
            fetch: FetchConfig::default(),
        }
    }
}

impl PortfolioConfig {
    /// Reads and validates a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Preference database to open: the configured path, else the default
    /// under the platform data directory.
    pub fn preferences_path(&self) -> Option<PathBuf> {
        self.database_path.clone().or_else(default_database_path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        normalize_level(&self.log_level).map_err(|err| ConfigError::Invalid(err.to_string()))?;
        if self.fetch.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "fetch.timeout_ms must be > 0".to_string(),
            ));
        }
        if let Some(dir) = &self.log_dir {
            if !dir.is_absolute() {
                return Err(ConfigError::Invalid(format!(
                    "log_dir must be absolute, got `{}`",
                    dir.display()
                )));
            }
        }
        Ok(())
    }
}

/// `$PORTFOLIO_DATA_DIR/preferences.sqlite3`, else
/// `<data dir>/portfolio/preferences.sqlite3`. `None` when the platform has
/// no data directory.
pub fn default_database_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("PORTFOLIO_DATA_DIR") {
        return Some(PathBuf::from(dir).join(DATABASE_FILE));
    }
    dirs::data_dir().map(|dir| dir.join("portfolio").join(DATABASE_FILE))
}
