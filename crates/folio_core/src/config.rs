//! Runtime configuration loaded from environment variables.
//!
//! # Responsibility
//! - Resolve storage path, log level/directory and environment profile.
//! - Log every default that had to be applied.
//!
//! # Invariants
//! - Loading never panics; invalid values surface as `ConfigError`.
//! - `log_dir`, when set, is absolute.

use crate::logging::normalize_level;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_DB_PATH: &str = "FOLIO_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "FOLIO_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "FOLIO_LOG_DIR";
pub const ENV_PROFILE: &str = "FOLIO_ENV";

const DEFAULT_DB_PATH: &str = "portfolio.db";

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub key: &'static str,
    pub message: String,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: {}", self.key, self.message)
    }
}

impl Error for ConfigError {}

/// Deployment profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Development,
    Production,
    Testing,
}

impl Profile {
    /// Log level used when none is configured explicitly.
    pub fn default_log_level(self) -> &'static str {
        match self {
            Self::Development | Self::Testing => "debug",
            Self::Production => "warn",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        }
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            "testing" | "test" => Ok(Self::Testing),
            other => Err(format!(
                "unsupported profile `{other}`; expected development|production|testing"
            )),
        }
    }
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolioConfig {
    pub profile: Profile,
    /// SQLite file for contact messages and preferences.
    pub db_path: PathBuf,
    pub log_level: &'static str,
    /// Rolling log directory. File logging is off when `None`.
    pub log_dir: Option<PathBuf>,
}

impl FolioConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let profile = match var(ENV_PROFILE) {
            Some(raw) => raw.parse::<Profile>().map_err(|message| ConfigError {
                key: ENV_PROFILE,
                message,
            })?,
            None => {
                info!("{ENV_PROFILE} not set, using default: development");
                Profile::Development
            }
        };

        let db_path = var(ENV_DB_PATH).map(PathBuf::from).unwrap_or_else(|| {
            info!("{ENV_DB_PATH} not set, using default: {DEFAULT_DB_PATH}");
            PathBuf::from(DEFAULT_DB_PATH)
        });

        let log_level = match var(ENV_LOG_LEVEL) {
            Some(raw) => normalize_level(&raw).map_err(|message| ConfigError {
                key: ENV_LOG_LEVEL,
                message,
            })?,
            None => profile.default_log_level(),
        };

        let log_dir = match var(ENV_LOG_DIR) {
            Some(raw) => {
                let path = PathBuf::from(raw.trim());
                if !path.is_absolute() {
                    return Err(ConfigError {
                        key: ENV_LOG_DIR,
                        message: format!("must be an absolute path, got `{}`", path.display()),
                    });
                }
                Some(path)
            }
            None => None,
        };

        Ok(Self {
            profile,
            db_path,
            log_level,
            log_dir,
        })
    }
}
