//! Process configuration.
//!
//! # Responsibility
//! - Resolve store, listener and logging settings from `DUHIGURE_*`
//!   environment variables.
//! - Provide documented defaults so a bare `duhigure` run works locally.
//!
//! # Invariants
//! - Blank variables behave exactly like unset ones.
//! - `default_sector` is never empty.

use crate::logging::default_log_level;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_SECTOR: &str = "Kibungo";
pub const DEFAULT_DB_FILE_NAME: &str = "family_members.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

pub const ENV_DB_PATH: &str = "DUHIGURE_DB_PATH";
pub const ENV_DEFAULT_SECTOR: &str = "DUHIGURE_DEFAULT_SECTOR";
pub const ENV_BIND: &str = "DUHIGURE_BIND";
pub const ENV_LOG_LEVEL: &str = "DUHIGURE_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "DUHIGURE_LOG_DIR";

#[derive(Debug)]
pub enum ConfigError {
    InvalidBindAddr { value: String, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBindAddr { value, reason } => {
                write!(f, "invalid {ENV_BIND} value `{value}`: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Resolved settings for one server process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite database file.
    pub db_path: PathBuf,
    /// Sector assigned to families created or updated without one.
    pub default_sector: String,
    /// HTTP listen address.
    pub bind_addr: SocketAddr,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute log directory; `None` logs to stderr.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            default_sector: DEFAULT_SECTOR.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();

        if let Some(path) = read(ENV_DB_PATH) {
            config.db_path = PathBuf::from(path);
        }
        if let Some(sector) = read(ENV_DEFAULT_SECTOR) {
            config.default_sector = sector;
        }
        if let Some(bind) = read(ENV_BIND) {
            config.bind_addr = bind
                .parse()
                .map_err(|err: std::net::AddrParseError| ConfigError::InvalidBindAddr {
                    value: bind.clone(),
                    reason: err.to_string(),
                })?;
        }
        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = level;
        }
        config.log_dir = read(ENV_LOG_DIR).map(PathBuf::from);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError, DEFAULT_BIND_ADDR, DEFAULT_SECTOR};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.default_sector, DEFAULT_SECTOR);
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DUHIGURE_DB_PATH", "/var/lib/duhigure/data.db"),
            ("DUHIGURE_DEFAULT_SECTOR", "Bumbogo"),
            ("DUHIGURE_BIND", "0.0.0.0:8080"),
            ("DUHIGURE_LOG_LEVEL", "warn"),
            ("DUHIGURE_LOG_DIR", "/var/log/duhigure"),
        ]))
        .unwrap();

        assert_eq!(config.db_path, PathBuf::from("/var/lib/duhigure/data.db"));
        assert_eq!(config.default_sector, "Bumbogo");
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/duhigure")));
    }

    #[test]
    fn blank_values_are_treated_as_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DUHIGURE_DEFAULT_SECTOR", "   "),
            ("DUHIGURE_LOG_DIR", ""),
        ]))
        .unwrap();
        assert_eq!(config.default_sector, DEFAULT_SECTOR);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn invalid_bind_address_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("DUHIGURE_BIND", "localhost")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { ref value, .. } if value == "localhost"));
    }
}
