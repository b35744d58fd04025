//! # Configuration State
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`CONTACTS_*`, plus `RUST_LOG` for tracing)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use contacts_db::{DbConfig, DEFAULT_DB_FILE_NAME};

/// Default tracing filter when neither `RUST_LOG` nor `CONTACTS_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,contacts=debug,sqlx=warn";

const ENV_DB_PATH: &str = "CONTACTS_DB_PATH";
const ENV_LOG: &str = "CONTACTS_LOG";
const ENV_MAX_CONNECTIONS: &str = "CONTACTS_DB_MAX_CONNECTIONS";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// SQLite database file.
    pub database_path: PathBuf,

    /// Upper bound on pooled connections.
    pub max_connections: u32,

    /// `tracing_subscriber::EnvFilter` directives.
    pub log_filter: String,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            database_path: default_database_path(),
            max_connections: DbConfig::new(DEFAULT_DB_FILE_NAME).max_connections,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `CONTACTS_DB_PATH`: Override the database file
    /// - `CONTACTS_LOG`: Override the tracing filter
    /// - `CONTACTS_DB_MAX_CONNECTIONS`: Override pool size
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = ConfigState::default();

        if let Some(path) = lookup(ENV_DB_PATH).filter(|p| !p.trim().is_empty()) {
            config.database_path = PathBuf::from(path);
        }

        if let Some(filter) = lookup(ENV_LOG).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        if let Some(raw) = lookup(ENV_MAX_CONNECTIONS) {
            config.max_connections = raw
                .trim()
                .parse()
                .ok()
                .filter(|n: &u32| *n > 0)
                .ok_or_else(|| ConfigError::InvalidValue(ENV_MAX_CONNECTIONS.to_string()))?;
        }

        Ok(config)
    }

    /// Database configuration derived from these settings.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path).max_connections(self.max_connections)
    }
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

/// Determines the database file path based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/app.practice.mycontacts/contacts_database.db`
/// - **Windows**: `%APPDATA%\practice\mycontacts\data\contacts_database.db`
/// - **Linux**: `~/.local/share/mycontacts/contacts_database.db`
///
/// Falls back to the working directory when no home directory is known.
pub fn default_database_path() -> PathBuf {
    ProjectDirs::from("app", "practice", "mycontacts")
        .map(|dirs| dirs.data_dir().join(DEFAULT_DB_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = ConfigState::from_lookup(|_| None).unwrap();

        assert!(config.database_path.ends_with(DEFAULT_DB_FILE_NAME));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(config.max_connections, 4);
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            (ENV_DB_PATH, "/tmp/contacts/test.db"),
            (ENV_LOG, "warn"),
            (ENV_MAX_CONNECTIONS, " 2 "),
        ]))
        .unwrap();

        assert_eq!(config.database_path, PathBuf::from("/tmp/contacts/test.db"));
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.max_connections, 2);

        let db = config.db_config();
        assert_eq!(db.database_path, PathBuf::from("/tmp/contacts/test.db"));
        assert_eq!(db.max_connections, 2);
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config =
            ConfigState::from_lookup(lookup_from(&[(ENV_DB_PATH, "  "), (ENV_LOG, "")])).unwrap();

        assert!(config.database_path.ends_with(DEFAULT_DB_FILE_NAME));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_invalid_max_connections() {
        for raw in ["zero", "0", "-1"] {
            let err = ConfigState::from_lookup(lookup_from(&[(ENV_MAX_CONNECTIONS, raw)]))
                .unwrap_err();
            assert_eq!(
                err.to_string(),
                "Invalid value for CONTACTS_DB_MAX_CONNECTIONS"
            );
        }
    }
}
