//! Runtime configuration for hosts embedding the CRM core.
//!
//! Values come from defaults overridden by `TIGERCRM_*` environment
//! variables. Hosts may also build `CoreConfig` directly.

use crate::logging::{default_log_level, normalize_level};
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "TIGERCRM_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "TIGERCRM_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "TIGERCRM_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "tigercrm.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// SQLite file backing the key/value storage.
    pub db_path: PathBuf,
    /// Normalized `log` level name.
    pub log_level: &'static str,
    /// Absolute log directory. File logging is off when `None`.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads overrides through `lookup`; blank values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(path) = read(ENV_DB_PATH) {
            config.db_path = PathBuf::from(path);
        }
        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = normalize_level(&level)?;
        }
        if let Some(dir) = read(ENV_LOG_DIR) {
            config.log_dir = Some(PathBuf::from(dir));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::{CoreConfig, ENV_DB_PATH, ENV_LOG_DIR, ENV_LOG_LEVEL};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let config = CoreConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CoreConfig::default());
        assert_eq!(config.db_path, PathBuf::from("tigercrm.sqlite3"));
    }

    #[test]
    fn overrides_are_trimmed_and_normalized() {
        let config = CoreConfig::from_lookup(lookup(&[
            (ENV_DB_PATH, " /tmp/crm.db "),
            (ENV_LOG_LEVEL, "WARNING"),
            (ENV_LOG_DIR, "/tmp/crm-logs"),
        ]))
        .unwrap();

        assert_eq!(config.db_path, PathBuf::from("/tmp/crm.db"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/crm-logs")));
    }

    #[test]
    fn unknown_level_is_rejected() {
        let err = CoreConfig::from_lookup(lookup(&[(ENV_LOG_LEVEL, "loud")])).unwrap_err();
        assert!(err.contains("unsupported log level"));
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = CoreConfig::from_lookup(lookup(&[(ENV_LOG_DIR, "   ")])).unwrap();
        assert_eq!(config.log_dir, None);
    }
}
