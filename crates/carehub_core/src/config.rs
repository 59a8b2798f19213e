//! Runtime configuration with environment overrides.
//!
//! # Invariants
//! - Building a config never fails; invalid overrides keep the default.
//! - `data_dir`, when set, is absolute (required by logging bootstrap).

use crate::chat::assistant::DelayPolicy;
use crate::logging::default_log_level;
use log::warn;
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "CAREHUB_LOG_LEVEL";
pub const ENV_DATA_DIR: &str = "CAREHUB_DATA_DIR";
pub const ENV_CHAT_DELAY_MS: &str = "CAREHUB_CHAT_DELAY_MS";

const SETTINGS_DB_FILE_NAME: &str = "carehub_settings.sqlite3";
const LOG_DIR_NAME: &str = "logs";

/// Core runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub log_level: String,
    /// Root for the settings database and log files. `None` keeps
    /// everything in memory and disables file logging.
    pub data_dir: Option<PathBuf>,
    pub chat_delay: DelayPolicy,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            data_dir: None,
            chat_delay: DelayPolicy::default(),
        }
    }
}

impl CoreConfig {
    /// Builds a config from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|value| !value.trim().is_empty()) {
            config.log_level = level.trim().to_string();
        }

        if let Some(dir) = lookup(ENV_DATA_DIR) {
            let path = PathBuf::from(dir.trim());
            if path.is_absolute() {
                config.data_dir = Some(path);
            } else {
                warn!(
                    "event=config_load module=config status=error key={} reason=not_absolute",
                    ENV_DATA_DIR
                );
            }
        }

        if let Some(raw) = lookup(ENV_CHAT_DELAY_MS) {
            match raw.trim().parse::<u64>() {
                Ok(delay) => config.chat_delay = DelayPolicy::Fixed(delay),
                Err(_) => warn!(
                    "event=config_load module=config status=error key={} reason=not_a_number",
                    ENV_CHAT_DELAY_MS
                ),
            }
        }

        config
    }

    /// Settings database path under `data_dir`.
    pub fn settings_db_path(&self) -> Option<PathBuf> {
        self.data_dir
            .as_ref()
            .map(|dir| dir.join(SETTINGS_DB_FILE_NAME))
    }

    /// Log directory under `data_dir`.
    pub fn log_dir(&self) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|dir| dir.join(LOG_DIR_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::{CoreConfig, ENV_CHAT_DELAY_MS, ENV_DATA_DIR, ENV_LOG_LEVEL};
    use crate::chat::assistant::DelayPolicy;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = CoreConfig::from_lookup(|_| None);
        assert_eq!(config, CoreConfig::default());
        assert_eq!(config.settings_db_path(), None);
    }

    #[test]
    fn overrides_are_applied() {
        let data_dir = std::env::temp_dir().join("carehub-config-test");
        let data_dir_text = data_dir.to_string_lossy().to_string();
        let config = CoreConfig::from_lookup(lookup_from(&[
            (ENV_LOG_LEVEL, "warn"),
            (ENV_DATA_DIR, data_dir_text.as_str()),
            (ENV_CHAT_DELAY_MS, "250"),
        ]));

        assert_eq!(config.log_level, "warn");
        assert_eq!(config.chat_delay, DelayPolicy::Fixed(250));
        assert_eq!(
            config.settings_db_path(),
            Some(data_dir.join("carehub_settings.sqlite3"))
        );
    }

    #[test]
    fn invalid_overrides_keep_defaults() {
        let config = CoreConfig::from_lookup(lookup_from(&[
            (ENV_DATA_DIR, "relative/dir"),
            (ENV_CHAT_DELAY_MS, "soon"),
        ]));
        assert_eq!(config.data_dir, None);
        assert_eq!(config.chat_delay, DelayPolicy::default());
    }
}
