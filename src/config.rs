//! Runtime Configuration
//!
//! Read from environment variables at startup. Invalid values are fatal.

use thiserror::Error;

use crate::proof::commitment::{KEY_LEN, MAX_KEY_LEN, MIN_KEY_LEN};

/// Secret key length in bytes.
pub const ENV_KEY_BYTES: &str = "FAIR_RPS_KEY_BYTES";

/// Log filter directive (`tracing_subscriber::EnvFilter` syntax).
pub const ENV_LOG: &str = "FAIR_RPS_LOG";

/// Default log filter. Logs go to stderr; `warn` keeps the game screen clean.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Value is not a number.
    #[error("{var} must be a number, got {value:?}")]
    NotANumber {
        /// Variable name.
        var: &'static str,
        /// Raw value.
        value: String,
    },

    /// Key length outside the accepted range.
    #[error("FAIR_RPS_KEY_BYTES must be between 32 and 64, got {0}")]
    KeyLengthOutOfRange(usize),
}

/// Game configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Commitment key length in bytes.
    pub key_len: usize,
    /// Log filter directive.
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            key_len: KEY_LEN,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl GameConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create config from any variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_KEY_BYTES) {
            let key_len: usize = raw.trim().parse().map_err(|_| ConfigError::NotANumber {
                var: ENV_KEY_BYTES,
                value: raw.clone(),
            })?;
            if !(MIN_KEY_LEN..=MAX_KEY_LEN).contains(&key_len) {
                return Err(ConfigError::KeyLengthOutOfRange(key_len));
            }
            config.key_len = key_len;
        }

        if let Some(filter) = lookup(ENV_LOG).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: BTreeMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.key_len, 32);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_overrides() {
        let config = GameConfig::from_lookup(lookup(&[
            (ENV_KEY_BYTES, "64"),
            (ENV_LOG, "fair_rps=debug"),
        ]))
        .unwrap();
        assert_eq!(config.key_len, 64);
        assert_eq!(config.log_filter, "fair_rps=debug");
    }

    #[test]
    fn test_rejects_short_key() {
        assert_eq!(
            GameConfig::from_lookup(lookup(&[(ENV_KEY_BYTES, "16")])),
            Err(ConfigError::KeyLengthOutOfRange(16))
        );
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            GameConfig::from_lookup(lookup(&[(ENV_KEY_BYTES, "lots")])),
            Err(ConfigError::NotANumber { .. })
        ));
    }

    #[test]
    fn test_blank_log_filter_keeps_default() {
        let config = GameConfig::from_lookup(lookup(&[(ENV_LOG, "  ")])).unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }
}
