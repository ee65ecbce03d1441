//! Logging configuration and subscriber setup.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;

/// Env var holding a full `EnvFilter` directive; beats `logging.level`.
pub const LOG_ENV_VAR: &str = "TESSERA_LOG";

fn default_level() -> String {
    String::from("warn")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter directive used when `TESSERA_LOG` is unset (e.g. `info`,
    /// `tessera_registry=debug`).
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    /// The filter `init_tracing` installs.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `level` is not a valid directive.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) {
            return Ok(filter);
        }
        EnvFilter::try_new(&self.level).map_err(|error| ConfigError::InvalidValue {
            field: "logging.level".into(),
            reason: error.to_string(),
        })
    }
}

/// Install the global `fmt` subscriber.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for a bad level and
/// `ConfigError::Logging` if a subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), ConfigError> {
    let filter = config.env_filter()?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| ConfigError::Logging(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_warn() {
        assert_eq!(LoggingConfig::default().level, "warn");
    }

    #[test]
    fn bad_level_is_invalid_value() {
        let config = LoggingConfig {
            level: "tessera=verbose".into(),
        };
        // only meaningful when the override is absent
        if std::env::var_os(LOG_ENV_VAR).is_none() {
            assert!(matches!(
                config.env_filter(),
                Err(ConfigError::InvalidValue { field, .. }) if field == "logging.level"
            ));
        }
    }
}
