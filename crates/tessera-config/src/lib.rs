//! # tessera-config
//!
//! Layered configuration loading for Tessera using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TESSERA_*` prefix, `__` as separator)
//! 2. Project-level `.tessera/config.toml`
//! 3. User-level `~/.config/tessera/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `TESSERA_LEADS__ENDPOINT` -> `leads.endpoint`,
//! `TESSERA_REGISTRY__DUPLICATE_POLICY` -> `registry.duplicate_policy`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use tessera_config::TesseraConfig;
//!
//! let config = TesseraConfig::load_with_dotenv().expect("config");
//! tessera_config::init_tracing(&config.logging).expect("tracing");
//!
//! if config.leads.is_configured() {
//!     println!("Leads go to {}", config.leads.endpoint);
//! }
//! ```

mod error;
mod leads;
mod logging;
mod registry;

pub use error::ConfigError;
pub use leads::LeadsConfig;
pub use logging::{LOG_ENV_VAR, LoggingConfig, init_tracing};
pub use registry::RegistryConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".tessera/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TesseraConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub leads: LeadsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TesseraConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does not read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source is malformed or a value has
    /// the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load `.env` into the process environment, then [`Self::load`].
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // a missing .env is fine
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can layer extra providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("TESSERA_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tessera").join("config.toml"))
    }
}
