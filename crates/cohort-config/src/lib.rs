//! # cohort-config
//!
//! Layered configuration loading for Cohort using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`COHORT_*` prefix, `__` as separator)
//! 2. Project-level `.cohort/config.toml`
//! 3. User-level `~/.config/cohort/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `COHORT_BACKEND__URL` -> `backend.url`, `COHORT_TABLES__GROUPS` -> `tables.groups`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use cohort_config::CohortConfig;
//!
//! let config = CohortConfig::load_with_dotenv().expect("config");
//!
//! if config.backend.is_configured() {
//!     println!("Data API: {}", config.backend.rest_url());
//! }
//! ```

mod backend;
mod error;
mod general;
mod tables;

pub use backend::BackendConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use tables::TablesConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CohortConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub tables: TablesConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl CohortConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.backend.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".cohort/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("COHORT_").split("__"))
    }

    /// Fail with [`ConfigError::NotConfigured`] unless the backend is usable.
    pub fn require_backend(&self) -> Result<&BackendConfig, ConfigError> {
        if self.backend.is_configured() {
            Ok(&self.backend)
        } else {
            Err(ConfigError::NotConfigured {
                section: "backend".into(),
            })
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cohort").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = CohortConfig::default();
        assert!(!config.backend.is_configured());
        assert_eq!(config.tables.groups, "grupos");
        assert_eq!(config.general.retries, 0);
    }

    #[test]
    fn require_backend_fails_when_unset() {
        let config = CohortConfig::default();
        let err = config.require_backend().unwrap_err();
        assert!(matches!(err, ConfigError::NotConfigured { ref section } if section == "backend"));
    }
}
