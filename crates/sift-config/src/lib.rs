//! # sift-config
//!
//! Layered configuration loading for docsift using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SIFT_*` prefix, `__` as separator)
//! 2. Project-level `.docsift/config.toml`
//! 3. User-level `~/.config/docsift/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `SIFT_BACKEND__BASE_URL` -> `backend.base_url`,
//! `SIFT_GENERAL__OUTPUT` -> `general.output`.
//!
//! # Usage
//!
//! ```no_run
//! use sift_config::SiftConfig;
//!
//! let config = SiftConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.backend.origin());
//! ```

mod backend;
mod error;
mod general;

pub use backend::BackendConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".docsift/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SiftConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl SiftConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or the resulting
    /// backend settings are invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.backend.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is fine.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests and callers can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SIFT_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("docsift").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SiftConfig::default();
        assert!(config.backend.validate().is_ok());
        assert_eq!(config.general.output, "json");
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: SiftConfig = SiftConfig::figment().extract()?;
            assert_eq!(config.backend.base_url, "http://localhost:8000");
            Ok(())
        });
    }
}
