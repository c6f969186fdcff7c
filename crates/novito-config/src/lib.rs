//! # novito-config
//!
//! Layered configuration loading for the Novito dashboard client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`NOVITO_*` prefix, `__` as separator)
//! 2. Project-level `.novito/config.toml`
//! 3. User-level `~/.config/novito/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `NOVITO_API__BASE_URL` -> `api.base_url`,
//! `NOVITO_VIEWS__SYNC_POLICY` -> `views.sync_policy`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use novito_config::NovitoConfig;
//!
//! let config = NovitoConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.base_url);
//! ```

mod api;
mod error;
mod session;
mod views;
mod workspace;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use session::SessionConfig;
pub use views::{SyncPolicy, ViewsConfig};
pub use workspace::WorkspaceConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct NovitoConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub workspace: WorkspaceConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub views: ViewsConfig,
}

impl NovitoConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy`; use [`NovitoConfig::load_with_dotenv`] for
    /// `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so callers can layer extra providers (e.g. CLI flags) on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".novito/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("NOVITO_").split("__"))
    }

    /// Check cross-field constraints figment cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.workspace.validate()?;
        self.views.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("novito").join("config.toml"))
    }
}
