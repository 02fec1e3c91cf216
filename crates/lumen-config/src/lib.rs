//! # lumen-config
//!
//! Layered configuration loading for Lumen using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LUMEN_*` prefix, `__` as separator)
//! 2. Project-level `.lumen/config.toml`
//! 3. User-level `~/.config/lumen/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LUMEN_INFERENCE__API_KEY` -> `inference.api_key`,
//! `LUMEN_HISTORY__URL` -> `history.url`, etc. The `__` (double underscore)
//! separates nested config sections.
//!
//! Configuration is read once at start-up and passed by reference from then on;
//! nothing in Lumen reloads or mutates it.
//!
//! # Usage
//!
//! ```no_run
//! use lumen_config::LumenConfig;
//!
//! let config = LumenConfig::load().expect("config");
//!
//! if config.history.is_configured() {
//!     println!("History store: {}", config.history.url);
//! }
//! ```

mod error;
mod history;
mod inference;
mod models;

pub use error::ConfigError;
pub use history::HistoryConfig;
pub use inference::{DEFAULT_BASE_URL, InferenceConfig};
pub use models::ModelsConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LumenConfig {
    #[serde(default)]
    pub inference: InferenceConfig,
    #[serde(default)]
    pub models: ModelsConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

impl LumenConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// `.env` files are not read here; the binary loads them before calling this.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".lumen/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("LUMEN_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lumen").join("config.toml"))
    }
}
