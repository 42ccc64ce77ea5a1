//! # bw-config
//!
//! Layered configuration loading for bewell using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`BEWELL_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `.bewell/config.toml`
//! 4. User-level `~/.config/bewell/config.toml`
//! 5. Built-in defaults
//!
//! Command-line flags are applied on top of the extracted config by the CLI.
//!
//! # Environment Variable Mapping
//!
//! Figment maps `BEWELL_REGISTRY__URL` -> `registry.url`, `BEWELL_SERVICE__NAME` -> `service.name`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use bw_config::BewellConfig;
//!
//! let config = BewellConfig::load_with_dotenv(None).expect("config");
//!
//! if config.registry.is_configured() {
//!     println!("registry: {}", config.registry.url);
//! }
//! ```

mod error;
mod lenient;
mod registry;
mod schema;
mod service;

pub use error::ConfigError;
pub use registry::RegistryConfig;
pub use schema::SchemaConfig;
pub use service::ServiceConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding the project-level config file.
pub const PROJECT_DIR: &str = ".bewell";

/// Prefix of environment variables read into the config.
pub const ENV_PREFIX: &str = "BEWELL_";

/// Keys whose env values are taken verbatim instead of parsed (`1.0` stays
/// `1.0`, not the float `1`).
const TEXT_KEYS: [&str; 6] = [
    "service.name",
    "service.url",
    "service.version",
    "schema.dir",
    "schema.file_extension",
    "registry.url",
];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BewellConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub schema: SchemaConfig,
    #[serde(default)]
    pub registry: RegistryConfig,
}

impl BewellConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// `explicit` is an additional TOML file layered above the project config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if `explicit` does not exist, or
    /// [`ConfigError::Figment`] if a source cannot be parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::MissingFile {
                    path: path.to_path_buf(),
                });
            }
        }
        Ok(Self::figment(explicit).extract()?)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`BewellConfig::load`].
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit --config file
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        let env = Env::prefixed(ENV_PREFIX).split("__");
        let verbatim: Vec<(&str, String)> = env
            .iter()
            .filter_map(|(key, value)| {
                TEXT_KEYS
                    .iter()
                    .find(|text_key| key.as_str().eq_ignore_ascii_case(text_key))
                    .map(|text_key| (*text_key, value))
            })
            .collect();

        figment = figment.merge(env);
        for (key, value) in verbatim {
            figment = figment.merge(Serialized::default(key, value));
        }
        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("bewell").join("config.toml"))
    }
}
