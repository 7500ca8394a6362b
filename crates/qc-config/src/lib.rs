//! # qc-config
//!
//! Layered configuration loading for qclist using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`QCLIST_*` prefix, `__` as separator)
//! 2. Project-level `.qclist/config.toml`
//! 3. User-level `~/.config/qclist/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `QCLIST_GENERAL__DEFAULT_LIMIT` -> `general.default_limit`,
//! `QCLIST_EXPORT__OUTPUT_DIR` -> `export.output_dir`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use qc_config::QcConfig;
//!
//! let config = QcConfig::load_with_dotenv().expect("config");
//! println!("exporting to {}", config.export.output_dir);
//! ```

mod board;
mod error;
mod export;
mod general;

pub use board::BoardConfig;
pub use error::ConfigError;
pub use export::ExportConfig;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project state directory, relative to the project root.
pub const STATE_DIR: &str = ".qclist";

const CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "QCLIST_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QcConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl QcConfig {
    /// Load configuration for the project in the current directory.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_for_project(Path::new("."))
    }

    /// Load configuration for the project rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a source fails to parse or a value is invalid.
    pub fn load_for_project(root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_for(root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// [`Self::load`] after reading `.env` into the environment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_for_project_with_dotenv(Path::new("."))
    }

    /// [`Self::load_for_project`] after reading `.env` into the environment.
    ///
    /// The project's own `.env` is preferred; otherwise the nearest `.env`
    /// above the working directory is used. Variables already set win.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load_for_project`].
    pub fn load_for_project_with_dotenv(root: &Path) -> Result<Self, ConfigError> {
        let project_env = root.join(".env");
        if project_env.is_file() {
            dotenvy::from_path(&project_env).ok();
        } else {
            dotenvy::dotenv().ok();
        }
        Self::load_for_project(root)
    }

    /// Build the figment provider chain for the current directory.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_for(Path::new("."))
    }

    /// Build the figment provider chain for the project rooted at `root`.
    #[must_use]
    pub fn figment_for(root: &Path) -> Figment {
        Self::global_config_path()
            .into_iter()
            .chain([root.join(STATE_DIR).join(CONFIG_FILE)])
            .filter(|path| path.is_file())
            .fold(
                Figment::from(Serialized::defaults(Self::default())),
                |figment, path| figment.merge(Toml::file(path)),
            )
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check values serde cannot.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        self.export.date_format()?;
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("qclist").join(CONFIG_FILE))
    }
}
