//! Configuration management for assistlist.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::store::Store;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "assistlist";

/// Default store file name, relative to the working directory.
pub const STORE_FILE_NAME: &str = "educational_assistance_list.txt";

/// Default backup file name, relative to the working directory.
pub const BACKUP_FILE_NAME: &str = "educational_assistance_list.bak";

/// Default document file name, relative to the working directory.
pub const DOCUMENT_FILE_NAME: &str = "educational_assistance_list.docx";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `ASSISTLIST_`, sections split by `__`)
/// 2. TOML config file at `~/.config/assistlist/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Store file configuration.
    pub store: StoreConfig,
    /// Printable document configuration.
    pub document: DocumentConfig,
}

/// Store-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path to the store file.
    pub path: PathBuf,
    /// Path receiving a copy of the store file before each save.
    pub backup_path: PathBuf,
}

/// Document-related configuration.
///
/// Page size, margins and font size are fixed and not configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Path of the generated `.docx` file.
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(STORE_FILE_NAME),
            backup_path: PathBuf::from(BACKUP_FILE_NAME),
        }
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DOCUMENT_FILE_NAME),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("ASSISTLIST_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a path is empty or two roles share one path.
    pub fn validate(&self) -> Result<()> {
        for (name, path) in [
            ("store.path", &self.store.path),
            ("store.backup_path", &self.store.backup_path),
            ("document.path", &self.document.path),
        ] {
            if path.as_os_str().is_empty() {
                return Err(Error::ConfigValidation {
                    message: format!("{name} must not be empty"),
                });
            }
        }

        if self.store.path == self.store.backup_path {
            return Err(Error::ConfigValidation {
                message: format!(
                    "store.backup_path cannot be the store file itself ({})",
                    self.store.path.display()
                ),
            });
        }

        if self.document.path == self.store.path {
            return Err(Error::ConfigValidation {
                message: format!(
                    "document.path cannot be the store file itself ({})",
                    self.store.path.display()
                ),
            });
        }

        Ok(())
    }

    /// Store handle for the configured file and backup paths.
    #[must_use]
    pub fn store(&self) -> Store {
        Store::new(&self.store.path, &self.store.backup_path)
    }

    /// Path of the generated document.
    #[must_use]
    pub fn document_path(&self) -> &Path {
        &self.document.path
    }
}
