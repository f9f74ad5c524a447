//! Application configuration
//!
//! Configuration is loaded from:
//! 1. Default values
//! 2. Config file (~/.config/golden-catalogue/config.toml)
//! 3. Environment variables (GOLDEN_* prefix)
//!
//! Environment variables take precedence over config file values.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::User;
use crate::storage::{JsonFileRepository, Repository, SqliteRepository, StorageResult};

/// Environment variable prefix
const ENV_PREFIX: &str = "GOLDEN";

/// Directory name used under the platform config and data dirs
const APP_DIR: &str = "golden-catalogue";

/// Which repository backend holds the collection slots
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON file per collection
    #[default]
    Json,
    /// A single SQLite database
    Sqlite,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Json => f.write_str("json"),
            StorageBackend::Sqlite => f.write_str("sqlite"),
        }
    }
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(StorageBackend::Json),
            "sqlite" => Ok(StorageBackend::Sqlite),
            other => bail!("Unknown storage backend '{}'. Use 'json' or 'sqlite'.", other),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory for data storage (slot files or SQLite db)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Storage backend
    #[serde(default)]
    pub backend: StorageBackend,

    /// Load the sample catalogue into an empty store
    #[serde(default = "default_true")]
    pub seed_sample_data: bool,

    /// Display name of the local user
    #[serde(default = "default_username")]
    pub username: String,

    /// Email of the local user
    #[serde(default = "default_email")]
    pub email: String,

    /// Log file path (when unset, logs go to stderr)
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            backend: StorageBackend::default(),
            seed_sample_data: true,
            username: default_username(),
            email: default_email(),
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from default location and environment
    ///
    /// Order of precedence (highest to lowest):
    /// 1. Environment variables (GOLDEN_DATA_DIR, GOLDEN_BACKEND, GOLDEN_SEED_SAMPLE_DATA)
    /// 2. Config file (~/.config/golden-catalogue/config.toml or GOLDEN_CONFIG)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_file_path())
    }

    /// Load configuration, preferring a path given on the command line
    pub fn load_with_cli_override(path: Option<&PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Self::load(),
        }
    }

    /// Load configuration from a specific path
    ///
    /// Environment variables are still applied as overrides.
    /// If the file doesn't exist, defaults are used.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let mut config = Self::read_file(path)?;
        config.apply_env_overrides();
        config.ensure_data_dir()?;
        Ok(config)
    }

    /// Read the config file as written, without environment overrides
    ///
    /// Returns defaults when the file does not exist. Use this before
    /// editing and saving the file.
    pub fn read_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from a TOML string (useful for testing)
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(toml_content).context("Failed to parse config TOML")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        // GOLDEN_DATA_DIR
        if let Ok(val) = std::env::var(format!("{}_DATA_DIR", ENV_PREFIX)) {
            self.data_dir = PathBuf::from(val);
        }

        // GOLDEN_BACKEND (invalid values are ignored)
        if let Ok(val) = std::env::var(format!("{}_BACKEND", ENV_PREFIX)) {
            if let Ok(backend) = val.parse() {
                self.backend = backend;
            }
        }

        // GOLDEN_SEED_SAMPLE_DATA
        if let Ok(val) = std::env::var(format!("{}_SEED_SAMPLE_DATA", ENV_PREFIX)) {
            self.seed_sample_data = val.eq_ignore_ascii_case("true") || val == "1";
        }
    }

    /// Ensure data directory exists
    fn ensure_data_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            std::fs::create_dir_all(&self.data_dir)
                .with_context(|| format!("Failed to create data directory: {:?}", self.data_dir))?;
        }
        Ok(())
    }

    /// Save configuration to the default file
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::config_file_path())
    }

    /// Save configuration to a specific file
    pub fn save_to_path(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;
        Ok(())
    }

    /// Get the config file path
    ///
    /// Can be overridden with GOLDEN_CONFIG environment variable
    pub fn config_file_path() -> PathBuf {
        if let Ok(path) = std::env::var(format!("{}_CONFIG", ENV_PREFIX)) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.toml")
    }

    /// Get the directory holding JSON slot files
    pub fn slots_dir(&self) -> PathBuf {
        self.data_dir.join("slots")
    }

    /// Get the path to the SQLite database
    pub fn sqlite_path(&self) -> PathBuf {
        self.data_dir.join("catalogue.db")
    }

    /// The local user described by this configuration
    pub fn local_user(&self) -> User {
        User::local(self.username.clone(), self.email.clone())
    }

    /// Open the repository for the configured backend
    pub fn open_repository(&self) -> StorageResult<Box<dyn Repository>> {
        Ok(match self.backend {
            StorageBackend::Json => Box::new(JsonFileRepository::open(self.slots_dir())?),
            StorageBackend::Sqlite => Box::new(SqliteRepository::open(&self.sqlite_path())?),
        })
    }
}

/// Get the default data directory
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

fn default_true() -> bool {
    true
}

fn default_username() -> String {
    "fanfic_reader".to_string()
}

fn default_email() -> String {
    "reader@example.com".to_string()
}
