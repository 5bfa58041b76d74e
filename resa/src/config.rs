//! Configuration system for resa.
//!
//! Configuration is merged from multiple sources with the following
//! precedence (highest to lowest):
//!
//! 1. Programmatic overrides (via [`ConfigBuilder::with_config`])
//! 2. Environment variables (`RESA_*`)
//! 3. User config file (`<data-dir>/config.yaml`, default `~/.resa`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! Basic usage with defaults:
//!
//! ```no_run
//! use resa::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("audit log: {}", config.audit_log_or_default().display());
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use std::path::PathBuf;
//! use resa::{Config, ConfigBuilder};
//!
//! let custom = Config {
//!     audit_log: Some(PathBuf::from("/tmp/audit.log")),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.audit_log, Some(PathBuf::from("/tmp/audit.log")));
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Name of the user configuration file inside the data directory.
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Name of the audit log file inside the data directory.
const AUDIT_LOG_FILE_NAME: &str = "reservations.log";

/// Complete configuration structure.
///
/// Every field is optional; unset fields fall back to the next source in the
/// precedence chain and finally to built-in defaults.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path of the append-only audit log.
    pub audit_log: Option<PathBuf>,

    /// Logging mode ("quiet", "normal", or "verbose").
    pub log_mode: Option<String>,
}

impl Config {
    /// Returns the configured audit log path, or the default location.
    #[must_use]
    pub fn audit_log_or_default(&self) -> PathBuf {
        self.audit_log
            .clone()
            .unwrap_or_else(default_audit_log_path)
    }

    /// Merges `other` into `self`, with `other` taking precedence.
    fn merge(&mut self, other: Config) {
        if other.audit_log.is_some() {
            self.audit_log = other.audit_log;
        }
        if other.log_mode.is_some() {
            self.log_mode = other.log_mode;
        }
    }
}

/// Returns the default data directory: `~/.resa`.
///
/// Falls back to the current directory when no home directory can be
/// determined.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    home::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".resa")
}

/// Returns the default audit log path: `~/.resa/reservations.log`.
#[must_use]
pub fn default_audit_log_path() -> PathBuf {
    default_data_dir().join(AUDIT_LOG_FILE_NAME)
}

/// Builder assembling a [`Config`] from files, environment, and overrides.
///
/// # Examples
///
/// ```
/// use resa::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .build()
///     .unwrap();
/// assert_eq!(config.audit_log, None);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    overrides: Option<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Creates a builder with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the data directory the config file is read from.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(data_dir.into());
        self
    }

    /// Applies programmatic overrides on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Skips reading the user config file.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips reading `RESA_*` environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Builds the merged configuration.
    ///
    /// A missing config file is not an error; a file that exists but cannot
    /// be read or parsed is.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read, or
    /// contains invalid YAML or unknown fields.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            let data_dir = self.data_dir.clone().unwrap_or_else(default_data_dir);
            if let Some(file_config) = load_config_file(&data_dir.join(CONFIG_FILE_NAME))? {
                config.merge(file_config);
            }
        }

        if !self.skip_env {
            config.merge(config_from_env());
        }

        if let Some(overrides) = self.overrides {
            config.merge(overrides);
        }

        Ok(config)
    }
}

/// Loads a config file, returning `None` when it does not exist.
fn load_config_file(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    let config = serde_yaml::from_str(&contents)?;
    Ok(Some(config))
}

/// Reads configuration from `RESA_*` environment variables.
fn config_from_env() -> Config {
    Config {
        audit_log: env::var_os("RESA_AUDIT_LOG").map(PathBuf::from),
        log_mode: env::var("RESA_LOG_MODE").ok(),
    }
}
