#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration management for pypi2pkgbuild
//!
//! Settings are layered, later sources winning:
//! - Default values (hard-coded)
//! - Configuration file (~/.config/pypi2pkgbuild/config.toml)
//! - Environment variables
//! - CLI flags (applied by the binary)

use pypi2pkgbuild_errors::{ConfigError, Error};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tracing::debug;

/// Public PyPI XML-RPC endpoint
pub const DEFAULT_INDEX_URL: &str = "https://pypi.python.org/pypi";

/// Environment variable overriding `index.url`
pub const ENV_INDEX_URL: &str = "PYPI2PKGBUILD_INDEX_URL";

/// Environment variable overriding `network.timeout`
pub const ENV_TIMEOUT: &str = "PYPI2PKGBUILD_TIMEOUT";

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub index: IndexConfig,

    #[serde(default)]
    pub network: NetworkConfig,
}

/// Package index configuration
#[derive(Debug, Clone, Deserialize)]
pub struct IndexConfig {
    /// XML-RPC endpoint of the index
    #[serde(default = "default_index_url")]
    pub url: String,
}

/// Network configuration
///
/// Timeouts are unset by default so requests wait as long as the
/// HTTP stack does.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    pub timeout: Option<u64>,         // seconds
    pub connect_timeout: Option<u64>, // seconds
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            url: default_index_url(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

fn default_index_url() -> String {
    DEFAULT_INDEX_URL.to_string()
}

fn default_user_agent() -> String {
    format!("pypi2pkgbuild/{}", env!("CARGO_PKG_VERSION"))
}

impl Config {
    /// Get the default config file path, if the platform has a config directory
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pypi2pkgbuild").join("config.toml"))
    }

    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the file contents
    /// contain invalid TOML syntax that cannot be parsed.
    pub async fn load_from_file(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)
            .await
            .map_err(|_| ConfigError::NotFound {
                path: path.display().to_string(),
            })?;

        debug!(path = %path.display(), "loaded configuration file");

        toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })
            .map_err(Into::into)
    }

    /// Load configuration with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the default configuration file exists but cannot
    /// be read or contains invalid TOML syntax.
    pub async fn load() -> Result<Self, Error> {
        match Self::default_path() {
            Some(config_path) if config_path.exists() => Self::load_from_file(&config_path).await,
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an optional path or use default
    ///
    /// An explicitly given path must exist; the default path is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed
    pub async fn load_or_default(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(config_path) => Self::load_from_file(config_path).await,
            None => Self::load().await,
        }
    }

    /// Merge with environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values
    /// that cannot be parsed into the expected types.
    pub fn merge_env(&mut self) -> Result<(), Error> {
        // PYPI2PKGBUILD_INDEX_URL
        if let Ok(url) = std::env::var(ENV_INDEX_URL) {
            if url.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: ENV_INDEX_URL.to_string(),
                    value: url,
                }
                .into());
            }
            self.index.url = url;
        }

        // PYPI2PKGBUILD_TIMEOUT
        if let Ok(timeout) = std::env::var(ENV_TIMEOUT) {
            let seconds = timeout
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    field: ENV_TIMEOUT.to_string(),
                    value: timeout.clone(),
                })?;
            self.network.timeout = Some(seconds);
        }

        Ok(())
    }

    /// Override the index URL (from `-u/--url`)
    pub fn apply_index_url(&mut self, url: Option<String>) {
        if let Some(url) = url {
            self.index.url = url;
        }
    }
}

impl NetworkConfig {
    /// Total request timeout, if configured
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    /// Connection timeout, if configured
    #[must_use]
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout.map(Duration::from_secs)
    }
}
