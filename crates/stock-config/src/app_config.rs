//! Application configuration
//!
//! Configuration loaded from `.stock-admin.toml` (CWD) or
//! `~/.config/stock-admin/config.toml`.

use crate::config_file::{find_config_file, read_config_file};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding `api_base_url`
pub const API_URL_ENV: &str = "STOCK_API_URL";

/// Application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the stock REST API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_api_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            log_level: default_log_level(),
        }
    }
}

/// Where the loaded config came from
///
/// Config is read before logging is set up, so [`AppConfig::load`] hands
/// this back and the caller logs it once the logger is running.
#[derive(Debug)]
pub enum ConfigOrigin {
    File(PathBuf),
    Defaults,
    /// The file was found but could not be read or parsed
    Rejected { path: PathBuf, error: anyhow::Error },
}

impl ConfigOrigin {
    pub fn log(&self) {
        match self {
            ConfigOrigin::File(path) => log::info!("Loaded app config from {}", path.display()),
            ConfigOrigin::Defaults => log::debug!("Using default app config"),
            ConfigOrigin::Rejected { path, error } => log::warn!(
                "Failed to load config file {}, using defaults: {:#}",
                path.display(),
                error
            ),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then the config directory, or use defaults
    ///
    /// A config file that fails to parse is ignored and reported through
    /// the returned [`ConfigOrigin`].
    pub fn load() -> (Self, ConfigOrigin) {
        let (config, origin) = Self::load_found(find_config_file());
        (
            config.with_api_url_override(std::env::var(API_URL_ENV).ok()),
            origin,
        )
    }

    fn load_found(found: Option<PathBuf>) -> (Self, ConfigOrigin) {
        match found {
            Some(path) => match Self::load_from(&path) {
                Ok(config) => (config, ConfigOrigin::File(path)),
                Err(error) => (Self::default(), ConfigOrigin::Rejected { path, error }),
            },
            None => (Self::default(), ConfigOrigin::Defaults),
        }
    }

    /// Load config from an explicit path
    ///
    /// Unlike [`AppConfig::load`], a missing or malformed file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = read_config_file(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Replace the API URL when an override is given
    pub fn with_api_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url;
        }
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
