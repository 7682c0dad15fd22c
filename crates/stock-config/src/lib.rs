//! Configuration for the stock admin client
//!
//! This crate provides:
//! - Configuration directory paths
//! - Configuration file lookup (TOML)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{AppConfig, ConfigOrigin, API_URL_ENV};
pub use config_file::{find_config_file, LOCAL_CONFIG_FILE};
pub use paths::config_dir;
