//! Configuration directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/stock-admin/`
//! - macOS: `~/Library/Application Support/stock-admin/`
//! - Windows: `%APPDATA%\stock-admin\`

use anyhow::{Context, Result};
use std::path::PathBuf;

pub(crate) const APP_NAME: &str = "stock-admin";

/// Get the application config directory
///
/// The directory is not created; the client only ever reads from it.
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get path to the global config file
pub fn global_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_path() {
        if let Ok(path) = global_config_path() {
            assert!(path.ends_with("stock-admin/config.toml"));
        }
    }
}
