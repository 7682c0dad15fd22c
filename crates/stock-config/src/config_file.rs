use crate::paths::global_config_path;
use std::path::{Path, PathBuf};

/// Config file looked up in the current working directory
pub const LOCAL_CONFIG_FILE: &str = ".stock-admin.toml";

/// Locate the config file: CWD first, then the global config directory
///
/// Returns `None` when neither exists.
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    match global_config_path() {
        Ok(global) if global.is_file() => Some(global),
        _ => None,
    }
}

/// Read a config file
///
/// Nothing is logged here: config is loaded before the logger exists.
pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    std::fs::read_to_string(path)
}
