//! Data directory layout for padmood.

use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "PADMOOD_DATA_DIR";

/// Resolve the padmood data directory.
///
/// Priority:
/// 1. `PADMOOD_DATA_DIR` environment variable
/// 2. `~/.padmood`
/// 3. `./.padmood` when no home directory is known
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".padmood");
    }

    PathBuf::from(".padmood")
}

/// Path of `config.toml` inside `data_dir`.
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE_NAME)
}
