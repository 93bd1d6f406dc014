//! Global configuration loader for padmood.
//!
//! Reads `config.toml` from the data directory (`~/.padmood/` in production)
//! and deserializes it into [`GlobalConfig`]. Falls back to sensible defaults
//! when the file is missing, malformed, or carries out-of-range decay values.

use std::path::{Path, PathBuf};

use padmood_types::config::{DecayConfig, GlobalConfig};

/// File name of the global configuration inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Where the effective decay configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Built-in defaults (no file, or the file was unusable).
    Defaults,
    /// Parsed from the given `config.toml`.
    File(PathBuf),
}

/// A validated decay configuration plus its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDecayConfig {
    pub config: DecayConfig,
    pub origin: ConfigOrigin,
}

/// Resolve the decay configuration the engine should run with.
///
/// Values that fail validation (non-positive half-life, inertia outside
/// `[0, 1]`) are logged and replaced by [`DecayConfig::default()`] as a whole.
pub async fn resolve_decay_config(data_dir: &Path) -> ResolvedDecayConfig {
    let Some((global, path)) = read_global_config(data_dir).await else {
        return ResolvedDecayConfig {
            config: DecayConfig::default(),
            origin: ConfigOrigin::Defaults,
        };
    };

    match global.mood.to_decay_config() {
        Ok(config) => ResolvedDecayConfig {
            config,
            origin: ConfigOrigin::File(path),
        },
        Err(err) => {
            tracing::warn!("Ignoring [mood] in {}: {err}, using defaults", path.display());
            ResolvedDecayConfig {
                config: DecayConfig::default(),
                origin: ConfigOrigin::Defaults,
            }
        }
    }
}

/// Read and parse `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns `None` (debug log).
/// - If the file exists but fails to read or parse, logs a warning and returns `None`.
/// - Otherwise returns the parsed config and the path it came from.
async fn read_global_config(data_dir: &Path) -> Option<(GlobalConfig, PathBuf)> {
    let config_path = data_dir.join(CONFIG_FILE_NAME);

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return None;
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return None;
        }
    };

    match toml::from_str::<GlobalConfig>(&content) {
        Ok(config) => Some((config, config_path)),
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            None
        }
    }
}
