//! Application state shared by every command.
//!
//! Holds the resolved data directory and a decay engine built from the
//! effective configuration.

use std::path::PathBuf;

use padmood_core::mood::MoodDecayEngine;
use padmood_infra::config::{resolve_decay_config, ConfigOrigin};
use padmood_infra::filesystem::resolve_data_dir;

pub struct AppState {
    pub data_dir: PathBuf,
    pub engine: MoodDecayEngine,
    pub config_origin: ConfigOrigin,
}

impl AppState {
    /// Resolve the data directory and load the decay configuration.
    ///
    /// Never fails on a missing or broken `config.toml`; defaults apply.
    pub async fn init(data_dir: Option<PathBuf>) -> Self {
        let data_dir = data_dir.unwrap_or_else(resolve_data_dir);
        let resolved = resolve_decay_config(&data_dir).await;

        tracing::debug!(
            data_dir = %data_dir.display(),
            half_life = resolved.config.half_life(),
            inertia = resolved.config.inertia(),
            "decay engine configured"
        );

        Self {
            data_dir,
            engine: MoodDecayEngine::new(resolved.config),
            config_origin: resolved.origin,
        }
    }
}
