//! Configuration types for padmood.
//!
//! `GlobalConfig` represents the top-level `config.toml`; `DecayConfig` is the
//! validated, immutable parameter pair the decay engine is built from.

use serde::{Deserialize, Serialize};

use crate::error::MoodError;

/// Default seconds for the deviation from baseline to halve (30 minutes).
pub const DEFAULT_HALF_LIFE_SECS: f64 = 1800.0;

/// Default fraction of deviation retained per decay application.
pub const DEFAULT_INERTIA: f64 = 0.7;

/// Top-level configuration loaded from `{data_dir}/config.toml`.
///
/// All fields have sensible defaults, so an empty file is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Mood decay parameters (`[mood]` table).
    #[serde(default)]
    pub mood: MoodConfig,
}

/// Raw decay settings as written in `config.toml`.
///
/// Not validated on deserialization; call [`MoodConfig::to_decay_config`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodConfig {
    /// Seconds for the deviation from baseline to halve.
    #[serde(default = "default_half_life_secs")]
    pub half_life_secs: f64,

    /// Fraction of deviation retained independent of elapsed time, in `[0, 1]`.
    #[serde(default = "default_inertia")]
    pub inertia: f64,
}

fn default_half_life_secs() -> f64 {
    DEFAULT_HALF_LIFE_SECS
}

fn default_inertia() -> f64 {
    DEFAULT_INERTIA
}

impl Default for MoodConfig {
    fn default() -> Self {
        Self {
            half_life_secs: default_half_life_secs(),
            inertia: default_inertia(),
        }
    }
}

impl MoodConfig {
    /// Validate into a [`DecayConfig`].
    pub fn to_decay_config(&self) -> Result<DecayConfig, MoodError> {
        DecayConfig::new(self.half_life_secs, self.inertia)
    }
}

/// Validated decay parameters, immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayConfig {
    half_life: f64,
    inertia: f64,
}

impl DecayConfig {
    /// # Errors
    ///
    /// Returns [`MoodError::InvalidConfiguration`] when `half_life` is not a
    /// finite positive number or `inertia` is not a finite value in `[0, 1]`.
    pub fn new(half_life: f64, inertia: f64) -> Result<Self, MoodError> {
        if !half_life.is_finite() || half_life <= 0.0 {
            return Err(MoodError::InvalidConfiguration(format!(
                "half_life must be a finite number > 0, got {half_life}"
            )));
        }
        if !inertia.is_finite() || !(0.0..=1.0).contains(&inertia) {
            return Err(MoodError::InvalidConfiguration(format!(
                "inertia must be within [0, 1], got {inertia}"
            )));
        }
        Ok(Self { half_life, inertia })
    }

    /// Half-life in seconds.
    pub fn half_life(&self) -> f64 {
        self.half_life
    }

    pub fn inertia(&self) -> f64 {
        self.inertia
    }
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            half_life: DEFAULT_HALF_LIFE_SECS,
            inertia: DEFAULT_INERTIA,
        }
    }
}

impl From<DecayConfig> for MoodConfig {
    fn from(config: DecayConfig) -> Self {
        Self {
            half_life_secs: config.half_life,
            inertia: config.inertia,
        }
    }
}
