//! PAD mood state types.
//!
//! A [`MoodState`] is an immutable snapshot of the three PAD dimensions
//! (valence, arousal, dominance) together with the instant it is valid for and
//! a provenance tag. Every dimension is kept inside `[-1.0, 1.0]`.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::MoodError;

/// Provenance tag for states produced by the decay engine.
pub const SOURCE_DECAY: &str = "decay";

/// Provenance tag of the baseline state.
pub const SOURCE_BASELINE: &str = "baseline";

pub const BASELINE_VALENCE: f64 = 0.0;
pub const BASELINE_AROUSAL: f64 = 0.0;
pub const BASELINE_DOMINANCE: f64 = 0.5;

/// The resting state all decay converges toward.
///
/// Read-only for the life of the process. The timestamp is the Unix epoch
/// since the baseline is not tied to any observation.
pub static BASELINE: LazyLock<MoodState> = LazyLock::new(|| MoodState {
    valence: BASELINE_VALENCE,
    arousal: BASELINE_AROUSAL,
    dominance: BASELINE_DOMINANCE,
    timestamp: DateTime::<Utc>::UNIX_EPOCH,
    source: SOURCE_BASELINE.to_string(),
});

/// Clamp a value into the closed unit range `[-1.0, 1.0]`.
pub fn clamp_unit(x: f64) -> f64 {
    x.clamp(-1.0, 1.0)
}

/// Immutable PAD (Pleasure/Valence, Arousal, Dominance) mood snapshot.
///
/// Fields are private: construct through [`MoodState::new`] (or
/// [`MoodState::now`]) so that non-finite values are rejected and every
/// dimension is clamped. Deserialization goes through the same path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MoodStateRecord")]
pub struct MoodState {
    valence: f64,
    arousal: f64,
    dominance: f64,
    timestamp: DateTime<Utc>,
    source: String,
}

impl MoodState {
    /// Build a mood state, clamping each dimension into `[-1.0, 1.0]`.
    ///
    /// # Errors
    ///
    /// Returns [`MoodError::InvalidInput`] if any dimension is NaN or infinite.
    pub fn new(
        valence: f64,
        arousal: f64,
        dominance: f64,
        timestamp: DateTime<Utc>,
        source: impl Into<String>,
    ) -> Result<Self, MoodError> {
        for (name, value) in [
            ("valence", valence),
            ("arousal", arousal),
            ("dominance", dominance),
        ] {
            if !value.is_finite() {
                return Err(MoodError::InvalidInput(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        Ok(Self {
            valence: clamp_unit(valence),
            arousal: clamp_unit(arousal),
            dominance: clamp_unit(dominance),
            timestamp,
            source: source.into(),
        })
    }

    /// Build a state stamped with the current time and the `"decay"` source.
    pub fn now(valence: f64, arousal: f64, dominance: f64) -> Result<Self, MoodError> {
        Self::new(valence, arousal, dominance, Utc::now(), SOURCE_DECAY)
    }

    /// Copy of this state with a different provenance tag.
    pub fn with_source(&self, source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..self.clone()
        }
    }

    /// Copy of this state re-stamped at `timestamp`.
    pub fn at(&self, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            ..self.clone()
        }
    }

    pub fn valence(&self) -> f64 {
        self.valence
    }

    pub fn arousal(&self) -> f64 {
        self.arousal
    }

    pub fn dominance(&self) -> f64 {
        self.dominance
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Per-dimension difference `self - other`, ordered valence, arousal, dominance.
    pub fn deviation_from(&self, other: &MoodState) -> [f64; 3] {
        [
            self.valence - other.valence,
            self.arousal - other.arousal,
            self.dominance - other.dominance,
        ]
    }
}

/// Unvalidated wire shape of a [`MoodState`].
#[derive(Deserialize)]
struct MoodStateRecord {
    valence: f64,
    arousal: f64,
    dominance: f64,
    timestamp: DateTime<Utc>,
    #[serde(default = "default_source")]
    source: String,
}

fn default_source() -> String {
    SOURCE_DECAY.to_string()
}

impl TryFrom<MoodStateRecord> for MoodState {
    type Error = MoodError;

    fn try_from(record: MoodStateRecord) -> Result<Self, Self::Error> {
        MoodState::new(
            record.valence,
            record.arousal,
            record.dominance,
            record.timestamp,
            record.source,
        )
    }
}
