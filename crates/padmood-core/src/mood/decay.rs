//! Exponential mood decay toward the baseline.
//!
//! `MoodDecayEngine` pulls each PAD dimension back toward its baseline
//! component as time passes. Two knobs shape the curve: the half-life (how
//! fast the deviation fades with time) and inertia (the fraction of deviation
//! kept on every application, independent of time).

use chrono::{DateTime, Utc};

use padmood_types::config::{DecayConfig, MoodConfig};
use padmood_types::error::MoodError;
use padmood_types::mood::{clamp_unit, MoodState, BASELINE, SOURCE_DECAY};

/// Decimal places kept on every decayed dimension.
const DECIMAL_PLACES: usize = 4;

/// Pure decay engine over an immutable [`DecayConfig`].
///
/// `Copy` and free of interior state, so one engine can be shared across
/// threads and called concurrently without locking.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoodDecayEngine {
    config: DecayConfig,
}

impl MoodDecayEngine {
    pub fn new(config: DecayConfig) -> Self {
        Self { config }
    }

    /// Build an engine from the raw `[mood]` table of `config.toml`.
    pub fn from_config(config: &MoodConfig) -> Result<Self, MoodError> {
        Ok(Self::new(config.to_decay_config()?))
    }

    pub fn config(&self) -> DecayConfig {
        self.config
    }

    /// Time-dependent multiplier for `elapsed_secs` seconds.
    ///
    /// Exactly 1.0 at zero, 0.5 after one half-life, approaching 0.0 as
    /// elapsed time grows. Negative input is treated as zero.
    pub fn decay_factor(&self, elapsed_secs: f64) -> f64 {
        let elapsed = elapsed_secs.max(0.0);
        (-std::f64::consts::LN_2 * elapsed / self.config.half_life()).exp()
    }

    /// Decay `last_state` forward to `current_time`.
    ///
    /// Each dimension moves independently:
    /// `baseline + (last - baseline) * inertia * decay_factor`, clamped to
    /// `[-1, 1]` and rounded to four decimals. If `current_time` precedes the
    /// state's timestamp the elapsed time is taken as zero.
    ///
    /// Inertia is applied on every call, so with `inertia < 1` even a
    /// zero-elapsed call shrinks the deviation from baseline.
    pub fn apply_decay(&self, last_state: &MoodState, current_time: DateTime<Utc>) -> MoodState {
        let elapsed_secs = (current_time - last_state.timestamp())
            .to_std()
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);
        let factor = self.decay_factor(elapsed_secs);
        let retained = self.config.inertia() * factor;

        tracing::trace!(
            elapsed_secs,
            decay_factor = factor,
            inertia = self.config.inertia(),
            "applying mood decay"
        );

        let decay = |last: f64, baseline: f64| {
            round_to(clamp_unit(baseline + (last - baseline) * retained), DECIMAL_PLACES)
        };

        let valence = decay(last_state.valence(), BASELINE.valence());
        let arousal = decay(last_state.arousal(), BASELINE.arousal());
        let dominance = decay(last_state.dominance(), BASELINE.dominance());

        // Finite inputs and a validated config keep every value finite.
        MoodState::new(valence, arousal, dominance, current_time, SOURCE_DECAY).unwrap_or_else(
            |err| {
                tracing::error!(%err, "decay produced a non-finite mood, resetting to baseline");
                BASELINE.at(current_time).with_source(SOURCE_DECAY)
            },
        )
    }
}

/// Round to `places` decimals from the exact binary value, ties to even.
///
/// Scaling by `10^places` first would round twice: a value just below a tie
/// can land exactly on `.5` after the multiply and then round up.
fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    const TOLERANCE: f64 = 1e-4;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    fn state(valence: f64, arousal: f64, dominance: f64) -> MoodState {
        MoodState::new(valence, arousal, dominance, t0(), "user").unwrap()
    }

    fn engine(half_life: f64, inertia: f64) -> MoodDecayEngine {
        MoodDecayEngine::new(DecayConfig::new(half_life, inertia).unwrap())
    }

    fn dims(s: &MoodState) -> [f64; 3] {
        [s.valence(), s.arousal(), s.dominance()]
    }

    #[test]
    fn default_engine_uses_default_config() {
        let engine = MoodDecayEngine::default();
        assert!((engine.config().half_life() - 1800.0).abs() < f64::EPSILON);
        assert!((engine.config().inertia() - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn from_config_rejects_invalid_values() {
        let bad = MoodConfig {
            half_life_secs: 0.0,
            inertia: 0.7,
        };
        assert!(matches!(
            MoodDecayEngine::from_config(&bad),
            Err(MoodError::InvalidConfiguration(_))
        ));

        let good = MoodConfig {
            half_life_secs: 60.0,
            inertia: 1.0,
        };
        let engine = MoodDecayEngine::from_config(&good).unwrap();
        assert!((engine.config().half_life() - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn decay_factor_shape() {
        let engine = MoodDecayEngine::default();
        assert_eq!(engine.decay_factor(0.0), 1.0);
        assert_eq!(engine.decay_factor(-50.0), 1.0);
        assert!((engine.decay_factor(1800.0) - 0.5).abs() < 1e-12);
        assert!((engine.decay_factor(3600.0) - 0.25).abs() < 1e-12);
        assert!(engine.decay_factor(1800.0 * 100.0) < 1e-20);
    }

    #[test]
    fn scenario_one_half_life_with_default_inertia() {
        let engine = engine(1800.0, 0.7);
        let start = state(1.0, 0.0, 0.5);

        let next = engine.apply_decay(&start, t0() + Duration::seconds(1800));

        assert!((next.valence() - 0.35).abs() < 1e-9);
        assert_eq!(next.arousal(), 0.0);
        assert_eq!(next.dominance(), 0.5);
    }

    #[test]
    fn result_is_stamped_with_current_time_and_decay_source() {
        let engine = MoodDecayEngine::default();
        let now = t0() + Duration::minutes(10);

        let next = engine.apply_decay(&state(0.2, 0.2, 0.2), now);

        assert_eq!(next.timestamp(), now);
        assert_eq!(next.source(), "decay");
    }

    #[test]
    fn half_life_halves_deviation_without_inertia() {
        let engine = engine(1800.0, 1.0);
        let start = state(-0.8, 0.6, 1.0);

        let next = engine.apply_decay(&start, t0() + Duration::seconds(1800));

        let before = start.deviation_from(&BASELINE);
        let after = next.deviation_from(&BASELINE);
        for (b, a) in before.iter().zip(after.iter()) {
            assert!((a - b / 2.0).abs() < TOLERANCE, "expected {} got {a}", b / 2.0);
        }
    }

    #[test]
    fn zero_elapsed_applies_only_inertia() {
        let engine = engine(1800.0, 0.7);
        let start = state(1.0, -0.5, -1.0);

        let next = engine.apply_decay(&start, start.timestamp());

        assert!((next.valence() - 0.7).abs() < 1e-9);
        assert!((next.arousal() - -0.35).abs() < 1e-9);
        // 0.5 + (-1.0 - 0.5) * 0.7 = -0.55
        assert!((next.dominance() - -0.55).abs() < 1e-9);
    }

    #[test]
    fn earlier_current_time_counts_as_zero_elapsed() {
        let engine = MoodDecayEngine::default();
        let start = state(0.9, 0.4, -0.2);

        let at_same = engine.apply_decay(&start, start.timestamp());
        let earlier = start.timestamp() - Duration::hours(3);
        let at_earlier = engine.apply_decay(&start, earlier);

        assert_eq!(dims(&at_same), dims(&at_earlier));
        assert_eq!(at_earlier.timestamp(), earlier);
    }

    #[test]
    fn outputs_are_rounded_to_four_places() {
        let engine = engine(1000.0, 0.9);
        let start = state(0.123_456_7, -0.987_654_3, 0.333_333_3);
        let next = engine.apply_decay(&start, t0() + Duration::seconds(137));

        for value in dims(&next) {
            let scaled = value * 10_000.0;
            assert!((scaled - scaled.round()).abs() < 1e-6, "{value} not rounded");
        }
    }

    #[test]
    fn outputs_stay_within_unit_range() {
        let extremes = [-1.0, -0.31, 0.0, 0.5, 0.71, 1.0];
        let elapsed = [0, 1, 59, 1800, 86_400, 10_000_000];
        for inertia in [0.0, 0.3, 0.7, 1.0] {
            let engine = engine(1800.0, inertia);
            for &v in &extremes {
                for &a in &extremes {
                    for &d in &extremes {
                        let start = state(v, a, d);
                        for &secs in &elapsed {
                            let next = engine.apply_decay(&start, t0() + Duration::seconds(secs));
                            for value in dims(&next) {
                                assert!((-1.0..=1.0).contains(&value));
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn repeated_decay_converges_monotonically() {
        let engine = engine(600.0, 1.0);
        let mut current = state(1.0, -1.0, -1.0);
        let mut previous_gap = current.deviation_from(&BASELINE).map(f64::abs);

        for step in 1..=40 {
            current = engine.apply_decay(&current, t0() + Duration::seconds(step * 300));
            let deviation = current.deviation_from(&BASELINE);
            let gap = deviation.map(f64::abs);
            for i in 0..3 {
                assert!(gap[i] <= previous_gap[i], "dimension {i} moved away at step {step}");
            }
            // Same side of the baseline as the start: no overshoot.
            assert!(deviation[0] >= 0.0);
            assert!(deviation[1] <= 0.0);
            assert!(deviation[2] <= 0.0);
            previous_gap = gap;
        }

        // Twenty half-lives in; only the last rounding step remains.
        for gap in previous_gap {
            assert!(gap <= 1.5e-4, "gap {gap} should be at rounding resolution");
        }
    }

    #[test]
    fn long_elapsed_reaches_baseline() {
        let engine = MoodDecayEngine::default();
        let next = engine.apply_decay(&state(-1.0, 1.0, -1.0), t0() + Duration::days(30));
        assert_eq!(dims(&next), [0.0, 0.0, 0.5]);
    }

    #[test]
    fn zero_inertia_snaps_to_baseline() {
        let engine = engine(1800.0, 0.0);
        let next = engine.apply_decay(&state(0.9, 0.9, 0.9), t0());
        assert_eq!(dims(&next), [0.0, 0.0, 0.5]);
    }

    #[test]
    fn dimensions_decay_independently() {
        let engine = MoodDecayEngine::default();
        let later = t0() + Duration::seconds(900);

        let only_valence = engine.apply_decay(&state(0.8, 0.0, 0.5), later);
        let all = engine.apply_decay(&state(0.8, -0.6, 0.9), later);

        assert_eq!(only_valence.valence(), all.valence());
        assert_eq!(only_valence.arousal(), 0.0);
        assert_eq!(only_valence.dominance(), 0.5);
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        let engine = MoodDecayEngine::default();
        let start = state(0.6, 0.6, 0.6);
        let expected = engine.apply_decay(&start, t0() + Duration::seconds(120));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let start = start.clone();
                std::thread::spawn(move || engine.apply_decay(&start, t0() + Duration::seconds(120)))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    #[test]
    fn rounding_uses_the_exact_value_below_a_tie() {
        // 0.0005 * 0.7 is stored as 0.000349999..., which rounds down.
        let engine = engine(1800.0, 0.7);
        let next = engine.apply_decay(&state(0.0005, 0.0, 0.5), t0());
        assert_eq!(next.valence(), 0.0003);
    }

    #[test]
    fn round_to_does_not_round_twice() {
        let raw: f64 = 0.0005 * 0.7;
        // Scaling first lands on 3.5 and rounds the wrong way.
        assert_eq!((raw * 1e4).round() / 1e4, 0.0004);
        assert_eq!(round_to(raw, 4), 0.0003);
        assert_eq!(round_to(-raw, 4), -0.0003);
    }

    #[test]
    fn round_to_four_places() {
        assert_eq!(round_to(0.123_47, 4), 0.1235);
        assert_eq!(round_to(-0.999_96, 4), -1.0);
        assert_eq!(round_to(0.35, 4), 0.35);
    }
}
