//! PAD mood engine for padmood.
//!
//! Two independent pieces share the `MoodState` representation:
//! - `MoodDecayEngine`: pulls a state back toward the baseline as time passes
//! - `MoodPromptGenerator`: renders a state as prompt-injectable guidance text

pub mod decay;
pub mod prompt;

pub use decay::MoodDecayEngine;
pub use prompt::MoodPromptGenerator;
