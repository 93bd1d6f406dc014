use thiserror::Error;

/// Errors raised when building mood states or decay configuration.
///
/// Decay and text generation themselves are total; these errors only surface
/// at construction time, before a value can violate the clamp invariant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MoodError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
