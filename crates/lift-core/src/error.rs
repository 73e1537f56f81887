//! Configuration error type.
//!
//! Every variant carries the offending value so the caller can report it.
//! Sub-crates define their own error enums and wrap `ConfigError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// A construction-time configuration violation.  Always fatal to the
/// construction that raised it; never produced while ticking.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("incorrect number of floors: {0} (must be between 1 and {max})", max = u32::MAX)]
    InvalidFloorCount(i64),

    #[error("incorrect elevator capacity: {0} (must be at least 1)")]
    InvalidCapacity(i64),

    #[error("invalid probability for {what}: {value}")]
    InvalidProbability { what: &'static str, value: f64 },

    #[error("invalid number of {what}: {value}")]
    InvalidHeadcount { what: &'static str, value: i64 },
}

impl ConfigError {
    /// The offending value, widened to `f64` for uniform diagnostics.
    pub fn invalid_value(&self) -> f64 {
        match *self {
            ConfigError::InvalidFloorCount(v) | ConfigError::InvalidCapacity(v) => v as f64,
            ConfigError::InvalidProbability { value, .. } => value,
            ConfigError::InvalidHeadcount { value, .. } => value as f64,
        }
    }
}

/// Shorthand result type for validated construction.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Validate a probability: must be a non-negative number.
pub fn check_probability(what: &'static str, value: f64) -> ConfigResult<f64> {
    if value >= 0.0 {
        Ok(value)
    } else {
        // NaN lands here too.
        Err(ConfigError::InvalidProbability { what, value })
    }
}

/// Validate a headcount: must be non-negative.
pub fn check_headcount(what: &'static str, value: i64) -> ConfigResult<usize> {
    usize::try_from(value).map_err(|_| ConfigError::InvalidHeadcount { what, value })
}
