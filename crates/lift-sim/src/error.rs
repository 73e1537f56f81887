use lift_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SimError {
    /// The offending configuration value.
    pub fn invalid_value(&self) -> f64 {
        match self {
            SimError::Config(e) => e.invalid_value(),
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;
