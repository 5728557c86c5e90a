use thiserror::Error;

// Errors raised by configuration and allocation.
// Evaluating a module with an unset source slot is a programming error and panics instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoiseError {
    #[error("invalid parameter: {0}")]
    InvalidParam(String),
    #[error("out of memory: could not allocate {0} noise values")]
    OutOfMemory(usize),
}

pub type Result<T> = std::result::Result<T, NoiseError>;

// Shared range checks for module setters
pub(crate) fn check_positive(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(NoiseError::InvalidParam(format!(
            "{name} must be finite and > 0, got {value}"
        )))
    }
}

pub(crate) fn check_finite(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NoiseError::InvalidParam(format!(
            "{name} must be finite, got {value}"
        )))
    }
}
