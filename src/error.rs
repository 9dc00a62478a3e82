//! Crate-level error type
//!
//! Outside the output layer every failure is an input-validation failure:
//! the steppers are pure and deterministic, so retrying never helps.

use thiserror::Error;

/// Errors raised by grid construction, operator assembly, stepping and output.
#[derive(Debug, Error)]
pub enum HeatError {
    /// A grid is not square, or its side length does not match the operator.
    #[error("shape mismatch: expected {expected:?}, found {found:?}")]
    Shape {
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// Grid size, coefficient or run parameters are unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Data handed to an exporter cannot be written (empty, non-finite, ...).
    #[error("export failed: {0}")]
    Export(String),

    /// The plotting backend reported an error.
    #[error("plot failed: {0}")]
    Plot(String),
}

impl HeatError {
    /// Shape error for a grid that was expected to be `n × n`.
    pub(crate) fn square(n: usize, found: (usize, usize)) -> Self {
        Self::Shape { expected: (n, n), found }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HeatError>;

/// Reject a coefficient that is not a positive finite number.
///
/// Values above the 2D stability bound (1/4) are accepted; a run with one
/// diverges instead of failing.
pub fn validate_epsilon(epsilon: f64) -> Result<()> {
    if !epsilon.is_finite() {
        return Err(HeatError::config(format!("epsilon must be finite, got {epsilon}")));
    }
    if epsilon <= 0.0 {
        return Err(HeatError::config(format!("epsilon must be positive, got {epsilon}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epsilon_validation() {
        assert!(validate_epsilon(0.2).is_ok());
        assert!(validate_epsilon(0.3).is_ok());
        assert!(validate_epsilon(0.0).is_err());
        assert!(validate_epsilon(-0.1).is_err());
        assert!(validate_epsilon(f64::NAN).is_err());
        assert!(validate_epsilon(f64::INFINITY).is_err());
    }

    #[test]
    fn test_shape_error_message() {
        let err = HeatError::square(4, (4, 5));
        assert_eq!(err.to_string(), "shape mismatch: expected (4, 4), found (4, 5)");
    }
}
