//! Error types for gating kinetics.
//!
//! Numeric edge cases (division by zero, overflow in `exp`, NaN inputs) are
//! never errors: they follow IEEE-754 and surface as `inf` or `nan` values.
//! The variants below cover the structural failures only.

use thiserror::Error;

/// Errors that can occur while evaluating rate expressions or building channels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KineticsError {
    /// Two arrays that must be combined element-wise have different shapes.
    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Shape of the left-hand operand
        expected: String,
        /// Shape of the right-hand operand
        actual: String,
    },

    /// A rate, gate, or channel parameter is unusable.
    ///
    /// Raised by explicit validation only; evaluation never checks parameters.
    #[error("Invalid parameter: {reason}")]
    InvalidParameter {
        /// Description of the offending parameter
        reason: String,
    },

    /// A channel description could not be read or written.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl KineticsError {
    /// Create a ShapeMismatch error from two shapes.
    pub fn shape_mismatch<S1, S2>(expected: S1, actual: S2) -> Self
    where
        S1: std::fmt::Debug,
        S2: std::fmt::Debug,
    {
        Self::ShapeMismatch {
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        }
    }

    /// Create an InvalidParameter error with a custom reason.
    pub fn invalid_parameter<S: Into<String>>(reason: S) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }

    /// Create a Config error with a custom message.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }
}

/// Result type alias for kinetics operations.
pub type Result<T> = std::result::Result<T, KineticsError>;
