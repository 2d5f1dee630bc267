//! Type definitions and aliases for gating kinetics.
//!
//! This module provides the scalar trait shared by every rate expression,
//! nalgebra type aliases, and the numerical constants of the library.

use nalgebra::{Const, Dyn, OMatrix, OVector, Scalar as NalgebraScalar};
use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};

/// Trait for scalar types used in rate expressions (f32 or f64).
///
/// This trait combines the numeric traits needed to evaluate rate functions
/// generically and to store them inside nalgebra containers.
pub trait Scalar:
    NalgebraScalar
    + Float
    + FromPrimitive
    + Display
    + Debug
    + Default
    + Copy
    + Send
    + Sync
    + 'static
{
    /// Machine epsilon for this scalar type.
    const EPSILON: Self;

    /// Default relative tolerance for comparing rate values.
    const DEFAULT_TOLERANCE: Self;

    /// Convert from f64 (for constants).
    fn from_f64(v: f64) -> Self;

    /// Convert to f64 (for display and cross-precision comparisons).
    fn to_f64(self) -> f64;
}

impl Scalar for f32 {
    const EPSILON: Self = f32::EPSILON;
    const DEFAULT_TOLERANCE: Self = 1e-5;

    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Scalar for f64 {
    const EPSILON: Self = f64::EPSILON;
    const DEFAULT_TOLERANCE: Self = 1e-12;

    fn from_f64(v: f64) -> Self {
        v
    }

    fn to_f64(self) -> f64 {
        self
    }
}

/// Type alias for a dynamically-sized matrix.
pub type DMatrix<T> = OMatrix<T, Dyn, Dyn>;

/// Type alias for a dynamically-sized vector.
pub type DVector<T> = OVector<T, Dyn>;

/// Type alias for a statically-sized vector.
pub type SVector<T, const N: usize> = OVector<T, Const<N>>;

/// Numerical constants for different precision levels.
pub mod constants {
    use super::Scalar;

    /// Crossover below which `|x/y|` selects the linear branch of `vtrap`.
    ///
    /// The value is fixed; changing it changes results at the boundary.
    pub const VTRAP_THRESHOLD: f64 = 1e-6;

    /// Get the `vtrap` crossover in the requested precision.
    pub fn vtrap_threshold<T: Scalar>() -> T {
        <T as Scalar>::from_f64(VTRAP_THRESHOLD)
    }

    /// Get machine epsilon for the given scalar type.
    pub fn epsilon<T: Scalar>() -> T {
        T::EPSILON
    }

    /// Get default comparison tolerance.
    pub fn default_tolerance<T: Scalar>() -> T {
        T::DEFAULT_TOLERANCE
    }
}
