//! Core rate expressions for Hodgkin-Huxley gating kinetics.
//!
//! This crate provides the two numerical building blocks of voltage-gated
//! channel models: a stable evaluation of the linear-exponential rate
//! expression `x / (exp(x/y) - 1)`, and the conversion of a pair of opening and
//! closing rates into a steady state and a time constant. Every function is
//! pure and works on plain scalars as well as on `Vec`s and nalgebra arrays.
//!
//! # Key Concepts
//!
//! - **Rate functions**: voltage-dependent transition rates `alpha(V)` and `beta(V)`
//! - **Steady state**: `x_inf = alpha / (alpha + beta)`
//! - **Time constant**: `tau_x = 1 / (alpha + beta)`
//!
//! # Modules
//!
//! - [`array`]: Element-wise abstraction over scalars and arrays
//! - [`coeffs`]: Steady state and time constant from rate functions
//! - [`error`]: Error types
//! - [`parallel`]: Rayon-backed bulk evaluation (feature `parallel`)
//! - [`types`]: Scalar trait, type aliases and constants
//! - [`vtrap`]: Stable evaluation of `x / (exp(x/y) - 1)`
//!
//! # Example
//!
//! ```
//! use hhkinetics_core::prelude::*;
//!
//! let alpha_n = |v: &DVector<f64>| vtrap_array(&v.map(|v| -(v + 55.0)), 10.0) * 0.01;
//! let beta_n = |v: &DVector<f64>| v.map(|v| 0.125 * (-(v + 65.0) / 80.0).exp());
//!
//! let v = DVector::from_vec(vec![-65.0, -55.0, -40.0]);
//! let (n_inf, tau_n) = coeffs(&v, alpha_n, beta_n).unwrap();
//! assert_eq!(n_inf.len(), 3);
//! assert!(tau_n.iter().all(|&t| t > 0.0));
//! ```

pub mod array;
pub mod coeffs;
pub mod error;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod types;
pub mod vtrap;

// Re-export commonly used items at the crate root
pub use array::RateArray;
pub use coeffs::coeffs;
pub use error::{KineticsError, Result};
pub use vtrap::{vtrap, vtrap_array, vtrap_elementwise};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use hhkinetics_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::array::RateArray;
    pub use crate::coeffs::coeffs;
    pub use crate::error::{KineticsError, Result};
    #[cfg(feature = "parallel")]
    pub use crate::parallel::{par_coeffs, par_vtrap, ParallelConfig};
    pub use crate::types::{constants, DMatrix, DVector, SVector, Scalar};
    pub use crate::vtrap::{vtrap, vtrap_array, vtrap_elementwise};
}
