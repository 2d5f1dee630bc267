//! Numerically stable Hodgkin-Huxley gating kinetics.
//!
//! `hhkinetics` bundles the workspace crates behind one dependency:
//!
//! - [`kinetics`]: the stable rate expression [`vtrap`](kinetics::vtrap()), the
//!   steady-state / time-constant combinator [`coeffs`](kinetics::coeffs()), and the
//!   element-wise array abstraction they share
//! - [`channels`]: parameterised rate functions, gates, ion channels and the
//!   squid giant axon kinetics
//!
//! # Example
//!
//! ```
//! use hhkinetics::prelude::*;
//!
//! let v = DVector::from_vec(vec![-80.0_f64, -65.0, -50.0, -35.0]);
//! let (h_inf, tau_h) = squid::h_gate().coefficients(&v).unwrap();
//!
//! // Inactivation closes with depolarisation
//! assert!(h_inf[0] > h_inf[3]);
//! assert!(tau_h.iter().all(|&t| t > 0.0));
//! ```

pub use hhkinetics_channels as channels;
pub use hhkinetics_core as kinetics;
pub use nalgebra;

pub use hhkinetics_core::{coeffs, vtrap, vtrap_array, vtrap_elementwise, KineticsError, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use hhkinetics_channels::squid;
    pub use hhkinetics_channels::{ChannelSet, Gate, IonChannel, RateFunction, Temperature};
    pub use hhkinetics_core::prelude::*;
}
