//! Parameterised gates and ion channels for Hodgkin-Huxley kinetics.
//!
//! This crate builds on [`hhkinetics_core`] to describe channels declaratively:
//! rate functions are data ([`RateFunction`]), gates pair two of them, and
//! channels combine gates with a conductance and a reversal potential. With
//! the `serde` feature, channel sets can be read from and written to JSON.
//!
//! # Example
//!
//! ```
//! use hhkinetics_channels::squid;
//!
//! let (m_inf, tau_m) = squid::m_gate().coefficients(&-65.0_f64).unwrap();
//! assert!(m_inf > 0.05 && m_inf < 0.06);
//! assert!(tau_m > 0.0);
//! ```

pub mod channel;
pub mod gate;
pub mod rate;
pub mod squid;

pub use channel::{ChannelSet, IonChannel};
pub use gate::{Gate, Temperature};
pub use rate::RateFunction;
