//! Parameterised voltage-dependent rate functions.
//!
//! Hodgkin-Huxley style models build almost every opening and closing rate
//! from three shapes, all written here in terms of the membrane voltage `V`
//! (mV) and three parameters `a`, `b`, `c`:
//!
//! ```text
//! LinearExponential:  a * vtrap(-(V + b), c) = a (V + b) / (1 - exp(-(V + b)/c))
//! Exponential:        a * exp(-(V + b) / c)
//! Sigmoid:            a / (1 + exp(-(V + b) / c))
//! Constant:           a
//! ```
//!
//! Parameters are stored in `f64`; evaluation converts them to the requested
//! precision.

use hhkinetics_core::error::{KineticsError, Result};
use hhkinetics_core::types::Scalar;
use hhkinetics_core::{vtrap, RateArray};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A voltage-dependent transition rate (1/ms).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum RateFunction {
    /// `a * (V + b) / (1 - exp(-(V + b) / c))`, evaluated through [`vtrap`].
    LinearExponential {
        /// Rate scale (1/(ms mV))
        a: f64,
        /// Voltage offset (mV)
        b: f64,
        /// Slope (mV)
        c: f64,
    },
    /// `a * exp(-(V + b) / c)`
    Exponential {
        /// Rate at `V = -b` (1/ms)
        a: f64,
        /// Voltage offset (mV)
        b: f64,
        /// Slope (mV)
        c: f64,
    },
    /// `a / (1 + exp(-(V + b) / c))`
    Sigmoid {
        /// Maximal rate (1/ms)
        a: f64,
        /// Half-activation offset (mV)
        b: f64,
        /// Slope (mV)
        c: f64,
    },
    /// Voltage-independent rate `a`.
    Constant {
        /// Rate (1/ms)
        a: f64,
    },
}

impl RateFunction {
    /// Evaluates the rate at a single voltage.
    pub fn eval<T: Scalar>(&self, v: T) -> T {
        let p = |x: f64| <T as Scalar>::from_f64(x);
        match *self {
            Self::LinearExponential { a, b, c } => p(a) * vtrap(-(v + p(b)), p(c)),
            Self::Exponential { a, b, c } => p(a) * (-(v + p(b)) / p(c)).exp(),
            Self::Sigmoid { a, b, c } => p(a) / (T::one() + (-(v + p(b)) / p(c)).exp()),
            Self::Constant { a } => p(a),
        }
    }

    /// Evaluates the rate element-wise, keeping the shape of `v`.
    pub fn eval_array<V: RateArray>(&self, v: &V) -> V {
        v.map_rate(|vi| self.eval(vi))
    }

    /// Checks that the parameters describe a usable, non-negative rate.
    ///
    /// Evaluation itself never validates; this is meant for parameters that
    /// come from configuration.
    pub fn validate(&self) -> Result<()> {
        let (a, rest) = match *self {
            Self::LinearExponential { a, b, c }
            | Self::Exponential { a, b, c }
            | Self::Sigmoid { a, b, c } => (a, Some((b, c))),
            Self::Constant { a } => (a, None),
        };

        if !a.is_finite() || a < 0.0 {
            return Err(KineticsError::invalid_parameter(format!(
                "rate scale must be finite and non-negative, got {a}"
            )));
        }
        if let Some((b, c)) = rest {
            if !b.is_finite() {
                return Err(KineticsError::invalid_parameter(format!(
                    "voltage offset must be finite, got {b}"
                )));
            }
            if !c.is_finite() || c == 0.0 {
                return Err(KineticsError::invalid_parameter(format!(
                    "slope must be finite and nonzero, got {c}"
                )));
            }
        }
        Ok(())
    }
}
