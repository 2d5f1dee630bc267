//! Two-state gating variables.

use crate::rate::RateFunction;
use hhkinetics_core::error::{KineticsError, Result};
use hhkinetics_core::types::Scalar;
use hhkinetics_core::{coeffs, RateArray};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Temperature at which rates are evaluated, with its Q10 scaling.
///
/// Rates measured at `reference_celsius` are multiplied by
/// `phi = q10^((celsius - reference_celsius) / 10)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Temperature {
    /// Evaluation temperature (°C)
    pub celsius: f64,
    /// Rate multiplier per 10 °C
    pub q10: f64,
    /// Temperature at which the rate parameters were fitted (°C)
    pub reference_celsius: f64,
}

impl Temperature {
    /// Reference temperature of the squid giant axon recordings.
    pub const SQUID_REFERENCE_CELSIUS: f64 = 6.3;

    /// Creates a temperature with an explicit Q10 and reference.
    pub const fn new(celsius: f64, q10: f64, reference_celsius: f64) -> Self {
        Self {
            celsius,
            q10,
            reference_celsius,
        }
    }

    /// Temperature scaling used with the squid axon kinetics (Q10 = 3 at 6.3 °C).
    pub const fn squid(celsius: f64) -> Self {
        Self::new(celsius, 3.0, Self::SQUID_REFERENCE_CELSIUS)
    }

    /// Rate multiplier at this temperature.
    pub fn phi(&self) -> f64 {
        self.q10.powf((self.celsius - self.reference_celsius) / 10.0)
    }
}

/// A gating variable with its opening (`alpha`) and closing (`beta`) rates.
///
/// A channel's open probability contains the factor `x^power` for each gate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Gate {
    /// Gate name, e.g. `"m"`
    pub name: String,
    /// Exponent of the gate in the open probability
    pub power: u32,
    /// Opening rate
    pub alpha: RateFunction,
    /// Closing rate
    pub beta: RateFunction,
}

impl Gate {
    /// Creates a gate.
    pub fn new(name: impl Into<String>, power: u32, alpha: RateFunction, beta: RateFunction) -> Self {
        Self {
            name: name.into(),
            power,
            alpha,
            beta,
        }
    }

    /// Opening rate at `v`.
    pub fn opening_rate<V: RateArray>(&self, v: &V) -> V {
        self.alpha.eval_array(v)
    }

    /// Closing rate at `v`.
    pub fn closing_rate<V: RateArray>(&self, v: &V) -> V {
        self.beta.eval_array(v)
    }

    /// Steady state and time constant `(x_inf, tau_x)` at `v`.
    pub fn coefficients<V: RateArray>(&self, v: &V) -> Result<(V, V)> {
        coeffs(v, |v| self.opening_rate(v), |v| self.closing_rate(v))
    }

    /// Steady state and time constant at `v` with both rates scaled by `phi`.
    ///
    /// The steady state is unchanged by the scaling; the time constant is
    /// divided by `phi`.
    pub fn coefficients_at<V: RateArray>(&self, v: &V, temperature: &Temperature) -> Result<(V, V)> {
        let phi = <V::Elem as Scalar>::from_f64(temperature.phi());
        coeffs(
            v,
            |v| self.opening_rate(v).map_rate(|rate| rate * phi),
            |v| self.closing_rate(v).map_rate(|rate| rate * phi),
        )
    }

    /// Steady-state contribution `x_inf(v)^power` of this gate.
    pub fn steady_state_activation<T>(&self, v: T) -> Result<T>
    where
        T: Scalar + RateArray<Elem = T>,
    {
        let (x_inf, _) = self.coefficients(&v)?;
        Ok(x_inf.powi(self.exponent()?))
    }

    pub(crate) fn exponent(&self) -> Result<i32> {
        i32::try_from(self.power).map_err(|_| {
            KineticsError::invalid_parameter(format!(
                "gate `{}` power {} is out of range",
                self.name, self.power
            ))
        })
    }

    /// Checks both rate functions and the exponent.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(KineticsError::invalid_parameter("gate name must not be empty"));
        }
        if self.power == 0 {
            return Err(KineticsError::invalid_parameter(format!(
                "gate `{}` must have a positive power",
                self.name
            )));
        }
        self.exponent()?;
        self.alpha.validate()?;
        self.beta.validate()
    }
}
