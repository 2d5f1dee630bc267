//! Ion channels built from gates, and named collections of channels.
//!
//! Conductances are in mS/cm², voltages in mV, so currents come out in µA/cm².

use crate::gate::Gate;
use hhkinetics_core::error::{KineticsError, Result};
use hhkinetics_core::types::Scalar;
use hhkinetics_core::RateArray;
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ion channel with conductance `g_max * prod(x_i^p_i)`.
///
/// A channel without gates is an ohmic leak.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IonChannel {
    /// Channel name
    pub name: String,
    /// Maximal conductance (mS/cm²)
    pub g_max: f64,
    /// Reversal potential (mV)
    pub e_rev: f64,
    /// Gates, in the order gate values are supplied
    #[cfg_attr(feature = "serde", serde(default))]
    pub gates: Vec<Gate>,
}

impl IonChannel {
    /// Creates a channel without gates.
    pub fn new(name: impl Into<String>, g_max: f64, e_rev: f64) -> Self {
        Self {
            name: name.into(),
            g_max,
            e_rev,
            gates: Vec::new(),
        }
    }

    /// Adds a gate.
    #[must_use]
    pub fn with_gate(mut self, gate: Gate) -> Self {
        self.gates.push(gate);
        self
    }

    /// Looks up a gate by name.
    pub fn gate(&self, name: &str) -> Option<&Gate> {
        self.gates.iter().find(|gate| gate.name == name)
    }

    /// Fraction of open channels, `prod(x_i^p_i)`, for the given gate values.
    ///
    /// `gate_values` must hold one value per gate, in gate order.
    pub fn open_fraction<T: Scalar>(&self, gate_values: &[T]) -> Result<T> {
        if gate_values.len() != self.gates.len() {
            return Err(KineticsError::shape_mismatch(
                (self.gates.len(), 1),
                (gate_values.len(), 1),
            ));
        }
        self.gates
            .iter()
            .zip(gate_values)
            .try_fold(T::one(), |acc, (gate, &x)| Ok(acc * x.powi(gate.exponent()?)))
    }

    /// Steady-state values of every gate at `v`, in gate order.
    pub fn steady_state_gates<T>(&self, v: T) -> Result<Vec<T>>
    where
        T: Scalar + RateArray<Elem = T>,
    {
        self.gates
            .iter()
            .map(|gate| gate.coefficients(&v).map(|(x_inf, _)| x_inf))
            .collect()
    }

    /// Conductance at `v` with every gate at its steady state.
    pub fn steady_state_conductance<T>(&self, v: T) -> Result<T>
    where
        T: Scalar + RateArray<Elem = T>,
    {
        let gates = self.steady_state_gates(v)?;
        Ok(<T as Scalar>::from_f64(self.g_max) * self.open_fraction(&gates)?)
    }

    /// Ionic current `g (v - e_rev)` for the given gate values.
    pub fn current<T: Scalar>(&self, v: T, gate_values: &[T]) -> Result<T> {
        let g = <T as Scalar>::from_f64(self.g_max) * self.open_fraction(gate_values)?;
        Ok(g * (v - <T as Scalar>::from_f64(self.e_rev)))
    }

    /// Checks the conductance, reversal potential and every gate.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(KineticsError::invalid_parameter("channel name must not be empty"));
        }
        if !self.g_max.is_finite() || self.g_max < 0.0 {
            return Err(KineticsError::invalid_parameter(format!(
                "channel `{}` conductance must be finite and non-negative, got {}",
                self.name, self.g_max
            )));
        }
        if !self.e_rev.is_finite() {
            return Err(KineticsError::invalid_parameter(format!(
                "channel `{}` reversal potential must be finite, got {}",
                self.name, self.e_rev
            )));
        }

        let mut seen = HashSet::new();
        for gate in &self.gates {
            if !seen.insert(gate.name.as_str()) {
                return Err(KineticsError::invalid_parameter(format!(
                    "channel `{}` has duplicate gate `{}`",
                    self.name, gate.name
                )));
            }
            gate.validate()?;
        }
        Ok(())
    }
}

/// A named collection of channels sharing one membrane patch.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChannelSet {
    /// Channels, in insertion order
    pub channels: Vec<IonChannel>,
}

impl ChannelSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a channel.
    #[must_use]
    pub fn with_channel(mut self, channel: IonChannel) -> Self {
        self.channels.push(channel);
        self
    }

    /// Looks up a channel by name.
    pub fn get(&self, name: &str) -> Option<&IonChannel> {
        self.channels.iter().find(|channel| channel.name == name)
    }

    /// Iterates over the channels.
    pub fn iter(&self) -> std::slice::Iter<'_, IonChannel> {
        self.channels.iter()
    }

    /// Number of channels.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Whether the set holds no channel.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Total ionic current at `v` with every gate at its steady state.
    ///
    /// Zero at the resting potential of the membrane the set describes.
    pub fn steady_state_current<T>(&self, v: T) -> Result<T>
    where
        T: Scalar + RateArray<Elem = T>,
    {
        self.channels.iter().try_fold(T::zero(), |total, channel| {
            let g = channel.steady_state_conductance(v)?;
            Ok(total + g * (v - <T as Scalar>::from_f64(channel.e_rev)))
        })
    }

    /// Checks every channel and that channel names are unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for channel in &self.channels {
            if !seen.insert(channel.name.as_str()) {
                return Err(KineticsError::invalid_parameter(format!(
                    "duplicate channel `{}`",
                    channel.name
                )));
            }
            channel.validate()?;
        }
        Ok(())
    }

    /// Reads and validates a channel set from JSON.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let set: Self =
            serde_json::from_str(json).map_err(|e| KineticsError::config(e.to_string()))?;
        set.validate()?;
        Ok(set)
    }

    /// Writes the channel set as pretty-printed JSON.
    #[cfg(feature = "serde")]
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| KineticsError::config(e.to_string()))
    }
}

impl<'a> IntoIterator for &'a ChannelSet {
    type Item = &'a IonChannel;
    type IntoIter = std::slice::Iter<'a, IonChannel>;

    fn into_iter(self) -> Self::IntoIter {
        self.channels.iter()
    }
}
