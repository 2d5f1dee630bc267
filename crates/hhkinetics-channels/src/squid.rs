//! Squid giant axon kinetics (Hodgkin & Huxley, 1952).
//!
//! Voltages use the modern convention with the resting potential at -65 mV.
//! Rates are in 1/ms at 6.3 °C; use [`Temperature::squid`](crate::gate::Temperature::squid)
//! to evaluate them at another temperature.

use crate::channel::{ChannelSet, IonChannel};
use crate::gate::Gate;
use crate::rate::RateFunction;

/// Resting membrane potential (mV).
pub const RESTING_POTENTIAL: f64 = -65.0;

/// Sodium reversal potential (mV).
pub const E_NA: f64 = 50.0;
/// Potassium reversal potential (mV).
pub const E_K: f64 = -77.0;
/// Leak reversal potential (mV), chosen so that the total current vanishes at rest.
pub const E_LEAK: f64 = -54.387;

/// Maximal sodium conductance (mS/cm²).
pub const G_NA: f64 = 120.0;
/// Maximal potassium conductance (mS/cm²).
pub const G_K: f64 = 36.0;
/// Leak conductance (mS/cm²).
pub const G_LEAK: f64 = 0.3;

/// Sodium activation opening rate, `0.1 (V+40) / (1 - exp(-(V+40)/10))`.
pub const ALPHA_M: RateFunction = RateFunction::LinearExponential {
    a: 0.1,
    b: 40.0,
    c: 10.0,
};
/// Sodium activation closing rate, `4 exp(-(V+65)/18)`.
pub const BETA_M: RateFunction = RateFunction::Exponential {
    a: 4.0,
    b: 65.0,
    c: 18.0,
};
/// Sodium inactivation opening rate, `0.07 exp(-(V+65)/20)`.
pub const ALPHA_H: RateFunction = RateFunction::Exponential {
    a: 0.07,
    b: 65.0,
    c: 20.0,
};
/// Sodium inactivation closing rate, `1 / (1 + exp(-(V+35)/10))`.
pub const BETA_H: RateFunction = RateFunction::Sigmoid {
    a: 1.0,
    b: 35.0,
    c: 10.0,
};
/// Potassium activation opening rate, `0.01 (V+55) / (1 - exp(-(V+55)/10))`.
pub const ALPHA_N: RateFunction = RateFunction::LinearExponential {
    a: 0.01,
    b: 55.0,
    c: 10.0,
};
/// Potassium activation closing rate, `0.125 exp(-(V+65)/80)`.
pub const BETA_N: RateFunction = RateFunction::Exponential {
    a: 0.125,
    b: 65.0,
    c: 80.0,
};

/// Sodium activation gate `m` (power 3).
pub fn m_gate() -> Gate {
    Gate::new("m", 3, ALPHA_M, BETA_M)
}

/// Sodium inactivation gate `h` (power 1).
pub fn h_gate() -> Gate {
    Gate::new("h", 1, ALPHA_H, BETA_H)
}

/// Potassium activation gate `n` (power 4).
pub fn n_gate() -> Gate {
    Gate::new("n", 4, ALPHA_N, BETA_N)
}

/// Fast sodium channel, `g_Na m^3 h`.
pub fn sodium_channel() -> IonChannel {
    IonChannel::new("na", G_NA, E_NA)
        .with_gate(m_gate())
        .with_gate(h_gate())
}

/// Delayed rectifier potassium channel, `g_K n^4`.
pub fn potassium_channel() -> IonChannel {
    IonChannel::new("k", G_K, E_K).with_gate(n_gate())
}

/// Ohmic leak.
pub fn leak_channel() -> IonChannel {
    IonChannel::new("leak", G_LEAK, E_LEAK)
}

/// The three channels of the squid giant axon membrane.
pub fn squid_axon() -> ChannelSet {
    ChannelSet::new()
        .with_channel(sodium_channel())
        .with_channel(potassium_channel())
        .with_channel(leak_channel())
}
