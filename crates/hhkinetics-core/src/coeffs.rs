//! Steady state and time constant of a two-state gate.
//!
//! For a gate with opening rate `alpha(V)` and closing rate `beta(V)`:
//!
//! ```text
//! x_inf = alpha / (alpha + beta)
//! tau_x = 1 / (alpha + beta)
//! ```
//!
//! `alpha + beta == 0` is not special-cased.

use crate::array::RateArray;
use crate::error::Result;
use num_traits::One;

/// Converts a pair of rate functions into `(x_inf, tau_x)` at voltage `v`.
///
/// `v` can be a scalar or any [`RateArray`]; the rate functions receive it by
/// reference and must return a value of the same type. Both outputs have the
/// shape of the rate values. An error is only possible when the two rate
/// functions disagree on the shape they return.
///
/// # Example
///
/// ```
/// use hhkinetics_core::coeffs;
///
/// let (x_inf, tau) = coeffs(&-65.0_f64, |_| 0.1, |_| 0.4).unwrap();
/// assert!((x_inf - 0.2).abs() < 1e-15);
/// assert!((tau - 2.0).abs() < 1e-15);
/// ```
pub fn coeffs<V, A, B>(v: &V, alpha_fun: A, beta_fun: B) -> Result<(V, V)>
where
    V: RateArray,
    A: Fn(&V) -> V,
    B: Fn(&V) -> V,
{
    let a = alpha_fun(v);
    let b = beta_fun(v);
    let total = a.zip_rate(&b, |a, b| a + b)?;
    let steady_state = a.zip_rate(&total, |a, sum| a / sum)?;
    let time_constant = total.map_rate(|sum| <V::Elem as One>::one() / sum);
    Ok((steady_state, time_constant))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KineticsError;
    use crate::types::DVector;
    use crate::vtrap::{vtrap, vtrap_array};
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_rates() {
        let (x_inf, tau) = coeffs(&0.0_f64, |_| 0.1, |_| 0.4).unwrap();
        assert_relative_eq!(x_inf, 0.2, epsilon = 1e-15);
        assert_relative_eq!(tau, 2.0, epsilon = 1e-15);
    }

    #[test]
    fn test_matches_formula() {
        let alpha = |v: &f64| 0.01 * vtrap(-(v + 55.0), 10.0);
        let beta = |v: &f64| 0.125 * (-(v + 65.0) / 80.0).exp();
        let v = -60.0;
        let (a, b) = (alpha(&v), beta(&v));
        let (x_inf, tau) = coeffs(&v, alpha, beta).unwrap();
        assert_eq!(x_inf, a / (a + b));
        assert_eq!(tau, 1.0 / (a + b));
    }

    #[test]
    fn test_zero_total_rate_is_not_trapped() {
        let (x_inf, tau) = coeffs(&1.0_f64, |_| 0.0, |_| 0.0).unwrap();
        assert!(x_inf.is_nan());
        assert_eq!(tau, f64::INFINITY);
    }

    #[test]
    fn test_vector_shape_preserved() {
        let v = DVector::from_vec(vec![-80.0_f64, -65.0, -55.0, -40.0, 0.0]);
        let (x_inf, tau) = coeffs(
            &v,
            |v| vtrap_array(&v.map(|vi| -(vi + 40.0)), 10.0) * 0.1,
            |v| v.map(|vi| 4.0 * (-(vi + 65.0) / 18.0).exp()),
        )
        .unwrap();
        assert_eq!(x_inf.len(), v.len());
        assert_eq!(tau.len(), v.len());
        for i in 0..v.len() {
            let (s, t) = coeffs(
                &v[i],
                |v| 0.1 * vtrap(-(v + 40.0), 10.0),
                |v| 4.0 * (-(v + 65.0) / 18.0).exp(),
            )
            .unwrap();
            assert_relative_eq!(x_inf[i], s, max_relative = 1e-14);
            assert_relative_eq!(tau[i], t, max_relative = 1e-14);
        }
    }

    #[test]
    fn test_mismatched_rate_shapes() {
        let v = vec![-65.0_f64, -40.0];
        let result = coeffs(&v, |v| v.clone(), |_| vec![1.0]);
        assert!(matches!(result, Err(KineticsError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_inputs_untouched() {
        let v = vec![-65.0_f64, -40.0];
        let before = v.clone();
        let _ = coeffs(&v, |v| v.map_rate(|x| x.abs()), |v| v.map_rate(|x| x * x));
        assert_eq!(v, before);
    }
}
