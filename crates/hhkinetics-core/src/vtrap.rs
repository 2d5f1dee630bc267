//! Numerically stable evaluation of `x / (exp(x/y) - 1)`.
//!
//! The expression appears in the linear-exponential rate functions of
//! Hodgkin-Huxley channels (for instance `alpha_m = 0.1 (V+40) / (1 - exp(-(V+40)/10))`).
//! At `x = 0` it is `0/0` in floating point although its limit is `y`. Inside
//! the band `|x/y| < 1e-6` the first-order Taylor expansion `y (1 - x/y/2)` is
//! returned instead.
//!
//! The match between the two branches at the crossover is first order only.
//! Outside that, no special handling is done: `y == 0` or an overflowing `exp`
//! produce `inf`/`nan` exactly as IEEE-754 dictates.

use crate::array::RateArray;
use crate::error::Result;
use crate::types::{constants::vtrap_threshold, Scalar};

/// Evaluates `x / (exp(x/y) - 1)` for a single value.
///
/// # Example
///
/// ```
/// use hhkinetics_core::vtrap;
///
/// // Limit at the singularity is y
/// assert_eq!(vtrap(0.0_f64, 10.0), 10.0);
///
/// let exact = 5.0 / ((5.0_f64 / 10.0).exp() - 1.0);
/// assert_eq!(vtrap(5.0_f64, 10.0), exact);
/// ```
#[inline]
pub fn vtrap<T: Scalar>(x: T, y: T) -> T {
    let ratio = x / y;
    if ratio.abs() < vtrap_threshold::<T>() {
        y * (T::one() - ratio / <T as Scalar>::from_f64(2.0))
    } else {
        x / (ratio.exp() - T::one())
    }
}

/// Evaluates [`vtrap`] over every element of `x` with a shared `y`.
///
/// Each element takes the same branch it would take through the scalar path,
/// so `vtrap_array(x, y)[i] == vtrap(x[i], y)` bit for bit.
pub fn vtrap_array<V: RateArray>(x: &V, y: V::Elem) -> V {
    x.map_rate(|xi| vtrap(xi, y))
}

/// Evaluates [`vtrap`] pairing `x[i]` with `y[i]`.
///
/// Both arrays must have the same shape; otherwise
/// [`KineticsError::ShapeMismatch`](crate::error::KineticsError::ShapeMismatch)
/// is returned.
pub fn vtrap_elementwise<V: RateArray>(x: &V, y: &V) -> Result<V> {
    x.zip_rate(y, vtrap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KineticsError;
    use crate::types::{DMatrix, DVector};
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_branch() {
        let (x, y) = (-25.0_f64, 10.0);
        assert_eq!(vtrap(x, y), x / ((x / y).exp() - 1.0));
    }

    #[test]
    fn test_linear_branch() {
        let (x, y) = (3e-6_f64, 10.0);
        assert_eq!(vtrap(x, y), y * (1.0 - x / y / 2.0));
    }

    #[test]
    fn test_zero_returns_limit() {
        assert_eq!(vtrap(0.0_f64, 10.0), 10.0);
        assert_eq!(vtrap(0.0_f64, -7.5), -7.5);
        assert_eq!(vtrap(0.0_f32, 4.0), 4.0);
    }

    #[test]
    fn test_threshold_boundary_is_continuous() {
        for &y in &[10.0_f64, 1.0, -18.0, 0.25] {
            let just_inside = vtrap(0.999_999e-6 * y, y);
            let just_outside = vtrap(1.000_001e-6 * y, y);
            assert_relative_eq!(just_inside, y, max_relative = 0.01);
            assert_relative_eq!(just_outside, y, max_relative = 0.01);
        }
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // |x/y| == 1e-6 takes the exact branch
        let y = 1.0_f64;
        let x = 1e-6_f64;
        assert_eq!(vtrap(x, y), x / (x.exp() - 1.0));
    }

    #[test]
    fn test_ieee_edge_cases() {
        assert!(vtrap(0.0_f64, 0.0).is_nan());
        assert_eq!(vtrap(1.0_f64, 0.0), 0.0);
        assert_eq!(vtrap(-1.0_f64, 0.0), 1.0);
        assert_eq!(vtrap(1000.0_f64, 1.0), 0.0);
        assert_eq!(vtrap(-1000.0_f64, 1.0), 1000.0);
        assert!(vtrap(f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn test_single_precision() {
        let x = -12.5_f32;
        let y = 10.0_f32;
        assert_relative_eq!(vtrap(x, y), x / ((x / y).exp() - 1.0), max_relative = 1e-6);
    }

    #[test]
    fn test_array_mixes_both_branches() {
        let x = DVector::from_vec(vec![-20.0_f64, 0.0, 1e-7, 5.0]);
        let z = vtrap_array(&x, 10.0);
        assert_eq!(z.len(), 4);
        for i in 0..x.len() {
            assert_eq!(z[i], vtrap(x[i], 10.0));
        }
        assert_eq!(z[1], 10.0);
    }

    #[test]
    fn test_array_keeps_matrix_shape() {
        let x = DMatrix::from_fn(3, 4, |i, j| (i as f64) - (j as f64) * 2.5);
        let z = vtrap_array(&x, -4.0);
        assert_eq!(z.shape(), (3, 4));
        assert_eq!(z[(0, 0)], -4.0);
    }

    #[test]
    fn test_vec_input() {
        let x = vec![1.0_f64, -1.0, 0.0];
        let z = vtrap_array(&x, 2.0);
        assert_eq!(z, vec![vtrap(1.0, 2.0), vtrap(-1.0, 2.0), 2.0]);
    }

    #[test]
    fn test_elementwise_pairs_slopes() {
        let x = DVector::from_vec(vec![0.0_f64, 5.0, -5.0]);
        let y = DVector::from_vec(vec![3.0_f64, 10.0, 18.0]);
        let z = vtrap_elementwise(&x, &y).unwrap();
        assert_eq!(z[0], 3.0);
        assert_eq!(z[1], vtrap(5.0, 10.0));
        assert_eq!(z[2], vtrap(-5.0, 18.0));
    }

    #[test]
    fn test_elementwise_shape_mismatch() {
        let x = DVector::from_vec(vec![0.0_f64, 5.0, -5.0]);
        let y = DVector::from_vec(vec![3.0_f64, 10.0]);
        let err = vtrap_elementwise(&x, &y).unwrap_err();
        assert_eq!(err, KineticsError::shape_mismatch((3, 1), (2, 1)));
    }
}
