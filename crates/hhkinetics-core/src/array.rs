//! Uniform element-wise view over scalars and arrays.
//!
//! Rate expressions are written once against [`RateArray`] and work
//! unchanged on a single voltage, a `Vec` of voltages, or any owned nalgebra
//! matrix. Scalars behave as `1 x 1` arrays.

use crate::error::{KineticsError, Result};
use crate::types::Scalar;
use nalgebra::{allocator::Allocator, DefaultAllocator, Dim, OMatrix};

/// A value that rate functions can be applied to element by element.
pub trait RateArray: Sized {
    /// Element type.
    type Elem: Scalar;

    /// Shape as `(rows, cols)`. Scalars are `(1, 1)`, vectors `(len, 1)`.
    fn shape(&self) -> (usize, usize);

    /// Number of elements.
    fn num_elements(&self) -> usize {
        let (rows, cols) = self.shape();
        rows * cols
    }

    /// Applies `f` to every element, keeping the shape.
    fn map_rate<F>(&self, f: F) -> Self
    where
        F: FnMut(Self::Elem) -> Self::Elem;

    /// Combines two values of the same shape element by element.
    ///
    /// Returns [`KineticsError::ShapeMismatch`] when the shapes differ.
    fn zip_rate<F>(&self, other: &Self, f: F) -> Result<Self>
    where
        F: FnMut(Self::Elem, Self::Elem) -> Self::Elem;
}

macro_rules! impl_rate_array_for_scalar {
    ($($t:ty),*) => {
        $(
            impl RateArray for $t {
                type Elem = $t;

                fn shape(&self) -> (usize, usize) {
                    (1, 1)
                }

                fn map_rate<F>(&self, mut f: F) -> Self
                where
                    F: FnMut($t) -> $t,
                {
                    f(*self)
                }

                fn zip_rate<F>(&self, other: &Self, mut f: F) -> Result<Self>
                where
                    F: FnMut($t, $t) -> $t,
                {
                    Ok(f(*self, *other))
                }
            }
        )*
    };
}

impl_rate_array_for_scalar!(f32, f64);

impl<T: Scalar> RateArray for Vec<T> {
    type Elem = T;

    fn shape(&self) -> (usize, usize) {
        (self.len(), 1)
    }

    fn map_rate<F>(&self, mut f: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        self.iter().map(|&x| f(x)).collect()
    }

    fn zip_rate<F>(&self, other: &Self, mut f: F) -> Result<Self>
    where
        F: FnMut(T, T) -> T,
    {
        if self.len() != other.len() {
            return Err(KineticsError::shape_mismatch(
                RateArray::shape(self),
                RateArray::shape(other),
            ));
        }
        Ok(self.iter().zip(other).map(|(&a, &b)| f(a, b)).collect())
    }
}

impl<T, R, C> RateArray for OMatrix<T, R, C>
where
    T: Scalar,
    R: Dim,
    C: Dim,
    DefaultAllocator: Allocator<R, C>,
{
    type Elem = T;

    fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    fn map_rate<F>(&self, f: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        self.map(f)
    }

    fn zip_rate<F>(&self, other: &Self, f: F) -> Result<Self>
    where
        F: FnMut(T, T) -> T,
    {
        let (lhs, rhs) = (RateArray::shape(self), RateArray::shape(other));
        if lhs != rhs {
            return Err(KineticsError::shape_mismatch(lhs, rhs));
        }
        Ok(self.zip_map(other, f))
    }
}
