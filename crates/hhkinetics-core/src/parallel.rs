//! Parallel bulk evaluation over voltage grids.
//!
//! This module provides rayon-backed versions of [`vtrap`](crate::vtrap()) and
//! [`coeffs`](crate::coeffs()) for large slices, such as lookup tables sampled
//! over the whole voltage range. Results are identical to the sequential
//! functions and come back in input order.

use crate::types::Scalar;
use crate::vtrap::vtrap;
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for parallel execution.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParallelConfig {
    /// Minimum slice length to trigger parallel execution
    pub min_len_for_parallel: usize,
    /// Minimum number of elements handed to one rayon task
    pub chunk_size: Option<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            min_len_for_parallel: 4096,
            chunk_size: None,
        }
    }
}

impl ParallelConfig {
    /// Create a new parallel configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum slice length for parallel execution.
    pub const fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len_for_parallel = min_len;
        self
    }

    /// Set the chunk size for parallel iterations.
    pub const fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = Some(size);
        self
    }

    /// Check if parallel execution should be used for a slice of `len` elements.
    pub const fn should_parallelize(&self, len: usize) -> bool {
        len >= self.min_len_for_parallel
    }

    fn min_task_len(&self) -> usize {
        self.chunk_size.unwrap_or(1).max(1)
    }
}

/// Evaluates [`vtrap`] on every element of `x` with a shared `y`.
pub fn par_vtrap<T: Scalar>(x: &[T], y: T, config: &ParallelConfig) -> Vec<T> {
    if !config.should_parallelize(x.len()) {
        return x.iter().map(|&xi| vtrap(xi, y)).collect();
    }

    x.par_iter()
        .with_min_len(config.min_task_len())
        .map(|&xi| vtrap(xi, y))
        .collect()
}

/// Computes `(x_inf, tau_x)` for every voltage in `v`.
///
/// The rate functions take a single voltage; the formula is the one used by
/// [`coeffs`](crate::coeffs()), so each entry equals the scalar result.
pub fn par_coeffs<T, A, B>(
    v: &[T],
    alpha_fun: A,
    beta_fun: B,
    config: &ParallelConfig,
) -> (Vec<T>, Vec<T>)
where
    T: Scalar,
    A: Fn(T) -> T + Sync,
    B: Fn(T) -> T + Sync,
{
    let gate = |vi: T| {
        let a = alpha_fun(vi);
        let total = a + beta_fun(vi);
        (a / total, T::one() / total)
    };

    if !config.should_parallelize(v.len()) {
        return v.iter().map(|&vi| gate(vi)).unzip();
    }

    v.par_iter()
        .with_min_len(config.min_task_len())
        .map(|&vi| gate(vi))
        .unzip()
}
