//! Synthetic sample generation: uniform and Chebyshev grids, polynomial and
//! damped-cosine test signals.
//!
//! Generated tables are `N×2` [`DynMatrix`] values with abscissas in column 0
//! and ordinates in column 1, ready for
//! [`Interpolator::fit_matrix`](crate::interp::Interpolator::fit_matrix) with `y_col = 1`.
//!
//! ```
//! use tabinterp::datagen::{polynomial_samples, PointGeneration};
//!
//! // y = 1 + x² on 5 Chebyshev points in [-1, 1]
//! let table = polynomial_samples(&[1.0_f64, 0.0, 1.0], (-1.0, 1.0), 5, PointGeneration::Chebyshev);
//! assert_eq!(table.nrows(), 5);
//! ```

use alloc::vec::Vec;

use crate::dynmatrix::DynMatrix;
use crate::traits::FloatScalar;

/// How abscissas are distributed over a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointGeneration {
    /// Evenly spaced, endpoints included.
    Uniform,
    /// Chebyshev nodes of the first kind, endpoints excluded.
    Chebyshev,
}

/// `n` evenly spaced points from `a` to `b` inclusive.
///
/// `n = 1` yields `[a]`; `n = 0` yields an empty vector.
pub fn linspace<T: FloatScalar>(a: T, b: T, n: usize) -> Vec<T> {
    match n {
        0 => Vec::new(),
        1 => alloc::vec![a],
        _ => {
            let last = T::from(n - 1).unwrap_or_else(T::one);
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        b
                    } else {
                        a + (b - a) * T::from(i).unwrap_or_else(T::zero) / last
                    }
                })
                .collect()
        }
    }
}

/// `n` Chebyshev nodes on `[a, b]`, in ascending order:
/// `(a+b)/2 + (b-a)/2 · cos(π(2i+1)/(2n))`.
///
/// Clustering the nodes towards the ends suppresses Runge oscillation in
/// high-degree polynomial interpolation.
pub fn chebyshev_points<T: FloatScalar>(a: T, b: T, n: usize) -> Vec<T> {
    let two = T::one() + T::one();
    let mid = (a + b) / two;
    let half = (b - a) / two;
    let denom = two * T::from(n).unwrap_or_else(T::one);
    let pi = T::from(core::f64::consts::PI).unwrap_or_else(|| (-T::one()).acos());
    // Descending cosines for i = 0..n, so walk i backwards
    (0..n)
        .rev()
        .map(|i| {
            let k = two * T::from(i).unwrap_or_else(T::zero) + T::one();
            mid + half * (pi * k / denom).cos()
        })
        .collect()
}

/// `n` abscissas on `range` distributed according to `pg`.
pub fn generate_points<T: FloatScalar>(range: (T, T), n: usize, pg: PointGeneration) -> Vec<T> {
    match pg {
        PointGeneration::Uniform => linspace(range.0, range.1, n),
        PointGeneration::Chebyshev => chebyshev_points(range.0, range.1, n),
    }
}

/// Evaluate `Σ coeffs[k]·x^k` at every `x` (Horner).
pub fn polynomial<T: FloatScalar>(xs: &[T], coeffs: &[T]) -> Vec<T> {
    xs.iter()
        .map(|&x| coeffs.iter().rev().fold(T::zero(), |acc, &c| acc * x + c))
        .collect()
}

/// `a·exp(-b·x²)·cos(c·x)` at every `x`.
pub fn damped_cosine<T: FloatScalar>(xs: &[T], a: T, b: T, c: T) -> Vec<T> {
    xs.iter()
        .map(|&x| a * (-b * x * x).exp() * (c * x).cos())
        .collect()
}

/// `N×2` table of a polynomial sampled on `range`.
pub fn polynomial_samples<T: FloatScalar>(
    coeffs: &[T],
    range: (T, T),
    n: usize,
    pg: PointGeneration,
) -> DynMatrix<T> {
    let xs = generate_points(range, n, pg);
    let ys = polynomial(&xs, coeffs);
    DynMatrix::from_columns(&[&xs, &ys])
}

/// `N×2` table of a damped cosine `(a, b, c)` sampled on `range`.
pub fn damped_cosine_samples<T: FloatScalar>(
    (a, b, c): (T, T, T),
    range: (T, T),
    n: usize,
    pg: PointGeneration,
) -> DynMatrix<T> {
    let xs = generate_points(range, n, pg);
    let ys = damped_cosine(&xs, a, b, c);
    DynMatrix::from_columns(&[&xs, &ys])
}
