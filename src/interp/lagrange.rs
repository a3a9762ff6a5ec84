use tracing::debug;

use crate::traits::FloatScalar;

use super::{check_distinct, check_samples, InterpError, Interpolator, Samples};

/// Classical Lagrange interpolant.
///
/// Stores only the samples; every query rebuilds the basis polynomials
/// `l_i(x) = Π_{j≠i} (x - x_j)/(x_i - x_j)` from scratch, so evaluation is
/// O(N²). Prefer [`BarycentricInterpolator`](super::BarycentricInterpolator)
/// for repeated queries; this type exists as the textbook reference.
///
/// Duplicate abscissas are rejected at fit time with
/// [`InterpError::DivisionByZero`]. Requires at least 2 points.
///
/// # Example
///
/// ```
/// use tabinterp::interp::{Interpolator, LagrangeInterpolator};
///
/// // x² through 3 points is reproduced exactly
/// let mut interp = LagrangeInterpolator::new();
/// interp.fit(&[0.0_f64, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
/// assert!((interp.eval(1.5).unwrap() - 2.25).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LagrangeInterpolator<T> {
    samples: Samples<T>,
}

impl<T: FloatScalar> LagrangeInterpolator<T> {
    /// An unfitted interpolator.
    pub fn new() -> Self {
        Self {
            samples: Samples::empty(),
        }
    }

    /// Value of the `i`-th basis polynomial at `x`.
    fn basis(&self, i: usize, x: T) -> Result<T, InterpError> {
        let xs = self.samples.xs();
        let xi = xs[i];
        let mut l = T::one();
        for (j, &xj) in xs.iter().enumerate() {
            if j == i {
                continue;
            }
            let denom = xi - xj;
            if denom == T::zero() {
                return Err(InterpError::DivisionByZero);
            }
            l = l * (x - xj) / denom;
        }
        Ok(l)
    }
}

impl<T: FloatScalar> Default for LagrangeInterpolator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatScalar> Interpolator<T> for LagrangeInterpolator<T> {
    fn name(&self) -> &'static str {
        "lagrange"
    }

    fn fit(&mut self, xs: &[T], ys: &[T]) -> Result<(), InterpError> {
        check_samples(xs, ys, 2)?;
        check_distinct(xs)?;
        self.samples = Samples::new(xs.to_vec(), ys.to_vec());
        debug!(n = xs.len(), domain = ?self.samples.domain().ok(), "fitted lagrange interpolator");
        Ok(())
    }

    fn eval(&self, x: T) -> Result<T, InterpError> {
        self.samples.domain()?.check(x)?;
        let mut y = T::zero();
        for (i, &yi) in self.samples.ys().iter().enumerate() {
            y = y + yi * self.basis(i, x)?;
        }
        Ok(y)
    }

    fn sample_x(&self) -> &[T] {
        self.samples.xs()
    }

    fn sample_y(&self) -> &[T] {
        self.samples.ys()
    }

    fn domain(&self) -> Result<(T, T), InterpError> {
        let d = self.samples.domain()?;
        Ok((d.min, d.max))
    }
}
