use alloc::vec::Vec;

use tracing::debug;

use crate::traits::FloatScalar;

use super::{check_samples, Domain, InterpError, Interpolator, Samples};

/// Barycentric Lagrange interpolant.
///
/// Precomputes the weights `w_i = 1 / Π_{j≠i}(x_i - x_j)` in O(N²) at fit
/// time, then evaluates in O(N) with the second barycentric form
///
/// `L(x) = (Σ w_i·y_i/(x - x_i)) / (Σ w_i/(x - x_i))`
///
/// The second form is invariant to a common factor in the weights, so every
/// difference is multiplied by the capacity factor `4/(x_max - x_min)` of the
/// fitted interval and the weights are then normalised to `max|w_i| = 1`.
/// This keeps them inside the floating-point range for hundreds of knots;
/// [`weights`](Self::weights) is therefore proportional to, not equal to,
/// the textbook `w_i`.
///
/// New samples can be appended with [`add_data`](Self::add_data) in
/// O(N·K) without recomputing every weight.
///
/// # Example
///
/// ```
/// use tabinterp::interp::{BarycentricInterpolator, Interpolator};
///
/// let xs = [0.0_f64, 1.0, 2.0];
/// let mut interp = BarycentricInterpolator::new();
/// interp.fit(&xs, &xs.map(|x| x * x)).unwrap();
///
/// interp.add_data(3.0, 9.0).unwrap();
/// assert_eq!(interp.domain().unwrap(), (0.0, 3.0));
/// assert!((interp.eval(2.5).unwrap() - 6.25).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct BarycentricInterpolator<T> {
    samples: Samples<T>,
    weights: Vec<T>,
    // Capacity factor applied to every difference, fixed at fit time
    scale: T,
    // Common factor divided out of the weights so far
    norm: T,
}

impl<T: FloatScalar> BarycentricInterpolator<T> {
    /// An unfitted interpolator.
    pub fn new() -> Self {
        Self {
            samples: Samples::empty(),
            weights: Vec::new(),
            scale: T::one(),
            norm: T::one(),
        }
    }

    /// Barycentric weights, one per sample, normalised to `max|w_i| = 1`.
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Append a single sample.
    pub fn add_data(&mut self, x: T, y: T) -> Result<(), InterpError> {
        self.add_data_slice(&[x], &[y])
    }

    /// Append `K` samples, updating the weights in O(N·K).
    ///
    /// Every existing weight is divided by `Π_k(x_i - x_new_k)` and each new
    /// weight is built over the combined sample set, both with the capacity
    /// factor and normalisation of the original fit so they stay comparable.
    /// The combined weights are then renormalised. The update is staged in
    /// fresh buffers and committed only when both phases succeed, so a
    /// duplicate abscissa (`DivisionByZero`) leaves the interpolator as it was.
    ///
    /// On an unfitted interpolator this is equivalent to [`fit`](Interpolator::fit).
    pub fn add_data_slice(&mut self, new_xs: &[T], new_ys: &[T]) -> Result<(), InterpError> {
        if self.samples.len() == 0 {
            return self.fit(new_xs, new_ys);
        }
        check_samples(new_xs, new_ys, 0)?;
        if new_xs.is_empty() {
            return Ok(());
        }

        let n = self.samples.len();
        let mut xs = Vec::with_capacity(n + new_xs.len());
        xs.extend_from_slice(self.samples.xs());
        xs.extend_from_slice(new_xs);
        let mut ys = Vec::with_capacity(n + new_ys.len());
        ys.extend_from_slice(self.samples.ys());
        ys.extend_from_slice(new_ys);

        let mut weights = Vec::with_capacity(xs.len());
        for (i, &w) in self.weights.iter().enumerate() {
            let mut w = w;
            for &xk in new_xs {
                let diff = xs[i] - xk;
                if diff == T::zero() {
                    return Err(InterpError::DivisionByZero);
                }
                w = w / (self.scale * diff);
            }
            weights.push(w);
        }
        for k in n..xs.len() {
            weights.push(weight(&xs, k, self.scale, self.norm)?);
        }
        let norm = self.norm / normalise(&mut weights);

        debug!(added = new_xs.len(), n = xs.len(), "extended barycentric interpolator");
        self.samples = Samples::new(xs, ys);
        self.weights = weights;
        self.norm = norm;
        Ok(())
    }

    /// Evaluate the interpolant and its derivative at `x`.
    ///
    /// Uses the quotient rule on the barycentric form; at a knot `x_j` the
    /// derivative is `-Σ_{k≠j} (w_k/w_j)·(y_j - y_k)/(x_j - x_k)`.
    pub fn eval_derivative(&self, x: T) -> Result<(T, T), InterpError> {
        self.samples.domain()?.check(x)?;
        let xs = self.samples.xs();
        let ys = self.samples.ys();
        let ws = &self.weights;

        if let Some(j) = xs.iter().position(|&xj| xj == x) {
            let mut deriv = T::zero();
            for k in 0..xs.len() {
                if k != j {
                    deriv = deriv - ws[k] / ws[j] * (ys[j] - ys[k]) / (xs[j] - xs[k]);
                }
            }
            return Ok((ys[j], deriv));
        }

        let mut n = T::zero();
        let mut d = T::zero();
        let mut np = T::zero();
        let mut dp = T::zero();
        for j in 0..xs.len() {
            let inv = T::one() / (x - xs[j]);
            let inv2 = inv * inv;
            let term = ws[j] * inv;
            n = n + term * ys[j];
            d = d + term;
            np = np - ws[j] * inv2 * ys[j];
            dp = dp - ws[j] * inv2;
        }
        Ok((n / d, (np * d - n * dp) / (d * d)))
    }
}

impl<T: FloatScalar> Default for BarycentricInterpolator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatScalar> Interpolator<T> for BarycentricInterpolator<T> {
    fn name(&self) -> &'static str {
        "barycentric"
    }

    fn fit(&mut self, xs: &[T], ys: &[T]) -> Result<(), InterpError> {
        check_samples(xs, ys, 2)?;
        let two = T::one() + T::one();
        let width = Domain::of(xs).map_or(T::one(), |d| d.width());
        let scale = (two + two) / width;
        let mut weights = (0..xs.len())
            .map(|i| weight(xs, i, scale, T::one()))
            .collect::<Result<Vec<_>, _>>()?;
        let norm = T::one() / normalise(&mut weights);
        self.samples = Samples::new(xs.to_vec(), ys.to_vec());
        self.weights = weights;
        self.scale = scale;
        self.norm = norm;
        debug!(n = xs.len(), domain = ?self.samples.domain().ok(), "fitted barycentric interpolator");
        Ok(())
    }

    fn eval(&self, x: T) -> Result<T, InterpError> {
        self.samples.domain()?.check(x)?;
        let xs = self.samples.xs();
        let ys = self.samples.ys();

        let mut numer = T::zero();
        let mut denom = T::zero();
        for j in 0..xs.len() {
            let diff = x - xs[j];
            if diff == T::zero() {
                return Ok(ys[j]);
            }
            let term = self.weights[j] / diff;
            numer = numer + term * ys[j];
            denom = denom + term;
        }
        Ok(numer / denom)
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

/// `norm / Π_{j≠i} scale·(x_i - x_j)`, accumulated by repeated division to
/// stay in range for larger N.
fn weight<T: FloatScalar>(xs: &[T], i: usize, scale: T, norm: T) -> Result<T, InterpError> {
    let mut w = norm;
    for (j, &xj) in xs.iter().enumerate() {
        if j == i {
            continue;
        }
        let diff = xs[i] - xj;
        if diff == T::zero() {
            return Err(InterpError::DivisionByZero);
        }
        w = w / (scale * diff);
    }
    Ok(w)
}

/// Divide the weights by `max|w_i|` and return that divisor.
///
/// Leaves the weights alone (and returns one) when the maximum is zero or
/// not finite.
fn normalise<T: FloatScalar>(weights: &mut [T]) -> T {
    let m = weights.iter().fold(T::zero(), |m, w| m.max(w.abs()));
    if m > T::zero() && m.is_finite() {
        for w in weights.iter_mut() {
            *w = *w / m;
        }
        m
    } else {
        T::one()
    }
}
