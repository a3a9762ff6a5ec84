use alloc::vec::Vec;
use core::str::FromStr;

use tracing::{debug, warn};

use crate::dynmatrix::DynMatrix;
use crate::traits::FloatScalar;

use super::{check_samples, find_segment, validate_sorted, InterpError, Interpolator, Samples};

/// Condition imposed on the two end knots of a cubic spline.
///
/// Only `Natural` and `Clamped` can be fitted. The other variants parse so
/// that option strings round-trip, but fitting with them fails with
/// [`InterpError::InvalidBoundaryCondition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryConstraint {
    /// `S''(x_0) = S''(x_{N-1}) = 0`.
    #[default]
    Natural,
    /// Prescribed first derivatives at both ends.
    Clamped,
    /// Third-derivative continuity at the second and penultimate knots.
    NotAKnot,
    /// Matching first and second derivatives at both ends. Parses but does not fit.
    Periodic,
    /// Quadratic end segments (`d_0 = d_{N-2} = 0`). Parses but does not fit.
    Quadratic,
}

impl BoundaryConstraint {
    /// Whether a spline can be fitted with this constraint.
    pub fn is_supported(self) -> bool {
        matches!(self, BoundaryConstraint::Natural | BoundaryConstraint::Clamped)
    }
}

impl FromStr for BoundaryConstraint {
    type Err = InterpError;

    /// Case-insensitive: `natural`, `clamped`, `not_a_knot`, `periodic`, `quadratic`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let known = [
            ("NATURAL", BoundaryConstraint::Natural),
            ("CLAMPED", BoundaryConstraint::Clamped),
            ("NOT_A_KNOT", BoundaryConstraint::NotAKnot),
            ("PERIODIC", BoundaryConstraint::Periodic),
            ("QUADRATIC", BoundaryConstraint::Quadratic),
        ];
        known
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, bc)| bc)
            .ok_or(InterpError::InvalidBoundaryCondition)
    }
}

/// Piecewise cubic interpolant with C² continuity at interior knots.
///
/// Fitting solves an N×N system for the coefficients `c_i = S''(x_i)/2`:
/// interior rows enforce
/// `h_{i-1}·c_{i-1} + 2(h_{i-1}+h_i)·c_i + h_i·c_{i+1} = 3(f_i - f_{i-1})`
/// (`h_i = x_{i+1} - x_i`, `f_i = (y_{i+1} - y_i)/h_i`) and the first and last
/// rows come from the [`BoundaryConstraint`]. Each segment then stores
/// `[a, b, c, d]` for
/// `S_i(x) = a + b·(x - x_i) + c·(x - x_i)² + d·(x - x_i)³`.
///
/// Requires at least 3 strictly increasing abscissas.
///
/// # Example
///
/// ```
/// use tabinterp::interp::{BoundaryConstraint, CubicSplineInterpolator, Interpolator};
///
/// let xs = [0.0_f64, 1.0, 2.0, 3.0];
/// let ys = [0.0, 1.0, 0.0, 1.0];
///
/// let mut spline = CubicSplineInterpolator::with_clamped_values(
///     BoundaryConstraint::Clamped, 1.0, -1.0,
/// );
/// spline.fit(&xs, &ys).unwrap();
///
/// assert!((spline.eval(2.0).unwrap() - 0.0).abs() < 1e-14);
/// let (_, slope) = spline.eval_derivative(0.0).unwrap();
/// assert!((slope - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSplineInterpolator<T> {
    boundary: BoundaryConstraint,
    clamped: (T, T),
    samples: Samples<T>,
    // c_i for every knot, including c_{N-1} which has no segment of its own
    knot_c: Vec<T>,
    coeffs: Vec<[T; 4]>,
}

impl<T: FloatScalar> CubicSplineInterpolator<T> {
    /// An unfitted spline with natural boundary conditions.
    pub fn new() -> Self {
        Self::with_boundary(BoundaryConstraint::Natural)
    }

    /// An unfitted spline with the given boundary condition.
    ///
    /// A `Clamped` spline built this way uses end slopes `(0, 0)` until
    /// [`set_clamped_values`](Self::set_clamped_values) is called.
    pub fn with_boundary(boundary: BoundaryConstraint) -> Self {
        if boundary == BoundaryConstraint::Clamped {
            warn!("clamped boundary without end slopes, using (0, 0); set them with set_clamped_values");
        }
        Self {
            boundary,
            clamped: (T::zero(), T::zero()),
            samples: Samples::empty(),
            knot_c: Vec::new(),
            coeffs: Vec::new(),
        }
    }

    /// An unfitted spline with the given boundary condition and end slopes.
    ///
    /// The slopes are ignored unless `boundary` is `Clamped`.
    pub fn with_clamped_values(boundary: BoundaryConstraint, low: T, high: T) -> Self {
        let mut spline = Self {
            boundary,
            clamped: (T::zero(), T::zero()),
            samples: Samples::empty(),
            knot_c: Vec::new(),
            coeffs: Vec::new(),
        };
        if boundary == BoundaryConstraint::Clamped {
            spline.clamped = (low, high);
        } else {
            warn!(?boundary, "end slopes given for a non-clamped boundary, ignoring them");
        }
        spline
    }

    /// Current boundary condition.
    pub fn boundary(&self) -> BoundaryConstraint {
        self.boundary
    }

    /// End slopes `(low, high)` used by a `Clamped` boundary.
    pub fn clamped_values(&self) -> (T, T) {
        self.clamped
    }

    /// Change the boundary condition.
    ///
    /// A fitted spline is refitted immediately. If that fails the spline is
    /// left unchanged and the error is returned.
    pub fn set_boundary(&mut self, boundary: BoundaryConstraint) -> Result<(), InterpError> {
        self.refit_with(boundary, self.clamped)
    }

    /// Set the end slopes used by a `Clamped` boundary.
    ///
    /// A fitted clamped spline is refitted immediately. For any other
    /// boundary the slopes are ignored with a warning, as in
    /// [`with_clamped_values`](Self::with_clamped_values).
    pub fn set_clamped_values(&mut self, low: T, high: T) -> Result<(), InterpError> {
        if self.boundary != BoundaryConstraint::Clamped {
            warn!(boundary = ?self.boundary, "end slopes given for a non-clamped boundary, ignoring them");
            return Ok(());
        }
        self.refit_with(self.boundary, (low, high))
    }

    fn refit_with(&mut self, boundary: BoundaryConstraint, clamped: (T, T)) -> Result<(), InterpError> {
        if self.samples.len() > 0 {
            let (knot_c, coeffs) = solve_coefficients(self.samples.xs(), self.samples.ys(), boundary, clamped)?;
            self.knot_c = knot_c;
            self.coeffs = coeffs;
        }
        self.boundary = boundary;
        self.clamped = clamped;
        Ok(())
    }

    /// Per-segment coefficients `[a, b, c, d]`, one row per segment.
    pub fn coefficients(&self) -> &[[T; 4]] {
        &self.coeffs
    }

    /// `c_i = S''(x_i)/2` at every knot, `N` values.
    pub fn second_derivative_coefficients(&self) -> &[T] {
        &self.knot_c
    }

    /// Index `i` of the segment `[x_i, x_{i+1})` containing `x`.
    ///
    /// `x_max` belongs to the last segment. Fails with `Extrapolation` outside
    /// the fitted domain.
    pub fn segment_index(&self, x: T) -> Result<usize, InterpError> {
        let domain = self.samples.domain()?;
        domain.check(x)?;
        Ok(find_segment(self.samples.xs(), &domain, x))
    }

    fn segment(&self, x: T) -> Result<(T, [T; 4]), InterpError> {
        let i = self.segment_index(x)?;
        Ok((x - self.samples.xs()[i], self.coeffs[i]))
    }

    /// Evaluate the spline and its first derivative at `x`.
    pub fn eval_derivative(&self, x: T) -> Result<(T, T), InterpError> {
        let (dx, [a, b, c, d]) = self.segment(x)?;
        let two = T::one() + T::one();
        let three = two + T::one();
        let val = a + dx * (b + dx * (c + dx * d));
        let dval = b + dx * (two * c + three * d * dx);
        Ok((val, dval))
    }

    /// Second derivative `2c + 6d·dx` at `x`.
    pub fn eval_second_derivative(&self, x: T) -> Result<T, InterpError> {
        let (dx, [_, _, c, d]) = self.segment(x)?;
        let two = T::one() + T::one();
        let six = two + two + two;
        Ok(two * c + six * d * dx)
    }
}

impl<T: FloatScalar> Default for CubicSplineInterpolator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatScalar> Interpolator<T> for CubicSplineInterpolator<T> {
    fn name(&self) -> &'static str {
        "cubic_spline"
    }

    fn fit(&mut self, xs: &[T], ys: &[T]) -> Result<(), InterpError> {
        check_samples(xs, ys, 3)?;
        validate_sorted(xs)?;
        let (knot_c, coeffs) = solve_coefficients(xs, ys, self.boundary, self.clamped)?;
        self.samples = Samples::new(xs.to_vec(), ys.to_vec());
        self.knot_c = knot_c;
        self.coeffs = coeffs;
        debug!(
            n = xs.len(),
            boundary = ?self.boundary,
            domain = ?self.samples.domain().ok(),
            "fitted cubic spline"
        );
        Ok(())
    }

    fn eval(&self, x: T) -> Result<T, InterpError> {
        let (dx, [a, b, c, d]) = self.segment(x)?;
        // Horner form: a + dx·(b + dx·(c + dx·d))
        Ok(a + dx * (b + dx * (c + dx * d)))
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

/// Assemble and solve the spline system.
///
/// Returns the `N` knot coefficients `c_i` and the `N-1` segment rows.
/// `xs` must be strictly increasing with `N >= 3`.
fn solve_coefficients<T: FloatScalar>(
    xs: &[T],
    ys: &[T],
    boundary: BoundaryConstraint,
    (s_lo, s_hi): (T, T),
) -> Result<(Vec<T>, Vec<[T; 4]>), InterpError> {
    if !boundary.is_supported() {
        return Err(InterpError::InvalidBoundaryCondition);
    }

    let n = xs.len();
    let two = T::one() + T::one();
    let three = two + T::one();

    let h: Vec<T> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let f: Vec<T> = ys
        .windows(2)
        .zip(&h)
        .map(|(w, &hi)| (w[1] - w[0]) / hi)
        .collect();

    let mut a = DynMatrix::<T>::zeros(n, n);
    let mut v = alloc::vec![T::zero(); n];

    for i in 1..n - 1 {
        a[(i, i - 1)] = h[i - 1];
        a[(i, i)] = two * (h[i - 1] + h[i]);
        a[(i, i + 1)] = h[i];
        v[i] = three * (f[i] - f[i - 1]);
    }

    match boundary {
        BoundaryConstraint::Natural => {
            a[(0, 0)] = T::one();
            a[(n - 1, n - 1)] = T::one();
        }
        BoundaryConstraint::Clamped => {
            a[(0, 0)] = two * h[0];
            a[(0, 1)] = h[0];
            v[0] = three * (f[0] - s_lo);
            a[(n - 1, n - 2)] = h[n - 2];
            a[(n - 1, n - 1)] = two * h[n - 2];
            v[n - 1] = three * (s_hi - f[n - 2]);
        }
        _ => return Err(InterpError::InvalidBoundaryCondition),
    }

    let c = a.solve(&v)?;

    let coeffs = (0..n - 1)
        .map(|i| {
            let b = f[i] - h[i] * (two * c[i] + c[i + 1]) / three;
            let d = (c[i + 1] - c[i]) / (three * h[i]);
            [ys[i], b, c[i], d]
        })
        .collect();

    Ok((c, coeffs))
}
