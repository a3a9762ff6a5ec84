//! Interpolation of tabulated 1-D data: Lagrange, barycentric and cubic spline.
//!
//! Every scheme implements the [`Interpolator`] trait: fit it once from a
//! sample table (or parallel `xs`/`ys` slices), then evaluate it anywhere
//! inside the fitted domain `[x_min, x_max]`. Queries outside the domain are
//! rejected with [`InterpError::Extrapolation`] instead of extrapolating.
//!
//! Only one independent dimension is supported. Multi-column inputs fail
//! with [`InterpError::MultidimensionalImplementation`].
//!
//! # Examples
//!
//! ```
//! use tabinterp::interp::{BarycentricInterpolator, Interpolator};
//!
//! let xs = [-2.0_f64, -1.0, 0.0, 1.0, 2.0];
//! let ys = xs.map(|x| x * x);
//! let mut interp = BarycentricInterpolator::new();
//! interp.fit(&xs, &ys).unwrap();
//! assert!((interp.eval(1.5).unwrap() - 2.25).abs() < 1e-12);
//! assert!(interp.eval(3.0).is_err());
//! ```

mod barycentric;
mod lagrange;
mod spline;


pub use barycentric::BarycentricInterpolator;
pub use lagrange::LagrangeInterpolator;
pub use spline::{BoundaryConstraint, CubicSplineInterpolator};

use alloc::vec::Vec;

use crate::dynmatrix::DynMatrix;
use crate::linalg::LinalgError;
use crate::traits::FloatScalar;

/// Errors from fitting and evaluating interpolants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InterpError {
    /// The dependent-variable column index is not a column of the table.
    IndexOutOfBounds { index: usize, max: usize },
    /// Two inputs that must agree in length (or column count) do not.
    SizeMismatch { expected: usize, actual: usize },
    /// More than one independent dimension was supplied to a 1-D scheme.
    MultidimensionalImplementation { dims: usize },
    /// Query point lies outside the fitted domain.
    Extrapolation { value: f64, min: f64, max: f64 },
    /// Duplicate abscissas produced a zero denominator.
    DivisionByZero,
    /// The sample element type is not supported by the scheme.
    InvalidType,
    /// Unknown or unimplemented spline boundary condition.
    InvalidBoundaryCondition,
    /// Not enough samples for the scheme.
    TooFewPoints { required: usize, actual: usize },
    /// Abscissas must be strictly increasing (cubic spline only).
    NotSorted,
    /// An abscissa is NaN or infinite.
    NonFinite,
    /// The interpolator was evaluated before `fit`.
    NotFitted,
    /// The spline's linear system could not be solved.
    Singular,
    /// Unknown interpolation scheme name.
    UnknownScheme,
    /// A scheme option token could not be parsed.
    InvalidOption,
}

impl core::fmt::Display for InterpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InterpError::IndexOutOfBounds { index, max } => write!(
                f,
                "interpolation index {index} is out of bounds, expected a value in [0, {max}]"
            ),
            InterpError::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
            InterpError::MultidimensionalImplementation { dims } => write!(
                f,
                "multidimensional data not supported: got {dims} independent dimensions"
            ),
            InterpError::Extrapolation { value, min, max } => write!(
                f,
                "cannot extrapolate: value {value} is out of range [{min}, {max}]"
            ),
            InterpError::DivisionByZero => {
                write!(f, "division by zero: duplicate abscissas in sample data")
            }
            InterpError::InvalidType => {
                write!(f, "sample element type not supported by this scheme")
            }
            InterpError::InvalidBoundaryCondition => {
                write!(f, "unknown or unsupported boundary condition")
            }
            InterpError::TooFewPoints { required, actual } => write!(
                f,
                "not enough data points for interpolation: need {required}, got {actual}"
            ),
            InterpError::NotSorted => write!(f, "x values must be strictly increasing"),
            InterpError::NonFinite => write!(f, "x values must be finite"),
            InterpError::NotFitted => write!(f, "interpolator has not been fitted"),
            InterpError::Singular => write!(f, "spline system is singular"),
            InterpError::UnknownScheme => write!(f, "unknown interpolation scheme"),
            InterpError::InvalidOption => write!(f, "invalid interpolation scheme option"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InterpError {}

impl From<LinalgError> for InterpError {
    fn from(e: LinalgError) -> Self {
        match e {
            LinalgError::Singular => InterpError::Singular,
        }
    }
}

/// Closed interval `[min, max]` spanned by the fitted abscissas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain<T> {
    pub min: T,
    pub max: T,
}

impl<T: FloatScalar> Domain<T> {
    /// Bounds of a non-empty slice; `None` when empty.
    pub fn of(xs: &[T]) -> Option<Self> {
        let (&first, rest) = xs.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((first, first), |(lo, hi), &x| (lo.min(x), hi.max(x)));
        Some(Self { min, max })
    }

    /// Whether `x` lies in `[min, max]`. NaN is never contained.
    #[inline]
    pub fn contains(&self, x: T) -> bool {
        x >= self.min && x <= self.max
    }

    /// `Ok` when `x` is inside the domain, `Extrapolation` otherwise.
    pub fn check(&self, x: T) -> Result<(), InterpError> {
        if self.contains(x) {
            Ok(())
        } else {
            Err(InterpError::Extrapolation {
                value: x.to_f64_lossy(),
                min: self.min.to_f64_lossy(),
                max: self.max.to_f64_lossy(),
            })
        }
    }

    /// `max - min`.
    #[inline]
    pub fn width(&self) -> T {
        self.max - self.min
    }
}

/// Owned sample set plus its cached domain.
///
/// Replaced wholesale on every fit, so the domain can never go stale.
#[derive(Debug, Clone)]
pub(crate) struct Samples<T> {
    xs: Vec<T>,
    ys: Vec<T>,
    domain: Option<Domain<T>>,
}

impl<T: FloatScalar> Samples<T> {
    pub(crate) fn empty() -> Self {
        Self {
            xs: Vec::new(),
            ys: Vec::new(),
            domain: None,
        }
    }

    pub(crate) fn new(xs: Vec<T>, ys: Vec<T>) -> Self {
        debug_assert_eq!(xs.len(), ys.len());
        let domain = Domain::of(&xs);
        Self { xs, ys, domain }
    }

    #[inline]
    pub(crate) fn xs(&self) -> &[T] {
        &self.xs
    }

    #[inline]
    pub(crate) fn ys(&self) -> &[T] {
        &self.ys
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.xs.len()
    }

    pub(crate) fn domain(&self) -> Result<Domain<T>, InterpError> {
        self.domain.ok_or(InterpError::NotFitted)
    }
}

/// Fit/evaluate contract shared by every interpolation scheme.
///
/// The trait is object safe, so heterogeneous schemes can be held as
/// `Box<dyn Interpolator<T>>` (see [`crate::factory`]).
pub trait Interpolator<T: FloatScalar> {
    /// Short scheme identifier (`"lagrange"`, `"barycentric"`, `"cubic_spline"`).
    fn name(&self) -> &'static str;

    /// Fit from parallel abscissa / ordinate slices.
    ///
    /// Replaces any previously fitted data and recomputes all derived state.
    fn fit(&mut self, xs: &[T], ys: &[T]) -> Result<(), InterpError>;

    /// Fit from an `N×2` sample table, using column `y_col` as the ordinates
    /// and the other column as the abscissas.
    fn fit_matrix(&mut self, table: &DynMatrix<T>, y_col: usize) -> Result<(), InterpError> {
        let (xs, ys) = split_table(table, y_col)?;
        self.fit(xs, ys)
    }

    /// Evaluate at a single point inside the fitted domain.
    fn eval(&self, x: T) -> Result<T, InterpError>;

    /// Evaluate element-wise. Fails on the first rejected point.
    fn eval_slice(&self, xs: &[T]) -> Result<Vec<T>, InterpError> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }

    /// Evaluate every row of an `N×1` query matrix.
    fn eval_matrix(&self, queries: &DynMatrix<T>) -> Result<Vec<T>, InterpError> {
        match queries.ncols() {
            1 => self.eval_slice(queries.col(0)),
            0 => Err(InterpError::SizeMismatch {
                expected: 1,
                actual: 0,
            }),
            dims => Err(InterpError::MultidimensionalImplementation { dims }),
        }
    }

    /// Fitted abscissas (empty before `fit`).
    fn sample_x(&self) -> &[T];

    /// Fitted ordinates (empty before `fit`).
    fn sample_y(&self) -> &[T];

    /// `(min, max)` of the fitted abscissas.
    fn domain(&self) -> Result<(T, T), InterpError>;

    /// Whether `fit` has completed successfully.
    fn is_fitted(&self) -> bool {
        self.domain().is_ok()
    }
}

/// Split an `N×(M+1)` table into `(xs, ys)` column slices.
///
/// Only `M = 1` is supported.
pub(crate) fn split_table<T>(table: &DynMatrix<T>, y_col: usize) -> Result<(&[T], &[T]), InterpError> {
    let ncols = table.ncols();
    if y_col >= ncols {
        return Err(InterpError::IndexOutOfBounds {
            index: y_col,
            max: ncols.saturating_sub(1),
        });
    }
    match ncols - 1 {
        1 => {
            let x_col = if y_col == 0 { 1 } else { 0 };
            Ok((table.col(x_col), table.col(y_col)))
        }
        0 => Err(InterpError::SizeMismatch {
            expected: 2,
            actual: 1,
        }),
        dims => Err(InterpError::MultidimensionalImplementation { dims }),
    }
}

/// Validate parallel slice lengths, the minimum sample count and that every
/// abscissa is finite.
pub(crate) fn check_samples<T: FloatScalar>(xs: &[T], ys: &[T], required: usize) -> Result<(), InterpError> {
    if xs.len() != ys.len() {
        return Err(InterpError::SizeMismatch {
            expected: xs.len(),
            actual: ys.len(),
        });
    }
    if xs.len() < required {
        return Err(InterpError::TooFewPoints {
            required,
            actual: xs.len(),
        });
    }
    if !xs.iter().all(|x| x.is_finite()) {
        return Err(InterpError::NonFinite);
    }
    Ok(())
}

/// Reject duplicate abscissas in O(N log N) on a sorted copy.
pub(crate) fn check_distinct<T: FloatScalar>(xs: &[T]) -> Result<(), InterpError> {
    let mut sorted = xs.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal));
    if sorted.windows(2).any(|w| w[0] == w[1]) {
        return Err(InterpError::DivisionByZero);
    }
    Ok(())
}

/// Validate that a slice is strictly increasing.
///
/// Repeated abscissas give a zero-width segment and are reported as
/// `DivisionByZero`; any decrease is `NotSorted`.
fn validate_sorted<T: FloatScalar>(xs: &[T]) -> Result<(), InterpError> {
    for i in 1..xs.len() {
        if xs[i] == xs[i - 1] {
            return Err(InterpError::DivisionByZero);
        }
        if !(xs[i] > xs[i - 1]) {
            return Err(InterpError::NotSorted);
        }
    }
    Ok(())
}

/// Locate the segment `i` with `xs[i] <= x < xs[i+1]` in a sorted slice.
///
/// Starts from the proportional guess `⌊(x - x_min)/(x_max - x_min) · N⌋`,
/// which is exact for uniform grids, then walks left or right. The result is
/// clamped to `[0, N-2]`, so `x = x_max` maps to the last segment. The caller
/// must have checked `x` against the domain.
fn find_segment<T: FloatScalar>(xs: &[T], domain: &Domain<T>, x: T) -> usize {
    debug_assert!(xs.len() >= 2);
    let last = xs.len() - 2;
    let n = T::from(xs.len()).unwrap_or_else(T::one);
    let guess = ((x - domain.min) / domain.width() * n).to_usize().unwrap_or(0);

    let mut idx = guess.min(last);
    loop {
        if x < xs[idx] {
            if idx == 0 {
                break;
            }
            idx -= 1;
        } else if x >= xs[idx + 1] {
            if idx == last {
                break;
            }
            idx += 1;
        } else {
            break;
        }
    }
    idx
}
