//! Build interpolators from scheme names and option tokens.
//!
//! This is the string-driven front door used by command-line or file-driven
//! callers: a scheme name (`lagrange`, `barycentric`, `cubic_spline`) plus
//! option tokens select and configure a boxed [`Interpolator`].
//!
//! Cubic spline options:
//!
//! | Tokens | Boundary |
//! |--------|----------|
//! | (none) | natural |
//! | `NATURAL` / `CLAMPED` / ... | that constraint, clamped slopes default to `(0, 0)` |
//! | `CLAMPED lo hi` | clamped with end slopes `lo`, `hi` |
//!
//! The polynomial schemes take no options; tokens passed to them are ignored.
//!
//! ```
//! use tabinterp::factory::{from_matrix, Scheme};
//! use tabinterp::DynMatrix;
//!
//! let xs = [0.0_f64, 1.0, 2.0, 3.0];
//! let ys = [0.0, 1.0, 8.0, 27.0];
//! let table = DynMatrix::from_columns(&[&xs, &ys]);
//!
//! let spline = from_matrix(Scheme::CubicSpline, &["clamped", "0", "27"], &table, 1).unwrap();
//! assert!((spline.eval(1.5).unwrap() - 3.375).abs() < 1e-12);
//! ```

use alloc::boxed::Box;
use core::str::FromStr;

use tracing::warn;

use crate::dynmatrix::DynMatrix;
use crate::interp::{
    BarycentricInterpolator, BoundaryConstraint, CubicSplineInterpolator, InterpError, Interpolator,
    LagrangeInterpolator,
};
use crate::traits::FloatScalar;

/// Interpolation scheme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Lagrange,
    Barycentric,
    CubicSpline,
}

impl Scheme {
    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Scheme::Lagrange => "lagrange",
            Scheme::Barycentric => "barycentric",
            Scheme::CubicSpline => "cubic_spline",
        }
    }

    /// Reject element types the scheme cannot work with.
    ///
    /// Integral samples are promoted to floating point for the polynomial
    /// schemes, but a cubic spline's coefficients are not representable in an
    /// integral type, so it refuses them with `InvalidType`.
    pub fn check_sample_type(self, ty: SampleType) -> Result<(), InterpError> {
        match (self, ty) {
            (Scheme::CubicSpline, SampleType::Integer) => Err(InterpError::InvalidType),
            _ => Ok(()),
        }
    }
}

impl FromStr for Scheme {
    type Err = InterpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        [Scheme::Lagrange, Scheme::Barycentric, Scheme::CubicSpline]
            .into_iter()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(s))
            .ok_or(InterpError::UnknownScheme)
    }
}

impl core::fmt::Display for Scheme {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Declared element type of a sample table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleType {
    Integer,
    Float,
}

impl FromStr for SampleType {
    type Err = InterpError;

    /// `int`, `integer`, `i32`, `i64` or `float`, `double`, `f32`, `f64`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "int" | "integer" | "i32" | "i64" => Ok(SampleType::Integer),
            "float" | "double" | "f32" | "f64" => Ok(SampleType::Float),
            _ => Err(InterpError::InvalidType),
        }
    }
}

/// Build an unfitted interpolator.
pub fn build<T, S>(scheme: Scheme, options: &[S]) -> Result<Box<dyn Interpolator<T>>, InterpError>
where
    T: FloatScalar + 'static,
    S: AsRef<str>,
{
    if scheme != Scheme::CubicSpline && !options.is_empty() {
        warn!(%scheme, count = options.len(), "scheme takes no options, ignoring them");
    }
    let interp: Box<dyn Interpolator<T>> = match scheme {
        Scheme::Lagrange => Box::new(LagrangeInterpolator::<T>::new()),
        Scheme::Barycentric => Box::new(BarycentricInterpolator::<T>::new()),
        Scheme::CubicSpline => Box::new(spline_from_options::<T, S>(options)?),
    };
    Ok(interp)
}

/// Build an unfitted interpolator for samples of the declared type.
pub fn build_for<T, S>(
    scheme: Scheme,
    options: &[S],
    sample_type: SampleType,
) -> Result<Box<dyn Interpolator<T>>, InterpError>
where
    T: FloatScalar + 'static,
    S: AsRef<str>,
{
    scheme.check_sample_type(sample_type)?;
    build(scheme, options)
}

/// Build an interpolator and fit it on `table`, using column `y_col` as ordinates.
pub fn from_matrix<T, S>(
    scheme: Scheme,
    options: &[S],
    table: &DynMatrix<T>,
    y_col: usize,
) -> Result<Box<dyn Interpolator<T>>, InterpError>
where
    T: FloatScalar + 'static,
    S: AsRef<str>,
{
    let mut interp = build(scheme, options)?;
    interp.fit_matrix(table, y_col)?;
    Ok(interp)
}

/// Configure a cubic spline from option tokens.
pub fn spline_from_options<T, S>(options: &[S]) -> Result<CubicSplineInterpolator<T>, InterpError>
where
    T: FloatScalar,
    S: AsRef<str>,
{
    match options {
        [] => Ok(CubicSplineInterpolator::new()),
        [bc] => Ok(CubicSplineInterpolator::with_boundary(bc.as_ref().parse()?)),
        [bc, lo, hi] => {
            let boundary: BoundaryConstraint = bc.as_ref().parse()?;
            Ok(CubicSplineInterpolator::with_clamped_values(
                boundary,
                parse_value(lo.as_ref())?,
                parse_value(hi.as_ref())?,
            ))
        }
        _ => Err(InterpError::InvalidOption),
    }
}

fn parse_value<T: FloatScalar>(token: &str) -> Result<T, InterpError> {
    let v: f64 = token.trim().parse().map_err(|_| InterpError::InvalidOption)?;
    T::from(v).ok_or(InterpError::InvalidOption)
}

#[cfg(feature = "std")]
pub use file::{from_file, FactoryError};

#[cfg(feature = "std")]
mod file {
    use std::path::Path;
    use std::str::FromStr;

    use super::*;
    use crate::io::{self, DataFileError};

    /// Failure while building an interpolator from a data file.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum FactoryError {
        Data(DataFileError),
        Interp(InterpError),
    }

    impl core::fmt::Display for FactoryError {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            match self {
                FactoryError::Data(e) => write!(f, "data file: {e}"),
                FactoryError::Interp(e) => write!(f, "interpolator: {e}"),
            }
        }
    }

    impl std::error::Error for FactoryError {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            match self {
                FactoryError::Data(e) => Some(e),
                FactoryError::Interp(e) => Some(e),
            }
        }
    }

    impl From<DataFileError> for FactoryError {
        fn from(e: DataFileError) -> Self {
            FactoryError::Data(e)
        }
    }

    impl From<InterpError> for FactoryError {
        fn from(e: InterpError) -> Self {
            FactoryError::Interp(e)
        }
    }

    /// Read a sample table and return a fitted interpolator.
    ///
    /// `scheme` is parsed with [`Scheme::from_str`]; `y_col` selects the
    /// ordinate column.
    pub fn from_file<T, S>(
        path: impl AsRef<Path>,
        scheme: &str,
        options: &[S],
        y_col: usize,
    ) -> Result<Box<dyn Interpolator<T>>, FactoryError>
    where
        T: FloatScalar + FromStr + 'static,
        S: AsRef<str>,
    {
        let scheme = Scheme::from_str(scheme)?;
        let table = io::read::<T>(path)?;
        Ok(from_matrix(scheme, options, &table, y_col)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn scheme_names_round_trip() {
        for scheme in [Scheme::Lagrange, Scheme::Barycentric, Scheme::CubicSpline] {
            assert_eq!(scheme.name().parse::<Scheme>(), Ok(scheme));
        }
        assert_eq!("Cubic_Spline".parse::<Scheme>(), Ok(Scheme::CubicSpline));
        assert_eq!("fourier".parse::<Scheme>(), Err(InterpError::UnknownScheme));
    }

    #[test]
    fn build_each_scheme() {
        for scheme in [Scheme::Lagrange, Scheme::Barycentric, Scheme::CubicSpline] {
            let interp = build::<f64, _>(scheme, &NONE).unwrap();
            assert_eq!(interp.name(), scheme.name());
            assert!(!interp.is_fitted());
        }
    }

    #[test]
    fn spline_options() {
        let s = spline_from_options::<f64, _>(&NONE).unwrap();
        assert_eq!(s.boundary(), BoundaryConstraint::Natural);

        let s = spline_from_options::<f64, _>(&["clamped"]).unwrap();
        assert_eq!(s.boundary(), BoundaryConstraint::Clamped);
        assert_eq!(s.clamped_values(), (0.0, 0.0));

        let s = spline_from_options::<f64, _>(&["CLAMPED", "1.5", "-2"]).unwrap();
        assert_eq!(s.clamped_values(), (1.5, -2.0));

        assert_eq!(
            spline_from_options::<f64, _>(&["clamped", "x", "1"]).unwrap_err(),
            InterpError::InvalidOption
        );
        assert_eq!(
            spline_from_options::<f64, _>(&["clamped", "1"]).unwrap_err(),
            InterpError::InvalidOption
        );
        assert_eq!(
            spline_from_options::<f64, _>(&["bogus"]).unwrap_err(),
            InterpError::InvalidBoundaryCondition
        );
    }

    #[test]
    fn spline_rejects_integer_samples() {
        let r = build_for::<f64, _>(Scheme::CubicSpline, &NONE, SampleType::Integer);
        assert_eq!(r.err(), Some(InterpError::InvalidType));
        assert!(build_for::<f64, _>(Scheme::Lagrange, &NONE, SampleType::Integer).is_ok());
        assert!(build_for::<f64, _>(Scheme::CubicSpline, &NONE, SampleType::Float).is_ok());
        assert_eq!("i32".parse::<SampleType>(), Ok(SampleType::Integer));
        assert_eq!("complex".parse::<SampleType>(), Err(InterpError::InvalidType));
    }

    #[test]
    fn from_matrix_fits() {
        let xs = [-1.0_f64, 0.0, 1.0, 2.0];
        let ys = [1.0, 0.0, 1.0, 4.0];
        let table = DynMatrix::from_columns(&[&xs, &ys]);
        let interp = from_matrix(Scheme::Barycentric, &["ignored"], &table, 1).unwrap();
        assert!((interp.eval(0.5).unwrap() - 0.25).abs() < 1e-12);
        assert_eq!(
            from_matrix(Scheme::Lagrange, &NONE, &table, 2).err(),
            Some(InterpError::IndexOutOfBounds { index: 2, max: 1 })
        );
    }
}
