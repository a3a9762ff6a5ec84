//! # tabinterp
//!
//! Interpolation of tabulated one-dimensional data, no-std compatible (with
//! `alloc`). Three schemes share one fit/evaluate contract: Lagrange
//! polynomials, barycentric Lagrange (with incremental point addition) and
//! piecewise cubic splines.
//!
//! ## Quick start
//!
//! ```
//! use tabinterp::{CubicSplineInterpolator, DynMatrix, Interpolator};
//!
//! // Column 0 holds x, column 1 holds y = x²
//! let table = DynMatrix::from_rows(5, 2, &[
//!     -2.0_f64, 4.0,
//!     -1.0, 1.0,
//!      0.0, 0.0,
//!      1.0, 1.0,
//!      2.0, 4.0,
//! ]);
//! let mut spline = CubicSplineInterpolator::new();
//! spline.fit_matrix(&table, 1).unwrap();
//! assert_eq!(spline.eval(1.0).unwrap(), 1.0);
//! assert!(spline.eval(2.5).is_err()); // no extrapolation
//! ```
//!
//! ## Modules
//!
//! - [`interp`] - The [`Interpolator`] trait and its three implementations:
//!   [`LagrangeInterpolator`], [`BarycentricInterpolator`] and
//!   [`CubicSplineInterpolator`] (natural or clamped boundaries). Queries
//!   outside the fitted domain fail with [`InterpError::Extrapolation`].
//!
//! - [`factory`] - Build a boxed interpolator from a scheme name and option
//!   tokens (`"cubic_spline"`, `["CLAMPED", "0", "1"]`), optionally straight
//!   from a data file.
//!
//! - [`dynmatrix`] - Heap-allocated, column-major `DynMatrix<T>` used for
//!   sample tables. Implements [`MatrixRef`] / [`MatrixMut`].
//!
//! - [`linalg`] - LU decomposition with partial pivoting, used by the spline
//!   to solve for its curvature coefficients.
//!
//! - [`datagen`] - Uniform and Chebyshev grids, polynomial and damped-cosine
//!   sample tables.
//!
//! - [`io`] - Plain-text sample tables (`rows cols` header then rows).
//!   Requires `std`.
//!
//! - [`traits`] - Element trait hierarchy:
//!   - [`Scalar`] - all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] - real floats (`Scalar + Float`), required by every interpolator
//!   - [`MatrixRef`] / [`MatrixMut`] - generic read/write access for algorithms
//!
//! ## Logging
//!
//! Fits and data-file reads emit `tracing` events at `debug` level; ignored
//! options and ill-formed boundary settings are reported at `warn`. Install
//! any `tracing` subscriber to see them.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm, `std::error::Error` impls, [`io`] and file loading |
//! | (none)  | baseline | `no_std` + `alloc`, pure-Rust software float fallback via `libm` |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod datagen;
pub mod dynmatrix;
pub mod factory;
pub mod interp;
#[cfg(feature = "std")]
pub mod io;
pub mod linalg;
pub mod traits;

pub use dynmatrix::DynMatrix;
pub use interp::{
    BarycentricInterpolator, BoundaryConstraint, CubicSplineInterpolator, InterpError,
    Interpolator, LagrangeInterpolator,
};
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};
