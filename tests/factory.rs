#![cfg(feature = "std")]

use std::path::PathBuf;

use tabinterp::datagen::{damped_cosine, polynomial_samples, PointGeneration};
use tabinterp::factory::{from_file, FactoryError};
use tabinterp::io::{self, DataFileError};
use tabinterp::{DynMatrix, InterpError};

const TOL: f64 = 1e-9;
const NONE: [&str; 0] = [];

/// Unique scratch file per test so tests can run in parallel.
fn scratch(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("tabinterp-{}-{name}.txt", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
    assert!((a - b).abs() < tol, "{msg}: {a} vs {b} (diff {})", (a - b).abs());
}

// ── Data files through every scheme ──────────────────────────────────

#[test]
fn file_square_all_schemes() {
    let table = polynomial_samples(&[0.0_f64, 0.0, 1.0], (-10.0, 10.0), 11, PointGeneration::Uniform);
    let path = std::env::temp_dir().join(format!("tabinterp-{}-square.txt", std::process::id()));
    io::write(&path, &table).unwrap();

    for scheme in ["lagrange", "barycentric"] {
        let interp = from_file::<f64, _>(&path, scheme, &NONE, 1).unwrap();
        assert_near(interp.eval(6.25).unwrap(), 39.0625, TOL, scheme);
        assert_near(interp.eval(-3.3).unwrap(), 10.89, TOL, scheme);
    }

    // Natural spline is not exact on x², but exact at the knots and close in between
    let spline = from_file::<f64, _>(&path, "cubic_spline", &NONE, 1).unwrap();
    assert_eq!(spline.eval(4.0).unwrap(), 16.0);
    assert_near(spline.eval(0.5).unwrap(), 0.25, 0.05, "spline");

    std::fs::remove_file(&path).ok();
}

#[test]
fn file_clamped_spline_reproduces_cubic() {
    // y = x³ - 2x, y' = 3x² - 2
    let path = scratch(
        "cubic",
        "# y = x^3 - 2x\n5 2\n-2 -4\n-1 1\n0 0\n1 -1\n2 4\n",
    );
    let spline = from_file::<f64, _>(&path, "CUBIC_SPLINE", &["clamped", "10", "10"], 1).unwrap();
    for x in [-1.75, -0.3, 0.0, 0.9, 1.5, 2.0] {
        assert_near(spline.eval(x).unwrap(), x * x * x - 2.0 * x, 1e-12, "clamped cubic");
    }
    std::fs::remove_file(&path).ok();
}

#[test]
fn file_dependent_column_first() {
    let path = scratch("swapped", "3 2\n1 0\n2 1\n5 2\n");
    let interp = from_file::<f64, _>(&path, "barycentric", &NONE, 0).unwrap();
    assert_eq!(interp.sample_x(), &[0.0, 1.0, 2.0]);
    assert_near(interp.eval(1.5).unwrap(), 3.25, TOL, "y = 1 + x²");
    std::fs::remove_file(&path).ok();
}

#[test]
fn file_f32_samples() {
    let path = scratch("f32", "4 2\n0 1\n1 2\n2 5\n3 10\n");
    let interp = from_file::<f32, _>(&path, "lagrange", &NONE, 1).unwrap();
    assert!((interp.eval(2.5_f32).unwrap() - 7.25).abs() < 1e-4);
    std::fs::remove_file(&path).ok();
}

#[test]
fn damped_cosine_chebyshev_accuracy() {
    // Chebyshev nodes keep the high-degree polynomial close to the signal
    let table = tabinterp::datagen::damped_cosine_samples(
        (1.0_f64, 0.1, 2.0),
        (-5.0, 5.0),
        40,
        PointGeneration::Chebyshev,
    );
    let path = std::env::temp_dir().join(format!("tabinterp-{}-damped.txt", std::process::id()));
    io::write(&path, &table).unwrap();

    let interp = from_file::<f64, _>(&path, "barycentric", &NONE, 1).unwrap();
    let (lo, hi) = interp.domain().unwrap();
    let probes: Vec<f64> = (0..25).map(|i| lo + (hi - lo) * i as f64 / 24.0).collect();
    let expected = damped_cosine(&probes, 1.0, 0.1, 2.0);
    let got = interp.eval_slice(&probes).unwrap();
    for (g, e) in got.iter().zip(&expected) {
        assert_near(*g, *e, 1e-6, "damped cosine");
    }
    std::fs::remove_file(&path).ok();
}

// ── Error paths ──────────────────────────────────────────────────────

#[test]
fn unknown_scheme_checked_before_reading() {
    let r = from_file::<f64, _>("/definitely/not/here.txt", "akima", &NONE, 1);
    assert_eq!(r.err(), Some(FactoryError::Interp(InterpError::UnknownScheme)));
}

#[test]
fn missing_file() {
    let r = from_file::<f64, _>("/definitely/not/here.txt", "lagrange", &NONE, 1);
    assert_eq!(
        r.err(),
        Some(FactoryError::Data(DataFileError::Io(std::io::ErrorKind::NotFound)))
    );
}

#[test]
fn malformed_file() {
    let path = scratch("malformed", "3 2\n0 0\n1 one\n2 4\n");
    let r = from_file::<f64, _>(&path, "lagrange", &NONE, 1);
    assert_eq!(
        r.err(),
        Some(FactoryError::Data(DataFileError::NotANumber { line: 3 }))
    );
    std::fs::remove_file(&path).ok();
}

#[test]
fn multidimensional_file() {
    let path = scratch("multidim", "3 3\n0 0 0\n1 1 1\n2 2 4\n");
    let r = from_file::<f64, _>(&path, "barycentric", &NONE, 2);
    assert_eq!(
        r.err(),
        Some(FactoryError::Interp(
            InterpError::MultidimensionalImplementation { dims: 2 }
        ))
    );
    std::fs::remove_file(&path).ok();
}

#[test]
fn unsorted_file_rejected_by_spline_only() {
    let path = scratch("unsorted", "4 2\n0 0\n2 4\n1 1\n3 9\n");
    let r = from_file::<f64, _>(&path, "cubic_spline", &NONE, 1);
    assert_eq!(r.err(), Some(FactoryError::Interp(InterpError::NotSorted)));

    let lagrange = from_file::<f64, _>(&path, "lagrange", &NONE, 1).unwrap();
    assert_near(lagrange.eval(1.5).unwrap(), 2.25, TOL, "unsorted lagrange");
    std::fs::remove_file(&path).ok();
}

#[test]
fn unsupported_boundary_option() {
    let path = scratch("notaknot", "4 2\n0 0\n1 1\n2 4\n3 9\n");
    let r = from_file::<f64, _>(&path, "cubic_spline", &["not_a_knot"], 1);
    assert_eq!(
        r.err(),
        Some(FactoryError::Interp(InterpError::InvalidBoundaryCondition))
    );
    std::fs::remove_file(&path).ok();
}

#[test]
fn error_messages() {
    let e = FactoryError::Interp(InterpError::Extrapolation {
        value: 15.0,
        min: -10.0,
        max: 10.0,
    });
    let msg = e.to_string();
    assert!(msg.contains("15"), "{msg}");
    assert!(msg.contains("out of range"), "{msg}");

    let e: Box<dyn std::error::Error> = Box::new(FactoryError::Data(DataFileError::MissingHeader));
    assert!(e.source().is_some());
}

#[test]
fn table_round_trip_through_file() {
    let t = DynMatrix::from_rows(3, 2, &[0.0_f64, 1.0, 0.5, -2.0, 1.0, 3.5]);
    let path = std::env::temp_dir().join(format!("tabinterp-{}-roundtrip.txt", std::process::id()));
    io::write(&path, &t).unwrap();
    let back: DynMatrix<f64> = io::read(&path).unwrap();
    assert_eq!(back, t);
    std::fs::remove_file(&path).ok();
}
