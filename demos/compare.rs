// Interpolation comparison: damped cosine with 9 knots.
// Prints JSON with knot points and 200 evaluation points for every scheme:
//   {"kx":[...], "ky":[...], "x":[...], "y_true":[...],
//    "y_lagrange":[...], "y_barycentric":[...], "y_natural":[...], "y_clamped":[...]}
//
// Fit events are logged to stderr at debug level.

use tracing_subscriber::{fmt, prelude::*};

use tabinterp::datagen::{damped_cosine, damped_cosine_samples, linspace, PointGeneration};
use tabinterp::factory::{from_matrix, Scheme};

fn fmt_arr(v: &[f64]) -> String {
    let inner: Vec<String> = v.iter().map(|x| format!("{x:.6}")).collect();
    format!("[{}]", inner.join(","))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing::level_filters::LevelFilter::DEBUG)
        .with(fmt::layer()
            .without_time()
            .with_target(false)
            .with_writer(std::io::stderr))
        .init();

    let (a, b, c) = (1.0, 0.1, 2.0);
    let table = damped_cosine_samples((a, b, c), (-5.0, 5.0), 9, PointGeneration::Uniform);
    let (kx, ky) = (table.col(0), table.col(1));

    // Exact end slopes for the clamped spline
    let slope = |x: f64| a * (-b * x * x).exp() * (-2.0 * b * x * (c * x).cos() - c * (c * x).sin());
    let lo = slope(kx[0]).to_string();
    let hi = slope(kx[kx.len() - 1]).to_string();

    let lagrange = from_matrix(Scheme::Lagrange, &[] as &[&str], &table, 1)?;
    let barycentric = from_matrix(Scheme::Barycentric, &[] as &[&str], &table, 1)?;
    let natural = from_matrix(Scheme::CubicSpline, &["natural"], &table, 1)?;
    let clamped = from_matrix(Scheme::CubicSpline, &["clamped", lo.as_str(), hi.as_str()], &table, 1)?;

    let x = linspace(-5.0, 5.0, 200);
    let y_true = damped_cosine(&x, a, b, c);

    println!(
        "{{\"kx\":{},\"ky\":{},\"x\":{},\"y_true\":{},\"y_lagrange\":{},\"y_barycentric\":{},\"y_natural\":{},\"y_clamped\":{}}}",
        fmt_arr(kx),
        fmt_arr(ky),
        fmt_arr(&x),
        fmt_arr(&y_true),
        fmt_arr(&lagrange.eval_slice(&x)?),
        fmt_arr(&barycentric.eval_slice(&x)?),
        fmt_arr(&natural.eval_slice(&x)?),
        fmt_arr(&clamped.eval_slice(&x)?)
    );
    Ok(())
}
