use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use tabinterp::datagen::{damped_cosine_samples, linspace, PointGeneration};
use tabinterp::{
    BarycentricInterpolator, CubicSplineInterpolator, DynMatrix, Interpolator,
    LagrangeInterpolator,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn samples(n: usize) -> DynMatrix<f64> {
    damped_cosine_samples((1.0, 0.1, 2.0), (-5.0, 5.0), n, PointGeneration::Chebyshev)
}

fn queries(table: &DynMatrix<f64>) -> Vec<f64> {
    let xs = table.col(0);
    linspace(xs[0], xs[xs.len() - 1], 200)
}

fn schemes() -> [(&'static str, fn() -> Box<dyn Interpolator<f64>>); 3] {
    [
        ("lagrange", || -> Box<dyn Interpolator<f64>> { Box::new(LagrangeInterpolator::new()) }),
        ("barycentric", || -> Box<dyn Interpolator<f64>> { Box::new(BarycentricInterpolator::new()) }),
        ("cubic_spline", || -> Box<dyn Interpolator<f64>> { Box::new(CubicSplineInterpolator::new()) }),
    ]
}

// ---------------------------------------------------------------------------
// Fit
// ---------------------------------------------------------------------------

fn fit(c: &mut Criterion) {
    let mut g = c.benchmark_group("fit");
    for n in [8, 32, 128] {
        let table = samples(n);
        for (name, make) in schemes() {
            g.bench_with_input(BenchmarkId::new(name, n), &table, |b, table| {
                let mut interp = make();
                b.iter(|| interp.fit_matrix(std::hint::black_box(table), 1).unwrap())
            });
        }
    }
    g.finish();
}

// ---------------------------------------------------------------------------
// Evaluate 200 points
// ---------------------------------------------------------------------------

fn eval(c: &mut Criterion) {
    let mut g = c.benchmark_group("eval_200");
    for n in [8, 32, 128] {
        let table = samples(n);
        let xs = queries(&table);
        for (name, make) in schemes() {
            let mut interp = make();
            interp.fit_matrix(&table, 1).unwrap();
            g.bench_with_input(BenchmarkId::new(name, n), &xs, |b, xs| {
                b.iter(|| interp.eval_slice(std::hint::black_box(xs)).unwrap())
            });
        }
    }
    g.finish();
}

// ---------------------------------------------------------------------------
// Incremental barycentric update vs full refit
// ---------------------------------------------------------------------------

fn barycentric_add(c: &mut Criterion) {
    let mut g = c.benchmark_group("barycentric_add_point");
    let table = samples(64);
    let (xs, ys) = (table.col(0), table.col(1));
    let (x_new, y_new) = (6.0, 0.0);

    g.bench_function("add_data", |b| {
        let mut base = BarycentricInterpolator::new();
        base.fit(xs, ys).unwrap();
        b.iter(|| {
            let mut interp = base.clone();
            interp.add_data(std::hint::black_box(x_new), y_new).unwrap();
            interp
        })
    });

    g.bench_function("refit", |b| {
        let mut all_x = xs.to_vec();
        let mut all_y = ys.to_vec();
        all_x.push(x_new);
        all_y.push(y_new);
        b.iter(|| {
            let mut interp = BarycentricInterpolator::new();
            interp.fit(std::hint::black_box(&all_x), &all_y).unwrap();
            interp
        })
    });

    g.finish();
}

criterion_group!(benches, fit, eval, barycentric_add);
criterion_main!(benches);
