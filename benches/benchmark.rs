use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// Representative betas, one from each regime-limit bracket in the DE
// range table (see the quadrature module), plus the two closed-form
// special cases.
const BETAS: [f64; 6] = [0.12, 0.3, 0.8, 1.4, 1.85, 2.0];

fn bench_low_regime(c: &mut Criterion) {
    let mut group = c.benchmark_group("low_regime");
    for &beta in &BETAS {
        group.bench_function(format!("kwwc_low_w1e-3_b{beta}"), |b| {
            b.iter(|| kww::kwwc(black_box(1e-3), black_box(beta)))
        });
    }
    group.finish();
}

fn bench_mid_regime(c: &mut Criterion) {
    let mut group = c.benchmark_group("mid_regime");
    for &beta in &BETAS {
        group.bench_function(format!("kwwc_mid_w1_b{beta}"), |b| {
            b.iter(|| kww::kwwc(black_box(1.0), black_box(beta)))
        });
        group.bench_function(format!("kwws_mid_w1_b{beta}"), |b| {
            b.iter(|| kww::kwws(black_box(1.0), black_box(beta)))
        });
    }
    group.finish();
}

fn bench_high_regime(c: &mut Criterion) {
    let mut group = c.benchmark_group("high_regime");
    for &beta in &BETAS {
        group.bench_function(format!("kwwc_high_w1e4_b{beta}"), |b| {
            b.iter(|| kww::kwwc(black_box(1e4), black_box(beta)))
        });
    }
    group.finish();
}

fn bench_primitive(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitive");
    for &beta in &BETAS {
        group.bench_function(format!("kwwp_w1_b{beta}"), |b| {
            b.iter(|| kww::kwwp(black_box(1.0), black_box(beta)))
        });
    }
    group.finish();
}

fn bench_de_cache_warm_vs_cold(c: &mut Criterion) {
    let mut group = c.benchmark_group("de_cache");
    // First call for this beta populates the node/weight cache; later
    // calls in the same process hit it. Benchmark both to show the
    // amortization.
    group.bench_function("first_call_beta_1_33", |b| {
        b.iter(|| kww::kwwc(black_box(1.0), black_box(1.33)))
    });
    let _ = kww::kwwc(1.0, 1.33);
    group.bench_function("cached_call_beta_1_33", |b| {
        b.iter(|| kww::kwwc(black_box(1.0), black_box(1.33)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_low_regime,
    bench_mid_regime,
    bench_high_regime,
    bench_primitive,
    bench_de_cache_warm_vs_cold
);
criterion_main!(benches);
