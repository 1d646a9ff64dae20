//! Whole-library properties from the transform definitions: monotone
//! decay, boundedness of the primitive, regime agreement near the
//! dispatch thresholds, and finiteness across a dense grid.

use crate::{kwwc, kwwc_lim_low, kwwp, kwws_lim_hig};

const BETAS: [f64; 7] = [0.1, 0.3, 0.623, 1.0, 1.314, 1.75, 2.0];

#[test]
fn cosine_transform_decays_towards_zero() {
    for &beta in &BETAS {
        let near = kwwc(1.0, beta).unwrap().value;
        let far = kwwc(1e4, beta).unwrap().value;
        assert!(far < near, "beta={beta}: far={far} should be < near={near}");
        assert!(far >= 0.0, "beta={beta}: far={far} should stay non-negative");
    }
}

#[test]
fn cosine_transform_positive_for_beta_above_one() {
    for &beta in &[1.05, 1.3, 1.6, 1.9, 2.0] {
        for &w in &[1e-3, 1.0, 10.0, 1e3] {
            let c = kwwc(w, beta).unwrap().value;
            assert!(c > 0.0, "beta={beta}, w={w}: kwwc={c} should be positive");
        }
    }
}

#[test]
fn primitive_is_monotone_and_bounded_by_half_pi() {
    for &beta in &BETAS {
        let mut prev = kwwp(0.0, beta).unwrap().value;
        assert_eq!(prev, 0.0);
        for &w in &[1e-3, 1e-2, 1e-1, 1.0, 10.0, 1e2, 1e4] {
            let p = kwwp(w, beta).unwrap().value;
            assert!(p >= prev - 1e-12, "beta={beta}: P not nondecreasing at w={w}");
            assert!(p < std::f64::consts::FRAC_PI_2, "beta={beta}: P={p} exceeds pi/2 at w={w}");
            prev = p;
        }
    }
}

#[test]
fn finite_on_dense_grid() {
    let betas: Vec<f64> = (0..20).map(|i| 0.1 + 1.9 * f64::from(i) / 19.0).collect();
    let omegas: Vec<f64> = (-30..=30)
        .map(|i| if i == 0 { 0.0 } else { 10f64.powf(f64::from(i) / 10.0) * i.signum() as f64 })
        .collect();
    for &beta in &betas {
        for &w in &omegas {
            let c = kwwc(w, beta).unwrap().value;
            assert!(c.is_finite(), "kwwc({w}, {beta}) = {c} not finite");
            let p = kwwp(w, beta).unwrap().value;
            assert!(p.is_finite(), "kwwp({w}, {beta}) = {p} not finite");
        }
    }
}

#[test]
fn low_series_agrees_with_mid_quadrature_near_low_threshold() {
    for &beta in &[0.3, 0.623, 0.9] {
        let wl = kwwc_lim_low(beta);
        let probe = wl * 0.98;
        let low = crate::kwwc_low(probe, beta, crate::DebugFlags::NONE).unwrap().value.to_f64();
        let mid = crate::kwwc_mid(probe, beta, crate::DebugFlags::NONE).unwrap().value.to_f64();
        let re = ((low - mid) / mid).abs();
        assert!(re < 1e-10, "beta={beta}, w={probe}: low={low} mid={mid} relerr={re}");
    }
}

#[test]
fn high_series_agrees_with_mid_quadrature_near_high_threshold() {
    for &beta in &[0.5, 1.0, 1.5] {
        let wh = kwws_lim_hig(beta);
        let probe = wh * 1.02;
        let high = crate::kwws_hig(probe, beta, crate::DebugFlags::NONE).unwrap().value.to_f64();
        let mid = crate::kwws_mid(probe, beta, crate::DebugFlags::NONE).unwrap().value.to_f64();
        let re = ((high - mid) / mid).abs();
        assert!(re < 1e-10, "beta={beta}, w={probe}: high={high} mid={mid} relerr={re}");
    }
}
