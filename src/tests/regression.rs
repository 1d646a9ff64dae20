//! Fixed `(omega, beta) -> value` pairs established under the reference
//! implementation. Mirrors its own regression driver: each case recomputes
//! and checks a stated relative tolerance, not bit-for-bit equality.

use crate::{kwwc, kwwp, kwws};

fn assert_relerr(found: f64, expected: f64, tol: f64, case: &str) {
    let re = ((found - expected) / expected).abs();
    assert!(
        re <= tol,
        "{case}: found={found:e}, expected={expected:e}, relerr={re:e} (tol={tol:e})"
    );
}

#[test]
fn kwwc_beta_one() {
    assert_relerr(kwwc(1e-6, 1.0).unwrap().value, 0.999_999_999_999_000_022_1, 1e-14, "kwwc(1e-6,1)");
    assert_relerr(kwwc(1e-3, 1.0).unwrap().value, 0.999_999_000_000_999_949_1, 1e-14, "kwwc(1e-3,1)");
    assert_relerr(kwwc(1.0, 1.0).unwrap().value, 0.5, 1e-14, "kwwc(1,1)");
    assert_relerr(kwwc(1e3, 1.0).unwrap().value, 9.999_990_000_010_000_613e-7, 1e-14, "kwwc(1e3,1)");
    assert_relerr(kwwc(1e6, 1.0).unwrap().value, 9.999_999_999_989_999_315e-13, 1e-14, "kwwc(1e6,1)");
}

#[test]
fn kwwc_beta_0_623() {
    assert_relerr(kwwc(1e-8, 0.623).unwrap().value, 1.435_159_133_351_523_009, 1e-14, "kwwc(1e-8,.623)");
    assert_relerr(kwwc(1e-6, 0.623).unwrap().value, 1.435_159_133_336_882_054, 1e-14, "kwwc(1e-6,.623)");
    assert_relerr(kwwc(1e-4, 0.623).unwrap().value, 1.435_158_986_927_334_901, 1e-14, "kwwc(1e-4,.623)");
    assert_relerr(kwwc(1e-2, 0.623).unwrap().value, 1.433_698_427_082_435_778, 1e-14, "kwwc(1e-2,.623)");
    assert_relerr(kwwc(1e-1, 0.623).unwrap().value, 1.314_878_935_071_708_499, 1e-14, "kwwc(1e-1,.623)");
    assert_relerr(kwwc(1.0, 0.623).unwrap().value, 0.330_832_368_709_959_412_4, 1e-14, "kwwc(1,.623)");
    assert_relerr(kwwc(1e2, 0.623).unwrap().value, 0.000_405_333_009_010_280_006_6, 1e-14, "kwwc(1e2,.623)");
    assert_relerr(kwwc(1e4, 0.623).unwrap().value, 2.390_040_041_093_056_597e-7, 1e-14, "kwwc(1e4,.623)");
}

#[test]
fn kwwc_beta_0_314() {
    assert_relerr(kwwc(2e-5, 0.314).unwrap().value, 7.602_900_889_248_060_956, 1e-14, "kwwc(2e-5,.314)");
    assert_relerr(kwwc(2e-4, 0.314).unwrap().value, 7.594_626_504_743_104_078, 1e-14, "kwwc(2e-4,.314)");
    assert_relerr(kwwc(2e-3, 0.314).unwrap().value, 7.148_958_376_075_823_296, 1e-14, "kwwc(2e-3,.314)");
    assert_relerr(kwwc(2e-2, 0.314).unwrap().value, 3.922_292_835_319_648_674, 1e-14, "kwwc(2e-2,.314)");
    assert_relerr(kwwc(2e-1, 0.314).unwrap().value, 0.817_267_826_027_595_067_9, 1e-14, "kwwc(2e-1,.314)");
    assert_relerr(kwwc(2e0, 0.314).unwrap().value, 0.083_719_739_290_163_422_4, 1e-14, "kwwc(2,.314)");
}

#[test]
fn kwws_beta_0_314() {
    assert_relerr(kwws(2e-5, 0.314).unwrap().value, 0.014_529_054_983_500_095_18, 1e-14, "kwws(2e-5,.314)");
    assert_relerr(kwws(2e-3, 0.314).unwrap().value, 1.114_725_403_689_666_55, 1e-14, "kwws(2e-3,.314)");
    assert_relerr(kwws(2e-1, 0.314).unwrap().value, 1.202_467_631_193_444_353, 1e-14, "kwws(2e-1,.314)");
}

#[test]
fn kwwp_beta_0_459() {
    assert_relerr(kwwp(3e-3, 0.459).unwrap().value, 0.007_116_055_704_011_668_009, 1e-14, "kwwp(3e-3,.459)");
    assert_relerr(kwwp(5e-3, 0.459).unwrap().value, 0.011_851_306_851_639_757_67, 1e-14, "kwwp(5e-3,.459)");
    assert_relerr(kwwp(2e-2, 0.459).unwrap().value, 0.046_682_856_808_955_515_43, 5e-12, "kwwp(2e-2,.459)");
}
