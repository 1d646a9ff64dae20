//! Mid-frequency double-exponential (DE) trapezoidal quadrature.
//!
//! Evaluates `(pi/w) * sum_k b_k * f(a_k / w)` where `f(t) = exp(-t^beta)`
//! for the sine and primitive cases, and `f(t) = exp(-t^beta) - exp(-t^2)`
//! for the cosine transform once `beta > 1.75` ("diff-mode"), whose
//! subtracted Gaussian tail is added back analytically. The abscissae
//! `a_k` and weights `b_k` come from a double-exponential variable
//! substitution that makes the trapezoidal rule converge at a doubly
//! exponential rate; since they depend only on `(kind, beta-range,
//! refinement level)` and never on `w`, they are computed once per
//! `(kind, range, iter)` cell and cached for the life of the process.

use crate::consts::{DELTA, EPS, MAX_ITER_INT, NUM_RANGE, OVERFLOW_GUARD, S_MIN};
use crate::diagnostics::{DebugFlags, Kind, KernelOutput};
use crate::error::{KernelFailure, KwwError};
use kww_precision::Extended;
use std::sync::OnceLock;

/// One `(kind, range, iter)` cell: `2N + 1` transformed abscissae and
/// weights, immutable once published.
struct NodeWeightTable {
    n: usize,
    ak: Vec<Extended>,
    bk: Vec<Extended>,
}

type Cell = OnceLock<Result<NodeWeightTable, KernelFailure>>;

const CELL_INIT: Cell = OnceLock::new();
const ITER_ROW_INIT: [Cell; MAX_ITER_INT] = [CELL_INIT; MAX_ITER_INT];
const RANGE_INIT: [[Cell; MAX_ITER_INT]; NUM_RANGE] = [ITER_ROW_INIT; NUM_RANGE];

/// `CACHE[kind][range][iter]`. Grows monotonically: a cell is computed
/// the first time it is reached and never evicted or rewritten.
static CACHE: [[[Cell; MAX_ITER_INT]; NUM_RANGE]; 2] = [RANGE_INIT; 2];

/// `(p, q)` double-exponential shape parameters for each `beta` range.
const RANGE_TABLE: [(f64, f64); NUM_RANGE] = [
    (1.8, 0.2),
    (1.6, 0.4),
    (1.4, 0.6),
    (1.0, 0.2),
    (0.75, 0.2),
    (0.15, 0.4),
];

fn range_for_beta(beta: f64) -> usize {
    if beta < 0.15 {
        0
    } else if beta < 0.25 {
        1
    } else if beta < 1.0 {
        2
    } else if beta < 1.75 {
        3
    } else if beta < 1.95 {
        4
    } else {
        5
    }
}

fn build_table(kind: Kind, n: usize, p: f64, q: f64) -> Result<NodeWeightTable, KernelFailure> {
    if n > 1_000_000 {
        return Err(KernelFailure::NodeCountOverflow);
    }
    let h = (Extended::from_f64(42.0 * n as f64 / DELTA / S_MIN).ln() / Extended::from_f64(p))
        .ln()
        / Extended::from_f64(n as f64);

    let len = 2 * n + 1;
    let mut ak = vec![Extended::ZERO; len];
    let mut bk = vec![Extended::ZERO; len];
    let mut isig = if n & 1 == 1 { -1.0 } else { 1.0 };

    for kaux in -(n as i64)..=(n as i64) {
        let mut k = kaux as f64;
        if kind == Kind::Cos {
            k -= 0.5;
        }
        let k_x = Extended::from_f64(k);
        let u = k_x * h;
        let chi = Extended::from_f64(2.0 * p) * u.sinh() + Extended::from_f64(2.0 * q) * u;
        let dchi = Extended::from_f64(2.0 * p) * u.cosh() + Extended::from_f64(2.0 * q);
        let idx = (kaux + n as i64) as usize;

        let (ahk, dhk, chk) = if u.to_f64() == 0.0 {
            if k != 0.0 {
                return Err(KernelFailure::VariableUnderflow);
            }
            // Bridges the removable singularity at u=0; the reference
            // implementation uses a plain f64 sine here, not the
            // extended-precision one, and this keeps that fidelity.
            let ahk = Extended::PI / h / dchi;
            let chk = Extended::from_f64(ahk.to_f64().sin());
            (ahk, Extended::from_f64(0.5), chk)
        } else {
            if (-chi).to_f64() > OVERFLOW_GUARD {
                return Err(KernelFailure::TransformOverflow);
            }
            let e = (-chi).exp();
            let one_minus_e = Extended::ONE - e;
            let ahk = Extended::PI / h * u / one_minus_e;
            let dhk = one_minus_e.recip() - u * e * dchi / (one_minus_e * one_minus_e);
            let chk = if e.gt(Extended::ONE) {
                let arg = Extended::PI * k_x / one_minus_e;
                if kind == Kind::Sin {
                    arg.sin()
                } else {
                    arg.cos()
                }
            } else {
                (Extended::PI * k_x * e / one_minus_e).sin().mul_f64(isig)
            };
            (ahk, dhk, chk)
        };

        ak[idx] = ahk;
        bk[idx] = dhk * chk;
        isig = -isig;
    }
    Ok(NodeWeightTable { n, ak, bk })
}

fn table_for(
    kind: Kind,
    j: usize,
    iter: usize,
    p: f64,
    q: f64,
    n: usize,
    debug: DebugFlags,
) -> Result<&'static NodeWeightTable, KernelFailure> {
    let cell = &CACHE[kind as usize][j][iter];
    if cell.get().is_none() {
        if debug.init_trace() {
            log::trace!("kww_mid init iter={iter} kind={kind:?} j={j} size={}", 2 * n + 1);
        }
        let _ = cell.set(build_table(kind, n, p, q));
    }
    cell.get()
        .expect("cache cell was just populated above")
        .as_ref()
        .map_err(|e| *e)
}

/// Generic mid-frequency quadrature kernel; `kind` selects the
/// precomputed node/weight table, `mu` selects the primitive transform
/// (whose integrand is divided by `t`).
///
/// # Errors
/// Returns [`KwwError::NonPositiveOmega`] if `w <= 0`, or wraps a
/// [`KernelFailure`] describing why the quadrature failed to converge.
#[allow(clippy::too_many_lines)]
pub fn kww_mid(
    w: f64,
    beta: f64,
    kind: Kind,
    mu: bool,
    debug: DebugFlags,
) -> Result<KernelOutput, KwwError> {
    if w <= 0.0 {
        return Err(KwwError::NonPositiveOmega { omega: w });
    }

    if kind == Kind::Cos && (beta - 2.0).abs() < f64::EPSILON {
        let value = Extended::PI.sqrt().mul_f64(0.5) * (-Extended::from_f64(w * w / 4.0)).exp();
        return Ok(KernelOutput {
            value,
            num_of_terms: 0,
        });
    }
    let diffmode = kind == Kind::Cos && beta > 1.75;

    let j = range_for_beta(beta);
    let (p, q) = RANGE_TABLE[j];

    let mut n: usize = if debug.single_sum() { 100 } else { 40 };
    let mut sum = Extended::ZERO;
    let mut sum_last;
    let mut total_terms: u32 = 0;
    let w_x = Extended::from_f64(w);
    let beta_x = Extended::from_f64(beta);

    for iter in 0..MAX_ITER_INT {
        let table = table_for(kind, j, iter, p, q, n, debug)?;

        sum_last = sum;
        sum = Extended::ZERO;
        let mut t = Extended::ZERO;
        for idx in 0..table.ak.len() {
            let tk = table.ak[idx] / w_x;
            let mut f = (-tk.powf(beta_x)).exp();
            if diffmode {
                f = f - (-(tk * tk)).exp();
            }
            if mu {
                f = f / tk;
            }
            let s = table.bk[idx] * f;
            sum = sum + s;
            t = t + s.abs();
            if debug.node_trace() {
                log::trace!(
                    "kww_mid iter={iter} idx={idx} a={} b={} f={f} s={s} S={sum} T={t}",
                    table.ak[idx],
                    table.bk[idx]
                );
            }
        }
        total_terms += u32::try_from(2 * table.n + 1).unwrap_or(u32::MAX);

        if diffmode {
            sum = sum
                + w_x.mul_f64(1.0 / std::f64::consts::PI.sqrt() / 2.0)
                    * (-Extended::from_f64(w * w / 4.0)).exp();
        }

        if debug.single_sum() {
            return Err(KernelFailure::SingleSumInspection);
        }
        if sum.to_f64() < 0.0 && !diffmode {
            return Err(KwwError::IntegrationFailed {
                omega: w,
                beta,
                reason: KernelFailure::NegativeSum,
            });
        }
        if t.mul_f64(EPS).gt(sum.abs().mul_f64(DELTA)) {
            return Err(KwwError::IntegrationFailed {
                omega: w,
                beta,
                reason: KernelFailure::QuadratureCancellation,
            });
        }
        if iter > 0 && ((sum - sum_last).abs() + t.mul_f64(EPS)).lt(sum.abs().mul_f64(DELTA)) {
            return Ok(KernelOutput {
                value: sum.mul_f64(std::f64::consts::PI) / w_x,
                num_of_terms: total_terms,
            });
        }
        n *= 2;
    }
    Err(KwwError::IntegrationFailed {
        omega: w,
        beta,
        reason: KernelFailure::NotConverged,
    })
}

/// `kwwc_mid`: mid-frequency quadrature for the cosine transform.
///
/// # Errors
/// See [`kww_mid`].
pub fn kwwc_mid(w: f64, beta: f64, debug: DebugFlags) -> Result<KernelOutput, KwwError> {
    kww_mid(w, beta, Kind::Cos, false, debug)
}

/// `kwws_mid`: mid-frequency quadrature for the sine transform.
///
/// # Errors
/// See [`kww_mid`].
pub fn kwws_mid(w: f64, beta: f64, debug: DebugFlags) -> Result<KernelOutput, KwwError> {
    kww_mid(w, beta, Kind::Sin, false, debug)
}

/// `kwwp_mid`: mid-frequency quadrature for the primitive transform.
///
/// The reference implementation calls this with the *sine* table
/// (`kind = 1`) and `mu = 1`; this is a deliberate reuse of the odd
/// quadrature table for the primitive's `integrand / t` form, not a
/// typo, confirmed by reading the reference source rather than guessed.
///
/// # Errors
/// See [`kww_mid`].
pub fn kwwp_mid(w: f64, beta: f64, debug: DebugFlags) -> Result<KernelOutput, KwwError> {
    kww_mid(w, beta, Kind::Sin, true, debug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cos_beta_two_matches_gaussian_closed_form() {
        let out = kwwc_mid(1.3, 2.0, DebugFlags::NONE).unwrap();
        let expected = (std::f64::consts::PI.sqrt() / 2.0) * (-1.3_f64 * 1.3 / 4.0).exp();
        assert!((out.value.to_f64() - expected).abs() < 1e-12);
    }

    #[test]
    fn mid_quadrature_converges_for_representative_midrange_point() {
        let out = kwwc_mid(1.0, 0.6, DebugFlags::NONE).unwrap();
        assert!(out.value.to_f64() > 0.0);
        assert!(out.value.to_f64().is_finite());
    }
}
