//! Low-frequency convergent power series.
//!
//! Computes
//! `(1/beta) * sum_k (-1)^k * Gamma((2k+kappa+1)/beta) / (2k+kappa)! * w^(2k+kappa+mu) * [1/(2k+kappa+1) if mu]`
//! term by term, in log-domain to avoid overflowing the gamma function,
//! exponentiating only the individual term. The previous term's
//! magnitude is always one step behind the running sum so the
//! termination test can compare it against the *next* term (the
//! "lookahead") as well as the accumulated sum of magnitudes.

use crate::consts::{DELTA, EPS, OVERFLOW_GUARD, MAX_TERMS};
use crate::diagnostics::{DebugFlags, Kind, KernelOutput};
use crate::error::{KernelFailure, KwwError};
use kww_precision::Extended;

fn lgamma_of(x: Extended) -> Result<Extended, KernelFailure> {
    x.lgamma().map_err(|_| KernelFailure::GammaOverflow)
}

/// Generic low-frequency kernel; `kind` selects cosine (`kappa = 0`) or
/// sine (`kappa = 1`), `mu` selects the primitive transform.
///
/// # Errors
/// Returns [`KwwError::NonPositiveOmega`] if `w <= 0`, or wraps a
/// [`KernelFailure`] describing why the series failed to converge.
pub fn kww_low(
    w: f64,
    beta: f64,
    kind: Kind,
    mu: bool,
    debug: DebugFlags,
) -> Result<KernelOutput, KwwError> {
    if w <= 0.0 {
        return Err(KwwError::NonPositiveOmega { omega: w });
    }

    let kappa: i32 = kind as i32;
    let mut kk = kappa;
    let mut isig = 1.0_f64;
    let mut sum = Extended::ZERO;
    let mut abs_sum = Extended::ZERO;
    let mut u = Extended::ZERO;
    let mut u_next = Extended::ZERO;

    let beta_x = Extended::from_f64(beta);
    let w_x = Extended::from_f64(w);

    for i in 0..MAX_TERMS {
        u = u_next;
        let gl = lgamma_of(Extended::from_f64(f64::from(kk + 1)) / beta_x)?
            - lgamma_of(Extended::from_f64(f64::from(kk + 1)))?
            + Extended::from_f64(f64::from(kk) + f64::from(u8::from(mu))) * w_x.ln();
        if gl.to_f64() > OVERFLOW_GUARD {
            return Err(KwwError::IntegrationFailed {
                omega: w,
                beta,
                reason: KernelFailure::GammaOverflow,
            });
        }
        u_next = gl.exp();
        if mu {
            u_next = u_next.mul_f64(1.0 / f64::from(kk + 1));
        }
        kk += 2;

        if i == 0 {
            continue;
        }

        sum = sum + Extended::from_f64(isig) * u;
        abs_sum = abs_sum + u;

        if debug.per_term_table() {
            log::trace!(
                "kww_low i={i} kk={kk} S={sum} T={abs_sum} u={u} u_next={u_next}"
            );
        }

        if (abs_sum.mul_f64(EPS) + u_next).le(sum.mul_f64(DELTA)) {
            return Ok(KernelOutput {
                value: sum.mul_f64(1.0 / beta),
                num_of_terms: i,
            });
        } else if abs_sum.mul_f64(EPS).ge(sum.mul_f64(DELTA)) {
            return Err(KwwError::IntegrationFailed {
                omega: w,
                beta,
                reason: KernelFailure::SeriesCancellation,
            });
        } else if beta < 1.0 && u_next.gt(u) {
            return Err(KwwError::IntegrationFailed {
                omega: w,
                beta,
                reason: KernelFailure::AsymptoticDivergence,
            });
        } else if sum.to_f64() < f64::MIN_POSITIVE {
            return Err(KwwError::IntegrationFailed {
                omega: w,
                beta,
                reason: KernelFailure::SumUnderflow,
            });
        }
        isig = -isig;
    }
    Err(KwwError::IntegrationFailed {
        omega: w,
        beta,
        reason: KernelFailure::NotConverged,
    })
}

/// `kwwc_low`: low-frequency series for the cosine transform.
///
/// # Errors
/// See [`kww_low`].
pub fn kwwc_low(w: f64, beta: f64, debug: DebugFlags) -> Result<KernelOutput, KwwError> {
    kww_low(w, beta, Kind::Cos, false, debug)
}

/// `kwws_low`: low-frequency series for the sine transform.
///
/// # Errors
/// See [`kww_low`].
pub fn kwws_low(w: f64, beta: f64, debug: DebugFlags) -> Result<KernelOutput, KwwError> {
    kww_low(w, beta, Kind::Sin, false, debug)
}

/// `kwwp_low`: low-frequency series for the primitive transform.
///
/// # Errors
/// See [`kww_low`].
pub fn kwwp_low(w: f64, beta: f64, debug: DebugFlags) -> Result<KernelOutput, KwwError> {
    kww_low(w, beta, Kind::Cos, true, debug)
}
