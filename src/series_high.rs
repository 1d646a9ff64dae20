//! High-frequency asymptotic series, in `1/w`.
//!
//! For `beta < 1` the series alternates in sign and needs no further
//! correction; for `beta >= 1` it is evaluated as an Euler-transformed
//! variant (effective exponent `b = 2 - beta`) whose tail is bounded by
//! successive powers of `truncfac = sin(phi)^(-beta)`, `phi = pi/(2*beta)`.

use crate::consts::{DELTA, EPS, OVERFLOW_GUARD, MAX_TERMS};
use crate::diagnostics::{DebugFlags, Kind, KernelOutput};
use crate::error::{KernelFailure, KwwError};
use kww_precision::Extended;

fn lgamma_of(x: Extended) -> Result<Extended, KernelFailure> {
    x.lgamma().map_err(|_| KernelFailure::GammaOverflow)
}

/// Generic high-frequency kernel; `kind` selects cosine (`kappa = 0`) or
/// sine (`kappa = 1`), `mu` selects the primitive transform (the caller,
/// [`kwwp_hig`], still owes the final `pi/2` complement).
///
/// # Errors
/// Returns [`KwwError::NonPositiveOmega`] if `w <= 0`, or wraps a
/// [`KernelFailure`] describing why the series failed to converge.
pub fn kww_hig(
    w: f64,
    beta: f64,
    kind: Kind,
    mu: bool,
    debug: DebugFlags,
) -> Result<KernelOutput, KwwError> {
    if w <= 0.0 {
        return Err(KwwError::NonPositiveOmega { omega: w });
    }

    let kappa = kind as i32;
    let alternating = beta < 1.0;
    let b = Extended::from_f64(if beta < 1.0 { beta } else { 2.0 - beta });
    let (sinphi, truncfac) = if beta < 1.0 {
        (Extended::ONE, Extended::ONE)
    } else {
        let sinphi = (Extended::FRAC_PI_2 / Extended::from_f64(beta)).sin();
        let truncfac = sinphi.powf(Extended::from_f64(-beta));
        (sinphi, truncfac)
    };
    let mut rfac = sinphi.recip();

    if debug.node_trace() {
        log::trace!("kww_hig sinphi={sinphi} truncfac={truncfac}");
    }

    let mut k = 1 - kappa;
    if k != 0 {
        rfac = rfac * truncfac;
    }
    let mut isig = 1.0_f64;
    let mut u = Extended::ZERO;
    let mut u_next = Extended::ZERO;
    let mut sum = Extended::ZERO;
    let mut t = Extended::ZERO;
    let beta_x = Extended::from_f64(beta);
    let w_x = Extended::from_f64(w);

    for i in 0..MAX_TERMS {
        u = u_next;
        let x = Extended::from_f64(f64::from(k)) * beta_x + Extended::ONE;
        let gl = lgamma_of(x)? - lgamma_of(Extended::from_f64(f64::from(k) + 1.0))?
            + (Extended::from_f64(f64::from(u8::from(mu))) - x) * w_x.ln();
        if gl.to_f64() > OVERFLOW_GUARD {
            return Err(KwwError::IntegrationFailed {
                omega: w,
                beta,
                reason: KernelFailure::GammaOverflow,
            });
        }
        u_next = gl.exp();
        if mu {
            u_next = u_next / (Extended::from_f64(f64::from(k)) * beta_x);
        }
        k += 1;

        if i == 0 {
            continue;
        }

        let phase = Extended::FRAC_PI_2 * Extended::from_f64(f64::from(k - 2)) * b;
        let trig = if kappa == 0 { phase.sin() } else { phase.cos() };
        let s = u.mul_f64(isig) * trig;
        sum = sum + s;
        let sabs = sum.abs();
        t = t + s.abs();
        rfac = rfac * truncfac;

        if debug.per_term_table() {
            log::trace!("kww_hig i={i} k={k} S={sum} s={s} u={u} u_next={u_next} rfac={rfac}");
        }

        if (t.mul_f64(EPS) + u_next * rfac).le(sabs.mul_f64(DELTA)) {
            return Ok(KernelOutput {
                value: sum,
                num_of_terms: i,
            });
        }
        if beta > 1.0 && (u_next * truncfac).gt(u) {
            return Err(KwwError::IntegrationFailed {
                omega: w,
                beta,
                reason: KernelFailure::AsymptoticDivergence,
            });
        }
        if sabs.to_f64() < f64::MIN_POSITIVE {
            return Err(KwwError::IntegrationFailed {
                omega: w,
                beta,
                reason: KernelFailure::SumUnderflow,
            });
        }
        if alternating {
            isig = -isig;
        }
    }
    Err(KwwError::IntegrationFailed {
        omega: w,
        beta,
        reason: KernelFailure::NotConverged,
    })
}

/// `kwwc_hig`: high-frequency series for the cosine transform.
///
/// # Errors
/// See [`kww_hig`].
pub fn kwwc_hig(w: f64, beta: f64, debug: DebugFlags) -> Result<KernelOutput, KwwError> {
    kww_hig(w, beta, Kind::Cos, false, debug)
}

/// `kwws_hig`: high-frequency series for the sine transform.
///
/// # Errors
/// See [`kww_hig`].
pub fn kwws_hig(w: f64, beta: f64, debug: DebugFlags) -> Result<KernelOutput, KwwError> {
    kww_hig(w, beta, Kind::Sin, false, debug)
}

/// `kwwp_hig`: high-frequency series for the primitive transform.
///
/// The raw series approximates `pi/2 - P`, so the result is
/// complemented here; a raw value `>= pi/2` is treated as an internal
/// inconsistency.
///
/// # Errors
/// See [`kww_hig`]; additionally returns
/// [`KwwError::PrimitiveOutOfBounds`] if the raw series result is
/// `>= pi/2`.
pub fn kwwp_hig(w: f64, beta: f64, debug: DebugFlags) -> Result<KernelOutput, KwwError> {
    let raw = kww_hig(w, beta, Kind::Cos, true, debug)?;
    if raw.value.ge(Extended::FRAC_PI_2) {
        return Err(KwwError::PrimitiveOutOfBounds {
            raw: raw.value.to_f64(),
        });
    }
    Ok(KernelOutput {
        value: Extended::FRAC_PI_2 - raw.value,
        num_of_terms: raw.num_of_terms,
    })
}
