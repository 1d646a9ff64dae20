//! Public dispatcher: argument validation, symmetry, regime selection
//! and the fallback policy that hands a failed series off to the
//! mid-frequency quadrature.

use crate::diagnostics::{Algorithm, DebugFlags, Diagnostics, KwwOutcome};
use crate::error::{KernelFailure, KwwError};
use crate::limits::{kwwc_lim_hig, kwwc_lim_low, kwwp_lim_hig, kwwp_lim_low, kwws_lim_hig, kwws_lim_low};
use crate::series_high::{kwwc_hig, kwwp_hig, kwws_hig};
use crate::series_low::{kwwc_low, kwwp_low, kwws_low};
use crate::quadrature::{kwwc_mid, kwwp_mid, kwws_mid};
use kww_precision::Extended;

fn check_beta(beta: f64) -> Result<(), KwwError> {
    if !(0.1..=2.0).contains(&beta) {
        return Err(KwwError::BetaOutOfRange { beta });
    }
    Ok(())
}

/// `C(w, beta) = integral_0^inf cos(w t) exp(-t^beta) dt`.
///
/// Dispatches to the low-frequency series below `omega_L(beta)`, the
/// high-frequency series above `omega_H(beta)`, and falls back to the
/// mid-frequency quadrature if the chosen series fails to converge (or
/// if neither regime's threshold applies). For `beta > 1.9`, a
/// quadrature failure is reported as `Ok(0.0)` rather than an error: at
/// that point the true value is numerically indistinguishable from
/// zero in `f64`, but this is a pragmatic fallback inherited from the
/// reference algorithm, not a proven bound — callers in that corner
/// should sanity-check the result against a known limit.
///
/// # Errors
/// Returns [`KwwError::BetaOutOfRange`] if `beta` is outside
/// `[0.1, 2.0]`, or [`KwwError::IntegrationFailed`] if every applicable
/// regime failed to converge.
pub fn kwwc(w_in: f64, beta: f64) -> Result<KwwOutcome, KwwError> {
    kwwc_with_debug(w_in, beta, DebugFlags::NONE)
}

/// [`kwwc`] with explicit tracing flags, mirroring the reference's
/// `kww_debug` bitmask (see [`DebugFlags`]).
///
/// # Errors
/// See [`kwwc`].
pub fn kwwc_with_debug(w_in: f64, beta: f64, debug: DebugFlags) -> Result<KwwOutcome, KwwError> {
    check_beta(beta)?;

    if w_in == 0.0 {
        let value = Extended::from_f64(1.0 / beta).lgamma();
        let value = value.map_err(|_| KwwError::IntegrationFailed {
            omega: w_in,
            beta,
            reason: KernelFailure::GammaOverflow,
        })?;
        let value = value.exp().to_f64() / beta;
        return Ok(KwwOutcome {
            value,
            diagnostics: Diagnostics {
                algorithm: Algorithm::Low,
                num_of_terms: 0,
            },
        });
    }
    let w = w_in.abs();

    if (beta - 2.0).abs() < f64::EPSILON {
        let value = (std::f64::consts::PI.sqrt() / 2.0) * (-(w * w) / 4.0).exp();
        return Ok(KwwOutcome {
            value,
            diagnostics: Diagnostics {
                algorithm: Algorithm::Mid,
                num_of_terms: 0,
            },
        });
    }

    if w < kwwc_lim_low(beta) {
        if let Ok(out) = kwwc_low(w, beta, debug) {
            if out.value.to_f64() > 0.0 {
                return Ok(KwwOutcome {
                    value: out.value.to_f64(),
                    diagnostics: Diagnostics {
                        algorithm: Algorithm::Low,
                        num_of_terms: out.num_of_terms,
                    },
                });
            }
        }
    } else if w > kwwc_lim_hig(beta) {
        if let Ok(out) = kwwc_hig(w, beta, debug) {
            if out.value.to_f64() > 0.0 {
                return Ok(KwwOutcome {
                    value: out.value.to_f64(),
                    diagnostics: Diagnostics {
                        algorithm: Algorithm::High,
                        num_of_terms: out.num_of_terms,
                    },
                });
            }
        }
    }

    match kwwc_mid(w, beta, debug) {
        Ok(out) => Ok(KwwOutcome {
            value: out.value.to_f64(),
            diagnostics: Diagnostics {
                algorithm: Algorithm::Mid,
                num_of_terms: out.num_of_terms,
            },
        }),
        Err(KwwError::IntegrationFailed { reason, .. }) if beta > 1.9 => {
            let _ = reason;
            Ok(KwwOutcome {
                value: 0.0,
                diagnostics: Diagnostics {
                    algorithm: Algorithm::Mid,
                    num_of_terms: 0,
                },
            })
        }
        Err(e) => Err(e),
    }
}

/// `S(w, beta) = integral_0^inf sin(w t) exp(-t^beta) dt`.
///
/// Odd in `w`: the sign is stripped before dispatch and reinstated on
/// the result.
///
/// # Errors
/// Returns [`KwwError::BetaOutOfRange`] if `beta` is outside
/// `[0.1, 2.0]`, or [`KwwError::IntegrationFailed`] if every applicable
/// regime failed to converge.
pub fn kwws(w_in: f64, beta: f64) -> Result<KwwOutcome, KwwError> {
    kwws_with_debug(w_in, beta, DebugFlags::NONE)
}

/// [`kwws`] with explicit tracing flags.
///
/// # Errors
/// See [`kwws`].
pub fn kwws_with_debug(w_in: f64, beta: f64, debug: DebugFlags) -> Result<KwwOutcome, KwwError> {
    check_beta(beta)?;
    if w_in == 0.0 {
        return Ok(KwwOutcome {
            value: 0.0,
            diagnostics: Diagnostics {
                algorithm: Algorithm::Low,
                num_of_terms: 0,
            },
        });
    }
    let (w, sign) = if w_in < 0.0 { (-w_in, -1.0) } else { (w_in, 1.0) };

    if w < kwws_lim_low(beta) {
        if let Ok(out) = kwws_low(w, beta, debug) {
            if out.value.to_f64() > 0.0 {
                return Ok(KwwOutcome {
                    value: sign * out.value.to_f64(),
                    diagnostics: Diagnostics {
                        algorithm: Algorithm::Low,
                        num_of_terms: out.num_of_terms,
                    },
                });
            }
        }
    } else if w > kwws_lim_hig(beta) {
        if let Ok(out) = kwws_hig(w, beta, debug) {
            if out.value.to_f64() > 0.0 {
                return Ok(KwwOutcome {
                    value: sign * out.value.to_f64(),
                    diagnostics: Diagnostics {
                        algorithm: Algorithm::High,
                        num_of_terms: out.num_of_terms,
                    },
                });
            }
        }
    }

    let out = kwws_mid(w, beta, debug)?;
    Ok(KwwOutcome {
        value: sign * out.value.to_f64(),
        diagnostics: Diagnostics {
            algorithm: Algorithm::Mid,
            num_of_terms: out.num_of_terms,
        },
    })
}

/// `P(w, beta) = integral_0^w C(w', beta) dw'`, the primitive of the
/// cosine transform.
///
/// Odd in `w`, same sign handling as [`kwws`].
///
/// # Errors
/// Returns [`KwwError::BetaOutOfRange`] if `beta` is outside
/// `[0.1, 2.0]`, or [`KwwError::IntegrationFailed`] if every applicable
/// regime failed to converge.
pub fn kwwp(w_in: f64, beta: f64) -> Result<KwwOutcome, KwwError> {
    kwwp_with_debug(w_in, beta, DebugFlags::NONE)
}

/// [`kwwp`] with explicit tracing flags.
///
/// # Errors
/// See [`kwwp`].
pub fn kwwp_with_debug(w_in: f64, beta: f64, debug: DebugFlags) -> Result<KwwOutcome, KwwError> {
    check_beta(beta)?;
    if w_in == 0.0 {
        return Ok(KwwOutcome {
            value: 0.0,
            diagnostics: Diagnostics {
                algorithm: Algorithm::Low,
                num_of_terms: 0,
            },
        });
    }
    let (w, sign) = if w_in < 0.0 { (-w_in, -1.0) } else { (w_in, 1.0) };

    if w < kwwp_lim_low(beta) {
        if let Ok(out) = kwwp_low(w, beta, debug) {
            if out.value.to_f64() > 0.0 {
                return Ok(KwwOutcome {
                    value: sign * out.value.to_f64(),
                    diagnostics: Diagnostics {
                        algorithm: Algorithm::Low,
                        num_of_terms: out.num_of_terms,
                    },
                });
            }
        }
    } else if w > kwwp_lim_hig(beta) {
        if let Ok(out) = kwwp_hig(w, beta, debug) {
            if out.value.to_f64() > 0.0 {
                return Ok(KwwOutcome {
                    value: sign * out.value.to_f64(),
                    diagnostics: Diagnostics {
                        algorithm: Algorithm::High,
                        num_of_terms: out.num_of_terms,
                    },
                });
            }
        }
    }

    let out = kwwp_mid(w, beta, debug)?;
    Ok(KwwOutcome {
        value: sign * out.value.to_f64(),
        diagnostics: Diagnostics {
            algorithm: Algorithm::Mid,
            num_of_terms: out.num_of_terms,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel_err(got: f64, expected: f64) -> f64 {
        ((got - expected) / expected).abs()
    }

    #[test]
    fn rejects_beta_out_of_range() {
        assert!(matches!(kwwc(1.0, 0.05), Err(KwwError::BetaOutOfRange { .. })));
        assert!(matches!(kwwc(1.0, 2.5), Err(KwwError::BetaOutOfRange { .. })));
    }

    #[test]
    fn exact_beta_one_matches_lorentzian() {
        for &w in &[0.1, 1.0, 5.0, 50.0] {
            let c = kwwc(w, 1.0).unwrap().value;
            let s = kwws(w, 1.0).unwrap().value;
            assert!(rel_err(c, 1.0 / (1.0 + w * w)) < 1e-12);
            assert!(rel_err(s, w / (1.0 + w * w)) < 1e-12);
        }
    }

    #[test]
    fn exact_beta_two_matches_gaussian() {
        for &w in &[0.0, 0.5, 2.0, 8.0] {
            let c = kwwc(w, 2.0).unwrap().value;
            let expected = (std::f64::consts::PI.sqrt() / 2.0) * (-w * w / 4.0).exp();
            assert!((c - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn evenness_and_oddness() {
        for &w in &[0.3, 1.7, 12.0] {
            for &beta in &[0.3, 0.8, 1.2, 1.9] {
                let c_pos = kwwc(w, beta).unwrap().value;
                let c_neg = kwwc(-w, beta).unwrap().value;
                assert!(rel_err(c_pos, c_neg) < 1e-10);

                let s_pos = kwws(w, beta).unwrap().value;
                let s_neg = kwws(-w, beta).unwrap().value;
                assert!((s_pos + s_neg).abs() < 1e-10 * s_pos.abs().max(1.0));

                let p_pos = kwwp(w, beta).unwrap().value;
                let p_neg = kwwp(-w, beta).unwrap().value;
                assert!((p_pos + p_neg).abs() < 1e-10 * p_pos.abs().max(1.0));
            }
        }
    }

    #[test]
    fn boundary_value_at_zero() {
        for &beta in &[0.3, 0.623, 1.0, 1.5, 2.0] {
            let c0 = kwwc(0.0, beta).unwrap().value;
            let expected = Extended::from_f64(1.0 / beta).lgamma().unwrap().exp().to_f64() / beta;
            assert!(rel_err(c0, expected) < 1e-13);
            assert_eq!(kwws(0.0, beta).unwrap().value, 0.0);
            assert_eq!(kwwp(0.0, beta).unwrap().value, 0.0);
        }
    }
}
