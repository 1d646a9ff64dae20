//! Kohlrausch-Williams-Watts (KWW) spectrum.
//!
//! Computes the Laplace-Fourier transforms of the stretched exponential
//! relaxation function `exp(-t^beta)` for `beta` in `[0.1, 2.0]`:
//!
//! - `C(w, beta) = integral_0^inf cos(w t) exp(-t^beta) dt`
//! - `S(w, beta) = integral_0^inf sin(w t) exp(-t^beta) dt`
//! - `P(w, beta) = integral_0^w C(w', beta) dw'`
//!
//! These are used to fit relaxation spectra measured in disordered
//! systems, e.g. by neutron or dielectric spectroscopy. Except at
//! `beta = 1` (Lorentzian) and `beta = 2` (Gaussian) the integrals have
//! no closed form.
//!
//! # Usage Examples
//!
//! ```
//! let outcome = kww::kwwc(1.0, 0.623).expect("beta is in range");
//! assert!((outcome.value - 0.330_832_368_709_959_4).abs() < 1e-12);
//! ```
//!
//! Each call returns not just the transform value but a [`Diagnostics`]
//! readout of which of the three numerical regimes produced it:
//!
//! ```
//! use kww::Algorithm;
//! let outcome = kww::kwwc(1e3, 1.0).unwrap();
//! assert_eq!(outcome.diagnostics.algorithm, Algorithm::High);
//! ```
//!
//! # Numerical strategy
//!
//! For each `(w, beta)` the dispatcher picks one of three regimes: a
//! convergent low-frequency series, an asymptotic high-frequency
//! series, or a double-exponential quadrature used both as the
//! mid-frequency regime and as the fallback whenever a series fails to
//! converge. See [`dispatch`], [`series_low`], [`series_high`] and
//! [`quadrature`] for the per-regime documentation, and [`limits`] for
//! the empirical thresholds that pick between them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod consts;
mod diagnostics;
mod dispatch;
mod error;
mod limits;
mod quadrature;
mod series_high;
mod series_low;
#[cfg(test)]
mod tests;

pub use diagnostics::{Algorithm, DebugFlags, Diagnostics, Kind, KernelOutput, KwwOutcome};
pub use dispatch::{kwwc, kwwc_with_debug, kwwp, kwwp_with_debug, kwws, kwws_with_debug};
pub use error::{KernelFailure, KwwError};
pub use limits::{kwwc_lim_hig, kwwc_lim_low, kwwp_lim_hig, kwwp_lim_low, kwws_lim_hig, kwws_lim_low};
pub use quadrature::{kwwc_mid, kwwp_mid, kwws_mid};
pub use series_high::{kwwc_hig, kwwp_hig, kwws_hig};
pub use series_low::{kwwc_low, kwwp_low, kwws_low};
