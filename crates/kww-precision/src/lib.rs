//! Double-double extended-precision arithmetic.
//!
//! The KWW transforms involve catastrophic cancellation between the
//! low-frequency series terms and between the Gaussian subtraction terms
//! used in the mid-frequency quadrature for `beta > 1.75`. Plain `f64`
//! loses enough digits in these regions that the double-exponential
//! quadrature cannot converge to a useful number of terms. This crate
//! provides a self-contained "double-double" (DD) floating point type,
//! carrying roughly 106 bits of mantissa as a pair of non-overlapping
//! `f64` values, which is enough headroom to keep the cancellation-prone
//! kernels accurate to full `f64` output precision.
//!
//! The algorithms (`two_sum`, `two_prod`, Newton-refined division and
//! square root, Taylor series for `exp`/`sin`/`cos` after range
//! reduction) follow the standard Dekker/Knuth/QD-library formulation.
//! No `unsafe` and no platform-specific `long double`/`__float128` is
//! required: every build gets the same ~106-bit precision regardless of
//! target.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// An extended-precision number represented as an unevaluated sum `hi + lo`
/// of two `f64`s, with `|lo| <= 0.5 * ulp(hi)`.
///
/// This is the `X` type referred to throughout the crate's numerical
/// kernels: every regime (low-frequency series, high-frequency series,
/// mid-frequency quadrature) is evaluated in `Extended` and only narrowed
/// to `f64` at the public API boundary.
#[derive(Clone, Copy, Debug, Default)]
pub struct Extended {
    hi: f64,
    lo: f64,
}

/// Error returned by [`Extended`] operations that are defined on a
/// restricted domain (currently just [`Extended::lgamma`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum PrecisionError {
    /// `lgamma` was called on a non-positive argument; this crate only
    /// implements the branch needed by the KWW kernels.
    LgammaDomain,
    /// A Newton iteration (division, square root, `ln`) failed to
    /// converge in the allotted number of steps, which can only happen
    /// on non-finite or zero input.
    NotFinite,
}

impl fmt::Display for PrecisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LgammaDomain => write!(f, "lgamma is only implemented for positive arguments"),
            Self::NotFinite => write!(f, "operand is not finite"),
        }
    }
}

impl std::error::Error for PrecisionError {}

// ---------------------------------------------------------------------
// Error-free transforms
// ---------------------------------------------------------------------

/// Knuth's `two_sum`: returns `(s, e)` with `s = fl(a + b)` and
/// `a + b = s + e` exactly.
#[inline]
fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let e = (a - (s - bb)) + (b - bb);
    (s, e)
}

/// Like [`two_sum`] but requires `|a| >= |b|`; one addition cheaper.
#[inline]
fn quick_two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let e = b - (s - a);
    (s, e)
}

/// Returns `(p, e)` with `p = fl(a * b)` and `a * b = p + e` exactly,
/// using a fused multiply-add instead of the classical Veltkamp split.
#[inline]
fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    let e = a.mul_add(b, -p);
    (p, e)
}

impl Extended {
    /// The additive identity.
    pub const ZERO: Self = Self { hi: 0.0, lo: 0.0 };
    /// The multiplicative identity.
    pub const ONE: Self = Self { hi: 1.0, lo: 0.0 };

    /// `pi` to double-double precision.
    pub const PI: Self = Self {
        hi: 3.141_592_653_589_793,
        lo: 1.224_646_799_147_353_2e-16,
    };

    /// `pi / 2` to double-double precision.
    pub const FRAC_PI_2: Self = Self {
        hi: 1.570_796_326_794_896_6,
        lo: 6.123_233_995_736_766e-17,
    };

    /// `2 * pi` to double-double precision.
    pub const TAU: Self = Self {
        hi: 6.283_185_307_179_586,
        lo: 2.449_293_598_294_706_4e-16,
    };

    /// `ln(2)` to double-double precision.
    pub const LN_2: Self = Self {
        hi: 0.693_147_180_559_945_3,
        lo: 2.319_046_813_846_299_6e-17,
    };

    /// Builds an `Extended` from a single `f64` (the low limb is zero).
    #[must_use]
    pub fn from_f64(x: f64) -> Self {
        Self { hi: x, lo: 0.0 }
    }

    /// Narrows back to `f64`, the precision at which the public KWW API
    /// returns its results.
    #[must_use]
    pub fn to_f64(self) -> f64 {
        self.hi
    }

    /// True if either limb is NaN or infinite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.hi.is_finite() && self.lo.is_finite()
    }

    #[must_use]
    fn renorm(hi: f64, lo: f64) -> Self {
        let (hi, lo) = quick_two_sum(hi, lo);
        Self { hi, lo }
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(self) -> Self {
        if self.hi < 0.0 || (self.hi == 0.0 && self.lo < 0.0) {
            -self
        } else {
            self
        }
    }

    /// `-self`.
    #[must_use]
    pub fn neg(self) -> Self {
        -self
    }

    fn cmp_order(self, other: Self) -> Ordering {
        self.hi
            .partial_cmp(&other.hi)
            .unwrap_or(Ordering::Equal)
            .then(self.lo.partial_cmp(&other.lo).unwrap_or(Ordering::Equal))
    }

    /// `self < other`.
    #[must_use]
    pub fn lt(self, other: Self) -> bool {
        self.cmp_order(other) == Ordering::Less
    }

    /// `self > other`.
    #[must_use]
    pub fn gt(self, other: Self) -> bool {
        self.cmp_order(other) == Ordering::Greater
    }

    /// `self >= other`.
    #[must_use]
    pub fn ge(self, other: Self) -> bool {
        self.cmp_order(other) != Ordering::Less
    }

    /// `self <= other`.
    #[must_use]
    pub fn le(self, other: Self) -> bool {
        self.cmp_order(other) != Ordering::Greater
    }

    /// Multiplies by a plain `f64` scalar.
    #[must_use]
    pub fn mul_f64(self, b: f64) -> Self {
        let (p, e) = two_prod(self.hi, b);
        let e = self.lo.mul_add(b, e);
        Self::renorm(p, e)
    }

    /// Square root via one Newton iteration on top of the `f64` estimate,
    /// which already doubles the correct digits to full DD precision
    /// (Karp's trick).
    #[must_use]
    pub fn sqrt(self) -> Self {
        if self.hi <= 0.0 {
            return Self::ZERO;
        }
        let x = 1.0 / self.hi.sqrt();
        let ax = self.mul_f64(x);
        let ax_sq_err = self - ax * ax;
        ax + ax_sq_err.mul_f64(x * 0.5)
    }

    /// Reciprocal via Newton-Raphson: `y_{n+1} = y_n * (2 - a * y_n)`.
    #[must_use]
    pub fn recip(self) -> Self {
        let y0 = Self::from_f64(1.0 / self.hi);
        let r = Self::ONE - self * y0;
        y0 + y0 * r
    }

    /// `e^self`, via scaling-and-squaring combined with a Taylor series:
    /// the argument is divided by `2^k` until it is small, the series is
    /// summed there, and the result is squared back `k` times.
    #[must_use]
    pub fn exp(self) -> Self {
        if self.hi > 700.0 {
            return Self {
                hi: f64::INFINITY,
                lo: 0.0,
            };
        }
        if self.hi < -700.0 {
            return Self::ZERO;
        }
        let k = (self.hi / Self::LN_2.hi).round();
        let r = self - Self::LN_2.mul_f64(k);

        let mut term = r;
        let mut sum = Self::ONE + r;
        for n in 2..=16 {
            term = (term * r).mul_f64(1.0 / f64::from(n));
            sum = sum + term;
            if term.hi.abs() < 1e-34 {
                break;
            }
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let reps = k as i32;
        let mut result = sum;
        for _ in 0..reps.unsigned_abs() {
            result = result * result;
        }
        if reps < 0 {
            result.recip()
        } else {
            result
        }
    }

    /// Natural logarithm, by Newton iteration on `exp`: starting from the
    /// `f64` estimate, `x_{n+1} = x_n + self * exp(-x_n) - 1`.
    #[must_use]
    pub fn ln(self) -> Self {
        if self.hi <= 0.0 {
            return Self {
                hi: f64::NAN,
                lo: 0.0,
            };
        }
        let mut x = Self::from_f64(self.hi.ln());
        for _ in 0..3 {
            let e = (-x).exp();
            x = x + self * e - Self::ONE;
        }
        x
    }

    /// `self.powf(y)`, implemented as `exp(y * ln(self))` for `self > 0`.
    #[must_use]
    pub fn powf(self, y: Self) -> Self {
        (y * self.ln()).exp()
    }

    /// Sine, by range-reducing into `[-pi, pi]` and summing the Taylor
    /// series, which converges in a handful of terms on that range.
    #[must_use]
    pub fn sin(self) -> Self {
        let r = Self::reduce_mod_tau(self);
        Self::sin_series(r)
    }

    /// Cosine, same range reduction as [`Extended::sin`].
    #[must_use]
    pub fn cos(self) -> Self {
        let r = Self::reduce_mod_tau(self);
        Self::cos_series(r)
    }

    /// Hyperbolic sine via `(e^x - e^-x) / 2`.
    #[must_use]
    pub fn sinh(self) -> Self {
        if self.hi.abs() < 1e-3 {
            // avoid cancellation for small arguments
            let mut term = self;
            let mut sum = self;
            let x2 = self * self;
            for n in 1..8 {
                let k = f64::from(2 * n) * f64::from(2 * n + 1);
                term = (term * x2).mul_f64(1.0 / k);
                sum = sum + term;
            }
            sum
        } else {
            let ex = self.exp();
            let enx = ex.recip();
            (ex - enx).mul_f64(0.5)
        }
    }

    /// Hyperbolic cosine via `(e^x + e^-x) / 2`.
    #[must_use]
    pub fn cosh(self) -> Self {
        let ex = self.exp();
        let enx = ex.recip();
        (ex + enx).mul_f64(0.5)
    }

    fn reduce_mod_tau(self) -> Self {
        let q = (self.hi / Self::TAU.hi).round();
        self - Self::TAU.mul_f64(q)
    }

    fn sin_series(x: Self) -> Self {
        let x2 = x * x;
        let mut term = x;
        let mut sum = x;
        for n in 1..12 {
            let k = f64::from(2 * n) * f64::from(2 * n + 1);
            term = (term * x2).mul_f64(-1.0 / k);
            sum = sum + term;
            if term.hi.abs() < 1e-34 {
                break;
            }
        }
        sum
    }

    fn cos_series(x: Self) -> Self {
        let x2 = x * x;
        let mut term = Self::ONE;
        let mut sum = Self::ONE;
        for n in 1..12 {
            let k = f64::from(2 * n - 1) * f64::from(2 * n);
            term = (term * x2).mul_f64(-1.0 / k);
            sum = sum + term;
            if term.hi.abs() < 1e-34 {
                break;
            }
        }
        sum
    }

    /// Log-gamma, via the Lanczos approximation with `g = 7, n = 9`,
    /// restricted to positive arguments: every call site in the KWW
    /// kernels evaluates `lgamma` on a positive stretching-exponent
    /// combination, so the reflection formula needed for negative
    /// arguments is deliberately not implemented.
    ///
    /// # Errors
    /// Returns [`PrecisionError::LgammaDomain`] if `self <= 0`.
    pub fn lgamma(self) -> Result<Self, PrecisionError> {
        const G: f64 = 7.0;
        const COEFFS: [f64; 9] = [
            0.999_999_999_999_809_93,
            676.520_368_121_885_1,
            -1259.139_216_722_402_8,
            771.323_428_777_653_1,
            -176.615_029_162_140_6,
            12.507_343_278_686_905,
            -0.138_571_095_265_720_12,
            9.984_369_578_019_572e-6,
            1.505_632_735_149_311_6e-7,
        ];

        if self.hi <= 0.0 {
            return Err(PrecisionError::LgammaDomain);
        }

        let x = self - Self::ONE;
        let mut a = Self::from_f64(COEFFS[0]);
        for (i, c) in COEFFS.iter().enumerate().skip(1) {
            #[allow(clippy::cast_precision_loss)]
            let i_f = i as f64;
            a = a + Self::from_f64(*c) * (x + Self::from_f64(i_f)).recip();
        }
        let t = x + Self::from_f64(G + 0.5);
        let half_log_two_pi = Self::from_f64(0.5 * (2.0 * std::f64::consts::PI).ln());

        let result = half_log_two_pi
            + (x + Self::from_f64(0.5)) * t.ln()
            + (-t)
            + a.ln();
        Ok(result)
    }
}

impl Add for Extended {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let (s, e) = two_sum(self.hi, rhs.hi);
        let (s2, e2) = two_sum(self.lo, rhs.lo);
        let e = e + s2;
        let (s, e) = quick_two_sum(s, e);
        let e = e + e2;
        Self::renorm(s, e)
    }
}

impl Sub for Extended {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Neg for Extended {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            hi: -self.hi,
            lo: -self.lo,
        }
    }
}

impl Mul for Extended {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let (p, e) = two_prod(self.hi, rhs.hi);
        let e = self.hi.mul_add(rhs.lo, e);
        let e = self.lo.mul_add(rhs.hi, e);
        Self::renorm(p, e)
    }
}

impl Div for Extended {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self * rhs.recip()
    }
}

impl fmt::Display for Extended {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.17e}", self.hi + self.lo)
    }
}

impl From<f64> for Extended {
    fn from(x: f64) -> Self {
        Self::from_f64(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Extended, b: f64, tol: f64) {
        let diff = (a.to_f64() - b).abs();
        assert!(
            diff <= tol,
            "expected {b}, got {} (diff {diff})",
            a.to_f64()
        );
    }

    #[test]
    fn add_matches_f64() {
        let a = Extended::from_f64(1.0);
        let b = Extended::from_f64(2.0);
        assert_close(a + b, 3.0, 1e-15);
    }

    #[test]
    fn exp_ln_roundtrip() {
        let x = Extended::from_f64(2.3);
        let y = x.exp().ln();
        assert_close(y, 2.3, 1e-20);
    }

    #[test]
    fn sin_cos_pythagorean() {
        let x = Extended::from_f64(1.234_567);
        let s = x.sin();
        let c = x.cos();
        let one = s * s + c * c;
        assert_close(one, 1.0, 1e-28);
    }

    #[test]
    fn sqrt_matches_f64() {
        let x = Extended::from_f64(2.0);
        assert_close(x.sqrt(), std::f64::consts::SQRT_2, 1e-20);
    }

    #[test]
    fn lgamma_known_values() {
        // Gamma(1) = 1, Gamma(2) = 1, Gamma(5) = 24
        assert_close(Extended::from_f64(1.0).lgamma().unwrap(), 0.0, 1e-12);
        assert_close(Extended::from_f64(2.0).lgamma().unwrap(), 0.0, 1e-12);
        assert_close(Extended::from_f64(5.0).lgamma().unwrap(), 24.0_f64.ln(), 1e-10);
    }

    #[test]
    fn lgamma_rejects_nonpositive() {
        assert_eq!(
            Extended::from_f64(0.0).lgamma(),
            Err(PrecisionError::LgammaDomain)
        );
        assert_eq!(
            Extended::from_f64(-1.0).lgamma(),
            Err(PrecisionError::LgammaDomain)
        );
    }

    #[test]
    fn sinh_cosh_identity() {
        let x = Extended::from_f64(0.75);
        let c = x.cosh();
        let s = x.sinh();
        let one = c * c - s * s;
        assert_close(one, 1.0, 1e-24);
    }
}
