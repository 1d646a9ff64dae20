//! Empirically calibrated regime-limit curves `omega_L(beta)`, `omega_H(beta)`.
//!
//! Six closed-form functions, one for each of `{low, high} x {c, s, p}`,
//! give the frequency at which the dispatcher should stop trusting a
//! series kernel and hand off to the mid-frequency quadrature (or vice
//! versa). Each is a piecewise function of `beta`: a Horner polynomial
//! above a branch threshold, an `exp` of a polynomial in `1/beta` and
//! `beta` below it. The coefficients were fitted empirically against the
//! quadrature and are reproduced bit-for-bit; they carry no independent
//! derivation.

/// Low-frequency limit for the cosine transform `C`.
#[must_use]
pub fn kwwc_lim_low(beta: f64) -> f64 {
    if beta > 1.024 {
        -0.877_495_4 * beta + 3.5873 * beta.powi(2) - 2.083 * beta.powi(3) + 0.3796 * beta.powi(4)
    } else {
        (-0.021_94 / beta / beta - 4.130 / beta + 2.966_189 + 0.030_104 * beta + 1.062 * beta * beta)
            .exp()
    }
}

/// Low-frequency limit for the sine transform `S`.
#[must_use]
pub fn kwws_lim_low(beta: f64) -> f64 {
    if beta > 1.024 {
        -1.687_25 * beta + 4.8108 * beta.powi(2) - 2.561 * beta.powi(3) + 0.442 * beta.powi(4)
    } else {
        (-0.032_08 / beta / beta - 4.314 / beta + 3.516_200 - 0.502_87 * beta + 1.240 * beta * beta)
            .exp()
    }
}

/// Low-frequency limit for the primitive transform `P`.
#[must_use]
pub fn kwwp_lim_low(beta: f64) -> f64 {
    if beta > 1.085 {
        -10.499_09 + 19.236_18 * beta - 9.234_064 * beta.powi(2) + 1.553_016 * beta.powi(3)
    } else {
        (-0.022_599_71 / beta / beta - 4.099_837 / beta + 3.100_445 - 0.183_812_6 * beta
            + 1.118_149 * beta * beta)
            .exp()
    }
}

/// High-frequency limit for the cosine transform `C`.
#[must_use]
pub fn kwwc_lim_hig(beta: f64) -> f64 {
    if beta < 0.82 {
        (0.006_923_209 / beta / beta - 1.321_692 / beta - 1.445_82 + 2.516_339 * beta
            + 0.297_377_3 * beta * beta)
            .exp()
    } else {
        let d = beta - 0.82;
        (-0.746_496_154_631 + 6.057_558 * d - 3.41052 * d.powi(2) + 0.793_2314 * d.powi(3)).exp()
    }
}

/// High-frequency limit for the sine transform `S`.
#[must_use]
pub fn kwws_lim_hig(beta: f64) -> f64 {
    if beta < 0.82 {
        (0.078_475_16 / beta / beta - 2.585_876 / beta + 4.999_414 - 8.460_926 * beta
            + 6.289_183 * beta * beta)
            .exp()
    } else {
        let d = beta - 0.82;
        (-0.962_597_724_393 + 5.818_057 * d - 3.026_212 * d.powi(2) + 0.548_5754 * d.powi(3)).exp()
    }
}

/// High-frequency limit for the primitive transform `P`.
#[must_use]
pub fn kwwp_lim_hig(beta: f64) -> f64 {
    if beta < 0.82 {
        (0.003_809_101 / beta / beta - 1.955_504 / beta - 1.938_468 + 5.893_199 * beta
            - 2.197_289 * beta * beta)
            .exp()
    } else {
        let d = beta - 0.82;
        (-0.962_597_724_393 + 7.074_977 * d - 5.231_151 * d.powi(2) + 1.717_068 * d.powi(3)).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_are_positive_and_ordered() {
        let mut beta = 0.1;
        while beta <= 2.0 {
            assert!(kwwc_lim_low(beta) > 0.0);
            assert!(kwws_lim_low(beta) > 0.0);
            assert!(kwwp_lim_low(beta) > 0.0);
            assert!(kwwc_lim_hig(beta) > 0.0);
            assert!(kwws_lim_hig(beta) > 0.0);
            assert!(kwwp_lim_hig(beta) > 0.0);
            assert!(kwwc_lim_low(beta) < kwwc_lim_hig(beta));
            assert!(kwws_lim_low(beta) < kwws_lim_hig(beta));
            assert!(kwwp_lim_low(beta) < kwwp_lim_hig(beta));
            beta += 0.05;
        }
    }
}
