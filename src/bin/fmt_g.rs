//! A minimal reimplementation of C's `printf("%W.Pg", ...)`: significant-
//! digit precision with an automatic choice between fixed and scientific
//! notation, trailing zeros stripped, right-justified in a field width.
//! None of Rust's built-in float specifiers have these semantics --
//! `{:.N}` fixes the digit count *after* the decimal point regardless of
//! magnitude, and `{:.Ne}` forces scientific notation -- so the reference
//! tools' `%g`-formatted columns need this instead.

/// Formats `value` as C's `%W.Pg` would: `precision` significant digits
/// (minimum 1), right-justified in a field of `width` characters.
pub fn format_g(value: f64, precision: usize, width: usize) -> String {
    let body = format_g_body(value, precision);
    format!("{body:>width$}")
}

fn format_g_body(value: f64, precision: usize) -> String {
    if value == 0.0 {
        return if value.is_sign_negative() {
            "-0".to_string()
        } else {
            "0".to_string()
        };
    }
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }

    let precision = precision.max(1);
    let negative = value.is_sign_negative();
    // Rounding to `precision` significant digits and reading off the
    // post-rounding decimal exponent is exactly what Rust's scientific
    // formatter already computes, including carry (e.g. 9.995 at 3 sig
    // figs becomes "1.00e1", not "10.0e0").
    let sci = format!("{:.*e}", precision - 1, value.abs());
    let (mantissa, exp_str) = sci.split_once('e').expect("LowerExp always emits an exponent");
    let exp: i32 = exp_str.parse().expect("LowerExp exponent is always a valid integer");

    let mut out = String::new();
    if negative {
        out.push('-');
    }

    if exp < -4 || exp >= i32::try_from(precision).unwrap_or(i32::MAX) {
        out.push_str(&strip_trailing_zeros(mantissa));
        out.push('e');
        out.push(if exp < 0 { '-' } else { '+' });
        out.push_str(&format!("{:02}", exp.unsigned_abs()));
    } else {
        let frac_digits = (i32::try_from(precision).unwrap_or(i32::MAX) - 1 - exp).max(0);
        #[allow(clippy::cast_sign_loss)]
        let fixed = format!("{:.*}", frac_digits as usize, value.abs());
        out.push_str(&strip_trailing_zeros(&fixed));
    }
    out
}

fn strip_trailing_zeros(s: &str) -> String {
    if !s.contains('.') {
        return s.to_string();
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_point_strips_trailing_zeros() {
        assert_eq!(format_g_body(0.5, 5), "0.5");
        assert_eq!(format_g_body(123.0, 6), "123");
    }

    #[test]
    fn matches_significant_digit_count() {
        assert_eq!(format_g_body(0.330_832_368_709_959_4, 19), "0.3308323687099594124");
    }

    #[test]
    fn switches_to_scientific_outside_exponent_range() {
        assert_eq!(format_g_body(9.999_990_000_010_000_6e-7, 19), "9.999990000010000613e-07");
        assert_eq!(format_g_body(2e-20, 5), "2e-20");
    }

    #[test]
    fn width_pads_with_leading_spaces() {
        assert_eq!(format_g(0.5, 5, 12), "       0.5");
        assert_eq!(format_g(0.5, 5, 3).len(), 3);
    }

    #[test]
    fn zero_and_negative_zero() {
        assert_eq!(format_g_body(0.0, 9), "0");
        assert_eq!(format_g_body(-0.0, 9), "-0");
    }
}
