//! C-style `%g` number formatting.
//!
//! OpenSCAD reads any decimal or exponent notation, but scripts written by earlier
//! droplet builds used `%g`, and byte-identical output keeps them diffable.

use crate::float_types::Real;

/// Format `value` like C's `%g`: six significant digits.
pub fn format_g(value: Real) -> String {
    format_g_precision(value, 6)
}

/// Format `value` like C's `%.{precision}g`.
///
/// Trailing zeros and a trailing decimal point are dropped. Exponent notation is
/// used when the decimal exponent is below -4 or not below `precision`, with a
/// sign and at least two exponent digits. Non-finite values print as `nan`,
/// `-nan`, `inf` or `-inf`.
pub fn format_g_precision(value: Real, precision: usize) -> String {
    if value.is_nan() {
        return if value.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_drop_the_fraction() {
        assert_eq!(format_g(-90.0), "-90");
        assert_eq!(format_g(10.0), "10");
        assert_eq!(format_g(999.0), "999");
        assert_eq!(format_g(0.0), "0");
        assert_eq!(format_g(-0.0), "-0");
    }

    #[test]
    fn six_significant_digits() {
        assert_eq!(format_g(46.5), "46.5");
        assert_eq!(format_g(0.0872664625997165), "0.0872665");
        assert_eq!(format_g(1.0 / 3.0), "0.333333");
        assert_eq!(format_g(123456.7), "123457");
        assert_eq!(format_g(-2.5), "-2.5");
    }

    #[test]
    fn exponent_form_outside_the_fixed_range() {
        assert_eq!(format_g(1234567.0), "1.23457e+06");
        assert_eq!(format_g(0.0001), "0.0001");
        assert_eq!(format_g(0.00001234), "1.234e-05");
        assert_eq!(format_g(5.343e-17), "5.343e-17");
        assert_eq!(format_g(1e100), "1e+100");
        // rounding can bump the exponent into exponent form
        assert_eq!(format_g(999999.7), "1e+06");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_g(Real::INFINITY), "inf");
        assert_eq!(format_g(Real::NEG_INFINITY), "-inf");
        assert!(format_g(Real::NAN).ends_with("nan"));
    }

    #[test]
    fn custom_precision() {
        assert_eq!(format_g_precision(3.14159265, 3), "3.14");
        assert_eq!(format_g_precision(3.14159265, 0), "3");
    }
}
