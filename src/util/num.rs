use crate::error::CalcError;

/// Formats a result the way the calculator display shows it.
///
/// Values without a fractional part are printed without one (`4`, not `4.0`).
/// Everything else uses the shortest decimal form that reads back as the same
/// `f64`, without rounding and without exponent notation. Negative zero is
/// printed as `0`.
///
/// ## Parameters
/// - `value`: The value to format. Non-finite values are formatted as Rust
///   prints them (`inf`, `NaN`); the display path rejects them earlier with
///   [`ensure_finite`].
///
/// ## Example
/// ```
/// use calcpad::util::num::format_result;
///
/// assert_eq!(format_result(4.0), "4");
/// assert_eq!(format_result(-0.0), "0");
/// assert_eq!(format_result(1.0 / 3.0), "0.3333333333333333");
/// assert_eq!(format_result(2.5e-7), "0.00000025");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if is_integral(value) {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Returns `true` if `value` is finite and has no fractional part.
///
/// ## Example
/// ```
/// use calcpad::util::num::is_integral;
///
/// assert!(is_integral(56.0));
/// assert!(!is_integral(0.5));
/// assert!(!is_integral(f64::INFINITY));
/// ```
#[must_use]
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Passes finite values through and turns infinity and NaN into an error.
///
/// ## Errors
/// Returns `CalcError::NonFinite` carrying the rejected value.
///
/// ## Example
/// ```
/// use calcpad::{error::CalcError, util::num::ensure_finite};
///
/// assert_eq!(ensure_finite(1.5), Ok(1.5));
/// assert_eq!(ensure_finite(f64::INFINITY), Err(CalcError::NonFinite(f64::INFINITY)));
/// ```
pub fn ensure_finite(value: f64) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NonFinite(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_have_no_fraction() {
        assert_eq!(format_result(56.0), "56");
        assert_eq!(format_result(-9.0), "-9");
        assert_eq!(format_result(1e21), "1000000000000000000000");
    }

    #[test]
    fn fractions_keep_full_precision() {
        assert_eq!(format_result(0.25), "0.25");
        assert_eq!(format_result(2.0 / 3.0), "0.6666666666666666");
        assert_eq!(format_result(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn nan_is_not_finite() {
        assert!(matches!(ensure_finite(f64::NAN), Err(CalcError::NonFinite(v)) if v.is_nan()));
        assert!(ensure_finite(f64::NEG_INFINITY).is_err());
    }
}
