// ============================================================================
// Amount Conversion
// Moving values between human units and integer token amounts
// ============================================================================

use crate::numeric::constants::RAY_DECIMALS;
use crate::numeric::{NumericError, NumericResult, ScaledDecimal};

/// Validate a caller-supplied number of decimal places.
pub(crate) fn checked_places(decimals: i32) -> NumericResult<u32> {
    u32::try_from(decimals).map_err(|_| {
        tracing::debug!("Rejected negative decimal places: {}", decimals);
        NumericError::InvalidScale
    })
}

/// Scale a human value up to an integer amount: `trunc(value * 10^decimals)`.
///
/// # Errors
/// Returns `InvalidScale` if `decimals` is negative.
///
/// # Example
/// ```
/// use wadray_math::prelude::*;
///
/// let usdc: ScaledDecimal = "1.5".parse().unwrap();
/// assert_eq!(to_integer_amount(&usdc, 6).unwrap(), ScaledDecimal::from(1_500_000));
/// ```
pub fn to_integer_amount(value: &ScaledDecimal, decimals: i32) -> NumericResult<ScaledDecimal> {
    let places = checked_places(decimals)?;
    Ok(value.mul_pow10(places).trunc())
}

/// Scale an integer amount down to human units.
///
/// Digits below `decimals` fractional places are dropped first, then the
/// value is divided by `10^decimals` exactly.
///
/// # Errors
/// Returns `InvalidScale` if `decimals` is negative.
pub fn from_integer_amount(value: &ScaledDecimal, decimals: i32) -> NumericResult<ScaledDecimal> {
    let places = checked_places(decimals)?;
    Ok(value.trunc_to(places).div_pow10(places))
}

/// Render an integer amount in human units.
///
/// Applies [`from_integer_amount`] then rounds half up to `display_digits`
/// fractional places. Trailing zeros are not printed. Callers without a
/// display preference pass `display_digits == decimals`.
///
/// # Errors
/// Returns `InvalidScale` if either argument is negative.
pub fn to_human_string(
    value: &ScaledDecimal,
    decimals: i32,
    display_digits: i32,
) -> NumericResult<String> {
    let digits = checked_places(display_digits)?;
    let human = from_integer_amount(value, decimals)?;
    Ok(human.round_half_up_to(digits).to_string())
}

/// `to_integer_amount(value, 27)`
pub fn to_ray(value: &ScaledDecimal) -> ScaledDecimal {
    value.mul_pow10(RAY_DECIMALS).trunc()
}

/// `from_integer_amount(value, 27)`
pub fn from_ray(value: &ScaledDecimal) -> ScaledDecimal {
    value.trunc_to(RAY_DECIMALS).div_pow10(RAY_DECIMALS)
}

/// Integer part as a decimal string, truncated toward zero.
pub fn to_plain_string(value: &ScaledDecimal) -> String {
    value.trunc().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::constants::DEFAULT_DECIMALS;

    fn sd(s: &str) -> ScaledDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_to_integer_amount() {
        assert_eq!(to_integer_amount(&sd("1.5"), 6).unwrap(), sd("1500000"));
        assert_eq!(
            to_integer_amount(&sd("1.5"), DEFAULT_DECIMALS).unwrap(),
            sd("1500000000000000000")
        );
        // Sub-unit digits are dropped, not rounded
        assert_eq!(to_integer_amount(&sd("1.9999999"), 6).unwrap(), sd("1999999"));
        assert_eq!(to_integer_amount(&sd("42"), 0).unwrap(), sd("42"));
    }

    #[test]
    fn test_from_integer_amount() {
        assert_eq!(from_integer_amount(&sd("1500000"), 6).unwrap(), sd("1.5"));
        assert_eq!(
            from_integer_amount(&sd("1"), DEFAULT_DECIMALS).unwrap(),
            sd("0.000000000000000001")
        );
    }

    #[test]
    fn test_from_integer_amount_truncates_before_dividing() {
        // 1500000.99 keeps at most 6 fractional digits before the shift
        assert_eq!(from_integer_amount(&sd("1500000.99"), 6).unwrap(), sd("1.50000099"));
        assert_eq!(from_integer_amount(&sd("1.1234567"), 6).unwrap(), sd("0.000001123456"));
    }

    #[test]
    fn test_negative_decimals_rejected() {
        assert_eq!(
            to_integer_amount(&sd("1"), -1),
            Err(NumericError::InvalidScale)
        );
        assert_eq!(
            from_integer_amount(&sd("1"), -18),
            Err(NumericError::InvalidScale)
        );
        assert_eq!(
            to_human_string(&sd("1"), 18, -2),
            Err(NumericError::InvalidScale)
        );
    }

    #[test]
    fn test_to_human_string() {
        let amount = sd("1234567890000000000");
        assert_eq!(to_human_string(&amount, 18, 18).unwrap(), "1.23456789");
        assert_eq!(to_human_string(&amount, 18, 2).unwrap(), "1.23");
        assert_eq!(to_human_string(&amount, 18, 4).unwrap(), "1.2346");
        assert_eq!(to_human_string(&sd("1999999999999999999"), 18, 2).unwrap(), "2");
        assert_eq!(to_human_string(&sd("0"), 18, 18).unwrap(), "0");
    }

    #[test]
    fn test_ray_conversions() {
        assert_eq!(to_ray(&sd("0.05")), sd("50000000000000000000000000"));
        assert_eq!(from_ray(&sd("50000000000000000000000000")), sd("0.05"));
    }

    #[test]
    fn test_to_plain_string() {
        assert_eq!(to_plain_string(&sd("123.999")), "123");
        assert_eq!(to_plain_string(&sd("-0.5")), "0");
        assert_eq!(
            to_plain_string(&sd("1e27")),
            "1000000000000000000000000000"
        );
    }
}
