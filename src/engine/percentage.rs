// ============================================================================
// Percentage Operators
// Percentage math where 10000 == 100%
// ============================================================================

use super::rounding::{div_half_up, mul_half_up};
use crate::numeric::constants::PERCENT_DECIMALS;
use crate::numeric::{NumericResult, ScaledDecimal};

/// Apply a percentage to a value, rounding half up.
///
/// `trunc((value * percentage + HALF_PERCENT) / ONE_HUNDRED_PERCENT)`
///
/// # Example
/// ```
/// use wadray_math::prelude::*;
///
/// // 1000 * 2.50%
/// let fee = percent_mul(&ScaledDecimal::from(1000), &ScaledDecimal::from(250));
/// assert_eq!(fee, ScaledDecimal::from(25));
/// ```
pub fn percent_mul(value: &ScaledDecimal, percentage: &ScaledDecimal) -> ScaledDecimal {
    mul_half_up(value, percentage, PERCENT_DECIMALS)
}

/// Divide a value by a percentage, rounding half up.
///
/// `trunc((value * ONE_HUNDRED_PERCENT + trunc(percentage / 2)) / percentage)`
///
/// # Errors
/// Returns `DivisionByZero` if `percentage` is zero.
pub fn percent_div(
    value: &ScaledDecimal,
    percentage: &ScaledDecimal,
) -> NumericResult<ScaledDecimal> {
    div_half_up(value, percentage, PERCENT_DECIMALS)
}
