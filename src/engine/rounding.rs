// ============================================================================
// Half-Up Rounding Core
// Shared multiply/divide kernel behind the wad, ray and percent operators
// ============================================================================
//
// Every scaled operator rounds the same way integer-only contracts do:
// pre-add half of the divisor (itself truncated), then truncate the quotient.
// The half-addend truncation and the final truncation are two separate steps;
// they differ from a single round-half-up for odd divisors.

use crate::numeric::{NumericError, NumericResult, ScaledDecimal};

/// `trunc(value / 2)`
pub(crate) fn half_of(value: &ScaledDecimal) -> ScaledDecimal {
    (value * &ScaledDecimal::from(5)).div_pow10(1).trunc()
}

/// `trunc((a * b + trunc(10^decimals / 2)) / 10^decimals)`
pub(crate) fn mul_half_up(a: &ScaledDecimal, b: &ScaledDecimal, decimals: u32) -> ScaledDecimal {
    let half_scale = half_of(&ScaledDecimal::one().mul_pow10(decimals));
    (&(a * b) + &half_scale).div_pow10(decimals).trunc()
}

/// `trunc((a * 10^decimals + trunc(b / 2)) / b)`
///
/// # Errors
/// Returns `DivisionByZero` if `b` is zero.
pub(crate) fn div_half_up(
    a: &ScaledDecimal,
    b: &ScaledDecimal,
    decimals: u32,
) -> NumericResult<ScaledDecimal> {
    if b.is_zero() {
        tracing::debug!("Rejected scaled division of {} by zero", a);
        return Err(NumericError::DivisionByZero);
    }
    let half_b = half_of(b);
    (&a.mul_pow10(decimals) + &half_b).checked_div_trunc(b)
}
