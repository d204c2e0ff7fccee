// ============================================================================
// Unit Constructors
// Exact scaling of plain numbers into wad, ray, percent and token units
// ============================================================================

use super::conversion::checked_places;
use crate::numeric::constants::{PERCENTAGE_FACTOR, RAY_DECIMALS, WAD_DECIMALS};
use crate::numeric::{NumericResult, ScaledDecimal};

/// `n * WAD`, exact.
pub fn wad(n: impl Into<ScaledDecimal>) -> ScaledDecimal {
    n.into().mul_pow10(WAD_DECIMALS)
}

/// `n * RAY`, exact.
pub fn ray(n: impl Into<ScaledDecimal>) -> ScaledDecimal {
    n.into().mul_pow10(RAY_DECIMALS)
}

/// `n * PERCENTAGE_FACTOR`: `percent(2.5)` is 2.50% in percentage math.
pub fn percent(n: impl Into<ScaledDecimal>) -> ScaledDecimal {
    &n.into() * &ScaledDecimal::from(PERCENTAGE_FACTOR)
}

/// `n * 10^decimals`, exact. Unlike
/// [`to_integer_amount`](super::conversion::to_integer_amount) nothing is truncated.
///
/// # Errors
/// Returns `InvalidScale` if `decimals` is negative.
pub fn amount(n: impl Into<ScaledDecimal>, decimals: i32) -> NumericResult<ScaledDecimal> {
    let places = checked_places(decimals)?;
    Ok(n.into().mul_pow10(places))
}

/// 1.0 in wad scale
pub fn one_wad() -> ScaledDecimal {
    wad(1)
}

/// 1.0 in ray scale
pub fn one_ray() -> ScaledDecimal {
    ray(1)
}
