// ============================================================================
// Binomial Compounding
// Truncated expansion of (1 + r)^n as evaluated by lending-pool contracts
// ============================================================================

use super::units::{one_ray, ray};
use super::wad_ray::ray_mul;
use crate::domain::config::CompoundConfig;
use crate::numeric::constants::{RAY_DECIMALS, WAD_DECIMALS};
use crate::numeric::{NumericResult, ScaledDecimal};
use std::num::NonZeroU32;

/// Digits dropped from the ray-scaled sum before it is returned.
const RESULT_SHIFT: u32 = RAY_DECIMALS - WAD_DECIMALS;

/// Approximate the growth factor `(1 + rate_per_period)^number_of_periods`.
///
/// The series `1 + n·r + C(n,2)·r² + ...` is accumulated in ray scale and
/// cut after `terms` coefficients (the constant term included). Each term is
/// derived from the previous one:
///
/// `el_i = trunc(ray_mul(el_{i-1} * (n - i), rate) / (i + 1))`
///
/// Evaluation stops early once `n <= i`, where all further binomial
/// coefficients are zero. The ray-scaled sum is finally truncated to nine
/// fractional digits and divided by `10^9`, so the returned factor is
/// wad-scaled and keeps up to eighteen fractional digits.
///
/// Zero periods return zero rather than the multiplicative identity.
///
/// # Example
/// ```
/// use wadray_math::prelude::*;
///
/// let rate: ScaledDecimal = "0.1".parse().unwrap();
/// let growth = binomial_compound(&rate, &ScaledDecimal::from(2), 5);
/// assert_eq!(growth, "1210000000000000000".parse::<ScaledDecimal>().unwrap()); // 1.21 in wad
/// ```
pub fn binomial_compound(
    rate_per_period: &ScaledDecimal,
    number_of_periods: &ScaledDecimal,
    terms: u32,
) -> ScaledDecimal {
    if number_of_periods.is_zero() {
        return ray(0);
    }

    let rate = ray(rate_per_period.clone());
    let mut el = &rate * number_of_periods;
    let mut result = &one_ray() + &el;

    for i in 1..terms {
        let index = ScaledDecimal::from(i);
        if *number_of_periods <= index {
            break;
        }

        let weighted = &el * &(number_of_periods - &index);
        el = ray_mul(&weighted, &rate).div_trunc_by(NonZeroU32::MIN.saturating_add(i));
        tracing::trace!("Binomial term {}: {}", i + 1, el);

        result = &result + &el;
    }

    result.trunc_to(RESULT_SHIFT).div_pow10(RESULT_SHIFT)
}

/// [`binomial_compound`] with the term budget taken from configuration.
///
/// # Errors
/// Returns `InvalidInput` if the configuration has no terms.
pub fn binomial_compound_with(
    rate_per_period: &ScaledDecimal,
    number_of_periods: &ScaledDecimal,
    config: &CompoundConfig,
) -> NumericResult<ScaledDecimal> {
    config.validate()?;
    Ok(binomial_compound(
        rate_per_period,
        number_of_periods,
        config.terms,
    ))
}
