// ============================================================================
// Wad / Ray Operators
// 18- and 27-decimal fixed-point multiply, divide and rescale
// ============================================================================

use super::rounding::{div_half_up, half_of, mul_half_up};
use crate::numeric::constants::{RAY_DECIMALS, WAD_DECIMALS, WAD_RAY_RATIO};
use crate::numeric::{NumericResult, ScaledDecimal};

/// Number of decimals between wad and ray scale (`WAD_RAY_RATIO == 10^9`).
const WAD_RAY_DECIMALS: u32 = RAY_DECIMALS - WAD_DECIMALS;

/// Half-up multiplication of two wad-scaled values.
///
/// `trunc((a * b + HALF_WAD) / WAD)`
///
/// # Example
/// ```
/// use wadray_math::prelude::*;
///
/// let two = wad(2);
/// let three = wad(3);
/// assert_eq!(wad_mul(&two, &three), wad(6));
/// ```
pub fn wad_mul(a: &ScaledDecimal, b: &ScaledDecimal) -> ScaledDecimal {
    mul_half_up(a, b, WAD_DECIMALS)
}

/// Half-up division of two wad-scaled values.
///
/// `trunc((a * WAD + trunc(b / 2)) / b)`
///
/// # Errors
/// Returns `DivisionByZero` if `b` is zero.
pub fn wad_div(a: &ScaledDecimal, b: &ScaledDecimal) -> NumericResult<ScaledDecimal> {
    div_half_up(a, b, WAD_DECIMALS)
}

/// Half-up multiplication of two ray-scaled values.
///
/// `trunc((a * b + HALF_RAY) / RAY)`
pub fn ray_mul(a: &ScaledDecimal, b: &ScaledDecimal) -> ScaledDecimal {
    mul_half_up(a, b, RAY_DECIMALS)
}

/// Half-up division of two ray-scaled values.
///
/// `trunc((a * RAY + trunc(b / 2)) / b)`
///
/// # Errors
/// Returns `DivisionByZero` if `b` is zero.
pub fn ray_div(a: &ScaledDecimal, b: &ScaledDecimal) -> NumericResult<ScaledDecimal> {
    div_half_up(a, b, RAY_DECIMALS)
}

/// Rescale a wad value to ray. Exact for integer input.
///
/// `trunc(a * WAD_RAY_RATIO)`
pub fn wad_to_ray(a: &ScaledDecimal) -> ScaledDecimal {
    a.mul_pow10(WAD_RAY_DECIMALS).trunc()
}

/// Rescale a ray value to wad, rounding half up.
///
/// `trunc((a + trunc(WAD_RAY_RATIO / 2)) / WAD_RAY_RATIO)`
pub fn ray_to_wad(a: &ScaledDecimal) -> ScaledDecimal {
    let half_ratio = half_of(&ScaledDecimal::from(WAD_RAY_RATIO));
    (a + &half_ratio).div_pow10(WAD_RAY_DECIMALS).trunc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::constants::{HALF_RAY, HALF_WAD, RAY, WAD};
    use crate::numeric::NumericError;
    use proptest::prelude::*;

    fn sd(s: &str) -> ScaledDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_wad_mul_two_times_three() {
        let a = ScaledDecimal::from(2 * WAD);
        let b = ScaledDecimal::from(3 * WAD);
        assert_eq!(wad_mul(&a, &b), ScaledDecimal::from(6 * WAD));
    }

    #[test]
    fn test_wad_mul_rounds_half_up() {
        // 1 wei * 0.5 = 0.5 wei -> 1
        let half = ScaledDecimal::from(HALF_WAD);
        assert_eq!(wad_mul(&ScaledDecimal::one(), &half), ScaledDecimal::one());
        // 1 wei * (0.5 - 1 wei) -> 0
        let below_half = ScaledDecimal::from(HALF_WAD - 1);
        assert_eq!(wad_mul(&ScaledDecimal::one(), &below_half), ScaledDecimal::zero());
    }

    #[test]
    fn test_wad_div() {
        // 1.0 / 3.0 = 0.333...
        let one = ScaledDecimal::from(WAD);
        let three = ScaledDecimal::from(3 * WAD);
        assert_eq!(wad_div(&one, &three).unwrap(), sd("333333333333333333"));
        // 2.0 / 3.0 = 0.666...7 after rounding
        let two = ScaledDecimal::from(2 * WAD);
        assert_eq!(wad_div(&two, &three).unwrap(), sd("666666666666666667"));
    }

    #[test]
    fn test_ray_div_one_third() {
        let one = ScaledDecimal::from(RAY);
        let three = ScaledDecimal::from(3 * RAY);
        assert_eq!(
            ray_div(&one, &three).unwrap(),
            sd("333333333333333333333333333")
        );
    }

    #[test]
    fn test_ray_mul_rounds_half_up() {
        let half = ScaledDecimal::from(HALF_RAY);
        assert_eq!(ray_mul(&ScaledDecimal::one(), &half), ScaledDecimal::one());
        assert_eq!(
            ray_mul(&ScaledDecimal::from(3u32), &half),
            ScaledDecimal::from(2u32)
        );
    }

    #[test]
    fn test_division_by_zero() {
        let zero = ScaledDecimal::zero();
        for a in ["0", "1", "1000000000000000000", "0.5"] {
            assert_eq!(wad_div(&sd(a), &zero), Err(NumericError::DivisionByZero));
            assert_eq!(ray_div(&sd(a), &zero), Err(NumericError::DivisionByZero));
        }
    }

    #[test]
    fn test_wad_to_ray_and_back() {
        let one_wad = ScaledDecimal::from(WAD);
        assert_eq!(wad_to_ray(&one_wad), ScaledDecimal::from(RAY));
        assert_eq!(ray_to_wad(&ScaledDecimal::from(RAY)), one_wad);
    }

    #[test]
    fn test_ray_to_wad_rounding() {
        assert_eq!(ray_to_wad(&sd("499999999")), ScaledDecimal::zero());
        assert_eq!(ray_to_wad(&sd("500000000")), ScaledDecimal::one());
        assert_eq!(ray_to_wad(&sd("1499999999")), ScaledDecimal::one());
        assert_eq!(ray_to_wad(&sd("1500000000")), ScaledDecimal::from(2u32));
    }

    #[test]
    fn test_wad_to_ray_truncates_fractions() {
        assert_eq!(wad_to_ray(&sd("1.0000000019")), sd("1000000001"));
    }

    #[test]
    fn test_operands_commute_quickcheck() {
        fn prop(a: u64, b: u64) -> bool {
            let (a, b) = (ScaledDecimal::from(a), ScaledDecimal::from(b));
            wad_mul(&a, &b) == wad_mul(&b, &a) && ray_mul(&a, &b) == ray_mul(&b, &a)
        }
        quickcheck::QuickCheck::new().quickcheck(prop as fn(u64, u64) -> bool);
    }

    proptest! {
        #[test]
        fn prop_scaled_identity(a in any::<u128>()) {
            let a = ScaledDecimal::from(a);
            prop_assert_eq!(wad_mul(&a, &ScaledDecimal::from(WAD)), a.clone());
            prop_assert_eq!(ray_mul(&a, &ScaledDecimal::from(RAY)), a);
        }

        #[test]
        fn prop_wad_ray_round_trip_is_stable(a in any::<u128>()) {
            let a = ScaledDecimal::from(a);
            let as_ray = wad_to_ray(&a);
            prop_assert_eq!(wad_to_ray(&ray_to_wad(&as_ray)), as_ray);
            prop_assert_eq!(ray_to_wad(&wad_to_ray(&a)), a);
        }

        #[test]
        fn prop_wad_div_undoes_wad_mul_within_one(a in any::<u64>(), b in WAD..u128::MAX) {
            let a = ScaledDecimal::from(a);
            let b = ScaledDecimal::from(b);
            let back = wad_div(&wad_mul(&a, &b), &b).unwrap();
            prop_assert!((&back - &a).abs() <= ScaledDecimal::one());
        }

        #[test]
        fn prop_ray_div_undoes_ray_mul_within_one(a in any::<u64>(), b in RAY..u128::MAX) {
            let a = ScaledDecimal::from(a);
            let b = ScaledDecimal::from(b);
            let back = ray_div(&ray_mul(&a, &b), &b).unwrap();
            prop_assert!((&back - &a).abs() <= ScaledDecimal::one());
        }

        #[test]
        fn prop_results_are_integers(a in any::<u128>(), b in 1u128..=u128::MAX) {
            let a = ScaledDecimal::from(a);
            let b = ScaledDecimal::from(b);
            prop_assert!(wad_mul(&a, &b).is_integer());
            prop_assert!(ray_div(&a, &b).unwrap().is_integer());
        }
    }
}
