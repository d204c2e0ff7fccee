// ============================================================================
// Typed Fixed-Point Values
// Integer raw values tagged with their scale at compile time
// ============================================================================

use super::errors::NumericResult;
use super::scaled_decimal::{pow10, ScaledDecimal};
use crate::engine::percentage::percent_mul;
use crate::engine::rounding::{div_half_up, mul_half_up};
use crate::engine::wad_ray::{ray_to_wad, wad_to_ray};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Unsigned-integer style fixed-point value with compile-time scale.
///
/// Internally stores `value × 10^DECIMALS` as an integer, the way contracts
/// store wads and rays in `uint256`. Mixing scales does not compile:
/// a `Wad` can only meet a `Ray` through [`Wad::to_ray`] or [`Ray::to_wad`].
///
/// Multiplication and division round half up exactly like the free
/// functions in [`crate::engine`]; `Wad` mirrors `wad_mul`/`wad_div`,
/// `Ray` mirrors `ray_mul`/`ray_div` and `Percent` mirrors
/// `percent_mul`/`percent_div`.
///
/// # Example
/// ```
/// use wadray_math::numeric::{Ray, Wad};
///
/// let price = Wad::from_integer(2);
/// let amount = Wad::from_integer(3);
/// assert_eq!(price * amount, Wad::from_integer(6));
///
/// let index = Ray::from_integer(1);
/// assert_eq!(index.to_wad(), Wad::one());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FixedPoint<const DECIMALS: u8>(BigInt);

/// 18-decimal value
pub type Wad = FixedPoint<18>;

/// 27-decimal value
pub type Ray = FixedPoint<27>;

/// 4-decimal percentage, `10000` raw == 100%
pub type Percent = FixedPoint<4>;

impl<const D: u8> FixedPoint<D> {
    /// The scale factor (10^DECIMALS)
    pub fn scale() -> BigInt {
        pow10(u32::from(D))
    }

    /// Zero value
    pub fn zero() -> Self {
        Self(BigInt::zero())
    }

    /// One (1.0)
    pub fn one() -> Self {
        Self(Self::scale())
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation (already scaled).
    #[inline]
    pub fn from_raw(raw: impl Into<BigInt>) -> Self {
        Self(raw.into())
    }

    /// Create from an integer value.
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self(value.into() * Self::scale())
    }

    /// Scale a human value, dropping digits beyond `DECIMALS` places.
    pub fn from_scaled_decimal(value: &ScaledDecimal) -> Self {
        let raw = value.mul_pow10(u32::from(D)).trunc();
        Self(raw.mantissa().clone())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (scaled).
    #[inline]
    pub fn raw_value(&self) -> &BigInt {
        &self.0
    }

    /// The raw value as an untagged decimal.
    pub fn to_raw_decimal(&self) -> ScaledDecimal {
        ScaledDecimal::from_raw(self.0.clone())
    }

    /// The value in human units, exact.
    pub fn to_scaled_decimal(&self) -> ScaledDecimal {
        ScaledDecimal::from_parts(self.0.clone(), u32::from(D))
    }

    /// Get the integer part (truncated toward zero).
    pub fn integer_part(&self) -> BigInt {
        &self.0 / Self::scale()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Half-up division.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> NumericResult<Self> {
        let quotient =
            div_half_up(&self.to_raw_decimal(), &rhs.to_raw_decimal(), u32::from(D))?;
        Ok(Self(quotient.mantissa().clone()))
    }

    fn mul_ref(&self, rhs: &Self) -> Self {
        let product =
            mul_half_up(&self.to_raw_decimal(), &rhs.to_raw_decimal(), u32::from(D));
        Self(product.mantissa().clone())
    }
}

impl Wad {
    /// Rescale to 27 decimals (exact).
    pub fn to_ray(&self) -> Ray {
        let raw = wad_to_ray(&self.to_raw_decimal());
        Ray::from_raw(raw.mantissa().clone())
    }
}

impl Ray {
    /// Rescale to 18 decimals, rounding half up.
    pub fn to_wad(&self) -> Wad {
        let raw = ray_to_wad(&self.to_raw_decimal());
        Wad::from_raw(raw.mantissa().clone())
    }
}

impl Percent {
    /// Create from basis points: `from_bps(250)` is 2.50%.
    pub fn from_bps(bps: u32) -> Self {
        Self::from_raw(bps)
    }

    /// `percent_mul(value, self)` on an untagged integer amount.
    pub fn apply_to(&self, value: &ScaledDecimal) -> ScaledDecimal {
        percent_mul(value, &self.to_raw_decimal())
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<const D: u8> Add for FixedPoint<D> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl<const D: u8> Sub for FixedPoint<D> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl<const D: u8> Mul for FixedPoint<D> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_ref(&rhs)
    }
}

impl<'a, const D: u8> Mul<&'a FixedPoint<D>> for &'a FixedPoint<D> {
    type Output = FixedPoint<D>;

    #[inline]
    fn mul(self, rhs: &'a FixedPoint<D>) -> Self::Output {
        self.mul_ref(rhs)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<const D: u8> fmt::Debug for FixedPoint<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedPoint<{}>({}, raw={})", D, self, self.0)
    }
}

impl<const D: u8> fmt::Display for FixedPoint<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = Self::scale();
        let (int_part, frac_part) = self.0.magnitude().div_rem(scale.magnitude());
        let sign = if self.0.is_negative() { "-" } else { "" };

        if D == 0 {
            write!(f, "{}{}", sign, int_part)
        } else {
            write!(
                f,
                "{}{}.{:0>width$}",
                sign,
                int_part,
                frac_part.to_string(),
                width = D as usize
            )
        }
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
impl<const D: u8> serde::Serialize for FixedPoint<D> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de, const D: u8> serde::Deserialize<'de> for FixedPoint<D> {
    fn deserialize<De: serde::Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse::<BigInt>()
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
