// ============================================================================
// Scaled Decimal
// Arbitrary-precision decimal with exact add/sub/mul and explicit truncation
// ============================================================================

use super::errors::{NumericError, NumericResult};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::num::NonZeroU32;
use std::ops::{Add, Mul, Neg, Sub};

/// Arbitrary-precision signed decimal number.
///
/// Stores `mantissa / 10^scale`. The value carries no unit: whether it is
/// wad-scaled, ray-scaled, a percentage or a plain amount is tracked by the
/// caller (or by the typed wrappers in [`crate::numeric::fixed`]).
///
/// Values are kept normalized (no trailing zeros in the fractional part,
/// zero has scale 0), so derived equality and hashing compare numeric values.
///
/// Addition, subtraction and multiplication are exact. Every loss of
/// precision is an explicit call: [`trunc`](Self::trunc),
/// [`trunc_to`](Self::trunc_to), [`round_half_up_to`](Self::round_half_up_to)
/// or [`checked_div_trunc`](Self::checked_div_trunc).
///
/// # Example
/// ```
/// use wadray_math::numeric::ScaledDecimal;
///
/// let x: ScaledDecimal = "1.25".parse().unwrap();
/// let y = ScaledDecimal::from(4);
/// assert_eq!((&x * &y).to_string(), "5");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ScaledDecimal {
    mantissa: BigInt,
    scale: u32,
}

/// Largest absolute exponent accepted when parsing `"<digits>e<exp>"`.
///
/// A positive exponent materializes `10^exp` in the mantissa, so the cap
/// bounds the allocation of a single parse to roughly 400 KiB.
pub const MAX_PARSE_EXPONENT: i64 = 1_000_000;

/// rust_decimal supports at most 28 fractional digits.
const DECIMAL_MAX_SCALE: u32 = 28;

/// Compute 10^n as a big integer
pub(crate) fn pow10(n: u32) -> BigInt {
    BigInt::from(10u32).pow(n)
}

impl ScaledDecimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Wrap an integer without any scaling.
    #[inline]
    pub fn from_raw(raw: impl Into<BigInt>) -> Self {
        Self {
            mantissa: raw.into(),
            scale: 0,
        }
    }

    /// Create `mantissa / 10^scale`.
    pub fn from_parts(mantissa: impl Into<BigInt>, scale: u32) -> Self {
        Self::normalized(mantissa.into(), scale)
    }

    /// Zero
    pub fn zero() -> Self {
        Self::from_raw(BigInt::zero())
    }

    /// One
    pub fn one() -> Self {
        Self::from_raw(BigInt::one())
    }

    fn normalized(mut mantissa: BigInt, mut scale: u32) -> Self {
        if mantissa.is_zero() {
            return Self {
                mantissa,
                scale: 0,
            };
        }
        let ten = BigInt::from(10u32);
        while scale > 0 {
            let (q, r) = mantissa.div_rem(&ten);
            if !r.is_zero() {
                break;
            }
            mantissa = q;
            scale -= 1;
        }
        Self { mantissa, scale }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The unscaled integer digits.
    #[inline]
    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    /// Number of fractional digits.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.mantissa.is_negative()
    }

    /// True when the value has no fractional part.
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.scale == 0
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            mantissa: self.mantissa.abs(),
            scale: self.scale,
        }
    }

    // ========================================================================
    // Scale shifts (exact)
    // ========================================================================

    /// Multiply by 10^n.
    pub fn mul_pow10(&self, n: u32) -> Self {
        if n <= self.scale {
            Self::normalized(self.mantissa.clone(), self.scale - n)
        } else {
            Self::from_raw(&self.mantissa * pow10(n - self.scale))
        }
    }

    /// Divide by 10^n.
    pub fn div_pow10(&self, n: u32) -> Self {
        Self::normalized(self.mantissa.clone(), self.scale + n)
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Drop the fractional part, rounding toward zero.
    pub fn trunc(&self) -> Self {
        self.trunc_to(0)
    }

    /// Keep at most `places` fractional digits, rounding toward zero.
    pub fn trunc_to(&self, places: u32) -> Self {
        if self.scale <= places {
            return self.clone();
        }
        let divisor = pow10(self.scale - places);
        Self::normalized(&self.mantissa / divisor, places)
    }

    /// Keep at most `places` fractional digits, rounding half away from zero.
    pub fn round_half_up_to(&self, places: u32) -> Self {
        if self.scale <= places {
            return self.clone();
        }
        let divisor = pow10(self.scale - places);
        let (mut quotient, remainder) = self.mantissa.div_rem(&divisor);
        if remainder.abs() * 2u32 >= divisor {
            quotient += self.mantissa.signum();
        }
        Self::normalized(quotient, places)
    }

    // ========================================================================
    // Division
    // ========================================================================

    /// Exact quotient `self / divisor` truncated toward zero to an integer.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    pub fn checked_div_trunc(&self, divisor: &Self) -> NumericResult<Self> {
        if divisor.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        // (m1 / 10^s1) / (m2 / 10^s2) == (m1 * 10^s2) / (m2 * 10^s1)
        let numerator = &self.mantissa * pow10(divisor.scale);
        let denominator = &divisor.mantissa * pow10(self.scale);
        Ok(Self::from_raw(numerator / denominator))
    }

    /// Exact quotient `self / divisor` truncated toward zero to an integer.
    pub fn div_trunc_by(&self, divisor: NonZeroU32) -> Self {
        let denominator = BigInt::from(divisor.get()) * pow10(self.scale);
        Self::from_raw(&self.mantissa / denominator)
    }

    // ========================================================================
    // Narrowing
    // ========================================================================

    /// The value as a big integer, if it has no fractional part.
    pub fn to_bigint(&self) -> Option<BigInt> {
        self.is_integer().then(|| self.mantissa.clone())
    }

    /// Convert to `u128`.
    ///
    /// # Errors
    /// - `PrecisionLoss` if the value has a fractional part
    /// - `Underflow` if the value is negative
    /// - `Overflow` if the value exceeds `u128::MAX`
    pub fn to_u128(&self) -> NumericResult<u128> {
        if !self.is_integer() {
            return Err(NumericError::PrecisionLoss);
        }
        if self.is_negative() {
            return Err(NumericError::Underflow);
        }
        self.mantissa.to_u128().ok_or(NumericError::Overflow)
    }

    /// Convert to `i128`.
    ///
    /// # Errors
    /// - `PrecisionLoss` if the value has a fractional part
    /// - `Overflow` if the value is outside the `i128` range
    pub fn to_i128(&self) -> NumericResult<i128> {
        if !self.is_integer() {
            return Err(NumericError::PrecisionLoss);
        }
        self.mantissa.to_i128().ok_or(NumericError::Overflow)
    }

    fn aligned(&self, other: &Self) -> (BigInt, BigInt, u32) {
        match self.scale.cmp(&other.scale) {
            Ordering::Equal => (self.mantissa.clone(), other.mantissa.clone(), self.scale),
            Ordering::Less => (
                &self.mantissa * pow10(other.scale - self.scale),
                other.mantissa.clone(),
                other.scale,
            ),
            Ordering::Greater => (
                self.mantissa.clone(),
                &other.mantissa * pow10(self.scale - other.scale),
                self.scale,
            ),
        }
    }
}

// ============================================================================
// Arithmetic Operators
// ============================================================================

impl Add for &ScaledDecimal {
    type Output = ScaledDecimal;

    fn add(self, rhs: Self) -> Self::Output {
        let (a, b, scale) = self.aligned(rhs);
        ScaledDecimal::normalized(a + b, scale)
    }
}

impl Sub for &ScaledDecimal {
    type Output = ScaledDecimal;

    fn sub(self, rhs: Self) -> Self::Output {
        let (a, b, scale) = self.aligned(rhs);
        ScaledDecimal::normalized(a - b, scale)
    }
}

impl Mul for &ScaledDecimal {
    type Output = ScaledDecimal;

    fn mul(self, rhs: Self) -> Self::Output {
        ScaledDecimal::normalized(&self.mantissa * &rhs.mantissa, self.scale + rhs.scale)
    }
}

impl Add for ScaledDecimal {
    type Output = ScaledDecimal;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Sub for ScaledDecimal {
    type Output = ScaledDecimal;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Mul for ScaledDecimal {
    type Output = ScaledDecimal;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Neg for ScaledDecimal {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            mantissa: -self.mantissa,
            scale: self.scale,
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for ScaledDecimal {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialOrd for ScaledDecimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScaledDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b, _) = self.aligned(other);
        a.cmp(&b)
    }
}

impl From<BigInt> for ScaledDecimal {
    #[inline]
    fn from(value: BigInt) -> Self {
        Self::from_raw(value)
    }
}

impl From<BigUint> for ScaledDecimal {
    #[inline]
    fn from(value: BigUint) -> Self {
        Self::from_raw(BigInt::from(value))
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ScaledDecimal {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::from_raw(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_primitive!(i32, i64, i128, u32, u64, u128);

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for ScaledDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ScaledDecimal({}, mantissa={}, scale={})",
            self, self.mantissa, self.scale
        )
    }
}

/// Plain positional notation, never exponent form: `1500000`, `1.5`, `-0.001`.
impl fmt::Display for ScaledDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.mantissa);
        }

        let digits = self.mantissa.magnitude().to_string();
        let width = self.scale as usize + 1;
        let padded = format!("{:0>width$}", digits, width = width);
        let (int_part, frac_part) = padded.split_at(padded.len() - self.scale as usize);

        if self.is_negative() {
            write!(f, "-{}.{}", int_part, frac_part)
        } else {
            write!(f, "{}.{}", int_part, frac_part)
        }
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl ScaledDecimal {
    /// Convert from rust_decimal::Decimal. Always exact.
    pub fn from_decimal(d: rust_decimal::Decimal) -> Self {
        Self::normalized(BigInt::from(d.mantissa()), d.scale())
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// # Errors
    /// - `PrecisionLoss` if the value has more than 28 fractional digits
    /// - `Overflow` if the mantissa exceeds 96 bits
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        if self.scale > DECIMAL_MAX_SCALE {
            return Err(NumericError::PrecisionLoss);
        }
        let mantissa = self.mantissa.to_i128().ok_or(NumericError::Overflow)?;
        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, self.scale)
            .map_err(|_| NumericError::Overflow)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for ScaledDecimal {
    type Err = NumericError;

    /// Parse from a decimal string.
    ///
    /// # Examples
    /// - "123" -> 123
    /// - "-0.001" -> -0.001
    /// - ".5" -> 0.5
    /// - "1e18" -> 1000000000000000000
    /// - "2.5E-3" -> 0.0025
    ///
    /// Exponents beyond [`MAX_PARSE_EXPONENT`] in either direction are
    /// rejected with `InvalidInput`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let (is_negative, s) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        // Split off exponent
        let (number, exponent) = match s.find(['e', 'E']) {
            Some(pos) => {
                let exp: i64 = s[pos + 1..]
                    .parse()
                    .map_err(|_| NumericError::InvalidInput)?;
                if exp.abs() > MAX_PARSE_EXPONENT {
                    return Err(NumericError::InvalidInput);
                }
                (&s[..pos], exp)
            },
            None => (s, 0),
        };

        let (int_str, frac_str) = match number.find('.') {
            Some(pos) => (&number[..pos], &number[pos + 1..]),
            None => (number, ""),
        };

        if int_str.is_empty() && frac_str.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        let all_digits = int_str
            .bytes()
            .chain(frac_str.bytes())
            .all(|b| b.is_ascii_digit());
        if !all_digits {
            return Err(NumericError::InvalidInput);
        }

        let digits = format!("{}{}", int_str, frac_str);
        let mut mantissa =
            BigInt::parse_bytes(digits.as_bytes(), 10).ok_or(NumericError::InvalidInput)?;
        if is_negative {
            mantissa = -mantissa;
        }

        let scale = frac_str.len() as i64 - exponent;
        if scale >= 0 {
            let scale = u32::try_from(scale).map_err(|_| NumericError::InvalidInput)?;
            Ok(Self::normalized(mantissa, scale))
        } else {
            let shift = u32::try_from(-scale).map_err(|_| NumericError::InvalidInput)?;
            Ok(Self::from_raw(mantissa * pow10(shift)))
        }
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for ScaledDecimal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ScaledDecimal {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sd(s: &str) -> ScaledDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_normalization() {
        let x = ScaledDecimal::from_parts(1500, 3);
        assert_eq!(x.mantissa(), &BigInt::from(15));
        assert_eq!(x.scale(), 1);
        assert_eq!(x, sd("1.5"));

        let zero = ScaledDecimal::from_parts(0, 9);
        assert_eq!(zero.scale(), 0);
        assert_eq!(zero, ScaledDecimal::zero());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(sd("123").to_string(), "123");
        assert_eq!(sd("-0.001").to_string(), "-0.001");
        assert_eq!(sd(".5").to_string(), "0.5");
        assert_eq!(sd("5.").to_string(), "5");
        assert_eq!(sd("+42.10").to_string(), "42.1");
        assert_eq!(sd("1e18").to_string(), "1000000000000000000");
        assert_eq!(sd("2.5E-3").to_string(), "0.0025");
        assert_eq!(
            sd("115792089237316195423570985008687907853269984665640564039457584007913129639935")
                .to_string(),
            "115792089237316195423570985008687907853269984665640564039457584007913129639935"
        );
    }

    #[test]
    fn test_from_str_invalid() {
        for input in ["", "-", ".", "abc", "1.2.3", "1e", "1e1000001", "1e-1000001", "--1", "1_000"] {
            let result: Result<ScaledDecimal, _> = input.parse();
            assert_eq!(result, Err(NumericError::InvalidInput), "input {:?}", input);
        }
    }

    #[test]
    fn test_from_str_large_exponents() {
        let big = sd("1e5000");
        assert_eq!(big.scale(), 0);
        assert_eq!(big.mantissa(), &pow10(5000));

        let tiny = sd("-2.5e-5000");
        assert_eq!(tiny.scale(), 5001);
        assert_eq!(tiny.mantissa(), &BigInt::from(-25));

        let at_cap = format!("1e-{}", MAX_PARSE_EXPONENT);
        assert_eq!(sd(&at_cap).scale(), 1_000_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(ScaledDecimal::from_parts(-5, 3).to_string(), "-0.005");
        assert_eq!(ScaledDecimal::from_parts(123_456, 3).to_string(), "123.456");
        assert_eq!(ScaledDecimal::zero().to_string(), "0");
    }

    #[test]
    fn test_exact_arithmetic() {
        assert_eq!(&sd("0.1") + &sd("0.2"), sd("0.3"));
        assert_eq!(&sd("1") - &sd("1.25"), sd("-0.25"));
        assert_eq!(&sd("1.5") * &sd("1.5"), sd("2.25"));
        assert_eq!(-sd("2.5"), sd("-2.5"));
    }

    #[test]
    fn test_ordering() {
        assert!(sd("1.5") > sd("1.49999999999999999999999999"));
        assert!(sd("-1") < sd("0.0001"));
        assert_eq!(sd("2.50").cmp(&sd("2.5")), Ordering::Equal);
    }

    #[test]
    fn test_trunc_rounds_toward_zero() {
        assert_eq!(sd("1.999").trunc(), sd("1"));
        assert_eq!(sd("-1.999").trunc(), sd("-1"));
        assert_eq!(sd("1.23456").trunc_to(3), sd("1.234"));
        assert_eq!(sd("7").trunc_to(3), sd("7"));
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(sd("1.2345").round_half_up_to(3), sd("1.235"));
        assert_eq!(sd("1.2344").round_half_up_to(3), sd("1.234"));
        assert_eq!(sd("-1.2345").round_half_up_to(3), sd("-1.235"));
        assert_eq!(sd("0.5").round_half_up_to(0), sd("1"));
        assert_eq!(sd("9.99").round_half_up_to(1), sd("10"));
    }

    #[test]
    fn test_pow10_shifts() {
        assert_eq!(sd("1.5").mul_pow10(6), sd("1500000"));
        assert_eq!(sd("1.23456").mul_pow10(2), sd("123.456"));
        assert_eq!(sd("1500000").div_pow10(6), sd("1.5"));
    }

    #[test]
    fn test_checked_div_trunc() {
        assert_eq!(sd("10").checked_div_trunc(&sd("3")).unwrap(), sd("3"));
        assert_eq!(sd("-10").checked_div_trunc(&sd("3")).unwrap(), sd("-3"));
        assert_eq!(sd("1").checked_div_trunc(&sd("0.3")).unwrap(), sd("3"));
        assert_eq!(
            sd("1").checked_div_trunc(&ScaledDecimal::zero()),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_div_trunc_by() {
        let three = NonZeroU32::new(3).unwrap();
        assert_eq!(sd("10").div_trunc_by(three), sd("3"));
        assert_eq!(sd("10.5").div_trunc_by(three), sd("3"));
        assert_eq!(sd("-10").div_trunc_by(three), sd("-3"));
    }

    #[test]
    fn test_narrowing() {
        assert_eq!(sd("42").to_u128(), Ok(42));
        assert_eq!(sd("-42").to_i128(), Ok(-42));
        assert_eq!(sd("-42").to_u128(), Err(NumericError::Underflow));
        assert_eq!(sd("4.2").to_u128(), Err(NumericError::PrecisionLoss));
        assert_eq!(sd("1e40").to_u128(), Err(NumericError::Overflow));
        assert_eq!(sd("4.2").to_bigint(), None);
    }

    #[test]
    fn test_decimal_interop() {
        use rust_decimal::Decimal;

        let d = Decimal::new(12345, 2); // 123.45
        let x = ScaledDecimal::from_decimal(d);
        assert_eq!(x, sd("123.45"));
        assert_eq!(x.to_decimal().unwrap(), d);

        assert_eq!(sd("1e40").to_decimal(), Err(NumericError::Overflow));
        assert_eq!(
            sd("1e-29").to_decimal(),
            Err(NumericError::PrecisionLoss)
        );
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(ScaledDecimal::from(u128::MAX).to_u128(), Ok(u128::MAX));
        assert_eq!(ScaledDecimal::from(-7i64), sd("-7"));
        assert_eq!(ScaledDecimal::from(BigUint::from(9u32)), sd("9"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_string() {
        let x = sd("1.5");
        let json = serde_json::to_string(&x).unwrap();
        assert_eq!(json, "\"1.5\"");
        let back: ScaledDecimal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, x);
    }
}
