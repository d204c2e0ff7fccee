// ============================================================================
// Scale Constants
// Fixed-point scales used by on-chain lending math
// ============================================================================

use super::scaled_decimal::ScaledDecimal;
use num_bigint::BigInt;
use num_traits::One;

/// Basis of the `percent(n)` unit constructor: `percent(1) == 100`.
pub const PERCENTAGE_FACTOR: u128 = 100;

/// 100% in percentage math (two implied decimals on top of the percent).
pub const ONE_HUNDRED_PERCENT: u128 = 10_000;

/// Half of `ONE_HUNDRED_PERCENT`, the percent rounding addend.
pub const HALF_PERCENT: u128 = 5_000;

pub const PERCENT_DECIMALS: u32 = 4;

pub const WAD_DECIMALS: u32 = 18;

/// 1.0 in wad scale
pub const WAD: u128 = 1_000_000_000_000_000_000;

pub const HALF_WAD: u128 = 500_000_000_000_000_000;

pub const RAY_DECIMALS: u32 = 27;

/// 1.0 in ray scale
pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;

pub const HALF_RAY: u128 = 500_000_000_000_000_000_000_000_000;

/// RAY / WAD
pub const WAD_RAY_RATIO: u128 = 1_000_000_000;

/// Decimal places used by amount conversions when the caller has no token-specific value.
pub const DEFAULT_DECIMALS: i32 = 18;

/// 2^256 - 1, the largest on-chain unsigned amount
pub const MAX_UINT256: &str =
    "115792089237316195423570985008687907853269984665640564039457584007913129639935";

pub const SECONDS_PER_YEAR: u64 = 31_536_000;

pub const SECONDS_PER_HOUR: u64 = 3_600;

/// `MAX_UINT256` as a value.
pub fn max_uint256() -> ScaledDecimal {
    ScaledDecimal::from_raw((BigInt::one() << 256usize) - BigInt::one())
}
