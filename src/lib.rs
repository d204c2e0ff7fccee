// ============================================================================
// Wad/Ray Math Library
// Arbitrary-precision fixed-point math with on-chain rounding semantics
// ============================================================================

//! # Wad/Ray Math
//!
//! Deterministic fixed-point arithmetic that reproduces the integer math of
//! lending-pool contracts (wad = 10^18, ray = 10^27, percentages with
//! 10000 = 100%) for off-chain test harnesses and simulations.
//!
//! ## Features
//!
//! - **Bit-exact rounding**: half-up via a truncated half-divisor addend,
//!   then truncating division, as integer-only contracts do
//! - **Arbitrary precision**: no overflow at `uint256` magnitudes
//! - **Typed scales**: [`numeric::Wad`], [`numeric::Ray`] and
//!   [`numeric::Percent`] keep scales from being mixed by accident
//! - **Binomial compounding**: the truncated `(1 + r)^n` expansion used to
//!   accrue interest on-chain
//!
//! ## Example
//!
//! ```rust
//! use wadray_math::prelude::*;
//!
//! // 2.0 * 3.0 in wad scale
//! assert_eq!(wad_mul(&wad(2), &wad(3)), wad(6));
//!
//! // 1 / 3 in ray scale
//! let third = ray_div(&ray(1), &ray(3)).unwrap();
//! assert_eq!(third.to_string(), "333333333333333333333333333");
//!
//! // 1000 * 2.50%
//! let rate = percent("2.5".parse::<ScaledDecimal>().unwrap());
//! assert_eq!(percent_mul(&ScaledDecimal::from(1000), &rate), ScaledDecimal::from(25));
//!
//! // Token amounts
//! let usdc = to_integer_amount(&"1.5".parse().unwrap(), 6).unwrap();
//! assert_eq!(usdc, ScaledDecimal::from(1_500_000));
//! assert_eq!(to_human_string(&usdc, 6, 6).unwrap(), "1.5");
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{CompoundConfig, DisplayConfig};
    pub use crate::engine::{
        amount, binomial_compound, binomial_compound_with, from_integer_amount, from_ray,
        one_ray, one_wad, percent, percent_div, percent_mul, ray, ray_div, ray_mul, ray_to_wad,
        to_human_string, to_integer_amount, to_plain_string, to_ray, wad, wad_div, wad_mul,
        wad_to_ray,
    };
    pub use crate::numeric::constants::{
        DEFAULT_DECIMALS, HALF_PERCENT, HALF_RAY, HALF_WAD, ONE_HUNDRED_PERCENT,
        PERCENTAGE_FACTOR, RAY, SECONDS_PER_HOUR, SECONDS_PER_YEAR, WAD, WAD_RAY_RATIO,
    };
    pub use crate::numeric::{NumericError, NumericResult, Percent, Ray, ScaledDecimal, Wad};
}
