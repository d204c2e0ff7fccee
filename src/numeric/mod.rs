// ============================================================================
// Numeric Module
// Arbitrary-precision values and scale constants for wad/ray math
// ============================================================================
//
// This module provides:
// - ScaledDecimal: untagged arbitrary-precision decimal
// - FixedPoint<D>: integer raw value tagged with its scale (Wad, Ray, Percent)
// - NumericError: Error types for arithmetic operations
// - Scale constants (WAD, RAY, percentage factors, MAX_UINT256)
//
// Design principles:
// - No floating-point operations
// - Exact add/sub/mul; every rounding step is an explicit call
// - Fallible operations return Result (no panics)

pub mod constants;
mod errors;
pub mod fixed;
mod scaled_decimal;

pub use errors::{NumericError, NumericResult};
pub use fixed::{FixedPoint, Percent, Ray, Wad};
pub use scaled_decimal::{ScaledDecimal, MAX_PARSE_EXPONENT};
