// ============================================================================
// Numeric Errors
// Error types for scaled fixed-point arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur during scaled fixed-point arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Attempted division by zero
    DivisionByZero,
    /// A `decimals` or `display_digits` argument was negative
    InvalidScale,
    /// Input string or value is invalid
    InvalidInput,
    /// Value does not fit the requested native integer type
    Overflow,
    /// Negative value requested as an unsigned native integer
    Underflow,
    /// Narrowing would drop fractional digits
    PrecisionLoss,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidScale => {
                write!(f, "invalid scale: decimal places must be non-negative")
            },
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: value exceeds target integer range")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: negative value for unsigned target")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose fractional digits"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
