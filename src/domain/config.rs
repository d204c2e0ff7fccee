// ============================================================================
// Engine Configuration
// Term budget for compounding and display settings for token amounts
// ============================================================================

use crate::engine::conversion::to_human_string;
use crate::numeric::{NumericError, NumericResult, ScaledDecimal};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of binomial terms evaluated on-chain.
pub const DEFAULT_COMPOUND_TERMS: u32 = 5;

// ============================================================================
// Compounding
// ============================================================================

/// Configuration of the binomial compounding approximation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompoundConfig {
    /// Number of binomial coefficients evaluated, including the constant
    /// term. `5` stops after the 5th power term.
    pub terms: u32,
}

impl CompoundConfig {
    pub fn new(terms: u32) -> Self {
        Self { terms }
    }

    /// Term budget used by lending-pool contracts
    pub fn on_chain() -> Self {
        Self::new(DEFAULT_COMPOUND_TERMS)
    }

    /// Enough terms that the expansion is exact for up to `periods` periods.
    pub fn exact_up_to(periods: u32) -> Self {
        Self::new(periods.saturating_add(1))
    }

    /// Validate the configuration
    pub fn validate(&self) -> NumericResult<()> {
        if self.terms == 0 {
            return Err(NumericError::InvalidInput);
        }
        Ok(())
    }
}

impl Default for CompoundConfig {
    fn default() -> Self {
        Self::on_chain()
    }
}

// ============================================================================
// Display
// ============================================================================

/// How integer token amounts are rendered for humans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Token decimals (scale of the integer amount)
    pub decimals: u32,

    /// Fractional digits kept after rounding half up
    pub display_digits: u32,
}

impl DisplayConfig {
    /// Display every significant digit of a token with `decimals` decimals.
    pub fn new(decimals: u32) -> Self {
        Self {
            decimals,
            display_digits: decimals,
        }
    }

    /// Builder pattern: round to `display_digits` fractional places
    pub fn with_display_digits(mut self, display_digits: u32) -> Self {
        self.display_digits = display_digits;
        self
    }

    /// 18-decimal tokens (ETH, DAI)
    pub fn ether() -> Self {
        Self::new(18)
    }

    /// 6-decimal stablecoins (USDC, USDT)
    pub fn usdc() -> Self {
        Self::new(6)
    }

    /// Ray-scaled rates and indexes
    pub fn ray() -> Self {
        Self::new(27)
    }

    /// Render an integer amount with this configuration.
    ///
    /// # Errors
    /// Returns `InvalidScale` if a setting does not fit the signed range
    /// accepted by [`to_human_string`].
    pub fn format(&self, amount: &ScaledDecimal) -> NumericResult<String> {
        let decimals = i32::try_from(self.decimals).map_err(|_| NumericError::InvalidScale)?;
        let digits = i32::try_from(self.display_digits).map_err(|_| NumericError::InvalidScale)?;
        to_human_string(amount, decimals, digits)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::ether()
    }
}
