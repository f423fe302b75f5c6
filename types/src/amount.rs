//! Governance token amounts.
//!
//! Amounts are fixed-point integers (u128 raw units, 18 decimals) to avoid
//! floating-point errors. The gateway transports them as decimal strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of decimal places in the display denomination.
pub const DECIMALS: u32 = 18;

/// A governance token amount, stored as raw units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TokenAmount(u128);

impl TokenAmount {
    pub const ZERO: Self = Self(0);

    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Whole-token display value, truncating fractional units.
    pub fn display_value(&self) -> u128 {
        self.0 / 10u128.pow(DECIMALS)
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_truncates_fraction() {
        let amount = TokenAmount::new(1_500_000_000_000_000_000);
        assert_eq!(amount.display_value(), 1);
        assert_eq!(amount.to_string(), "1");
    }

    #[test]
    fn zero() {
        assert!(TokenAmount::ZERO.is_zero());
        assert_eq!(TokenAmount::ZERO.display_value(), 0);
    }
}
