//! Ethereum-style account address with `0x` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of hex digits in an address (20 bytes).
const HEX_LEN: usize = 40;

/// An account address, always `0x`-prefixed and stored lowercase.
///
/// The all-zero address is a sentinel: a governance-token delegation that
/// reads as [`Address::zero`] means the holder has not delegated yet.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(String);

/// Error returned when parsing a malformed address string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressParseError {
    #[error("address must start with 0x, got {0:?}")]
    MissingPrefix(String),

    #[error("address must be {HEX_LEN} hex digits, got {0}")]
    WrongLength(usize),

    #[error("address contains a non-hex character")]
    InvalidCharacter,
}

impl Address {
    /// Parse an address from its string form, normalizing to lowercase.
    pub fn parse(raw: &str) -> Result<Self, AddressParseError> {
        let hex = raw
            .strip_prefix("0x")
            .or_else(|| raw.strip_prefix("0X"))
            .ok_or_else(|| AddressParseError::MissingPrefix(raw.to_string()))?;

        if hex.len() != HEX_LEN {
            return Err(AddressParseError::WrongLength(hex.len()));
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AddressParseError::InvalidCharacter);
        }

        Ok(Self(format!("0x{}", hex.to_ascii_lowercase())))
    }

    /// The all-zero sentinel address ("undelegated").
    pub fn zero() -> Self {
        Self(format!("0x{}", "0".repeat(HEX_LEN)))
    }

    /// Whether this is the zero-address sentinel.
    pub fn is_zero(&self) -> bool {
        self.0[2..].bytes().all(|b| b == b'0')
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened display form: first 6 and last 4 characters.
    ///
    /// `0x1681a54319c17f5f54c981679ad10d2d2ffeff2c` → `0x1681...ff2c`.
    pub fn shorten(&self) -> String {
        format!("{}...{}", &self.0[..6], &self.0[self.0.len() - 4..])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_case() {
        let a = Address::parse("0x1681A54319C17F5f54C981679aD10D2D2FFEfF2c").unwrap();
        assert_eq!(a.as_str(), "0x1681a54319c17f5f54c981679ad10d2d2ffeff2c");
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            Address::parse("1681a54319c17f5f54c981679ad10d2d2ffeff2c"),
            Err(AddressParseError::MissingPrefix(
                "1681a54319c17f5f54c981679ad10d2d2ffeff2c".into()
            ))
        );
        assert_eq!(Address::parse("0x1234"), Err(AddressParseError::WrongLength(4)));
        assert_eq!(
            Address::parse("0xzz81a54319c17f5f54c981679ad10d2d2ffeff2c"),
            Err(AddressParseError::InvalidCharacter)
        );
    }

    #[test]
    fn zero_sentinel() {
        assert!(Address::zero().is_zero());
        let a = Address::parse("0x1681a54319c17f5f54c981679ad10d2d2ffeff2c").unwrap();
        assert!(!a.is_zero());
    }

    #[test]
    fn shorten_keeps_ends() {
        let a = Address::parse("0x1681a54319c17f5f54c981679ad10d2d2ffeff2c").unwrap();
        assert_eq!(a.shorten(), "0x1681...ff2c");
    }
}
