//! Opaque 20-byte identifiers for tokens, accounts and pools.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AmmError;

/// Width of an address in bytes.
pub const ADDRESS_LEN: usize = 20;

/// A contract-style address identifying a token, an account or a pool.
///
/// Addresses are totally ordered by their big-endian numeric value, which
/// is the order used to canonicalize token pairs.  The all-zero address is
/// the null token and doubles as the burn sink that permanently holds the
/// minimum liquidity of every pool.
///
/// Addresses render and parse as `0x`-prefixed lowercase hex.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Address;
///
/// let usdc = Address::from_low_u64(0xA0);
/// let parsed: Address = "0x00000000000000000000000000000000000000a0".parse().expect("hex");
/// assert_eq!(usdc, parsed);
/// assert!(Address::ZERO < usdc);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// The null address (also the LP burn sink).
    pub const ZERO: Self = Self([0u8; ADDRESS_LEN]);

    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Builds an address whose low eight bytes hold `value` (big-endian).
    ///
    /// Handy for fixtures: `from_low_u64(1) < from_low_u64(2)`.
    #[must_use]
    pub const fn from_low_u64(value: u64) -> Self {
        let be = value.to_be_bytes();
        let mut bytes = [0u8; ADDRESS_LEN];
        let mut i = 0;
        while i < 8 {
            bytes[ADDRESS_LEN - 8 + i] = be[i];
            i += 1;
        }
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Returns `true` for the null address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_LEN]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = AmmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let mut bytes = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| AmmError::InvalidToken("address must be 40 hex digits"))?;
        Ok(Self(bytes))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
