//! Canonically ordered pair of distinct tokens.

use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

use super::address::ADDRESS_LEN;
use super::Address;
use crate::error::AmmError;

/// Domain separator mixed into every pool-address derivation.
const POOL_ADDRESS_DOMAIN: &[u8] = b"pairswap/pool/v1";

/// An unordered pair of distinct tokens stored in canonical order.
///
/// Construction sorts the two addresses so that `low < high`; `(A, B)` and
/// `(B, A)` therefore produce equal pairs, equal hashes and the same pool
/// address.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Address, TokenPair};
///
/// let a = Address::from_low_u64(1);
/// let b = Address::from_low_u64(2);
///
/// let pair = TokenPair::new(b, a).expect("distinct tokens");
/// assert_eq!(pair.low(), a);
/// assert_eq!(pair.high(), b);
/// assert_eq!(pair.pool_address(), TokenPair::new(a, b).expect("distinct").pool_address());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TokenPair {
    low: Address,
    high: Address,
}

impl TokenPair {
    /// Creates a canonically ordered `TokenPair`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalAddresses`] if both tokens are the same.
    /// - [`AmmError::ZeroAddress`] if either token is the null address.
    pub fn new(token_a: Address, token_b: Address) -> Result<Self, AmmError> {
        let (low, high) = sort_tokens(token_a, token_b)?;
        Ok(Self { low, high })
    }

    /// Returns the token with the lower address.
    #[must_use]
    pub const fn low(&self) -> Address {
        self.low
    }

    /// Returns the token with the higher address.
    #[must_use]
    pub const fn high(&self) -> Address {
        self.high
    }

    /// Returns `true` if `token` is one side of this pair.
    #[must_use]
    pub fn contains(&self, token: &Address) -> bool {
        self.low == *token || self.high == *token
    }

    /// Returns the counterpart of `token`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `token` is not in the pair.
    pub fn other(&self, token: &Address) -> Result<Address, AmmError> {
        if *token == self.low {
            Ok(self.high)
        } else if *token == self.high {
            Ok(self.low)
        } else {
            Err(AmmError::InvalidToken("token is not part of this pair"))
        }
    }

    /// Returns `true` if `token` is the low side, `false` if it is the high
    /// side.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `token` is not in the pair.
    pub fn is_low(&self, token: &Address) -> Result<bool, AmmError> {
        if *token == self.low {
            Ok(true)
        } else if *token == self.high {
            Ok(false)
        } else {
            Err(AmmError::InvalidToken("token is not part of this pair"))
        }
    }

    /// Deterministic address of the pool that trades this pair.
    ///
    /// The last 20 bytes of `keccak256(domain ‖ low ‖ high)`.  Anyone can
    /// compute it from the two token addresses without consulting the
    /// registry.
    #[must_use]
    pub fn pool_address(&self) -> Address {
        let mut hasher = Keccak256::new();
        hasher.update(POOL_ADDRESS_DOMAIN);
        hasher.update(self.low.as_bytes());
        hasher.update(self.high.as_bytes());
        let digest = hasher.finalize();

        let mut bytes = [0u8; ADDRESS_LEN];
        bytes.copy_from_slice(&digest[digest.len() - ADDRESS_LEN..]);
        Address::from_bytes(bytes)
    }
}

/// Sorts two token addresses into canonical `(low, high)` order.
///
/// # Errors
///
/// - [`AmmError::IdenticalAddresses`] if `token_a == token_b`.
/// - [`AmmError::ZeroAddress`] if the lower address is the null address.
pub fn sort_tokens(token_a: Address, token_b: Address) -> Result<(Address, Address), AmmError> {
    if token_a == token_b {
        return Err(AmmError::IdenticalAddresses);
    }
    let (low, high) = if token_a < token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    };
    if low.is_zero() {
        return Err(AmmError::ZeroAddress);
    }
    Ok((low, high))
}
