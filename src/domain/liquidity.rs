//! LP units: fungible claims on a pool's reserves.

use core::fmt;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::math::wide;

/// LP units issued by one pool.
///
/// A share of the pool's total supply entitles the holder to the same
/// share of both reserves, so it is kept apart from the single-token
/// [`Amount`](super::Amount).
///
/// # Examples
///
/// ```
/// use pairswap::domain::Liquidity;
///
/// let a = Liquidity::new(1_000);
/// let b = Liquidity::new(414);
/// assert_eq!(a.checked_add(&b), Some(Liquidity::new(1_414)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Liquidity(u128);

impl Liquidity {
    /// No liquidity.
    pub const ZERO: Self = Self(0);

    /// Wraps a raw unit count.
    pub const fn new(units: u128) -> Self {
        Self(units)
    }

    /// Raw unit count.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// `true` when no units are held.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Supply after issuing `other`, or `None` past `u128::MAX`.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Balance after burning `other`, or `None` when it is larger.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Widened for share computations against 256-bit reserves.
    #[must_use]
    pub fn widen(&self) -> U256 {
        wide::from_u128(self.0)
    }
}

impl fmt::Display for Liquidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
