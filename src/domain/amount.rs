//! Token quantities in base units.

use core::fmt;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::math::wide;

/// A raw token amount in the token's smallest unit.
///
/// Decimals are a presentation concern and never interpreted here.  Sums
/// and differences are checked; products and quotients go through
/// [`widen`](Self::widen) and the 256-bit helpers in [`crate::math::wide`].
///
/// # Examples
///
/// ```
/// use pairswap::domain::Amount;
///
/// let reserve = Amount::new(2_000);
/// assert_eq!(reserve.checked_sub(&Amount::new(181)), Some(Amount::new(1_819)));
/// assert!(Amount::MAX_RESERVE.checked_add(&Amount::MAX_RESERVE).is_some());
/// assert!(Amount::new(u128::MAX).checked_add(&Amount::new(1)).is_none());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Largest amount a pool reserve may hold (`2¹¹² − 1`).
    ///
    /// Keeping reserves within 112 bits guarantees that every product the
    /// pool computes fits a 256-bit intermediate.
    pub const MAX_RESERVE: Self = Self((1u128 << 112) - 1);

    /// Wraps a raw base-unit quantity.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Raw base-unit quantity.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// `true` for the empty amount.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// `self + other`, or `None` past `u128::MAX`.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// `self - other`, or `None` below zero.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Widens to 256 bits for overflow-free intermediate products.
    #[must_use]
    pub fn widen(&self) -> U256 {
        wide::from_u128(self.0)
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserve_bound_is_112_bits() {
        assert!(Amount::ZERO.is_zero());
        assert_eq!(Amount::MAX_RESERVE.get().leading_zeros(), 16);
        assert_eq!(Amount::MAX_RESERVE.get().count_ones(), 112);
    }

    #[test]
    fn checked_sum_and_difference() {
        let reserve = Amount::new(1_000);
        let trade = Amount::new(250);
        assert_eq!(reserve.checked_add(&trade), Some(Amount::new(1_250)));
        assert_eq!(reserve.checked_sub(&trade), Some(Amount::new(750)));
        assert_eq!(trade.checked_sub(&reserve), None);
        assert_eq!(Amount::new(u128::MAX).checked_add(&Amount::new(1)), None);
    }

    #[test]
    fn widen_preserves_value() {
        let a = Amount::new(u128::MAX);
        assert_eq!(wide::to_u128(a.widen()), Some(u128::MAX));
    }

    #[test]
    fn displays_base_units() {
        assert_eq!(Amount::from(1_000_000u128).to_string(), "1000000");
    }
}
