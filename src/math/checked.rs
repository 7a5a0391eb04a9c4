//! `Result`-returning sums and differences for balances and LP units.
//!
//! Reserve and share bookkeeping in the pool uses [`CheckedArithmetic`] so
//! an overflow surfaces as [`AmmError::Overflow`] through `?`.
//!
//! # Examples
//!
//! ```
//! use pairswap::domain::Amount;
//! use pairswap::math::CheckedArithmetic;
//!
//! let sum = Amount::new(100).safe_add(&Amount::new(200));
//! assert_eq!(sum, Ok(Amount::new(300)));
//! assert!(Amount::new(1).safe_sub(&Amount::new(2)).is_err());
//! ```

use crate::domain::{Amount, Liquidity};
use crate::error::AmmError;

/// Overflow-reporting arithmetic on [`Amount`] and [`Liquidity`].
///
/// Neither method wraps or saturates.
pub trait CheckedArithmetic: Sized {
    /// `self + other`.
    ///
    /// # Errors
    ///
    /// [`AmmError::Overflow`] past `u128::MAX`.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// `self - other`.
    ///
    /// # Errors
    ///
    /// [`AmmError::Overflow`] when `other` is larger.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Overflow("amount subtraction underflow"))
    }
}

impl CheckedArithmetic for Liquidity {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("liquidity addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Overflow("liquidity subtraction underflow"))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn amount_overflow_is_labelled() {
        let Err(AmmError::Overflow(msg)) = Amount::new(u128::MAX).safe_add(&Amount::new(1)) else {
            panic!("expected Overflow");
        };
        assert!(msg.contains("amount"));
    }

    #[test]
    fn amount_difference() {
        assert_eq!(
            Amount::new(300).safe_sub(&Amount::new(100)),
            Ok(Amount::new(200))
        );
    }

    #[test]
    fn burning_more_than_supply_underflows() {
        let Err(AmmError::Overflow(msg)) = Liquidity::new(1).safe_sub(&Liquidity::new(2)) else {
            panic!("expected Overflow");
        };
        assert!(msg.contains("liquidity"));
    }

    #[test]
    fn liquidity_sum() {
        assert_eq!(
            Liquidity::new(1_000).safe_add(&Liquidity::new(414)),
            Ok(Liquidity::new(1_414))
        );
    }
}
