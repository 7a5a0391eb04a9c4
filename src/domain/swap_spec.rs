//! Which side of a trade the caller fixes.

use super::Amount;
use crate::error::AmmError;

/// The constraint that drives a trade: either the input or the output is
/// fixed and the other side is computed.
///
/// Zero is rejected at construction, so a held spec always moves tokens.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, SwapSpec};
///
/// let spec = SwapSpec::exact_in(Amount::new(1_000)).expect("non-zero");
/// assert!(spec.is_exact_in());
/// assert!(SwapSpec::exact_out(Amount::ZERO).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapSpec {
    /// The caller sells exactly `amount_in`.
    ExactIn {
        /// The fixed input amount.
        amount_in: Amount,
    },
    /// The caller buys exactly `amount_out`.
    ExactOut {
        /// The fixed output amount.
        amount_out: Amount,
    },
}

impl SwapSpec {
    /// Creates an exact-input specification.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientInputAmount`] if `amount` is zero.
    pub const fn exact_in(amount: Amount) -> crate::error::Result<Self> {
        if amount.is_zero() {
            return Err(AmmError::InsufficientInputAmount);
        }
        Ok(Self::ExactIn { amount_in: amount })
    }

    /// Creates an exact-output specification.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientOutputAmount`] if `amount` is zero.
    pub const fn exact_out(amount: Amount) -> crate::error::Result<Self> {
        if amount.is_zero() {
            return Err(AmmError::InsufficientOutputAmount);
        }
        Ok(Self::ExactOut { amount_out: amount })
    }

    /// Returns `true` for [`SwapSpec::ExactIn`].
    #[must_use]
    pub const fn is_exact_in(&self) -> bool {
        matches!(self, Self::ExactIn { .. })
    }

    /// The fixed amount, whichever side it is on.
    pub const fn amount(&self) -> Amount {
        match self {
            Self::ExactIn { amount_in } => *amount_in,
            Self::ExactOut { amount_out } => *amount_out,
        }
    }
}
