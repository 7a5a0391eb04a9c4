//! Outcome of a single-hop swap.

use core::fmt;

use super::{Address, Amount};
use crate::error::AmmError;

/// What one pool received and paid out in a single hop.
///
/// # Invariants
///
/// `amount_in > 0`, `amount_out > 0` and `token_in != token_out`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapResult {
    token_in: Address,
    token_out: Address,
    amount_in: Amount,
    amount_out: Amount,
}

impl SwapResult {
    /// Creates a validated `SwapResult`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientInputAmount`] if `amount_in` is zero.
    /// - [`AmmError::InsufficientOutputAmount`] if `amount_out` is zero.
    /// - [`AmmError::IdenticalAddresses`] if the two tokens coincide.
    pub fn new(
        token_in: Address,
        token_out: Address,
        amount_in: Amount,
        amount_out: Amount,
    ) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(AmmError::InsufficientInputAmount);
        }
        if amount_out.is_zero() {
            return Err(AmmError::InsufficientOutputAmount);
        }
        if token_in == token_out {
            return Err(AmmError::IdenticalAddresses);
        }
        Ok(Self {
            token_in,
            token_out,
            amount_in,
            amount_out,
        })
    }

    /// Token sold into the pool.
    #[must_use]
    pub const fn token_in(&self) -> Address {
        self.token_in
    }

    /// Token paid out by the pool.
    #[must_use]
    pub const fn token_out(&self) -> Address {
        self.token_out
    }

    /// Input amount received by the pool.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Output amount paid by the pool.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }
}

impl fmt::Display for SwapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {} {}",
            self.amount_in, self.token_in, self.amount_out, self.token_out
        )
    }
}
