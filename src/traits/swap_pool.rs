//! Core swap pool trait for executing swaps and querying pool state.
//!
//! [`SwapPool`] is the foundational abstraction the router drives.  It
//! covers the full lifecycle of a single-hop trade:
//!
//! 1. **Execute** — [`SwapPool::swap`] prices and settles a trade.
//! 2. **Inspect reserves** — [`SwapPool::reserves`] returns the current
//!    `(low, high)` snapshot.
//! 3. **Inspect pair** — [`SwapPool::token_pair`] returns the canonical
//!    token pair managed by the pool.
//! 4. **Inspect fees** — [`SwapPool::fee_tier`] returns the pool's fee.
//!
//! # Fee Invariant
//!
//! The fee is applied to the input before pricing and is never withdrawn:
//!
//! ```text
//! in_with_fee = amount_in × (10 000 − fee_bps)
//! amount_out  = in_with_fee × r_out / (r_in × 10 000 + in_with_fee)
//! ```
//!
//! so the reserve product strictly grows on every trade with a nonzero fee.

use crate::domain::{Address, Amount, FeeTier, Reserves, SwapResult, SwapSpec, TokenPair};
use crate::error::AmmError;

/// A two-token pool that can execute trades.
///
/// # Errors
///
/// Methods that can fail return [`Result<T, AmmError>`].  Common error
/// variants include:
///
/// - [`AmmError::InsufficientLiquidity`] — reserves too low for the swap
/// - [`AmmError::InvalidToken`] — input token is not part of the pool pair
/// - [`AmmError::InvariantViolation`] — the fee-adjusted product decreased
/// - [`AmmError::Overflow`] — a reserve would exceed its bound
pub trait SwapPool {
    /// Executes a single-hop trade selling `token_in`.
    ///
    /// For [`SwapSpec::ExactIn`] the pool computes the maximum output; for
    /// [`SwapSpec::ExactOut`] it computes the minimum input.  Either way the
    /// trade is re-verified against the invariant before reserves change.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidToken`] if `token_in` is not in the pair.
    /// - [`AmmError::InsufficientLiquidity`] if a reserve is empty or the
    ///   requested output would drain it.
    /// - [`AmmError::Overflow`] if a reserve would exceed its bound.
    fn swap(&mut self, spec: SwapSpec, token_in: Address) -> Result<SwapResult, AmmError>;

    /// Current reserves in canonical order.
    #[must_use]
    fn reserves(&self) -> Reserves;

    /// The canonical token pair.  Immutable for the lifetime of the pool.
    #[must_use]
    fn token_pair(&self) -> &TokenPair;

    /// The fee tier applied to every swap.
    #[must_use]
    fn fee_tier(&self) -> FeeTier;

    /// Reserves oriented as `(reserve_in, reserve_out)` for a trade that
    /// sells `token_in`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `token_in` is not in the pair.
    fn reserves_for(&self, token_in: &Address) -> Result<(Amount, Amount), AmmError> {
        let low_in = self.token_pair().is_low(token_in)?;
        Ok(self.reserves().oriented(low_in))
    }
}
