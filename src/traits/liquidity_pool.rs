//! Liquidity management trait extending [`SwapPool`].
//!
//! [`LiquidityPool`] adds LP-unit accounting on top of the swap surface.
//!
//! # Liquidity Accounting Invariant
//!
//! The total reported by [`LiquidityPool::total_liquidity`] only changes
//! through [`LiquidityPool::mint`] and [`LiquidityPool::burn`], and always
//! equals the sum of every holder's balance (the locked minimum included):
//!
//! ```text
//! total = Σ balance[holder]
//! ```

use super::SwapPool;
use crate::domain::{Address, Amount, Liquidity};
use crate::error::AmmError;

/// A pool that issues proportional LP units against deposits.
pub trait LiquidityPool: SwapPool {
    /// Deposits `(amount_low, amount_high)` and credits the minted LP units
    /// to `to`.
    ///
    /// The first deposit mints `⌊√(low × high)⌋` units, of which the
    /// minimum liquidity is locked at the burn sink.  Later deposits mint
    /// `min(low × total / r_low, high × total / r_high)`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientLiquidityMinted`] if nothing would be
    ///   minted.
    /// - [`AmmError::ZeroAddress`] if `to` is the burn sink.
    /// - [`AmmError::Overflow`] if a reserve would exceed its bound.
    fn mint(
        &mut self,
        to: Address,
        amount_low: Amount,
        amount_high: Amount,
    ) -> Result<Liquidity, AmmError>;

    /// Redeems `liquidity` units held by `owner` for a proportional share of
    /// both reserves, returned in canonical `(low, high)` order.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientLpBalance`] if `owner` holds less than
    ///   `liquidity`.
    /// - [`AmmError::InsufficientLiquidityBurned`] if either side rounds
    ///   to zero.
    fn burn(&mut self, owner: Address, liquidity: Liquidity)
        -> Result<(Amount, Amount), AmmError>;

    /// Outstanding LP units, including the locked minimum.
    #[must_use]
    fn total_liquidity(&self) -> Liquidity;

    /// LP units held by `owner`.
    #[must_use]
    fn liquidity_of(&self, owner: &Address) -> Liquidity;
}
