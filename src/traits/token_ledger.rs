//! Narrow token capability consumed by the router.

use crate::domain::{Address, Amount};
use crate::error::AmmError;

/// Balance book for any number of fungible tokens.
///
/// The router only ever needs to read a balance and move tokens between
/// two accounts; pools are accounts too, identified by their deterministic
/// pool address.
pub trait TokenLedger {
    /// Balance of `owner` in `token`.  Unknown accounts hold zero.
    #[must_use]
    fn balance_of(&self, token: &Address, owner: &Address) -> Amount;

    /// Moves `amount` of `token` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientBalance`] if `from` holds less than
    ///   `amount`.
    /// - [`AmmError::ZeroAddress`] if `token` or `to` is the null address.
    /// - [`AmmError::Overflow`] if the recipient balance would overflow.
    fn transfer(
        &mut self,
        token: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), AmmError>;
}
