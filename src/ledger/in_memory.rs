//! Hash-map token balance book.

use std::collections::HashMap;

use crate::domain::{Address, Amount};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::traits::TokenLedger;

/// Balances of every `(token, owner)` pair held in memory.
///
/// Supplies only grow through [`mint`](Self::mint), which stands in for the
/// faucet that provisions test balances; transfers conserve each token's
/// supply.
///
/// # Example
///
/// ```rust
/// use pairswap::domain::{Address, Amount};
/// use pairswap::ledger::InMemoryLedger;
/// use pairswap::traits::TokenLedger;
///
/// let token = Address::from_low_u64(1);
/// let alice = Address::from_low_u64(0xA1);
/// let bob = Address::from_low_u64(0xB0);
///
/// let mut ledger = InMemoryLedger::new();
/// ledger.mint(token, alice, Amount::new(100)).expect("mint ok");
/// ledger.transfer(token, alice, bob, Amount::new(40)).expect("transfer ok");
/// assert_eq!(ledger.balance_of(&token, &bob), Amount::new(40));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryLedger {
    balances: HashMap<(Address, Address), Amount>,
    supplies: HashMap<Address, Amount>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `amount` new units of `token` for `to`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAddress`] if `token` or `to` is the null address.
    /// - [`AmmError::Overflow`] if the token supply would overflow.
    pub fn mint(&mut self, token: Address, to: Address, amount: Amount) -> Result<(), AmmError> {
        if token.is_zero() || to.is_zero() {
            return Err(AmmError::ZeroAddress);
        }
        let supply = self.total_supply(&token).safe_add(&amount)?;
        // every balance is bounded by the supply
        let balance = self.balance_of(&token, &to).safe_add(&amount)?;
        self.supplies.insert(token, supply);
        self.balances.insert((token, to), balance);
        Ok(())
    }

    /// Total units of `token` ever minted.
    #[must_use]
    pub fn total_supply(&self, token: &Address) -> Amount {
        self.supplies.get(token).copied().unwrap_or_default()
    }
}

impl TokenLedger for InMemoryLedger {
    fn balance_of(&self, token: &Address, owner: &Address) -> Amount {
        self.balances
            .get(&(*token, *owner))
            .copied()
            .unwrap_or_default()
    }

    fn transfer(
        &mut self,
        token: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), AmmError> {
        if token.is_zero() || to.is_zero() {
            return Err(AmmError::ZeroAddress);
        }
        let source = self.balance_of(&token, &from);
        if source < amount {
            return Err(AmmError::InsufficientBalance);
        }
        if from == to || amount.is_zero() {
            return Ok(());
        }
        let remaining = source.safe_sub(&amount)?;
        let credited = self.balance_of(&token, &to).safe_add(&amount)?;
        self.balances.insert((token, from), remaining);
        self.balances.insert((token, to), credited);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn token() -> Address {
        Address::from_low_u64(1)
    }

    fn alice() -> Address {
        Address::from_low_u64(0xA1)
    }

    fn bob() -> Address {
        Address::from_low_u64(0xB0)
    }

    fn funded() -> InMemoryLedger {
        let mut ledger = InMemoryLedger::new();
        let Ok(()) = ledger.mint(token(), alice(), Amount::new(100)) else {
            panic!("expected mint");
        };
        ledger
    }

    #[test]
    fn mint_tracks_supply() {
        let mut ledger = funded();
        let Ok(()) = ledger.mint(token(), bob(), Amount::new(50)) else {
            panic!("expected mint");
        };
        assert_eq!(ledger.total_supply(&token()), Amount::new(150));
        assert_eq!(ledger.balance_of(&token(), &bob()), Amount::new(50));
    }

    #[test]
    fn mint_rejects_null_addresses() {
        let mut ledger = InMemoryLedger::new();
        assert_eq!(
            ledger.mint(Address::ZERO, alice(), Amount::new(1)),
            Err(AmmError::ZeroAddress)
        );
        assert_eq!(
            ledger.mint(token(), Address::ZERO, Amount::new(1)),
            Err(AmmError::ZeroAddress)
        );
    }

    #[test]
    fn mint_overflow_rejected() {
        let mut ledger = funded();
        let Err(AmmError::Overflow(_)) = ledger.mint(token(), bob(), Amount::new(u128::MAX)) else {
            panic!("expected Overflow");
        };
        assert_eq!(ledger.total_supply(&token()), Amount::new(100));
    }

    #[test]
    fn transfer_moves_balance() {
        let mut ledger = funded();
        let Ok(()) = ledger.transfer(token(), alice(), bob(), Amount::new(30)) else {
            panic!("expected transfer");
        };
        assert_eq!(ledger.balance_of(&token(), &alice()), Amount::new(70));
        assert_eq!(ledger.balance_of(&token(), &bob()), Amount::new(30));
        assert_eq!(ledger.total_supply(&token()), Amount::new(100));
    }

    #[test]
    fn transfer_beyond_balance_rejected() {
        let mut ledger = funded();
        let before = ledger.clone();
        assert_eq!(
            ledger.transfer(token(), alice(), bob(), Amount::new(101)),
            Err(AmmError::InsufficientBalance)
        );
        assert_eq!(ledger, before);
    }

    #[test]
    fn transfer_to_null_rejected() {
        let mut ledger = funded();
        assert_eq!(
            ledger.transfer(token(), alice(), Address::ZERO, Amount::new(1)),
            Err(AmmError::ZeroAddress)
        );
    }

    #[test]
    fn self_transfer_is_noop() {
        let mut ledger = funded();
        let Ok(()) = ledger.transfer(token(), alice(), alice(), Amount::new(100)) else {
            panic!("expected transfer");
        };
        assert_eq!(ledger.balance_of(&token(), &alice()), Amount::new(100));
    }
}
