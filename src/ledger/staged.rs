//! Copy-on-write overlay over a [`TokenLedger`].

use std::collections::HashMap;

use crate::domain::{Address, Amount};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::traits::TokenLedger;

/// One recorded token movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    /// Token moved.
    pub token: Address,
    /// Debited account.
    pub from: Address,
    /// Credited account.
    pub to: Address,
    /// Units moved.
    pub amount: Amount,
}

/// Stages transfers against a read-only base ledger.
///
/// Reads see the base plus every staged transfer; the base itself is never
/// touched.  [`into_journal`](Self::into_journal) yields the transfers in
/// order so they can be replayed onto the base once the surrounding
/// operation has fully succeeded.  Dropping the overlay discards them.
#[derive(Debug)]
pub struct StagedLedger<'a, L> {
    base: &'a L,
    touched: HashMap<(Address, Address), Amount>,
    journal: Vec<Transfer>,
}

impl<'a, L: TokenLedger> StagedLedger<'a, L> {
    /// Starts an empty overlay over `base`.
    #[must_use]
    pub fn new(base: &'a L) -> Self {
        Self {
            base,
            touched: HashMap::new(),
            journal: Vec::new(),
        }
    }

    /// Staged transfers, oldest first.
    #[must_use]
    pub fn journal(&self) -> &[Transfer] {
        &self.journal
    }

    /// Consumes the overlay, returning the staged transfers in order.
    #[must_use]
    pub fn into_journal(self) -> Vec<Transfer> {
        self.journal
    }

    /// Replays `journal` onto `ledger`.
    ///
    /// # Errors
    ///
    /// Propagates the first transfer error.  A journal staged over the same
    /// ledger state replays without error.
    pub fn replay(journal: &[Transfer], ledger: &mut L) -> Result<(), AmmError> {
        for t in journal {
            ledger.transfer(t.token, t.from, t.to, t.amount)?;
        }
        Ok(())
    }
}

impl<L: TokenLedger> TokenLedger for StagedLedger<'_, L> {
    fn balance_of(&self, token: &Address, owner: &Address) -> Amount {
        self.touched
            .get(&(*token, *owner))
            .copied()
            .unwrap_or_else(|| self.base.balance_of(token, owner))
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
        if from != to && !amount.is_zero() {
            let remaining = source.safe_sub(&amount)?;
            let credited = self.balance_of(&token, &to).safe_add(&amount)?;
            self.touched.insert((token, from), remaining);
            self.touched.insert((token, to), credited);
        }
        self.journal.push(Transfer {
            token,
            from,
            to,
            amount,
        });
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::ledger::InMemoryLedger;

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
    fn reads_see_staged_transfers_without_touching_base() {
        let base = funded();
        let mut staged = StagedLedger::new(&base);
        let Ok(()) = staged.transfer(token(), alice(), bob(), Amount::new(60)) else {
            panic!("expected transfer");
        };
        assert_eq!(staged.balance_of(&token(), &alice()), Amount::new(40));
        assert_eq!(staged.balance_of(&token(), &bob()), Amount::new(60));
        assert_eq!(base.balance_of(&token(), &alice()), Amount::new(100));
        assert_eq!(staged.journal().len(), 1);
    }

    #[test]
    fn staged_balances_bound_later_transfers() {
        let base = funded();
        let mut staged = StagedLedger::new(&base);
        let Ok(()) = staged.transfer(token(), alice(), bob(), Amount::new(60)) else {
            panic!("expected transfer");
        };
        assert_eq!(
            staged.transfer(token(), alice(), bob(), Amount::new(41)),
            Err(AmmError::InsufficientBalance)
        );
        assert_eq!(staged.journal().len(), 1);
    }

    #[test]
    fn replay_reproduces_staged_state() {
        let mut base = funded();
        let journal = {
            let mut staged = StagedLedger::new(&base);
            let Ok(()) = staged.transfer(token(), alice(), bob(), Amount::new(60)) else {
                panic!("expected transfer");
            };
            let Ok(()) = staged.transfer(token(), bob(), alice(), Amount::new(10)) else {
                panic!("expected transfer");
            };
            staged.into_journal()
        };
        let Ok(()) = StagedLedger::replay(&journal, &mut base) else {
            panic!("expected replay");
        };
        assert_eq!(base.balance_of(&token(), &alice()), Amount::new(50));
        assert_eq!(base.balance_of(&token(), &bob()), Amount::new(50));
    }
}
