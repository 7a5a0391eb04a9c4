//! All-or-nothing staging for router operations.
//!
//! A [`Transaction`] reads the registry and ledger but never writes them.
//! Pools are cloned on first touch and mutated in place; token movements
//! go through a [`StagedLedger`].  Only a successful operation turns into
//! a [`Staged`] set of changes that is then written back in one step.

use std::collections::HashMap;

use tracing::warn;

use crate::domain::TokenPair;
use crate::error::AmmError;
use crate::factory::PairRegistry;
use crate::ledger::{StagedLedger, Transfer};
use crate::pools::ConstantProductPool;
use crate::traits::TokenLedger;

pub(crate) struct Transaction<'a, L> {
    registry: &'a PairRegistry,
    pools: Vec<ConstantProductPool>,
    index: HashMap<TokenPair, usize>,
    ledger: StagedLedger<'a, L>,
}

impl<'a, L: TokenLedger> Transaction<'a, L> {
    pub(crate) fn begin(registry: &'a PairRegistry, ledger: &'a L) -> Self {
        Self {
            registry,
            pools: Vec::new(),
            index: HashMap::new(),
            ledger: StagedLedger::new(ledger),
        }
    }

    /// Staged copy of a registered pool.
    pub(crate) fn pool_mut(
        &mut self,
        pair: TokenPair,
    ) -> Result<&mut ConstantProductPool, AmmError> {
        let slot = match self.index.get(&pair) {
            Some(&slot) => slot,
            None => {
                let pool = self
                    .registry
                    .pool_for(&pair)
                    .ok_or(AmmError::PoolNotFound)?
                    .clone();
                self.stage(pair, pool)
            }
        };
        self.pools.get_mut(slot).ok_or(AmmError::PoolNotFound)
    }

    /// Staged copy of the pair's pool, or a fresh empty pool if the pair
    /// has none yet.  A fresh pool is registered only on commit.
    pub(crate) fn pool_or_create(
        &mut self,
        pair: TokenPair,
    ) -> Result<&mut ConstantProductPool, AmmError> {
        if !self.index.contains_key(&pair) && !self.registry.contains(&pair) {
            let pool = self.registry.build_pool(pair)?;
            self.stage(pair, pool);
        }
        self.pool_mut(pair)
    }

    pub(crate) fn ledger(&mut self) -> &mut StagedLedger<'a, L> {
        &mut self.ledger
    }

    /// Closes the transaction.  A failed `outcome` discards every staged
    /// change.
    pub(crate) fn finish<T>(
        self,
        operation: &'static str,
        outcome: Result<T, AmmError>,
    ) -> Result<Staged<T>, AmmError> {
        match outcome {
            Ok(value) => Ok(Staged {
                value,
                pools: self.pools,
                transfers: self.ledger.into_journal(),
            }),
            Err(err) => {
                warn!(
                    operation,
                    error = %err,
                    staged_pools = self.pools.len(),
                    staged_transfers = self.ledger.journal().len(),
                    "transaction discarded"
                );
                Err(err)
            }
        }
    }

    fn stage(&mut self, pair: TokenPair, pool: ConstantProductPool) -> usize {
        let slot = self.pools.len();
        self.pools.push(pool);
        self.index.insert(pair, slot);
        slot
    }
}

/// Changes of a successful transaction, not yet written back.
#[derive(Debug)]
pub(crate) struct Staged<T> {
    value: T,
    pools: Vec<ConstantProductPool>,
    transfers: Vec<Transfer>,
}

impl<T> Staged<T> {
    /// Writes the staged transfers and pools back and returns the
    /// operation's result.
    ///
    /// The journal was built against the same ledger state, so replay does
    /// not fail unless the ledger was mutated in between.
    pub(crate) fn commit<L: TokenLedger>(
        self,
        registry: &mut PairRegistry,
        ledger: &mut L,
    ) -> Result<T, AmmError> {
        StagedLedger::replay(&self.transfers, ledger)?;
        for pool in self.pools {
            registry.commit_pool(pool);
        }
        Ok(self.value)
    }
}
