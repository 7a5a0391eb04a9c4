//! Registry of constant-product pools, one per canonical pair.

use std::collections::HashMap;

use tracing::info;

use crate::config::ExchangeConfig;
use crate::domain::{Address, TokenPair};
use crate::error::AmmError;
use crate::pools::ConstantProductPool;
use crate::traits::{FromConfig, SwapPool};

/// Owns every pool of the exchange.
///
/// The registry is an explicit store: callers construct one, pass it by
/// reference into the router, and may keep as many isolated registries as
/// they like.  Pools are keyed by their canonical [`TokenPair`], so
/// `(A, B)` and `(B, A)` always resolve to the same pool, and a pair can be
/// created at most once.  [`all_pools`](Self::all_pools) preserves creation
/// order.
///
/// # Example
///
/// ```rust
/// use pairswap::config::ExchangeConfig;
/// use pairswap::domain::Address;
/// use pairswap::factory::PairRegistry;
///
/// let a = Address::from_low_u64(1);
/// let b = Address::from_low_u64(2);
///
/// let mut registry = PairRegistry::new(ExchangeConfig::default()).expect("valid config");
/// let address = registry.create_pool(b, a).expect("pool created");
///
/// assert_eq!(registry.pool(a, b).expect("exists").address(), address);
/// assert!(registry.create_pool(a, b).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairRegistry {
    config: ExchangeConfig,
    index: HashMap<TokenPair, usize>,
    pools: Vec<ConstantProductPool>,
}

impl PairRegistry {
    /// Creates an empty registry.
    ///
    /// # Errors
    ///
    /// Propagates [`ExchangeConfig::validate`] errors.
    pub fn new(config: ExchangeConfig) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self {
            config,
            index: HashMap::new(),
            pools: Vec::new(),
        })
    }

    /// The exchange-wide configuration every pool is created with.
    #[must_use]
    pub const fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    /// Creates the pool for `(token_a, token_b)` and returns its address.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalAddresses`] if the tokens are equal.
    /// - [`AmmError::ZeroAddress`] if either token is the null address.
    /// - [`AmmError::PoolExists`] if the pair already has a pool.
    pub fn create_pool(
        &mut self,
        token_a: Address,
        token_b: Address,
    ) -> Result<Address, AmmError> {
        let pair = TokenPair::new(token_a, token_b)?;
        if self.index.contains_key(&pair) {
            return Err(AmmError::PoolExists);
        }
        let pool = self.build_pool(pair)?;
        let address = pool.address();
        self.insert(pool);
        Ok(address)
    }

    /// The pool for `(token_a, token_b)`, in either order.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] if the pair has no pool.
    /// - Pair validation errors from [`TokenPair::new`].
    pub fn pool(
        &self,
        token_a: Address,
        token_b: Address,
    ) -> Result<&ConstantProductPool, AmmError> {
        let pair = TokenPair::new(token_a, token_b)?;
        self.pool_for(&pair).ok_or(AmmError::PoolNotFound)
    }

    /// Mutable access to the pool for `(token_a, token_b)`.
    ///
    /// # Errors
    ///
    /// Same as [`pool`](Self::pool).
    pub fn pool_mut(
        &mut self,
        token_a: Address,
        token_b: Address,
    ) -> Result<&mut ConstantProductPool, AmmError> {
        let pair = TokenPair::new(token_a, token_b)?;
        let slot = *self.index.get(&pair).ok_or(AmmError::PoolNotFound)?;
        self.pools.get_mut(slot).ok_or(AmmError::PoolNotFound)
    }

    /// The pool for a canonical pair, if any.
    #[must_use]
    pub fn pool_for(&self, pair: &TokenPair) -> Option<&ConstantProductPool> {
        self.index.get(pair).and_then(|&slot| self.pools.get(slot))
    }

    /// `true` if the pair already has a pool.
    #[must_use]
    pub fn contains(&self, pair: &TokenPair) -> bool {
        self.index.contains_key(pair)
    }

    /// Every pool, in creation order.
    #[must_use]
    pub fn all_pools(&self) -> &[ConstantProductPool] {
        &self.pools
    }

    /// The `n`-th pool created.
    #[must_use]
    pub fn pool_at(&self, n: usize) -> Option<&ConstantProductPool> {
        self.pools.get(n)
    }

    /// Number of pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// `true` if no pool has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Canonical pairs of every pool, in creation order.
    pub fn pairs(&self) -> impl Iterator<Item = TokenPair> + '_ {
        self.pools.iter().map(|pool| *pool.token_pair())
    }

    /// Builds, without registering, the empty pool `pair` would get.
    pub(crate) fn build_pool(&self, pair: TokenPair) -> Result<ConstantProductPool, AmmError> {
        let config = self.config.pool_config(pair)?;
        ConstantProductPool::from_config(&config)
    }

    /// Stores a pool produced by a committed transaction, replacing the
    /// current state of its pair or registering it if new.
    pub(crate) fn commit_pool(&mut self, pool: ConstantProductPool) {
        match self.index.get(pool.token_pair()) {
            Some(&slot) => {
                if let Some(current) = self.pools.get_mut(slot) {
                    *current = pool;
                }
            }
            None => self.insert(pool),
        }
    }

    fn insert(&mut self, pool: ConstantProductPool) {
        let pair = *pool.token_pair();
        let slot = self.pools.len();
        info!(
            pool = %pool.address(),
            token_low = %pair.low(),
            token_high = %pair.high(),
            index = slot,
            "pool created"
        );
        self.index.insert(pair, slot);
        self.pools.push(pool);
    }
}
