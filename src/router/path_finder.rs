//! Best-route discovery over the pair graph.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use tracing::debug;

use super::library::{get_amounts_in, get_amounts_out};
use crate::config::ExchangeConfig;
use crate::domain::{Address, Amount, Route};
use crate::error::AmmError;
use crate::factory::PairRegistry;
use crate::traits::FromConfig;

/// Enumerates simple token paths between two tokens and picks the one
/// with the best quote.
///
/// Candidate paths come from a breadth-first search over every registered
/// pair, never revisiting a token and never using more than
/// [`max_hops`](Self::max_hops) pools.  Each candidate is priced against
/// current reserves; those that fail to price (empty pools, drained
/// outputs) are skipped.  Among the rest the best quote wins and, on a
/// tie, the path with fewer hops.
///
/// # Example
///
/// ```rust
/// use pairswap::config::ExchangeConfig;
/// use pairswap::domain::{Address, Amount};
/// use pairswap::factory::PairRegistry;
/// use pairswap::router::PathFinder;
/// use pairswap::traits::{FromConfig, LiquidityPool};
///
/// let (a, b, c) = (
///     Address::from_low_u64(1),
///     Address::from_low_u64(2),
///     Address::from_low_u64(3),
/// );
/// let lp = Address::from_low_u64(9);
/// let config = ExchangeConfig::default();
/// let mut registry = PairRegistry::new(config.clone()).expect("valid config");
/// for (x, y) in [(a, b), (b, c)] {
///     registry.create_pool(x, y).expect("created");
///     registry
///         .pool_mut(x, y)
///         .expect("exists")
///         .mint(lp, Amount::new(10_000), Amount::new(10_000))
///         .expect("minted");
/// }
///
/// let finder = PathFinder::from_config(&config).expect("valid config");
/// let route = finder.best_exact_in(&registry, Amount::new(100), a, c).expect("route");
/// assert_eq!(route.path(), &[a, b, c]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathFinder {
    max_hops: usize,
}

impl PathFinder {
    /// Creates a finder limited to `max_hops` pools per path.
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidConfiguration`] if `max_hops` is zero.
    pub fn new(max_hops: usize) -> Result<Self, AmmError> {
        if max_hops == 0 {
            return Err(AmmError::InvalidConfiguration("max_hops must be at least 1"));
        }
        Ok(Self { max_hops })
    }

    /// Maximum pools per candidate path.
    #[must_use]
    pub const fn max_hops(&self) -> usize {
        self.max_hops
    }

    /// Every simple path from `from` to `to`, shortest first.  Paths of
    /// equal length are ordered by token address.
    #[must_use]
    pub fn candidate_paths(
        &self,
        registry: &PairRegistry,
        from: Address,
        to: Address,
    ) -> Vec<Vec<Address>> {
        let mut graph: BTreeMap<Address, BTreeSet<Address>> = BTreeMap::new();
        for pair in registry.pairs() {
            graph.entry(pair.low()).or_default().insert(pair.high());
            graph.entry(pair.high()).or_default().insert(pair.low());
        }

        let mut found = Vec::new();
        let mut queue = VecDeque::from([vec![from]]);
        while let Some(path) = queue.pop_front() {
            let Some(&tail) = path.last() else {
                continue;
            };
            if tail == to && path.len() > 1 {
                found.push(path);
                continue;
            }
            if path.len() > self.max_hops {
                continue;
            }
            let Some(neighbours) = graph.get(&tail) else {
                continue;
            };
            for &next in neighbours {
                if !path.contains(&next) {
                    let mut extended = path.clone();
                    extended.push(next);
                    queue.push_back(extended);
                }
            }
        }
        found
    }

    /// The candidate path yielding the most `to` for exactly `amount_in`
    /// of `from`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalAddresses`] if `from == to`.
    /// - [`AmmError::NoRoute`] if no candidate prices successfully.
    pub fn best_exact_in(
        &self,
        registry: &PairRegistry,
        amount_in: Amount,
        from: Address,
        to: Address,
    ) -> Result<Route, AmmError> {
        let price = |path: &[Address]| get_amounts_out(registry, amount_in, path);
        self.select(registry, from, to, price, |candidate, best| {
            candidate.amount_out() > best.amount_out()
        })
    }

    /// The candidate path costing the least `from` for exactly
    /// `amount_out` of `to`.
    ///
    /// # Errors
    ///
    /// Same as [`best_exact_in`](Self::best_exact_in).
    pub fn best_exact_out(
        &self,
        registry: &PairRegistry,
        amount_out: Amount,
        from: Address,
        to: Address,
    ) -> Result<Route, AmmError> {
        let price = |path: &[Address]| get_amounts_in(registry, amount_out, path);
        self.select(registry, from, to, price, |candidate, best| {
            candidate.amount_in() < best.amount_in()
        })
    }

    fn select<P, B>(
        &self,
        registry: &PairRegistry,
        from: Address,
        to: Address,
        price: P,
        better: B,
    ) -> Result<Route, AmmError>
    where
        P: Fn(&[Address]) -> Result<Vec<Amount>, AmmError>,
        B: Fn(&Route, &Route) -> bool,
    {
        if from == to {
            return Err(AmmError::IdenticalAddresses);
        }
        let mut best: Option<Route> = None;
        for path in self.candidate_paths(registry, from, to) {
            let amounts = match price(path.as_slice()) {
                Ok(amounts) => amounts,
                Err(err) => {
                    debug!(hops = path.len() - 1, error = %err, "candidate skipped");
                    continue;
                }
            };
            let candidate = Route::new(path, amounts);
            if candidate.amount_out().is_zero() {
                debug!(route = %candidate, "candidate skipped: rounds to nothing");
                continue;
            }
            debug!(route = %candidate, "candidate priced");
            // candidates arrive shortest first, so ties keep the shorter path
            let replace = match &best {
                Some(current) => better(&candidate, current),
                None => true,
            };
            if replace {
                best = Some(candidate);
            }
        }
        best.ok_or(AmmError::NoRoute)
    }
}

impl FromConfig<ExchangeConfig> for PathFinder {
    /// Uses the exchange's `max_hops`, the same limit the router enforces.
    fn from_config(config: &ExchangeConfig) -> Result<Self, AmmError> {
        config.validate()?;
        Self::new(config.max_hops)
    }
}
