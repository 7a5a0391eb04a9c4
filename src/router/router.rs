//! Orchestration of liquidity and swap calls over a registry and ledger.

use tracing::{debug, info};

use super::library::{get_amounts_in, get_amounts_out};
use super::requests::{
    AddLiquidity, LiquidityAdded, LiquidityRemoved, RemoveLiquidity, SwapExactIn, SwapExactOut,
};
use super::transaction::Transaction;
use crate::domain::{Address, Amount, Route, Timestamp, TokenPair};
use crate::error::AmmError;
use crate::factory::PairRegistry;
use crate::math::quote;
use crate::traits::{Clock, LiquidityPool, SwapPool, SystemClock, TokenLedger};

/// Stateless front end to the exchange.
///
/// The router holds nothing but a [`Clock`] for deadline checks.  Every
/// operation borrows the [`PairRegistry`] and a [`TokenLedger`] for its
/// duration, works on staged copies, and writes back only if every step
/// succeeded: a failing hop, bound or transfer leaves both untouched.
///
/// Tokens are always paid into pool addresses first and the pool's
/// verifying primitives then account for them, so each pool's ledger
/// balances track its reserves.
///
/// # Example
///
/// ```rust
/// use pairswap::config::ExchangeConfig;
/// use pairswap::domain::{Address, Amount, Timestamp};
/// use pairswap::factory::PairRegistry;
/// use pairswap::ledger::InMemoryLedger;
/// use pairswap::router::{AddLiquidity, Router, SwapExactIn};
/// use pairswap::traits::{ManualClock, TokenLedger};
///
/// let (a, b) = (Address::from_low_u64(1), Address::from_low_u64(2));
/// let alice = Address::from_low_u64(0xA1);
///
/// let mut registry = PairRegistry::new(ExchangeConfig::default()).expect("valid config");
/// let mut ledger = InMemoryLedger::new();
/// ledger.mint(a, alice, Amount::new(10_000)).expect("funded");
/// ledger.mint(b, alice, Amount::new(10_000)).expect("funded");
///
/// let router = Router::new(ManualClock::new(Timestamp::from_secs(100)));
/// let added = router
///     .add_liquidity(&mut registry, &mut ledger, alice, AddLiquidity {
///         token_a: a,
///         token_b: b,
///         amount_a_desired: Amount::new(1_000),
///         amount_b_desired: Amount::new(2_000),
///         amount_a_min: Amount::new(0),
///         amount_b_min: Amount::new(0),
///         to: alice,
///         deadline: Timestamp::from_secs(200),
///     })
///     .expect("deposited");
/// assert_eq!(added.liquidity.get(), 414);
///
/// let route = router
///     .swap_exact_in(&mut registry, &mut ledger, alice, SwapExactIn {
///         amount_in: Amount::new(100),
///         amount_out_min: Amount::new(180),
///         path: vec![a, b],
///         to: alice,
///         deadline: Timestamp::from_secs(200),
///     })
///     .expect("swapped");
/// assert_eq!(route.amount_out(), Amount::new(181));
/// assert_eq!(ledger.balance_of(&b, &alice), Amount::new(8_181));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Router<C = SystemClock> {
    clock: C,
}

impl<C: Clock> Router<C> {
    /// Creates a router reading deadlines against `clock`.
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }

    /// The router's time source.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Creates the pool for `(token_a, token_b)`.
    ///
    /// # Errors
    ///
    /// See [`PairRegistry::create_pool`].
    pub fn create_pool(
        &self,
        registry: &mut PairRegistry,
        token_a: Address,
        token_b: Address,
    ) -> Result<Address, AmmError> {
        registry.create_pool(token_a, token_b)
    }

    /// Deposits both tokens from `sender` and mints LP units to
    /// `request.to`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] past the deadline.
    /// - [`AmmError::InsufficientAAmount`] / [`AmmError::InsufficientBAmount`]
    ///   if the ratio-matched deposit falls below a minimum.
    /// - [`AmmError::InsufficientBalance`] if `sender` cannot pay.
    /// - Pool errors from [`LiquidityPool::mint`].
    pub fn add_liquidity<L: TokenLedger>(
        &self,
        registry: &mut PairRegistry,
        ledger: &mut L,
        sender: Address,
        request: AddLiquidity,
    ) -> Result<LiquidityAdded, AmmError> {
        self.ensure_live(request.deadline)?;
        let pair = TokenPair::new(request.token_a, request.token_b)?;
        let mut tx = Transaction::begin(registry, ledger);
        let outcome = deposit(&mut tx, pair, sender, &request);
        let added = tx.finish("add_liquidity", outcome)?.commit(registry, ledger)?;
        info!(
            pool = %added.pool,
            amount_a = %added.amount_a,
            amount_b = %added.amount_b,
            liquidity = %added.liquidity,
            "liquidity added"
        );
        Ok(added)
    }

    /// Burns `request.liquidity` LP units held by `sender` and sends both
    /// tokens to `request.to`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] past the deadline.
    /// - [`AmmError::PoolNotFound`] if the pair has no pool.
    /// - [`AmmError::InsufficientAAmount`] / [`AmmError::InsufficientBAmount`]
    ///   if a withdrawn amount falls below its minimum.
    /// - Pool errors from [`LiquidityPool::burn`].
    pub fn remove_liquidity<L: TokenLedger>(
        &self,
        registry: &mut PairRegistry,
        ledger: &mut L,
        sender: Address,
        request: RemoveLiquidity,
    ) -> Result<LiquidityRemoved, AmmError> {
        self.ensure_live(request.deadline)?;
        let pair = TokenPair::new(request.token_a, request.token_b)?;
        let mut tx = Transaction::begin(registry, ledger);
        let outcome = withdraw(&mut tx, pair, sender, &request);
        let removed = tx.finish("remove_liquidity", outcome)?.commit(registry, ledger)?;
        info!(
            pool = %pair.pool_address(),
            liquidity = %request.liquidity,
            amount_a = %removed.amount_a,
            amount_b = %removed.amount_b,
            "liquidity removed"
        );
        Ok(removed)
    }

    /// Sells exactly `request.amount_in` of `path[0]` along the path.
    ///
    /// Every hop is priced before anything moves; the final output must
    /// reach `amount_out_min`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] past the deadline.
    /// - [`AmmError::InvalidPath`], [`AmmError::PoolNotFound`] or
    ///   [`AmmError::InsufficientLiquidity`] while pricing.
    /// - [`AmmError::InsufficientOutputAmount`] below `amount_out_min`.
    /// - [`AmmError::InsufficientBalance`] if `sender` cannot pay.
    pub fn swap_exact_in<L: TokenLedger>(
        &self,
        registry: &mut PairRegistry,
        ledger: &mut L,
        sender: Address,
        request: SwapExactIn,
    ) -> Result<Route, AmmError> {
        self.ensure_live(request.deadline)?;
        let amounts = get_amounts_out(registry, request.amount_in, &request.path)?;
        let amount_out = amounts.last().copied().unwrap_or_default();
        if amount_out < request.amount_out_min {
            return Err(AmmError::InsufficientOutputAmount);
        }
        let route = Route::new(request.path, amounts);
        self.execute(registry, ledger, sender, request.to, route, "swap_exact_in")
    }

    /// Buys exactly `request.amount_out` of the last token along the path.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] past the deadline.
    /// - [`AmmError::InvalidPath`], [`AmmError::PoolNotFound`] or
    ///   [`AmmError::InsufficientLiquidity`] while pricing.
    /// - [`AmmError::ExcessiveInputAmount`] above `amount_in_max`.
    /// - [`AmmError::InsufficientBalance`] if `sender` cannot pay.
    pub fn swap_exact_out<L: TokenLedger>(
        &self,
        registry: &mut PairRegistry,
        ledger: &mut L,
        sender: Address,
        request: SwapExactOut,
    ) -> Result<Route, AmmError> {
        self.ensure_live(request.deadline)?;
        let amounts = get_amounts_in(registry, request.amount_out, &request.path)?;
        let amount_in = amounts.first().copied().unwrap_or_default();
        if amount_in > request.amount_in_max {
            return Err(AmmError::ExcessiveInputAmount);
        }
        let route = Route::new(request.path, amounts);
        self.execute(registry, ledger, sender, request.to, route, "swap_exact_out")
    }

    fn ensure_live(&self, deadline: Timestamp) -> Result<(), AmmError> {
        if deadline < self.clock.now() {
            return Err(AmmError::Expired);
        }
        Ok(())
    }

    fn execute<L: TokenLedger>(
        &self,
        registry: &mut PairRegistry,
        ledger: &mut L,
        sender: Address,
        to: Address,
        route: Route,
        operation: &'static str,
    ) -> Result<Route, AmmError> {
        let mut tx = Transaction::begin(registry, ledger);
        let outcome = run_hops(&mut tx, sender, to, &route);
        tx.finish(operation, outcome)?.commit(registry, ledger)?;
        info!(
            operation,
            hops = route.hops(),
            amount_in = %route.amount_in(),
            amount_out = %route.amount_out(),
            to = %to,
            "swap completed"
        );
        Ok(route)
    }
}

/// Ratio-matched deposit for a pool holding `reserve_a` / `reserve_b`.
fn optimal_amounts(
    request: &AddLiquidity,
    reserve_a: Amount,
    reserve_b: Amount,
) -> Result<(Amount, Amount), AmmError> {
    if reserve_a.is_zero() && reserve_b.is_zero() {
        return Ok((request.amount_a_desired, request.amount_b_desired));
    }
    let amount_b_optimal = quote(request.amount_a_desired, reserve_a, reserve_b)?;
    if amount_b_optimal <= request.amount_b_desired {
        if amount_b_optimal < request.amount_b_min {
            return Err(AmmError::InsufficientBAmount);
        }
        return Ok((request.amount_a_desired, amount_b_optimal));
    }
    let amount_a_optimal = quote(request.amount_b_desired, reserve_b, reserve_a)?;
    if amount_a_optimal > request.amount_a_desired || amount_a_optimal < request.amount_a_min {
        return Err(AmmError::InsufficientAAmount);
    }
    Ok((amount_a_optimal, request.amount_b_desired))
}

fn deposit<L: TokenLedger>(
    tx: &mut Transaction<'_, L>,
    pair: TokenPair,
    sender: Address,
    request: &AddLiquidity,
) -> Result<LiquidityAdded, AmmError> {
    let pool = tx.pool_or_create(pair)?;
    let pool_address = pool.address();
    let (reserve_a, reserve_b) = pool.reserves_for(&request.token_a)?;
    let (amount_a, amount_b) = optimal_amounts(request, reserve_a, reserve_b)?;

    tx.ledger()
        .transfer(request.token_a, sender, pool_address, amount_a)?;
    tx.ledger()
        .transfer(request.token_b, sender, pool_address, amount_b)?;

    let (amount_low, amount_high) = if pair.is_low(&request.token_a)? {
        (amount_a, amount_b)
    } else {
        (amount_b, amount_a)
    };
    let liquidity = tx.pool_mut(pair)?.mint(request.to, amount_low, amount_high)?;
    Ok(LiquidityAdded {
        pool: pool_address,
        amount_a,
        amount_b,
        liquidity,
    })
}

fn withdraw<L: TokenLedger>(
    tx: &mut Transaction<'_, L>,
    pair: TokenPair,
    sender: Address,
    request: &RemoveLiquidity,
) -> Result<LiquidityRemoved, AmmError> {
    let pool = tx.pool_mut(pair)?;
    let pool_address = pool.address();
    let (amount_low, amount_high) = pool.burn(sender, request.liquidity)?;
    let (amount_a, amount_b) = if pair.is_low(&request.token_a)? {
        (amount_low, amount_high)
    } else {
        (amount_high, amount_low)
    };
    if amount_a < request.amount_a_min {
        return Err(AmmError::InsufficientAAmount);
    }
    if amount_b < request.amount_b_min {
        return Err(AmmError::InsufficientBAmount);
    }
    tx.ledger()
        .transfer(request.token_a, pool_address, request.to, amount_a)?;
    tx.ledger()
        .transfer(request.token_b, pool_address, request.to, amount_b)?;
    Ok(LiquidityRemoved { amount_a, amount_b })
}

/// Pays `route.amount_in()` into the first pool, then settles each hop,
/// forwarding its output straight into the next pool and the last one to
/// `to`.
fn run_hops<L: TokenLedger>(
    tx: &mut Transaction<'_, L>,
    sender: Address,
    to: Address,
    route: &Route,
) -> Result<(), AmmError> {
    let path = route.path();
    let amounts = route.amounts();
    let (Some(&first), Some(&second)) = (path.first(), path.get(1)) else {
        return Err(AmmError::InvalidPath("path must contain at least two tokens"));
    };
    let entry = TokenPair::new(first, second)?.pool_address();
    tx.ledger().transfer(first, sender, entry, route.amount_in())?;

    for (hop, (tokens, flow)) in path.windows(2).zip(amounts.windows(2)).enumerate() {
        let (token_in, token_out) = (tokens[0], tokens[1]);
        let (amount_in, amount_out) = (flow[0], flow[1]);
        let pool = tx.pool_mut(TokenPair::new(token_in, token_out)?)?;
        let pool_address = pool.address();
        pool.execute_swap(token_in, amount_in, amount_out)?;
        let recipient = match path.get(hop + 2) {
            Some(&next) => TokenPair::new(token_out, next)?.pool_address(),
            None => to,
        };
        debug!(
            hop,
            pool = %pool_address,
            token_in = %token_in,
            token_out = %token_out,
            amount_in = %amount_in,
            amount_out = %amount_out,
            recipient = %recipient,
            "hop executed"
        );
        tx.ledger()
            .transfer(token_out, pool_address, recipient, amount_out)?;
    }
    Ok(())
}
