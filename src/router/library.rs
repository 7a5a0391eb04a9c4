//! Multi-hop pricing over registry pools.
//!
//! Both functions are read-only: they evaluate a token path against the
//! current reserves and return one amount per token in the path.

use crate::domain::{Address, Amount, TokenPair};
use crate::error::AmmError;
use crate::factory::PairRegistry;
use crate::math::{get_amount_in, get_amount_out, CheckedArithmetic};
use crate::pools::{constant_product::bounded, ConstantProductPool};
use crate::traits::SwapPool;

/// Rejects paths that are too short or longer than `max_hops` pools.
///
/// # Errors
///
/// [`AmmError::InvalidPath`] in either case.
pub fn validate_path(path: &[Address], max_hops: usize) -> Result<(), AmmError> {
    if path.len() < 2 {
        return Err(AmmError::InvalidPath("path must contain at least two tokens"));
    }
    if path.len() - 1 > max_hops {
        return Err(AmmError::InvalidPath("path exceeds maximum hop count"));
    }
    Ok(())
}

/// Amounts produced along `path` when selling exactly `amount_in` of
/// `path[0]`.  `result[0] == amount_in`; the last entry is the final
/// output.
///
/// # Errors
///
/// - [`AmmError::InvalidPath`] on a malformed path.
/// - [`AmmError::PoolNotFound`] if a hop has no pool.
/// - [`AmmError::InsufficientLiquidity`] if a hop's pool is empty.
/// - [`AmmError::InsufficientInputAmount`] if any hop's input is zero.
/// - [`AmmError::Overflow`] if a hop's input would push its pool past
///   [`Amount::MAX_RESERVE`], as executing it would.
///
/// # Example
///
/// ```rust
/// use pairswap::config::ExchangeConfig;
/// use pairswap::domain::{Address, Amount};
/// use pairswap::factory::PairRegistry;
/// use pairswap::router::get_amounts_out;
/// use pairswap::traits::LiquidityPool;
///
/// let (a, b) = (Address::from_low_u64(1), Address::from_low_u64(2));
/// let mut registry = PairRegistry::new(ExchangeConfig::default()).expect("valid config");
/// registry.create_pool(a, b).expect("created");
/// registry
///     .pool_mut(a, b)
///     .expect("exists")
///     .mint(Address::from_low_u64(9), Amount::new(1_000), Amount::new(2_000))
///     .expect("minted");
///
/// let amounts = get_amounts_out(&registry, Amount::new(100), &[a, b]).expect("priced");
/// assert_eq!(amounts, vec![Amount::new(100), Amount::new(181)]);
/// ```
pub fn get_amounts_out(
    registry: &PairRegistry,
    amount_in: Amount,
    path: &[Address],
) -> Result<Vec<Amount>, AmmError> {
    validate_path(path, registry.config().max_hops)?;
    let mut amounts = Vec::with_capacity(path.len());
    let mut current = amount_in;
    amounts.push(current);
    for hop in path.windows(2) {
        let (token_in, token_out) = (hop[0], hop[1]);
        let pool = hop_pool(registry, token_in, token_out)?;
        let (reserve_in, reserve_out) = pool.reserves_for(&token_in)?;
        let amount_out = get_amount_out(current, reserve_in, reserve_out, pool.fee_tier())?;
        bounded(reserve_in.safe_add(&current)?)?;
        current = amount_out;
        amounts.push(current);
    }
    Ok(amounts)
}

/// Amounts required along `path` to receive exactly `amount_out` of the
/// last token.  `result[0]` is what the caller must pay.
///
/// Evaluated right to left; each hop charges the smallest input that
/// yields at least the next hop's requirement.
///
/// # Errors
///
/// Same as [`get_amounts_out`], plus [`AmmError::InsufficientLiquidity`]
/// if a hop's required output would drain its pool.
pub fn get_amounts_in(
    registry: &PairRegistry,
    amount_out: Amount,
    path: &[Address],
) -> Result<Vec<Amount>, AmmError> {
    validate_path(path, registry.config().max_hops)?;
    let mut amounts = vec![Amount::default(); path.len()];
    let mut current = amount_out;
    for (slot, hop) in (1..path.len()).rev().zip(path.windows(2).rev()) {
        let (token_in, token_out) = (hop[0], hop[1]);
        if let Some(entry) = amounts.get_mut(slot) {
            *entry = current;
        }
        let pool = hop_pool(registry, token_in, token_out)?;
        let (reserve_in, reserve_out) = pool.reserves_for(&token_in)?;
        current = get_amount_in(current, reserve_in, reserve_out, pool.fee_tier())?;
        bounded(reserve_in.safe_add(&current)?)?;
    }
    if let Some(first) = amounts.first_mut() {
        *first = current;
    }
    Ok(amounts)
}

fn hop_pool(
    registry: &PairRegistry,
    token_in: Address,
    token_out: Address,
) -> Result<&ConstantProductPool, AmmError> {
    let pair = TokenPair::new(token_in, token_out)?;
    registry.pool_for(&pair).ok_or(AmmError::PoolNotFound)
}
