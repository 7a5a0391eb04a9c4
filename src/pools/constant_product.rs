//! Constant product pool (`x · y = k`).
//!
//! The pool owns the reserves and LP-unit ledger of one canonical pair.
//! Token custody lives outside the pool: the caller moves tokens to
//! [`ConstantProductPool::address`] and then asks the pool to account for
//! them.  Every state-changing method validates completely before it
//! mutates anything, so an `Err` always leaves the pool untouched.
//!
//! # Swap Algorithm (token in → token out)
//!
//! 1. `in_with_fee = amount_in × (10 000 − fee_bps)`
//! 2. `amount_out = in_with_fee × r_out / (r_in × 10 000 + in_with_fee)`
//! 3. `r_in += amount_in` (the fee stays in the pool)
//! 4. `r_out -= amount_out`
//!
//! # Invariant
//!
//! [`ConstantProductPool::execute_swap`] accepts any `(amount_in,
//! amount_out)` for which the fee-adjusted balances satisfy
//!
//! ```text
//! (r_in' × 10 000 − amount_in × fee_bps) × r_out' ≥ r_in × r_out × 10 000
//! ```
//!
//! which implies `r_in' × r_out' ≥ r_in × r_out`.

use std::collections::BTreeMap;

use alloy_primitives::U256;

use crate::config::{PoolConfig, ProtocolFee};
use crate::domain::{
    Address, Amount, FeeTier, Liquidity, Reserves, Rounding, SwapResult, SwapSpec, TokenPair,
    FEE_DENOMINATOR,
};
use crate::error::AmmError;
use crate::math::{get_amount_in, get_amount_out, wide, CheckedArithmetic};
use crate::traits::{FromConfig, LiquidityPool, SwapPool};

/// A constant product AMM pool.
///
/// Created empty from a [`PoolConfig`] via [`FromConfig`]; the first
/// [`mint`](LiquidityPool::mint) sets the initial price.
///
/// # State
///
/// - `reserves` — current `(low, high)` token balances, fees included,
///   each bounded by [`Amount::MAX_RESERVE`]
/// - `total_liquidity` — outstanding LP units, the locked minimum included
/// - `balances` — LP units per holder; the burn sink ([`Address::ZERO`])
///   holds the locked minimum
/// - `k_last` — reserve product after the last liquidity event, tracked
///   only while a protocol fee is configured
///
/// # Example
///
/// ```rust
/// use pairswap::config::ExchangeConfig;
/// use pairswap::domain::{Address, Amount, Liquidity, TokenPair};
/// use pairswap::pools::ConstantProductPool;
/// use pairswap::traits::{FromConfig, LiquidityPool, SwapPool};
///
/// let a = Address::from_low_u64(1);
/// let b = Address::from_low_u64(2);
/// let pair = TokenPair::new(a, b).expect("distinct");
/// let cfg = ExchangeConfig::default().pool_config(pair).expect("valid config");
/// let mut pool = ConstantProductPool::from_config(&cfg).expect("pool created");
///
/// let lp = Address::from_low_u64(0xAA);
/// let minted = pool.mint(lp, Amount::new(1_000), Amount::new(2_000)).expect("mint ok");
/// assert_eq!(minted, Liquidity::new(414));
///
/// let out = pool.swap_exact_in(a, Amount::new(100)).expect("swap ok");
/// assert_eq!(out, Amount::new(181));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantProductPool {
    token_pair: TokenPair,
    fee_tier: FeeTier,
    reserves: Reserves,
    total_liquidity: Liquidity,
    balances: BTreeMap<Address, Liquidity>,
    minimum_liquidity: Liquidity,
    protocol_fee: Option<ProtocolFee>,
    k_last: U256,
}

impl ConstantProductPool {
    /// The pool's deterministic account address.
    #[must_use]
    pub fn address(&self) -> Address {
        self.token_pair.pool_address()
    }

    /// LP units locked at the burn sink on the first deposit.
    #[must_use]
    pub const fn minimum_liquidity(&self) -> Liquidity {
        self.minimum_liquidity
    }

    /// Protocol fee split, if enabled.
    #[must_use]
    pub const fn protocol_fee(&self) -> Option<ProtocolFee> {
        self.protocol_fee
    }

    /// Reserve product recorded after the last liquidity event.  Always zero
    /// when no protocol fee is configured.
    #[must_use]
    pub const fn k_last(&self) -> U256 {
        self.k_last
    }

    /// Sells exactly `amount_in` of `token_in` and returns the output.
    ///
    /// # Errors
    ///
    /// See [`SwapPool::swap`].
    pub fn swap_exact_in(
        &mut self,
        token_in: Address,
        amount_in: Amount,
    ) -> Result<Amount, AmmError> {
        let spec = SwapSpec::exact_in(amount_in)?;
        self.swap(spec, token_in).map(|result| result.amount_out())
    }

    /// Accounts for a trade the caller has already priced: `amount_in` of
    /// `token_in` has arrived at the pool and `amount_out` of the other
    /// token leaves it.
    ///
    /// The trade is accepted only if the fee-adjusted reserve product does
    /// not decrease, so asking for even one unit more than
    /// [`get_amount_out`] allows fails.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientInputAmount`] / [`AmmError::InsufficientOutputAmount`]
    ///   if either amount is zero.
    /// - [`AmmError::InvalidToken`] if `token_in` is not in the pair.
    /// - [`AmmError::InsufficientLiquidity`] if a reserve is empty or
    ///   `amount_out` would drain the output reserve.
    /// - [`AmmError::InvariantViolation`] if the product check fails.
    /// - [`AmmError::Overflow`] if the input reserve would exceed its bound.
    pub fn execute_swap(
        &mut self,
        token_in: Address,
        amount_in: Amount,
        amount_out: Amount,
    ) -> Result<SwapResult, AmmError> {
        if amount_in.is_zero() {
            return Err(AmmError::InsufficientInputAmount);
        }
        if amount_out.is_zero() {
            return Err(AmmError::InsufficientOutputAmount);
        }
        let low_in = self.token_pair.is_low(&token_in)?;
        let token_out = self.token_pair.other(&token_in)?;
        let (reserve_in, reserve_out) = self.reserves.oriented(low_in);
        if reserve_in.is_zero() || reserve_out.is_zero() || amount_out >= reserve_out {
            return Err(AmmError::InsufficientLiquidity);
        }

        let new_in = bounded(reserve_in.safe_add(&amount_in)?)?;
        let new_out = reserve_out.safe_sub(&amount_out)?;

        let denominator = wide::from_u128(FEE_DENOMINATOR);
        let fee_bps = wide::from_u128(u128::from(self.fee_tier.basis_points()));
        // amount_in * fee_bps <= new_in * 10_000, so this cannot underflow
        let adjusted_in = new_in.widen() * denominator - amount_in.widen() * fee_bps;
        let lhs = wide::mul(adjusted_in, new_out.widen(), "invariant check overflow")?;
        let rhs = wide::mul(
            reserve_in.widen() * reserve_out.widen(),
            denominator,
            "invariant check overflow",
        )?;
        if lhs < rhs {
            return Err(AmmError::InvariantViolation);
        }

        let result = SwapResult::new(token_in, token_out, amount_in, amount_out)?;
        self.reserves = if low_in {
            Reserves::new(new_in, new_out)
        } else {
            Reserves::new(new_out, new_in)
        };
        Ok(result)
    }

    /// Moves `amount` LP units from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAddress`] if either side is the burn sink.
    /// - [`AmmError::InsufficientLpBalance`] if `from` holds less than
    ///   `amount`.
    pub fn transfer_liquidity(
        &mut self,
        from: Address,
        to: Address,
        amount: Liquidity,
    ) -> Result<(), AmmError> {
        if from.is_zero() || to.is_zero() {
            return Err(AmmError::ZeroAddress);
        }
        if self.liquidity_of(&from) < amount {
            return Err(AmmError::InsufficientLpBalance);
        }
        self.debit(from, amount)?;
        self.credit(to, amount)
    }

    /// LP units owed to the protocol for reserve growth since `k_last`.
    ///
    /// ```text
    /// minted = total × (√k − √k_last) / (√k × (n − 1) + √k_last)
    /// ```
    fn accrued_protocol_fee(&self) -> Result<Liquidity, AmmError> {
        let Some(fee) = self.protocol_fee else {
            return Ok(Liquidity::ZERO);
        };
        if self.k_last.is_zero() {
            return Ok(Liquidity::ZERO);
        }
        let root_k = wide::isqrt(self.reserves.product());
        let root_k_last = wide::isqrt(self.k_last);
        if root_k <= root_k_last {
            return Ok(Liquidity::ZERO);
        }
        let growth = root_k - root_k_last;
        let weight = wide::from_u128(u128::from(fee.share_denominator.saturating_sub(1)));
        let denominator = wide::add(
            wide::mul(root_k, weight, "protocol fee overflow")?,
            root_k_last,
            "protocol fee overflow",
        )?;
        let minted = wide::mul_div(
            self.total_liquidity.widen(),
            growth,
            denominator,
            Rounding::Down,
        )?;
        wide::narrow(minted, "protocol fee overflow").map(Liquidity::new)
    }

    /// Credits the accrued protocol fee to its recipient.
    fn settle_protocol_fee(&mut self, accrued: Liquidity) -> Result<(), AmmError> {
        if let (Some(fee), false) = (self.protocol_fee, accrued.is_zero()) {
            self.credit(fee.recipient, accrued)?;
            self.total_liquidity = self.total_liquidity.safe_add(&accrued)?;
        }
        Ok(())
    }

    fn record_k_last(&mut self) {
        if self.protocol_fee.is_some() {
            self.k_last = self.reserves.product();
        }
    }

    fn credit(&mut self, owner: Address, amount: Liquidity) -> Result<(), AmmError> {
        let balance = self.balances.entry(owner).or_insert(Liquidity::ZERO);
        *balance = balance.safe_add(&amount)?;
        Ok(())
    }

    fn debit(&mut self, owner: Address, amount: Liquidity) -> Result<(), AmmError> {
        let remaining = self.liquidity_of(&owner).safe_sub(&amount)?;
        if remaining.is_zero() {
            self.balances.remove(&owner);
        } else {
            self.balances.insert(owner, remaining);
        }
        Ok(())
    }
}

/// Rejects reserves beyond [`Amount::MAX_RESERVE`].
pub(crate) fn bounded(reserve: Amount) -> Result<Amount, AmmError> {
    if reserve > Amount::MAX_RESERVE {
        return Err(AmmError::Overflow("reserve exceeds 112 bits"));
    }
    Ok(reserve)
}

impl FromConfig<PoolConfig> for ConstantProductPool {
    /// Creates an empty pool for the configured pair.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    fn from_config(config: &PoolConfig) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self {
            token_pair: *config.token_pair(),
            fee_tier: config.fee_tier(),
            reserves: Reserves::default(),
            total_liquidity: Liquidity::ZERO,
            balances: BTreeMap::new(),
            minimum_liquidity: config.minimum_liquidity(),
            protocol_fee: config.protocol_fee(),
            k_last: U256::ZERO,
        })
    }
}

impl SwapPool for ConstantProductPool {
    /// Prices the trade with the closed-form curve, then settles it through
    /// [`execute_swap`](ConstantProductPool::execute_swap).
    fn swap(&mut self, spec: SwapSpec, token_in: Address) -> Result<SwapResult, AmmError> {
        let (reserve_in, reserve_out) = self.reserves_for(&token_in)?;
        let (amount_in, amount_out) = match spec {
            SwapSpec::ExactIn { amount_in } => (
                amount_in,
                get_amount_out(amount_in, reserve_in, reserve_out, self.fee_tier)?,
            ),
            SwapSpec::ExactOut { amount_out } => (
                get_amount_in(amount_out, reserve_in, reserve_out, self.fee_tier)?,
                amount_out,
            ),
        };
        self.execute_swap(token_in, amount_in, amount_out)
    }

    fn reserves(&self) -> Reserves {
        self.reserves
    }

    fn token_pair(&self) -> &TokenPair {
        &self.token_pair
    }

    fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }
}

impl LiquidityPool for ConstantProductPool {
    fn mint(
        &mut self,
        to: Address,
        amount_low: Amount,
        amount_high: Amount,
    ) -> Result<Liquidity, AmmError> {
        if to.is_zero() {
            return Err(AmmError::ZeroAddress);
        }
        let new_low = bounded(self.reserves.low.safe_add(&amount_low)?)?;
        let new_high = bounded(self.reserves.high.safe_add(&amount_high)?)?;

        let accrued = self.accrued_protocol_fee()?;
        let total = self.total_liquidity.safe_add(&accrued)?;

        let (minted, locked) = if total.is_zero() {
            let root = wide::isqrt(amount_low.widen() * amount_high.widen());
            let root = Liquidity::new(wide::narrow(root, "initial liquidity overflow")?);
            let minted = root
                .checked_sub(&self.minimum_liquidity)
                .ok_or(AmmError::InsufficientLiquidityMinted)?;
            (minted, self.minimum_liquidity)
        } else {
            let by_low = wide::mul_div(
                amount_low.widen(),
                total.widen(),
                self.reserves.low.widen(),
                Rounding::Down,
            )?;
            let by_high = wide::mul_div(
                amount_high.widen(),
                total.widen(),
                self.reserves.high.widen(),
                Rounding::Down,
            )?;
            let minted = wide::narrow(by_low.min(by_high), "minted liquidity overflow")?;
            (Liquidity::new(minted), Liquidity::ZERO)
        };
        if minted.is_zero() {
            return Err(AmmError::InsufficientLiquidityMinted);
        }
        let new_total = total.safe_add(&locked)?.safe_add(&minted)?;

        self.settle_protocol_fee(accrued)?;
        if !locked.is_zero() {
            self.credit(Address::ZERO, locked)?;
        }
        self.credit(to, minted)?;
        self.total_liquidity = new_total;
        self.reserves = Reserves::new(new_low, new_high);
        self.record_k_last();
        Ok(minted)
    }

    fn burn(
        &mut self,
        owner: Address,
        liquidity: Liquidity,
    ) -> Result<(Amount, Amount), AmmError> {
        if owner.is_zero() {
            return Err(AmmError::ZeroAddress);
        }
        if liquidity.is_zero() {
            return Err(AmmError::InsufficientLiquidityBurned);
        }
        if self.liquidity_of(&owner) < liquidity {
            return Err(AmmError::InsufficientLpBalance);
        }

        let accrued = self.accrued_protocol_fee()?;
        let total = self.total_liquidity.safe_add(&accrued)?;
        let share = |reserve: Amount| -> Result<Amount, AmmError> {
            let amount = wide::mul_div(
                liquidity.widen(),
                reserve.widen(),
                total.widen(),
                Rounding::Down,
            )?;
            wide::narrow(amount, "burn amount overflow").map(Amount::new)
        };
        let amount_low = share(self.reserves.low)?;
        let amount_high = share(self.reserves.high)?;
        if amount_low.is_zero() || amount_high.is_zero() {
            return Err(AmmError::InsufficientLiquidityBurned);
        }
        let new_low = self.reserves.low.safe_sub(&amount_low)?;
        let new_high = self.reserves.high.safe_sub(&amount_high)?;
        let new_total = total.safe_sub(&liquidity)?;

        self.settle_protocol_fee(accrued)?;
        self.debit(owner, liquidity)?;
        self.total_liquidity = new_total;
        self.reserves = Reserves::new(new_low, new_high);
        self.record_k_last();
        Ok((amount_low, amount_high))
    }

    fn total_liquidity(&self) -> Liquidity {
        self.total_liquidity
    }

    fn liquidity_of(&self, owner: &Address) -> Liquidity {
        self.balances.get(owner).copied().unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::ExchangeConfig;

    // -- helpers --------------------------------------------------------------

    fn tok_a() -> Address {
        Address::from_low_u64(1)
    }

    fn tok_b() -> Address {
        Address::from_low_u64(2)
    }

    fn lp() -> Address {
        Address::from_low_u64(0xAA)
    }

    fn make_pair() -> TokenPair {
        let Ok(pair) = TokenPair::new(tok_a(), tok_b()) else {
            panic!("expected valid pair");
        };
        pair
    }

    fn empty_pool_with(config: &ExchangeConfig) -> ConstantProductPool {
        let Ok(cfg) = config.pool_config(make_pair()) else {
            panic!("expected valid config");
        };
        let Ok(pool) = ConstantProductPool::from_config(&cfg) else {
            panic!("expected valid pool");
        };
        pool
    }

    fn make_pool(ra: u128, rb: u128) -> ConstantProductPool {
        let mut pool = empty_pool_with(&ExchangeConfig::default());
        let Ok(_) = pool.mint(lp(), Amount::new(ra), Amount::new(rb)) else {
            panic!("expected bootstrap mint");
        };
        pool
    }

    // -- FromConfig -----------------------------------------------------------

    #[test]
    fn from_config_starts_empty() {
        let pool = empty_pool_with(&ExchangeConfig::default());
        assert_eq!(pool.reserves(), Reserves::default());
        assert!(pool.total_liquidity().is_zero());
        assert_eq!(pool.fee_tier(), FeeTier::STANDARD);
        assert_eq!(pool.address(), make_pair().pool_address());
    }

    // -- Mint -----------------------------------------------------------------

    #[test]
    fn first_mint_locks_minimum_liquidity() {
        let mut pool = empty_pool_with(&ExchangeConfig::default());
        let Ok(minted) = pool.mint(lp(), Amount::new(1_000), Amount::new(2_000)) else {
            panic!("expected Ok");
        };
        // floor(sqrt(2_000_000)) - 1000 = 1414 - 1000
        assert_eq!(minted, Liquidity::new(414));
        assert_eq!(pool.total_liquidity(), Liquidity::new(1_414));
        assert_eq!(pool.liquidity_of(&Address::ZERO), Liquidity::new(1_000));
        assert_eq!(pool.liquidity_of(&lp()), Liquidity::new(414));
        assert_eq!(
            pool.reserves(),
            Reserves::new(Amount::new(1_000), Amount::new(2_000))
        );
    }

    #[test]
    fn first_mint_below_minimum_rejected() {
        let mut pool = empty_pool_with(&ExchangeConfig::default());
        // sqrt(1000 * 1000) = 1000, nothing left after locking
        let result = pool.mint(lp(), Amount::new(1_000), Amount::new(1_000));
        assert_eq!(result, Err(AmmError::InsufficientLiquidityMinted));
        assert_eq!(pool, empty_pool_with(&ExchangeConfig::default()));
    }

    #[test]
    fn first_mint_one_sided_rejected() {
        let mut pool = empty_pool_with(&ExchangeConfig::default());
        let result = pool.mint(lp(), Amount::new(1_000_000), Amount::ZERO);
        assert_eq!(result, Err(AmmError::InsufficientLiquidityMinted));
    }

    #[test]
    fn later_mint_takes_smaller_ratio() {
        let mut pool = make_pool(1_000, 2_000);
        let other = Address::from_low_u64(0xBB);
        // min(500 * 1414 / 1000, 2000 * 1414 / 2000) = min(707, 1414)
        let Ok(minted) = pool.mint(other, Amount::new(500), Amount::new(2_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(minted, Liquidity::new(707));
        assert_eq!(pool.total_liquidity(), Liquidity::new(2_121));
        assert_eq!(
            pool.reserves(),
            Reserves::new(Amount::new(1_500), Amount::new(4_000))
        );
    }

    #[test]
    fn dust_mint_rejected() {
        let mut pool = make_pool(1_000_000, 2_000_000);
        let before = pool.clone();
        let result = pool.mint(lp(), Amount::new(1), Amount::new(1));
        assert_eq!(result, Err(AmmError::InsufficientLiquidityMinted));
        assert_eq!(pool, before);
    }

    #[test]
    fn mint_to_burn_sink_rejected() {
        let mut pool = empty_pool_with(&ExchangeConfig::default());
        let result = pool.mint(Address::ZERO, Amount::new(1_000), Amount::new(2_000));
        assert_eq!(result, Err(AmmError::ZeroAddress));
    }

    #[test]
    fn mint_beyond_reserve_bound_rejected() {
        let mut pool = empty_pool_with(&ExchangeConfig::default());
        let too_big = Amount::new(Amount::MAX_RESERVE.get() + 1);
        let Err(AmmError::Overflow(_)) = pool.mint(lp(), too_big, Amount::new(1_000)) else {
            panic!("expected Overflow");
        };
    }

    // -- Burn -----------------------------------------------------------------

    #[test]
    fn burn_returns_proportional_share() {
        let mut pool = make_pool(1_000, 2_000);
        let Ok((low, high)) = pool.burn(lp(), Liquidity::new(414)) else {
            panic!("expected Ok");
        };
        // 414 * 1000 / 1414 = 292, 414 * 2000 / 1414 = 585
        assert_eq!(low, Amount::new(292));
        assert_eq!(high, Amount::new(585));
        assert_eq!(pool.total_liquidity(), Liquidity::new(1_000));
        assert!(pool.liquidity_of(&lp()).is_zero());
        assert_eq!(
            pool.reserves(),
            Reserves::new(Amount::new(708), Amount::new(1_415))
        );
    }

    #[test]
    fn burn_more_than_held_rejected() {
        let mut pool = make_pool(1_000, 2_000);
        let before = pool.clone();
        let result = pool.burn(lp(), Liquidity::new(415));
        assert_eq!(result, Err(AmmError::InsufficientLpBalance));
        assert_eq!(pool, before);
    }

    #[test]
    fn burn_sink_cannot_burn() {
        let mut pool = make_pool(1_000, 2_000);
        let result = pool.burn(Address::ZERO, Liquidity::new(1));
        assert_eq!(result, Err(AmmError::ZeroAddress));
    }

    #[test]
    fn burn_dust_rejected() {
        let mut pool = make_pool(1_000, 1_000_000);
        // 1 * 1000 / 31622 rounds to zero on the low side
        let result = pool.burn(lp(), Liquidity::new(1));
        assert_eq!(result, Err(AmmError::InsufficientLiquidityBurned));
    }

    #[test]
    fn burn_zero_rejected() {
        let mut pool = make_pool(1_000, 2_000);
        let result = pool.burn(lp(), Liquidity::ZERO);
        assert_eq!(result, Err(AmmError::InsufficientLiquidityBurned));
    }

    // -- Swap -----------------------------------------------------------------

    #[test]
    fn swap_exact_in_reference_trade() {
        let mut pool = make_pool(1_000, 2_000);
        let Ok(out) = pool.swap_exact_in(tok_a(), Amount::new(100)) else {
            panic!("expected Ok");
        };
        assert_eq!(out, Amount::new(181));
        assert_eq!(
            pool.reserves(),
            Reserves::new(Amount::new(1_100), Amount::new(1_819))
        );
    }

    #[test]
    fn swap_high_to_low() {
        let mut pool = make_pool(1_000_000, 2_000_000);
        let Ok(spec) = SwapSpec::exact_in(Amount::new(2_000)) else {
            panic!("valid spec");
        };
        let Ok(result) = pool.swap(spec, tok_b()) else {
            panic!("expected Ok");
        };
        assert_eq!(result.token_in(), tok_b());
        assert_eq!(result.token_out(), tok_a());
        assert!(pool.reserves().high > Amount::new(2_000_000));
        assert!(pool.reserves().low < Amount::new(1_000_000));
    }

    #[test]
    fn swap_exact_out_charges_minimum_input() {
        let mut pool = make_pool(1_000, 2_000);
        let Ok(spec) = SwapSpec::exact_out(Amount::new(181)) else {
            panic!("valid spec");
        };
        let Ok(result) = pool.swap(spec, tok_a()) else {
            panic!("expected Ok");
        };
        assert_eq!(result.amount_in(), Amount::new(100));
        assert_eq!(result.amount_out(), Amount::new(181));
    }

    #[test]
    fn execute_swap_rejects_one_unit_too_many() {
        let mut pool = make_pool(1_000, 2_000);
        let before = pool.clone();
        let result = pool.execute_swap(tok_a(), Amount::new(100), Amount::new(182));
        assert_eq!(result, Err(AmmError::InvariantViolation));
        assert_eq!(pool, before);
        assert!(pool
            .execute_swap(tok_a(), Amount::new(100), Amount::new(181))
            .is_ok());
    }

    #[test]
    fn swap_unknown_token_rejected() {
        let mut pool = make_pool(1_000, 2_000);
        let result = pool.swap_exact_in(Address::from_low_u64(99), Amount::new(10));
        assert!(matches!(result, Err(AmmError::InvalidToken(_))));
    }

    #[test]
    fn swap_on_empty_pool_rejected() {
        let mut pool = empty_pool_with(&ExchangeConfig::default());
        let result = pool.swap_exact_in(tok_a(), Amount::new(10));
        assert_eq!(result, Err(AmmError::InsufficientLiquidity));
    }

    #[test]
    fn swap_draining_output_rejected() {
        let mut pool = make_pool(1_000, 2_000);
        let result = pool.execute_swap(tok_a(), Amount::new(1_000_000), Amount::new(2_000));
        assert_eq!(result, Err(AmmError::InsufficientLiquidity));
    }

    #[test]
    fn swap_zero_amounts_rejected() {
        let mut pool = make_pool(1_000, 2_000);
        assert_eq!(
            pool.execute_swap(tok_a(), Amount::ZERO, Amount::new(1)),
            Err(AmmError::InsufficientInputAmount)
        );
        assert_eq!(
            pool.execute_swap(tok_a(), Amount::new(1), Amount::ZERO),
            Err(AmmError::InsufficientOutputAmount)
        );
    }

    #[test]
    fn swap_beyond_reserve_bound_rejected() {
        let mut pool = empty_pool_with(&ExchangeConfig::default());
        let Ok(_) = pool.mint(lp(), Amount::MAX_RESERVE, Amount::MAX_RESERVE) else {
            panic!("expected bootstrap mint");
        };
        let Err(AmmError::Overflow(_)) = pool.execute_swap(tok_a(), Amount::new(1), Amount::new(1))
        else {
            panic!("expected Overflow");
        };
    }

    #[test]
    fn invariant_grows_over_round_trips() {
        let mut pool = make_pool(1_000_000, 2_000_000);
        let k_initial = pool.reserves().product();
        for _ in 0..5 {
            let Ok(out) = pool.swap_exact_in(tok_a(), Amount::new(10_000)) else {
                panic!("expected Ok");
            };
            let Ok(_) = pool.swap_exact_in(tok_b(), out) else {
                panic!("expected Ok");
            };
        }
        assert!(pool.reserves().product() > k_initial);
    }

    // -- LP transfers ---------------------------------------------------------

    #[test]
    fn transfer_liquidity_moves_units() {
        let mut pool = make_pool(1_000, 2_000);
        let other = Address::from_low_u64(0xBB);
        let Ok(()) = pool.transfer_liquidity(lp(), other, Liquidity::new(100)) else {
            panic!("expected Ok");
        };
        assert_eq!(pool.liquidity_of(&lp()), Liquidity::new(314));
        assert_eq!(pool.liquidity_of(&other), Liquidity::new(100));
        assert_eq!(pool.total_liquidity(), Liquidity::new(1_414));
        assert_eq!(
            pool.transfer_liquidity(lp(), other, Liquidity::new(315)),
            Err(AmmError::InsufficientLpBalance)
        );
        assert_eq!(
            pool.transfer_liquidity(Address::ZERO, other, Liquidity::new(1)),
            Err(AmmError::ZeroAddress)
        );
    }

    // -- Protocol fee ---------------------------------------------------------

    fn fee_recipient() -> Address {
        Address::from_low_u64(0xFE)
    }

    #[test]
    fn protocol_fee_disabled_by_default() {
        let mut pool = make_pool(10_000, 10_000);
        let Ok(_) = pool.swap_exact_in(tok_a(), Amount::new(5_000)) else {
            panic!("expected Ok");
        };
        let Ok(_) = pool.burn(lp(), Liquidity::new(1_000)) else {
            panic!("expected Ok");
        };
        assert!(pool.k_last().is_zero());
        assert!(pool.liquidity_of(&fee_recipient()).is_zero());
    }

    #[test]
    fn protocol_fee_minted_on_next_liquidity_event() {
        let config = ExchangeConfig {
            fee_bps: 3_000,
            protocol_fee: Some(ProtocolFee::new(fee_recipient(), 6)),
            ..ExchangeConfig::default()
        };
        let mut pool = empty_pool_with(&config);
        let Ok(minted) = pool.mint(lp(), Amount::new(10_000), Amount::new(10_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(minted, Liquidity::new(9_000));
        assert_eq!(pool.k_last(), wide::from_u128(100_000_000));

        // 10_000 * 7_000 * 10_000 / (10_000 * 10_000 + 70_000_000) = 4_117
        let Ok(out) = pool.swap_exact_in(tok_a(), Amount::new(10_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(out, Amount::new(4_117));
        // swaps alone never mint protocol units
        assert!(pool.liquidity_of(&fee_recipient()).is_zero());

        // √(20_000 · 5_883) = 10_847; 10_000 · 847 / (10_847 · 5 + 10_000) = 131
        let Ok(_) = pool.burn(lp(), Liquidity::new(9_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(pool.liquidity_of(&fee_recipient()), Liquidity::new(131));
        assert_eq!(pool.total_liquidity(), Liquidity::new(1_131));
        assert_eq!(pool.k_last(), pool.reserves().product());
    }
}
