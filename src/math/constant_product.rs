//! Single-hop closed forms of the fee-adjusted `x · y = k` curve.
//!
//! All three functions round in the pool's favour: outputs are floored and
//! required inputs are floored then bumped by one, so a quote produced here
//! always passes the pool's own invariant check.

use alloy_primitives::U256;

use super::wide;
use crate::domain::{Amount, FeeTier, Rounding, FEE_DENOMINATOR};
use crate::error::AmmError;

/// Proportional scaling: the amount of B worth `amount_a` of A at the
/// reserve ratio `reserve_a : reserve_b`.
///
/// Used to balance the second side of a liquidity deposit.
///
/// # Errors
///
/// - [`AmmError::InsufficientAmount`] if `amount_a` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
/// - [`AmmError::Overflow`] if the result exceeds `u128`.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Amount;
/// use pairswap::math::quote;
///
/// let b = quote(Amount::new(500), Amount::new(1_000), Amount::new(2_000));
/// assert_eq!(b, Ok(Amount::new(1_000)));
/// ```
pub fn quote(amount_a: Amount, reserve_a: Amount, reserve_b: Amount) -> Result<Amount, AmmError> {
    if amount_a.is_zero() {
        return Err(AmmError::InsufficientAmount);
    }
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    let scaled = wide::mul_div(
        amount_a.widen(),
        reserve_b.widen(),
        reserve_a.widen(),
        Rounding::Down,
    )?;
    wide::narrow(scaled, "quote overflow").map(Amount::new)
}

/// Maximum output for an exact input against `(reserve_in, reserve_out)`.
///
/// ```text
/// in_with_fee = amount_in × (10 000 − fee_bps)
/// amount_out  = in_with_fee × reserve_out / (reserve_in × 10 000 + in_with_fee)
/// ```
///
/// # Errors
///
/// - [`AmmError::InsufficientInputAmount`] if `amount_in` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
/// - [`AmmError::Overflow`] if an intermediate exceeds 256 bits.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, FeeTier};
/// use pairswap::math::get_amount_out;
///
/// let out = get_amount_out(
///     Amount::new(100),
///     Amount::new(1_000),
///     Amount::new(2_000),
///     FeeTier::STANDARD,
/// );
/// assert_eq!(out, Ok(Amount::new(181)));
/// ```
pub fn get_amount_out(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeTier,
) -> Result<Amount, AmmError> {
    if amount_in.is_zero() {
        return Err(AmmError::InsufficientInputAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    let in_with_fee = wide::mul(
        amount_in.widen(),
        wide::from_u128(fee.retained_numerator()),
        "fee-adjusted input overflow",
    )?;
    let scaled_reserve = wide::mul(
        reserve_in.widen(),
        wide::from_u128(FEE_DENOMINATOR),
        "scaled reserve overflow",
    )?;
    let denominator = wide::add(scaled_reserve, in_with_fee, "swap denominator overflow")?;
    let out = wide::mul_div(in_with_fee, reserve_out.widen(), denominator, Rounding::Down)?;
    wide::narrow(out, "amount out overflow").map(Amount::new)
}

/// Minimum input that buys exactly `amount_out` from
/// `(reserve_in, reserve_out)`.
///
/// ```text
/// amount_in = ⌊reserve_in × amount_out × 10 000
///              / ((reserve_out − amount_out) × (10 000 − fee_bps))⌋ + 1
/// ```
///
/// # Errors
///
/// - [`AmmError::InsufficientOutputAmount`] if `amount_out` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero or
///   `amount_out` would drain the output reserve.
/// - [`AmmError::DivisionByZero`] for a fee tier that retains nothing.
/// - [`AmmError::Overflow`] if an intermediate exceeds 256 bits.
pub fn get_amount_in(
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeTier,
) -> Result<Amount, AmmError> {
    if amount_out.is_zero() {
        return Err(AmmError::InsufficientOutputAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() || amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }
    let numerator = wide::mul(
        wide::mul(reserve_in.widen(), amount_out.widen(), "amount in overflow")?,
        wide::from_u128(FEE_DENOMINATOR),
        "amount in overflow",
    )?;
    // amount_out < reserve_out, checked above
    let remaining = reserve_out.widen() - amount_out.widen();
    let denominator = wide::mul(
        remaining,
        wide::from_u128(fee.retained_numerator()),
        "amount in overflow",
    )?;
    let floor = numerator
        .checked_div(denominator)
        .ok_or(AmmError::DivisionByZero)?;
    let required = wide::add(floor, U256::from(1u8), "amount in overflow")?;
    wide::narrow(required, "amount in overflow").map(Amount::new)
}
