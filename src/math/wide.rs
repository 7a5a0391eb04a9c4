//! 256-bit intermediates for reserve and liquidity arithmetic.
//!
//! Reserves are bounded to 112 bits and LP supplies to 128 bits, so every
//! product the pool forms fits in a [`U256`].  Results are narrowed back to
//! `u128` with an explicit check.

use alloy_primitives::U256;

use crate::domain::Rounding;
use crate::error::AmmError;

/// Lossless widening of a `u128`.
#[must_use]
pub fn from_u128(value: u128) -> U256 {
    U256::from(value)
}

/// Narrows to `u128`, or `None` if the value needs more than 128 bits.
#[must_use]
pub fn to_u128(value: U256) -> Option<u128> {
    u128::try_from(value).ok()
}

/// Narrows to `u128`, reporting `context` on overflow.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] if the value does not fit.
pub fn narrow(value: U256, context: &'static str) -> Result<u128, AmmError> {
    to_u128(value).ok_or(AmmError::Overflow(context))
}

/// Checked 256-bit multiplication.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] carrying `context`.
pub fn mul(a: U256, b: U256, context: &'static str) -> Result<U256, AmmError> {
    a.checked_mul(b).ok_or(AmmError::Overflow(context))
}

/// Checked 256-bit addition.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] carrying `context`.
pub fn add(a: U256, b: U256, context: &'static str) -> Result<U256, AmmError> {
    a.checked_add(b).ok_or(AmmError::Overflow(context))
}

/// `a × b / denominator` with a full-width product and explicit rounding.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::Overflow`] if `a × b` exceeds 256 bits.
pub fn mul_div(
    a: U256,
    b: U256,
    denominator: U256,
    rounding: Rounding,
) -> Result<U256, AmmError> {
    if denominator.is_zero() {
        return Err(AmmError::DivisionByZero);
    }
    let product = mul(a, b, "mul_div product overflow")?;
    let quotient = product
        .checked_div(denominator)
        .ok_or(AmmError::DivisionByZero)?;
    let exact = product
        .checked_rem(denominator)
        .is_some_and(|r| r.is_zero());
    if rounding.is_up() && !exact {
        return add(quotient, U256::from(1u8), "mul_div rounding overflow");
    }
    Ok(quotient)
}

/// Integer square root, rounded down.
#[must_use]
pub fn isqrt(n: U256) -> U256 {
    n.root(2)
}
