//! Pool implementations.
//!
//! [`ConstantProductPool`] is the exchange's only pool type: a two-token
//! `x · y = k` pool with fungible LP units, a locked minimum liquidity and
//! an optional protocol fee.  It implements
//! [`SwapPool`](crate::traits::SwapPool) and
//! [`LiquidityPool`](crate::traits::LiquidityPool).

pub mod constant_product;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use constant_product::ConstantProductPool;
