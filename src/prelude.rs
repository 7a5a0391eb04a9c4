//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use pairswap::prelude::*;
//! ```

pub use crate::config::{ExchangeConfig, PoolConfig, ProtocolFee};
pub use crate::domain::{
    Address, Amount, FeeTier, Liquidity, Reserves, Route, SwapResult, SwapSpec, Timestamp,
    TokenPair,
};
pub use crate::error::{AmmError, Result};
pub use crate::factory::PairRegistry;
pub use crate::ledger::InMemoryLedger;
pub use crate::math::CheckedArithmetic;
pub use crate::pools::ConstantProductPool;
pub use crate::router::{
    get_amounts_in, get_amounts_out, quote, AddLiquidity, LiquidityAdded, LiquidityRemoved,
    PathFinder, RemoveLiquidity, Router, SwapExactIn, SwapExactOut,
};
pub use crate::traits::{
    Clock, FromConfig, LiquidityPool, ManualClock, SwapPool, SystemClock, TokenLedger,
};
