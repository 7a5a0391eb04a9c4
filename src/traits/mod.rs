//! Core trait abstractions.
//!
//! [`SwapPool`] for executing swaps, [`LiquidityPool`] for LP-unit
//! accounting, [`FromConfig`] for configuration-driven construction,
//! [`TokenLedger`] for token balances and [`Clock`] for deadlines.

mod clock;
mod from_config;
mod liquidity_pool;
mod swap_pool;
mod token_ledger;

pub use clock::{Clock, ManualClock, SystemClock};
pub use from_config::FromConfig;
pub use liquidity_pool::LiquidityPool;
pub use swap_pool::SwapPool;
pub use token_ledger::TokenLedger;
