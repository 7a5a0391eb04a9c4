//! Multi-hop trading and liquidity management.
//!
//! - [`Router`] runs deadline-checked, slippage-bounded operations against a
//!   [`PairRegistry`](crate::factory::PairRegistry) and a
//!   [`TokenLedger`](crate::traits::TokenLedger), committing each one
//!   atomically.
//! - [`get_amounts_out`] / [`get_amounts_in`] price a token path without
//!   touching state.
//! - [`PathFinder`] searches the pair graph for the best path between two
//!   tokens.

mod library;
mod path_finder;
mod requests;
#[allow(clippy::module_inception)]
mod router;
mod transaction;

pub use library::{get_amounts_in, get_amounts_out, validate_path};
pub use path_finder::PathFinder;
pub use requests::{
    AddLiquidity, LiquidityAdded, LiquidityRemoved, RemoveLiquidity, SwapExactIn, SwapExactOut,
};
pub use router::Router;

pub use crate::math::{get_amount_in, get_amount_out, quote};
