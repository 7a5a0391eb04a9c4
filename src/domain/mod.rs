//! Fundamental domain value types used throughout the exchange.
//!
//! Addresses, amounts, LP units, fee tiers, canonical pairs, reserve
//! snapshots, timestamps and routes.  All types are newtypes or small
//! structs with validated constructors so invalid states do not reach the
//! pool engine.

pub(crate) mod address;
mod amount;
mod fee_tier;
mod liquidity;
mod reserves;
mod rounding;
mod route;
mod swap_result;
mod swap_spec;
mod timestamp;
mod token_pair;

pub use address::Address;
pub use amount::Amount;
pub use fee_tier::{FeeTier, FEE_DENOMINATOR};
pub use liquidity::Liquidity;
pub use reserves::Reserves;
pub use rounding::Rounding;
pub use route::Route;
pub use swap_result::SwapResult;
pub use swap_spec::SwapSpec;
pub use timestamp::Timestamp;
pub use token_pair::{sort_tokens, TokenPair};
