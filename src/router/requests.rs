//! Router call parameters and receipts.

use serde::{Deserialize, Serialize};

use crate::domain::{Address, Amount, Liquidity, Timestamp};

/// Deposit both tokens of a pair, creating the pool on first use.
///
/// The deposited amounts follow the pool's current ratio: the router takes
/// the largest pair not exceeding either desired amount, and fails if that
/// falls below the corresponding minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddLiquidity {
    /// First token.
    pub token_a: Address,
    /// Second token.
    pub token_b: Address,
    /// Most of `token_a` to deposit.
    pub amount_a_desired: Amount,
    /// Most of `token_b` to deposit.
    pub amount_b_desired: Amount,
    /// Least of `token_a` to accept depositing.
    pub amount_a_min: Amount,
    /// Least of `token_b` to accept depositing.
    pub amount_b_min: Amount,
    /// Receiver of the minted LP units.
    pub to: Address,
    /// Latest time the call may execute.
    pub deadline: Timestamp,
}

/// Burn LP units for a proportional share of both reserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveLiquidity {
    /// First token.
    pub token_a: Address,
    /// Second token.
    pub token_b: Address,
    /// LP units to burn from the sender.
    pub liquidity: Liquidity,
    /// Least of `token_a` to accept.
    pub amount_a_min: Amount,
    /// Least of `token_b` to accept.
    pub amount_b_min: Amount,
    /// Receiver of both withdrawn tokens.
    pub to: Address,
    /// Latest time the call may execute.
    pub deadline: Timestamp,
}

/// Sell an exact amount of `path[0]` for as much of the last token as
/// possible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapExactIn {
    /// Amount of `path[0]` paid.
    pub amount_in: Amount,
    /// Least acceptable final output.
    pub amount_out_min: Amount,
    /// Token path; consecutive tokens must share a pool.
    pub path: Vec<Address>,
    /// Receiver of the final output.
    pub to: Address,
    /// Latest time the call may execute.
    pub deadline: Timestamp,
}

/// Buy an exact amount of the last token for as little of `path[0]` as
/// possible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapExactOut {
    /// Amount of the last token received.
    pub amount_out: Amount,
    /// Most of `path[0]` the sender will pay.
    pub amount_in_max: Amount,
    /// Token path; consecutive tokens must share a pool.
    pub path: Vec<Address>,
    /// Receiver of the final output.
    pub to: Address,
    /// Latest time the call may execute.
    pub deadline: Timestamp,
}

/// Outcome of [`Router::add_liquidity`](super::Router::add_liquidity).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiquidityAdded {
    /// Address of the pool deposited into.
    pub pool: Address,
    /// Deposited `token_a`.
    pub amount_a: Amount,
    /// Deposited `token_b`.
    pub amount_b: Amount,
    /// LP units minted to the recipient.
    pub liquidity: Liquidity,
}

/// Outcome of [`Router::remove_liquidity`](super::Router::remove_liquidity).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiquidityRemoved {
    /// Withdrawn `token_a`.
    pub amount_a: Amount,
    /// Withdrawn `token_b`.
    pub amount_b: Amount,
}
