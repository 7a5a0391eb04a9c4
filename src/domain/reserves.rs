//! Pool reserve snapshot.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use super::Amount;

/// A pool's balances of its two tokens, in canonical `(low, high)` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Reserves {
    /// Reserve of the lower-addressed token.
    pub low: Amount,
    /// Reserve of the higher-addressed token.
    pub high: Amount,
}

impl Reserves {
    /// Creates a reserve snapshot.
    pub const fn new(low: Amount, high: Amount) -> Self {
        Self { low, high }
    }

    /// The invariant `k = low × high`, exact in 256 bits.
    #[must_use]
    pub fn product(&self) -> U256 {
        // both factors are < 2^128, so the product is < 2^256
        self.low.widen() * self.high.widen()
    }

    /// `true` if either side is empty.
    #[must_use]
    pub const fn has_empty_side(&self) -> bool {
        self.low.is_zero() || self.high.is_zero()
    }

    /// Returns `(reserve_in, reserve_out)` for a trade selling the low
    /// token when `low_in` is true, the high token otherwise.
    #[must_use]
    pub const fn oriented(&self, low_in: bool) -> (Amount, Amount) {
        if low_in {
            (self.low, self.high)
        } else {
            (self.high, self.low)
        }
    }
}
