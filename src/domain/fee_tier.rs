//! Swap fee expressed in basis points.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Basis-point denominator (10 000 = 100%).
pub const FEE_DENOMINATOR: u128 = 10_000;

/// The fraction of every swap input that stays in the pool for LP holders.
///
/// The fee is never withdrawn as a separate balance: the pool prices a
/// trade on `amount_in × (10 000 − bps) / 10 000` but keeps the full
/// `amount_in`, so the reserve product grows for all holders pro rata.
/// The standard tier (30 bp) is exactly the `997 / 1000` multiplier.
///
/// # Examples
///
/// ```
/// use pairswap::domain::FeeTier;
///
/// let fee = FeeTier::STANDARD;
/// assert_eq!(fee.basis_points(), 30);
/// assert_eq!(fee.retained_numerator(), 9_970);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FeeTier(u16);

impl FeeTier {
    /// 0.30% — the `997 / 1000` fee of the reference constant-product design.
    pub const STANDARD: Self = Self(30);

    /// No fee.
    pub const ZERO: Self = Self(0);

    /// Creates a fee tier from raw basis points.
    #[must_use]
    pub const fn new(basis_points: u16) -> Self {
        Self(basis_points)
    }

    /// Returns the raw basis points.
    #[must_use]
    pub const fn basis_points(&self) -> u16 {
        self.0
    }

    /// `true` if the fee leaves a positive share of the input to price
    /// against (`bps < 10 000`).
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        (self.0 as u128) < FEE_DENOMINATOR
    }

    /// Multiplier applied to swap inputs before pricing:
    /// `10 000 − bps`.
    #[must_use]
    pub const fn retained_numerator(&self) -> u128 {
        FEE_DENOMINATOR.saturating_sub(self.0 as u128)
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bps", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tier_matches_997_over_1000() {
        let fee = FeeTier::STANDARD;
        // 9970 / 10000 == 997 / 1000
        assert_eq!(fee.retained_numerator() * 1_000, 997 * FEE_DENOMINATOR);
    }

    #[test]
    fn validity() {
        assert!(FeeTier::ZERO.is_valid());
        assert!(FeeTier::new(9_999).is_valid());
        assert!(!FeeTier::new(10_000).is_valid());
        assert_eq!(FeeTier::new(10_000).retained_numerator(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(FeeTier::STANDARD.to_string(), "30 bps");
    }
}
