//! Per-pool construction parameters.

use super::ProtocolFee;
use crate::domain::{FeeTier, Liquidity, TokenPair};
use crate::error::AmmError;

/// Immutable parameters of one constant-product pool.
///
/// Derived from the exchange-wide [`ExchangeConfig`](super::ExchangeConfig)
/// by the registry when a pair is created.
///
/// # Validation
///
/// - The fee tier must leave a positive share of every input to price
///   against (`bps < 10 000`).
/// - The minimum liquidity must be nonzero.
/// - A protocol fee, if present, must name a nonzero recipient and a share
///   denominator of at least 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    token_pair: TokenPair,
    fee_tier: FeeTier,
    minimum_liquidity: Liquidity,
    protocol_fee: Option<ProtocolFee>,
}

impl PoolConfig {
    /// Creates a validated `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if any parameter is out of
    /// range.
    pub fn new(
        token_pair: TokenPair,
        fee_tier: FeeTier,
        minimum_liquidity: Liquidity,
        protocol_fee: Option<ProtocolFee>,
    ) -> Result<Self, AmmError> {
        let config = Self {
            token_pair,
            fee_tier,
            minimum_liquidity,
            protocol_fee,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] naming the first invalid
    /// parameter.
    pub fn validate(&self) -> Result<(), AmmError> {
        if !self.fee_tier.is_valid() {
            return Err(AmmError::InvalidConfiguration(
                "fee must be below 10000 bps",
            ));
        }
        if self.minimum_liquidity.is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "minimum liquidity must be nonzero",
            ));
        }
        if let Some(fee) = &self.protocol_fee {
            fee.validate()?;
        }
        Ok(())
    }

    /// Returns the token pair.
    #[must_use]
    pub const fn token_pair(&self) -> &TokenPair {
        &self.token_pair
    }

    /// Returns the fee tier.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    /// LP units locked at the burn sink on the first deposit.
    #[must_use]
    pub const fn minimum_liquidity(&self) -> Liquidity {
        self.minimum_liquidity
    }

    /// Protocol fee split, if enabled.
    #[must_use]
    pub const fn protocol_fee(&self) -> Option<ProtocolFee> {
        self.protocol_fee
    }
}
