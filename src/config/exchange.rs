//! Exchange-wide settings, loadable from TOML.

use serde::{Deserialize, Serialize};

use super::PoolConfig;
use crate::domain::{Address, FeeTier, Liquidity, TokenPair};
use crate::error::AmmError;

/// Protocol share of the LP fee.
///
/// When enabled, every mint or burn first credits the recipient with LP
/// units worth `1 / share_denominator` of the reserve growth accrued since
/// the previous liquidity event.  A denominator of 6 gives the protocol
/// one sixth of the 0.30% fee (0.05%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProtocolFee {
    /// Account credited with protocol LP units.
    pub recipient: Address,
    /// `n` in the `1 / n` share.
    pub share_denominator: u32,
}

impl ProtocolFee {
    /// Creates a protocol fee split.  Not validated until
    /// [`validate`](Self::validate).
    #[must_use]
    pub const fn new(recipient: Address, share_denominator: u32) -> Self {
        Self {
            recipient,
            share_denominator,
        }
    }

    /// Validates the split.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] for a zero recipient or a
    /// denominator below 2.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.recipient.is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "protocol fee recipient must be nonzero",
            ));
        }
        if self.share_denominator < 2 {
            return Err(AmmError::InvalidConfiguration(
                "protocol fee share denominator must be at least 2",
            ));
        }
        Ok(())
    }
}

/// Settings shared by the registry, every pool it creates and the router.
///
/// # Examples
///
/// ```
/// use pairswap::config::ExchangeConfig;
///
/// let cfg = ExchangeConfig::from_toml_str("max_hops = 2").expect("valid toml");
/// assert_eq!(cfg.max_hops, 2);
/// assert_eq!(cfg.fee_bps, 30);
/// assert_eq!(cfg.minimum_liquidity, 1_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExchangeConfig {
    /// Swap fee in basis points; 30 retains 997/1000 of every input.
    #[serde(default = "ExchangeConfig::default_fee_bps")]
    pub fee_bps: u16,
    /// LP units locked at the burn sink on each pool's first deposit.
    #[serde(default = "ExchangeConfig::default_minimum_liquidity")]
    pub minimum_liquidity: u64,
    /// Most pools a single route may traverse.
    #[serde(default = "ExchangeConfig::default_max_hops")]
    pub max_hops: usize,
    /// Optional protocol fee split; disabled by default.
    #[serde(default)]
    pub protocol_fee: Option<ProtocolFee>,
}

impl ExchangeConfig {
    fn default_fee_bps() -> u16 {
        FeeTier::STANDARD.basis_points()
    }

    fn default_minimum_liquidity() -> u64 {
        1_000
    }

    fn default_max_hops() -> usize {
        3
    }

    /// Parses and validates a TOML document.  Missing keys take their
    /// defaults.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ConfigParse`] if the document is not valid TOML or has
    ///   unknown keys.
    /// - [`AmmError::InvalidConfiguration`] if a value is out of range.
    pub fn from_toml_str(document: &str) -> Result<Self, AmmError> {
        let config: Self =
            toml::from_str(document).map_err(|e| AmmError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ConfigParse`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, AmmError> {
        toml::to_string(self).map_err(|e| AmmError::ConfigParse(e.to_string()))
    }

    /// Validates every setting.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] naming the first invalid
    /// setting.
    pub fn validate(&self) -> Result<(), AmmError> {
        if !self.fee_tier().is_valid() {
            return Err(AmmError::InvalidConfiguration(
                "fee_bps must be below 10000",
            ));
        }
        if self.minimum_liquidity == 0 {
            return Err(AmmError::InvalidConfiguration(
                "minimum_liquidity must be nonzero",
            ));
        }
        if self.max_hops == 0 {
            return Err(AmmError::InvalidConfiguration("max_hops must be nonzero"));
        }
        if let Some(fee) = &self.protocol_fee {
            fee.validate()?;
        }
        Ok(())
    }

    /// The swap fee as a [`FeeTier`].
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        FeeTier::new(self.fee_bps)
    }

    /// Derives the configuration of the pool for `pair`.
    ///
    /// # Errors
    ///
    /// Propagates [`PoolConfig::new`] validation errors.
    pub fn pool_config(&self, pair: TokenPair) -> Result<PoolConfig, AmmError> {
        PoolConfig::new(
            pair,
            self.fee_tier(),
            Liquidity::new(u128::from(self.minimum_liquidity)),
            self.protocol_fee,
        )
    }
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            fee_bps: Self::default_fee_bps(),
            minimum_liquidity: Self::default_minimum_liquidity(),
            max_hops: Self::default_max_hops(),
            protocol_fee: None,
        }
    }
}
