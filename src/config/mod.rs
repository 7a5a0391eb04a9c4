//! Exchange and pool configuration.
//!
//! [`ExchangeConfig`] holds the settings shared by the whole exchange and
//! can be loaded from TOML; [`PoolConfig`] is the validated per-pair
//! blueprint the registry derives from it.

mod exchange;
mod pool;

pub use exchange::{ExchangeConfig, ProtocolFee};
pub use pool::PoolConfig;
