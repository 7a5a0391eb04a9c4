//! Generic construction trait for pool instantiation from configuration.
//!
//! [`FromConfig`] gives the registry a uniform way to build pools from a
//! validated configuration.  Implementations must validate every
//! configuration invariant during construction, so a successfully built
//! pool is always in a valid (empty) initial state.

use crate::error::AmmError;

/// Builds `Self` from a configuration of type `C`.
///
/// # Implementors
///
/// - `impl FromConfig<PoolConfig> for ConstantProductPool`
pub trait FromConfig<C> {
    /// Creates a new instance from `config`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if any parameter is out of
    ///   range.
    /// - [`AmmError::IdenticalAddresses`] / [`AmmError::ZeroAddress`] if
    ///   the token pair is invalid.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
