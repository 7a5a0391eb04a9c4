//! Unified error types for the exchange.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type, ensuring a consistent error handling experience for consumers.
//! Every variant is detected before the failing operation commits any state,
//! so receiving an error always means "nothing happened".

use thiserror::Error;

/// Every failure the pool engine, the registry, the ledger or the router can
/// report.
///
/// Variants are grouped by the three failure families of the exchange:
///
/// - **Precondition violations** — [`Expired`](Self::Expired),
///   [`IdenticalAddresses`](Self::IdenticalAddresses),
///   [`ZeroAddress`](Self::ZeroAddress), [`PoolNotFound`](Self::PoolNotFound),
///   [`PoolExists`](Self::PoolExists), [`InvalidPath`](Self::InvalidPath).
/// - **Invariant protection** —
///   [`InsufficientLiquidityMinted`](Self::InsufficientLiquidityMinted),
///   [`InsufficientLiquidityBurned`](Self::InsufficientLiquidityBurned),
///   [`InvariantViolation`](Self::InvariantViolation),
///   [`Overflow`](Self::Overflow).
/// - **Bound violations** — [`InsufficientAAmount`](Self::InsufficientAAmount),
///   [`InsufficientBAmount`](Self::InsufficientBAmount),
///   [`InsufficientOutputAmount`](Self::InsufficientOutputAmount),
///   [`ExcessiveInputAmount`](Self::ExcessiveInputAmount).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// The caller-supplied deadline is earlier than the current time.
    #[error("deadline expired")]
    Expired,

    /// Both sides of a pair are the same token.
    #[error("identical token addresses")]
    IdenticalAddresses,

    /// The null address was supplied where a token or account is required.
    #[error("zero address")]
    ZeroAddress,

    /// A pool already exists for the canonical pair.
    #[error("pool already exists for this pair")]
    PoolExists,

    /// No pool exists for the requested pair.
    #[error("pool not found")]
    PoolNotFound,

    /// The swap path is malformed.
    #[error("invalid path: {0}")]
    InvalidPath(&'static str),

    /// Path discovery found no route between the two tokens.
    #[error("no route between the requested tokens")]
    NoRoute,

    /// A token is not part of the pool it was presented to.
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// `quote` was asked to scale a zero amount.
    #[error("insufficient amount")]
    InsufficientAmount,

    /// The optimal token-A deposit fell below the caller's floor, or a
    /// removal returned less token A than the caller's floor.
    #[error("insufficient A amount")]
    InsufficientAAmount,

    /// The optimal token-B deposit fell below the caller's floor, or a
    /// removal returned less token B than the caller's floor.
    #[error("insufficient B amount")]
    InsufficientBAmount,

    /// A deposit would mint zero LP units.
    #[error("insufficient liquidity minted")]
    InsufficientLiquidityMinted,

    /// A burn would return zero of either token.
    #[error("insufficient liquidity burned")]
    InsufficientLiquidityBurned,

    /// A swap input is zero.
    #[error("insufficient input amount")]
    InsufficientInputAmount,

    /// A swap output is zero or below the caller's minimum.
    #[error("insufficient output amount")]
    InsufficientOutputAmount,

    /// The required swap input exceeds the caller's maximum.
    #[error("excessive input amount")]
    ExcessiveInputAmount,

    /// A reserve is zero or cannot cover the requested output.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// The account holds fewer LP units than it tried to burn or transfer.
    #[error("insufficient LP balance")]
    InsufficientLpBalance,

    /// The account holds fewer tokens than it tried to transfer.
    #[error("insufficient token balance")]
    InsufficientBalance,

    /// The fee-adjusted reserve product decreased.
    #[error("constant-product invariant violated")]
    InvariantViolation,

    /// Checked arithmetic overflowed or underflowed.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Division by a zero denominator.
    #[error("division by zero")]
    DivisionByZero,

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A configuration document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(String),
}

/// Convenience alias used by every fallible function in the crate.
pub type Result<T> = core::result::Result<T, AmmError>;
