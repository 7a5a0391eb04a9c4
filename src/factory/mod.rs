//! Pool creation and lookup.
//!
//! The [`PairRegistry`] builds pools from the exchange configuration via
//! [`FromConfig`](crate::traits::FromConfig), guarantees one pool per
//! unordered token pair, and keeps an append-only list of every pool in
//! creation order.

mod pair_registry;

pub use pair_registry::PairRegistry;
