//! Token balances.
//!
//! [`InMemoryLedger`] is the concrete balance book used by tests and the
//! demo; [`StagedLedger`] layers uncommitted transfers over any
//! [`TokenLedger`](crate::traits::TokenLedger) so a multi-step operation
//! can be abandoned without side effects.

mod in_memory;
mod staged;

pub use in_memory::InMemoryLedger;
pub use staged::{StagedLedger, Transfer};
