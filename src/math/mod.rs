//! Arithmetic for the constant-product curve.
//!
//! This module provides [`CheckedArithmetic`] for overflow-safe operations
//! on domain types, the [`wide`] helpers for 256-bit intermediates, and the
//! single-hop closed forms used by both the pool and the router.
//!
//! | Function | Formula |
//! |----------|---------|
//! | [`quote`] | `a · rB / rA` |
//! | [`get_amount_out`] | `in·f · rOut / (rIn·D + in·f)` |
//! | [`get_amount_in`] | `⌊rIn · out · D / ((rOut − out) · f)⌋ + 1` |
//!
//! where `D = 10 000` and `f = D − fee_bps`.

mod checked;
mod constant_product;
pub mod wide;

pub use checked::CheckedArithmetic;
pub use constant_product::{get_amount_in, get_amount_out, quote};
