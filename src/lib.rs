//! # pairswap
//!
//! Constant-product automated market maker: a registry of two-token
//! `x · y = k` pools, fungible LP units, and a router that executes
//! deadline-checked, slippage-bounded swaps across multi-pool paths.
//!
//! Pools hold no tokens themselves.  Balances live behind the
//! [`TokenLedger`](traits::TokenLedger) trait; the router pays tokens into a
//! pool's deterministic address and then lets the pool verify the trade
//! against its invariant, so a pool's ledger balances always equal its
//! reserves.
//!
//! # Quick Start
//!
//! ```rust
//! use pairswap::prelude::*;
//!
//! let (usdc, weth, dai) = (
//!     Address::from_low_u64(0x01),
//!     Address::from_low_u64(0x02),
//!     Address::from_low_u64(0x03),
//! );
//! let alice = Address::from_low_u64(0xA11CE);
//!
//! // 1. An empty exchange with the default 0.30% fee
//! let mut registry = PairRegistry::new(ExchangeConfig::default()).expect("valid config");
//! let mut ledger = InMemoryLedger::new();
//! for token in [usdc, weth, dai] {
//!     ledger.mint(token, alice, Amount::new(1_000_000)).expect("funded");
//! }
//!
//! // 2. Provide liquidity; pools are created on first deposit
//! let router = Router::new(ManualClock::new(Timestamp::from_secs(0)));
//! let deadline = Timestamp::from_secs(60);
//! for (a, b) in [(usdc, weth), (weth, dai)] {
//!     router
//!         .add_liquidity(&mut registry, &mut ledger, alice, AddLiquidity {
//!             token_a: a,
//!             token_b: b,
//!             amount_a_desired: Amount::new(100_000),
//!             amount_b_desired: Amount::new(100_000),
//!             amount_a_min: Amount::new(0),
//!             amount_b_min: Amount::new(0),
//!             to: alice,
//!             deadline,
//!         })
//!         .expect("liquidity added");
//! }
//!
//! // 3. Quote and execute a two-hop swap
//! let path = vec![usdc, weth, dai];
//! let quoted = get_amounts_out(&registry, Amount::new(1_000), &path).expect("priced");
//! let route = router
//!     .swap_exact_in(&mut registry, &mut ledger, alice, SwapExactIn {
//!         amount_in: Amount::new(1_000),
//!         amount_out_min: quoted[2],
//!         path,
//!         to: alice,
//!         deadline,
//!     })
//!     .expect("swapped");
//!
//! assert_eq!(route.amount_out(), quoted[2]);
//! assert_eq!(registry.len(), 2);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │    Caller     │  requests + deadlines
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │    Router     │  path pricing, bounds, staged transaction
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │ PairRegistry  │  one pool per canonical pair, creation order
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │     Pool      │  mint / burn / verifying swap against k
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │    Domain     │  Address, Amount, Liquidity, TokenPair, Route, …
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Address`](domain::Address), [`Amount`](domain::Amount), [`TokenPair`](domain::TokenPair), [`Route`](domain::Route) |
//! | [`traits`] | [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool), [`TokenLedger`](traits::TokenLedger), [`Clock`](traits::Clock), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | [`ExchangeConfig`](config::ExchangeConfig) loaded from TOML and per-pool [`PoolConfig`](config::PoolConfig) |
//! | [`pools`]  | [`ConstantProductPool`](pools::ConstantProductPool) invariant engine |
//! | [`factory`] | [`PairRegistry`](factory::PairRegistry) |
//! | [`ledger`] | [`InMemoryLedger`](ledger::InMemoryLedger) and the staging overlay |
//! | [`router`] | [`Router`](router::Router), path pricing and [`PathFinder`](router::PathFinder) |
//! | [`math`]   | Closed-form curve math and checked 256-bit helpers |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports |
//!
//! # Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber.
//! Pool creation and completed operations log at `info`, individual hops
//! and route candidates at `debug`, and discarded transactions at `warn`.

pub mod config;
pub mod domain;
pub mod error;
pub mod factory;
pub mod ledger;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod router;
pub mod traits;
