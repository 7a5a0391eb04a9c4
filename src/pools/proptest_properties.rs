//! Property-based tests using `proptest` for exchange invariants.
//!
//! 1. **Invariant growth**: every fee-paying swap strictly grows `k`.
//! 2. **Swap reversibility**: a round trip A→B→A returns at most the input.
//! 3. **Output monotonicity**: a larger input never yields less output.
//! 4. **Liquidity round trip**: mint then burn returns at most the deposit.
//! 5. **Canonical identity**: `(A, B)` and `(B, A)` are the same pool.
//! 6. **Path pricing consistency**: feeding `get_amounts_in` back through
//!    `get_amounts_out` delivers at least the requested output.
//! 7. **Hop cost**: with equal liquidity an extra hop never beats the
//!    direct path.

use proptest::prelude::*;

use crate::config::ExchangeConfig;
use crate::domain::{Address, Amount, TokenPair};
use crate::error::AmmError;
use crate::factory::PairRegistry;
use crate::math::get_amount_out;
use crate::pools::ConstantProductPool;
use crate::router::{get_amounts_in, get_amounts_out};
use crate::traits::{FromConfig, LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn addr(v: u64) -> Address {
    Address::from_low_u64(v)
}

fn lp() -> Address {
    addr(0x1F)
}

fn make_pair() -> TokenPair {
    let Ok(pair) = TokenPair::new(addr(1), addr(2)) else {
        panic!("valid pair");
    };
    pair
}

fn make_cp(ra: u128, rb: u128) -> ConstantProductPool {
    let Ok(config) = ExchangeConfig::default().pool_config(make_pair()) else {
        panic!("valid pool config");
    };
    let Ok(mut pool) = ConstantProductPool::from_config(&config) else {
        panic!("valid pool");
    };
    let Ok(_) = pool.mint(lp(), Amount::new(ra), Amount::new(rb)) else {
        panic!("seed deposit");
    };
    pool
}

/// Registry whose pools are listed as `(token, token, reserve, reserve)`
/// with the lower token first.
fn make_registry(pools: &[(u64, u64, u128, u128)]) -> PairRegistry {
    let Ok(mut registry) = PairRegistry::new(ExchangeConfig::default()) else {
        panic!("valid registry");
    };
    for &(a, b, ra, rb) in pools {
        let Ok(_) = registry.create_pool(addr(a), addr(b)) else {
            panic!("pool created");
        };
        let Ok(pool) = registry.pool_mut(addr(a), addr(b)) else {
            panic!("pool exists");
        };
        let Ok(_) = pool.mint(lp(), Amount::new(ra), Amount::new(rb)) else {
            panic!("seed deposit");
        };
    }
    registry
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000] to avoid extremes.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

/// Trade size as a per-mille fraction of a reserve.
fn fraction_strategy() -> impl Strategy<Value = u128> {
    1u128..=200u128
}

// ---------------------------------------------------------------------------
// Pool properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_invariant_strictly_grows(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fraction in fraction_strategy(),
        low_in in any::<bool>(),
    ) {
        let mut pool = make_cp(ra, rb);
        let token_in = if low_in { addr(1) } else { addr(2) };
        let reserve_in = if low_in { ra } else { rb };
        let amount_in = (reserve_in * fraction / 1_000).max(1);

        for _ in 0..3 {
            let k_before = pool.reserves().product();
            let Ok(amount_out) = pool.swap_exact_in(token_in, Amount::new(amount_in)) else {
                break;
            };
            let k_after = pool.reserves().product();
            prop_assert!(!amount_out.is_zero());
            prop_assert!(
                k_after > k_before,
                "k must grow: before={} after={}",
                k_before, k_after
            );
        }
    }

    #[test]
    fn prop_swap_reversibility(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fraction in fraction_strategy(),
    ) {
        let swap_in = (ra * fraction / 1_000).max(1);
        let mut pool = make_cp(ra, rb);

        let Ok(received_b) = pool.swap_exact_in(addr(1), Amount::new(swap_in)) else {
            return Ok(());
        };
        let Ok(final_a) = pool.swap_exact_in(addr(2), received_b) else {
            return Ok(());
        };

        prop_assert!(
            final_a.get() <= swap_in,
            "round-trip should lose value: final={} > original={}",
            final_a, swap_in
        );
    }

    #[test]
    fn prop_output_monotonic_in_input(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        small in 1u128..=5_000u128,
        extra in 0u128..=5_000u128,
    ) {
        let pool = make_cp(ra, rb);
        let fee = pool.fee_tier();
        let (reserve_in, reserve_out) = (Amount::new(ra), Amount::new(rb));
        let Ok(out_small) = get_amount_out(Amount::new(small), reserve_in, reserve_out, fee) else {
            return Ok(());
        };
        let Ok(out_large) =
            get_amount_out(Amount::new(small + extra), reserve_in, reserve_out, fee)
        else {
            return Ok(());
        };
        prop_assert!(
            out_large >= out_small,
            "larger input gave less: {} < {}",
            out_large, out_small
        );
    }

    #[test]
    fn prop_mint_then_burn_returns_at_most_deposit(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        da in 1u128..=1_000_000u128,
        db in 1u128..=1_000_000u128,
    ) {
        let mut pool = make_cp(ra, rb);
        let provider = addr(0xCC);
        let Ok(minted) = pool.mint(provider, Amount::new(da), Amount::new(db)) else {
            return Ok(());
        };
        let Ok((out_a, out_b)) = pool.burn(provider, minted) else {
            return Ok(());
        };
        prop_assert!(out_a.get() <= da, "token A gained: {} > {}", out_a, da);
        prop_assert!(out_b.get() <= db, "token B gained: {} > {}", out_b, db);
        prop_assert!(pool.liquidity_of(&provider).is_zero());
    }
}

// ---------------------------------------------------------------------------
// Registry and path properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_canonical_identity(
        a in 1u64..=1_000u64,
        b in 1u64..=1_000u64,
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fraction in fraction_strategy(),
    ) {
        prop_assume!(a != b);
        let Ok(mut forward) = PairRegistry::new(ExchangeConfig::default()) else {
            panic!("valid registry");
        };
        let Ok(mut backward) = PairRegistry::new(ExchangeConfig::default()) else {
            panic!("valid registry");
        };
        let Ok(address_ab) = forward.create_pool(addr(a), addr(b)) else {
            panic!("pool created");
        };
        let Ok(address_ba) = backward.create_pool(addr(b), addr(a)) else {
            panic!("pool created");
        };
        prop_assert_eq!(address_ab, address_ba);
        prop_assert_eq!(
            forward.create_pool(addr(b), addr(a)),
            Err(AmmError::PoolExists)
        );

        for registry in [&mut forward, &mut backward] {
            let Ok(pool) = registry.pool_mut(addr(a), addr(b)) else {
                panic!("pool exists");
            };
            let Ok(_) = pool.mint(lp(), Amount::new(ra), Amount::new(rb)) else {
                panic!("seed deposit");
            };
        }
        let amount_in = Amount::new((ra * fraction / 1_000).max(1));
        let path = [addr(a), addr(b)];
        prop_assert_eq!(
            get_amounts_out(&forward, amount_in, &path),
            get_amounts_out(&backward, amount_in, &path)
        );

        // mint takes (low, high); orient reserves to the caller's tokens
        let (reserve_a, reserve_b) = if addr(a) < addr(b) {
            (Amount::new(ra), Amount::new(rb))
        } else {
            (Amount::new(rb), Amount::new(ra))
        };
        let fee = ExchangeConfig::default().fee_tier();
        let Ok(out_b) = get_amount_out(amount_in, reserve_a, reserve_b, fee) else {
            panic!("closed form prices a -> b");
        };
        prop_assert_eq!(
            get_amounts_out(&forward, amount_in, &path),
            Ok(vec![amount_in, out_b])
        );

        let back_in = Amount::new((rb * fraction / 1_000).max(1));
        let Ok(out_a) = get_amount_out(back_in, reserve_b, reserve_a, fee) else {
            panic!("closed form prices b -> a");
        };
        let reversed = [addr(b), addr(a)];
        prop_assert_eq!(
            get_amounts_out(&forward, back_in, &reversed),
            Ok(vec![back_in, out_a])
        );
        prop_assert_eq!(
            get_amounts_out(&backward, back_in, &reversed),
            Ok(vec![back_in, out_a])
        );
    }

    #[test]
    fn prop_amounts_in_cover_requested_output(
        r1 in reserve_strategy(),
        r2 in reserve_strategy(),
        r3 in reserve_strategy(),
        fraction in fraction_strategy(),
    ) {
        let registry = make_registry(&[(1, 2, r1, r2), (2, 3, r2, r3)]);
        let path = [addr(1), addr(2), addr(3)];
        let wanted = Amount::new((r3 * fraction / 2_000).max(1));
        let Ok(required) = get_amounts_in(&registry, wanted, &path) else {
            return Ok(());
        };
        let Ok(delivered) = get_amounts_out(&registry, required[0], &path) else {
            return Ok(());
        };
        prop_assert!(
            delivered[2] >= wanted,
            "paying {} delivered {} < {}",
            required[0], delivered[2], wanted
        );
    }

    #[test]
    fn prop_extra_hop_never_beats_direct(
        reserve in reserve_strategy(),
        fraction in fraction_strategy(),
    ) {
        let registry = make_registry(&[
            (1, 3, reserve, reserve),
            (1, 2, reserve, reserve),
            (2, 3, reserve, reserve),
        ]);
        let amount_in = Amount::new((reserve * fraction / 1_000).max(1));
        let Ok(direct) = get_amounts_out(&registry, amount_in, &[addr(1), addr(3)]) else {
            return Ok(());
        };
        let Ok(via) = get_amounts_out(&registry, amount_in, &[addr(1), addr(2), addr(3)]) else {
            return Ok(());
        };
        prop_assert!(
            via[2] <= direct[1],
            "two hops gave {} > direct {}",
            via[2], direct[1]
        );
    }
}
