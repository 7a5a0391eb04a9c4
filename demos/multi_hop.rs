//! Multi-hop routing example.
//!
//! Builds a three-pool exchange from a TOML configuration, provides
//! liquidity, asks the path finder for the best USDC → DAI route, executes
//! it through the router and finally withdraws the liquidity again.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=pairswap=debug cargo run --example multi_hop
//! ```

use pairswap::prelude::*;
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"
fee_bps = 30
minimum_liquidity = 1000
max_hops = 3
"#;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== Multi-hop routing (x · y = k) ===\n");

    // ── 1. Exchange state ───────────────────────────────────────────────
    let config = ExchangeConfig::from_toml_str(CONFIG)?;
    let mut registry = PairRegistry::new(config.clone())?;
    let mut ledger = InMemoryLedger::new();
    let router = Router::new(SystemClock);
    let deadline = router.clock().now().plus_secs(600);

    let usdc: Address = "0x00000000000000000000000000000000000000a1".parse()?;
    let weth: Address = "0x00000000000000000000000000000000000000b2".parse()?;
    let dai: Address = "0x00000000000000000000000000000000000000c3".parse()?;
    let maker = Address::from_low_u64(0x1000);
    let trader = Address::from_low_u64(0x2000);

    for token in [usdc, weth, dai] {
        ledger.mint(token, maker, Amount::new(100_000_000))?;
    }
    ledger.mint(usdc, trader, Amount::new(50_000))?;

    // ── 2. Liquidity: a thin direct pool and a deep two-hop path ───────
    let pools = [
        (usdc, dai, 20_000, 20_000),
        (usdc, weth, 5_000_000, 2_500_000),
        (weth, dai, 2_500_000, 5_000_000),
    ];
    for (a, b, amount_a, amount_b) in pools {
        let added = router.add_liquidity(
            &mut registry,
            &mut ledger,
            maker,
            AddLiquidity {
                token_a: a,
                token_b: b,
                amount_a_desired: Amount::new(amount_a),
                amount_b_desired: Amount::new(amount_b),
                amount_a_min: Amount::new(0),
                amount_b_min: Amount::new(0),
                to: maker,
                deadline,
            },
        )?;
        println!(
            "Pool {}: deposited {} / {}, minted {} LP",
            added.pool, added.amount_a, added.amount_b, added.liquidity
        );
    }

    // ── 3. Route discovery ──────────────────────────────────────────────
    let finder = PathFinder::from_config(&config)?;
    let amount_in = Amount::new(10_000);
    for path in finder.candidate_paths(&registry, usdc, dai) {
        match get_amounts_out(&registry, amount_in, &path) {
            Ok(amounts) => println!("  candidate {} hops -> {:?}", path.len() - 1, amounts),
            Err(err) => println!("  candidate {} hops failed: {err}", path.len() - 1),
        }
    }
    let best = finder.best_exact_in(&registry, amount_in, usdc, dai)?;
    println!("\nBest route: {best}");

    // ── 4. Execute with 0.5% slippage tolerance ─────────────────────────
    let min_out = Amount::new(best.amount_out().get() * 995 / 1_000);
    let route = router.swap_exact_in(
        &mut registry,
        &mut ledger,
        trader,
        SwapExactIn {
            amount_in,
            amount_out_min: min_out,
            path: best.path().to_vec(),
            to: trader,
            deadline,
        },
    )?;
    println!(
        "Swapped {} USDC for {} DAI over {} hops",
        route.amount_in(),
        route.amount_out(),
        route.hops()
    );
    println!("Trader DAI balance: {}", ledger.balance_of(&dai, &trader));

    // ── 5. Withdraw the direct pool's liquidity ─────────────────────────
    let lp = registry.pool(usdc, dai)?.liquidity_of(&maker);
    let removed = router.remove_liquidity(
        &mut registry,
        &mut ledger,
        maker,
        RemoveLiquidity {
            token_a: usdc,
            token_b: dai,
            liquidity: lp,
            amount_a_min: Amount::new(0),
            amount_b_min: Amount::new(0),
            to: maker,
            deadline,
        },
    )?;
    println!(
        "\nWithdrew {} USDC and {} DAI for {} LP",
        removed.amount_a, removed.amount_b, lp
    );

    // ── 6. Every pool's ledger balance matches its reserves ─────────────
    for pool in registry.all_pools() {
        let pair = pool.token_pair();
        let reserves = pool.reserves();
        println!(
            "{}: reserves {} / {}, k = {}",
            pool.address(),
            reserves.low,
            reserves.high,
            reserves.product()
        );
        assert_eq!(ledger.balance_of(&pair.low(), &pool.address()), reserves.low);
        assert_eq!(ledger.balance_of(&pair.high(), &pool.address()), reserves.high);
    }

    Ok(())
}
