//! Constant-product settlement walkthrough.
//!
//! Creates a pool, seeds it, runs a rejected and an accepted swap, and
//! shows that the reversed pair resolves to the same pool. Amounts are
//! entered in whole units and scaled by the configured display decimals.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=cp_settlement=debug cargo run --example settlement
//! ```

use cp_settlement::prelude::*;
use tracing_subscriber::EnvFilter;

fn units(decimals: Decimals, amount: Amount) -> String {
    let (whole, frac) = decimals.split(amount);
    let width = usize::from(decimals.get());
    if width == 0 {
        return whole.to_string();
    }
    format!("{whole}.{frac:0width$}")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Constant-product settlement (x · y = k) ===\n");

    // ── 1. Configure the exchange ───────────────────────────────────────
    let config = ExchangeConfig::new(Address::from_bytes([7u8; 32]))?;
    let dec = config.display_decimals();
    let mut exchange = Exchange::new(config, InMemoryHoldings::new())?;
    println!("Program id:      {}", config.program_id());
    println!("Swap fee:        {}", config.swap_fee());
    println!("Display decimals {}", dec.get());

    // ── 2. Create the pool ──────────────────────────────────────────────
    let token_x = AssetId::from_bytes([0x10; 32]);
    let token_y = AssetId::from_bytes([0x20; 32]);
    let lp = Address::from_bytes([0x21; 32]);
    let trader = Address::from_bytes([0x42; 32]);

    let handles = exchange.initialize_pool(lp, token_x, token_y)?;
    println!("\nPool created\n  {handles}");
    println!("  status: {:?}", exchange.pool_status(&handles.pool));

    // ── 3. Airdrop and seed 50 / 50 ─────────────────────────────────────
    let holdings = exchange.holdings_mut();
    holdings.fund(lp, token_x, dec.to_base_units(50)?)?;
    holdings.fund(lp, token_y, dec.to_base_units(50)?)?;
    holdings.fund(trader, token_x, dec.to_base_units(10)?)?;

    let reserves = exchange.add_liquidity(
        lp,
        &handles.pool,
        dec.to_base_units(50)?,
        dec.to_base_units(50)?,
    )?;
    println!(
        "\nSeeded reserves: a={} b={}",
        units(dec, reserves.reserve_a()),
        units(dec, reserves.reserve_b())
    );

    // ── 4. A swap with an unreachable floor is rejected ─────────────────
    let amount_in = dec.to_base_units(10)?;
    let greedy = SwapRequest::new(amount_in, dec.to_base_units(9)?, SwapDirection::AToB)?;
    match exchange.swap(trader, &handles.pool, &greedy) {
        Err(err) => println!("\nSwap 10 A for at least 9 B: {err}"),
        Ok(result) => println!("\nUnexpected fill: {result}"),
    }

    // ── 5. A swap with a reachable floor settles ────────────────────────
    let request = SwapRequest::new(amount_in, dec.to_base_units(5)?, SwapDirection::AToB)?;
    println!("Quote for 10 A:  {}", units(dec, exchange.quote(&handles.pool, &request)?));
    let result = exchange.swap(trader, &handles.pool, &request)?;
    println!("\n--- Swap: sell 10 A, accept at least 5 B ---");
    println!("  Amount out:  {}", units(dec, result.amount_out()));
    println!(
        "  Reserves:    a={} b={}",
        units(dec, result.reserves().reserve_a()),
        units(dec, result.reserves().reserve_b())
    );

    let holdings = exchange.holdings();
    println!(
        "  Trader:      {} A, {} B",
        units(dec, holdings.balance(&trader, &token_x)),
        units(dec, holdings.balance(&trader, &token_y))
    );

    // ── 6. The reversed pair names the same pool ────────────────────────
    match exchange.initialize_pool(trader, token_y, token_x) {
        Err(err) => println!("\nInitialize (Y, X) again: {err}"),
        Ok(handles) => println!("\nUnexpected second pool: {handles}"),
    }
    if let Some(state) = exchange.find_pool(token_y, token_x)? {
        println!("find_pool(Y, X) -> {}", state.address());
    }

    Ok(())
}
