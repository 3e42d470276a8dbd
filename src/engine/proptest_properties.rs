//! Property-based tests for settlement invariants.
//!
//! 1. **Invariant non-decrease**: `k` never drops across a settled swap.
//! 2. **Conservation**: caller plus vault balances of each asset are
//!    unchanged by any sequence of operations.
//! 3. **Slippage**: a floor above the quote fails and changes nothing.
//! 4. **Idempotent failure**: any rejected swap leaves the exchange as it
//!    was.
//! 5. **Overflow safety**: reserves near `u128::MAX` never panic.
//! 6. **Quote agreement**: `quote` predicts the settled output exactly.

use proptest::prelude::*;

use super::tests::{authority, exchange_with_fee, fund, seeded, trader, usdc, weth};
use super::Exchange;
use crate::custody::Holdings;
use crate::domain::{Amount, BasisPoints, FeeTier, SwapDirection, SwapRequest};
use crate::error::SettlementError;
use crate::math::invariant;
use crate::pool::PoolHandles;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn request(amount_in: u128, minimum_out: u128, direction: SwapDirection) -> SwapRequest {
    let Ok(req) = SwapRequest::new(Amount::new(amount_in), Amount::new(minimum_out), direction)
    else {
        panic!("valid request");
    };
    req
}

fn direction(a_to_b: bool) -> SwapDirection {
    if a_to_b {
        SwapDirection::AToB
    } else {
        SwapDirection::BToA
    }
}

/// Total of `asset` across the trader, the authority, and the pool vaults.
fn total_supply(ex: &Exchange, handles: &PoolHandles, a_side: bool) -> u128 {
    let asset = if a_side { usdc() } else { weth() };
    let Ok(reserves) = ex.reserves(&handles.pool) else {
        panic!("pool exists");
    };
    let vault = if a_side {
        reserves.reserve_a()
    } else {
        reserves.reserve_b()
    };
    ex.holdings().balance(&trader(), &asset).get()
        + ex.holdings().balance(&authority(), &asset).get()
        + vault.get()
}

/// Exchange with a seeded pool and a funded trader.
fn setup(fee_bps: u32, ra: u128, rb: u128, wallet: u128) -> (Exchange, PoolHandles) {
    let mut ex = exchange_with_fee(FeeTier::new(BasisPoints::new(fee_bps)));
    let handles = seeded(&mut ex, ra, rb);
    fund(&mut ex, trader(), usdc(), wallet);
    fund(&mut ex, trader(), weth(), wallet);
    (ex, handles)
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in `[1, 10^12]`.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000_000_000u128
}

/// Fee tiers from zero up to 10%.
fn fee_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![Just(0u32), Just(30u32), 1u32..=1_000u32]
}

/// A sequence of `(a_to_b, amount_in)` swaps.
fn swaps_strategy() -> impl Strategy<Value = Vec<(bool, u128)>> {
    prop::collection::vec((any::<bool>(), 1u128..=1_000_000u128), 1..16)
}

// ---------------------------------------------------------------------------
// Property 1: Invariant non-decrease
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_invariant_never_decreases(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fee in fee_strategy(),
        swaps in swaps_strategy(),
    ) {
        let (mut ex, handles) = setup(fee, ra, rb, u64::MAX.into());
        for (a_to_b, amount_in) in swaps {
            let Ok(before) = ex.reserves(&handles.pool) else {
                panic!("pool exists");
            };
            let Ok(result) =
                ex.swap(trader(), &handles.pool, &request(amount_in, 0, direction(a_to_b)))
            else {
                continue;
            };
            prop_assert!(
                invariant(&result.reserves()) >= invariant(&before),
                "k decreased: {} -> {}",
                before,
                result.reserves()
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Conservation / no negative balances
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_balances_are_conserved(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        wallet in 0u128..=1_000_000u128,
        swaps in swaps_strategy(),
    ) {
        let (mut ex, handles) = setup(30, ra, rb, wallet);
        let supply_a = total_supply(&ex, &handles, true);
        let supply_b = total_supply(&ex, &handles, false);

        for (a_to_b, amount_in) in swaps {
            let _ = ex.swap(trader(), &handles.pool, &request(amount_in, 0, direction(a_to_b)));
            prop_assert_eq!(total_supply(&ex, &handles, true), supply_a);
            prop_assert_eq!(total_supply(&ex, &handles, false), supply_b);
            prop_assert!(ex.pool_status(&handles.pool).can_swap());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3 + 4: Slippage and idempotent failure
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_slippage_failure_changes_nothing(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_in in 1u128..=1_000_000u128,
        a_to_b in any::<bool>(),
        excess in 1u128..=1_000u128,
    ) {
        let (mut ex, handles) = setup(0, ra, rb, 1_000_000);
        let Ok(quoted) = ex.quote(&handles.pool, &request(amount_in, 0, direction(a_to_b))) else {
            return Ok(());
        };
        let floor = quoted.get() + excess;
        let before = ex.clone();

        let result = ex.swap(trader(), &handles.pool, &request(amount_in, floor, direction(a_to_b)));
        prop_assert_eq!(
            result,
            Err(SettlementError::SlippageExceeded {
                minimum: Amount::new(floor),
                computed: quoted,
            })
        );
        prop_assert_eq!(ex.vaults(&handles.pool), before.vaults(&handles.pool));
        prop_assert_eq!(ex.holdings(), before.holdings());
    }

    #[test]
    fn prop_any_failure_is_idempotent(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        wallet in 0u128..=1_000u128,
        amount_in in 1u128..=1_000_000u128,
        minimum_out in 0u128..=1_000u128,
        a_to_b in any::<bool>(),
    ) {
        let (mut ex, handles) = setup(30, ra, rb, wallet);
        let before = ex.clone();
        if ex
            .swap(trader(), &handles.pool, &request(amount_in, minimum_out, direction(a_to_b)))
            .is_err()
        {
            prop_assert_eq!(ex.vaults(&handles.pool), before.vaults(&handles.pool));
            prop_assert_eq!(ex.holdings(), before.holdings());
            prop_assert_eq!(ex.pool(&handles.pool), before.pool(&handles.pool));
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: Overflow safety near u128::MAX
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_extreme_reserves_never_panic(
        headroom_a in 0u128..=1_000u128,
        headroom_b in 0u128..=1_000u128,
        amount_in in 1u128..=u128::MAX,
        a_to_b in any::<bool>(),
    ) {
        let (mut ex, handles) = setup(0, u128::MAX - headroom_a, u128::MAX - headroom_b, 0);
        fund(&mut ex, trader(), usdc(), amount_in);
        fund(&mut ex, trader(), weth(), amount_in);
        let before = ex.clone();

        match ex.swap(trader(), &handles.pool, &request(amount_in, 0, direction(a_to_b))) {
            Ok(result) => {
                prop_assert!(result.amount_out() < Amount::MAX);
            }
            Err(err) => {
                prop_assert!(matches!(
                    err,
                    SettlementError::ArithmeticOverflow(_) | SettlementError::InsufficientLiquidity
                ));
                prop_assert_eq!(ex.vaults(&handles.pool), before.vaults(&handles.pool));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 6: Quote agreement
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_quote_matches_settlement(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fee in fee_strategy(),
        amount_in in 1u128..=1_000_000u128,
        a_to_b in any::<bool>(),
    ) {
        let (mut ex, handles) = setup(fee, ra, rb, 1_000_000);
        let req = request(amount_in, 0, direction(a_to_b));
        let quoted = ex.quote(&handles.pool, &req);
        let settled = ex.swap(trader(), &handles.pool, &req).map(|r| r.amount_out());
        prop_assert_eq!(quoted, settled);
    }
}
