//! Constant-product pricing (`x · y = k`).
//!
//! # Exact-input quote
//!
//! ```text
//! amount_out = floor(amount_in × reserve_out / (reserve_in + amount_in))
//! ```
//!
//! Division truncates, so rounding dust stays in the pool and the product
//! of the reserves never decreases across a swap.

use crate::domain::{Amount, Reserves, Rounding};
use crate::error::SettlementError;
use crate::math::CheckedArithmetic;

/// Output of an exact-input swap against `reserve_in` / `reserve_out`.
///
/// `amount_in` is the amount that is priced, i.e. the input after any fee
/// has been withheld.
///
/// # Errors
///
/// - [`SettlementError::ArithmeticOverflow`] if `amount_in × reserve_out`
///   or `reserve_in + amount_in` leaves the `u128` range.
/// - [`SettlementError::DivisionByZero`] if both `reserve_in` and
///   `amount_in` are zero.
pub fn quote_exact_in(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> Result<Amount, SettlementError> {
    let numerator = amount_in.safe_mul(&reserve_out, "amount_in * reserve_out")?;
    let denominator = reserve_in.safe_add(&amount_in, "reserve_in + amount_in")?;
    numerator.safe_div(&denominator, Rounding::Down)
}

/// A 256-bit unsigned product split into high and low words.
///
/// Field order makes the derived `Ord` compare numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WideProduct {
    hi: u128,
    lo: u128,
}

impl WideProduct {
    /// High 128 bits.
    #[must_use]
    pub const fn hi(&self) -> u128 {
        self.hi
    }

    /// Low 128 bits.
    #[must_use]
    pub const fn lo(&self) -> u128 {
        self.lo
    }
}

/// Full 128 × 128 → 256-bit multiplication. Never overflows.
#[must_use]
pub const fn wide_mul(a: u128, b: u128) -> WideProduct {
    const MASK: u128 = u64::MAX as u128;

    let (a_hi, a_lo) = (a >> 64, a & MASK);
    let (b_hi, b_lo) = (b >> 64, b & MASK);

    let ll = a_lo * b_lo;
    let lh = a_lo * b_hi;
    let hl = a_hi * b_lo;
    let hh = a_hi * b_hi;

    // Each addend is below 2^64, so the sum fits comfortably.
    let mid = (ll >> 64) + (lh & MASK) + (hl & MASK);

    WideProduct {
        hi: hh + (lh >> 64) + (hl >> 64) + (mid >> 64),
        lo: (ll & MASK) | (mid << 64),
    }
}

/// The invariant `k = reserve_a × reserve_b` at full width.
#[must_use]
pub const fn invariant(reserves: &Reserves) -> WideProduct {
    wide_mul(reserves.reserve_a().get(), reserves.reserve_b().get())
}

/// Returns `true` if `after` keeps `k` at or above its value in `before`.
#[must_use]
pub fn invariant_preserved(before: &Reserves, after: &Reserves) -> bool {
    invariant(after) >= invariant(before)
}
