//! Outcome of a settled swap.

use core::fmt;

use super::{Amount, Reserves};
use crate::error::SettlementError;

/// What a settled swap moved and the vault balances it left behind.
///
/// # Invariants
///
/// - `amount_in > 0`. `amount_out` may be zero when the quote truncates.
/// - `fee < amount_in`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SwapResult {
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
    reserves: Reserves,
}

impl SwapResult {
    /// Creates a new `SwapResult` with validated invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SettlementError::ZeroAmount`] if `amount_in` is zero and
    /// [`SettlementError::InvalidConfiguration`] if `fee >= amount_in`.
    pub const fn new(
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
        reserves: Reserves,
    ) -> Result<Self, SettlementError> {
        if amount_in.is_zero() {
            return Err(SettlementError::ZeroAmount("amount_in must be positive"));
        }
        if fee.get() >= amount_in.get() {
            return Err(SettlementError::InvalidConfiguration(
                "fee must be less than amount_in",
            ));
        }
        Ok(Self {
            amount_in,
            amount_out,
            fee,
            reserves,
        })
    }

    /// Input debited from the caller.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Output credited to the caller.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Portion of the input withheld as fee (zero for fee-less pools).
    pub const fn fee(&self) -> Amount {
        self.fee
    }

    /// Vault balances after the swap committed.
    pub const fn reserves(&self) -> Reserves {
        self.reserves
    }
}

impl fmt::Display for SwapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapResult(in={}, out={}, fee={}, {})",
            self.amount_in, self.amount_out, self.fee, self.reserves
        )
    }
}
