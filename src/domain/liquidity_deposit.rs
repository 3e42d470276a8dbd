//! Two-sided deposit into a pool's vaults.

use super::Amount;
use crate::error::SettlementError;

/// A deposit of both assets into a pool.
///
/// No ownership share is minted: the amounts are credited straight to the
/// vaults, so the first deposit sets the price and any later unbalanced
/// deposit moves it.
///
/// # Invariants
///
/// Both amounts are strictly positive.
///
/// # Examples
///
/// ```
/// use cp_settlement::domain::{Amount, LiquidityDeposit};
///
/// assert!(LiquidityDeposit::new(Amount::new(50), Amount::new(50)).is_ok());
/// assert!(LiquidityDeposit::new(Amount::new(50), Amount::ZERO).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LiquidityDeposit {
    amount_a: Amount,
    amount_b: Amount,
}

impl LiquidityDeposit {
    /// Creates a validated deposit.
    ///
    /// # Errors
    ///
    /// Returns [`SettlementError::ZeroAmount`] if either side is zero.
    pub const fn new(amount_a: Amount, amount_b: Amount) -> Result<Self, SettlementError> {
        if amount_a.is_zero() {
            return Err(SettlementError::ZeroAmount("deposit amount_a must be positive"));
        }
        if amount_b.is_zero() {
            return Err(SettlementError::ZeroAmount("deposit amount_b must be positive"));
        }
        Ok(Self { amount_a, amount_b })
    }

    /// Amount of asset A moved into vault A.
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Amount of asset B moved into vault B.
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }
}
