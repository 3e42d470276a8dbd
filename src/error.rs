//! Unified error type for the settlement core.
//!
//! Every fallible operation in the crate returns [`SettlementError`].  All
//! variants are terminal for the requested operation: the engines abort
//! before mutating any state, never retry, and never clamp an amount.

use thiserror::Error;

use crate::domain::Amount;

/// Errors raised by pool creation, deposit accounting, and swap settlement.
///
/// Variants carrying a `&'static str` describe which check failed so that
/// two failures of the same kind stay distinguishable in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettlementError {
    /// A pool for this asset pair has already been initialized.
    #[error("pool already exists for this asset pair")]
    PoolAlreadyExists,

    /// No pool is registered at the given address.
    #[error("pool not found")]
    PoolNotFound,

    /// Both sides of the requested pair are the same asset.
    #[error("asset pair requires two distinct asset types")]
    IdenticalAssetTypes,

    /// A supplied or stored address does not match its recomputed derivation.
    #[error("derived address mismatch: {0}")]
    DerivationMismatch(&'static str),

    /// An amount that must be strictly positive was zero.
    #[error("zero amount: {0}")]
    ZeroAmount(&'static str),

    /// The caller's holding cannot cover a debit.
    #[error("insufficient funds: required {required}, available {available}")]
    InsufficientFunds {
        /// Amount the operation needed to debit.
        required: Amount,
        /// Balance the caller actually holds.
        available: Amount,
    },

    /// The pool reserves cannot price or fill the trade.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// The computed output is below the caller's floor.
    #[error("slippage exceeded: minimum {minimum}, computed {computed}")]
    SlippageExceeded {
        /// Caller-supplied `minimum_amount_out`.
        minimum: Amount,
        /// Output the constant-product formula produced.
        computed: Amount,
    },

    /// An addition, subtraction, or multiplication left the `u128` range.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// A divisor was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The post-swap reserve product fell below the pre-swap product.
    #[error("constant-product invariant violated")]
    InvariantViolation,

    /// An exchange configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A decimal exponent is outside `0..=18`.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = SettlementError::ArithmeticOverflow("reserve_in + amount_in");
        assert_eq!(err.to_string(), "arithmetic overflow: reserve_in + amount_in");
    }

    #[test]
    fn display_slippage_fields() {
        let err = SettlementError::SlippageExceeded {
            minimum: Amount::new(9),
            computed: Amount::new(8),
        };
        assert_eq!(err.to_string(), "slippage exceeded: minimum 9, computed 8");
    }

    #[test]
    fn display_insufficient_funds_fields() {
        let err = SettlementError::InsufficientFunds {
            required: Amount::new(10),
            available: Amount::new(3),
        };
        assert_eq!(
            err.to_string(),
            "insufficient funds: required 10, available 3"
        );
    }

    #[test]
    fn errors_are_copy_and_comparable() {
        let a = SettlementError::PoolNotFound;
        let b = a;
        assert_eq!(a, b);
        assert_ne!(a, SettlementError::PoolAlreadyExists);
    }
}
