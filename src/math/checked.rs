//! Checked arithmetic lifted into [`SettlementError`].
//!
//! [`Amount`] exposes `Option`-returning checked operations;
//! [`CheckedArithmetic`] turns those into `Result`s with an
//! [`ArithmeticOverflow`](SettlementError::ArithmeticOverflow) that names
//! the failing computation, so pricing code can chain with `?`.
//!
//! # Examples
//!
//! ```
//! use cp_settlement::domain::{Amount, Rounding};
//! use cp_settlement::math::CheckedArithmetic;
//!
//! let out = Amount::new(10)
//!     .safe_mul(&Amount::new(50), "numerator")
//!     .and_then(|n| n.safe_div(&Amount::new(60), Rounding::Down));
//! assert_eq!(out, Ok(Amount::new(8)));
//! ```

use crate::domain::{Amount, Rounding};
use crate::error::SettlementError;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: every failure is an `Err`.
/// - **No saturation or wrapping**: overflow and underflow both surface as
///   [`SettlementError::ArithmeticOverflow`].
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// [`SettlementError::ArithmeticOverflow`] carrying `context`.
    fn safe_add(&self, other: &Self, context: &'static str) -> Result<Self, SettlementError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// [`SettlementError::ArithmeticOverflow`] carrying `context` on underflow.
    fn safe_sub(&self, other: &Self, context: &'static str) -> Result<Self, SettlementError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// [`SettlementError::ArithmeticOverflow`] carrying `context`.
    fn safe_mul(&self, other: &Self, context: &'static str) -> Result<Self, SettlementError>;

    /// Checked division with explicit [`Rounding`].
    ///
    /// # Errors
    ///
    /// [`SettlementError::DivisionByZero`] if `other` is zero.
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, SettlementError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self, context: &'static str) -> Result<Self, SettlementError> {
        self.checked_add(other)
            .ok_or(SettlementError::ArithmeticOverflow(context))
    }

    #[inline]
    fn safe_sub(&self, other: &Self, context: &'static str) -> Result<Self, SettlementError> {
        self.checked_sub(other)
            .ok_or(SettlementError::ArithmeticOverflow(context))
    }

    #[inline]
    fn safe_mul(&self, other: &Self, context: &'static str) -> Result<Self, SettlementError> {
        self.checked_mul(other)
            .ok_or(SettlementError::ArithmeticOverflow(context))
    }

    #[inline]
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, SettlementError> {
        self.checked_div(other, rounding)
            .ok_or(SettlementError::DivisionByZero)
    }
}
