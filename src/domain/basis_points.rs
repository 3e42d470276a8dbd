//! Basis-point representation for percentages.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::SettlementError;

/// Value that represents 100%.
const MAX_BPS: u32 = 10_000;

/// A percentage in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// Any `u32` can be stored; [`is_valid_percent`](Self::is_valid_percent)
/// tells whether it is a meaningful percentage.
///
/// # Examples
///
/// ```
/// use cp_settlement::domain::{Amount, BasisPoints, Rounding};
///
/// let bp = BasisPoints::new(30);
/// let fee = bp.apply(Amount::new(1_000), Rounding::Up).expect("no overflow");
/// assert_eq!(fee, Amount::new(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(MAX_BPS);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` for values in `0..=10_000`.
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= MAX_BPS
    }

    /// Computes `amount * self / 10_000` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`SettlementError::ArithmeticOverflow`] if `amount * bps`
    /// leaves the `u128` range.
    pub const fn apply(&self, amount: Amount, rounding: Rounding) -> Result<Amount, SettlementError> {
        let product = match amount.get().checked_mul(self.0 as u128) {
            Some(v) => v,
            None => return Err(SettlementError::ArithmeticOverflow("basis points apply")),
        };
        let divisor = MAX_BPS as u128;
        let q = product / divisor;
        match rounding {
            Rounding::Up if product % divisor != 0 => Ok(Amount::new(q + 1)),
            _ => Ok(Amount::new(q)),
        }
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
