//! Raw base-unit quantity with checked arithmetic.

use core::fmt;

use super::Rounding;

/// A non-negative token quantity in base units.
///
/// `Amount` never interprets a decimal exponent; scaling for display lives
/// in [`Decimals`](super::Decimals). Every `u128` value is a valid amount.
///
/// Arithmetic methods are checked and return `None` on overflow, underflow,
/// or division by zero. The settlement engines lift these into
/// [`SettlementError`](crate::error::SettlementError) through
/// [`CheckedArithmetic`](crate::math::CheckedArithmetic).
///
/// # Examples
///
/// ```
/// use cp_settlement::domain::{Amount, Rounding};
///
/// let a = Amount::new(10);
/// let b = Amount::new(3);
/// assert_eq!(a.checked_div(&b, Rounding::Down), Some(Amount::new(3)));
/// assert_eq!(b.checked_sub(&a), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Largest representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Wraps a raw base-unit value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw base-unit value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_mul(&self, other: &Self) -> Option<Self> {
        match self.0.checked_mul(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked division with an explicit rounding direction.
    ///
    /// Returns `None` if `divisor` is zero.
    #[must_use]
    pub const fn checked_div(&self, divisor: &Self, rounding: Rounding) -> Option<Self> {
        if divisor.0 == 0 {
            return None;
        }
        let q = self.0 / divisor.0;
        match rounding {
            Rounding::Down => Some(Self(q)),
            // q + 1 cannot overflow: a non-zero remainder implies q < u128::MAX.
            Rounding::Up if self.0 % divisor.0 != 0 => Some(Self(q + 1)),
            Rounding::Up => Some(Self(q)),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(u128::from(value))
    }
}
