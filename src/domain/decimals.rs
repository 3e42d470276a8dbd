//! Decimal exponent used by the presentation layer.

use super::Amount;
use crate::error::SettlementError;

/// Largest supported exponent.
const MAX_DECIMALS: u8 = 18;

/// Number of decimal places between a whole token and its base unit.
///
/// The settlement core works on raw base units only. `Decimals` exists for
/// the layer that turns "10 tokens" into base units before calling the
/// engines and splits balances back apart for reporting.
///
/// # Examples
///
/// ```
/// use cp_settlement::domain::{Amount, Decimals};
///
/// let d = Decimals::new(6).expect("6 is valid");
/// assert_eq!(d.to_base_units(10).expect("fits"), Amount::new(10_000_000));
/// assert_eq!(d.split(Amount::new(1_500_000)), (1, 500_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Decimals(u8);

impl Default for Decimals {
    fn default() -> Self {
        Self::SIX
    }
}

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Six decimal places, the scaling used by the demo layer.
    pub const SIX: Self = Self(6);

    /// Maximum supported decimal places (18).
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` value.
    ///
    /// # Errors
    ///
    /// Returns [`SettlementError::InvalidPrecision`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self, SettlementError> {
        if value > MAX_DECIMALS {
            return Err(SettlementError::InvalidPrecision("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw exponent.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Converts a whole-token count into base units.
    ///
    /// # Errors
    ///
    /// Returns [`SettlementError::ArithmeticOverflow`] if the scaled value
    /// does not fit in `u128`.
    pub const fn to_base_units(&self, whole: u128) -> Result<Amount, SettlementError> {
        match whole.checked_mul(self.factor()) {
            Some(v) => Ok(Amount::new(v)),
            None => Err(SettlementError::ArithmeticOverflow("decimal scaling")),
        }
    }

    /// Splits a base-unit amount into `(whole, fractional)` parts.
    #[must_use]
    pub const fn split(&self, amount: Amount) -> (u128, u128) {
        let factor = self.factor();
        (amount.get() / factor, amount.get() % factor)
    }

    /// Returns `10^decimals`.
    const fn factor(&self) -> u128 {
        10u128.pow(self.0 as u32)
    }
}

impl TryFrom<u8> for Decimals {
    type Error = SettlementError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Decimals> for u8 {
    fn from(value: Decimals) -> Self {
        value.0
    }
}
