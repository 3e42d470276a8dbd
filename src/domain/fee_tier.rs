//! Swap fee expressed in basis points.

use core::fmt;

use super::{Amount, BasisPoints, Rounding};
use crate::error::SettlementError;

/// The fee charged on swap input, built on [`BasisPoints`].
///
/// The settlement core is fee-less by default ([`FeeTier::NONE`]). A
/// non-zero tier is deducted from `amount_in` before pricing while the full
/// input still enters the vault, so the reserve product grows by the fee.
///
/// # Examples
///
/// ```
/// use cp_settlement::domain::{Amount, BasisPoints, FeeTier};
///
/// let tier = FeeTier::new(BasisPoints::new(30));
/// assert_eq!(tier.fee_on(Amount::new(1_000)).expect("no overflow"), Amount::new(3));
/// assert_eq!(FeeTier::NONE.fee_on(Amount::new(1_000)).expect("no overflow"), Amount::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// No fee.
    pub const NONE: Self = Self(BasisPoints::ZERO);

    /// 0.30% fee (30 bp).
    pub const TIER_0_30_PERCENT: Self = Self(BasisPoints::new(30));

    /// Creates a new `FeeTier` from arbitrary [`BasisPoints`].
    pub const fn new(basis_points: BasisPoints) -> Self {
        Self(basis_points)
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Returns `true` if the tier charges nothing.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0.get() == 0
    }

    /// Fee owed on `amount_in`, rounded up in favour of the pool.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticOverflow`](SettlementError::ArithmeticOverflow)
    /// if the intermediate multiplication overflows.
    pub const fn fee_on(&self, amount_in: Amount) -> Result<Amount, SettlementError> {
        self.0.apply(amount_in, Rounding::Up)
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn none_is_default_and_zero() {
        assert_eq!(FeeTier::default(), FeeTier::NONE);
        assert!(FeeTier::NONE.is_zero());
        assert!(!FeeTier::TIER_0_30_PERCENT.is_zero());
    }

    #[test]
    fn fee_rounds_up() {
        let Ok(fee) = FeeTier::TIER_0_30_PERCENT.fee_on(Amount::new(10)) else {
            panic!("expected Ok");
        };
        // 10 * 30 / 10_000 = 0.03 -> 1
        assert_eq!(fee, Amount::new(1));
    }

    #[test]
    fn display() {
        assert_eq!(FeeTier::TIER_0_30_PERCENT.to_string(), "FeeTier(30bp)");
    }
}
