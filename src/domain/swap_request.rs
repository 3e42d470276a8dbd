//! Caller-supplied swap parameters.

use core::fmt;

use super::{Amount, SwapDirection};
use crate::error::SettlementError;

/// An exact-input swap with a slippage floor.
///
/// # Invariants
///
/// `amount_in` is always non-zero. `minimum_amount_out` may be zero, which
/// disables slippage protection.
///
/// # Examples
///
/// ```
/// use cp_settlement::domain::{Amount, SwapDirection, SwapRequest};
///
/// let req = SwapRequest::new(Amount::new(10), Amount::new(5), SwapDirection::AToB);
/// assert!(req.is_ok());
/// assert!(SwapRequest::new(Amount::ZERO, Amount::ZERO, SwapDirection::AToB).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapRequest {
    amount_in: Amount,
    minimum_amount_out: Amount,
    direction: SwapDirection,
}

impl SwapRequest {
    /// Creates a validated swap request.
    ///
    /// # Errors
    ///
    /// Returns [`SettlementError::ZeroAmount`] if `amount_in` is zero.
    pub const fn new(
        amount_in: Amount,
        minimum_amount_out: Amount,
        direction: SwapDirection,
    ) -> Result<Self, SettlementError> {
        if amount_in.is_zero() {
            return Err(SettlementError::ZeroAmount("swap amount_in must be positive"));
        }
        Ok(Self {
            amount_in,
            minimum_amount_out,
            direction,
        })
    }

    /// Exact input the caller sells.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Smallest output the caller accepts.
    pub const fn minimum_amount_out(&self) -> Amount {
        self.minimum_amount_out
    }

    /// Which vault receives the input.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }
}

impl fmt::Display for SwapRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapRequest({} in={}, min_out={})",
            self.direction, self.amount_in, self.minimum_amount_out
        )
    }
}
