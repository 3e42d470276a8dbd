//! Snapshot of both vault balances.

use core::fmt;

use super::{Amount, SwapDirection};

/// Vault balances of a pool at one point in time.
///
/// Reserves are never stored on the pool record; the engines read them from
/// the vaults at the start of each operation and return a fresh snapshot
/// after committing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reserves {
    reserve_a: Amount,
    reserve_b: Amount,
}

impl Reserves {
    /// Creates a snapshot from raw vault balances.
    pub const fn new(reserve_a: Amount, reserve_b: Amount) -> Self {
        Self {
            reserve_a,
            reserve_b,
        }
    }

    /// Balance of vault A.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Balance of vault B.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns `(reserve_in, reserve_out)` for a swap in `direction`.
    pub const fn oriented(&self, direction: SwapDirection) -> (Amount, Amount) {
        match direction {
            SwapDirection::AToB => (self.reserve_a, self.reserve_b),
            SwapDirection::BToA => (self.reserve_b, self.reserve_a),
        }
    }

    /// Rebuilds a snapshot from `(reserve_in, reserve_out)` oriented by `direction`.
    pub const fn from_oriented(direction: SwapDirection, reserve_in: Amount, reserve_out: Amount) -> Self {
        match direction {
            SwapDirection::AToB => Self::new(reserve_in, reserve_out),
            SwapDirection::BToA => Self::new(reserve_out, reserve_in),
        }
    }

    /// Returns `true` when both vaults hold a non-zero balance.
    #[must_use]
    pub const fn is_liquid(&self) -> bool {
        !self.reserve_a.is_zero() && !self.reserve_b.is_zero()
    }
}

impl fmt::Display for Reserves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reserves(a={}, b={})", self.reserve_a, self.reserve_b)
    }
}
