//! Explicit rounding direction for integer division.

/// Rounding direction for division on domain types.
///
/// Pricing always rounds [`Down`](Rounding::Down) so the trader never gains
/// from truncation; fee computation rounds [`Up`](Rounding::Up) so the pool
/// never loses to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates() {
        assert!(Rounding::Up.is_up());
        assert!(!Rounding::Up.is_down());
        assert!(Rounding::Down.is_down());
        assert!(!Rounding::Down.is_up());
    }
}
