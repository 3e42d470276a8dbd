//! Swap direction relative to the canonical pair.

use core::fmt;

/// Which vault receives the input of a swap.
///
/// Directions are expressed against the canonical
/// [`AssetPair`](super::AssetPair) ordering: `AToB` sells the lower asset
/// for the higher one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwapDirection {
    /// Sell asset A into vault A, receive asset B from vault B.
    AToB,
    /// Sell asset B into vault B, receive asset A from vault A.
    BToA,
}

impl SwapDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reverse(&self) -> Self {
        match self {
            Self::AToB => Self::BToA,
            Self::BToA => Self::AToB,
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AToB => write!(f, "A->B"),
            Self::BToA => write!(f, "B->A"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_is_involution() {
        assert_eq!(SwapDirection::AToB.reverse(), SwapDirection::BToA);
        assert_eq!(SwapDirection::AToB.reverse().reverse(), SwapDirection::AToB);
    }

    #[test]
    fn display() {
        assert_eq!(SwapDirection::AToB.to_string(), "A->B");
        assert_eq!(SwapDirection::BToA.to_string(), "B->A");
    }
}
