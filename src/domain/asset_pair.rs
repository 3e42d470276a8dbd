//! Canonically ordered pair of distinct asset types.

use super::{AssetId, SwapDirection};
use crate::error::SettlementError;

/// Two distinct asset types, sorted so that `asset_a < asset_b`.
///
/// Sorting makes `(X, Y)` and `(Y, X)` the same pair, so both resolve to
/// the same pool address and only one pool can ever exist for them.
///
/// # Examples
///
/// ```
/// use cp_settlement::domain::{AssetId, AssetPair};
///
/// let x = AssetId::from_bytes([1u8; 32]);
/// let y = AssetId::from_bytes([2u8; 32]);
///
/// let pair = AssetPair::new(y, x).expect("distinct assets");
/// assert_eq!(pair.asset_a(), x);
/// assert_eq!(pair.asset_b(), y);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetPair {
    asset_a: AssetId,
    asset_b: AssetId,
}

impl AssetPair {
    /// Creates a canonically-ordered pair.
    ///
    /// # Errors
    ///
    /// Returns [`SettlementError::IdenticalAssetTypes`] if `x == y`.
    pub fn new(x: AssetId, y: AssetId) -> Result<Self, SettlementError> {
        if x == y {
            return Err(SettlementError::IdenticalAssetTypes);
        }
        let (asset_a, asset_b) = if x < y { (x, y) } else { (y, x) };
        Ok(Self { asset_a, asset_b })
    }

    /// Returns the lower asset.
    #[must_use]
    pub const fn asset_a(&self) -> AssetId {
        self.asset_a
    }

    /// Returns the higher asset.
    #[must_use]
    pub const fn asset_b(&self) -> AssetId {
        self.asset_b
    }

    /// Returns `true` if `asset` is one side of the pair.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.asset_a == *asset || self.asset_b == *asset
    }

    /// Returns `(asset_in, asset_out)` for a swap in `direction`.
    #[must_use]
    pub const fn route(&self, direction: SwapDirection) -> (AssetId, AssetId) {
        match direction {
            SwapDirection::AToB => (self.asset_a, self.asset_b),
            SwapDirection::BToA => (self.asset_b, self.asset_a),
        }
    }

    /// Returns the direction that sells `asset_in`, if it belongs to the pair.
    #[must_use]
    pub fn direction_selling(&self, asset_in: &AssetId) -> Option<SwapDirection> {
        if *asset_in == self.asset_a {
            Some(SwapDirection::AToB)
        } else if *asset_in == self.asset_b {
            Some(SwapDirection::BToA)
        } else {
            None
        }
    }
}
