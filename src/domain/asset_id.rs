//! Fungible asset-type identifier.

use core::fmt;

/// Identifies one fungible asset type (a mint) on the hosting ledger.
///
/// Wraps a fixed 32-byte identifier. Every byte sequence is accepted; the
/// settlement core only ever compares identifiers and feeds them into
/// address derivation.
///
/// # Examples
///
/// ```
/// use cp_settlement::domain::AssetId;
///
/// let usdc = AssetId::from_bytes([1u8; 32]);
/// assert_eq!(usdc.as_bytes(), &[1u8; 32]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetId([u8; 32]);

impl AssetId {
    /// Creates an `AssetId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}
