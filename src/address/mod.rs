//! Ledger addresses and their deterministic derivation.
//!
//! Pools and vaults are found by recomputing their address from fixed salts
//! and the asset identifiers, never through a lookup table. Any caller can
//! repeat the derivation, and any supplied address can be checked against
//! it with [`verify_derived_address`].

use core::fmt;

mod derive;

pub use derive::{
    create_derived_address, find_derived_address, verify_derived_address, POOL_SALT,
    VAULT_A_SALT, VAULT_B_SALT,
};

/// Location of an account on the hosting ledger: a pool record, a vault, or
/// a caller's identity.
///
/// Addresses are split in two halves by the top bit of the first byte.
/// Derived addresses (pools, vaults) always have it clear; see
/// [`find_derived_address`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address([u8; 32]);

impl Address {
    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns `true` if the address lies in the half reserved for
    /// program-derived accounts.
    #[must_use]
    pub const fn is_derived_space(&self) -> bool {
        self.0[0] & 0x80 == 0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}
