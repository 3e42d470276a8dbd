//! Persistent pool record.

use crate::address::{create_derived_address, Address, POOL_SALT, VAULT_A_SALT, VAULT_B_SALT};
use crate::domain::{AssetId, AssetPair};
use crate::error::SettlementError;

use super::PoolHandles;

/// The record binding an asset pair to its two vaults.
///
/// Everything here is fixed at creation. Reserves are deliberately absent:
/// they are read from the vaults at the time of each operation.
///
/// The bumps let any reader re-derive the three addresses in one hash each
/// and confirm the record sits where the derivation says it must.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PoolState {
    address: Address,
    authority: Address,
    asset_a: AssetId,
    asset_b: AssetId,
    vault_a: Address,
    vault_b: Address,
    bump: u8,
    vault_a_bump: u8,
    vault_b_bump: u8,
}

/// Canonical addresses and bumps of a pool and its vaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Derivation {
    pub(crate) handles: PoolHandles,
    pub(crate) bump: u8,
    pub(crate) vault_a_bump: u8,
    pub(crate) vault_b_bump: u8,
}

impl PoolState {
    pub(crate) const fn new(authority: Address, pair: AssetPair, derivation: Derivation) -> Self {
        Self {
            address: derivation.handles.pool,
            authority,
            asset_a: pair.asset_a(),
            asset_b: pair.asset_b(),
            vault_a: derivation.handles.vault_a,
            vault_b: derivation.handles.vault_b,
            bump: derivation.bump,
            vault_a_bump: derivation.vault_a_bump,
            vault_b_bump: derivation.vault_b_bump,
        }
    }

    /// Derived address of this record.
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    /// Identity that created the pool. Informational only.
    #[must_use]
    pub const fn authority(&self) -> &Address {
        &self.authority
    }

    /// Lower asset of the canonical pair.
    #[must_use]
    pub const fn asset_a(&self) -> AssetId {
        self.asset_a
    }

    /// Higher asset of the canonical pair.
    #[must_use]
    pub const fn asset_b(&self) -> AssetId {
        self.asset_b
    }

    /// The canonical pair.
    ///
    /// # Errors
    ///
    /// Never fails for a record built by the engine; the check is repeated
    /// because `AssetPair` has no unchecked constructor.
    pub fn pair(&self) -> Result<AssetPair, SettlementError> {
        AssetPair::new(self.asset_a, self.asset_b)
    }

    /// Address of vault A.
    #[must_use]
    pub const fn vault_a(&self) -> &Address {
        &self.vault_a
    }

    /// Address of vault B.
    #[must_use]
    pub const fn vault_b(&self) -> &Address {
        &self.vault_b
    }

    /// Bump of the pool address.
    #[must_use]
    pub const fn bump(&self) -> u8 {
        self.bump
    }

    /// Pool and vault addresses, as returned by `initialize_pool`.
    #[must_use]
    pub const fn handles(&self) -> PoolHandles {
        PoolHandles {
            pool: self.address,
            vault_a: self.vault_a,
            vault_b: self.vault_b,
        }
    }

    /// Re-derives the pool and vault addresses from the stored bumps.
    ///
    /// # Errors
    ///
    /// Returns [`SettlementError::DerivationMismatch`] if any stored address
    /// differs from its derivation.
    pub fn verify(&self, program_id: &Address) -> Result<(), SettlementError> {
        let pool = create_derived_address(
            program_id,
            POOL_SALT,
            &[self.asset_a.as_bytes(), self.asset_b.as_bytes()],
            self.bump,
        );
        if pool != self.address {
            return Err(SettlementError::DerivationMismatch(
                "pool address does not match its seeds",
            ));
        }

        let vault_a = create_derived_address(
            program_id,
            VAULT_A_SALT,
            &[self.address.as_bytes()],
            self.vault_a_bump,
        );
        let vault_b = create_derived_address(
            program_id,
            VAULT_B_SALT,
            &[self.address.as_bytes()],
            self.vault_b_bump,
        );
        if vault_a != self.vault_a || vault_b != self.vault_b {
            return Err(SettlementError::DerivationMismatch(
                "vault address does not match its seeds",
            ));
        }
        Ok(())
    }
}
