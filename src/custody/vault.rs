//! Pool-owned custody accounts.

use crate::address::Address;
use crate::domain::{Amount, AssetId};
use crate::error::SettlementError;
use crate::math::CheckedArithmetic;

use super::PoolSigner;

/// Balance holder for one asset of one pool.
///
/// The balance is readable by anyone and writable only by the engines.
/// Mutation is two-phase: [`plan_credit`](Self::plan_credit) and
/// [`plan_debit`](Self::plan_debit) check the signer and compute the new
/// balance without touching state; [`apply`](Self::apply) commits a plan
/// and cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Vault {
    address: Address,
    asset: AssetId,
    owner: Address,
    balance: Amount,
}

/// A computed, not yet applied, vault balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub(crate) struct VaultUpdate {
    address: Address,
    balance: Amount,
}

impl VaultUpdate {
    pub(crate) const fn balance(&self) -> Amount {
        self.balance
    }
}

impl Vault {
    /// Opens an empty vault owned by `owner`.
    pub(crate) const fn open(address: Address, asset: AssetId, owner: Address) -> Self {
        Self {
            address,
            asset,
            owner,
            balance: Amount::ZERO,
        }
    }

    /// Derived address of the vault.
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    /// Asset the vault holds.
    #[must_use]
    pub const fn asset(&self) -> AssetId {
        self.asset
    }

    /// Pool address whose signer controls the vault.
    #[must_use]
    pub const fn owner(&self) -> &Address {
        &self.owner
    }

    /// Current balance.
    pub const fn balance(&self) -> Amount {
        self.balance
    }

    fn authorize(&self, signer: &PoolSigner) -> Result<(), SettlementError> {
        if signer.pool() != &self.owner {
            tracing::warn!(vault = %self.address, signer = %signer.pool(), "vault signer rejected");
            return Err(SettlementError::DerivationMismatch(
                "vault is not owned by the signing pool",
            ));
        }
        Ok(())
    }

    /// Plans `balance + amount`.
    pub(crate) fn plan_credit(
        &self,
        signer: &PoolSigner,
        amount: Amount,
    ) -> Result<VaultUpdate, SettlementError> {
        self.authorize(signer)?;
        let balance = self.balance.safe_add(&amount, "vault credit")?;
        Ok(VaultUpdate {
            address: self.address,
            balance,
        })
    }

    /// Plans `balance - amount`.
    pub(crate) fn plan_debit(
        &self,
        signer: &PoolSigner,
        amount: Amount,
    ) -> Result<VaultUpdate, SettlementError> {
        self.authorize(signer)?;
        let balance = self.balance.safe_sub(&amount, "vault debit")?;
        Ok(VaultUpdate {
            address: self.address,
            balance,
        })
    }

    /// Commits a plan produced by this vault.
    pub(crate) fn apply(&mut self, update: VaultUpdate) {
        debug_assert_eq!(update.address, self.address, "update applied to wrong vault");
        self.balance = update.balance;
    }
}
