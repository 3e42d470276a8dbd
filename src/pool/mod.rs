//! Pool records, their derived handles, and lifecycle status.
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized ──initialize_pool──▶ Active(Illiquid) ──add_liquidity──▶ Active(Liquid)
//! ```
//!
//! There is no closing transition. `add_liquidity` is accepted in either
//! active sub-state; `swap` needs `Liquid`.

mod state;

use core::fmt;

pub use state::PoolState;
pub(crate) use state::Derivation;

use crate::address::{find_derived_address, Address, POOL_SALT, VAULT_A_SALT, VAULT_B_SALT};
use crate::domain::AssetPair;
use crate::error::SettlementError;

/// The three addresses a caller needs to talk to a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolHandles {
    /// Address of the pool record.
    pub pool: Address,
    /// Address of the vault holding asset A.
    pub vault_a: Address,
    /// Address of the vault holding asset B.
    pub vault_b: Address,
}

impl PoolHandles {
    /// Recomputes the canonical handles for `pair` under `program_id`.
    ///
    /// # Errors
    ///
    /// Propagates [`SettlementError::DerivationMismatch`] from the bump
    /// search.
    pub fn derive(program_id: &Address, pair: &AssetPair) -> Result<Self, SettlementError> {
        Ok(derive_pool(program_id, pair)?.handles)
    }
}

impl fmt::Display for PoolHandles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pool={} vault_a={} vault_b={}",
            self.pool, self.vault_a, self.vault_b
        )
    }
}

/// Derives the pool address from the pair and each vault from the pool.
pub(crate) fn derive_pool(
    program_id: &Address,
    pair: &AssetPair,
) -> Result<Derivation, SettlementError> {
    let (pool, bump) = find_derived_address(
        program_id,
        POOL_SALT,
        &[pair.asset_a().as_bytes(), pair.asset_b().as_bytes()],
    )?;
    let (vault_a, vault_a_bump) = find_derived_address(program_id, VAULT_A_SALT, &[pool.as_bytes()])?;
    let (vault_b, vault_b_bump) = find_derived_address(program_id, VAULT_B_SALT, &[pool.as_bytes()])?;

    Ok(Derivation {
        handles: PoolHandles {
            pool,
            vault_a,
            vault_b,
        },
        bump,
        vault_a_bump,
        vault_b_bump,
    })
}

/// Whether a pool's vaults can price a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Liquidity {
    /// At least one vault is empty; swaps fail with `InsufficientLiquidity`.
    Illiquid,
    /// Both vaults hold a balance.
    Liquid,
}

/// Lifecycle state of the pool at an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolStatus {
    /// No pool record exists.
    Uninitialized,
    /// The record exists.
    Active(Liquidity),
}

impl PoolStatus {
    /// Returns `true` if a pool record exists.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    /// Returns `true` if swaps can be priced.
    #[must_use]
    pub const fn can_swap(&self) -> bool {
        matches!(self, Self::Active(Liquidity::Liquid))
    }
}
