//! Custody model: pool vaults and caller holdings.
//!
//! Vault balances are only ever changed by the liquidity and swap engines,
//! and only with a [`PoolSigner`] for the pool that owns the vault. A
//! signer cannot be built outside this crate, so no external code path can
//! credit or debit a vault. Caller balances live behind the [`Holdings`]
//! trait, the seam to the ledger hosting the pools.

mod holdings;
mod vault;

pub use holdings::{Holdings, InMemoryHoldings, Movement};
pub use vault::Vault;

use crate::address::Address;

/// Authority of one pool over its vaults.
///
/// Minted by the engines from a pool record whose derived address has just
/// been re-verified.
#[derive(Debug)]
pub struct PoolSigner {
    pool: Address,
}

impl PoolSigner {
    pub(crate) const fn new(pool: Address) -> Self {
        Self { pool }
    }

    /// Address of the pool this signer speaks for.
    #[must_use]
    pub const fn pool(&self) -> &Address {
        &self.pool
    }
}
