//! The settlement engine: pool creation, deposits, and swaps.
//!
//! [`Exchange`] owns every pool record, every vault, and the caller
//! [`Holdings`] they settle against. Each operation takes `&mut self`, so
//! operations on one exchange are serialized by the borrow checker, and
//! each one follows the same shape:
//!
//! 1. validate inputs and re-verify the pool's derived addresses,
//! 2. plan every vault and holding change against a snapshot,
//! 3. settle caller holdings (the only step that can still fail),
//! 4. apply the vault plans, which cannot fail.
//!
//! Any error therefore leaves pools, vaults, and holdings exactly as they
//! were.

mod liquidity;
mod swap;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

use std::collections::HashMap;

use crate::address::{verify_derived_address, Address, POOL_SALT, VAULT_A_SALT, VAULT_B_SALT};
use crate::config::ExchangeConfig;
use crate::custody::{Holdings, InMemoryHoldings, Vault};
use crate::domain::{AssetId, AssetPair, Reserves, SwapDirection};
use crate::error::SettlementError;
use crate::pool::{derive_pool, Derivation, Liquidity, PoolHandles, PoolState, PoolStatus};

/// A pool record with the two vaults it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PoolAccount {
    state: PoolState,
    vault_a: Vault,
    vault_b: Vault,
}

impl PoolAccount {
    fn reserves(&self) -> Reserves {
        Reserves::new(self.vault_a.balance(), self.vault_b.balance())
    }

    /// `(vault_in, vault_out)` for `direction`.
    fn vaults(&self, direction: SwapDirection) -> (&Vault, &Vault) {
        match direction {
            SwapDirection::AToB => (&self.vault_a, &self.vault_b),
            SwapDirection::BToA => (&self.vault_b, &self.vault_a),
        }
    }

    fn vaults_mut(&mut self, direction: SwapDirection) -> (&mut Vault, &mut Vault) {
        match direction {
            SwapDirection::AToB => (&mut self.vault_a, &mut self.vault_b),
            SwapDirection::BToA => (&mut self.vault_b, &mut self.vault_a),
        }
    }
}

/// Host of constant-product pools settling against `H`.
///
/// # Examples
///
/// ```
/// use cp_settlement::prelude::*;
///
/// let program = Address::from_bytes([7u8; 32]);
/// let config = ExchangeConfig::new(program).expect("valid config");
/// let mut exchange = Exchange::new(config, InMemoryHoldings::new()).expect("exchange");
///
/// let usdc = AssetId::from_bytes([1u8; 32]);
/// let weth = AssetId::from_bytes([2u8; 32]);
/// let handles = exchange
///     .initialize_pool(Address::from_bytes([0xaa; 32]), usdc, weth)
///     .expect("pool created");
///
/// assert!(exchange.pool_status(&handles.pool).is_active());
/// assert!(!exchange.pool_status(&handles.pool).can_swap());
/// ```
#[derive(Debug, Clone)]
pub struct Exchange<H: Holdings = InMemoryHoldings> {
    config: ExchangeConfig,
    holdings: H,
    pools: HashMap<Address, PoolAccount>,
}

impl<H: Holdings> Exchange<H> {
    /// Creates an exchange with no pools.
    ///
    /// # Errors
    ///
    /// Returns [`SettlementError::InvalidConfiguration`] if `config` fails
    /// validation.
    pub fn new(config: ExchangeConfig, holdings: H) -> Result<Self, SettlementError> {
        config.validate()?;
        tracing::debug!(program_id = %config.program_id(), swap_fee = %config.swap_fee(), "exchange created");
        Ok(Self {
            config,
            holdings,
            pools: HashMap::new(),
        })
    }

    /// The configuration this exchange was built with.
    #[must_use]
    pub const fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    /// Caller balances.
    #[must_use]
    pub const fn holdings(&self) -> &H {
        &self.holdings
    }

    /// Mutable access to caller balances, e.g. to fund a caller.
    pub fn holdings_mut(&mut self) -> &mut H {
        &mut self.holdings
    }

    /// Creates the pool for `{x, y}` at its canonical derived address.
    ///
    /// The pair is ordered canonically first, so `(x, y)` and `(y, x)` name
    /// the same pool. Both vaults open empty and owned by the pool address.
    ///
    /// # Errors
    ///
    /// - [`SettlementError::IdenticalAssetTypes`] if `x == y`, before any
    ///   derivation runs.
    /// - [`SettlementError::PoolAlreadyExists`] if the pair already has a
    ///   pool.
    pub fn initialize_pool(
        &mut self,
        authority: Address,
        x: AssetId,
        y: AssetId,
    ) -> Result<PoolHandles, SettlementError> {
        let pair = AssetPair::new(x, y).map_err(|e| init_rejected(&x, &y, e))?;
        let derivation =
            derive_pool(self.config.program_id(), &pair).map_err(|e| init_rejected(&x, &y, e))?;
        self.open_pool(authority, pair, derivation)
    }

    /// Like [`initialize_pool`](Self::initialize_pool), but the caller
    /// supplies the addresses it expects and each one is checked against
    /// its recomputed derivation.
    ///
    /// # Errors
    ///
    /// As [`initialize_pool`](Self::initialize_pool), plus
    /// [`SettlementError::DerivationMismatch`] if any of `claimed` differs
    /// from the canonical derivation.
    pub fn initialize_pool_at(
        &mut self,
        authority: Address,
        x: AssetId,
        y: AssetId,
        claimed: &PoolHandles,
    ) -> Result<PoolHandles, SettlementError> {
        let pair = AssetPair::new(x, y).map_err(|e| init_rejected(&x, &y, e))?;
        let derivation = self
            .verify_claimed(&pair, claimed)
            .map_err(|e| init_rejected(&x, &y, e))?;
        self.open_pool(authority, pair, derivation)
    }

    fn verify_claimed(
        &self,
        pair: &AssetPair,
        claimed: &PoolHandles,
    ) -> Result<Derivation, SettlementError> {
        let program_id = self.config.program_id();
        let bump = verify_derived_address(
            &claimed.pool,
            program_id,
            POOL_SALT,
            &[pair.asset_a().as_bytes(), pair.asset_b().as_bytes()],
        )?;
        let vault_a_bump = verify_derived_address(
            &claimed.vault_a,
            program_id,
            VAULT_A_SALT,
            &[claimed.pool.as_bytes()],
        )?;
        let vault_b_bump = verify_derived_address(
            &claimed.vault_b,
            program_id,
            VAULT_B_SALT,
            &[claimed.pool.as_bytes()],
        )?;
        Ok(Derivation {
            handles: *claimed,
            bump,
            vault_a_bump,
            vault_b_bump,
        })
    }

    fn open_pool(
        &mut self,
        authority: Address,
        pair: AssetPair,
        derivation: Derivation,
    ) -> Result<PoolHandles, SettlementError> {
        let handles = derivation.handles;
        if self.pools.contains_key(&handles.pool) {
            tracing::warn!(pool = %handles.pool, "pool already exists");
            return Err(SettlementError::PoolAlreadyExists);
        }

        let account = PoolAccount {
            state: PoolState::new(authority, pair, derivation),
            vault_a: Vault::open(handles.vault_a, pair.asset_a(), handles.pool),
            vault_b: Vault::open(handles.vault_b, pair.asset_b(), handles.pool),
        };
        self.pools.insert(handles.pool, account);

        tracing::info!(
            pool = %handles.pool,
            asset_a = %pair.asset_a(),
            asset_b = %pair.asset_b(),
            %authority,
            "pool initialized"
        );
        Ok(handles)
    }

    /// The pool record at `pool`, if one exists.
    #[must_use]
    pub fn pool(&self, pool: &Address) -> Option<&PoolState> {
        self.pools.get(pool).map(|account| &account.state)
    }

    /// Looks up the pool for `{x, y}` by derivation.
    ///
    /// # Errors
    ///
    /// Returns [`SettlementError::IdenticalAssetTypes`] if `x == y`.
    pub fn find_pool(&self, x: AssetId, y: AssetId) -> Result<Option<&PoolState>, SettlementError> {
        let pair = AssetPair::new(x, y)?;
        let handles = PoolHandles::derive(self.config.program_id(), &pair)?;
        Ok(self.pool(&handles.pool))
    }

    /// Every pool record, in no particular order.
    pub fn pools(&self) -> impl Iterator<Item = &PoolState> {
        self.pools.values().map(|account| &account.state)
    }

    /// Vaults A and B of `pool`.
    #[must_use]
    pub fn vaults(&self, pool: &Address) -> Option<(&Vault, &Vault)> {
        self.pools
            .get(pool)
            .map(|account| (&account.vault_a, &account.vault_b))
    }

    /// Current vault balances of `pool`.
    ///
    /// # Errors
    ///
    /// Returns [`SettlementError::PoolNotFound`] if no pool exists at `pool`.
    pub fn reserves(&self, pool: &Address) -> Result<Reserves, SettlementError> {
        Ok(self.account(pool)?.reserves())
    }

    /// Lifecycle state of the address `pool`.
    #[must_use]
    pub fn pool_status(&self, pool: &Address) -> PoolStatus {
        match self.pools.get(pool) {
            None => PoolStatus::Uninitialized,
            Some(account) if account.reserves().is_liquid() => PoolStatus::Active(Liquidity::Liquid),
            Some(_) => PoolStatus::Active(Liquidity::Illiquid),
        }
    }

    /// Looks up `pool` and re-verifies its derived addresses.
    fn account(&self, pool: &Address) -> Result<&PoolAccount, SettlementError> {
        let account = self.pools.get(pool).ok_or(SettlementError::PoolNotFound)?;
        account.state.verify(self.config.program_id())?;
        Ok(account)
    }
}

fn init_rejected(x: &AssetId, y: &AssetId, error: SettlementError) -> SettlementError {
    tracing::warn!(%x, %y, %error, "initialize_pool rejected");
    error
}

/// Logs a rejected pool operation and hands the error back.
fn rejected(operation: &'static str, pool: &Address, error: SettlementError) -> SettlementError {
    tracing::warn!(operation, %pool, %error, "operation rejected");
    error
}
