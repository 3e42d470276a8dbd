//! Salted blake3 derivation of pool and vault addresses.
//!
//! ```text
//! address = blake3(DOMAIN || program_id || len(salt) || salt || len(seed_i) || seed_i ... || bump)
//! ```
//!
//! The canonical bump is the highest value in `255..=0` whose address lands
//! in the derived half of the address space.

use super::Address;
use crate::error::SettlementError;

/// Domain separator mixed into every derivation.
const DERIVATION_DOMAIN: &[u8] = b"CP_SETTLEMENT_DERIVED_ADDRESS_V1";

/// Salt of the pool record address; seeds are `[asset_a, asset_b]`.
pub const POOL_SALT: &[u8] = b"pool";

/// Salt of vault A; the only seed is the pool address.
pub const VAULT_A_SALT: &[u8] = b"vault_a";

/// Salt of vault B; the only seed is the pool address.
pub const VAULT_B_SALT: &[u8] = b"vault_b";

/// Computes the address for one explicit `bump`.
///
/// Salt and seeds are length-prefixed so that no two different seed lists
/// hash the same byte stream.
#[must_use]
pub fn create_derived_address(
    program_id: &Address,
    salt: &[u8],
    seeds: &[&[u8]],
    bump: u8,
) -> Address {
    let mut hasher = blake3::Hasher::new();
    hasher.update(DERIVATION_DOMAIN);
    hasher.update(program_id.as_bytes());
    hasher.update(&(salt.len() as u64).to_le_bytes());
    hasher.update(salt);
    for seed in seeds {
        hasher.update(&(seed.len() as u64).to_le_bytes());
        hasher.update(seed);
    }
    hasher.update(&[bump]);
    Address::from_bytes(*hasher.finalize().as_bytes())
}

/// Finds the canonical derived address and its bump.
///
/// # Errors
///
/// Returns [`SettlementError::DerivationMismatch`] if no bump produces an
/// address in the derived half, which happens with probability `2^-256`.
pub fn find_derived_address(
    program_id: &Address,
    salt: &[u8],
    seeds: &[&[u8]],
) -> Result<(Address, u8), SettlementError> {
    (0..=u8::MAX)
        .rev()
        .map(|bump| (create_derived_address(program_id, salt, seeds, bump), bump))
        .find(|(address, _)| address.is_derived_space())
        .ok_or(SettlementError::DerivationMismatch(
            "no bump yields a derived address",
        ))
}

/// Checks that `claimed` is the canonical derivation for `salt` and `seeds`.
///
/// Returns the bump on success so callers can persist it.
///
/// # Errors
///
/// Returns [`SettlementError::DerivationMismatch`] if `claimed` differs from
/// the recomputed address.
pub fn verify_derived_address(
    claimed: &Address,
    program_id: &Address,
    salt: &[u8],
    seeds: &[&[u8]],
) -> Result<u8, SettlementError> {
    let (expected, bump) = find_derived_address(program_id, salt, seeds)?;
    if expected != *claimed {
        tracing::warn!(%claimed, %expected, "derived address mismatch");
        return Err(SettlementError::DerivationMismatch(
            "supplied address does not match derivation",
        ));
    }
    Ok(bump)
}
