//! Caller balances held outside the pools.
//!
//! The engines never own caller funds; they describe what must move as a
//! list of [`Movement`]s and hand it to a [`Holdings`] implementation,
//! which applies the whole list or none of it.

use std::collections::HashMap;

use crate::address::Address;
use crate::domain::{Amount, AssetId};
use crate::error::SettlementError;
use crate::math::CheckedArithmetic;

/// One leg of a settlement against a caller's holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    /// Remove `amount` of `asset` from `owner`.
    Debit {
        /// Holder being debited.
        owner: Address,
        /// Asset being debited.
        asset: AssetId,
        /// Base units removed.
        amount: Amount,
    },
    /// Add `amount` of `asset` to `owner`.
    Credit {
        /// Holder being credited.
        owner: Address,
        /// Asset being credited.
        asset: AssetId,
        /// Base units added.
        amount: Amount,
    },
}

/// The ledger of caller-held balances.
///
/// # Contract
///
/// [`settle`](Holdings::settle) is all-or-nothing: if any movement fails,
/// no balance changes. A debit larger than the holding fails with
/// [`SettlementError::InsufficientFunds`]; a credit past `u128::MAX` fails
/// with [`SettlementError::ArithmeticOverflow`].
pub trait Holdings {
    /// Balance of `asset` held by `owner` (zero if none).
    #[must_use]
    fn balance(&self, owner: &Address, asset: &AssetId) -> Amount;

    /// Applies every movement in order, atomically.
    ///
    /// # Errors
    ///
    /// See the trait-level contract.
    fn settle(&mut self, movements: &[Movement]) -> Result<(), SettlementError>;
}

/// In-process [`Holdings`] backed by a hash map.
///
/// [`fund`](Self::fund) stands in for the funding path of the hosting
/// ledger (minting, faucets) and is what tests and the demo use to give
/// callers a starting balance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryHoldings {
    balances: HashMap<(Address, AssetId), Amount>,
}

impl InMemoryHoldings {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to a holding and returns the new balance.
    ///
    /// # Errors
    ///
    /// Returns [`SettlementError::ArithmeticOverflow`] if the balance would
    /// exceed `u128::MAX`.
    pub fn fund(
        &mut self,
        owner: Address,
        asset: AssetId,
        amount: Amount,
    ) -> Result<Amount, SettlementError> {
        self.settle(&[Movement::Credit {
            owner,
            asset,
            amount,
        }])?;
        Ok(self.balance(&owner, &asset))
    }
}

impl Holdings for InMemoryHoldings {
    fn balance(&self, owner: &Address, asset: &AssetId) -> Amount {
        self.balances
            .get(&(*owner, *asset))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn settle(&mut self, movements: &[Movement]) -> Result<(), SettlementError> {
        let mut staged: HashMap<(Address, AssetId), Amount> = HashMap::new();

        for movement in movements {
            match *movement {
                Movement::Debit {
                    owner,
                    asset,
                    amount,
                } => {
                    let current = staged
                        .get(&(owner, asset))
                        .copied()
                        .unwrap_or_else(|| self.balance(&owner, &asset));
                    let next = current.checked_sub(&amount).ok_or(
                        SettlementError::InsufficientFunds {
                            required: amount,
                            available: current,
                        },
                    )?;
                    staged.insert((owner, asset), next);
                }
                Movement::Credit {
                    owner,
                    asset,
                    amount,
                } => {
                    let current = staged
                        .get(&(owner, asset))
                        .copied()
                        .unwrap_or_else(|| self.balance(&owner, &asset));
                    let next = current.safe_add(&amount, "holding credit")?;
                    staged.insert((owner, asset), next);
                }
            }
        }

        self.balances.extend(staged);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn alice() -> Address {
        Address::from_bytes([0xa1; 32])
    }

    fn usdc() -> AssetId {
        AssetId::from_bytes([1u8; 32])
    }

    fn weth() -> AssetId {
        AssetId::from_bytes([2u8; 32])
    }

    #[test]
    fn unknown_holding_is_zero() {
        assert_eq!(InMemoryHoldings::new().balance(&alice(), &usdc()), Amount::ZERO);
    }

    #[test]
    fn fund_accumulates() {
        let mut h = InMemoryHoldings::new();
        let Ok(_) = h.fund(alice(), usdc(), Amount::new(10)) else {
            panic!("expected Ok");
        };
        let Ok(total) = h.fund(alice(), usdc(), Amount::new(5)) else {
            panic!("expected Ok");
        };
        assert_eq!(total, Amount::new(15));
    }

    #[test]
    fn settle_applies_all_legs() {
        let mut h = InMemoryHoldings::new();
        let Ok(_) = h.fund(alice(), usdc(), Amount::new(100)) else {
            panic!("expected Ok");
        };
        let result = h.settle(&[
            Movement::Debit {
                owner: alice(),
                asset: usdc(),
                amount: Amount::new(10),
            },
            Movement::Credit {
                owner: alice(),
                asset: weth(),
                amount: Amount::new(8),
            },
        ]);
        assert_eq!(result, Ok(()));
        assert_eq!(h.balance(&alice(), &usdc()), Amount::new(90));
        assert_eq!(h.balance(&alice(), &weth()), Amount::new(8));
    }

    #[test]
    fn failed_leg_leaves_everything_untouched() {
        let mut h = InMemoryHoldings::new();
        let Ok(_) = h.fund(alice(), usdc(), Amount::new(100)) else {
            panic!("expected Ok");
        };
        let Ok(_) = h.fund(alice(), weth(), Amount::new(3)) else {
            panic!("expected Ok");
        };
        let before = h.clone();

        let result = h.settle(&[
            Movement::Debit {
                owner: alice(),
                asset: usdc(),
                amount: Amount::new(50),
            },
            Movement::Debit {
                owner: alice(),
                asset: weth(),
                amount: Amount::new(4),
            },
        ]);
        assert_eq!(
            result,
            Err(SettlementError::InsufficientFunds {
                required: Amount::new(4),
                available: Amount::new(3),
            })
        );
        assert_eq!(h, before);
    }

    #[test]
    fn repeated_debits_see_staged_balance() {
        let mut h = InMemoryHoldings::new();
        let Ok(_) = h.fund(alice(), usdc(), Amount::new(10)) else {
            panic!("expected Ok");
        };
        let debit = Movement::Debit {
            owner: alice(),
            asset: usdc(),
            amount: Amount::new(6),
        };
        let Err(SettlementError::InsufficientFunds { available, .. }) =
            h.settle(&[debit, debit])
        else {
            panic!("expected InsufficientFunds");
        };
        assert_eq!(available, Amount::new(4));
        assert_eq!(h.balance(&alice(), &usdc()), Amount::new(10));
    }

    #[test]
    fn credit_overflow_rejected() {
        let mut h = InMemoryHoldings::new();
        let Ok(_) = h.fund(alice(), usdc(), Amount::MAX) else {
            panic!("expected Ok");
        };
        assert_eq!(
            h.fund(alice(), usdc(), Amount::new(1)),
            Err(SettlementError::ArithmeticOverflow("holding credit"))
        );
    }
}
