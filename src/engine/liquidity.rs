//! Deposits into a pool's vaults.

use super::{rejected, Exchange};
use crate::address::Address;
use crate::custody::{Holdings, Movement, PoolSigner};
use crate::domain::{Amount, LiquidityDeposit, Reserves};
use crate::error::SettlementError;

impl<H: Holdings> Exchange<H> {
    /// Moves `amount_a` and `amount_b` from `caller` into the pool's vaults.
    ///
    /// Any ratio is accepted and no share is issued; the deposit simply
    /// becomes reserve. Both legs settle together or not at all. Returns
    /// the reserves after the deposit.
    ///
    /// # Errors
    ///
    /// - [`SettlementError::ZeroAmount`] if either amount is zero.
    /// - [`SettlementError::PoolNotFound`] if no pool exists at `pool`.
    /// - [`SettlementError::DerivationMismatch`] if the stored record no
    ///   longer matches its derivation.
    /// - [`SettlementError::ArithmeticOverflow`] if a vault balance would
    ///   exceed `u128::MAX`.
    /// - [`SettlementError::InsufficientFunds`] if `caller` cannot cover
    ///   either amount.
    pub fn add_liquidity(
        &mut self,
        caller: Address,
        pool: &Address,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<Reserves, SettlementError> {
        let deposit =
            LiquidityDeposit::new(amount_a, amount_b).map_err(|e| rejected("add_liquidity", pool, e))?;
        self.deposit(caller, pool, &deposit)
            .map_err(|e| rejected("add_liquidity", pool, e))
    }

    fn deposit(
        &mut self,
        caller: Address,
        pool: &Address,
        deposit: &LiquidityDeposit,
    ) -> Result<Reserves, SettlementError> {
        let account = self.pools.get_mut(pool).ok_or(SettlementError::PoolNotFound)?;
        account.state.verify(self.config.program_id())?;

        let signer = PoolSigner::new(*account.state.address());
        let credit_a = account.vault_a.plan_credit(&signer, deposit.amount_a())?;
        let credit_b = account.vault_b.plan_credit(&signer, deposit.amount_b())?;

        self.holdings.settle(&[
            Movement::Debit {
                owner: caller,
                asset: account.state.asset_a(),
                amount: deposit.amount_a(),
            },
            Movement::Debit {
                owner: caller,
                asset: account.state.asset_b(),
                amount: deposit.amount_b(),
            },
        ])?;

        account.vault_a.apply(credit_a);
        account.vault_b.apply(credit_b);

        let reserves = account.reserves();
        tracing::info!(
            %pool,
            %caller,
            amount_a = %deposit.amount_a(),
            amount_b = %deposit.amount_b(),
            %reserves,
            "liquidity added"
        );
        Ok(reserves)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::super::tests::{authority, exchange, fund, seeded, trader, usdc, weth};
    use super::*;

    #[test]
    fn deposit_moves_both_legs() {
        let mut ex = exchange();
        let Ok(handles) = ex.initialize_pool(authority(), usdc(), weth()) else {
            panic!("expected Ok");
        };
        fund(&mut ex, trader(), usdc(), 100);
        fund(&mut ex, trader(), weth(), 70);

        let result = ex.add_liquidity(trader(), &handles.pool, Amount::new(60), Amount::new(20));
        assert_eq!(result, Ok(Reserves::new(Amount::new(60), Amount::new(20))));
        assert_eq!(ex.holdings().balance(&trader(), &usdc()), Amount::new(40));
        assert_eq!(ex.holdings().balance(&trader(), &weth()), Amount::new(50));
    }

    #[test]
    fn deposits_accumulate_at_any_ratio() {
        let mut ex = exchange();
        let handles = seeded(&mut ex, 50, 50);
        fund(&mut ex, trader(), usdc(), 1);
        fund(&mut ex, trader(), weth(), 1_000);
        let result = ex.add_liquidity(trader(), &handles.pool, Amount::new(1), Amount::new(1_000));
        assert_eq!(result, Ok(Reserves::new(Amount::new(51), Amount::new(1_050))));
    }

    #[test]
    fn zero_amounts_rejected() {
        let mut ex = exchange();
        let Ok(handles) = ex.initialize_pool(authority(), usdc(), weth()) else {
            panic!("expected Ok");
        };
        fund(&mut ex, trader(), usdc(), 10);
        fund(&mut ex, trader(), weth(), 10);
        for (a, b) in [(0, 5), (5, 0), (0, 0)] {
            let Err(SettlementError::ZeroAmount(_)) =
                ex.add_liquidity(trader(), &handles.pool, Amount::new(a), Amount::new(b))
            else {
                panic!("expected ZeroAmount");
            };
        }
        assert_eq!(ex.reserves(&handles.pool), Ok(Reserves::default()));
    }

    #[test]
    fn unknown_pool_rejected() {
        let mut ex = exchange();
        assert_eq!(
            ex.add_liquidity(
                trader(),
                &Address::from_bytes([0x44; 32]),
                Amount::new(1),
                Amount::new(1)
            ),
            Err(SettlementError::PoolNotFound)
        );
    }

    #[test]
    fn one_short_leg_moves_nothing() {
        let mut ex = exchange();
        let Ok(handles) = ex.initialize_pool(authority(), usdc(), weth()) else {
            panic!("expected Ok");
        };
        fund(&mut ex, trader(), usdc(), 100);
        fund(&mut ex, trader(), weth(), 9);

        assert_eq!(
            ex.add_liquidity(trader(), &handles.pool, Amount::new(100), Amount::new(10)),
            Err(SettlementError::InsufficientFunds {
                required: Amount::new(10),
                available: Amount::new(9),
            })
        );
        assert_eq!(ex.reserves(&handles.pool), Ok(Reserves::default()));
        assert_eq!(ex.holdings().balance(&trader(), &usdc()), Amount::new(100));
        assert_eq!(ex.holdings().balance(&trader(), &weth()), Amount::new(9));
    }

    #[test]
    fn vault_overflow_rejected_before_debit() {
        let mut ex = exchange();
        let handles = seeded(&mut ex, u128::MAX, 1);
        fund(&mut ex, trader(), usdc(), 1);
        fund(&mut ex, trader(), weth(), 1);

        assert_eq!(
            ex.add_liquidity(trader(), &handles.pool, Amount::new(1), Amount::new(1)),
            Err(SettlementError::ArithmeticOverflow("vault credit"))
        );
        assert_eq!(ex.holdings().balance(&trader(), &usdc()), Amount::new(1));
        assert_eq!(
            ex.reserves(&handles.pool),
            Ok(Reserves::new(Amount::MAX, Amount::new(1)))
        );
    }
}
