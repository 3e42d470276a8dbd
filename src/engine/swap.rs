//! Exact-input swaps against the constant-product curve.
//!
//! # Algorithm (`direction = AToB`)
//!
//! 1. `fee = ceil(amount_in × fee_bps / 10 000)`
//! 2. `net_in = amount_in − fee`
//! 3. `amount_out = floor(net_in × reserve_b / (reserve_a + net_in))`
//! 4. `vault_a += amount_in` (the fee stays in the pool)
//! 5. `vault_b -= amount_out`
//!
//! Step 4 and 5 are checked against `k` before anything is settled.

use super::{rejected, Exchange};
use crate::address::Address;
use crate::custody::{Holdings, Movement, PoolSigner};
use crate::domain::{Amount, FeeTier, Reserves, SwapRequest, SwapResult};
use crate::error::SettlementError;
use crate::math::{invariant_preserved, quote_exact_in, CheckedArithmetic};

/// Output and fee of a swap that passed every pricing check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Priced {
    fee: Amount,
    amount_out: Amount,
}

/// Prices `request` against `reserves` without touching any balance.
fn price(
    reserves: &Reserves,
    swap_fee: FeeTier,
    request: &SwapRequest,
) -> Result<Priced, SettlementError> {
    let (reserve_in, reserve_out) = reserves.oriented(request.direction());
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(SettlementError::InsufficientLiquidity);
    }

    let fee = swap_fee.fee_on(request.amount_in())?;
    let net_in = request.amount_in().safe_sub(&fee, "amount_in - fee")?;
    if net_in.is_zero() {
        return Err(SettlementError::ZeroAmount("net input after fee is zero"));
    }

    let amount_out = quote_exact_in(net_in, reserve_in, reserve_out)?;
    if amount_out < request.minimum_amount_out() {
        return Err(SettlementError::SlippageExceeded {
            minimum: request.minimum_amount_out(),
            computed: amount_out,
        });
    }
    if amount_out >= reserve_out {
        return Err(SettlementError::InsufficientLiquidity);
    }

    Ok(Priced { fee, amount_out })
}

impl<H: Holdings> Exchange<H> {
    /// Sells `request.amount_in()` of the input asset for the output asset.
    ///
    /// `caller` is debited the full input and credited the computed output
    /// in one settlement; the vaults move by the same amounts. The returned
    /// [`SwapResult`] carries the reserves after the swap.
    ///
    /// # Errors
    ///
    /// - [`SettlementError::PoolNotFound`] if no pool exists at `pool`.
    /// - [`SettlementError::DerivationMismatch`] if the stored record no
    ///   longer matches its derivation.
    /// - [`SettlementError::InsufficientLiquidity`] if either reserve is
    ///   zero, or the output would drain the output vault.
    ///
    /// An output that truncates to zero still settles when
    /// `request.minimum_amount_out()` is zero: the input joins the reserves.
    /// - [`SettlementError::ZeroAmount`] if the fee consumes the whole input.
    /// - [`SettlementError::SlippageExceeded`] if the output is below
    ///   `request.minimum_amount_out()`.
    /// - [`SettlementError::ArithmeticOverflow`] if pricing or a vault
    ///   balance leaves the `u128` range.
    /// - [`SettlementError::InvariantViolation`] if the reserve product
    ///   would decrease.
    /// - [`SettlementError::InsufficientFunds`] if `caller` cannot cover the
    ///   input.
    pub fn swap(
        &mut self,
        caller: Address,
        pool: &Address,
        request: &SwapRequest,
    ) -> Result<SwapResult, SettlementError> {
        self.settle_swap(caller, pool, request)
            .map_err(|e| rejected("swap", pool, e))
    }

    /// Output `swap` would produce right now, without settling anything.
    ///
    /// # Errors
    ///
    /// The pool and pricing errors of [`swap`](Self::swap); holdings are
    /// not consulted.
    pub fn quote(&self, pool: &Address, request: &SwapRequest) -> Result<Amount, SettlementError> {
        let account = self.account(pool)?;
        Ok(price(&account.reserves(), self.config.swap_fee(), request)?.amount_out)
    }

    fn settle_swap(
        &mut self,
        caller: Address,
        pool: &Address,
        request: &SwapRequest,
    ) -> Result<SwapResult, SettlementError> {
        let account = self.pools.get_mut(pool).ok_or(SettlementError::PoolNotFound)?;
        account.state.verify(self.config.program_id())?;

        let direction = request.direction();
        let before = account.reserves();
        let priced = price(&before, self.config.swap_fee(), request)?;

        let signer = PoolSigner::new(*account.state.address());
        let (vault_in, vault_out) = account.vaults(direction);
        let credit = vault_in.plan_credit(&signer, request.amount_in())?;
        let debit = vault_out.plan_debit(&signer, priced.amount_out)?;

        let after = Reserves::from_oriented(direction, credit.balance(), debit.balance());
        if !invariant_preserved(&before, &after) {
            tracing::error!(%pool, %before, %after, "reserve product decreased");
            return Err(SettlementError::InvariantViolation);
        }
        let result = SwapResult::new(request.amount_in(), priced.amount_out, priced.fee, after)?;

        let (asset_in, asset_out) = account.state.pair()?.route(direction);
        self.holdings.settle(&[
            Movement::Debit {
                owner: caller,
                asset: asset_in,
                amount: request.amount_in(),
            },
            Movement::Credit {
                owner: caller,
                asset: asset_out,
                amount: priced.amount_out,
            },
        ])?;

        let (vault_in, vault_out) = account.vaults_mut(direction);
        vault_in.apply(credit);
        vault_out.apply(debit);

        tracing::info!(
            %pool,
            %caller,
            %direction,
            amount_in = %request.amount_in(),
            amount_out = %priced.amount_out,
            fee = %priced.fee,
            reserves = %after,
            "swap settled"
        );
        Ok(result)
    }
}
