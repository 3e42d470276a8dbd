//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use cp_settlement::prelude::*;
//! ```

pub use crate::address::Address;
pub use crate::config::ExchangeConfig;
pub use crate::custody::{Holdings, InMemoryHoldings, Movement, Vault};
pub use crate::domain::{
    Amount, AssetId, AssetPair, BasisPoints, Decimals, FeeTier, LiquidityDeposit, Reserves,
    Rounding, SwapDirection, SwapRequest, SwapResult,
};
pub use crate::engine::Exchange;
pub use crate::error::SettlementError;
pub use crate::math::CheckedArithmetic;
pub use crate::pool::{Liquidity, PoolHandles, PoolState, PoolStatus};
