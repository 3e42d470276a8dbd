//! # cp-settlement
//!
//! Settlement core for constant-product (`x · y = k`) liquidity pools.
//!
//! Each pool binds an unordered pair of assets to two vaults whose
//! addresses are derived deterministically from the pair, so any caller
//! can recompute where a pool lives. Liquidity is deposited into the
//! vaults at any ratio; swaps are priced exact-in against the current
//! vault balances with truncating integer math, gated by a slippage
//! floor, and settled atomically against the caller's holdings.
//!
//! # Quick Start
//!
//! ```rust
//! use cp_settlement::prelude::*;
//!
//! let program = Address::from_bytes([7u8; 32]);
//! let config = ExchangeConfig::new(program).expect("valid config");
//! let mut exchange = Exchange::new(config, InMemoryHoldings::new()).expect("exchange");
//!
//! let usdc = AssetId::from_bytes([1u8; 32]);
//! let weth = AssetId::from_bytes([2u8; 32]);
//! let lp = Address::from_bytes([0x21; 32]);
//! let trader = Address::from_bytes([0x42; 32]);
//!
//! // 1. Create the pool; vaults open empty.
//! let pool = exchange.initialize_pool(lp, usdc, weth).expect("pool created").pool;
//!
//! // 2. Fund callers and seed 50 / 50 reserves.
//! exchange.holdings_mut().fund(lp, usdc, Amount::new(50)).expect("funded");
//! exchange.holdings_mut().fund(lp, weth, Amount::new(50)).expect("funded");
//! exchange.holdings_mut().fund(trader, usdc, Amount::new(10)).expect("funded");
//! exchange
//!     .add_liquidity(lp, &pool, Amount::new(50), Amount::new(50))
//!     .expect("deposited");
//!
//! // 3. Sell 10 of asset A, accepting no less than 5 of asset B.
//! let request = SwapRequest::new(Amount::new(10), Amount::new(5), SwapDirection::AToB)
//!     .expect("non-zero input");
//! let result = exchange.swap(trader, &pool, &request).expect("swap settled");
//!
//! assert_eq!(result.amount_out(), Amount::new(8));
//! assert_eq!(result.reserves(), Reserves::new(Amount::new(60), Amount::new(42)));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Exchange   │  initialize_pool, add_liquidity, swap, queries
//! └──────┬───────┘
//!        │ PoolSigner (crate-private authority)
//!        ▼
//! ┌──────────────┐     ┌──────────────┐
//! │    Vaults    │     │   Holdings   │  caller balances, all-or-nothing settle
//! └──────┬───────┘     └──────────────┘
//!        │ balances are the reserves
//!        ▼
//! ┌──────────────┐
//! │     Math     │  checked u128, exact-in quote, 256-bit invariant
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`AssetPair`](domain::AssetPair), [`SwapRequest`](domain::SwapRequest), etc. |
//! | [`address`] | [`Address`](address::Address) and salted address derivation |
//! | [`config`] | [`ExchangeConfig`](config::ExchangeConfig) |
//! | [`custody`] | [`Vault`](custody::Vault), [`Holdings`](custody::Holdings), [`InMemoryHoldings`](custody::InMemoryHoldings) |
//! | [`pool`] | [`PoolState`](pool::PoolState), [`PoolHandles`](pool::PoolHandles), [`PoolStatus`](pool::PoolStatus) |
//! | [`engine`] | [`Exchange`](engine::Exchange): the operations |
//! | [`math`] | Checked arithmetic and constant-product pricing |
//! | [`error`] | [`SettlementError`](error::SettlementError) unified error enum |
//! | [`prelude`] | Convenience re-exports |
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize` / `Deserialize` on config and value types |

pub mod address;
pub mod config;
pub mod custody;
pub mod domain;
pub mod engine;
pub mod error;
pub mod math;
pub mod pool;
pub mod prelude;
