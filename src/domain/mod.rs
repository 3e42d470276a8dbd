//! Value types of the settlement domain.
//!
//! Assets, amounts, fees, and the ephemeral request/result records that
//! flow through the engines. All types are newtypes or small structs with
//! validated constructors, so an instance that exists is already valid.

mod amount;
mod asset_id;
mod asset_pair;
mod basis_points;
mod decimals;
mod direction;
mod fee_tier;
mod liquidity_deposit;
mod reserves;
mod rounding;
mod swap_request;
mod swap_result;

pub use amount::Amount;
pub use asset_id::AssetId;
pub use asset_pair::AssetPair;
pub use basis_points::BasisPoints;
pub use decimals::Decimals;
pub use direction::SwapDirection;
pub use fee_tier::FeeTier;
pub use liquidity_deposit::LiquidityDeposit;
pub use reserves::Reserves;
pub use rounding::Rounding;
pub use swap_request::SwapRequest;
pub use swap_result::SwapResult;
