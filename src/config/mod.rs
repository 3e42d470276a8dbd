//! Exchange configuration.
//!
//! [`ExchangeConfig`] holds the immutable parameters an
//! [`Exchange`](crate::engine::Exchange) is built from: the program
//! namespace for address derivation, the optional swap fee, and the display
//! scaling used by the presentation layer.

mod exchange;

pub use exchange::ExchangeConfig;
