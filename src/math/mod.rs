//! Overflow-checked arithmetic and constant-product pricing.
//!
//! Settlement never touches floating point. [`CheckedArithmetic`] turns
//! every overflow into an error, [`quote_exact_in`] prices a trade with
//! truncating division, and [`invariant_preserved`] compares reserve
//! products at 256-bit width so the check itself cannot overflow.

mod checked;
mod constant_product;

pub use checked::CheckedArithmetic;
pub use constant_product::{
    invariant, invariant_preserved, quote_exact_in, wide_mul, WideProduct,
};
