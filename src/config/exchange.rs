//! Configuration of an [`Exchange`](crate::engine::Exchange) instance.

use crate::address::Address;
use crate::domain::{Decimals, FeeTier};
use crate::error::SettlementError;

/// Immutable parameters shared by every pool an exchange hosts.
///
/// - `program_id` namespaces every derived address, so two exchanges never
///   share pool or vault locations.
/// - `swap_fee` is withheld from swap input before pricing. The default is
///   [`FeeTier::NONE`].
/// - `display_decimals` is only consulted by the presentation layer.
///
/// # Validation
///
/// - `program_id` must not be all zeros.
/// - `swap_fee` must be strictly below 100%.
///
/// # Examples
///
/// ```
/// use cp_settlement::address::Address;
/// use cp_settlement::config::ExchangeConfig;
///
/// let cfg = ExchangeConfig::new(Address::from_bytes([7u8; 32])).expect("valid");
/// assert!(cfg.swap_fee().is_zero());
/// assert_eq!(cfg.display_decimals().get(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExchangeConfig {
    program_id: Address,
    #[cfg_attr(feature = "serde", serde(default))]
    swap_fee: FeeTier,
    #[cfg_attr(feature = "serde", serde(default))]
    display_decimals: Decimals,
}

impl ExchangeConfig {
    /// Creates a fee-less configuration with six display decimals.
    ///
    /// # Errors
    ///
    /// Returns [`SettlementError::InvalidConfiguration`] if `program_id` is
    /// all zeros.
    pub fn new(program_id: Address) -> Result<Self, SettlementError> {
        let config = Self {
            program_id,
            swap_fee: FeeTier::NONE,
            display_decimals: Decimals::SIX,
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy with `swap_fee` replaced.
    ///
    /// # Errors
    ///
    /// Returns [`SettlementError::InvalidConfiguration`] if the fee is 100%
    /// or more.
    pub fn with_swap_fee(self, swap_fee: FeeTier) -> Result<Self, SettlementError> {
        let config = Self { swap_fee, ..self };
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy with `display_decimals` replaced.
    #[must_use]
    pub const fn with_display_decimals(self, display_decimals: Decimals) -> Self {
        Self {
            display_decimals,
            ..self
        }
    }

    /// Validates all configuration invariants.
    ///
    /// Deserialized configurations skip the constructors, so the exchange
    /// calls this again when it is built.
    ///
    /// # Errors
    ///
    /// Returns [`SettlementError::InvalidConfiguration`] naming the first
    /// violated rule.
    pub fn validate(&self) -> Result<(), SettlementError> {
        if self.program_id.as_bytes().iter().all(|b| *b == 0) {
            return Err(SettlementError::InvalidConfiguration(
                "program_id must not be zero",
            ));
        }
        if self.swap_fee.basis_points() >= crate::domain::BasisPoints::MAX_PERCENT {
            return Err(SettlementError::InvalidConfiguration(
                "swap fee must be below 100%",
            ));
        }
        Ok(())
    }

    /// Namespace of every derived address.
    #[must_use]
    pub const fn program_id(&self) -> &Address {
        &self.program_id
    }

    /// Fee withheld from swap input.
    #[must_use]
    pub const fn swap_fee(&self) -> FeeTier {
        self.swap_fee
    }

    /// Decimal exponent used when presenting amounts.
    #[must_use]
    pub const fn display_decimals(&self) -> Decimals {
        self.display_decimals
    }
}
