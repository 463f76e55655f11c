//! # Pipeline Value Types
//!
//! Immutable value types flowing through the conversion pipeline: input
//! tiers, rescaled price changes, and the packed output registers.

pub use ethnum::U256;

/// One promotional pricing entry as supplied by a UI or config file.
///
/// All fields are decimal strings; parsing and validation happen inside the
/// pipeline so that malformed input is reported with the raw value intact.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingTier {
    /// Nominal display price, as a percentage of the unit token price
    pub price: String,
    /// Bonus window days component
    pub duration_days: String,
    /// Bonus window hours component
    pub duration_hours: String,
    /// Bonus window minutes component
    pub duration_minutes: String,
}

impl PricingTier {
    pub fn new(
        price: impl Into<String>,
        days: impl Into<String>,
        hours: impl Into<String>,
        minutes: impl Into<String>,
    ) -> Self {
        Self {
            price: price.into(),
            duration_days: days.into(),
            duration_hours: hours.into(),
            duration_minutes: minutes.into(),
        }
    }
}

/// A rescaled price change: integer token amount plus window in seconds.
///
/// Values are carried at full width so an out-of-range amount reaches the
/// packing validation unclipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceChange {
    /// Token amount, non-negative
    pub price: u128,
    /// Window length in seconds, non-negative
    pub duration: u128,
}

/// The two packed output registers.
///
/// `register0` folds entries 0-3, `register1` folds entries 4-7. Each is at
/// most 56 decimal digits; rendering is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedRegisters {
    pub register0: U256,
    pub register1: U256,
}
