//! # Tierpack Core - Price Tier Packing
//!
//! Converts an ordered table of promotional pricing tiers into the two
//! fixed-width decimal-encoded big integers a constrained transaction
//! payload expects. It provides:
//!
//! - Duration normalization from {days, hours, minutes} strings to seconds
//! - Nominal-price rescaling into integer token amounts
//! - Range validation and the two-register digit-packing algorithm
//! - Layout constants and typed errors
//!
//! The pipeline is pure and synchronous; printing, configuration, and any
//! other boundary concerns live in the CLI crate.
//!
//! ## Feature Flags
//!
//! - `client`: Enables serde serialization on the value types

pub mod constants;
pub mod convert;
pub mod errors;
pub mod pack;
pub mod types;

// Re-export commonly used items
pub use constants::*;
pub use convert::{bonus_duration_secs, convert_tiers, rescale_tiers};
pub use errors::{CoreResult, TierPackError};
pub use pack::{pack_changes, pack_single};
pub use types::{PackedRegisters, PriceChange, PricingTier, U256};
