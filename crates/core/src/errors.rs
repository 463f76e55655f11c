//! # Error Types
//!
//! All failure modes of the conversion pipeline. Every variant that concerns
//! a specific input carries the offending value for diagnostics.

use thiserror::Error;

use crate::constants::MAX_TOTAL_ENTRIES;

/// Errors produced while converting and packing price tiers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum TierPackError {
    /// A duration component was not a non-negative base-10 integer
    #[error("Malformed duration component: {0:?}")]
    MalformedDuration(String),

    /// A nominal price was not a non-negative decimal number
    #[error("Malformed price: {0:?}")]
    MalformedPrice(String),

    /// Rescaling arithmetic exceeded the decimal range
    #[error("Math overflow")]
    MathOverflow,

    /// More entries than the two registers can hold
    #[error("Price changes cannot contain more than {MAX_TOTAL_ENTRIES} items: got {0}")]
    TooManyEntries(usize),

    /// A token amount outside the open packing range
    #[error("Price out of range: {0}")]
    PriceOutOfRange(u128),

    /// A duration outside the open packing range
    #[error("Duration out of range: {0}")]
    DurationOutOfRange(u128),
}

/// Result type using pipeline errors
pub type CoreResult<T> = Result<T, TierPackError>;
