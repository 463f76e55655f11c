//! # Packing Constants
//!
//! Layout constants for the two-register price encoding:
//! - Field and block widths in decimal digits
//! - Entry limits per register and per packing call
//! - Duration unit conversions
//! - Rescaling parameters

// ============================================================================
// Field and Block Layout
// ============================================================================

/// Decimal digits reserved for one packed field (price or duration)
pub const PACK_FIELD_DIGITS: u32 = 7;

/// Exclusive upper bound for a packed field; also the base-10 shift that
/// places a duration above the price digits
pub const PACK_FIELD_MAX: u128 = 10u128.pow(PACK_FIELD_DIGITS);

/// Decimal digits occupied by one packed (price, duration) block
pub const PACK_BLOCK_DIGITS: u32 = 2 * PACK_FIELD_DIGITS;

/// Base-10 shift that places one block above the next in a register
pub const PACK_BLOCK_MAX: u128 = 10u128.pow(PACK_BLOCK_DIGITS);

// ============================================================================
// Entry Limits
// ============================================================================

/// Blocks folded into a single register
pub const MAX_ENTRIES_PER_REGISTER: usize = 4;

/// Entries accepted by one packing call (two registers)
pub const MAX_TOTAL_ENTRIES: usize = 2 * MAX_ENTRIES_PER_REGISTER;

/// Input tiers admissible per conversion; the synthetic final-price entry
/// occupies the remaining slot
pub const MAX_INPUT_TIERS: usize = MAX_TOTAL_ENTRIES - 1;

// ============================================================================
// Duration Constants (in seconds)
// ============================================================================

/// Seconds per day
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Seconds per hour
pub const SECONDS_PER_HOUR: u64 = 3_600;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Duration assigned to the synthetic final-price entry
pub const FINAL_PRICE_DURATION_SECS: u128 = 1;

// ============================================================================
// Rescaling Constants
// ============================================================================

/// Denominator of the nominal-price percentage in the rescale formula
pub const PERCENT_DENOMINATOR: u64 = 100;
