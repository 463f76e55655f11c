//! # Digit Packer
//!
//! Encodes validated (price, duration) pairs into 14-digit decimal blocks
//! and folds up to four blocks into each of the two output registers.

use std::ops::Range;

use ethnum::U256;

use crate::constants::{MAX_ENTRIES_PER_REGISTER, MAX_TOTAL_ENTRIES, PACK_BLOCK_MAX, PACK_FIELD_MAX};
use crate::errors::{CoreResult, TierPackError};
use crate::types::{PackedRegisters, PriceChange};

/// Encode one price change as a single decimal block.
///
/// The low 7 digits hold the token amount and the next 7 the duration; the
/// range check guarantees each field fits its 7 digits, so the two never
/// collide.
pub fn pack_single(change: &PriceChange) -> CoreResult<U256> {
    if change.price == 0 || change.price >= PACK_FIELD_MAX {
        return Err(TierPackError::PriceOutOfRange(change.price));
    }

    if change.duration == 0 || change.duration >= PACK_FIELD_MAX {
        return Err(TierPackError::DurationOutOfRange(change.duration));
    }

    Ok(U256::new(change.duration) * U256::new(PACK_FIELD_MAX) + U256::new(change.price))
}

/// Pack up to eight price changes into two registers.
///
/// Entries 0-3 land in `register0`, entries 4-7 in `register1`. Every entry
/// is validated before any register arithmetic starts; a single bad entry
/// fails the whole call.
pub fn pack_changes(changes: &[PriceChange]) -> CoreResult<PackedRegisters> {
    if changes.len() > MAX_TOTAL_ENTRIES {
        return Err(TierPackError::TooManyEntries(changes.len()));
    }

    let blocks: Vec<U256> = changes.iter().map(pack_single).collect::<CoreResult<_>>()?;

    let register0 = fold_register(&blocks, 0..MAX_ENTRIES_PER_REGISTER);
    let register1 = if blocks.len() > MAX_ENTRIES_PER_REGISTER {
        fold_register(&blocks, MAX_ENTRIES_PER_REGISTER..MAX_TOTAL_ENTRIES)
    } else {
        U256::ZERO
    };

    Ok(PackedRegisters { register0, register1 })
}

/// Fold the blocks at the given positions into one register, highest index
/// first, so that position `i` ends up weighted by `10^(14*i)`.
///
/// Positions past the end of `blocks` are skipped without shifting the
/// accumulator; a register of four blocks stays under 10^56, far inside
/// `U256` range.
fn fold_register(blocks: &[U256], positions: Range<usize>) -> U256 {
    let mut register = U256::ZERO;

    for i in positions.rev() {
        if i >= blocks.len() {
            continue;
        }
        register = register * U256::new(PACK_BLOCK_MAX) + blocks[i];
    }

    register
}
