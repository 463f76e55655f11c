//! # Tier Conversion
//!
//! Normalizes tier durations to seconds, rescales nominal prices into
//! integer token amounts, and drives the full tier-to-registers pipeline.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{
    FINAL_PRICE_DURATION_SECS, PERCENT_DENOMINATOR, SECONDS_PER_DAY, SECONDS_PER_HOUR,
    SECONDS_PER_MINUTE,
};
use crate::errors::{CoreResult, TierPackError};
use crate::pack::pack_changes;
use crate::types::{PackedRegisters, PriceChange, PricingTier};

/// Total bonus-window length of a tier in seconds.
///
/// Each component must be a non-negative base-10 integer; no range check is
/// applied here, packing enforces the bounds later.
pub fn bonus_duration_secs(tier: &PricingTier) -> CoreResult<u128> {
    let days = parse_duration_component(&tier.duration_days)?;
    let hours = parse_duration_component(&tier.duration_hours)?;
    let minutes = parse_duration_component(&tier.duration_minutes)?;

    // Widened before multiplying: u64 components can never overflow u128 here
    Ok(days as u128 * SECONDS_PER_DAY as u128
        + hours as u128 * SECONDS_PER_HOUR as u128
        + minutes as u128 * SECONDS_PER_MINUTE as u128)
}

fn parse_duration_component(raw: &str) -> CoreResult<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| TierPackError::MalformedDuration(raw.to_string()))
}

/// Rescale every tier into a price change and append the final-price entry.
///
/// The token amount is `round(nominal * unit_token_price / 100 +
/// unit_token_price)`, computed in decimal arithmetic and rounded half away
/// from zero. The appended entry carries the permanent price that applies
/// once all bonus windows have elapsed; it is present even for an empty tier
/// list.
pub fn rescale_tiers(
    tiers: &[PricingTier],
    unit_token_price: u64,
) -> CoreResult<Vec<PriceChange>> {
    let mut changes = Vec::with_capacity(tiers.len() + 1);

    for tier in tiers {
        changes.push(PriceChange {
            price: rescale_price(&tier.price, unit_token_price)?,
            duration: bonus_duration_secs(tier)?,
        });
    }

    changes.push(PriceChange {
        price: unit_token_price as u128,
        duration: FINAL_PRICE_DURATION_SECS,
    });

    Ok(changes)
}

fn rescale_price(raw: &str, unit_token_price: u64) -> CoreResult<u128> {
    let nominal = Decimal::from_str(raw.trim())
        .ok()
        .filter(|d| !d.is_sign_negative())
        .ok_or_else(|| TierPackError::MalformedPrice(raw.to_string()))?;

    let unit = Decimal::from(unit_token_price);
    let amount = nominal
        .checked_mul(unit)
        .and_then(|v| v.checked_div(Decimal::from(PERCENT_DENOMINATOR)))
        .and_then(|v| v.checked_add(unit))
        .ok_or(TierPackError::MathOverflow)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    amount.to_u128().ok_or(TierPackError::MathOverflow)
}

/// Convert a tier table straight through to the two packed registers.
pub fn convert_tiers(
    tiers: &[PricingTier],
    unit_token_price: u64,
) -> CoreResult<PackedRegisters> {
    let changes = rescale_tiers(tiers, unit_token_price)?;
    pack_changes(&changes)
}
