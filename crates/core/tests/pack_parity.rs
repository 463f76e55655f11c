//! # Packing Parity Tests
//!
//! End-to-end checks that the tier pipeline produces the exact register
//! digit layout, with expected values computed independently from decimal
//! strings.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tierpack_core::*;

    fn tier(price: &str, days: &str) -> PricingTier {
        PricingTier::new(price, days, "0", "0")
    }

    #[test]
    fn test_reference_scenario() {
        // Three 50%-bonus tiers of five days each at 100 tokens per unit.
        // Each rescales to 150 tokens for 432000 seconds; the appended
        // final entry is 100 tokens for 1 second.
        let tiers = vec![tier("50", "5"), tier("50", "5"), tier("50", "5")];

        let changes = rescale_tiers(&tiers, 100).unwrap();
        assert_eq!(changes.len(), 4);
        for change in &changes[..3] {
            assert_eq!(*change, PriceChange { price: 150, duration: 432_000 });
        }
        assert_eq!(changes[3], PriceChange { price: 100, duration: 1 });

        let packed = convert_tiers(&tiers, 100).unwrap();

        // Final entry block "10000100" on top of three "04320000000150"
        // blocks, least-significant block first in positional weight
        let expected = U256::from_str_radix(
            "10000100043200000001500432000000015004320000000150",
            10,
        )
        .unwrap();
        assert_eq!(packed.register0, expected);
        assert_eq!(packed.register1, U256::ZERO);
    }

    #[test]
    fn test_single_entry_register_layout() {
        let packed = pack_changes(&[PriceChange { price: 150, duration: 432_000 }]).unwrap();
        assert_eq!(packed.register0, U256::from_str_radix("4320000000150", 10).unwrap());
        assert_eq!(packed.register1, U256::ZERO);
    }

    #[test]
    fn test_fifth_entry_lands_in_second_register() {
        let changes: Vec<PriceChange> = (1..=5)
            .map(|i| PriceChange { price: i, duration: i })
            .collect();

        let packed = pack_changes(&changes).unwrap();

        // register1 is the fifth block alone: 5 * 10^7 + 5
        assert_eq!(packed.register1, U256::new(50_000_005));

        // register0 is the first four blocks: i * 10^7 + i at weight 10^(14*(i-1))
        let expected0 = U256::from_str_radix(
            "40000004000000300000030000002000000200000010000001",
            10,
        )
        .unwrap();
        assert_eq!(packed.register0, expected0);
    }

    #[test]
    fn test_field_boundaries() {
        let max_ok = PriceChange { price: 9_999_999, duration: 9_999_999 };
        assert!(pack_changes(&[max_ok]).is_ok());

        assert_eq!(
            pack_changes(&[PriceChange { price: 10_000_000, duration: 1 }]),
            Err(TierPackError::PriceOutOfRange(10_000_000))
        );
        assert_eq!(
            pack_changes(&[PriceChange { price: 1, duration: 10_000_000 }]),
            Err(TierPackError::DurationOutOfRange(10_000_000))
        );
    }

    #[test]
    fn test_entry_count_boundary() {
        let eight: Vec<PriceChange> =
            (1..=8).map(|i| PriceChange { price: i, duration: i }).collect();
        assert!(pack_changes(&eight).is_ok());

        let nine: Vec<PriceChange> =
            (1..=9).map(|i| PriceChange { price: i, duration: i }).collect();
        assert_eq!(pack_changes(&nine), Err(TierPackError::TooManyEntries(9)));

        // Seven input tiers plus the final entry still fit
        let tiers: Vec<PricingTier> = (1..=7).map(|i| tier("50", &i.to_string())).collect();
        assert!(convert_tiers(&tiers, 100).is_ok());

        // An eighth input tier pushes the list past the register capacity
        let tiers: Vec<PricingTier> = (1..=8).map(|i| tier("50", &i.to_string())).collect();
        assert_eq!(convert_tiers(&tiers, 100), Err(TierPackError::TooManyEntries(9)));
    }

    #[test]
    fn test_pipeline_deterministic() {
        let tiers = vec![tier("50", "5"), tier("12.5", "2"), tier("0.5", "1")];

        let first = convert_tiers(&tiers, 400).unwrap();
        let second = convert_tiers(&tiers, 400).unwrap();
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn prop_block_fields_never_collide(
            price in 1u128..10_000_000,
            duration in 1u128..10_000_000,
        ) {
            let block = pack_single(&PriceChange { price, duration }).unwrap();

            prop_assert_eq!(block % U256::new(PACK_FIELD_MAX), U256::new(price));
            prop_assert_eq!(block / U256::new(PACK_FIELD_MAX), U256::new(duration));
        }
    }
}
