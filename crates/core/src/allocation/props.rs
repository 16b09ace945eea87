//! Property-based tests for allocation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::AllocationService;
use super::split::CostSplit;

/// Strategy for pool totals (0.00 to 10,000,000.00).
fn pool_total() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for a living-space share with up to one decimal (0.0 to 100.0).
fn share_percent() -> impl Strategy<Value = Decimal> {
    (0i64..=1000i64).prop_map(|tenths| Decimal::new(tenths, 1))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Grundkosten + Verbrauchskosten equals the pool for every valid split.
    #[test]
    fn prop_split_conserves_pool(total in pool_total(), g in share_percent()) {
        let split = CostSplit::new(g, Decimal::ONE_HUNDRED - g).unwrap();
        let parts = split.split_pool(total);
        prop_assert_eq!(parts.base + parts.consumption, total);
        prop_assert!(parts.base >= Decimal::ZERO);
        prop_assert!(parts.consumption >= Decimal::ZERO);
    }

    /// Shares never exceed the total when the unit is part of the building.
    #[test]
    fn prop_living_space_share_bounded(
        total in pool_total(),
        unit in 1i64..10_000i64,
        rest in 0i64..1_000_000i64,
    ) {
        let unit_m2 = Decimal::new(unit, 2);
        let property_m2 = unit_m2 + Decimal::new(rest, 2);
        let share = AllocationService::by_living_space(total, unit_m2, property_m2).unwrap();
        prop_assert!(share >= Decimal::ZERO);
        prop_assert!(share <= total);
    }

    /// Splits whose shares do not add up to 100 are rejected.
    #[test]
    fn prop_invalid_split_rejected(g in share_percent(), c in share_percent()) {
        prop_assume!(g + c != Decimal::ONE_HUNDRED);
        prop_assert!(CostSplit::new(g, c).is_err());
    }
}
