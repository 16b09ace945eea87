//! Property-based tests for warm-water derivation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::heating::HeatingRates;
use super::warm_water::{WarmWaterCosts, warm_water_energy_kwh};
use crate::allocation::CostSplit;

/// Strategy for volumes with two decimals (0.00 to 100,000.00 m³).
fn volume() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|v| Decimal::new(v, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Energy is monotonically non-decreasing in volume.
    #[test]
    fn prop_energy_monotonic(a in volume(), b in volume()) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(warm_water_energy_kwh(low) <= warm_water_energy_kwh(high));
    }

    /// Zero volume means zero energy; positive volume means positive energy.
    #[test]
    fn prop_energy_zero_iff_no_volume(v in volume()) {
        let energy = warm_water_energy_kwh(v);
        prop_assert_eq!(energy.is_zero(), v.is_zero());
    }

    /// Warmwasser and Heizung together carry the whole pool plus both rentals.
    #[test]
    fn prop_pools_conserve_total(
        v in volume(),
        kwh in 1i64..10_000_000i64,
        pool in 0i64..100_000_000i64,
        ww_rental in 0i64..1_000_000i64,
        heat_rental in 0i64..1_000_000i64,
    ) {
        let pool = Decimal::new(pool, 2);
        let ww_rental = Decimal::new(ww_rental, 2);
        let heat_rental = Decimal::new(heat_rental, 2);
        let split = CostSplit::default();

        let ww = WarmWaterCosts::compute(v, Decimal::from(kwh), pool, ww_rental, Decimal::from(1000), split);
        let heating = HeatingRates::compute(pool, &ww, heat_rental, Decimal::ONE, Decimal::from(1000), split);

        prop_assert_eq!(ww.total_cost + heating.total_cost, pool + ww_rental + heat_rental);
    }
}
