//! Property-based tests for the CO2 tiers.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::Co2Split;
use super::tiers::{CO2_TIERS, classify};

/// Strategy for emissions with two decimals (0.00 to 200.00 kg/m²/a).
fn emission() -> impl Strategy<Value = Decimal> {
    (0i64..20_000i64).prop_map(|v| Decimal::new(v, 2))
}

/// Strategy for CO2 costs (0.00 to 1,000,000.00).
fn cost() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|v| Decimal::new(v, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Exactly one band contains every non-negative emission.
    #[test]
    fn prop_exactly_one_tier(e in emission()) {
        let matching = CO2_TIERS.iter().filter(|tier| tier.contains(e)).count();
        prop_assert_eq!(matching, 1);
        prop_assert!(CO2_TIERS[classify(e)].contains(e));
    }

    /// Tenant and landlord amounts always add up to the cost.
    #[test]
    fn prop_split_conserves_cost(e in emission(), total in cost()) {
        let tier = &CO2_TIERS[classify(e)];
        let split = Co2Split::of(total, tier);
        prop_assert_eq!(split.tenant + split.landlord, total);
        prop_assert!(split.tenant >= Decimal::ZERO && split.landlord >= Decimal::ZERO);
    }

    /// Higher emission never raises the tenant share.
    #[test]
    fn prop_tenant_share_non_increasing(a in emission(), b in emission()) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(CO2_TIERS[classify(high)].tenant_percent <= CO2_TIERS[classify(low)].tenant_percent);
    }
}

#[test]
fn test_every_tier_sums_to_hundred() {
    for tier in &CO2_TIERS {
        assert_eq!(tier.tenant_percent + tier.landlord_percent, 100);
    }
}
