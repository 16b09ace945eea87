//! Property-based tests for cost-pool aggregation.

use abrechnung_shared::types::InvoiceId;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::aggregation::InvoiceAggregator;
use super::types::Invoice;

const COST_TYPES: &[&str] = &[
    "fuel_costs",
    "brennstoffkosten",
    "operating_current",
    "maintenance_costs",
    "metering_device_rental",
    "heating_device_rental",
    "warm_water_device_rental",
    "cold_water",
    "abwasser",
    "cold_water_billing",
    "heidi_systems_sd",
    "gartenpflege",
];

/// Strategy for one invoice with a known or unknown cost type.
fn any_invoice() -> impl Strategy<Value = Invoice> {
    (
        prop::sample::select(COST_TYPES),
        -500_000i64..10_000_000i64,
        prop::option::of(0i64..1_000_000i64),
    )
        .prop_map(|(cost_type, cents, kwh)| Invoice {
            id: InvoiceId::new(),
            cost_type: cost_type.to_string(),
            total_amount: Decimal::new(cents, 2),
            invoice_date: None,
            label: None,
            purpose: None,
            energy_kwh: kwh.map(Decimal::from),
            co2_cost: None,
            cost_category_id: None,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The grand total is exactly the sum of the three pools.
    #[test]
    fn prop_grand_total_is_pool_sum(invoices in prop::collection::vec(any_invoice(), 0..30)) {
        let agg = InvoiceAggregator::aggregate(&invoices, Decimal::ZERO);
        prop_assert_eq!(
            agg.grand_total,
            agg.fuel_total + agg.operational_total + agg.separate_distribution_total
        );
        prop_assert_eq!(agg.heating_total, agg.fuel_total + agg.operational_total);
    }

    /// Subtotals do not depend on invoice order.
    #[test]
    fn prop_totals_order_independent(invoices in prop::collection::vec(any_invoice(), 0..30)) {
        let forward = InvoiceAggregator::aggregate(&invoices, Decimal::ZERO);
        let mut reversed = invoices.clone();
        reversed.reverse();
        let backward = InvoiceAggregator::aggregate(&reversed, Decimal::ZERO);
        prop_assert_eq!(forward.grand_total, backward.grand_total);
        prop_assert_eq!(forward.fuel_total, backward.fuel_total);
        prop_assert_eq!(forward.separate_distribution_total, backward.separate_distribution_total);
    }

    /// Every non-ignored invoice lands in exactly one pool.
    #[test]
    fn prop_non_ignored_invoices_accounted(invoices in prop::collection::vec(any_invoice(), 0..30)) {
        let agg = InvoiceAggregator::aggregate(&invoices, Decimal::ZERO);
        let expected: Decimal = invoices
            .iter()
            .filter(|inv| inv.cost_type != "heidi_systems_sd")
            .map(|inv| inv.total_amount)
            .sum();
        prop_assert_eq!(agg.grand_total, expected);
    }
}
