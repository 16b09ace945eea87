//! Reconciliation checks over the derived figures.
//!
//! Each pool is rounded independently, so checks allow [`MONEY_TOLERANCE`].
//! A failed check becomes a [`DataInconsistencyWarning::ReconciliationMismatch`].

use abrechnung_shared::types::{MONEY_TOLERANCE, approx_eq};
use rust_decimal::Decimal;

use super::warning::{DataInconsistencyWarning, Warnings};
use crate::invoice::CostAggregation;
use crate::thermal::{HeatingRates, WarmWaterCosts};

/// Figures cross-checked after derivation.
pub(crate) struct Reconciliation<'a> {
    pub aggregation: &'a CostAggregation,
    pub warm_water: &'a WarmWaterCosts,
    pub heating: &'a HeatingRates,
    pub unit_cold_water_lines_total: Decimal,
    pub unit_cold_water_total: Decimal,
}

impl Reconciliation<'_> {
    /// Runs every check and records mismatches.
    pub(crate) fn check(&self, warnings: &mut Warnings) {
        let agg = self.aggregation;
        let ww = self.warm_water;
        let heating = self.heating;

        let checks = [
            (
                "grandTotal",
                agg.fuel_total + agg.operational_total + agg.separate_distribution_total,
                agg.grand_total,
            ),
            (
                "warmWaterTotal",
                ww.cost_from_energy + ww.device_rental,
                ww.total_cost,
            ),
            (
                "heatingTotal",
                heating.energy_total - heating.minus_warm_water + heating.device_rental,
                heating.total_cost,
            ),
            (
                "warmWaterSplit",
                ww.total_cost,
                ww.split.base + ww.split.consumption,
            ),
            (
                "heatingSplit",
                heating.total_cost,
                heating.split.base + heating.split.consumption,
            ),
            (
                "unitColdWaterTotal",
                self.unit_cold_water_lines_total,
                self.unit_cold_water_total,
            ),
        ];

        for (check, expected, actual) in checks {
            if !approx_eq(expected, actual, MONEY_TOLERANCE) {
                warnings.push(DataInconsistencyWarning::ReconciliationMismatch {
                    check: check.to_string(),
                    expected,
                    actual,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::CostSplit;
    use rust_decimal_macros::dec;

    fn derived() -> (CostAggregation, WarmWaterCosts, HeatingRates) {
        let split = CostSplit::default();
        let ww = WarmWaterCosts::compute(
            dec!(100),
            dec!(10000),
            dec!(5000),
            dec!(50),
            dec!(400),
            split,
        );
        let heating = HeatingRates::compute(dec!(5000), &ww, dec!(20), dec!(8), dec!(400), split);
        let agg = CostAggregation {
            fuel_total: dec!(4000),
            operational_total: dec!(1000),
            separate_distribution_total: dec!(300),
            grand_total: dec!(5300),
            ..CostAggregation::default()
        };
        (agg, ww, heating)
    }

    #[test]
    fn test_consistent_figures_pass() {
        let (agg, ww, heating) = derived();
        let mut warnings = Warnings::default();
        Reconciliation {
            aggregation: &agg,
            warm_water: &ww,
            heating: &heating,
            unit_cold_water_lines_total: dec!(12.5),
            unit_cold_water_total: dec!(12.5),
        }
        .check(&mut warnings);
        assert!(warnings.into_vec().is_empty());
    }

    #[test]
    fn test_mismatch_is_reported() {
        let (mut agg, ww, heating) = derived();
        agg.grand_total = dec!(5299.90);
        let mut warnings = Warnings::default();
        Reconciliation {
            aggregation: &agg,
            warm_water: &ww,
            heating: &heating,
            unit_cold_water_lines_total: dec!(12.5),
            unit_cold_water_total: dec!(12.51),
        }
        .check(&mut warnings);
        assert_eq!(
            warnings.into_vec(),
            vec![DataInconsistencyWarning::ReconciliationMismatch {
                check: "grandTotal".into(),
                expected: dec!(5300),
                actual: dec!(5299.90),
            }]
        );
    }
}
