//! Operating-cost settlement on the cover page.

use abrechnung_shared::types::round_money;
use abrechnung_shared::format_euro;
use rust_decimal::Decimal;

use super::types::{Settlement, SettlementLine};
use super::warning::{DataInconsistencyWarning, Warnings};
use crate::allocation::{
    AllocationBasis, AllocationConfigError, AllocationKey, AllocationService, Denominator,
};
use crate::invoice::{
    CostCategory, CostPool, Invoice, RentalPool, classify_cost_type, normalize_cost_type,
};
use crate::readings::{ConsumptionTotals, Medium};

const UNKNOWN_CATEGORY: &str = "Unbekannt";
const FULL_PERIOD_KEY: &str = "365/365";

/// Inputs shared by every settlement line.
pub(crate) struct SettlementBasis<'a> {
    pub categories: &'a [CostCategory],
    pub basis: AllocationBasis,
    pub building: &'a ConsumptionTotals,
    pub unit: &'a ConsumptionTotals,
}

/// Computes the unit's share of every invoice and the balance against `expected_prepayment`.
///
/// # Errors
///
/// Returns the allocator's error for a zero denominator other than consumption.
pub(crate) fn settle(
    invoices: &[Invoice],
    ctx: &SettlementBasis<'_>,
    expected_prepayment: Decimal,
    warnings: &mut Warnings,
) -> Result<Settlement, AllocationConfigError> {
    let mut lines = Vec::with_capacity(invoices.len());

    for invoice in invoices {
        let pool = classify_cost_type(&invoice.cost_type);
        if pool == CostPool::Ignored {
            continue;
        }
        let amount = round_money(invoice.total_amount);

        let (category_name, key_label, unit_share) = match find_category(ctx.categories, invoice) {
            Some(category) => {
                let key = AllocationKey::parse(&category.allocation_key);
                if let AllocationKey::Unknown(raw) = &key {
                    warnings.push(DataInconsistencyWarning::UnknownAllocationKey {
                        cost_type: invoice.cost_type.clone(),
                        key: raw.clone(),
                    });
                }
                let medium = consumption_medium(pool);
                let basis = AllocationBasis {
                    unit_consumption: ctx.unit.get(medium),
                    total_consumption: ctx.building.get(medium),
                    ..ctx.basis
                };
                let share = match AllocationService::share(&key, amount, &basis) {
                    Ok(share) => share,
                    Err(AllocationConfigError::ZeroDenominator(Denominator::TotalConsumption)) => {
                        warnings.push(DataInconsistencyWarning::ZeroConsumption { medium });
                        Decimal::ZERO
                    }
                    Err(err) => return Err(err),
                };
                (category.name.clone(), key.label().to_string(), share)
            }
            None => {
                warnings.push(DataInconsistencyWarning::MissingCostCategory {
                    cost_type: invoice.cost_type.clone(),
                });
                (
                    UNKNOWN_CATEGORY.to_string(),
                    FULL_PERIOD_KEY.to_string(),
                    AllocationService::full_period(amount),
                )
            }
        };

        lines.push(SettlementLine {
            invoice_id: invoice.id,
            label: invoice.display_label(),
            category_name,
            allocation_key: key_label,
            total_amount: amount,
            total_amount_formatted: format_euro(amount),
            unit_share,
            unit_share_formatted: format_euro(unit_share),
        });
    }

    let actual_cost_share: Decimal = lines.iter().map(|line| line.unit_share).sum();
    let total_diff = expected_prepayment - actual_cost_share;

    Ok(Settlement {
        lines,
        expected_prepayment,
        expected_prepayment_formatted: format_euro(expected_prepayment),
        actual_cost_share,
        actual_cost_share_formatted: format_euro(actual_cost_share),
        total_diff,
        total_diff_formatted: format_euro(total_diff),
    })
}

/// By explicit category ID, else by cost type.
fn find_category<'a>(categories: &'a [CostCategory], invoice: &Invoice) -> Option<&'a CostCategory> {
    invoice
        .cost_category_id
        .and_then(|id| categories.iter().find(|c| c.id == id))
        .or_else(|| {
            let cost_type = normalize_cost_type(&invoice.cost_type);
            categories
                .iter()
                .find(|c| normalize_cost_type(&c.cost_type) == cost_type)
        })
}

const fn consumption_medium(pool: CostPool) -> Medium {
    match pool {
        CostPool::ColdWater => Medium::WaterCold,
        CostPool::DeviceRental(RentalPool::WarmWater) => Medium::WaterHot,
        _ => Medium::Heat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abrechnung_shared::types::{CostCategoryId, InvoiceId};
    use rust_decimal_macros::dec;

    fn invoice(cost_type: &str, amount: Decimal) -> Invoice {
        Invoice {
            id: InvoiceId::new(),
            cost_type: cost_type.into(),
            total_amount: amount,
            invoice_date: None,
            label: None,
            purpose: None,
            energy_kwh: None,
            co2_cost: None,
            cost_category_id: None,
        }
    }

    fn category(cost_type: &str, key: &str) -> CostCategory {
        CostCategory {
            id: CostCategoryId::new(),
            cost_type: cost_type.into(),
            name: cost_type.into(),
            allocation_key: key.into(),
        }
    }

    fn basis() -> AllocationBasis {
        AllocationBasis {
            unit_living_space: dec!(50),
            total_living_space: dec!(200),
            occupied_days: None,
            period_days: 365,
            unit_count: 4,
            unit_consumption: Decimal::ZERO,
            total_consumption: Decimal::ZERO,
        }
    }

    #[test]
    fn test_shares_and_balance() {
        let categories = vec![
            category("maintenance_costs", "m² Wohnfläche"),
            category("metering_service_costs", "Wohneinheiten"),
        ];
        let totals = ConsumptionTotals::default();
        let ctx = SettlementBasis {
            categories: &categories,
            basis: basis(),
            building: &totals,
            unit: &totals,
        };
        let invoices = vec![
            invoice("maintenance_costs", dec!(1000)),
            invoice("metering_service_costs", dec!(400)),
            invoice("test_cost", dec!(999)),
        ];
        let mut warnings = Warnings::default();

        let settlement = settle(&invoices, &ctx, dec!(600), &mut warnings).unwrap();

        assert_eq!(settlement.lines.len(), 2);
        assert_eq!(settlement.lines[0].unit_share, dec!(250));
        assert_eq!(settlement.lines[1].unit_share, dec!(100));
        assert_eq!(settlement.actual_cost_share, dec!(350));
        assert_eq!(settlement.total_diff, dec!(250));
        assert_eq!(settlement.total_diff_formatted, "250,00 €");
        assert!(warnings.into_vec().is_empty());
    }

    #[test]
    fn test_missing_category_charges_full_amount() {
        let totals = ConsumptionTotals::default();
        let ctx = SettlementBasis {
            categories: &[],
            basis: basis(),
            building: &totals,
            unit: &totals,
        };
        let mut warnings = Warnings::default();

        let settlement = settle(
            &[invoice("chimney_sweep_costs", dec!(80))],
            &ctx,
            Decimal::ZERO,
            &mut warnings,
        )
        .unwrap();

        assert_eq!(settlement.lines[0].category_name, "Unbekannt");
        assert_eq!(settlement.lines[0].unit_share, dec!(80));
        assert_eq!(settlement.total_diff, dec!(-80));
        assert_eq!(
            warnings.into_vec(),
            vec![DataInconsistencyWarning::MissingCostCategory {
                cost_type: "chimney_sweep_costs".into()
            }]
        );
    }

    #[test]
    fn test_consumption_key_without_readings_warns() {
        let categories = vec![category("cold_water", "Verbrauch")];
        let totals = ConsumptionTotals::default();
        let ctx = SettlementBasis {
            categories: &categories,
            basis: basis(),
            building: &totals,
            unit: &totals,
        };
        let mut warnings = Warnings::default();

        let settlement = settle(
            &[invoice("cold_water", dec!(500))],
            &ctx,
            Decimal::ZERO,
            &mut warnings,
        )
        .unwrap();

        assert_eq!(settlement.lines[0].unit_share, Decimal::ZERO);
        assert_eq!(
            warnings.into_vec(),
            vec![DataInconsistencyWarning::ZeroConsumption {
                medium: Medium::WaterCold
            }]
        );
    }

    #[test]
    fn test_category_id_wins_over_cost_type() {
        let mut by_id = category("other", "Wohneinheiten");
        by_id.name = "Hauswart".into();
        let categories = vec![category("maintenance_costs", "m² Wohnfläche"), by_id.clone()];
        let totals = ConsumptionTotals::default();
        let ctx = SettlementBasis {
            categories: &categories,
            basis: basis(),
            building: &totals,
            unit: &totals,
        };
        let mut line = invoice("maintenance_costs", dec!(100));
        line.cost_category_id = Some(by_id.id);
        let mut warnings = Warnings::default();

        let settlement = settle(&[line], &ctx, Decimal::ZERO, &mut warnings).unwrap();

        assert_eq!(settlement.lines[0].category_name, "Hauswart");
        assert_eq!(settlement.lines[0].unit_share, dec!(25));
    }

    #[test]
    fn test_overflowing_share_fails_the_settlement() {
        let categories = vec![category("maintenance_costs", "m² Wohnfläche")];
        let totals = ConsumptionTotals::default();
        let ctx = SettlementBasis {
            categories: &categories,
            basis: basis(),
            building: &totals,
            unit: &totals,
        };
        let mut warnings = Warnings::default();

        let result = settle(
            &[invoice("maintenance_costs", Decimal::MAX)],
            &ctx,
            Decimal::ZERO,
            &mut warnings,
        );

        assert!(matches!(result, Err(AllocationConfigError::Overflow { .. })));
    }
}
