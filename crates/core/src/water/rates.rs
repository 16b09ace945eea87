//! Cold-water rate derivation and the unit's cold-water lines.

use abrechnung_shared::types::{round_money, round_rate};
use rust_decimal::Decimal;
use tracing::debug;

use super::subtype::{ColdWaterSubtype, RateBasis};
use crate::invoice::Invoice;

/// One building-level rate line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColdWaterRateItem {
    /// Line type.
    pub subtype: ColdWaterSubtype,
    /// Σ invoice amounts of this subtype.
    pub total_cost: Decimal,
    /// Divisor: building m³ or unit count.
    pub total_volume: Decimal,
    /// `total_cost / total_volume`, six decimals.
    pub rate: Decimal,
}

/// One cold-water line of the unit statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitColdWaterLine {
    /// Line type.
    pub subtype: ColdWaterSubtype,
    /// Unit quantity: m³, or 1 per usage unit.
    pub volume: Decimal,
    /// Published rate.
    pub rate: Decimal,
    /// `round2(volume × rate × factor)`.
    pub cost: Decimal,
}

/// Building-level cold-water rates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColdWaterRates {
    /// Rate lines in first-seen order.
    pub items: Vec<ColdWaterRateItem>,
    /// Σ cold-water invoices.
    pub total_cost: Decimal,
    /// True when a m³ rate had costs but no metered volume.
    pub missing_volume: bool,
}

impl ColdWaterRates {
    /// Groups cold-water invoices by subtype and derives their rates.
    ///
    /// Without invoices a single "Kaltwasser" line at 0 € is emitted.
    #[must_use]
    pub fn compute(invoices: &[Invoice], total_cold_water_m3: Decimal, unit_count: usize) -> Self {
        let mut grouped: Vec<(ColdWaterSubtype, Decimal)> = Vec::new();
        for invoice in invoices {
            let subtype = ColdWaterSubtype::of(invoice);
            let amount = round_money(invoice.total_amount);
            match grouped.iter_mut().find(|(s, _)| *s == subtype) {
                Some((_, sum)) => *sum += amount,
                None => grouped.push((subtype, amount)),
            }
        }
        if grouped.is_empty() {
            grouped.push((ColdWaterSubtype::Kaltwasser, Decimal::ZERO));
        }

        let units = Decimal::from(unit_count);
        let mut missing_volume = false;
        let items: Vec<_> = grouped
            .into_iter()
            .map(|(subtype, total_cost)| {
                let total_volume = match subtype.basis() {
                    RateBasis::CubicMetre => total_cold_water_m3,
                    RateBasis::UsageUnit => units,
                };
                let rate = if total_volume > Decimal::ZERO {
                    round_rate(total_cost / total_volume)
                } else {
                    missing_volume |= !total_cost.is_zero();
                    Decimal::ZERO
                };
                ColdWaterRateItem {
                    subtype,
                    total_cost,
                    total_volume,
                    rate,
                }
            })
            .collect();

        let total_cost = items.iter().map(|item| item.total_cost).sum();
        debug!(items = items.len(), total_cost = %total_cost, "Cold-water rates derived");

        Self {
            items,
            total_cost,
            missing_volume,
        }
    }

    /// Applies the rates to one unit.
    ///
    /// m³ lines use the unit's metered volume; per-usage-unit lines count
    /// one unit scaled by `time_fraction`.
    #[must_use]
    pub fn unit_lines(&self, unit_cold_water_m3: Decimal, time_fraction: Decimal) -> Vec<UnitColdWaterLine> {
        self.items
            .iter()
            .map(|item| {
                let (volume, factor) = match item.subtype.basis() {
                    RateBasis::CubicMetre => (unit_cold_water_m3, Decimal::ONE),
                    RateBasis::UsageUnit => (Decimal::ONE, time_fraction),
                };
                UnitColdWaterLine {
                    subtype: item.subtype,
                    volume,
                    rate: item.rate,
                    cost: round_money(volume * item.rate * factor),
                }
            })
            .collect()
    }
}
