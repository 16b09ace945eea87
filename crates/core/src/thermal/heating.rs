//! Heizung pool.

use rust_decimal::Decimal;

use super::warm_water::{WarmWaterCosts, rate};
use crate::allocation::{CostSplit, PoolSplit};

/// Building-level Heizung pool and its rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatingRates {
    /// Combined heating pool before the warm-water deduction.
    pub energy_total: Decimal,
    /// Warm-water cost deducted.
    pub minus_warm_water: Decimal,
    /// Device rental added on top.
    pub device_rental: Decimal,
    /// `energy_total − minus_warm_water + device_rental`.
    pub total_cost: Decimal,
    /// Grundkosten / Verbrauchskosten.
    pub split: PoolSplit,
    /// Split percentages used.
    pub cost_split: CostSplit,
    /// Property living space in m².
    pub base_area_m2: Decimal,
    /// Grundkosten per m².
    pub base_rate_per_m2: Decimal,
    /// Building heat consumption in MWh.
    pub consumption_mwh: Decimal,
    /// Verbrauchskosten per MWh; 0 without metered heat.
    pub consumption_rate_per_mwh: Decimal,
}

impl HeatingRates {
    /// Derives the Heizung pool from what warm water leaves behind.
    #[must_use]
    pub fn compute(
        heating_cost_total: Decimal,
        warm_water: &WarmWaterCosts,
        device_rental: Decimal,
        consumption_mwh: Decimal,
        total_living_space_m2: Decimal,
        cost_split: CostSplit,
    ) -> Self {
        let minus_warm_water = warm_water.cost_from_energy;
        let total_cost = heating_cost_total - minus_warm_water + device_rental;
        let split = cost_split.split_pool(total_cost);

        Self {
            energy_total: heating_cost_total,
            minus_warm_water,
            device_rental,
            total_cost,
            split,
            cost_split,
            base_area_m2: total_living_space_m2,
            base_rate_per_m2: rate(split.base, total_living_space_m2),
            consumption_mwh,
            consumption_rate_per_mwh: rate(split.consumption, consumption_mwh),
        }
    }
}
