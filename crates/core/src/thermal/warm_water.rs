//! Warmwasser pool.

use abrechnung_shared::types::{round_money, round_rate};
use rust_decimal::Decimal;

use super::constants::{BOILER_EFFICIENCY, SPECIFIC_HEAT_KWH_PER_M3_K, TEMP_HIGH_C, TEMP_LOW_C};
use crate::allocation::{CostSplit, PoolSplit};

/// Energy needed to heat `volume_m3` of water, rounded to cents of a kWh.
///
/// `E = 2.5 · V · (60 − 10) / 1.15`; zero for non-positive volumes.
///
/// ```
/// use rust_decimal_macros::dec;
/// use abrechnung_core::thermal::warm_water_energy_kwh;
///
/// assert_eq!(warm_water_energy_kwh(dec!(3148.25)), dec!(342201.09));
/// ```
#[must_use]
pub fn warm_water_energy_kwh(volume_m3: Decimal) -> Decimal {
    if volume_m3 <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_money(SPECIFIC_HEAT_KWH_PER_M3_K * volume_m3 * (TEMP_HIGH_C - TEMP_LOW_C) / BOILER_EFFICIENCY)
}

/// Building-level Warmwasser pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarmWaterCosts {
    /// Building hot-water volume in m³.
    pub volume_m3: Decimal,
    /// Derived warm-water energy in kWh.
    pub energy_kwh: Decimal,
    /// `energy_kwh / total energy × 100`, two decimals.
    pub energy_share_percent: Decimal,
    /// Share of the heating pool attributed to warm water.
    pub cost_from_energy: Decimal,
    /// Device rental added on top.
    pub device_rental: Decimal,
    /// `cost_from_energy + device_rental`.
    pub total_cost: Decimal,
    /// Grundkosten / Verbrauchskosten.
    pub split: PoolSplit,
    /// Split percentages used.
    pub cost_split: CostSplit,
    /// Property living space in m².
    pub base_area_m2: Decimal,
    /// Grundkosten per m².
    pub base_rate_per_m2: Decimal,
    /// Verbrauchskosten per m³; 0 without metered volume.
    pub consumption_rate_per_m3: Decimal,
}

impl WarmWaterCosts {
    /// Derives the Warmwasser pool from the combined heating pool.
    #[must_use]
    pub fn compute(
        volume_m3: Decimal,
        total_energy_kwh: Decimal,
        heating_cost_total: Decimal,
        device_rental: Decimal,
        total_living_space_m2: Decimal,
        cost_split: CostSplit,
    ) -> Self {
        let energy_kwh = warm_water_energy_kwh(volume_m3);
        let energy_share_percent = if total_energy_kwh > Decimal::ZERO {
            round_money(energy_kwh / total_energy_kwh * Decimal::ONE_HUNDRED)
        } else {
            Decimal::ZERO
        };
        let cost_from_energy =
            round_money(energy_share_percent / Decimal::ONE_HUNDRED * heating_cost_total);
        let total_cost = cost_from_energy + device_rental;
        let split = cost_split.split_pool(total_cost);

        Self {
            volume_m3,
            energy_kwh,
            energy_share_percent,
            cost_from_energy,
            device_rental,
            total_cost,
            split,
            cost_split,
            base_area_m2: total_living_space_m2,
            base_rate_per_m2: rate(split.base, total_living_space_m2),
            consumption_rate_per_m3: rate(split.consumption, volume_m3),
        }
    }
}

/// `amount / quantity` at six decimals; 0 for a non-positive quantity.
pub(crate) fn rate(amount: Decimal, quantity: Decimal) -> Decimal {
    if quantity > Decimal::ZERO {
        round_rate(amount / quantity)
    } else {
        Decimal::ZERO
    }
}
