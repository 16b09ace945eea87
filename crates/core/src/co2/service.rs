//! CO2 allocation service.

use abrechnung_shared::types::{round_dp, round_money};
use rust_decimal::Decimal;
use serde::Serialize;

use super::tiers::{CO2_TIERS, Co2Tier, classify};

/// Emission factor in kg CO2/kWh for an energy carrier.
///
/// District heating, gas and heating oil have fixed factors; anything else
/// uses `default_factor`.
#[must_use]
pub fn emission_factor_for(energy_carrier: Option<&str>, default_factor: Decimal) -> Decimal {
    match energy_carrier.map(str::trim) {
        Some("Fernwärme" | "Nahwärme" | "Nah-/Fernwärme" | "Nah-/Fernwarme") => {
            Decimal::new(2101, 4)
        }
        Some("Gas" | "Erdgas") => Decimal::new(202, 3),
        Some("Öl" | "Heizöl") => Decimal::new(266, 3),
        _ => default_factor,
    }
}

/// A CO2 cost split. `tenant + landlord == total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Co2Split {
    /// Tenant share.
    pub tenant: Decimal,
    /// Landlord share.
    pub landlord: Decimal,
    /// Amount split.
    pub total: Decimal,
}

impl Co2Split {
    /// Splits `total` by the tier percentages; the landlord takes the rounding remainder.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use abrechnung_core::co2::{CO2_TIERS, Co2Split};
    ///
    /// let split = Co2Split::of(dec!(14318.13), &CO2_TIERS[1]);
    /// assert_eq!(split.tenant, dec!(12886.32));
    /// assert_eq!(split.landlord, dec!(1431.81));
    /// ```
    #[must_use]
    pub fn of(total: Decimal, tier: &Co2Tier) -> Self {
        let tenant = round_money(total * Decimal::from(tier.tenant_percent) / Decimal::ONE_HUNDRED);
        Self {
            tenant,
            landlord: total - tenant,
            total,
        }
    }
}

/// Building and unit CO2 figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Co2Allocation {
    /// Emission factor in kg/kWh.
    pub emission_factor: Decimal,
    /// Heat energy in kWh.
    pub total_kwh: Decimal,
    /// Emissions in kg.
    pub total_co2_kg: Decimal,
    /// Emissions in tonnes.
    pub total_co2_tonnes: Decimal,
    /// kg per m² living space and year.
    pub emission_per_m2: Decimal,
    /// Index into [`CO2_TIERS`].
    pub tier_index: usize,
    /// Split of the building CO2 cost.
    pub building: Co2Split,
    /// Split of the unit's share of that cost.
    pub unit: Co2Split,
}

impl Co2Allocation {
    /// The selected tier.
    #[must_use]
    pub fn tier(&self) -> &'static Co2Tier {
        &CO2_TIERS[self.tier_index.min(CO2_TIERS.len() - 1)]
    }
}

/// CO2 allocation.
pub struct Co2Service;

impl Co2Service {
    /// Classifies the building and splits the CO2 levy.
    ///
    /// The unit's cost is its living-space share of `total_co2_cost`.
    #[must_use]
    pub fn allocate(
        total_kwh: Decimal,
        total_co2_cost: Decimal,
        total_living_space_m2: Decimal,
        unit_living_space_m2: Decimal,
        emission_factor: Decimal,
    ) -> Co2Allocation {
        let total_co2_kg = round_money(total_kwh * emission_factor);
        let emission_per_m2 = if total_living_space_m2 > Decimal::ZERO {
            round_money(total_co2_kg / total_living_space_m2)
        } else {
            Decimal::ZERO
        };
        let tier_index = classify(emission_per_m2);
        let tier = &CO2_TIERS[tier_index];

        let unit_cost = if total_living_space_m2 > Decimal::ZERO {
            round_money(total_co2_cost * unit_living_space_m2 / total_living_space_m2)
        } else {
            Decimal::ZERO
        };

        Co2Allocation {
            emission_factor,
            total_kwh,
            total_co2_kg,
            total_co2_tonnes: round_dp(total_co2_kg / Decimal::ONE_THOUSAND, 3),
            emission_per_m2,
            tier_index,
            building: Co2Split::of(total_co2_cost, tier),
            unit: Co2Split::of(unit_cost, tier),
        }
    }
}
