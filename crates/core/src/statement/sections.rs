//! Maps derived figures onto the six statement sections.
//!
//! Formatting happens here and only here.

use abrechnung_shared::types::round_money;
use abrechnung_shared::{EngineConfig, format_date_german, format_euro, format_german_number};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::identifiers::ReferenceCodes;
use super::input::StatementInput;
use super::types::{
    BuildingCalc, Co2EnergyRow, Co2Section, Co2TierRow, ColdWaterRateRow, ColdWaterSection,
    ContractorRef, CostItemRow, Cover, EnergyInvoiceRow, EnergySummary, HeatingSection,
    PrimaryEnergyFactorRow, ReliefRow, Settlement, StateRelief, StatementModel,
    UnitBreakdown, UnitColdWaterRow, WarmWaterSection,
};
use super::warning::DataInconsistencyWarning;
use crate::allocation::AllocationBasis;
use crate::co2::{CO2_TIERS, Co2Allocation};
use crate::invoice::{CostAggregation, CostLine};
use crate::period::BillingPeriod;
use crate::property::{Property, TenancySummary, Unit};
use crate::readings::{ConsumptionTotals, DeviceReadingRow, ReadingsSummary};
use crate::thermal::constants::{
    BOILER_EFFICIENCY, SPECIFIC_HEAT_KWH_PER_M3_K, TEMP_HIGH_C, TEMP_LOW_C,
};
use crate::thermal::{HeatingRates, WarmWaterCosts, warm_water_energy_kwh};
use crate::water::{ColdWaterRates, RateBasis, UnitColdWaterLine};

const PRIMARY_ENERGY_LABEL: &str = "Heizwerke und fossile Brennstoffe";
const METERED_ENERGY_LABEL: &str = "Energieverbrauch (Zähler)";

/// The unit's cost lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UnitCosts {
    pub heating_base: Decimal,
    pub heating_consumption: Decimal,
    pub warm_water_base: Decimal,
    pub warm_water_consumption: Decimal,
    pub cold_water_total: Decimal,
    pub relief_share: Option<Decimal>,
    pub grand_total: Decimal,
}

impl UnitCosts {
    /// Grundkosten are time-weighted; Verbrauchskosten follow the meters.
    pub(crate) fn compute(
        basis: &AllocationBasis,
        unit: &ConsumptionTotals,
        warm_water: &WarmWaterCosts,
        heating: &HeatingRates,
        cold_water_lines: &[UnitColdWaterLine],
        relief: Option<Decimal>,
    ) -> Self {
        let fraction = basis.time_fraction();
        let m2 = basis.unit_living_space;

        let heating_base = round_money(m2 * heating.base_rate_per_m2 * fraction);
        let heating_consumption = round_money(unit.heat_mwh() * heating.consumption_rate_per_mwh);
        let warm_water_base = round_money(m2 * warm_water.base_rate_per_m2 * fraction);
        let warm_water_consumption =
            round_money(unit.water_hot_m3 * warm_water.consumption_rate_per_m3);
        let cold_water_total = cold_water_lines.iter().map(|line| line.cost).sum();
        let relief_share = relief.map(|amount| {
            if basis.unit_count == 0 {
                Decimal::ZERO
            } else {
                round_money(amount / Decimal::from(basis.unit_count) * fraction)
            }
        });

        Self {
            heating_base,
            heating_consumption,
            warm_water_base,
            warm_water_consumption,
            cold_water_total,
            relief_share,
            grand_total: heating_base
                + heating_consumption
                + warm_water_base
                + warm_water_consumption
                + cold_water_total,
        }
    }

    fn heating_and_warm_water(&self) -> Decimal {
        self.heating_base + self.heating_consumption + self.warm_water_base + self.warm_water_consumption
    }
}

/// Everything the sections are rendered from.
pub(crate) struct Figures<'a> {
    pub config: &'a EngineConfig,
    pub input: &'a StatementInput,
    pub period: BillingPeriod,
    pub property: &'a Property,
    pub unit: &'a Unit,
    pub codes: ReferenceCodes,
    pub tenancy: TenancySummary,
    pub readings: ReadingsSummary,
    pub aggregation: CostAggregation,
    pub energy_total_kwh: Decimal,
    pub warm_water: WarmWaterCosts,
    pub heating: HeatingRates,
    pub cold_water: ColdWaterRates,
    pub unit_cold_water_lines: Vec<UnitColdWaterLine>,
    pub time_fraction: Decimal,
    pub unit_costs: UnitCosts,
    pub co2: Co2Allocation,
    pub co2_cost_total: Decimal,
    pub settlement: Settlement,
}

/// Assembles the model.
pub(crate) fn assemble(figures: &Figures<'_>, warnings: Vec<DataInconsistencyWarning>) -> StatementModel {
    StatementModel {
        kind: figures.input.document.kind,
        cover: cover(figures),
        building_calc: building_calc(figures),
        cold_water: cold_water(figures),
        unit_breakdown: unit_breakdown(figures),
        co2: co2(figures),
        energy_summary: energy_summary(figures),
        warnings,
    }
}

fn date_or_empty(date: Option<NaiveDate>) -> String {
    date.map(format_date_german).unwrap_or_default()
}

fn cover(f: &Figures<'_>) -> Cover {
    let (owner_first_name, owner_last_name) = f
        .input
        .owner
        .as_ref()
        .map(|owner| (owner.first_name.clone(), owner.last_name.clone()))
        .unwrap_or_default();
    let usage_start = f.tenancy.occupancy_start.unwrap_or(f.period.start_date);
    let usage_end = f.tenancy.occupancy_end.unwrap_or(f.period.end_date);

    Cover {
        document_title: f.input.document.kind.title().to_string(),
        property_number: f.codes.property_number.clone(),
        heidi_customer_number: f.codes.heidi_customer_number.clone(),
        user_number: f.codes.user_number.clone(),
        security_code: f.codes.security_code.clone(),
        contractors_names: f.tenancy.joined_names(),
        contractors: f
            .tenancy
            .contractors
            .iter()
            .map(|c| ContractorRef {
                id: c.id,
                first_name: c.first_name.clone(),
                last_name: c.last_name.clone(),
            })
            .collect(),
        street: f.property.street.clone(),
        zip: f.property.zip.clone(),
        owner_first_name,
        owner_last_name,
        created_at: format_date_german(f.input.document.created_at),
        billing_period_start: format_date_german(f.period.start_date),
        billing_period_end: format_date_german(f.period.end_date),
        usage_period_start: format_date_german(usage_start),
        usage_period_end: format_date_german(usage_end),
        total_amount: f.settlement.total_diff,
        total_amount_formatted: format_euro(f.settlement.total_diff),
        portal_link: f.config.portal_link.clone(),
        settlement: f.settlement.clone(),
    }
}

fn cost_item(line: &CostLine) -> CostItemRow {
    CostItemRow {
        label: line.label.clone(),
        date: date_or_empty(line.date),
        amount: line.amount,
        amount_formatted: format_euro(line.amount),
    }
}

fn building_calc(f: &Figures<'_>) -> BuildingCalc {
    let agg = &f.aggregation;

    BuildingCalc {
        device_rental_policy: f.config.device_rental_policy,
        energy_invoices: agg
            .energy_items
            .iter()
            .map(|line| EnergyInvoiceRow {
                label: line.label.clone(),
                date: date_or_empty(line.date),
                kwh: line.kwh,
                kwh_formatted: format_german_number(line.kwh, 0),
                amount: line.amount,
                amount_formatted: format_euro(line.amount),
            })
            .collect(),
        energy_relief: agg.energy_relief.as_ref().map(|relief| ReliefRow {
            label: relief.label.clone(),
            amount: relief.amount,
            amount_formatted: format_euro(relief.amount),
        }),
        energy_total_kwh: f.energy_total_kwh,
        energy_total_kwh_formatted: format_german_number(f.energy_total_kwh, 0),
        energy_total_amount: agg.fuel_total,
        energy_total_amount_formatted: format_euro(agg.fuel_total),
        heating_cost_items: agg.operating_items.iter().map(cost_item).collect(),
        heating_cost_carry_over: agg.fuel_total,
        heating_cost_carry_over_formatted: format_euro(agg.fuel_total),
        operational_total: agg.operational_total,
        operational_total_formatted: format_euro(agg.operational_total),
        heating_cost_total: agg.heating_total,
        heating_cost_total_formatted: format_euro(agg.heating_total),
        distribution_cost_items: agg.distribution_items.iter().map(cost_item).collect(),
        distribution_cost_total: agg.distribution_total,
        distribution_cost_total_formatted: format_euro(agg.distribution_total),
        cold_water_total: agg.cold_water_total,
        cold_water_total_formatted: format_euro(agg.cold_water_total),
        separate_distribution_total: agg.separate_distribution_total,
        separate_distribution_total_formatted: format_euro(agg.separate_distribution_total),
        grand_total: agg.grand_total,
        grand_total_formatted: format_euro(agg.grand_total),
        warm_water: warm_water_section(&f.warm_water),
        heating: heating_section(&f.heating),
    }
}

fn warm_water_section(ww: &WarmWaterCosts) -> WarmWaterSection {
    WarmWaterSection {
        constant_factor: SPECIFIC_HEAT_KWH_PER_M3_K,
        volume_m3: ww.volume_m3,
        volume_m3_formatted: format_german_number(ww.volume_m3, 2),
        temp_diff_high: TEMP_HIGH_C,
        temp_diff_low: TEMP_LOW_C,
        conversion_factor: BOILER_EFFICIENCY,
        energy_kwh: ww.energy_kwh,
        energy_kwh_formatted: format_german_number(ww.energy_kwh, 2),
        energy_share_percent: ww.energy_share_percent,
        energy_share_percent_formatted: format_german_number(ww.energy_share_percent, 2),
        cost_from_energy: ww.cost_from_energy,
        cost_from_energy_formatted: format_euro(ww.cost_from_energy),
        device_rental: ww.device_rental,
        device_rental_formatted: format_euro(ww.device_rental),
        total_cost: ww.total_cost,
        total_cost_formatted: format_euro(ww.total_cost),
        base_cost_percent: ww.cost_split.living_space_percent(),
        base_cost_amount: ww.split.base,
        base_cost_amount_formatted: format_euro(ww.split.base),
        base_cost_area: ww.base_area_m2,
        base_cost_area_formatted: format_german_number(ww.base_area_m2, 2),
        base_cost_rate_per_m2: ww.base_rate_per_m2,
        base_cost_rate_per_m2_formatted: format_german_number(ww.base_rate_per_m2, 6),
        consumption_cost_percent: ww.cost_split.consumption_percent(),
        consumption_cost_amount: ww.split.consumption,
        consumption_cost_amount_formatted: format_euro(ww.split.consumption),
        consumption_cost_volume: ww.volume_m3,
        consumption_cost_volume_formatted: format_german_number(ww.volume_m3, 2),
        consumption_cost_rate_per_m3: ww.consumption_rate_per_m3,
        consumption_cost_rate_per_m3_formatted: format_german_number(ww.consumption_rate_per_m3, 6),
    }
}

fn heating_section(heating: &HeatingRates) -> HeatingSection {
    HeatingSection {
        energy_total: heating.energy_total,
        energy_total_formatted: format_euro(heating.energy_total),
        minus_warm_water: heating.minus_warm_water,
        minus_warm_water_formatted: format_euro(heating.minus_warm_water),
        device_rental: heating.device_rental,
        device_rental_formatted: format_euro(heating.device_rental),
        total_cost: heating.total_cost,
        total_cost_formatted: format_euro(heating.total_cost),
        base_cost_percent: heating.cost_split.living_space_percent(),
        base_cost_amount: heating.split.base,
        base_cost_amount_formatted: format_euro(heating.split.base),
        base_cost_area: heating.base_area_m2,
        base_cost_area_formatted: format_german_number(heating.base_area_m2, 2),
        base_cost_rate_per_m2: heating.base_rate_per_m2,
        base_cost_rate_per_m2_formatted: format_german_number(heating.base_rate_per_m2, 6),
        consumption_cost_percent: heating.cost_split.consumption_percent(),
        consumption_cost_amount: heating.split.consumption,
        consumption_cost_amount_formatted: format_euro(heating.split.consumption),
        consumption_mwh: heating.consumption_mwh,
        consumption_mwh_formatted: format_german_number(heating.consumption_mwh, 2),
        consumption_cost_rate_per_mwh: heating.consumption_rate_per_mwh,
        consumption_cost_rate_per_mwh_formatted: format_german_number(
            heating.consumption_rate_per_mwh,
            6,
        ),
    }
}

fn quantity_decimals(basis: RateBasis) -> u32 {
    match basis {
        RateBasis::CubicMetre => 2,
        RateBasis::UsageUnit => 0,
    }
}

fn cold_water(f: &Figures<'_>) -> ColdWaterSection {
    ColdWaterSection {
        total_cost: f.cold_water.total_cost,
        total_cost_formatted: format_euro(f.cold_water.total_cost),
        rate_items: f
            .cold_water
            .items
            .iter()
            .map(|item| {
                let basis = item.subtype.basis();
                ColdWaterRateRow {
                    label: item.subtype.label().to_string(),
                    total_cost: item.total_cost,
                    total_cost_formatted: format_euro(item.total_cost),
                    total_volume: item.total_volume,
                    total_volume_formatted: format_german_number(
                        item.total_volume,
                        quantity_decimals(basis),
                    ),
                    unit: basis.unit_label().to_string(),
                    rate: item.rate,
                    rate_formatted: format_german_number(item.rate, item.subtype.rate_decimals()),
                    rate_unit: basis.rate_label().to_string(),
                }
            })
            .collect(),
        unit_total_cost: f.unit_costs.cold_water_total,
        unit_total_cost_formatted: format_euro(f.unit_costs.cold_water_total),
    }
}

fn device_total(rows: &[DeviceReadingRow]) -> Decimal {
    rows.iter().map(|row| row.consumption).sum()
}

fn area_calc(m2: Decimal, rate: Decimal, fraction: Decimal) -> String {
    let calc = format!(
        "{} m² x {} €/m²",
        format_german_number(m2, 2),
        format_german_number(rate, 6)
    );
    if fraction < Decimal::ONE {
        format!("{calc} x {}", format_german_number(fraction, 4))
    } else {
        calc
    }
}

fn unit_breakdown(f: &Figures<'_>) -> UnitBreakdown {
    let costs = &f.unit_costs;
    let unit_totals = &f.readings.unit;
    let unit_mwh = unit_totals.heat_mwh();
    let m2 = f.unit.living_space_m2;

    let heating_devices_total = device_total(&f.readings.heat_devices);
    let warm_water_devices_total = device_total(&f.readings.warm_water_devices);
    let cold_water_devices_total = device_total(&f.readings.cold_water_devices);

    UnitBreakdown {
        unit_id: f.unit.id,
        unit_label: f.unit.display_label(),
        contractors_names: f.tenancy.joined_names(),
        street: f.property.street.clone(),
        zip: f.property.zip.clone(),
        billing_period_start: format_date_german(f.period.start_date),
        billing_period_end: format_date_german(f.period.end_date),
        created_at: format_date_german(f.input.document.created_at),
        time_fraction: f.time_fraction,
        living_space_m2: m2,
        living_space_m2_formatted: format_german_number(m2, 2),
        heating_base_cost: costs.heating_base,
        heating_base_cost_formatted: format_euro(costs.heating_base),
        heating_base_cost_calc: area_calc(m2, f.heating.base_rate_per_m2, f.time_fraction),
        heating_consumption_mwh: unit_mwh,
        heating_consumption_mwh_formatted: format_german_number(unit_mwh, 2),
        heating_consumption_cost: costs.heating_consumption,
        heating_consumption_cost_formatted: format_euro(costs.heating_consumption),
        heating_consumption_calc: format!(
            "{} MWh x {} €/MWh",
            format_german_number(unit_mwh, 2),
            format_german_number(f.heating.consumption_rate_per_mwh, 6)
        ),
        warm_water_base_cost: costs.warm_water_base,
        warm_water_base_cost_formatted: format_euro(costs.warm_water_base),
        warm_water_base_cost_calc: area_calc(m2, f.warm_water.base_rate_per_m2, f.time_fraction),
        warm_water_consumption_m3: unit_totals.water_hot_m3,
        warm_water_consumption_m3_formatted: format_german_number(unit_totals.water_hot_m3, 2),
        warm_water_consumption_cost: costs.warm_water_consumption,
        warm_water_consumption_cost_formatted: format_euro(costs.warm_water_consumption),
        warm_water_consumption_calc: format!(
            "{} m³ x {} €/m³",
            format_german_number(unit_totals.water_hot_m3, 2),
            format_german_number(f.warm_water.consumption_rate_per_m3, 6)
        ),
        heating_and_warm_water_total: costs.heating_and_warm_water(),
        heating_and_warm_water_total_formatted: format_euro(costs.heating_and_warm_water()),
        cold_water_items: f
            .unit_cold_water_lines
            .iter()
            .map(|line| {
                let basis = line.subtype.basis();
                UnitColdWaterRow {
                    label: line.subtype.label().to_string(),
                    volume: line.volume,
                    volume_formatted: format_german_number(line.volume, quantity_decimals(basis)),
                    unit: basis.unit_label().to_string(),
                    rate: line.rate,
                    rate_formatted: format_german_number(line.rate, line.subtype.rate_decimals()),
                    rate_unit: basis.rate_label().to_string(),
                    cost: line.cost,
                    cost_formatted: format_euro(line.cost),
                }
            })
            .collect(),
        cold_water_total: costs.cold_water_total,
        cold_water_total_formatted: format_euro(costs.cold_water_total),
        grand_total: costs.grand_total,
        grand_total_formatted: format_euro(costs.grand_total),
        state_relief: f
            .aggregation
            .energy_relief
            .as_ref()
            .zip(costs.relief_share)
            .map(|(relief, share)| StateRelief {
                label: relief.label.clone(),
                building_total: relief.amount,
                building_total_formatted: format_euro(relief.amount),
                unit_share: share,
                unit_share_formatted: format_euro(share),
            }),
        heating_devices: f.readings.heat_devices.clone(),
        warm_water_devices: f.readings.warm_water_devices.clone(),
        cold_water_devices: f.readings.cold_water_devices.clone(),
        heating_devices_total,
        heating_devices_total_formatted: format_german_number(heating_devices_total, 2),
        warm_water_devices_total,
        warm_water_devices_total_formatted: format_german_number(warm_water_devices_total, 2),
        cold_water_devices_total,
        cold_water_devices_total_formatted: format_german_number(cold_water_devices_total, 2),
    }
}

fn co2(f: &Figures<'_>) -> Co2Section {
    let co2 = &f.co2;
    let factor = co2.emission_factor;
    let tier = co2.tier();

    let mut energy_rows: Vec<Co2EnergyRow> = f
        .aggregation
        .energy_items
        .iter()
        .filter(|line| line.kwh > Decimal::ZERO)
        .map(|line| {
            let co2_kg = round_money(line.kwh * factor);
            let cost = line.co2_cost.unwrap_or_default();
            Co2EnergyRow {
                label: line.label.clone(),
                date: date_or_empty(line.date),
                kwh: line.kwh,
                kwh_formatted: format_german_number(line.kwh, 0),
                co2_kg,
                co2_kg_formatted: format_german_number(co2_kg, 2),
                cost,
                cost_formatted: format_euro(cost),
            }
        })
        .collect();
    if energy_rows.is_empty() {
        energy_rows.push(Co2EnergyRow {
            label: METERED_ENERGY_LABEL.to_string(),
            date: String::new(),
            kwh: co2.total_kwh,
            kwh_formatted: format_german_number(co2.total_kwh, 0),
            co2_kg: co2.total_co2_kg,
            co2_kg_formatted: format_german_number(co2.total_co2_kg, 2),
            cost: f.co2_cost_total,
            cost_formatted: format_euro(f.co2_cost_total),
        });
    }

    Co2Section {
        energy_carrier: f.property.energy_carrier.clone().unwrap_or_default(),
        energy_rows,
        total_kwh: co2.total_kwh,
        total_kwh_formatted: format_german_number(co2.total_kwh, 0),
        total_co2_kg: co2.total_co2_kg,
        total_co2_kg_formatted: format_german_number(co2.total_co2_kg, 2),
        total_co2_tonnes: co2.total_co2_tonnes,
        total_co2_tonnes_formatted: format_german_number(co2.total_co2_tonnes, 3),
        total_cost: f.co2_cost_total,
        total_cost_formatted: format_euro(f.co2_cost_total),
        total_living_space_m2: f.property.total_living_space_m2,
        total_living_space_m2_formatted: format_german_number(f.property.total_living_space_m2, 2),
        emission_factor_kg_per_kwh: factor,
        emission_factor_formatted: format_german_number(factor, 5),
        emission_per_m2: co2.emission_per_m2,
        emission_per_m2_formatted: format_german_number(co2.emission_per_m2, 2),
        classification_table: CO2_TIERS
            .iter()
            .enumerate()
            .map(|(index, t)| Co2TierRow {
                range_label: t.range_label(),
                tenant_percent: t.tenant_percent,
                landlord_percent: t.landlord_percent,
                is_highlighted: index == co2.tier_index,
            })
            .collect(),
        selected_tier_tenant_percent: tier.tenant_percent,
        selected_tier_landlord_percent: tier.landlord_percent,
        building_tenant_cost: co2.building.tenant,
        building_tenant_cost_formatted: format_euro(co2.building.tenant),
        building_landlord_cost: co2.building.landlord,
        building_landlord_cost_formatted: format_euro(co2.building.landlord),
        building_total_cost: co2.building.total,
        building_total_cost_formatted: format_euro(co2.building.total),
        unit_tenant_cost: co2.unit.tenant,
        unit_tenant_cost_formatted: format_euro(co2.unit.tenant),
        unit_landlord_cost: co2.unit.landlord,
        unit_landlord_cost_formatted: format_euro(co2.unit.landlord),
        unit_total_cost: co2.unit.total,
        unit_total_cost_formatted: format_euro(co2.unit.total),
        portal_link: f.config.portal_link.clone(),
    }
}

fn per_m2(kwh: Decimal, m2: Decimal) -> Decimal {
    if m2 > Decimal::ZERO {
        round_money(kwh / m2)
    } else {
        Decimal::ZERO
    }
}

fn energy_summary(f: &Figures<'_>) -> EnergySummary {
    let unit = &f.readings.unit;
    let heating_kwh = unit.heat_kwh;
    let warm_water_kwh = warm_water_energy_kwh(unit.water_hot_m3);
    let total_unit_kwh = heating_kwh + warm_water_kwh;
    let m2 = f.unit.living_space_m2;
    let kwh_per_m2 = per_m2(total_unit_kwh, m2);
    let property_average = per_m2(f.energy_total_kwh, f.property.total_living_space_m2);
    let national_average = f.config.national_average_kwh_per_m2;
    let primary_factor = f.config.primary_energy_factor;

    EnergySummary {
        energy_carrier: f.property.energy_carrier.clone().unwrap_or_default(),
        total_kwh: f.energy_total_kwh,
        total_kwh_formatted: format_german_number(f.energy_total_kwh, 1),
        co2_emission_factor: f.co2.emission_factor,
        co2_emission_factor_formatted: format_german_number(f.co2.emission_factor, 5),
        primary_energy_factors: vec![PrimaryEnergyFactorRow {
            label: PRIMARY_ENERGY_LABEL.to_string(),
            value: primary_factor,
            value_formatted: format_german_number(primary_factor, 1),
        }],
        total_co2_kg: f.co2.total_co2_kg,
        total_co2_kg_formatted: format_german_number(f.co2.total_co2_kg, 2),
        heating_kwh,
        heating_kwh_formatted: format_german_number(heating_kwh, 2),
        warm_water_kwh,
        warm_water_kwh_formatted: format_german_number(warm_water_kwh, 2),
        total_unit_kwh,
        total_unit_kwh_formatted: format_german_number(total_unit_kwh, 2),
        living_space_m2: m2,
        living_space_m2_formatted: format_german_number(m2, 2),
        kwh_per_m2,
        kwh_per_m2_formatted: format_german_number(kwh_per_m2, 2),
        national_average_kwh_per_m2: national_average,
        national_average_formatted: format_german_number(national_average, 1),
        property_average_kwh_per_m2: property_average,
        property_average_formatted: format_german_number(property_average, 2),
        portal_link: f.config.portal_link.clone(),
    }
}
