//! The statement model consumed by the preview and print renderers.
//!
//! Plain data only. Every numeric field that is printed carries a
//! `*_formatted` sibling in the German display format, so renderers never
//! format or recompute numbers themselves. Field names serialize in camelCase.

use abrechnung_shared::DeviceRentalPolicy;
use abrechnung_shared::types::{ContractorId, InvoiceId, UnitId};
use rust_decimal::Decimal;
use serde::Serialize;

use super::pages::DocumentKind;
use super::warning::DataInconsistencyWarning;
use crate::readings::DeviceReadingRow;

/// A complete statement for one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementModel {
    /// Statement type.
    pub kind: DocumentKind,
    /// Page 1.
    pub cover: Cover,
    /// Page 2.
    pub building_calc: BuildingCalc,
    /// Page 3.
    pub cold_water: ColdWaterSection,
    /// Page 4.
    pub unit_breakdown: UnitBreakdown,
    /// Page 5.
    pub co2: Co2Section,
    /// Page 6.
    pub energy_summary: EnergySummary,
    /// Data problems worked around, in discovery order.
    pub warnings: Vec<DataInconsistencyWarning>,
}

/// Tenant reference on the cover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractorRef {
    /// Contractor ID.
    pub id: ContractorId,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
}

/// Page 1: addressee, reference codes and the settlement result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cover {
    /// Cover title for the document kind.
    pub document_title: String,
    /// Property reference number.
    pub property_number: String,
    /// Customer number, `H` + 7 digits.
    pub heidi_customer_number: String,
    /// User number, 10 digits.
    pub user_number: String,
    /// Portal security code, 8 hex digits.
    pub security_code: String,
    /// Tenant names, comma-separated.
    pub contractors_names: String,
    /// Tenants of the period.
    pub contractors: Vec<ContractorRef>,
    /// Property street.
    pub street: String,
    /// Property postal code.
    pub zip: String,
    /// Landlord first name.
    pub owner_first_name: String,
    /// Landlord last name.
    pub owner_last_name: String,
    /// Creation date (DD.MM.YYYY).
    pub created_at: String,
    /// Billing period start (DD.MM.YYYY).
    pub billing_period_start: String,
    /// Billing period end (DD.MM.YYYY).
    pub billing_period_end: String,
    /// Start of the tenants' use within the period.
    pub usage_period_start: String,
    /// End of the tenants' use within the period.
    pub usage_period_end: String,
    /// Balance owed (negative) or refunded (positive); equals `settlement.total_diff`.
    pub total_amount: Decimal,
    /// `total_amount` formatted for display.
    pub total_amount_formatted: String,
    /// Tenant portal link.
    pub portal_link: String,
    /// Operating-cost settlement.
    pub settlement: Settlement,
}

/// One invoice on the operating-cost settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementLine {
    /// Source invoice.
    pub invoice_id: InvoiceId,
    /// Invoice label.
    pub label: String,
    /// Cost category name, "Unbekannt" when none matches.
    pub category_name: String,
    /// Allocation key label.
    pub allocation_key: String,
    /// Invoice amount.
    pub total_amount: Decimal,
    /// `total_amount` formatted for display.
    pub total_amount_formatted: String,
    /// The unit's share.
    pub unit_share: Decimal,
    /// `unit_share` formatted for display.
    pub unit_share_formatted: String,
}

/// Prepayments against the unit's actual cost share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    /// One line per invoice, source order.
    pub lines: Vec<SettlementLine>,
    /// Prepayments of the eligible contracts.
    pub expected_prepayment: Decimal,
    /// `expected_prepayment` formatted for display.
    pub expected_prepayment_formatted: String,
    /// Σ unit shares.
    pub actual_cost_share: Decimal,
    /// `actual_cost_share` formatted for display.
    pub actual_cost_share_formatted: String,
    /// `expected_prepayment − actual_cost_share`.
    pub total_diff: Decimal,
    /// `total_diff` formatted for display.
    pub total_diff_formatted: String,
}

/// Energy purchase row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyInvoiceRow {
    /// Invoice label.
    pub label: String,
    /// Invoice date (DD.MM.YYYY), empty when unknown.
    pub date: String,
    /// Energy in kWh.
    pub kwh: Decimal,
    /// `kwh` formatted for display.
    pub kwh_formatted: String,
    /// Amount in euro.
    pub amount: Decimal,
    /// `amount` formatted for display.
    pub amount_formatted: String,
}

/// Price-brake credit row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReliefRow {
    /// Relief label.
    pub label: String,
    /// Amount in euro.
    pub amount: Decimal,
    /// `amount` formatted for display.
    pub amount_formatted: String,
}

/// Plain cost row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostItemRow {
    /// Item label.
    pub label: String,
    /// Invoice date (DD.MM.YYYY), empty when unknown.
    pub date: String,
    /// Amount in euro.
    pub amount: Decimal,
    /// `amount` formatted for display.
    pub amount_formatted: String,
}

/// Warmwasser pool on page 2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarmWaterSection {
    /// Constant 2,5 of the warm-water formula.
    pub constant_factor: Decimal,
    /// Building hot-water volume in m³.
    pub volume_m3: Decimal,
    /// `volume_m3` formatted for display.
    pub volume_m3_formatted: String,
    /// Upper temperature (60 °C).
    pub temp_diff_high: Decimal,
    /// Lower temperature (10 °C).
    pub temp_diff_low: Decimal,
    /// Divisor 1,15 of the warm-water formula.
    pub conversion_factor: Decimal,
    /// Warm-water energy in kWh.
    pub energy_kwh: Decimal,
    /// `energy_kwh` formatted for display.
    pub energy_kwh_formatted: String,
    /// Warm-water share of the energy in percent.
    pub energy_share_percent: Decimal,
    /// `energy_share_percent` formatted for display.
    pub energy_share_percent_formatted: String,
    /// Warm-water share of the energy and operating costs.
    pub cost_from_energy: Decimal,
    /// `cost_from_energy` formatted for display.
    pub cost_from_energy_formatted: String,
    /// Device rental added to the pool.
    pub device_rental: Decimal,
    /// `device_rental` formatted for display.
    pub device_rental_formatted: String,
    /// Pool total.
    pub total_cost: Decimal,
    /// `total_cost` formatted for display.
    pub total_cost_formatted: String,
    /// Grundkosten share in percent.
    pub base_cost_percent: Decimal,
    /// Grundkosten amount.
    pub base_cost_amount: Decimal,
    /// `base_cost_amount` formatted for display.
    pub base_cost_amount_formatted: String,
    /// Living space the Grundkosten are spread over.
    pub base_cost_area: Decimal,
    /// `base_cost_area` formatted for display.
    pub base_cost_area_formatted: String,
    /// Grundkosten rate in €/m².
    pub base_cost_rate_per_m2: Decimal,
    /// `base_cost_rate_per_m2` formatted for display.
    pub base_cost_rate_per_m2_formatted: String,
    /// Verbrauchskosten share in percent.
    pub consumption_cost_percent: Decimal,
    /// Verbrauchskosten amount.
    pub consumption_cost_amount: Decimal,
    /// `consumption_cost_amount` formatted for display.
    pub consumption_cost_amount_formatted: String,
    /// Hot-water volume the Verbrauchskosten are spread over.
    pub consumption_cost_volume: Decimal,
    /// `consumption_cost_volume` formatted for display.
    pub consumption_cost_volume_formatted: String,
    /// Verbrauchskosten rate in €/m³.
    pub consumption_cost_rate_per_m3: Decimal,
    /// `consumption_cost_rate_per_m3` formatted for display.
    pub consumption_cost_rate_per_m3_formatted: String,
}

/// Heizung pool on page 2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatingSection {
    /// Energy and operating costs before the warm-water deduction.
    pub energy_total: Decimal,
    /// `energy_total` formatted for display.
    pub energy_total_formatted: String,
    /// Warm-water cost deducted.
    pub minus_warm_water: Decimal,
    /// `minus_warm_water` formatted for display.
    pub minus_warm_water_formatted: String,
    /// Device rental added to the pool.
    pub device_rental: Decimal,
    /// `device_rental` formatted for display.
    pub device_rental_formatted: String,
    /// Pool total.
    pub total_cost: Decimal,
    /// `total_cost` formatted for display.
    pub total_cost_formatted: String,
    /// Grundkosten share in percent.
    pub base_cost_percent: Decimal,
    /// Grundkosten amount.
    pub base_cost_amount: Decimal,
    /// `base_cost_amount` formatted for display.
    pub base_cost_amount_formatted: String,
    /// Living space the Grundkosten are spread over.
    pub base_cost_area: Decimal,
    /// `base_cost_area` formatted for display.
    pub base_cost_area_formatted: String,
    /// Grundkosten rate in €/m².
    pub base_cost_rate_per_m2: Decimal,
    /// `base_cost_rate_per_m2` formatted for display.
    pub base_cost_rate_per_m2_formatted: String,
    /// Verbrauchskosten share in percent.
    pub consumption_cost_percent: Decimal,
    /// Verbrauchskosten amount.
    pub consumption_cost_amount: Decimal,
    /// `consumption_cost_amount` formatted for display.
    pub consumption_cost_amount_formatted: String,
    /// Building heat consumption in MWh.
    pub consumption_mwh: Decimal,
    /// `consumption_mwh` formatted for display.
    pub consumption_mwh_formatted: String,
    /// Verbrauchskosten rate in €/MWh.
    pub consumption_cost_rate_per_mwh: Decimal,
    /// `consumption_cost_rate_per_mwh` formatted for display.
    pub consumption_cost_rate_per_mwh_formatted: String,
}

/// Page 2: invoice pools and the Heizung / Warmwasser derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingCalc {
    /// Treatment applied to pool-tagged device rental.
    pub device_rental_policy: DeviceRentalPolicy,
    /// Energy purchases.
    pub energy_invoices: Vec<EnergyInvoiceRow>,
    /// Preisbremse credit, if any.
    pub energy_relief: Option<ReliefRow>,
    /// Σ purchased energy in kWh.
    pub energy_total_kwh: Decimal,
    /// `energy_total_kwh` formatted for display.
    pub energy_total_kwh_formatted: String,
    /// Fuel subtotal including the relief.
    pub energy_total_amount: Decimal,
    /// `energy_total_amount` formatted for display.
    pub energy_total_amount_formatted: String,
    /// Additional operating costs.
    pub heating_cost_items: Vec<CostItemRow>,
    /// Energy subtotal carried into the heating-cost table.
    pub heating_cost_carry_over: Decimal,
    /// `heating_cost_carry_over` formatted for display.
    pub heating_cost_carry_over_formatted: String,
    /// Σ additional operating costs.
    pub operational_total: Decimal,
    /// `operational_total` formatted for display.
    pub operational_total_formatted: String,
    /// Fuel plus operating costs.
    pub heating_cost_total: Decimal,
    /// `heating_cost_total` formatted for display.
    pub heating_cost_total_formatted: String,
    /// Metering and device-rental costs.
    pub distribution_cost_items: Vec<CostItemRow>,
    /// Σ metering and device-rental costs.
    pub distribution_cost_total: Decimal,
    /// `distribution_cost_total` formatted for display.
    pub distribution_cost_total_formatted: String,
    /// Σ cold-water costs.
    pub cold_water_total: Decimal,
    /// `cold_water_total` formatted for display.
    pub cold_water_total_formatted: String,
    /// Costs distributed outside the heating split.
    pub separate_distribution_total: Decimal,
    /// `separate_distribution_total` formatted for display.
    pub separate_distribution_total_formatted: String,
    /// All costs of the building.
    pub grand_total: Decimal,
    /// `grand_total` formatted for display.
    pub grand_total_formatted: String,
    /// Warmwasser pool.
    pub warm_water: WarmWaterSection,
    /// Heizung pool.
    pub heating: HeatingSection,
}

/// Building-level cold-water rate row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColdWaterRateRow {
    /// Subtype label.
    pub label: String,
    /// Subtype amount.
    pub total_cost: Decimal,
    /// `total_cost` formatted for display.
    pub total_cost_formatted: String,
    /// Volume or count the rate divides by.
    pub total_volume: Decimal,
    /// `total_volume` formatted for display.
    pub total_volume_formatted: String,
    /// "m³" or "Nutzeinh.".
    pub unit: String,
    /// Rate.
    pub rate: Decimal,
    /// `rate` formatted for display.
    pub rate_formatted: String,
    /// Rate unit, e.g. "€/m³".
    pub rate_unit: String,
}

/// Page 3.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColdWaterSection {
    /// Σ cold-water costs.
    pub total_cost: Decimal,
    /// `total_cost` formatted for display.
    pub total_cost_formatted: String,
    /// One rate per cold-water subtype, first-seen order.
    pub rate_items: Vec<ColdWaterRateRow>,
    /// Equals `unit_breakdown.cold_water_total`.
    pub unit_total_cost: Decimal,
    /// `unit_total_cost` formatted for display.
    pub unit_total_cost_formatted: String,
}

/// Unit cold-water line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitColdWaterRow {
    /// Subtype label.
    pub label: String,
    /// Unit volume or count.
    pub volume: Decimal,
    /// `volume` formatted for display.
    pub volume_formatted: String,
    /// Quantity unit.
    pub unit: String,
    /// Building rate.
    pub rate: Decimal,
    /// `rate` formatted for display.
    pub rate_formatted: String,
    /// Rate unit, e.g. "€/m³".
    pub rate_unit: String,
    /// Unit amount.
    pub cost: Decimal,
    /// `cost` formatted for display.
    pub cost_formatted: String,
}

/// The unit's share of the state energy relief.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateRelief {
    /// Relief label.
    pub label: String,
    /// Building relief amount.
    pub building_total: Decimal,
    /// `building_total` formatted for display.
    pub building_total_formatted: String,
    /// The unit's share.
    pub unit_share: Decimal,
    /// `unit_share` formatted for display.
    pub unit_share_formatted: String,
}

/// Page 4: the unit's heating, warm-water and cold-water costs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitBreakdown {
    /// Unit.
    pub unit_id: UnitId,
    /// Unit label.
    pub unit_label: String,
    /// Tenant names, comma-separated.
    pub contractors_names: String,
    /// Property street.
    pub street: String,
    /// Property postal code.
    pub zip: String,
    /// Billing period start (DD.MM.YYYY).
    pub billing_period_start: String,
    /// Billing period end (DD.MM.YYYY).
    pub billing_period_end: String,
    /// Creation date (DD.MM.YYYY).
    pub created_at: String,
    /// Occupied fraction of the period.
    pub time_fraction: Decimal,
    /// Unit living space in m².
    pub living_space_m2: Decimal,
    /// `living_space_m2` formatted for display.
    pub living_space_m2_formatted: String,
    /// Heizung Grundkosten.
    pub heating_base_cost: Decimal,
    /// `heating_base_cost` formatted for display.
    pub heating_base_cost_formatted: String,
    /// Calculation line for the Heizung Grundkosten.
    pub heating_base_cost_calc: String,
    /// Unit heat consumption in MWh.
    pub heating_consumption_mwh: Decimal,
    /// `heating_consumption_mwh` formatted for display.
    pub heating_consumption_mwh_formatted: String,
    /// Heizung Verbrauchskosten.
    pub heating_consumption_cost: Decimal,
    /// `heating_consumption_cost` formatted for display.
    pub heating_consumption_cost_formatted: String,
    /// Calculation line for the Heizung Verbrauchskosten.
    pub heating_consumption_calc: String,
    /// Warmwasser Grundkosten.
    pub warm_water_base_cost: Decimal,
    /// `warm_water_base_cost` formatted for display.
    pub warm_water_base_cost_formatted: String,
    /// Calculation line for the Warmwasser Grundkosten.
    pub warm_water_base_cost_calc: String,
    /// Unit hot-water consumption in m³.
    pub warm_water_consumption_m3: Decimal,
    /// `warm_water_consumption_m3` formatted for display.
    pub warm_water_consumption_m3_formatted: String,
    /// Warmwasser Verbrauchskosten.
    pub warm_water_consumption_cost: Decimal,
    /// `warm_water_consumption_cost` formatted for display.
    pub warm_water_consumption_cost_formatted: String,
    /// Calculation line for the Warmwasser Verbrauchskosten.
    pub warm_water_consumption_calc: String,
    /// Σ heating and warm-water costs.
    pub heating_and_warm_water_total: Decimal,
    /// `heating_and_warm_water_total` formatted for display.
    pub heating_and_warm_water_total_formatted: String,
    /// Cold-water lines.
    pub cold_water_items: Vec<UnitColdWaterRow>,
    /// Σ unit cold-water lines.
    pub cold_water_total: Decimal,
    /// `cold_water_total` formatted for display.
    pub cold_water_total_formatted: String,
    /// Unit total.
    pub grand_total: Decimal,
    /// `grand_total` formatted for display.
    pub grand_total_formatted: String,
    /// Share of the state energy relief, if any.
    pub state_relief: Option<StateRelief>,
    /// Heat meters.
    pub heating_devices: Vec<DeviceReadingRow>,
    /// Hot-water meters.
    pub warm_water_devices: Vec<DeviceReadingRow>,
    /// Cold-water meters.
    pub cold_water_devices: Vec<DeviceReadingRow>,
    /// Σ heat meter consumption.
    pub heating_devices_total: Decimal,
    /// `heating_devices_total` formatted for display.
    pub heating_devices_total_formatted: String,
    /// Σ hot-water meter consumption.
    pub warm_water_devices_total: Decimal,
    /// `warm_water_devices_total` formatted for display.
    pub warm_water_devices_total_formatted: String,
    /// Σ cold-water meter consumption.
    pub cold_water_devices_total: Decimal,
    /// `cold_water_devices_total` formatted for display.
    pub cold_water_devices_total_formatted: String,
}

/// Energy row on the CO2 page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Co2EnergyRow {
    /// Invoice label.
    pub label: String,
    /// Invoice date (DD.MM.YYYY).
    pub date: String,
    /// Energy in kWh.
    pub kwh: Decimal,
    /// `kwh` formatted for display.
    pub kwh_formatted: String,
    /// Emissions in kg.
    pub co2_kg: Decimal,
    /// `co2_kg` formatted for display.
    pub co2_kg_formatted: String,
    /// CO2 cost on the invoice.
    pub cost: Decimal,
    /// `cost` formatted for display.
    pub cost_formatted: String,
}

/// Row of the tier classification table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Co2TierRow {
    /// Band label in kg/m²/a.
    pub range_label: String,
    /// Tenant share in percent.
    pub tenant_percent: u32,
    /// Landlord share in percent.
    pub landlord_percent: u32,
    /// True for the band the building falls in.
    pub is_highlighted: bool,
}

/// Page 5.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Co2Section {
    /// Energy carrier.
    pub energy_carrier: String,
    /// Per-invoice energy and emissions.
    pub energy_rows: Vec<Co2EnergyRow>,
    /// Σ energy in kWh.
    pub total_kwh: Decimal,
    /// `total_kwh` formatted for display.
    pub total_kwh_formatted: String,
    /// Σ emissions in kg.
    pub total_co2_kg: Decimal,
    /// `total_co2_kg` formatted for display.
    pub total_co2_kg_formatted: String,
    /// Σ emissions in t.
    pub total_co2_tonnes: Decimal,
    /// `total_co2_tonnes` formatted for display.
    pub total_co2_tonnes_formatted: String,
    /// Building CO2 cost.
    pub total_cost: Decimal,
    /// `total_cost` formatted for display.
    pub total_cost_formatted: String,
    /// Property living space in m².
    pub total_living_space_m2: Decimal,
    /// `total_living_space_m2` formatted for display.
    pub total_living_space_m2_formatted: String,
    /// Emission factor in kg/kWh.
    pub emission_factor_kg_per_kwh: Decimal,
    /// `emission_factor` formatted for display.
    pub emission_factor_formatted: String,
    /// Emissions per m² and year.
    pub emission_per_m2: Decimal,
    /// `emission_per_m2` formatted for display.
    pub emission_per_m2_formatted: String,
    /// All ten bands.
    pub classification_table: Vec<Co2TierRow>,
    /// Tenant share of the selected band.
    pub selected_tier_tenant_percent: u32,
    /// Landlord share of the selected band.
    pub selected_tier_landlord_percent: u32,
    /// Tenant share of the building CO2 cost.
    pub building_tenant_cost: Decimal,
    /// `building_tenant_cost` formatted for display.
    pub building_tenant_cost_formatted: String,
    /// Landlord share of the building CO2 cost.
    pub building_landlord_cost: Decimal,
    /// `building_landlord_cost` formatted for display.
    pub building_landlord_cost_formatted: String,
    /// Building CO2 cost.
    pub building_total_cost: Decimal,
    /// `building_total_cost` formatted for display.
    pub building_total_cost_formatted: String,
    /// Tenant share of the unit CO2 cost.
    pub unit_tenant_cost: Decimal,
    /// `unit_tenant_cost` formatted for display.
    pub unit_tenant_cost_formatted: String,
    /// Landlord share of the unit CO2 cost.
    pub unit_landlord_cost: Decimal,
    /// `unit_landlord_cost` formatted for display.
    pub unit_landlord_cost_formatted: String,
    /// Unit CO2 cost.
    pub unit_total_cost: Decimal,
    /// `unit_total_cost` formatted for display.
    pub unit_total_cost_formatted: String,
    /// Tenant portal link.
    pub portal_link: String,
}

/// Primary energy factor row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryEnergyFactorRow {
    /// Energy source.
    pub label: String,
    /// Factor.
    pub value: Decimal,
    /// `value` formatted for display.
    pub value_formatted: String,
}

/// Page 6.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergySummary {
    /// Energy carrier.
    pub energy_carrier: String,
    /// Building energy in kWh.
    pub total_kwh: Decimal,
    /// `total_kwh` formatted for display.
    pub total_kwh_formatted: String,
    /// Emission factor in kg/kWh.
    pub co2_emission_factor: Decimal,
    /// `co2_emission_factor` formatted for display.
    pub co2_emission_factor_formatted: String,
    /// Primary energy factors.
    pub primary_energy_factors: Vec<PrimaryEnergyFactorRow>,
    /// Building emissions in kg.
    pub total_co2_kg: Decimal,
    /// `total_co2_kg` formatted for display.
    pub total_co2_kg_formatted: String,
    /// Unit heating energy in kWh.
    pub heating_kwh: Decimal,
    /// `heating_kwh` formatted for display.
    pub heating_kwh_formatted: String,
    /// Unit warm-water energy in kWh.
    pub warm_water_kwh: Decimal,
    /// `warm_water_kwh` formatted for display.
    pub warm_water_kwh_formatted: String,
    /// Unit heating plus warm-water energy in kWh.
    pub total_unit_kwh: Decimal,
    /// `total_unit_kwh` formatted for display.
    pub total_unit_kwh_formatted: String,
    /// Unit living space in m².
    pub living_space_m2: Decimal,
    /// `living_space_m2` formatted for display.
    pub living_space_m2_formatted: String,
    /// Unit consumption in kWh/m².
    pub kwh_per_m2: Decimal,
    /// `kwh_per_m2` formatted for display.
    pub kwh_per_m2_formatted: String,
    /// Reference consumption in kWh/m².
    pub national_average_kwh_per_m2: Decimal,
    /// `national_average` formatted for display.
    pub national_average_formatted: String,
    /// Property consumption in kWh/m².
    pub property_average_kwh_per_m2: Decimal,
    /// `property_average` formatted for display.
    pub property_average_formatted: String,
    /// Tenant portal link.
    pub portal_link: String,
}
