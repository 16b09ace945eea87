//! Statement model builder.
//!
//! Validates the input snapshot, runs the calculation stages in order and
//! hands the derived figures to the section mappers.

use abrechnung_shared::types::{UnitId, round_money};
use abrechnung_shared::{DeviceRentalPolicy, EngineConfig};
use rust_decimal::Decimal;
use tracing::debug;

use super::error::{MissingInputError, StatementError};
use super::identifiers::ReferenceCodes;
use super::input::StatementInput;
use super::sections::{self, Figures, UnitCosts};
use super::settlement::{SettlementBasis, settle};
use super::types::StatementModel;
use super::validation::Reconciliation;
use super::warning::{DataInconsistencyWarning, Warnings};
use crate::allocation::{AllocationBasis, AllocationConfigError, CostSplit, Denominator};
use crate::co2::{Co2Service, emission_factor_for};
use crate::invoice::InvoiceAggregator;
use crate::property::{Contract, TenancySummary, expected_prepayment};
use crate::readings::{Medium, ReadingsReducer};
use crate::thermal::{HeatingRates, WarmWaterCosts};
use crate::water::ColdWaterRates;

/// Builds statement models from input snapshots.
#[derive(Debug, Clone, Default)]
pub struct StatementBuilder {
    config: EngineConfig,
}

impl StatementBuilder {
    /// Creates a builder with the given calculation defaults.
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The calculation defaults in use.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Builds the statement for the document's unit, or the first unit.
    ///
    /// # Errors
    ///
    /// Returns a [`StatementError`] when a required record is missing or the
    /// allocation configuration is invalid. No partial model is produced.
    pub fn build(&self, input: &StatementInput) -> Result<StatementModel, StatementError> {
        self.build_target(input, input.target_unit_id())
    }

    /// Builds the statement for `unit_id`.
    ///
    /// # Errors
    ///
    /// See [`Self::build`].
    pub fn build_for_unit(
        &self,
        input: &StatementInput,
        unit_id: UnitId,
    ) -> Result<StatementModel, StatementError> {
        self.build_target(input, Some(unit_id))
    }

    /// Builds one statement per unit, in unit order.
    #[must_use]
    pub fn build_all(
        &self,
        input: &StatementInput,
    ) -> Vec<(UnitId, Result<StatementModel, StatementError>)> {
        input
            .units
            .iter()
            .map(|unit| (unit.id, self.build_for_unit(input, unit.id)))
            .collect()
    }

    #[allow(clippy::too_many_lines)]
    fn build_target(
        &self,
        input: &StatementInput,
        unit_id: Option<UnitId>,
    ) -> Result<StatementModel, StatementError> {
        let period = input
            .billing_period
            .ok_or(MissingInputError::BillingPeriod)?;
        period.validate()?;
        let property = input.property.as_ref().ok_or(MissingInputError::Property)?;
        let split = self.cost_split(input)?;
        if property.total_living_space_m2.is_zero() {
            return Err(
                AllocationConfigError::ZeroDenominator(Denominator::TotalLivingSpace).into(),
            );
        }
        let unit_id = unit_id.ok_or(MissingInputError::Units)?;
        let unit = input
            .units
            .iter()
            .find(|unit| unit.id == unit_id)
            .ok_or(MissingInputError::Unit(unit_id))?;
        let contracts: Vec<Contract> = input
            .contracts
            .iter()
            .filter(|contract| contract.unit_id == unit_id)
            .cloned()
            .collect();
        if contracts.is_empty() {
            return Err(MissingInputError::Contract(unit_id).into());
        }

        debug!(
            unit_id = %unit_id,
            period_start = %period.start_date,
            period_end = %period.end_date,
            "Building statement"
        );

        let mut warnings = Warnings::default();
        let total_m2 = property.total_living_space_m2;
        let unit_count = input.units.len();

        let readings = ReadingsReducer::reduce(
            &input.meter_series,
            &period,
            unit_id,
            &unit.display_label(),
        );
        debug!(
            unit_id = %unit_id,
            heat_kwh = %readings.building.heat_kwh,
            water_hot_m3 = %readings.building.water_hot_m3,
            water_cold_m3 = %readings.building.water_cold_m3,
            "Readings reduced"
        );

        let aggregation = InvoiceAggregator::aggregate(&input.invoices, readings.building.heat_kwh);
        for cost_type in &aggregation.unclassified_cost_types {
            warnings.push(DataInconsistencyWarning::UnknownCostType {
                cost_type: cost_type.clone(),
            });
        }
        debug!(
            unit_id = %unit_id,
            fuel_total = %aggregation.fuel_total,
            operational_total = %aggregation.operational_total,
            separate_distribution_total = %aggregation.separate_distribution_total,
            grand_total = %aggregation.grand_total,
            "Invoices grouped"
        );

        let energy_total_kwh = if aggregation.energy_total_kwh > Decimal::ZERO {
            aggregation.energy_total_kwh
        } else {
            readings.building.heat_kwh
        };
        if energy_total_kwh <= Decimal::ZERO {
            warnings.push(DataInconsistencyWarning::MissingEnergyQuantity);
        }

        let (heating_rental, warm_water_rental) = match self.config.device_rental_policy {
            DeviceRentalPolicy::PoolSurcharge => (
                aggregation.heating_device_rental,
                aggregation.warm_water_device_rental,
            ),
            DeviceRentalPolicy::SeparateOnly => (Decimal::ZERO, Decimal::ZERO),
        };

        let warm_water = WarmWaterCosts::compute(
            readings.building.water_hot_m3,
            energy_total_kwh,
            aggregation.heating_total,
            warm_water_rental,
            total_m2,
            split,
        );
        if readings.building.water_hot_m3 <= Decimal::ZERO && !warm_water.split.consumption.is_zero() {
            warnings.push(DataInconsistencyWarning::ZeroConsumption {
                medium: Medium::WaterHot,
            });
        }

        let heating = HeatingRates::compute(
            aggregation.heating_total,
            &warm_water,
            heating_rental,
            readings.building.heat_mwh(),
            total_m2,
            split,
        );
        if readings.building.heat_kwh <= Decimal::ZERO && !heating.split.consumption.is_zero() {
            warnings.push(DataInconsistencyWarning::ZeroConsumption {
                medium: Medium::Heat,
            });
        }

        let cold_water = ColdWaterRates::compute(
            &aggregation.cold_water_invoices,
            readings.building.water_cold_m3,
            unit_count,
        );
        if cold_water.missing_volume {
            warnings.push(DataInconsistencyWarning::ZeroConsumption {
                medium: Medium::WaterCold,
            });
        }
        debug!(
            unit_id = %unit_id,
            warm_water_total = %warm_water.total_cost,
            heating_total = %heating.total_cost,
            heating_base_rate = %heating.base_rate_per_m2,
            cold_water_total = %cold_water.total_cost,
            "Rates derived"
        );

        let basis = AllocationBasis {
            unit_living_space: unit.living_space_m2,
            total_living_space: total_m2,
            occupied_days: unit.occupied_days,
            period_days: period.days(),
            unit_count,
            unit_consumption: readings.unit.heat_kwh,
            total_consumption: readings.building.heat_kwh,
        };
        let time_fraction = basis.time_fraction();
        let unit_cold_water_lines = cold_water.unit_lines(readings.unit.water_cold_m3, time_fraction);
        let unit_costs = UnitCosts::compute(
            &basis,
            &readings.unit,
            &warm_water,
            &heating,
            &unit_cold_water_lines,
            aggregation.energy_relief.as_ref().map(|relief| relief.amount),
        );

        let co2_costs: Vec<Decimal> = aggregation
            .energy_items
            .iter()
            .filter_map(|line| line.co2_cost)
            .collect();
        if co2_costs.is_empty() {
            warnings.push(DataInconsistencyWarning::MissingCo2Cost);
        }
        let co2_cost_total = round_money(co2_costs.iter().copied().sum());
        let co2 = Co2Service::allocate(
            energy_total_kwh,
            co2_cost_total,
            total_m2,
            unit.living_space_m2,
            emission_factor_for(
                property.energy_carrier.as_deref(),
                self.config.default_emission_factor_kg_per_kwh,
            ),
        );

        let settlement = settle(
            &input.invoices,
            &SettlementBasis {
                categories: &input.cost_categories,
                basis,
                building: &readings.building,
                unit: &readings.unit,
            },
            expected_prepayment(&contracts, &period),
            &mut warnings,
        )?;

        Reconciliation {
            aggregation: &aggregation,
            warm_water: &warm_water,
            heating: &heating,
            unit_cold_water_lines_total: unit_cold_water_lines.iter().map(|line| line.cost).sum(),
            unit_cold_water_total: unit_costs.cold_water_total,
        }
        .check(&mut warnings);

        let tenancy = TenancySummary::collect(&contracts, &input.contractors, &period);
        let figures = Figures {
            config: &self.config,
            input,
            period,
            property,
            unit,
            codes: ReferenceCodes::derive(
                property.id,
                input.owner.as_ref().map(|owner| owner.id),
                unit_id,
                input.document.id,
            ),
            tenancy,
            readings,
            aggregation,
            energy_total_kwh,
            warm_water,
            heating,
            cold_water,
            unit_cold_water_lines,
            time_fraction,
            unit_costs,
            co2,
            co2_cost_total,
            settlement,
        };

        let model = sections::assemble(&figures, warnings.into_vec());
        debug!(
            unit_id = %unit_id,
            grand_total = %model.unit_breakdown.grand_total,
            total_diff = %model.cover.settlement.total_diff,
            warnings = model.warnings.len(),
            "Statement assembled"
        );
        Ok(model)
    }

    /// The document override, else the configured split.
    fn cost_split(&self, input: &StatementInput) -> Result<CostSplit, AllocationConfigError> {
        match input.allocation_config {
            Some(config) => CostSplit::new(
                config.living_space_share_percent,
                config.consumption_dependent_percent,
            ),
            None => CostSplit::new(
                self.config.living_space_share_percent,
                self.config.consumption_dependent_percent,
            ),
        }
    }
}
