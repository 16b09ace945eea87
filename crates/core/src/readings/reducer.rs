//! Reduction of all meter series of a property.

use abrechnung_shared::format_german_number;
use abrechnung_shared::types::UnitId;
use rust_decimal::Decimal;
use tracing::debug;

use super::types::{ConsumptionTotals, DeviceReadingRow, Medium, MeterSeries};
use crate::period::BillingPeriod;

/// Building and unit consumption plus the unit's device rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadingsSummary {
    /// All meters of the property.
    pub building: ConsumptionTotals,
    /// Meters installed in the target unit.
    pub unit: ConsumptionTotals,
    /// Unit heat meters, values in MWh.
    pub heat_devices: Vec<DeviceReadingRow>,
    /// Unit hot-water meters.
    pub warm_water_devices: Vec<DeviceReadingRow>,
    /// Unit cold-water meters.
    pub cold_water_devices: Vec<DeviceReadingRow>,
}

/// Reduces meter series to period consumption.
pub struct ReadingsReducer;

impl ReadingsReducer {
    /// Reduces `series` over `period`, collecting device rows for `unit_id`.
    ///
    /// Rows without a location use `default_location`.
    #[must_use]
    pub fn reduce(
        series: &[MeterSeries],
        period: &BillingPeriod,
        unit_id: UnitId,
        default_location: &str,
    ) -> ReadingsSummary {
        let mut summary = ReadingsSummary::default();

        for meter in series {
            let delta = meter.delta(period);
            summary.building.add(meter.medium, delta.delta);

            if meter.unit_id != Some(unit_id) {
                continue;
            }
            summary.unit.add(meter.medium, delta.delta);

            let scale = match meter.medium {
                Medium::Heat => Decimal::ONE_THOUSAND,
                Medium::WaterHot | Medium::WaterCold => Decimal::ONE,
            };
            let start = delta.start / scale;
            let end = delta.end / scale;
            let consumption = delta.delta / scale;

            let row = DeviceReadingRow {
                device_number: meter.meter_number.clone(),
                device_type: meter
                    .device_type
                    .as_deref()
                    .and_then(Medium::from_device_type)
                    .unwrap_or(meter.medium)
                    .device_label()
                    .to_string(),
                location: meter
                    .location
                    .clone()
                    .filter(|l| !l.trim().is_empty())
                    .unwrap_or_else(|| default_location.to_string()),
                start_reading: start,
                start_reading_formatted: format_german_number(start, 2),
                end_reading: end,
                end_reading_formatted: format_german_number(end, 2),
                consumption,
                consumption_formatted: format_german_number(consumption, 2),
                unit: meter.medium.display_unit().to_string(),
            };

            match meter.medium {
                Medium::Heat => summary.heat_devices.push(row),
                Medium::WaterHot => summary.warm_water_devices.push(row),
                Medium::WaterCold => summary.cold_water_devices.push(row),
            }
        }

        debug!(
            unit_id = %unit_id,
            building_heat_kwh = %summary.building.heat_kwh,
            building_water_hot_m3 = %summary.building.water_hot_m3,
            building_water_cold_m3 = %summary.building.water_cold_m3,
            "Meter readings reduced"
        );

        summary
    }
}
