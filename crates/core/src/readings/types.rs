//! Meter and consumption types.

use abrechnung_shared::types::UnitId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::period::BillingPeriod;

/// Metered medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Medium {
    /// Heat energy, readings in kWh.
    Heat,
    /// Hot water, readings in m³.
    WaterHot,
    /// Cold water, readings in m³.
    WaterCold,
}

impl Medium {
    /// Maps a device-type label from the metering provider.
    #[must_use]
    pub fn from_device_type(device_type: &str) -> Option<Self> {
        match device_type.trim() {
            "Heat" | "Wärmemengenzähler" | "Wärmezähler" | "Heizkostenverteiler" | "WMZ Rücklauf" => {
                Some(Self::Heat)
            }
            "WWater" | "Warmwasserzähler" => Some(Self::WaterHot),
            "Water" | "Kaltwasserzähler" => Some(Self::WaterCold),
            _ => None,
        }
    }

    /// Name printed in device tables.
    #[must_use]
    pub const fn device_label(self) -> &'static str {
        match self {
            Self::Heat => "Wärmezähler",
            Self::WaterHot => "Warmwasserzähler",
            Self::WaterCold => "Kaltwasserzähler",
        }
    }

    /// Unit of the displayed consumption.
    #[must_use]
    pub const fn display_unit(self) -> &'static str {
        match self {
            Self::Heat => "MWh",
            Self::WaterHot | Self::WaterCold => "m³",
        }
    }
}

impl std::fmt::Display for Medium {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Heat => "heat",
            Self::WaterHot => "waterHot",
            Self::WaterCold => "waterCold",
        })
    }
}

/// A cumulative meter value on a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterReading {
    /// Reading date.
    pub date: NaiveDate,
    /// Cumulative counter value.
    pub value: Decimal,
}

/// The readings of one meter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterSeries {
    /// Device number.
    pub meter_number: String,
    /// Unit the meter is installed in; `None` for building meters.
    #[serde(default)]
    pub unit_id: Option<UnitId>,
    /// Metered medium.
    pub medium: Medium,
    /// Provider device type.
    #[serde(default)]
    pub device_type: Option<String>,
    /// Location inside the unit.
    #[serde(default)]
    pub location: Option<String>,
    /// Readings in any order.
    #[serde(default)]
    pub readings: Vec<MeterReading>,
}

/// Start, end and consumption of one meter over a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeterDelta {
    /// Value at the period start.
    pub start: Decimal,
    /// Value at the period end.
    pub end: Decimal,
    /// `max(0, end - start)`.
    pub delta: Decimal,
}

impl MeterSeries {
    /// Reduces the series to the period.
    ///
    /// The start value is the last reading on or before the period start (0 if
    /// none), the end value the last reading on or before the period end (the
    /// start value if none). A counter reset never yields negative consumption.
    #[must_use]
    pub fn delta(&self, period: &BillingPeriod) -> MeterDelta {
        let last_on_or_before = |date: NaiveDate| {
            self.readings
                .iter()
                .filter(|r| r.date <= date)
                .max_by_key(|r| r.date)
                .map(|r| r.value)
        };

        let start = last_on_or_before(period.start_date).unwrap_or(Decimal::ZERO);
        let end = last_on_or_before(period.end_date).unwrap_or(start);
        MeterDelta {
            start,
            end,
            delta: (end - start).max(Decimal::ZERO),
        }
    }
}

/// Period consumption per medium.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionTotals {
    /// Heat in kWh.
    pub heat_kwh: Decimal,
    /// Hot water in m³.
    pub water_hot_m3: Decimal,
    /// Cold water in m³.
    pub water_cold_m3: Decimal,
}

impl ConsumptionTotals {
    /// Consumption of `medium`.
    #[must_use]
    pub const fn get(&self, medium: Medium) -> Decimal {
        match medium {
            Medium::Heat => self.heat_kwh,
            Medium::WaterHot => self.water_hot_m3,
            Medium::WaterCold => self.water_cold_m3,
        }
    }

    /// Adds `amount` to `medium`.
    pub fn add(&mut self, medium: Medium, amount: Decimal) {
        match medium {
            Medium::Heat => self.heat_kwh += amount,
            Medium::WaterHot => self.water_hot_m3 += amount,
            Medium::WaterCold => self.water_cold_m3 += amount,
        }
    }

    /// Heat in MWh.
    #[must_use]
    pub fn heat_mwh(&self) -> Decimal {
        self.heat_kwh / Decimal::ONE_THOUSAND
    }
}

/// One device row of the unit statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceReadingRow {
    /// Device number.
    pub device_number: String,
    /// Device type label.
    pub device_type: String,
    /// Location inside the unit.
    pub location: String,
    /// Start value in display unit.
    pub start_reading: Decimal,
    /// `start_reading` formatted.
    pub start_reading_formatted: String,
    /// End value in display unit.
    pub end_reading: Decimal,
    /// `end_reading` formatted.
    pub end_reading_formatted: String,
    /// Consumption in display unit.
    pub consumption: Decimal,
    /// `consumption` formatted.
    pub consumption_formatted: String,
    /// Display unit ("MWh" or "m³").
    pub unit: String,
}
