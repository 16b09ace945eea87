//! Meter readings reduced to period consumption.

pub mod reducer;
pub mod types;

pub use reducer::{ReadingsReducer, ReadingsSummary};
pub use types::{ConsumptionTotals, DeviceReadingRow, Medium, MeterDelta, MeterReading, MeterSeries};
