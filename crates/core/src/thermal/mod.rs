//! Warm-water energy derivation and the Heizung / Warmwasser cost pools.

pub mod constants;
pub mod heating;
pub mod warm_water;

#[cfg(test)]
mod props;

pub use heating::HeatingRates;
pub use warm_water::{WarmWaterCosts, warm_water_energy_kwh};
