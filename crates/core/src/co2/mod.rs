//! CO2 cost split between tenant and landlord (CO2KostAufG).
//!
//! The building's emission per m² and year selects one of ten fixed
//! [`Co2Tier`]s; the tier's percentages split the CO2 levy.

pub mod service;
pub mod tiers;

#[cfg(test)]
mod props;

pub use service::{Co2Allocation, Co2Service, Co2Split, emission_factor_for};
pub use tiers::{CO2_TIERS, Co2Tier, classify};
