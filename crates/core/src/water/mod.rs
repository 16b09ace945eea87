//! Cold-water and wastewater rates.

pub mod rates;
pub mod subtype;

pub use rates::{ColdWaterRateItem, ColdWaterRates, UnitColdWaterLine};
pub use subtype::{ColdWaterSubtype, RateBasis};
