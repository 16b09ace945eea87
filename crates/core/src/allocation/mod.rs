//! Pro-rata allocation of costs to a unit.
//!
//! Every cost category names an [`AllocationKey`]; [`AllocationService`]
//! turns a total into the unit's share for that key, and [`CostSplit`]
//! divides a heating pool into Grundkosten and Verbrauchskosten.

pub mod error;
pub mod key;
pub mod service;
pub mod split;

#[cfg(test)]
mod props;

pub use error::{AllocationConfigError, Denominator};
pub use key::AllocationKey;
pub use service::{AllocationBasis, AllocationService};
pub use split::{CostSplit, PoolSplit};
