//! Buildings, rental units, contracts and tenants.
//!
//! These are read-only snapshots handed to the engine by the data layer.
//! [`tenancy`] derives the prepayment and tenant facts of one unit.

pub mod tenancy;
pub mod types;

pub use tenancy::{TenancySummary, eligible_contracts, expected_prepayment};
pub use types::{Contract, Contractor, Owner, Property, Unit};
