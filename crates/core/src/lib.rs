//! Cost-allocation and statement engine for Abrechnung.
//!
//! This crate contains pure calculation logic with ZERO web or database
//! dependencies. Callers fetch the records, the engine computes one
//! statement model per unit, and renderers draw it without recomputing.
//!
//! # Modules
//!
//! - `period` - Billing periods and tenancy overlap
//! - `property` - Properties, units, contracts and prepayments
//! - `allocation` - Allocation keys and pro-rata allocators
//! - `invoice` - Cost-type classification and cost pools
//! - `readings` - Meter-reading reduction
//! - `thermal` - Warm-water energy and the Heizung / Warmwasser split
//! - `water` - Cold-water rates
//! - `co2` - CO2KostAufG tier split
//! - `statement` - The statement model builder

pub mod allocation;
pub mod co2;
pub mod invoice;
pub mod period;
pub mod property;
pub mod readings;
pub mod statement;
pub mod thermal;
pub mod water;

pub use statement::{StatementBuilder, StatementError, StatementInput, StatementModel};
