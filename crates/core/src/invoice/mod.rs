//! Invoices, cost categories and cost-pool aggregation.

pub mod aggregation;
pub mod classify;
pub mod types;

#[cfg(test)]
mod props;

pub use aggregation::{CostAggregation, CostLine, EnergyLine, InvoiceAggregator, ReliefLine};
pub use classify::{CostPool, RentalPool, classify_cost_type, is_energy_relief, normalize_cost_type};
pub use types::{CostCategory, Invoice};
