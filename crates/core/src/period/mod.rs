//! Billing periods and tenancy overlap.
//!
//! A statement always covers one closed [`BillingPeriod`]. Tenancies are
//! time-weighted against it in whole months (prepayments) or in days
//! (occupancy).

pub mod error;
pub mod overlap;
pub mod types;

#[cfg(test)]
mod props;

pub use error::PeriodError;
pub use overlap::{months_between, overlap_days, overlap_months};
pub use types::BillingPeriod;
