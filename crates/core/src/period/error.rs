//! Billing period error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while constructing a billing period.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    /// Start date lies after end date.
    #[error("Invalid billing period: start {start} is after end {end}")]
    InvalidRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },
}
