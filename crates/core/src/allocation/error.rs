//! Allocation error types.

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// The denominator an allocation divides by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Denominator {
    /// Σ living space of the property.
    TotalLivingSpace,
    /// Number of units in the property.
    UnitCount,
    /// Days in the billing period.
    PeriodDays,
    /// Building-wide measured consumption.
    TotalConsumption,
}

impl std::fmt::Display for Denominator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::TotalLivingSpace => "total living space",
            Self::UnitCount => "unit count",
            Self::PeriodDays => "period days",
            Self::TotalConsumption => "total consumption",
        };
        f.write_str(name)
    }
}

/// Errors in the allocation configuration or its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationConfigError {
    /// Living-space and consumption shares do not form a valid split of 100 %.
    #[error("Invalid allocation split: {living_space}% living space + {consumption}% consumption")]
    InvalidSplit {
        /// Living-space share in percent.
        living_space: Decimal,
        /// Consumption share in percent.
        consumption: Decimal,
    },

    /// An allocation would divide by zero.
    #[error("Allocation denominator is zero: {0}")]
    ZeroDenominator(Denominator),

    /// An intermediate product exceeds the decimal range.
    #[error("Allocation overflows the decimal range: {total} × {numerator} / {denominator}")]
    Overflow {
        /// Amount being allocated.
        total: Decimal,
        /// Unit-side factor.
        numerator: Decimal,
        /// Building-side divisor.
        denominator: Decimal,
    },
}
