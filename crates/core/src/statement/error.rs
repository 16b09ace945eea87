//! Statement error types.

use abrechnung_shared::AppError;
use abrechnung_shared::types::UnitId;
use thiserror::Error;

use crate::allocation::AllocationConfigError;
use crate::period::PeriodError;

/// A required input record is absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MissingInputError {
    /// No billing period selected.
    #[error("Missing input: billing period")]
    BillingPeriod,

    /// No property record.
    #[error("Missing input: property")]
    Property,

    /// The property has no units and the document names none.
    #[error("Missing input: no rental unit")]
    Units,

    /// The target unit is not part of the input.
    #[error("Missing input: unit {0}")]
    Unit(UnitId),

    /// The target unit has no contract at all.
    #[error("Missing input: contract for unit {0}")]
    Contract(UnitId),
}

/// Errors that stop statement generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatementError {
    /// A required record is absent.
    #[error(transparent)]
    MissingInput(#[from] MissingInputError),

    /// The allocation configuration or a denominator is invalid.
    #[error(transparent)]
    AllocationConfig(#[from] AllocationConfigError),

    /// The billing period is reversed.
    #[error(transparent)]
    InvalidPeriod(#[from] PeriodError),
}

impl From<StatementError> for AppError {
    fn from(err: StatementError) -> Self {
        match err {
            StatementError::MissingInput(e) => Self::NotFound(e.to_string()),
            StatementError::AllocationConfig(e) => Self::BusinessRule(e.to_string()),
            StatementError::InvalidPeriod(e) => Self::Validation(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::Denominator;

    #[test]
    fn test_maps_to_app_error() {
        let missing: AppError = StatementError::from(MissingInputError::Property).into();
        assert_eq!(missing.error_code(), "NOT_FOUND");
        assert_eq!(missing.to_string(), "Not found: Missing input: property");

        let config: AppError = StatementError::from(AllocationConfigError::ZeroDenominator(
            Denominator::TotalLivingSpace,
        ))
        .into();
        assert_eq!(config.exit_code(), 4);
    }
}
