//! Billing period type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::PeriodError;

/// The accounting window of a statement, both bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingPeriod {
    /// First day of the period.
    pub start_date: NaiveDate,
    /// Last day of the period.
    pub end_date: NaiveDate,
}

impl BillingPeriod {
    /// Creates a billing period.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::InvalidRange` if `start_date > end_date`.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self, PeriodError> {
        let period = Self {
            start_date,
            end_date,
        };
        period.validate()?;
        Ok(period)
    }

    /// Re-checks the ordering invariant, e.g. after deserialization.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::InvalidRange` if `start_date > end_date`.
    pub fn validate(&self) -> Result<(), PeriodError> {
        if self.start_date > self.end_date {
            return Err(PeriodError::InvalidRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }

    /// Returns true if the given date falls within this period.
    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Number of calendar days covered, counting both bounds.
    #[must_use]
    pub fn days(&self) -> u32 {
        let span = (self.end_date - self.start_date).num_days() + 1;
        u32::try_from(span).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_full_year_has_365_days() {
        let period = BillingPeriod::new(date(2023, 1, 1), date(2023, 12, 31)).unwrap();
        assert_eq!(period.days(), 365);
    }

    #[test]
    fn test_leap_year_has_366_days() {
        let period = BillingPeriod::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap();
        assert_eq!(period.days(), 366);
    }

    #[test]
    fn test_single_day_period() {
        let period = BillingPeriod::new(date(2023, 6, 1), date(2023, 6, 1)).unwrap();
        assert_eq!(period.days(), 1);
        assert!(period.contains_date(date(2023, 6, 1)));
        assert!(!period.contains_date(date(2023, 6, 2)));
    }

    #[test]
    fn test_reversed_period_rejected() {
        let result = BillingPeriod::new(date(2023, 12, 31), date(2023, 1, 1));
        assert!(matches!(result, Err(PeriodError::InvalidRange { .. })));
    }
}
