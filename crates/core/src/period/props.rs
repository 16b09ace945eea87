//! Property-based tests for tenancy overlap.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use super::overlap::{overlap_days, overlap_months};
use super::types::BillingPeriod;

/// Strategy for dates between 2015-01-01 and roughly 2034.
fn any_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..7000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2015, 1, 1).unwrap_or_default() + Duration::days(offset)
    })
}

/// Strategy for an ordered pair of dates.
fn ordered_pair() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (any_date(), 0i64..2000).prop_map(|(start, len)| (start, start + Duration::days(len)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Months of overlap never exceed the months spanned by the period.
    #[test]
    fn prop_overlap_bounded_by_period(
        (rental_start, rental_end) in ordered_pair(),
        (period_start, period_end) in ordered_pair(),
    ) {
        let period = BillingPeriod::new(period_start, period_end).unwrap();
        let full = overlap_months(period_start, period_end, &period);
        prop_assert!(overlap_months(rental_start, rental_end, &period) <= full);
    }

    /// Disjoint intervals yield zero months and zero days.
    #[test]
    fn prop_disjoint_yields_zero(
        (period_start, period_end) in ordered_pair(),
        gap in 1i64..500,
        len in 0i64..500,
    ) {
        let period = BillingPeriod::new(period_start, period_end).unwrap();

        let before_end = period_start - Duration::days(gap);
        let before_start = before_end - Duration::days(len);
        prop_assert_eq!(overlap_months(before_start, before_end, &period), 0);
        prop_assert_eq!(overlap_days(before_start, Some(before_end), &period), 0);

        let after_start = period_end + Duration::days(gap);
        let after_end = after_start + Duration::days(len);
        prop_assert_eq!(overlap_months(after_start, after_end, &period), 0);
        prop_assert_eq!(overlap_days(after_start, Some(after_end), &period), 0);
    }

    /// Intersecting intervals always count at least one month.
    #[test]
    fn prop_intersecting_counts_at_least_one(
        (period_start, period_end) in ordered_pair(),
        before in 0i64..400,
        after in 0i64..400,
    ) {
        let period = BillingPeriod::new(period_start, period_end).unwrap();
        let rental_start = period_start - Duration::days(before);
        let rental_end = period_start + Duration::days(after);
        prop_assert!(overlap_months(rental_start, rental_end, &period) >= 1);
        prop_assert!(overlap_days(rental_start, Some(rental_end), &period) >= 1);
    }

    /// Overlap days never exceed the period length.
    #[test]
    fn prop_overlap_days_bounded(
        (rental_start, rental_end) in ordered_pair(),
        (period_start, period_end) in ordered_pair(),
        open_ended in any::<bool>(),
    ) {
        let period = BillingPeriod::new(period_start, period_end).unwrap();
        let end = (!open_ended).then_some(rental_end);
        prop_assert!(overlap_days(rental_start, end, &period) <= period.days());
    }
}
