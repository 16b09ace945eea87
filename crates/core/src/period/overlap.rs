//! Tenancy/period overlap in whole months and in days.

use chrono::{Datelike, NaiveDate};

use super::types::BillingPeriod;

/// Whole calendar months from `start` to `end`.
///
/// A month only counts once the day-of-month of `start` is reached again,
/// except that the last day of a month always completes it
/// (`2023-01-31 → 2023-02-28` is one month). Returns 0 when `end < start`.
#[must_use]
pub fn months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    if end < start {
        return 0;
    }

    let mut months = (i64::from(end.year()) - i64::from(start.year())) * 12
        + i64::from(end.month0())
        - i64::from(start.month0());
    if end.day() < start.day() && !is_last_day_of_month(end) {
        months -= 1;
    }

    u32::try_from(months).unwrap_or(0)
}

/// Months of a tenancy `[rental_start, rental_end]` that fall into `period`,
/// counting both partial boundary months.
///
/// Returns 0 when the intervals do not intersect.
///
/// ```
/// use chrono::NaiveDate;
/// use abrechnung_core::period::{BillingPeriod, overlap_months};
///
/// let d = |m, day| NaiveDate::from_ymd_opt(2023, m, day).unwrap();
/// let period = BillingPeriod::new(d(1, 1), d(12, 31)).unwrap();
/// assert_eq!(overlap_months(d(4, 1), d(9, 30), &period), 6);
/// ```
#[must_use]
pub fn overlap_months(rental_start: NaiveDate, rental_end: NaiveDate, period: &BillingPeriod) -> u32 {
    if rental_end < period.start_date || rental_start > period.end_date || rental_end < rental_start {
        return 0;
    }

    let from = rental_start.max(period.start_date);
    let to = rental_end.min(period.end_date);
    months_between(from, to) + 1
}

/// Days of a tenancy that fall into `period`, both bounds inclusive.
///
/// An open-ended tenancy (`rental_end = None`) runs through the period end.
#[must_use]
pub fn overlap_days(
    rental_start: NaiveDate,
    rental_end: Option<NaiveDate>,
    period: &BillingPeriod,
) -> u32 {
    let from = rental_start.max(period.start_date);
    let to = rental_end.map_or(period.end_date, |end| end.min(period.end_date));
    if to < from {
        return 0;
    }
    u32::try_from((to - from).num_days() + 1).unwrap_or(0)
}

fn is_last_day_of_month(date: NaiveDate) -> bool {
    date.succ_opt().is_none_or(|next| next.month() != date.month())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn year_2023() -> BillingPeriod {
        BillingPeriod::new(date(2023, 1, 1), date(2023, 12, 31)).unwrap()
    }

    #[rstest]
    #[case(date(2023, 1, 1), date(2023, 12, 31), 11)]
    #[case(date(2023, 1, 15), date(2023, 2, 14), 0)]
    #[case(date(2023, 1, 15), date(2023, 2, 15), 1)]
    #[case(date(2023, 1, 31), date(2023, 2, 28), 1)]
    #[case(date(2022, 11, 1), date(2023, 2, 1), 3)]
    #[case(date(2023, 5, 1), date(2023, 4, 1), 0)]
    fn test_months_between(#[case] start: NaiveDate, #[case] end: NaiveDate, #[case] expected: u32) {
        assert_eq!(months_between(start, end), expected);
    }

    #[test]
    fn test_full_year_tenancy_overlaps_twelve_months() {
        assert_eq!(overlap_months(date(2020, 1, 1), date(2023, 12, 31), &year_2023()), 12);
    }

    #[test]
    fn test_tenancy_clipped_to_period() {
        // 2022-06-01..2023-03-31 only counts Jan..Mar
        assert_eq!(overlap_months(date(2022, 6, 1), date(2023, 3, 31), &year_2023()), 3);
    }

    #[test]
    fn test_disjoint_tenancies_have_no_overlap() {
        assert_eq!(overlap_months(date(2021, 1, 1), date(2022, 12, 31), &year_2023()), 0);
        assert_eq!(overlap_months(date(2024, 1, 1), date(2024, 6, 30), &year_2023()), 0);
    }

    #[test]
    fn test_overlap_days_open_ended() {
        assert_eq!(overlap_days(date(2023, 7, 1), None, &year_2023()), 184);
        assert_eq!(overlap_days(date(2019, 7, 1), None, &year_2023()), 365);
    }

    #[test]
    fn test_overlap_days_disjoint() {
        assert_eq!(overlap_days(date(2024, 2, 1), None, &year_2023()), 0);
        assert_eq!(overlap_days(date(2021, 1, 1), Some(date(2022, 1, 1)), &year_2023()), 0);
    }
}
