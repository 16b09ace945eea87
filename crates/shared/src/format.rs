//! German-locale display formatting.
//!
//! The output of these functions is a fixed contract with the preview and PDF
//! renderers: `1.234,56 €`, `12,30`, `05.03.2023`. Renderers never format
//! numbers themselves.

use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString as _};
use rust_decimal::Decimal;

use crate::types::money::{MONEY_DP, round_dp};

/// Formats `value` with exactly `decimals` fraction digits, `.` as thousands
/// separator and `,` as decimal mark.
///
/// ```
/// use rust_decimal_macros::dec;
/// use abrechnung_shared::format_german_number;
///
/// assert_eq!(format_german_number(dec!(11196.4), 2), "11.196,40");
/// assert_eq!(format_german_number(dec!(1.7134114575), 6), "1,713411");
/// ```
#[must_use]
pub fn format_german_number(value: Decimal, decimals: u32) -> String {
    let rounded = round_dp(value, decimals);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let fixed = format!("{:.prec$}", rounded.abs(), prec = decimals as usize);
    let (integer_digits, fraction_digits) = fixed.split_once('.').unwrap_or((&fixed, ""));

    let integer_part = integer_digits
        .parse::<u128>()
        .map_or_else(|_| integer_digits.to_string(), |n| n.to_formatted_string(&Locale::de));

    let mut out = String::with_capacity(fixed.len() + 4);
    if negative {
        out.push('-');
    }
    out.push_str(&integer_part);
    if decimals > 0 {
        out.push(',');
        out.push_str(fraction_digits);
    }
    out
}

/// Formats a euro amount: `1.234,56 €`.
#[must_use]
pub fn format_euro(value: Decimal) -> String {
    format!("{} €", format_german_number(value, MONEY_DP))
}

/// Formats a calendar date as `DD.MM.YYYY`.
#[must_use]
pub fn format_date_german(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(1234.56), "1.234,56 €")]
    #[case(dec!(0), "0,00 €")]
    #[case(dec!(14318.13), "14.318,13 €")]
    #[case(dec!(-1234.5), "-1.234,50 €")]
    #[case(dec!(1234567.891), "1.234.567,89 €")]
    #[case(dec!(999.995), "1.000,00 €")]
    #[case(dec!(-0.001), "0,00 €")]
    fn test_format_euro(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(format_euro(value), expected);
    }

    #[rstest]
    #[case(dec!(12.3), 1, "12,3")]
    #[case(dec!(12.3), 2, "12,30")]
    #[case(dec!(9943.14), 2, "9.943,14")]
    #[case(dec!(761123), 0, "761.123")]
    #[case(dec!(0.2101), 5, "0,21010")]
    #[case(dec!(342201.087), 2, "342.201,09")]
    fn test_format_german_number(
        #[case] value: Decimal,
        #[case] decimals: u32,
        #[case] expected: &str,
    ) {
        assert_eq!(format_german_number(value, decimals), expected);
    }

    #[test]
    fn test_format_date_german() {
        let date = NaiveDate::from_ymd_opt(2023, 3, 5).unwrap();
        assert_eq!(format_date_german(date), "05.03.2023");
    }
}
