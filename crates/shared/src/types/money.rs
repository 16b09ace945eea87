//! Rounding rules for billing amounts.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Every amount, area, volume and energy quantity is a `rust_decimal::Decimal`.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places of a published euro amount.
pub const MONEY_DP: u32 = 2;

/// Decimal places of a published unit rate (€/m², €/m³, €/MWh).
pub const RATE_DP: u32 = 6;

/// Tolerance for reconciliation checks between independently rounded totals.
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(2, 0, 0, false, 2);

/// Rounds to `dp` decimal places, halves away from zero.
#[must_use]
pub fn round_dp(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds an amount to whole cents.
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    round_dp(value, MONEY_DP)
}

/// Rounds a unit rate to six decimal places.
#[must_use]
pub fn round_rate(value: Decimal) -> Decimal {
    round_dp(value, RATE_DP)
}

/// Returns true if `a` and `b` differ by at most `tolerance`.
#[must_use]
pub fn approx_eq(a: Decimal, b: Decimal, tolerance: Decimal) -> bool {
    (a - b).abs() <= tolerance
}
